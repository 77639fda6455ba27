use super::BoardQueryService;
use crate::{
    application::{
        dto::{BoardDetailDto, BoardDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::board::{Board, BoardSlug},
};

pub struct GetBoardBySlugQuery {
    pub slug: String,
}

impl BoardQueryService {
    async fn find_by_slug(&self, query: GetBoardBySlugQuery) -> ApplicationResult<Board> {
        // A malformed slug can never match a stored one.
        let slug = BoardSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("board not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("board not found"))
    }

    pub async fn get_board_by_slug(&self, query: GetBoardBySlugQuery) -> ApplicationResult<BoardDto> {
        self.find_by_slug(query).await.map(Into::into)
    }

    pub async fn get_board_detail(
        &self,
        query: GetBoardBySlugQuery,
    ) -> ApplicationResult<BoardDetailDto> {
        let board = self.find_by_slug(query).await?;
        let tickets = self.ticket_repo.list_by_board(board.id).await?;

        Ok(BoardDetailDto {
            board: board.into(),
            tickets: tickets.into_iter().map(Into::into).collect(),
        })
    }
}
