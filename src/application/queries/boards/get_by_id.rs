use super::BoardQueryService;
use crate::{
    application::{
        dto::BoardDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::board::BoardId,
};

pub struct GetBoardByIdQuery {
    pub id: i64,
}

impl BoardQueryService {
    pub async fn get_board_by_id(&self, query: GetBoardByIdQuery) -> ApplicationResult<BoardDto> {
        let id = BoardId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("board not found"))
    }
}
