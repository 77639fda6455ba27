use super::BoardCommandService;
use crate::{
    application::{
        dto::BoardDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::board::{BoardId, BoardName, BoardUpdate},
};

pub struct RenameBoardCommand {
    pub id: i64,
    pub name: String,
}

impl BoardCommandService {
    /// Changes the display name only; the slug stays what it was at creation.
    pub async fn rename_board(&self, command: RenameBoardCommand) -> ApplicationResult<BoardDto> {
        let id = BoardId::new(command.id)?;
        let mut board = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("board not found"))?;

        let name = BoardName::new(command.name)?;
        board.rename(name, self.clock.now());

        let updated = self.write_repo.update(BoardUpdate::from(&board)).await?;
        Ok(updated.into())
    }
}
