use super::BoardCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::board::BoardId,
};

pub struct DeleteBoardCommand {
    pub id: i64,
}

impl BoardCommandService {
    pub async fn delete_board(&self, command: DeleteBoardCommand) -> ApplicationResult<()> {
        let id = BoardId::new(command.id)?;
        let board = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("board not found"))?;

        self.write_repo.delete(board.id).await?;
        tracing::info!(board_id = board.id.0, slug = %board.slug, "board deleted");
        Ok(())
    }
}
