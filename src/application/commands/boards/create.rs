// src/application/commands/boards/create.rs
use super::BoardCommandService;
use crate::{
    application::{dto::BoardDto, error::ApplicationResult},
    domain::board::{BoardName, BoardSlug, NewBoard},
};

pub struct CreateBoardCommand {
    pub name: String,
    /// Explicit slug. `None` or an empty string lets the save hook derive one.
    pub slug: Option<String>,
}

impl BoardCommandService {
    pub async fn create_board(&self, command: CreateBoardCommand) -> ApplicationResult<BoardDto> {
        let name = BoardName::new(command.name)?;
        let slug = command
            .slug
            .filter(|s| !s.is_empty())
            .map(BoardSlug::new)
            .transpose()?;

        let mut new_board = NewBoard::new(name, self.clock.now());
        if let Some(slug) = slug {
            new_board = new_board.with_slug(slug);
        }

        let created = self.write_repo.insert(new_board).await?;
        tracing::info!(board_id = created.id.0, slug = %created.slug, "board created");
        Ok(created.into())
    }
}
