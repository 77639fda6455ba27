// src/application/commands/boards/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::board::{BoardReadRepository, BoardWriteRepository},
};

pub struct BoardCommandService {
    pub(super) write_repo: Arc<dyn BoardWriteRepository>,
    pub(super) read_repo: Arc<dyn BoardReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BoardCommandService {
    /// `write_repo` is expected to run the board save hooks (slug
    /// assignment) on insert.
    pub fn new(
        write_repo: Arc<dyn BoardWriteRepository>,
        read_repo: Arc<dyn BoardReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}
