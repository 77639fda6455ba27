// src/domain/board/hooks.rs
use std::sync::Arc;

use crate::domain::board::entity::{Board, BoardUpdate, NewBoard};
use crate::domain::board::repository::BoardWriteRepository;
use crate::domain::board::value_objects::BoardId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Runs against a board right before its first write. Hooks may fill in
/// derived fields or reject the board; they never run on updates.
#[async_trait]
pub trait BoardSaveHook: Send + Sync {
    async fn before_save(&self, board: &mut NewBoard) -> DomainResult<()>;
}

/// Write repository decorator that runs registered [`BoardSaveHook`]s, in
/// registration order, before delegating an insert.
pub struct HookedBoardWriteRepository {
    inner: Arc<dyn BoardWriteRepository>,
    hooks: Vec<Arc<dyn BoardSaveHook>>,
}

impl HookedBoardWriteRepository {
    pub fn new(inner: Arc<dyn BoardWriteRepository>) -> Self {
        Self {
            inner,
            hooks: Vec::new(),
        }
    }

    pub fn with_hook(mut self, hook: Arc<dyn BoardSaveHook>) -> Self {
        self.hooks.push(hook);
        self
    }
}

#[async_trait]
impl BoardWriteRepository for HookedBoardWriteRepository {
    async fn insert(&self, mut board: NewBoard) -> DomainResult<Board> {
        for hook in &self.hooks {
            hook.before_save(&mut board).await?;
        }
        self.inner.insert(board).await
    }

    async fn update(&self, update: BoardUpdate) -> DomainResult<Board> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: BoardId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
