use crate::domain::board::entity::{Board, BoardUpdate, NewBoard};
use crate::domain::board::value_objects::{BoardId, BoardSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait BoardWriteRepository: Send + Sync {
    async fn insert(&self, board: NewBoard) -> DomainResult<Board>;
    async fn update(&self, update: BoardUpdate) -> DomainResult<Board>;
    async fn delete(&self, id: BoardId) -> DomainResult<()>;
}

#[async_trait]
pub trait BoardReadRepository: Send + Sync {
    async fn find_by_id(&self, id: BoardId) -> DomainResult<Option<Board>>;
    async fn find_by_slug(&self, slug: &BoardSlug) -> DomainResult<Option<Board>>;
    async fn list(&self) -> DomainResult<Vec<Board>>;
    async fn count(&self) -> DomainResult<u64>;
}
