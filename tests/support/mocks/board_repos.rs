// tests/support/mocks/board_repos.rs
use async_trait::async_trait;
use std::sync::Mutex;
use tickets_machine::domain::board::{
    Board, BoardId, BoardReadRepository, BoardSlug, BoardUpdate, BoardWriteRepository, NewBoard,
};
use tickets_machine::domain::errors::{DomainError, DomainResult};

/// メモリ上のボードストア（読み書き両方を実装）
#[derive(Default)]
pub struct InMemoryBoards {
    boards: Mutex<Vec<Board>>,
}

impl InMemoryBoards {
    pub fn slugs(&self) -> Vec<String> {
        self.boards
            .lock()
            .unwrap()
            .iter()
            .map(|b| b.slug.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl BoardWriteRepository for InMemoryBoards {
    async fn insert(&self, board: NewBoard) -> DomainResult<Board> {
        let slug = board
            .slug
            .ok_or_else(|| DomainError::Validation("slug must be assigned before insert".into()))?;
        let mut boards = self.boards.lock().unwrap();
        // ストレージの一意制約を模倣
        if boards.iter().any(|b| b.slug == slug) {
            return Err(DomainError::DuplicateSlug(slug.as_str().to_string()));
        }
        let stored = Board {
            id: BoardId::new(boards.len() as i64 + 1)?,
            name: board.name,
            slug,
            created_at: board.created_at,
            updated_at: board.updated_at,
        };
        boards.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: BoardUpdate) -> DomainResult<Board> {
        let mut boards = self.boards.lock().unwrap();
        let board = boards
            .iter_mut()
            .find(|b| b.id == update.id)
            .ok_or_else(|| DomainError::NotFound("board not found".into()))?;
        board.rename(update.name, update.updated_at);
        Ok(board.clone())
    }

    async fn delete(&self, id: BoardId) -> DomainResult<()> {
        let mut boards = self.boards.lock().unwrap();
        let before = boards.len();
        boards.retain(|b| b.id != id);
        if boards.len() == before {
            return Err(DomainError::NotFound("board not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BoardReadRepository for InMemoryBoards {
    async fn find_by_id(&self, id: BoardId) -> DomainResult<Option<Board>> {
        Ok(self.boards.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &BoardSlug) -> DomainResult<Option<Board>> {
        Ok(self
            .boards
            .lock()
            .unwrap()
            .iter()
            .find(|b| &b.slug == slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Board>> {
        let mut boards = self.boards.lock().unwrap().clone();
        boards.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(boards)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.boards.lock().unwrap().len() as u64)
    }
}
