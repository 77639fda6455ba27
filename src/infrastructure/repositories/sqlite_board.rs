use crate::domain::board::{
    Board, BoardId, BoardName, BoardReadRepository, BoardSlug, BoardUpdate, BoardWriteRepository,
    NewBoard,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const BOARD_COLUMNS: &str = "id, name, slug, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteBoardWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteBoardWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteBoardReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteBoardReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BoardRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BoardRow> for Board {
    type Error = DomainError;

    fn try_from(row: BoardRow) -> Result<Self, Self::Error> {
        Ok(Board {
            id: BoardId::new(row.id)?,
            name: BoardName::new(row.name)?,
            slug: BoardSlug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BoardWriteRepository for SqliteBoardWriteRepository {
    async fn insert(&self, board: NewBoard) -> DomainResult<Board> {
        let NewBoard {
            name,
            slug,
            created_at,
            updated_at,
        } = board;
        let slug = slug.ok_or_else(|| {
            DomainError::Validation("board slug must be assigned before insert".into())
        })?;

        let row = sqlx::query_as::<_, BoardRow>(&format!(
            "INSERT INTO boards (name, slug, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING {BOARD_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Board::try_from(row)
    }

    async fn update(&self, update: BoardUpdate) -> DomainResult<Board> {
        let BoardUpdate {
            id,
            name,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, BoardRow>(&format!(
            "UPDATE boards SET name = ?, updated_at = ? WHERE id = ? RETURNING {BOARD_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("board not found".into()))?;

        Board::try_from(row)
    }

    async fn delete(&self, id: BoardId) -> DomainResult<()> {
        sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl BoardReadRepository for SqliteBoardReadRepository {
    async fn find_by_id(&self, id: BoardId) -> DomainResult<Option<Board>> {
        let row = sqlx::query_as::<_, BoardRow>(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Board::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &BoardSlug) -> DomainResult<Option<Board>> {
        let row = sqlx::query_as::<_, BoardRow>(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Board::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Board>> {
        let rows = sqlx::query_as::<_, BoardRow>(&format!(
            "SELECT {BOARD_COLUMNS} FROM boards ORDER BY name COLLATE NOCASE, id"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Board::try_from).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM boards")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}
