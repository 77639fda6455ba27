use crate::application::dto::TicketDto;
use crate::domain::board::Board;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BoardDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Board> for BoardDto {
    fn from(board: Board) -> Self {
        Self {
            id: board.id.into(),
            name: board.name.into_inner(),
            slug: board.slug.into_inner(),
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}

/// A board together with the tickets filed on it, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BoardDetailDto {
    pub board: BoardDto,
    pub tickets: Vec<TicketDto>,
}
