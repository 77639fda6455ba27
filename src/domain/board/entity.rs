// src/domain/board/entity.rs
use crate::domain::board::value_objects::{BoardId, BoardName, BoardSlug};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Board {
    pub id: BoardId,
    pub name: BoardName,
    pub slug: BoardSlug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Renames the board. The slug assigned at creation is kept.
    pub fn rename(&mut self, name: BoardName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

/// A board that has not been persisted yet. `slug` stays `None` until a
/// save hook assigns one.
#[derive(Debug, Clone)]
pub struct NewBoard {
    pub name: BoardName,
    pub slug: Option<BoardSlug>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewBoard {
    pub fn new(name: BoardName, now: DateTime<Utc>) -> Self {
        Self {
            name,
            slug: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_slug(mut self, slug: BoardSlug) -> Self {
        self.slug = Some(slug);
        self
    }
}

#[derive(Debug, Clone)]
pub struct BoardUpdate {
    pub id: BoardId,
    pub name: BoardName,
    pub updated_at: DateTime<Utc>,
}

impl From<&Board> for BoardUpdate {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id,
            name: board.name.clone(),
            updated_at: board.updated_at,
        }
    }
}
