// src/domain/board/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::text;
use std::fmt;

pub const BOARD_NAME_MAX_CHARS: usize = 100;
pub const BOARD_SLUG_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardId(pub i64);

impl BoardId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("board id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<BoardId> for i64 {
    fn from(value: BoardId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardName(String);

impl BoardName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        text::required("name", value.into(), BOARD_NAME_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BoardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BoardName> for String {
    fn from(value: BoardName) -> Self {
        value.0
    }
}

/// URL-safe board identifier: lowercase ASCII letters, digits and single
/// interior hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSlug(String);

impl BoardSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > BOARD_SLUG_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "slug must be at most {BOARD_SLUG_MAX_CHARS} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, digits and hyphens".into(),
            ));
        }
        if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::Validation(
                "slug hyphens must separate words".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BoardSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BoardSlug> for String {
    fn from(value: BoardSlug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_normalized_values() {
        assert!(BoardSlug::new("pre-production").is_ok());
        assert!(BoardSlug::new("board-2").is_ok());
    }

    #[test]
    fn slug_rejects_unnormalized_values() {
        for raw in ["", "Pre-Production", "pre production", "-pre", "pre-", "pre--prod"] {
            assert!(BoardSlug::new(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn name_must_not_be_blank() {
        assert!(BoardName::new("  ").is_err());
        assert_eq!(BoardName::new("Pre-Production").unwrap().as_str(), "Pre-Production");
    }

    #[test]
    fn board_id_must_be_positive() {
        assert!(BoardId::new(0).is_err());
        assert_eq!(i64::from(BoardId::new(7).unwrap()), 7);
    }
}
