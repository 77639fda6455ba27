// src/domain/text.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Checks a required single-line field: not blank and at most `max_chars` long.
pub(crate) fn required(field: &str, value: String, max_chars: usize) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    bounded(field, value, max_chars)
}

/// Optional fields may be blank, but are still length-checked.
pub(crate) fn bounded(field: &str, value: String, max_chars: usize) -> DomainResult<String> {
    if value.chars().count() > max_chars {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_value_is_rejected() {
        let err = required("subject", "   ".into(), 10).unwrap_err();
        assert_eq!(err.to_string(), "validation error: subject cannot be empty");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(bounded("tags", "ééé".into(), 3).is_ok());
        assert!(bounded("tags", "éééé".into(), 3).is_err());
    }
}
