use crate::domain::errors::DomainError;

const BOARD_SLUG_COLUMN: &str = "boards.slug";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                // SQLite reports the offending column, not the constraint name.
                if db_err.message().contains(BOARD_SLUG_COLUMN) {
                    return DomainError::DuplicateSlug("slug already exists".into());
                }
                return DomainError::Conflict("unique constraint violated".into());
            }
            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }
            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
