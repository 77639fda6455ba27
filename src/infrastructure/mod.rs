pub mod database;
pub mod repositories;
pub mod time;
pub mod util;

use crate::application::services::ApplicationServices;
use repositories::{
    SqliteAgentGroupRepository, SqliteAgentRepository, SqliteBoardReadRepository,
    SqliteBoardWriteRepository, SqliteTicketReadRepository, SqliteTicketWriteRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application services over SQLite storage, the system clock and the
/// `slug`-crate generator.
pub fn sqlite_services(pool: &Arc<SqlitePool>) -> ApplicationServices {
    ApplicationServices::new(
        Arc::new(SqliteBoardWriteRepository::new(Arc::clone(pool))),
        Arc::new(SqliteBoardReadRepository::new(Arc::clone(pool))),
        Arc::new(SqliteTicketWriteRepository::new(Arc::clone(pool))),
        Arc::new(SqliteTicketReadRepository::new(Arc::clone(pool))),
        Arc::new(SqliteAgentRepository::new(Arc::clone(pool))),
        Arc::new(SqliteAgentGroupRepository::new(Arc::clone(pool))),
        Arc::new(time::SystemClock),
        Arc::new(util::DefaultSlugGenerator),
    )
}
