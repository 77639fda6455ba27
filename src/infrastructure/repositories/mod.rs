// src/infrastructure/repositories/mod.rs
pub mod error;
mod sqlite_agent;
mod sqlite_board;
mod sqlite_ticket;

pub use sqlite_agent::{SqliteAgentGroupRepository, SqliteAgentRepository};
pub use sqlite_board::{SqliteBoardReadRepository, SqliteBoardWriteRepository};
pub use sqlite_ticket::{SqliteTicketReadRepository, SqliteTicketWriteRepository};
