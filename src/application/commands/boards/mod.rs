// src/application/commands/boards/mod.rs
mod create;
mod delete;
mod rename;
mod service;

pub use create::CreateBoardCommand;
pub use delete::DeleteBoardCommand;
pub use rename::RenameBoardCommand;
pub use service::BoardCommandService;
