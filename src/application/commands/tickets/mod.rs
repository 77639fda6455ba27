// src/application/commands/tickets/mod.rs
mod create;
mod delete;
mod fields;
mod service;
mod update;

pub use create::CreateTicketCommand;
pub use delete::DeleteTicketCommand;
pub use fields::TicketInput;
pub use service::TicketCommandService;
pub use update::UpdateTicketCommand;
