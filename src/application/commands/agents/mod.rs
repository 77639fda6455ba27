mod create;
mod service;

pub use create::{CreateAgentCommand, CreateAgentGroupCommand};
pub use service::AgentCommandService;
