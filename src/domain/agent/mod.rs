pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Agent, AgentGroup, NewAgent, NewAgentGroup};
pub use repository::{AgentGroupRepository, AgentRepository};
pub use value_objects::{AgentGroupId, AgentId, DisplayName, ZendeskRef};
