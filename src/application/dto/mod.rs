pub mod agents;
pub mod boards;
pub mod tickets;

pub use agents::{AgentDto, AgentGroupDto};
pub use boards::{BoardDetailDto, BoardDto};
pub use tickets::{TicketDeletedDto, TicketDto};
