pub mod agents;
pub mod boards;
pub mod tickets;
