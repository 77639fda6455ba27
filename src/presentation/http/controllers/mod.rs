// src/presentation/http/controllers/mod.rs
pub mod agents;
pub mod boards;
pub mod tickets;
