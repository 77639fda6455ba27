// src/domain/mod.rs
pub mod agent;
pub mod board;
pub mod errors;
pub mod text;
pub mod ticket;
