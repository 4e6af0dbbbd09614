//! Store implementations.
//!
//! Only the in-memory store exists; records live as long as the process.

pub mod memory_repo;
