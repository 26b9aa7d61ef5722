//! In-memory gateway adapter.

mod gateway;

pub use gateway::InMemoryTaskGateway;
