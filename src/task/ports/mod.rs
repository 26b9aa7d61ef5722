//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by the board service:
//! the remote task gateway and the JSON records it exchanges.

pub mod gateway;
pub mod payload;

pub use gateway::{GatewayError, GatewayOperation, GatewayResult, ListQuery, TaskGateway};
pub use payload::{RemoteIds, TaskPayload};
