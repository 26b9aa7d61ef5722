//! Task tracking for Taskboard.
//!
//! This module validates task form input, talks to the remote task resource,
//! and reconciles the local task list with server confirmations. Local state
//! only changes after the server confirms a create, update or delete; a failed
//! list request leaves the board empty in degraded mode. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Field rules and form state in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Display projection in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;
