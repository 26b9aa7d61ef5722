//! Taskboard: a task-tracking client over a REST task resource.
//!
//! This crate validates task form input, persists task records through a
//! remote JSON API, and keeps a local task list consistent with the server.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: task records, identifiers and value types
//! - **Validation**: pure field rules and the form that aggregates them
//! - **Ports**: the remote task gateway contract and its wire payloads
//! - **Adapters**: HTTP and in-memory gateway implementations
//! - **Services**: the board that owns the task list and edit cursor
//!
//! # Modules
//!
//! - [`task`]: task domain, validation, gateway, board and view projection
//! - [`config`]: environment-driven client configuration
//! - [`telemetry`]: tracing subscriber setup for binaries

pub mod config;
pub mod task;
pub mod telemetry;
