//! Adapter implementations of the task gateway port.
//!
//! - [`http`]: reqwest client for the REST task resource
//! - [`memory`]: in-process resource with failure injection for tests

pub mod http;
pub mod memory;
