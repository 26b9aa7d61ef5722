//! Step definitions for task board scenarios.

pub mod world;

mod given;
mod then;
mod when;
