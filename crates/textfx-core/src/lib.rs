//! textfx Core
//!
//! Shared plumbing for the textfx crates: logging setup, profiling scopes and math types.

pub mod logging;
pub mod math;
pub mod profiling;
