//! Core data types and structures
//!
//! This module contains the fundamental data types used throughout
//! approval-reporters, separated from the resolution logic.

pub mod types;

pub use types::*;
