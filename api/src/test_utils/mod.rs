//! Test utilities
//!
//! Test fixtures shared by the unit and HTTP-level tests.
//! The in-memory adapter is the real storage, so no mock ports are needed.

pub mod fixtures;

pub use fixtures::*;
