//! Shared helpers for the integration tests.
//!
//! Every test binary pulls this module in separately; helpers one file
//! doesn't touch would otherwise trip dead-code warnings.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::Workspace;
