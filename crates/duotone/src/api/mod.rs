//! Public API for the duotone crate.
//!
//! This module provides the high-level API: [`Duotone`] builder and
//! [`DuotoneError`] unified error type.

mod builder;
mod error;

pub use builder::{Duotone, BRAVE_PINK, HERO_GREEN};
pub use error::DuotoneError;
