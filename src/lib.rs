//! Brave Pink - duotone recoloring host
//!
//! Loads raw RGBA images into a capped working buffer, applies the
//! `duotone` transform on demand, and writes the result back out.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
