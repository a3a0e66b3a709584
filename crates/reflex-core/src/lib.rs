//! Reflex Core - Foundational types for the Reflex reaction game
//!
//! This crate provides the types every other Reflex crate depends on:
//! - `TargetId` - Stable identifiers for pickable targets
//! - `GameConfig` - Tunable game constants, loadable from TOML
//! - Error types and Result alias

mod config;
mod error;
mod id;

pub use config::{GameConfig, MAX_TARGETS};
pub use error::{ReflexError, Result};
pub use id::TargetId;
