//! Domain building blocks for the estate record service.
//!
//! This crate has **zero database dependencies**: shared types, the error
//! taxonomy, entity keys, field schemas and the patch engine all operate
//! purely in memory so the db and api crates can share them.

pub mod credentials;
pub mod error;
pub mod field;
pub mod key;
pub mod patch;
pub mod types;
