//! Profilecard - Profile endpoint enriched with an external fact
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod facts;
pub mod profile;
pub mod server;
