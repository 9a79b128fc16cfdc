//! Profilecard-Common: Shared types and utilities.
//!
//! This crate provides the data model served by profilecard:
//!
//! - **Profile**: The [`ProfileRecord`] identifying the card owner
//! - **Envelope**: The [`ResponseEnvelope`] returned by the profile endpoint
//! - **Facts**: [`FactOutcome`] and the fallback texts substituted on failure
//! - **Time**: ISO-8601 UTC timestamp formatting with a `Z` designator
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use profilecard_common::{FactOutcome, ProfileRecord, ResponseEnvelope};
//! use profilecard_common::time::now_timestamp;
//!
//! let envelope = ResponseEnvelope::success(
//!     ProfileRecord::default(),
//!     FactOutcome::Missing.into_text(),
//!     now_timestamp(),
//! );
//!
//! assert!(envelope.validate().is_ok());
//! assert_eq!(envelope.fact, "Could not get a cat fact.");
//! ```

pub mod error;
pub mod time;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
