//! Profile, fact and envelope types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::time::parse_timestamp;

/// Substituted when the fact provider cannot be reached, times out, answers
/// with a non-success status or sends a body that is not a JSON object.
pub const NETWORK_ERROR_FACT: &str = "Failed to fetch the cat fact due to a network error.";

/// Substituted when the fact provider answers but the body has no fact.
pub const MISSING_FACT: &str = "Could not get a cat fact.";

pub const DEFAULT_NAME: &str = "Iremide Joseph Adeyanju";
pub const DEFAULT_EMAIL: &str = "iremideadeyanju9@gmail.com";
pub const DEFAULT_STACK: &str = "Python/Django";

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Identity of the card owner. Fixed at deploy time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub stack: String,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            stack: DEFAULT_STACK.to_string(),
        }
    }
}

impl ProfileRecord {
    /// Check that every field carries a non-blank value.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("stack", &self.stack),
        ] {
            if value.trim().is_empty() {
                return Err(Error::invalid_input(format!("profile {field} is empty")));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Facts
// ---------------------------------------------------------------------------

/// What came back from one attempt to fetch a fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactOutcome {
    /// The provider answered with a usable fact.
    Fetched(String),
    /// The provider answered, but without a `fact` field.
    Missing,
    /// The provider could not be reached or its answer was unusable.
    Unreachable,
}

impl FactOutcome {
    /// Build an outcome from an optional fact, treating blank text as missing.
    pub fn from_field(fact: Option<String>) -> Self {
        match fact {
            Some(text) if !text.trim().is_empty() => Self::Fetched(text),
            _ => Self::Missing,
        }
    }

    /// Text placed in the envelope. Never empty.
    pub fn into_text(self) -> String {
        match self {
            Self::Fetched(text) => text,
            Self::Missing => MISSING_FACT.to_string(),
            Self::Unreachable => NETWORK_ERROR_FACT.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
}

/// Top-level JSON body of the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status: EnvelopeStatus,
    pub user: ProfileRecord,
    pub timestamp: String,
    pub fact: String,
}

impl ResponseEnvelope {
    pub fn success(user: ProfileRecord, fact: String, timestamp: String) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            user,
            timestamp,
            fact,
        }
    }

    /// Check the envelope invariants: a valid profile, a non-empty fact and
    /// a `Z`-suffixed ISO-8601 timestamp.
    pub fn validate(&self) -> Result<()> {
        self.user.validate()?;
        if self.fact.is_empty() {
            return Err(Error::EmptyFact);
        }
        parse_timestamp(&self.timestamp)?;
        Ok(())
    }
}
