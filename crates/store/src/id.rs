//! Record identifiers.
//!
//! Every stored record is keyed by a [`RecordId`]: 24 lowercase hexadecimal
//! characters, assigned by the store at creation time and immutable
//! thereafter. The format matches the identifiers the service has always
//! handed out, so `"000000000000000000000000"` is well-formed (though almost
//! certainly unassigned) while `"not-an-id-format"` is rejected before any
//! storage lookup happens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Length of a record identifier in characters.
const ID_LEN: usize = 24;

/// A malformed record identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record identifier: '{value}' (expected {ID_LEN} hex characters)")]
pub struct InvalidIdError {
    /// The rejected input.
    pub value: String,
}

/// A system-generated record identifier.
///
/// Identifiers are generated with [`RecordId::generate`] when a record is
/// created and parsed with [`RecordId::parse`] (or [`FromStr`]) when they
/// come back in from a caller. Parsing is case-insensitive; the stored form
/// is always lowercase.
///
/// # Examples
///
/// ```
/// use intake_store::id::RecordId;
///
/// let id = RecordId::parse("64aB1C9e0f00000000000001").unwrap();
/// assert_eq!(id.as_str(), "64ab1c9e0f00000000000001");
///
/// assert!(RecordId::parse("not-an-id-format").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Generates a fresh identifier.
    ///
    /// Twelve bytes of v4 UUID entropy, hex-encoded. Uniqueness across a
    /// store's lifetime follows from the entropy; the store additionally
    /// enforces it with a primary key.
    pub fn generate() -> Self {
        let bytes = uuid::Uuid::new_v4().into_bytes();
        let hex: String = bytes[..ID_LEN / 2]
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        Self(hex)
    }

    /// Parses an identifier from caller-supplied input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdError`] unless the input is exactly 24 hex
    /// characters.
    pub fn parse(input: &str) -> Result<Self, InvalidIdError> {
        if input.len() == ID_LEN && input.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(input.to_ascii_lowercase()))
        } else {
            Err(InvalidIdError {
                value: input.to_string(),
            })
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}
