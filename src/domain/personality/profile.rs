//! Profile code value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 4-letter personality profile code, e.g. "ESTJ".
///
/// The code is a lookup key into the interpretation tables; unknown or
/// malformed codes are legal values that simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeProfile(String);

impl TypeProfile {
    /// Wraps a profile code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
