use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque identity of a [`Country`](crate::Country) within one loaded collection.
///
/// Generated when the country is created by the base loader and never reused.
/// Merging never matches on this id; the provider code is the merge key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(String);

impl CountryId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CountryId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CountryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
