use serde::{Deserialize, Serialize};

use crate::ports::FetchError;

/// First code point of the Unicode regional indicator block (🇦).
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Two-letter code assigned by the data provider (ISO 3166-1 alpha-2 for real countries).
///
/// The code is the stable external key of a country: it addresses the
/// per-country indicator lookups and is the key used when merging detail
/// records back into a collection. It is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderCode(String);

impl ProviderCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the code as a URL path segment for indicator lookups.
    ///
    /// # Errors
    ///
    /// [`FetchError::InvalidKey`] when the code is empty, longer than three
    /// characters, or contains anything other than ASCII letters and digits.
    pub fn lookup_key(&self) -> Result<&str, FetchError> {
        let code = self.0.as_str();
        let well_formed = (2..=3).contains(&code.len())
            && code.chars().all(|c| c.is_ascii_alphanumeric());
        if well_formed {
            Ok(code)
        } else {
            Err(FetchError::InvalidKey(code.to_string()))
        }
    }

    /// Flag emoji derived from this code. See [`flag_for_code`].
    pub fn flag(&self) -> String {
        flag_for_code(&self.0)
    }
}

impl std::fmt::Display for ProviderCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Derive the flag emoji for a two-letter code.
///
/// Each ASCII letter maps to its regional indicator symbol, so `"FR"` becomes
/// `"🇫🇷"`. Lowercase letters are treated as uppercase. Any input that is not
/// exactly two ASCII letters produces an empty string.
pub fn flag_for_code(code: &str) -> String {
    let bytes = code.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
        return String::new();
    }

    bytes
        .iter()
        .filter_map(|b| {
            let offset = u32::from(b.to_ascii_uppercase() - b'A');
            char::from_u32(REGIONAL_INDICATOR_A + offset)
        })
        .collect()
}
