//! Wire format of the World Bank API (`format=json`).
//!
//! Every endpoint answers with a two-element array: a paging envelope and the
//! data. Errors come back as a one-element array holding a `message` list.

use serde::Deserialize;
use serde_json::Value;

use atlas_core::ports::FetchError;
use atlas_core::ListingRecord;

/// `per_page` is a string in the country listing and a number in indicator responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum PerPage {
    Number(u64),
    Text(String),
}

impl PerPage {
    pub(crate) fn value(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PageMeta {
    pub page: u32,
    pub pages: u32,
    pub per_page: PerPage,
    pub total: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RegionRef {
    #[allow(dead_code)]
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountryRow {
    #[allow(dead_code)]
    pub id: String,
    pub iso2_code: String,
    pub name: String,
    pub region: RegionRef,
}

impl CountryRow {
    /// Region values sometimes carry trailing whitespace upstream.
    pub(crate) fn into_record(self) -> ListingRecord {
        ListingRecord::new(self.iso2_code.trim(), self.name.trim(), self.region.value.trim())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IndicatorPoint {
    #[serde(default)]
    pub value: Option<Value>,
    #[allow(dead_code)]
    pub date: String,
}

impl IndicatorPoint {
    pub(crate) fn numeric_value(&self) -> Option<f64> {
        self.value.as_ref().and_then(Value::as_f64)
    }
}

pub(crate) type ListingResponse = (PageMeta, Vec<CountryRow>);
pub(crate) type IndicatorResponse = (PageMeta, Option<Vec<IndicatorPoint>>);

#[derive(Debug, Deserialize)]
struct ProviderMessage {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Vec<ProviderMessage>,
}

/// Decode a provider body, turning provider error envelopes and schema
/// mismatches into [`FetchError::Decode`].
pub(crate) fn decode<T>(body: &[u8]) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    let value: Value =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(format!("invalid JSON: {e}")))?;

    if let Some(err) = provider_error(&value) {
        return Err(FetchError::Decode(err));
    }

    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

fn provider_error(value: &Value) -> Option<String> {
    let first = value.as_array()?.first()?;
    let error: ProviderError = serde_json::from_value(first.clone()).ok()?;
    let detail = error
        .message
        .iter()
        .map(|m| format!("{}: {}", m.key, m.value))
        .collect::<Vec<_>>()
        .join("; ");
    Some(format!("provider error: {detail}"))
}
