use serde::{Deserialize, Serialize};

use super::ProviderCode;

/// Enrichment values obtained for one provider code.
///
/// Produced by the detail fetcher and consumed once by
/// [`Collection::merge_details`](super::Collection::merge_details).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub code: ProviderCode,
    pub population: Option<u64>,
    pub gdp: Option<f64>,
}

impl DetailRecord {
    pub fn new(code: ProviderCode, population: Option<u64>, gdp: Option<f64>) -> Self {
        Self {
            code,
            population,
            gdp,
        }
    }

    /// A record for `code` where both lookups came back empty.
    pub fn empty(code: ProviderCode) -> Self {
        Self::new(code, None, None)
    }
}
