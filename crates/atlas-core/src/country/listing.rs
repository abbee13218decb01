use serde::{Deserialize, Serialize};

use super::{Country, ProviderCode};

/// Region value the provider uses for aggregate pseudo-countries
/// (regional and income-group summaries such as "World" or "Euro area").
pub const AGGREGATE_REGION: &str = "Aggregates";

/// One row of the provider's country listing, reduced to the fields the domain uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub code: ProviderCode,
    pub name: String,
    pub region: String,
}

impl ListingRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            code: ProviderCode::new(code),
            name: name.into(),
            region: region.into(),
        }
    }

    /// Whether this row is a summary pseudo-entity rather than a real country.
    pub fn is_aggregate(&self) -> bool {
        self.region == AGGREGATE_REGION
    }

    /// Build a fresh, not-yet-enriched [`Country`] from this row.
    pub fn into_country(self) -> Country {
        Country::new(self.code, self.name, self.region)
    }
}
