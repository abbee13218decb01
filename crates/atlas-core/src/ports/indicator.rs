use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::FetchError;
use crate::country::ProviderCode;

/// Numeric attributes a country can be enriched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Total population
    Population,
    /// GDP in current US dollars
    Gdp,
}

impl Indicator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::Gdp => "gdp",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicator port - single data point lookup per country and indicator.
#[async_trait]
pub trait IndicatorPort: Send + Sync {
    /// Fetch the configured year's value of `indicator` for `code`.
    ///
    /// Returns `Ok(None)` when the provider has no data point, or the point's
    /// value is null or not a number.
    async fn fetch_indicator(
        &self,
        code: &ProviderCode,
        indicator: Indicator,
    ) -> Result<Option<f64>, FetchError>;
}
