use serde::{Deserialize, Serialize};

use super::{DetailRecord, ProviderCode};
use crate::ids::CountryId;

/// A real country as displayed by World Atlas.
///
/// `population` and `gdp` are independent: either can be present without the
/// other, and both start out absent until enrichment has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    pub region: String,
    pub flag: String,
    pub code: ProviderCode,
    pub population: Option<u64>,
    /// Gross domestic product in current US dollars.
    pub gdp: Option<f64>,
}

impl Country {
    pub fn new(code: ProviderCode, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: CountryId::new(),
            name: name.into(),
            region: region.into(),
            flag: code.flag(),
            code,
            population: None,
            gdp: None,
        }
    }

    /// Overwrite both enrichment attributes with the values carried by `detail`.
    pub(crate) fn apply_detail(&mut self, detail: &DetailRecord) {
        self.population = detail.population;
        self.gdp = detail.gdp;
    }

    pub fn is_enriched(&self) -> bool {
        self.population.is_some() || self.gdp.is_some()
    }
}
