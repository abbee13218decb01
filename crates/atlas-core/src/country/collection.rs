use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Country, DetailRecord, ProviderCode, RegionView};

/// Ordered set of countries, in the order the provider listed them.
///
/// Provider codes are unique within a collection (the base loader receives
/// them from a single listing response); merging relies on that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    countries: Vec<Country>,
}

impl Collection {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    pub fn as_slice(&self) -> &[Country] {
        &self.countries
    }

    pub fn into_inner(self) -> Vec<Country> {
        self.countries
    }

    pub fn get(&self, code: &ProviderCode) -> Option<&Country> {
        self.countries.iter().find(|c| &c.code == code)
    }

    /// Provider codes of the collection, first occurrence order, without duplicates.
    pub fn distinct_codes(&self) -> Vec<ProviderCode> {
        let mut seen = HashSet::with_capacity(self.countries.len());
        self.countries
            .iter()
            .filter(|c| seen.insert(&c.code))
            .map(|c| c.code.clone())
            .collect()
    }

    /// Apply detail records onto the countries with the matching provider code.
    ///
    /// Both enrichment attributes of a matched country are overwritten with the
    /// record's values. Records whose code matches no country are ignored.
    /// If a code appears more than once, only its first country is updated.
    /// Applying the same records again leaves the collection unchanged.
    ///
    /// Returns the number of records that matched a country.
    pub fn merge_details<'a, I>(&mut self, details: I) -> usize
    where
        I: IntoIterator<Item = &'a DetailRecord>,
    {
        let mut index: HashMap<ProviderCode, usize> = HashMap::with_capacity(self.countries.len());
        for (i, country) in self.countries.iter().enumerate() {
            index.entry(country.code.clone()).or_insert(i);
        }

        let mut applied = 0;
        for detail in details {
            match index.get(&detail.code) {
                Some(&i) => {
                    self.countries[i].apply_detail(detail);
                    applied += 1;
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(code = %detail.code, "Ignoring detail record with no matching country");
                }
            }
        }
        applied
    }

    /// Group the collection by region. See [`RegionView`].
    pub fn region_view(&self) -> RegionView<'_> {
        RegionView::new(self)
    }
}

impl FromIterator<Country> for Collection {
    fn from_iter<T: IntoIterator<Item = Country>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}
