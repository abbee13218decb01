use std::collections::BTreeMap;

use super::{Collection, Country};

/// Countries of one region, in collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGroup<'a> {
    pub region: &'a str,
    pub countries: Vec<&'a Country>,
}

/// Read-only grouping of a [`Collection`] by region.
///
/// Regions are sorted and de-duplicated; within a region countries keep the
/// order they have in the collection.
#[derive(Debug, Clone)]
pub struct RegionView<'a> {
    groups: BTreeMap<&'a str, Vec<&'a Country>>,
}

impl<'a> RegionView<'a> {
    pub fn new(collection: &'a Collection) -> Self {
        let mut groups: BTreeMap<&'a str, Vec<&'a Country>> = BTreeMap::new();
        for country in collection {
            groups.entry(country.region.as_str()).or_default().push(country);
        }
        Self { groups }
    }

    pub fn regions(&self) -> Vec<&'a str> {
        self.groups.keys().copied().collect()
    }

    /// Countries belonging to `region`; empty when the region is unknown.
    pub fn countries_in(&self, region: &str) -> &[&'a Country] {
        self.groups.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = RegionGroup<'a>> + '_ {
        self.groups.iter().map(|(region, countries)| RegionGroup {
            region: *region,
            countries: countries.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
