//! Data Transfer Objects for consumers of the view state
//!
//! These separate the internal domain models from the serialized contract
//! (JSON output of the CLI, or any other presentation layer).
//!
//! 数据传输对象：将内部领域模型与序列化契约分离。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atlas_app::ViewSnapshot;
use atlas_core::{Country, LoadFailure, RegionGroup};

/// One country row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDto {
    pub id: String,
    pub code: String,
    pub name: String,
    pub region: String,
    /// Empty when no flag can be derived from the code
    pub flag: String,
    pub population: Option<u64>,
    /// Current US dollars
    pub gdp: Option<f64>,
}

impl From<&Country> for CountryDto {
    fn from(country: &Country) -> Self {
        Self {
            id: country.id.to_string(),
            code: country.code.to_string(),
            name: country.name.clone(),
            region: country.region.clone(),
            flag: country.flag.clone(),
            population: country.population,
            gdp: country.gdp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionGroupDto {
    pub region: String,
    pub countries: Vec<CountryDto>,
}

impl From<RegionGroup<'_>> for RegionGroupDto {
    fn from(group: RegionGroup<'_>) -> Self {
        Self {
            region: group.region.to_string(),
            countries: group.countries.into_iter().map(CountryDto::from).collect(),
        }
    }
}

/// Serializable picture of the view state.
/// 视图状态的可序列化投影。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDto {
    pub generation: u64,
    /// `idle`, `loading`, `ready` or `failed`
    pub status: String,
    pub error: Option<LoadFailure>,
    pub updated_at: Option<DateTime<Utc>>,
    pub total_countries: usize,
    pub regions: Vec<RegionGroupDto>,
}

impl ViewDto {
    /// Project a snapshot, optionally keeping a single region.
    ///
    /// An unknown region yields an empty `regions` list; `total_countries`
    /// always counts the whole collection.
    pub fn from_snapshot(snapshot: &ViewSnapshot, region: Option<&str>) -> Self {
        let regions = snapshot
            .region_view()
            .map(|view| {
                view.iter()
                    .filter(|group| region.map_or(true, |wanted| group.region == wanted))
                    .map(RegionGroupDto::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            generation: snapshot.generation,
            status: snapshot.state.label().to_string(),
            error: snapshot.state.failure().cloned(),
            updated_at: snapshot.updated_at,
            total_countries: snapshot.collection().map_or(0, |c| c.len()),
            regions,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

impl From<&ViewSnapshot> for ViewDto {
    fn from(snapshot: &ViewSnapshot) -> Self {
        Self::from_snapshot(snapshot, None)
    }
}
