use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use atlas_core::ports::{CountryListingPort, FetchError};
use atlas_core::{Collection, ListingRecord};

/// Load the base country collection from the provider listing.
/// 从数据源列表加载基础国家集合。
///
/// # Behavior / 行为
/// - One listing request, no pagination
/// - Rows whose region is the aggregate sentinel are dropped
/// - Every other row becomes a [`Country`](atlas_core::Country) with a fresh id and its flag
/// - Provider codes are unique in the result; a repeated code keeps its first row
/// - Either the full filtered collection or an error; never a partial result
pub struct LoadBaseCollection {
    listing: Arc<dyn CountryListingPort>,
}

impl LoadBaseCollection {
    pub fn new(listing: Arc<dyn CountryListingPort>) -> Self {
        Self { listing }
    }

    pub async fn execute(&self) -> Result<Collection, FetchError> {
        let span = info_span!("usecase.load_base_collection.execute");

        async {
            let records = self.listing.fetch_listing().await.map_err(|err| {
                warn!(error = %err, "Country listing request failed");
                err
            })?;

            let total = records.len();
            let collection = filter_aggregates(records);
            info!(
                total,
                countries = collection.len(),
                aggregates = total - collection.len(),
                "Loaded base collection"
            );
            Ok(collection)
        }
        .instrument(span)
        .await
    }
}

/// Drop aggregate rows and turn the remaining rows into countries, keeping provider order.
///
/// The provider code is the merge key, so only the first row of a repeated
/// code is kept.
pub fn filter_aggregates(records: Vec<ListingRecord>) -> Collection {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| !record.is_aggregate())
        .filter(|record| {
            let first = seen.insert(record.code.clone());
            if !first {
                warn!(code = %record.code, name = %record.name, "Dropping listing row with duplicate code");
            }
            first
        })
        .map(ListingRecord::into_country)
        .collect()
}
