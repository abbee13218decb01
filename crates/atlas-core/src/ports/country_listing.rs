use async_trait::async_trait;

use super::FetchError;
use crate::country::ListingRecord;

/// Country listing port - one request for the full provider listing.
#[async_trait]
pub trait CountryListingPort: Send + Sync {
    /// Fetch every row of the provider listing in a single page.
    ///
    /// Rows are returned in provider order and unfiltered: aggregate
    /// pseudo-countries are still present.
    async fn fetch_listing(&self) -> Result<Vec<ListingRecord>, FetchError>;
}
