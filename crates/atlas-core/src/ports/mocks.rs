//! Mock implementations of provider ports for testing.
//!
//! This module provides mock implementations using `mockall` for unit testing
//! use cases without a real data provider.

use async_trait::async_trait;
use mockall::mock;

use crate::country::{ListingRecord, ProviderCode};
use crate::ports::{CountryListingPort, FetchError, Indicator, IndicatorPort};

mock! {
    pub CountryListing {}

    #[async_trait]
    impl CountryListingPort for CountryListing {
        async fn fetch_listing(&self) -> Result<Vec<ListingRecord>, FetchError>;
    }
}

mock! {
    pub Indicators {}

    #[async_trait]
    impl IndicatorPort for Indicators {
        async fn fetch_indicator(
            &self,
            code: &ProviderCode,
            indicator: Indicator,
        ) -> Result<Option<f64>, FetchError>;
    }
}
