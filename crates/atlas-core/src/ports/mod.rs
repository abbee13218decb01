//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. Use cases only ever see these traits;
//! the HTTP provider adapter lives in `atlas-infra`.

pub mod country_listing;
pub mod errors;
pub mod indicator;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

pub use country_listing::CountryListingPort;
pub use errors::FetchError;
pub use indicator::{Indicator, IndicatorPort};
