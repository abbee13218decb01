//! # atlas-core
//!
//! Core domain models and port definitions for World Atlas.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod country;
pub mod ids;
pub mod load_state;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use country::{
    flag_for_code, Collection, Country, DetailRecord, ListingRecord, ProviderCode, RegionGroup,
    RegionView, AGGREGATE_REGION,
};
pub use ids::CountryId;
pub use load_state::{FailureKind, LoadFailure, LoadState};
pub use ports::{FetchError, Indicator};
