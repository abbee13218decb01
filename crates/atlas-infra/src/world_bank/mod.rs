//! World Bank open data API adapter
//!
//! Implements [`CountryListingPort`](atlas_core::ports::CountryListingPort) and
//! [`IndicatorPort`](atlas_core::ports::IndicatorPort) over HTTP/JSON.

mod client;
mod dto;
mod error;

pub use client::{WorldBankClient, WorldBankSettings};
pub use error::ClientBuildError;
