//! World Atlas Application Orchestration Layer
//!
//! This crate contains the enrichment use cases and the view-state controller
//! that sequences them for a consumer.

pub mod deps;
pub mod usecases;
pub mod view_state;

pub use deps::AppDeps;
pub use usecases::{EnrichCollection, FetchEntityDetail, LoadBaseCollection};
pub use view_state::{ReloadOutcome, ViewSnapshot, ViewStateController, ViewStateStore};
