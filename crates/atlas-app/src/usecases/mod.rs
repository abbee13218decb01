//! Business logic use cases
//!
//! ```text
//! LoadBaseCollection          → base collection (aggregates removed)
//!         ↓
//! EnrichCollection            → one task per provider code
//!         ↓
//!   FetchEntityDetail         → population ∥ gdp lookups
//!         ↓
//! Collection::merge_details   → applied by the view-state controller
//! ```

pub mod enrich_collection;
pub mod fetch_entity_detail;
pub mod load_base_collection;

pub use enrich_collection::EnrichCollection;
pub use fetch_entity_detail::FetchEntityDetail;
pub use load_base_collection::{filter_aggregates, LoadBaseCollection};
