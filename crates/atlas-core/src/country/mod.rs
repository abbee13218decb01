//! Country domain: the entities shown by World Atlas and the records used to enrich them.
//!
//! ```text
//! ListingRecord ──(base loader)──→ Country ──┐
//!                                             ├──(merge_details)──→ enriched Collection
//! DetailRecord ──(detail fetcher)─────────────┘
//! ```

mod code;
mod collection;
mod detail;
mod listing;
mod model;
mod region;

pub use code::{flag_for_code, ProviderCode};
pub use collection::Collection;
pub use detail::DetailRecord;
pub use listing::{ListingRecord, AGGREGATE_REGION};
pub use model::Country;
pub use region::{RegionGroup, RegionView};
