//! ID type wrappers for type safety.

pub mod country_id;

pub use country_id::CountryId;
