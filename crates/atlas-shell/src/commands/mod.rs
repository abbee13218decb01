pub mod countries;
pub mod error;

pub use countries::{get_view, list_regions, reload_countries};
pub use error::map_err;
