pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use wiring::{build_controller, wire_dependencies, WiringError, WiringResult};
