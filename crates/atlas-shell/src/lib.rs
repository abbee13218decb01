//! # atlas-shell
//!
//! Outer layer of World Atlas.
//!
//! This crate provides:
//! - Bootstrap: tracing subscriber, config loading, dependency wiring
//! - Consumer commands over the view-state controller
//! - Serializable models handed to any presentation layer
//!
//! ## Modules
//!
//! - **bootstrap**: `init_tracing_subscriber`, `resolve_config`, `build_controller`
//! - **commands**: `reload_countries`, `get_view`
//! - **models**: `ViewDto`, `RegionGroupDto`, `CountryDto`

pub mod bootstrap;
pub mod commands;
pub mod models;

pub use models::{CountryDto, RegionGroupDto, ViewDto};
