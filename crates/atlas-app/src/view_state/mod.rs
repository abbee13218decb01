//! View state observed by a consumer (UI, CLI, ...)
//!
//! The controller is the single writer; consumers read immutable
//! [`ViewSnapshot`]s, either on demand or through a `watch` subscription.

mod controller;
mod store;

pub use controller::{ReloadOutcome, ViewStateController};
pub use store::{ViewSnapshot, ViewStateStore};
