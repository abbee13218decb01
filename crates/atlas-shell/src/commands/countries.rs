//! Country view commands
//!
//! Entry points a presentation layer calls. They drive the
//! [`ViewStateController`] and hand back serializable [`ViewDto`]s.

use tracing::{info, info_span, Instrument};

use atlas_app::{ReloadOutcome, ViewStateController};

use super::error::failure_message;
use crate::models::ViewDto;

/// Run one full load cycle and return the resulting view.
///
/// A superseded cycle is not an error: the view of the newer cycle is
/// returned. A failed base load is returned as `Err` with the reason.
pub async fn reload_countries(
    controller: &ViewStateController,
    region: Option<&str>,
) -> Result<ViewDto, String> {
    let span = info_span!("command.countries.reload", region = region.unwrap_or("*"));

    async move {
        match controller.reload().await {
            ReloadOutcome::Completed {
                generation,
                countries,
                merged,
            } => {
                info!(generation, countries, merged, "Reload completed");
            }
            ReloadOutcome::Superseded { generation } => {
                info!(generation, "Reload superseded by a newer one");
            }
            ReloadOutcome::Failed { failure, .. } => return Err(failure_message(&failure)),
        }
        Ok(get_view(controller, region))
    }
    .instrument(span)
    .await
}

/// Current view, without triggering a load.
pub fn get_view(controller: &ViewStateController, region: Option<&str>) -> ViewDto {
    ViewDto::from_snapshot(&controller.snapshot(), region)
}

/// Distinct region names of the displayed collection, sorted.
pub fn list_regions(controller: &ViewStateController) -> Vec<String> {
    controller.snapshot().regions()
}
