use atlas_core::LoadFailure;

/// Centralized error mapping for commands.
///
/// Consumers receive plain strings; the structured reason stays available
/// through [`ViewDto::error`](crate::models::ViewDto::error).
pub fn map_err(err: anyhow::Error) -> String {
    format!("{err:#}")
}

pub(crate) fn failure_message(failure: &LoadFailure) -> String {
    map_err(anyhow::anyhow!("Failed to load countries: {failure}"))
}
