use thiserror::Error;

/// Errors that can occur when loading a workflow from JSON text.
#[derive(Error, Debug, Clone)]
pub enum ExtractError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("The supplied text does not contain a workflow object")]
    NoWorkflowFound,
}

/// Internal failures of the layered layout algorithm.
///
/// These never escape the public API: `apply_layout` recovers from any of
/// them with the deterministic grid fallback.
#[derive(Error, Debug, Clone)]
pub enum LayoutError {
    #[error("Rank assignment failed: {0}")]
    RankAssignment(String),
}
