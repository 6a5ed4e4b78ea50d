use std::collections::HashMap;

/// Outcome of a structural validation pass.
///
/// Errors are blocking (a caller should refuse to deploy while any are
/// present); warnings are advisory and never affect `valid`.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub(super) fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Extended validation outcome with per-node attribution, the deduplicated
/// list of credential gaps, and a rough complexity score.
#[derive(Debug, Clone, Default)]
pub struct DetailedReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Advisory findings attributed to individual nodes, keyed by node
    /// name. These power per-node warning badges and do not repeat in
    /// `warnings`.
    pub node_warnings: HashMap<String, Vec<String>>,
    /// Credentials the deployment target likely needs, deduplicated in
    /// first-seen order.
    pub credential_gaps: Vec<String>,
    /// 0..=10; grows with node count, +2 when the graph branches.
    pub complexity_score: u8,
}
