//! Structural and semantic validation of workflow graphs.
//!
//! All rules are independent and all applicable rules run; nothing
//! short-circuits except where structurally necessary (a graph without a
//! nodes array supports no node-level checks). The output is data, never
//! an error: callers decide how to react.

mod report;

pub use report::*;

use crate::catalog::{inferred_credential, is_conditional_type, is_trigger_type};
use crate::workflow::Workflow;
use ahash::AHashSet;
use itertools::Itertools;
use std::collections::HashMap;

/// Validate a raw JSON value before it has been parsed into a [`Workflow`].
///
/// This is the fail-fast boundary for producer output that is not even
/// graph-shaped: a non-object input yields a single error and no further
/// checks. Well-shaped objects are deserialized permissively and handed to
/// [`validate`].
pub fn validate_json(value: &serde_json::Value) -> ValidationReport {
    if !value.is_object() {
        return ValidationReport::from_findings(
            vec!["Workflow must be an object".to_string()],
            Vec::new(),
        );
    }

    match serde_json::from_value::<Workflow>(value.clone()) {
        Ok(workflow) => validate(&workflow),
        Err(err) => {
            let mut errors = Vec::new();
            if !value.get("name").is_some_and(|n| n.is_string()) {
                errors.push("Workflow must have a name".to_string());
            }
            if !value.get("nodes").is_some_and(|n| n.is_array()) {
                errors.push("Workflow must have a nodes array".to_string());
            } else {
                errors.push(format!("Workflow structure is malformed: {}", err));
            }
            ValidationReport::from_findings(errors, Vec::new())
        }
    }
}

/// Validate a workflow's structural integrity and operational readiness.
pub fn validate(workflow: &Workflow) -> ValidationReport {
    let mut checker = Checker::new(workflow);
    checker.run(false);
    ValidationReport::from_findings(checker.errors, checker.warnings)
}

/// Like [`validate`], additionally attributing advisory findings to the
/// nodes they concern and scoring the graph's complexity.
pub fn validate_detailed(workflow: &Workflow) -> DetailedReport {
    let mut checker = Checker::new(workflow);
    checker.run(true);

    let complexity_score = complexity_score(workflow);
    DetailedReport {
        valid: checker.errors.is_empty(),
        errors: checker.errors,
        warnings: checker.warnings,
        node_warnings: checker.node_warnings,
        credential_gaps: checker.credential_gaps,
        complexity_score,
    }
}

/// `min(node_count, 8) + 2` when the graph contains a conditional node,
/// capped at 10. An empty graph scores 0.
fn complexity_score(workflow: &Workflow) -> u8 {
    let base = workflow.nodes.len().min(8) as u8;
    let branch_bonus = if workflow
        .nodes
        .iter()
        .any(|n| is_conditional_type(&n.type_name))
    {
        2
    } else {
        0
    };
    (base + branch_bonus).min(10)
}

struct Checker<'a> {
    workflow: &'a Workflow,
    errors: Vec<String>,
    warnings: Vec<String>,
    node_warnings: HashMap<String, Vec<String>>,
    credential_gaps: Vec<String>,
}

impl<'a> Checker<'a> {
    fn new(workflow: &'a Workflow) -> Self {
        Self {
            workflow,
            errors: Vec::new(),
            warnings: Vec::new(),
            node_warnings: HashMap::new(),
            credential_gaps: Vec::new(),
        }
    }

    fn run(&mut self, detailed: bool) {
        if self.workflow.name.is_empty() {
            self.errors.push("Workflow must have a name".to_string());
        }

        if self.workflow.nodes.is_empty() {
            // No node-level or connection-level checks are meaningful
            // without nodes.
            self.errors
                .push("Workflow must have at least one node".to_string());
            return;
        }

        let node_names = self.check_nodes();
        self.check_connections(&node_names);
        self.check_orphans();

        if detailed {
            self.check_readiness();
        }
    }

    /// Per-node field checks, duplicate detection, and the graph-wide
    /// trigger and size advisories. Returns the set of well-formed node
    /// names for the connection checks.
    fn check_nodes(&mut self) -> AHashSet<&'a str> {
        let mut node_names: AHashSet<&str> = AHashSet::new();
        let mut has_trigger = false;

        for node in &self.workflow.nodes {
            if node.name.is_empty() {
                self.errors.push("Each node must have a name".to_string());
                continue;
            }
            if node.type_name.is_empty() {
                self.errors
                    .push(format!("Node \"{}\" must have a type", node.name));
                continue;
            }

            if !node_names.insert(node.name.as_str()) {
                self.errors
                    .push(format!("Duplicate node name: \"{}\"", node.name));
            }

            if is_trigger_type(&node.type_name) {
                has_trigger = true;
            }
        }

        if !has_trigger {
            self.warnings.push(
                "Workflow has no trigger node - it will need to be triggered manually or by another workflow"
                    .to_string(),
            );
        }

        let node_count = self.workflow.nodes.len();
        if node_count > 7 {
            self.warnings.push(format!(
                "Workflow has {} nodes - consider splitting into smaller workflows (recommended: 5-7 nodes)",
                node_count
            ));
        }

        node_names
    }

    /// Every connection source and every connection target must reference
    /// an existing node, across all output-port groups and all parallel
    /// targets within each group.
    fn check_connections(&mut self, node_names: &AHashSet<&str>) {
        for (source, connections) in &self.workflow.connections {
            if !node_names.contains(source.as_str()) {
                self.errors.push(format!(
                    "Connection references non-existent source node: \"{}\"",
                    source
                ));
            }

            for group in connections.output_groups() {
                for target in group {
                    if !node_names.contains(target.node.as_str()) {
                        self.errors.push(format!(
                            "Connection references non-existent target node: \"{}\"",
                            target.node
                        ));
                    }
                }
            }
        }
    }

    /// A node is an orphan when it is not a trigger, nothing connects into
    /// it, and it does have outgoing connections. A fully isolated node
    /// (no edges in either direction) is deliberately not flagged; it is
    /// a harmless no-op.
    fn check_orphans(&mut self) {
        let mut connected: AHashSet<&str> = AHashSet::new();
        for connections in self.workflow.connections.values() {
            for group in connections.output_groups() {
                for target in group {
                    connected.insert(target.node.as_str());
                }
            }
        }

        for node in &self.workflow.nodes {
            let is_trigger = is_trigger_type(&node.type_name);
            let is_connected = connected.contains(node.name.as_str());
            let has_outgoing = self.workflow.connections.contains_key(&node.name);

            if !is_trigger && !is_connected && has_outgoing {
                self.warnings.push(format!(
                    "Node \"{}\" has no incoming connections",
                    node.name
                ));
            }
        }
    }

    /// Detailed-mode advisories: credential gaps and missing configuration,
    /// attributed per node.
    fn check_readiness(&mut self) {
        for node in &self.workflow.nodes {
            if node.name.is_empty() {
                continue;
            }

            if let Some(credential) = inferred_credential(&node.type_name) {
                self.credential_gaps.push(credential.to_string());
                self.node_warnings
                    .entry(node.name.clone())
                    .or_default()
                    .push(format!("Needs {} credential", credential));
            }

            if !is_trigger_type(&node.type_name) && !node.has_parameters() {
                self.node_warnings
                    .entry(node.name.clone())
                    .or_default()
                    .push("Missing configuration".to_string());
            }
        }

        self.credential_gaps = std::mem::take(&mut self.credential_gaps)
            .into_iter()
            .unique()
            .collect();
    }
}
