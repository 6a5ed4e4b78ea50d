use crate::catalog::NodeCategory;
use crate::validator::DetailedReport;
use serde::Serialize;

/// 2D position of a node's top-left corner on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A renderer-agnostic node ready for a directed-graph drawing surface.
#[derive(Debug, Clone, Serialize)]
pub struct VisualNode {
    /// The workflow node's name; connections use names as identifiers.
    pub id: String,
    pub label: String,
    pub node_type: String,
    pub category: NodeCategory,
    pub icon: &'static str,
    /// Short digest of the node's configuration for hover tooltips.
    pub config_summary: String,
    pub position: Point,
    pub has_warning: bool,
    pub warning_message: Option<String>,
}

/// A renderer-agnostic edge between two visual nodes.
#[derive(Debug, Clone, Serialize)]
pub struct VisualEdge {
    /// Composite of source, target, output port and fan-out position, so
    /// the id stays unique when the same node pair connects via multiple
    /// ports.
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_output: u32,
    pub target_input: u32,
    pub is_conditional: bool,
    /// Branch label, present only on conditional edges.
    pub label: Option<String>,
}

/// The visual form of a workflow graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VisualGraph {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
}

impl VisualGraph {
    /// Fold the per-node findings of a detailed validation into the node
    /// warning flags.
    pub fn annotate_warnings(&mut self, report: &DetailedReport) {
        for node in &mut self.nodes {
            if let Some(warnings) = report.node_warnings.get(&node.id) {
                node.has_warning = true;
                node.warning_message = Some(warnings.join(", "));
            }
        }
    }
}
