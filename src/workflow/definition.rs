use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A workflow graph as emitted by the automation engine, or by an AI
/// producer imitating its JSON shape.
///
/// Deserialization is deliberately permissive: missing fields become empty
/// defaults so that the validator, not serde, reports what is wrong with a
/// half-formed graph. The analysis passes (`validate`, `to_visual`,
/// `apply_layout`, `summarize`) all borrow this structure immutably and
/// never change it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Outgoing connections keyed by the source node's name. A `BTreeMap`
    /// keeps iteration deterministic, which keeps validation messages and
    /// edge ordering stable across runs.
    #[serde(default)]
    pub connections: BTreeMap<String, NodeConnections>,
    /// Opaque engine settings, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
}

impl Workflow {
    /// Parse a workflow directly from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        serde_json::from_str(json).map_err(|e| ExtractError::JsonParseError(e.to_string()))
    }

    /// Look up a node by its name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

/// A single node in the workflow graph.
///
/// The `name` doubles as the graph's vertex identifier: `connections`
/// reference nodes by name, so renaming a node silently breaks edges that
/// still point at the old name. The validator flags such dangling
/// references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub name: String,
    /// Dotted type tag from the engine's node taxonomy, e.g.
    /// `"n8n-nodes-base.slack"`. Unknown tags degrade gracefully in the
    /// catalog; they are never an error.
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default, alias = "typeVersion", skip_serializing_if = "Option::is_none")]
    pub type_version: Option<u32>,
    /// Producer-supplied position hint; superseded by the auto-layout
    /// engine before rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, serde_json::Value>>,
    /// Required external credential bindings, keyed by credential type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<BTreeMap<String, serde_json::Value>>,
}

impl Node {
    /// True if the node has at least one configured parameter.
    pub fn has_parameters(&self) -> bool {
        self.parameters.as_ref().is_some_and(|p| !p.is_empty())
    }
}

/// The outgoing connections of one node, grouped by output port.
///
/// Only the primary `"main"` channel is interpreted by this crate; other
/// channels deserialize into nothing and are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeConnections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<Vec<Vec<ConnectionTarget>>>,
}

impl NodeConnections {
    /// The output-port groups on the main channel, empty when absent.
    /// Each group holds the parallel fan-out targets of one output port.
    pub fn output_groups(&self) -> &[Vec<ConnectionTarget>] {
        self.main.as_deref().unwrap_or(&[])
    }
}

/// One edge endpoint inside an output-port group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTarget {
    /// Name of the target node; must reference an existing node.
    pub node: String,
    /// Logical connection channel, conventionally `"main"`.
    #[serde(rename = "type", default = "main_channel")]
    pub channel: String,
    /// Input port number on the target node.
    #[serde(default)]
    pub index: u32,
}

fn main_channel() -> String {
    "main".to_string()
}
