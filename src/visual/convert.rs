use super::types::{Point, VisualEdge, VisualGraph, VisualNode};
use crate::catalog::{is_conditional_type, node_meta};
use crate::workflow::{Node, Workflow};

/// Convert a workflow into its visual form.
///
/// Positions are provisional (the producer's hint, or a simple left-to-right
/// placeholder) and are superseded by the auto-layout engine before
/// rendering.
pub fn to_visual(workflow: &Workflow) -> VisualGraph {
    VisualGraph {
        nodes: convert_nodes(&workflow.nodes),
        edges: convert_edges(workflow),
    }
}

fn convert_nodes(nodes: &[Node]) -> Vec<VisualNode> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let meta = node_meta(&node.type_name);
            let position = match node.position {
                Some([x, y]) => Point { x, y },
                None => Point {
                    x: index as f64 * 200.0,
                    y: 0.0,
                },
            };

            VisualNode {
                id: node.name.clone(),
                label: node.name.clone(),
                node_type: node.type_name.clone(),
                category: meta.category,
                icon: meta.icon,
                config_summary: config_summary(node),
                position,
                has_warning: false,
                warning_message: None,
            }
        })
        .collect()
}

fn convert_edges(workflow: &Workflow) -> Vec<VisualEdge> {
    let mut edges = Vec::new();

    for (source, connections) in &workflow.connections {
        let conditional = workflow
            .node(source)
            .is_some_and(|n| is_conditional_type(&n.type_name));

        for (output_index, group) in connections.output_groups().iter().enumerate() {
            for (target_index, target) in group.iter().enumerate() {
                edges.push(VisualEdge {
                    id: format!(
                        "{}-{}-{}-{}",
                        source, target.node, output_index, target_index
                    ),
                    source: source.clone(),
                    target: target.node.clone(),
                    source_output: output_index as u32,
                    target_input: target.index,
                    is_conditional: conditional,
                    label: conditional.then(|| branch_label(output_index)),
                });
            }
        }
    }

    edges
}

/// Branch label for a conditional node's output port. Ports 0 and 1 follow
/// the engine's binary true/false convention; further ports of a multi-way
/// switch are labeled by index.
fn branch_label(output_index: usize) -> String {
    match output_index {
        0 => "true".to_string(),
        1 => "false".to_string(),
        n => format!("branch {}", n),
    }
}

/// Build a short human-readable digest of a node's configuration by
/// scanning a fixed, ordered list of well-known parameter keys.
fn config_summary(node: &Node) -> String {
    let Some(params) = &node.parameters else {
        return "No configuration".to_string();
    };

    let string_param = |key: &str| params.get(key).and_then(|v| v.as_str());
    let mut parts: Vec<String> = Vec::new();

    if let Some(channel) = string_param("channel") {
        parts.push(format!("Channel: {}", channel));
    }
    if let Some(text) = string_param("text") {
        let text = if text.chars().count() > 40 {
            let truncated: String = text.chars().take(40).collect();
            format!("{}...", truncated)
        } else {
            text.to_string()
        };
        parts.push(format!("Message: \"{}\"", text));
    }
    if let Some(url) = string_param("url") {
        parts.push(format!("URL: {}", url));
    }
    if let Some(path) = string_param("path") {
        parts.push(format!("Path: {}", path));
    }
    if let Some(method) = string_param("httpMethod") {
        parts.push(format!("Method: {}", method));
    }
    if params.contains_key("spreadsheetId") {
        parts.push("Sheet configured".to_string());
    }
    if let Some(operation) = string_param("operation") {
        parts.push(format!("Operation: {}", operation));
    }

    if parts.is_empty() {
        "No configuration".to_string()
    } else {
        parts.join("\n")
    }
}
