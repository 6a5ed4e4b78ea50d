//! Common test utilities for building workflow graphs.
use flowlens::workflow::{ConnectionTarget, Node, NodeConnections, Workflow};
use serde_json::Value;

/// Creates a bare node with the given name and type.
#[allow(dead_code)]
pub fn node(name: &str, node_type: &str) -> Node {
    Node {
        name: name.to_string(),
        type_name: node_type.to_string(),
        ..Node::default()
    }
}

/// Creates a node with the given parameters.
#[allow(dead_code)]
pub fn node_with_params(name: &str, node_type: &str, params: &[(&str, Value)]) -> Node {
    let mut node = node(name, node_type);
    node.parameters = Some(
        params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    );
    node
}

/// Adds a single-output-port connection from `source` fanning out to
/// `targets`.
#[allow(dead_code)]
pub fn connect(workflow: &mut Workflow, source: &str, targets: &[&str]) {
    connect_groups(workflow, source, &[targets]);
}

/// Adds a connection from `source` with one group of targets per output
/// port.
#[allow(dead_code)]
pub fn connect_groups(workflow: &mut Workflow, source: &str, groups: &[&[&str]]) {
    let main = groups
        .iter()
        .map(|targets| {
            targets
                .iter()
                .map(|t| ConnectionTarget {
                    node: t.to_string(),
                    channel: "main".to_string(),
                    index: 0,
                })
                .collect()
        })
        .collect();
    workflow
        .connections
        .insert(source.to_string(), NodeConnections { main: Some(main) });
}

/// The smallest valid workflow: a webhook trigger feeding a configured
/// Slack action.
#[allow(dead_code)]
pub fn minimal_workflow() -> Workflow {
    let mut workflow = Workflow {
        name: "X".to_string(),
        nodes: vec![
            node("Webhook", "n8n-nodes-base.webhook"),
            node_with_params(
                "Slack",
                "n8n-nodes-base.slack",
                &[("channel", Value::String("#a".to_string()))],
            ),
        ],
        ..Workflow::default()
    };
    connect(&mut workflow, "Webhook", &["Slack"]);
    workflow
}

/// Eight chained transform nodes with no trigger anywhere.
#[allow(dead_code)]
pub fn eight_node_no_trigger() -> Workflow {
    let names: Vec<String> = (1..=8).map(|i| format!("Set{}", i)).collect();
    let mut workflow = Workflow {
        name: "Big".to_string(),
        nodes: names
            .iter()
            .map(|n| {
                node_with_params(
                    n,
                    "n8n-nodes-base.set",
                    &[("operation", Value::String("keep".to_string()))],
                )
            })
            .collect(),
        ..Workflow::default()
    };
    for pair in names.windows(2) {
        connect(&mut workflow, &pair[0], &[&pair[1]]);
    }
    // Close the ring so no node is left without an incoming connection.
    connect(&mut workflow, "Set8", &["Set1"]);
    workflow
}
