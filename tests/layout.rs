//! Tests for the layered auto-layout engine and its grid fallback.
mod common;

use common::*;
use flowlens::layout::{apply_grid_layout, apply_layout, Direction, LayoutOptions};
use flowlens::visual::to_visual;
use flowlens::workflow::Workflow;

#[test]
fn test_empty_graph_stays_empty() {
    let graph = to_visual(&Workflow::default());
    let graph = apply_layout(graph, &LayoutOptions::default());

    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
}

#[test]
fn test_single_node_gets_fixed_position_and_no_edges() {
    let mut workflow = Workflow {
        name: "Solo".to_string(),
        nodes: vec![node("A", "n8n-nodes-base.set")],
        ..Workflow::default()
    };
    // A self-loop must not survive a single-node layout.
    connect(&mut workflow, "A", &["A"]);

    let graph = apply_layout(to_visual(&workflow), &LayoutOptions::default());

    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].position.x, 50.0);
    assert_eq!(graph.nodes[0].position.y, 50.0);
    assert!(graph.edges.is_empty());
}

#[test]
fn test_linear_chain_ranks_left_to_right() {
    let mut workflow = Workflow {
        name: "Chain".to_string(),
        nodes: vec![
            node("A", "n8n-nodes-base.webhook"),
            node("B", "n8n-nodes-base.set"),
            node("C", "n8n-nodes-base.slack"),
        ],
        ..Workflow::default()
    };
    connect(&mut workflow, "A", &["B"]);
    connect(&mut workflow, "B", &["C"]);

    let graph = apply_layout(to_visual(&workflow), &LayoutOptions::default());

    // Default spacing: 180-wide nodes, 80 between ranks, 20 margin.
    let xs: Vec<f64> = graph.nodes.iter().map(|n| n.position.x).collect();
    let ys: Vec<f64> = graph.nodes.iter().map(|n| n.position.y).collect();
    assert_eq!(xs, vec![20.0, 280.0, 540.0]);
    assert!(ys.iter().all(|&y| y == 20.0));
    assert_eq!(graph.edges.len(), 2);
}

#[test]
fn test_top_to_bottom_direction() {
    let mut workflow = Workflow {
        name: "Chain".to_string(),
        nodes: vec![
            node("A", "n8n-nodes-base.webhook"),
            node("B", "n8n-nodes-base.set"),
        ],
        ..Workflow::default()
    };
    connect(&mut workflow, "A", &["B"]);

    let options = LayoutOptions {
        direction: Direction::TopToBottom,
        ..LayoutOptions::default()
    };
    let graph = apply_layout(to_visual(&workflow), &options);

    let a = &graph.nodes[0].position;
    let b = &graph.nodes[1].position;
    assert!(a.y < b.y);
    assert_eq!(a.x, b.x);
}

#[test]
fn test_branches_share_a_rank() {
    let mut workflow = Workflow {
        name: "Branching".to_string(),
        nodes: vec![
            node("Webhook", "n8n-nodes-base.webhook"),
            node("If", "n8n-nodes-base.if"),
            node("A", "n8n-nodes-base.set"),
            node("B", "n8n-nodes-base.set"),
        ],
        ..Workflow::default()
    };
    connect(&mut workflow, "Webhook", &["If"]);
    connect_groups(&mut workflow, "If", &[&["A"], &["B"]]);

    let graph = apply_layout(to_visual(&workflow), &LayoutOptions::default());
    let position = |id: &str| {
        graph
            .nodes
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.position)
            .unwrap()
    };

    assert!(position("Webhook").x < position("If").x);
    assert!(position("If").x < position("A").x);
    // Both branches land on the same rank, vertically separated.
    assert_eq!(position("A").x, position("B").x);
    assert_ne!(position("A").y, position("B").y);
}

#[test]
fn test_cycle_is_tolerated() {
    let mut workflow = Workflow {
        name: "Loop".to_string(),
        nodes: vec![
            node("A", "n8n-nodes-base.webhook"),
            node("B", "n8n-nodes-base.set"),
        ],
        ..Workflow::default()
    };
    connect(&mut workflow, "A", &["B"]);
    connect(&mut workflow, "B", &["A"]);

    let graph = apply_layout(to_visual(&workflow), &LayoutOptions::default());

    // The back edge is ignored for ranking, so A still leads B.
    assert!(graph.nodes[0].position.x < graph.nodes[1].position.x);
    assert_eq!(graph.edges.len(), 2);
}

#[test]
fn test_layout_is_deterministic() {
    let workflow = eight_node_no_trigger();
    let options = LayoutOptions::default();

    let first = apply_layout(to_visual(&workflow), &options);
    let second = apply_layout(to_visual(&workflow), &options);

    for (a, b) in first.nodes.iter().zip(&second.nodes) {
        assert_eq!(a.position.x, b.position.x);
        assert_eq!(a.position.y, b.position.y);
    }
}

#[test]
fn test_dangling_edge_does_not_break_layout() {
    let mut workflow = Workflow {
        name: "Dangling".to_string(),
        nodes: vec![
            node("A", "n8n-nodes-base.webhook"),
            node("B", "n8n-nodes-base.set"),
        ],
        ..Workflow::default()
    };
    connect(&mut workflow, "A", &["B", "Ghost"]);

    let graph = apply_layout(to_visual(&workflow), &LayoutOptions::default());

    assert_eq!(graph.nodes.len(), 2);
    assert!(graph.nodes[0].position.x < graph.nodes[1].position.x);
    // The dangling edge survives; only placement ignores it.
    assert_eq!(graph.edges.len(), 2);
}

#[test]
fn test_grid_fallback_positions() {
    let workflow = Workflow {
        name: "Grid".to_string(),
        nodes: (0..5)
            .map(|i| node(&format!("N{}", i), "n8n-nodes-base.set"))
            .collect(),
        ..Workflow::default()
    };
    let graph = apply_grid_layout(to_visual(&workflow));

    let positions: Vec<(f64, f64)> = graph
        .nodes
        .iter()
        .map(|n| (n.position.x, n.position.y))
        .collect();
    assert_eq!(
        positions,
        vec![
            (50.0, 50.0),
            (270.0, 50.0),
            (490.0, 50.0),
            (710.0, 50.0),
            (50.0, 150.0),
        ]
    );
}
