//! Deterministic auto-layout for visual graphs.
//!
//! The general case is a layered (hierarchical) layout: feedback edges are
//! filtered out so cyclic graphs rank cleanly, ranks are assigned by
//! longest path, and barycenter sweeps order the nodes within each rank to
//! reduce crossings. If the algorithm fails for any reason the engine falls
//! back to a fixed-column grid, so rendering always succeeds with *some*
//! readable layout.

use crate::error::LayoutError;
use crate::visual::{Point, VisualGraph};
use ahash::{AHashMap, AHashSet};
use petgraph::Direction as EdgeDirection;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// Fixed dimensions of the rendered node box.
const NODE_WIDTH: f64 = 180.0;
const NODE_HEIGHT: f64 = 60.0;
const MARGIN: f64 = 20.0;

const FALLBACK_COLUMNS: usize = 4;
const FALLBACK_X_SPACING: f64 = 220.0;
const FALLBACK_Y_SPACING: f64 = 100.0;

/// Rank direction of the layered layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ranks grow along the x axis.
    #[default]
    LeftToRight,
    /// Ranks grow along the y axis.
    TopToBottom,
}

/// Spacing and orientation options for [`apply_layout`].
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub direction: Direction,
    /// Gap between nodes within the same rank.
    pub node_spacing: f64,
    /// Gap between consecutive ranks.
    pub rank_spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: Direction::LeftToRight,
            node_spacing: 50.0,
            rank_spacing: 80.0,
        }
    }
}

/// Assign 2D positions to every node of the graph; edges are returned
/// unchanged.
///
/// Degenerate inputs short-circuit: an empty graph stays empty, a
/// single-node graph gets one fixed position and no edges. The result is
/// deterministic for identical inputs.
pub fn apply_layout(mut graph: VisualGraph, options: &LayoutOptions) -> VisualGraph {
    if graph.nodes.is_empty() {
        return graph;
    }
    if graph.nodes.len() == 1 {
        graph.nodes[0].position = Point { x: 50.0, y: 50.0 };
        graph.edges.clear();
        return graph;
    }

    match layered_centers(&graph, options) {
        Ok(centers) => {
            for (node, (cx, cy)) in graph.nodes.iter_mut().zip(centers) {
                node.position = Point {
                    x: cx - NODE_WIDTH / 2.0,
                    y: cy - NODE_HEIGHT / 2.0,
                };
            }
            graph
        }
        Err(err) => {
            log::warn!("layered layout failed ({}), using grid fallback", err);
            apply_grid_layout(graph)
        }
    }
}

/// Simple fixed-column grid placement in row-major input order. Used as the
/// recovery path of [`apply_layout`] and available directly for callers
/// that prefer a flat arrangement.
pub fn apply_grid_layout(mut graph: VisualGraph) -> VisualGraph {
    for (index, node) in graph.nodes.iter_mut().enumerate() {
        node.position = Point {
            x: (index % FALLBACK_COLUMNS) as f64 * FALLBACK_X_SPACING + 50.0,
            y: (index / FALLBACK_COLUMNS) as f64 * FALLBACK_Y_SPACING + 50.0,
        };
    }
    graph
}

/// Compute the centerpoint of every node, indexed by the node's position in
/// `graph.nodes`.
fn layered_centers(
    graph: &VisualGraph,
    options: &LayoutOptions,
) -> Result<Vec<(f64, f64)>, LayoutError> {
    let node_count = graph.nodes.len();

    let mut dag = DiGraph::<(), ()>::with_capacity(node_count, graph.edges.len());
    let mut index_of: AHashMap<&str, NodeIndex> = AHashMap::with_capacity(node_count);
    for node in &graph.nodes {
        index_of.insert(node.id.as_str(), dag.add_node(()));
    }
    for edge in &graph.edges {
        // Edges to nodes missing from the graph are a validator concern;
        // layout simply skips them. Self-loops carry no rank information.
        let (Some(&source), Some(&target)) = (
            index_of.get(edge.source.as_str()),
            index_of.get(edge.target.as_str()),
        ) else {
            continue;
        };
        if source != target {
            dag.add_edge(source, target, ());
        }
    }

    // Drop feedback edges so cyclic inputs still rank.
    let feedback = feedback_edges(&dag);
    let mut acyclic = DiGraph::<(), ()>::with_capacity(node_count, dag.edge_count());
    for _ in 0..node_count {
        acyclic.add_node(());
    }
    for edge in dag.edge_references() {
        if !feedback.contains(&edge.id()) {
            acyclic.add_edge(edge.source(), edge.target(), ());
        }
    }

    let topo = petgraph::algo::toposort(&acyclic, None).map_err(|cycle| {
        LayoutError::RankAssignment(format!(
            "cycle remained after feedback-edge removal at node {}",
            cycle.node_id().index()
        ))
    })?;

    // Longest-path rank assignment.
    let mut rank = vec![0usize; node_count];
    for &v in &topo {
        for pred in acyclic.neighbors_directed(v, EdgeDirection::Incoming) {
            rank[v.index()] = rank[v.index()].max(rank[pred.index()] + 1);
        }
    }

    // Group into layers; initial in-layer order follows input order.
    let layer_count = rank.iter().copied().max().unwrap_or(0) + 1;
    let mut layers: Vec<Vec<NodeIndex>> = vec![Vec::new(); layer_count];
    for v in acyclic.node_indices() {
        layers[rank[v.index()]].push(v);
    }

    order_layers(&acyclic, &mut layers);

    // Convert (rank, in-layer position) into centerpoints, with each layer
    // centered against the widest one.
    let mut position_in_layer = vec![0usize; node_count];
    for layer in &layers {
        for (p, &v) in layer.iter().enumerate() {
            position_in_layer[v.index()] = p;
        }
    }

    let widest = layers.iter().map(|l| l.len()).max().unwrap_or(1);
    let (node_extent, rank_extent) = match options.direction {
        Direction::LeftToRight => (NODE_HEIGHT, NODE_WIDTH),
        Direction::TopToBottom => (NODE_WIDTH, NODE_HEIGHT),
    };
    let cross_step = node_extent + options.node_spacing;
    let rank_step = rank_extent + options.rank_spacing;

    let centers = (0..node_count)
        .map(|i| {
            let r = rank[i];
            let layer_len = layers[r].len();
            let centering = (widest - layer_len) as f64 * cross_step / 2.0;
            let along_rank = MARGIN + r as f64 * rank_step + rank_extent / 2.0;
            let across =
                MARGIN + centering + position_in_layer[i] as f64 * cross_step + node_extent / 2.0;
            match options.direction {
                Direction::LeftToRight => (along_rank, across),
                Direction::TopToBottom => (across, along_rank),
            }
        })
        .collect();

    Ok(centers)
}

/// Identify feedback edges with an iterative DFS: any edge pointing back
/// into the active DFS path closes a cycle.
fn feedback_edges(dag: &DiGraph<(), ()>) -> AHashSet<EdgeIndex> {
    const WHITE: u8 = 0;
    const GRAY: u8 = 1;
    const BLACK: u8 = 2;

    // Adjacency snapshot in insertion order for deterministic traversal
    // (petgraph iterates outgoing edges in reverse insertion order).
    let adjacency: Vec<Vec<(EdgeIndex, NodeIndex)>> = dag
        .node_indices()
        .map(|v| {
            let mut out: Vec<_> = dag.edges(v).map(|e| (e.id(), e.target())).collect();
            out.reverse();
            out
        })
        .collect();

    let mut color = vec![WHITE; dag.node_count()];
    let mut feedback = AHashSet::new();

    for start in dag.node_indices() {
        if color[start.index()] != WHITE {
            continue;
        }
        color[start.index()] = GRAY;
        let mut stack: Vec<(NodeIndex, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let (v, cursor) = (frame.0, frame.1);
            if let Some(&(edge_id, to)) = adjacency[v.index()].get(cursor) {
                frame.1 += 1;
                match color[to.index()] {
                    WHITE => {
                        color[to.index()] = GRAY;
                        stack.push((to, 0));
                    }
                    GRAY => {
                        feedback.insert(edge_id);
                    }
                    _ => {}
                }
            } else {
                color[v.index()] = BLACK;
                stack.pop();
            }
        }
    }

    feedback
}

/// Reduce crossings by sorting each layer by the barycenter of its
/// neighbors in the adjacent layer. Alternating down/up sweeps with a
/// stable tie-break on the current position keep the result deterministic.
fn order_layers(acyclic: &DiGraph<(), ()>, layers: &mut [Vec<NodeIndex>]) {
    let node_count = acyclic.node_count();
    let mut position = vec![0usize; node_count];
    let reindex = |layers: &[Vec<NodeIndex>], position: &mut Vec<usize>| {
        for layer in layers {
            for (p, &v) in layer.iter().enumerate() {
                position[v.index()] = p;
            }
        }
    };
    reindex(layers, &mut position);

    for sweep in 0..4 {
        let downward = sweep % 2 == 0;
        let neighbor_direction = if downward {
            EdgeDirection::Incoming
        } else {
            EdgeDirection::Outgoing
        };

        let indices: Vec<usize> = if downward {
            (1..layers.len()).collect()
        } else {
            (0..layers.len().saturating_sub(1)).rev().collect()
        };

        for r in indices {
            let mut keyed: Vec<(f64, usize, NodeIndex)> = layers[r]
                .iter()
                .map(|&v| {
                    let neighbors: Vec<usize> = acyclic
                        .neighbors_directed(v, neighbor_direction)
                        .map(|u| position[u.index()])
                        .collect();
                    let barycenter = if neighbors.is_empty() {
                        position[v.index()] as f64
                    } else {
                        neighbors.iter().sum::<usize>() as f64 / neighbors.len() as f64
                    };
                    (barycenter, position[v.index()], v)
                })
                .collect();

            keyed.sort_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.1.cmp(&b.1))
            });

            layers[r] = keyed.into_iter().map(|(_, _, v)| v).collect();
            reindex(layers, &mut position);
        }
    }
}
