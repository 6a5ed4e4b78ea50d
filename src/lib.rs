//! # Flowlens - Workflow Graph Validation and Layout Engine
//!
//! **Flowlens** inspects automation workflow graphs (nodes plus typed
//! connections, as emitted by n8n-style engines) and turns them into
//! everything a review surface needs before deployment: a validation
//! report, a renderer-agnostic visual graph with computed 2D positions,
//! and a plain-language execution summary.
//!
//! ## Core Workflow
//!
//! The engine operates on an immutable [`workflow::Workflow`] value; every
//! stage is a pure function of its input:
//!
//! 1.  **Parse**: Deserialize producer JSON with [`workflow::Workflow::from_json`],
//!     or fish a workflow out of free-form assistant text with
//!     [`workflow::extract_workflow`].
//! 2.  **Validate**: Run [`validator::validate`] for blocking errors and
//!     advisory warnings, or [`validator::validate_detailed`] for per-node
//!     attribution, credential gaps, and a complexity score.
//! 3.  **Convert**: Build a generic node+edge graph with [`visual::to_visual`],
//!     fold detailed findings in with [`visual::VisualGraph::annotate_warnings`].
//! 4.  **Layout**: Assign positions with [`layout::apply_layout`]; a grid
//!     fallback guarantees a readable result for any input.
//! 5.  **Summarize**: Narrate execution order with [`summary::summarize`].
//!
//! ## Quick Start
//!
//! ```rust
//! use flowlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let workflow = Workflow::from_json(
//!         r##"{
//!             "name": "Alerts",
//!             "nodes": [
//!                 {"name": "Webhook", "type": "n8n-nodes-base.webhook"},
//!                 {"name": "Slack", "type": "n8n-nodes-base.slack",
//!                  "parameters": {"channel": "#alerts"}}
//!             ],
//!             "connections": {
//!                 "Webhook": {"main": [[{"node": "Slack", "type": "main", "index": 0}]]}
//!             }
//!         }"##,
//!     )?;
//!
//!     let report = validate_detailed(&workflow);
//!     assert!(report.valid);
//!
//!     let mut graph = to_visual(&workflow);
//!     graph.annotate_warnings(&report);
//!     let graph = apply_layout(graph, &LayoutOptions::default());
//!
//!     let summary = summarize(&workflow);
//!     for step in &summary.steps {
//!         println!("{step}");
//!     }
//!     println!("{} nodes placed", graph.nodes.len());
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod layout;
pub mod prelude;
pub mod summary;
pub mod validator;
pub mod visual;
pub mod workflow;
