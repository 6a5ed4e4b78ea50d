//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the flowlens
//! crate. Import this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowlens::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow_json = std::fs::read_to_string("path/to/workflow.json")?;
//! let workflow = Workflow::from_json(&workflow_json)?;
//!
//! let report = validate_detailed(&workflow);
//! let mut graph = to_visual(&workflow);
//! graph.annotate_warnings(&report);
//! let graph = apply_layout(graph, &LayoutOptions::default());
//!
//! println!("{} placed nodes", graph.nodes.len());
//! # Ok(())
//! # }
//! ```

// Workflow model and transcript extraction
pub use crate::workflow::{extract_workflow, Node, Workflow};

// Validation
pub use crate::validator::{validate, validate_detailed, validate_json, DetailedReport, ValidationReport};

// Visual conversion and layout
pub use crate::layout::{apply_grid_layout, apply_layout, Direction, LayoutOptions};
pub use crate::visual::{to_visual, VisualEdge, VisualGraph, VisualNode};

// Narration
pub use crate::summary::{summarize, WorkflowSummary};

// Catalog lookups
pub use crate::catalog::{node_meta, NodeCategory, NodeMeta};

// Error types
pub use crate::error::ExtractError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
