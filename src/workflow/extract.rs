//! Detection of workflow JSON embedded in free text.
//!
//! AI chat replies rarely consist of a bare JSON document; the graph is
//! usually wrapped in prose and a fenced code block. This module scans such
//! text for an embedded workflow literal and returns a tagged result, so
//! downstream code never has to duck-type unstructured strings itself.

use super::definition::Workflow;
use once_cell::sync::Lazy;
use regex::Regex;

static CODE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*\n?(.*?)\n?```").expect("valid regex"));

/// Scan free text for an embedded workflow JSON literal.
///
/// A fenced ```json block is preferred; otherwise the first balanced JSON
/// object in the text is taken. The candidate is recognized as a workflow
/// only if it is an object with a `name`, a non-empty `nodes` array, and a
/// `type` on every node. Anything else yields `None`, so callers never
/// receive a value that has not passed this shape check.
pub fn extract_workflow(text: &str) -> Option<Workflow> {
    let candidate = CODE_BLOCK_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text);

    let object = first_json_object(candidate)?;
    let value: serde_json::Value = serde_json::from_str(object).ok()?;

    if !is_workflow_shaped(&value) {
        log::debug!("found a JSON object, but it does not match the workflow shape");
        return None;
    }

    serde_json::from_value(value).ok()
}

/// The recognition schema: `name` present, `nodes` a non-empty array, and
/// every node bearing a string `type`.
fn is_workflow_shaped(value: &serde_json::Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    if !object.contains_key("name") {
        return false;
    }
    let Some(nodes) = object.get("nodes").and_then(|n| n.as_array()) else {
        return false;
    };
    !nodes.is_empty()
        && nodes
            .iter()
            .all(|n| n.get("type").is_some_and(|t| t.is_string()))
}

/// Find the first balanced `{...}` span in the text, skipping braces inside
/// string literals.
fn first_json_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut start = None;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' if !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(s) = start {
                        return Some(&text[s..=i]);
                    }
                }
            }
            _ => {}
        }
    }
    None
}
