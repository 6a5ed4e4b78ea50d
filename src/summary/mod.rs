//! Plain-language narration of a workflow's execution order.

use crate::catalog::{inferred_credential, is_trigger_type, node_meta};
use crate::workflow::{Node, Workflow};
use ahash::AHashSet;
use itertools::Itertools;
use serde::Serialize;
use std::collections::VecDeque;

/// An ordered, human-readable account of what a workflow does and which
/// external credentials it needs.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowSummary {
    pub title: String,
    pub steps: Vec<String>,
    pub credential_requirements: Vec<String>,
}

/// Summarize a workflow as a step list in execution order plus its
/// aggregate credential requirements.
pub fn summarize(workflow: &Workflow) -> WorkflowSummary {
    let ordered = execution_order(workflow);
    let steps = ordered
        .iter()
        .enumerate()
        .map(|(index, node)| describe_node(node, index == 0))
        .collect();

    WorkflowSummary {
        title: format!("What \"{}\" does", workflow.name),
        steps,
        credential_requirements: credential_requirements(&workflow.nodes),
    }
}

/// Nodes in execution order: a breadth-first walk from the first trigger
/// node, with everything the walk never reaches appended in input order.
/// Without a trigger the input order is returned as-is.
pub fn execution_order(workflow: &Workflow) -> Vec<&Node> {
    let Some(trigger) = workflow
        .nodes
        .iter()
        .find(|n| is_trigger_type(&n.type_name))
    else {
        return workflow.nodes.iter().collect();
    };

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut ordered: Vec<&Node> = Vec::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(&trigger.name);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(node) = workflow.node(current) {
            ordered.push(node);
        }

        if let Some(connections) = workflow.connections.get(current) {
            for group in connections.output_groups() {
                for target in group {
                    if !visited.contains(target.node.as_str()) {
                        queue.push_back(&target.node);
                    }
                }
            }
        }
    }

    for node in &workflow.nodes {
        if !visited.contains(node.name.as_str()) {
            ordered.push(node);
        }
    }

    ordered
}

/// One narrative line per node. The first step reads as the cause ("When
/// ...") and every later step as an effect ("Then ...").
fn describe_node(node: &Node, is_first: bool) -> String {
    let prefix = if is_first { "When" } else { "Then" };

    let phrase = match node.type_name.as_str() {
        // Triggers
        "n8n-nodes-base.webhook" => "a webhook request is received",
        "n8n-nodes-base.cron" | "n8n-nodes-base.schedule" | "n8n-nodes-base.scheduleTrigger" => {
            "the scheduled time occurs"
        }
        "n8n-nodes-base.manualTrigger" => "manually triggered",
        "n8n-nodes-base.errorTrigger" => "an error occurs in another workflow",
        "n8n-nodes-base.emailTrigger" => "an email is received",

        // Actions
        "n8n-nodes-base.slack" => "send a message to Slack",
        "n8n-nodes-base.googleSheets" => "update Google Sheets",
        "n8n-nodes-base.airtable" => "update Airtable",
        "n8n-nodes-base.notion" => "update Notion",
        "n8n-nodes-base.gmail" => "send via Gmail",
        "n8n-nodes-base.discord" => "send to Discord",
        "n8n-nodes-base.telegram" => "send via Telegram",
        "n8n-nodes-base.httpRequest" => "make an HTTP request",
        "n8n-nodes-base.emailSend" => "send an email",

        // Logic
        "n8n-nodes-base.if" => "check a condition",
        "n8n-nodes-base.switch" => "route based on value",
        "n8n-nodes-base.merge" => "merge data streams",
        "n8n-nodes-base.filter" => "filter the data",
        "n8n-nodes-base.wait" => "wait for a delay",

        // Transform
        "n8n-nodes-base.set" => "transform the data",
        "n8n-nodes-base.function" | "n8n-nodes-base.code" => "run custom code",

        // Output
        "n8n-nodes-base.respondToWebhook" => "respond to the request",

        _ => {
            let meta = node_meta(&node.type_name);
            return format!("{} run {}", prefix, meta.display_name);
        }
    };

    format!("{} {}", prefix, phrase)
}

/// Union of the explicit `credentials` keys on each node (reformatted for
/// display) and the credential names inferred from well-known integration
/// types, deduplicated in first-seen order.
fn credential_requirements(nodes: &[Node]) -> Vec<String> {
    let mut requirements: Vec<String> = Vec::new();

    for node in nodes {
        if let Some(credentials) = &node.credentials {
            for key in credentials.keys() {
                requirements.push(format_credential_name(key));
            }
        }
        if let Some(inferred) = inferred_credential(&node.type_name) {
            requirements.push(inferred.to_string());
        }
    }

    requirements.into_iter().unique().collect()
}

/// Turn an identifier-style credential key into a display name:
/// `slackApi` becomes `slack API`, `googleSheetsOAuth2Api` becomes
/// `google Sheets OAuth2 API`.
fn format_credential_name(name: &str) -> String {
    let name = match name.strip_suffix("Api") {
        Some(stripped) => format!("{} API", stripped),
        None => name.to_string(),
    };
    let name = match name.strip_suffix("OAuth2") {
        Some(stripped) => format!("{} OAuth", stripped),
        None => name,
    };

    let mut spaced = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
        prev_lower = c.is_ascii_lowercase();
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::format_credential_name;

    #[test]
    fn credential_names_are_reformatted_for_display() {
        assert_eq!(format_credential_name("slackApi"), "slack API");
        assert_eq!(format_credential_name("httpHeaderAuth"), "http Header Auth");
        assert_eq!(
            format_credential_name("googleSheetsOAuth2Api"),
            "google Sheets OAuth2 API"
        );
    }
}
