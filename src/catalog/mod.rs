//! Static metadata for the automation engine's node taxonomy.
//!
//! This is the only place in the crate that knows the engine's dotted type
//! tags: the display table, the trigger-type set, the conditional-type set
//! and the credential-inference table all live here. Everything is a total
//! function over arbitrary strings: unknown tags fall back to a generic
//! classification and never fail.

use serde::Serialize;
use std::fmt;

/// Display category of a node, used for color coding in the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Trigger,
    Action,
    Logic,
    Transform,
    Output,
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeCategory::Trigger => "trigger",
            NodeCategory::Action => "action",
            NodeCategory::Logic => "logic",
            NodeCategory::Transform => "transform",
            NodeCategory::Output => "output",
        };
        write!(f, "{}", name)
    }
}

/// Visual metadata resolved for a node type.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMeta {
    /// Icon key for the rendering surface (Lucide icon names).
    pub icon: &'static str,
    pub category: NodeCategory,
    pub display_name: String,
}

/// Node types that can initiate workflow execution without an incoming
/// connection.
pub const TRIGGER_TYPES: [&str; 8] = [
    "n8n-nodes-base.webhook",
    "n8n-nodes-base.cron",
    "n8n-nodes-base.schedule",
    "n8n-nodes-base.scheduleTrigger",
    "n8n-nodes-base.manualTrigger",
    "n8n-nodes-base.errorTrigger",
    "n8n-nodes-base.workflowTrigger",
    "n8n-nodes-base.emailTrigger",
];

/// Node types whose output ports represent mutually exclusive branches.
pub const CONDITIONAL_TYPES: [&str; 2] = ["n8n-nodes-base.if", "n8n-nodes-base.switch"];

pub fn is_trigger_type(type_tag: &str) -> bool {
    TRIGGER_TYPES.contains(&type_tag)
}

pub fn is_conditional_type(type_tag: &str) -> bool {
    CONDITIONAL_TYPES.contains(&type_tag)
}

/// Resolve the visual metadata for a node type.
///
/// Unknown tags default to the `Action` category with a generic icon and a
/// display name derived from the tag itself.
pub fn node_meta(type_tag: &str) -> NodeMeta {
    match known_meta(type_tag) {
        Some((icon, category, name)) => NodeMeta {
            icon,
            category,
            display_name: name.to_string(),
        },
        None => NodeMeta {
            icon: "Box",
            category: NodeCategory::Action,
            display_name: derive_display_name(type_tag),
        },
    }
}

/// Credential the deployment target must have configured for a node type,
/// for the common integrations.
pub fn inferred_credential(type_tag: &str) -> Option<&'static str> {
    let credential = match type_tag {
        "n8n-nodes-base.slack" => "Slack API",
        "n8n-nodes-base.googleSheets" => "Google Sheets OAuth",
        "n8n-nodes-base.airtable" => "Airtable API",
        "n8n-nodes-base.notion" => "Notion API",
        "n8n-nodes-base.gmail" => "Gmail OAuth",
        "n8n-nodes-base.discord" => "Discord Webhook",
        "n8n-nodes-base.telegram" => "Telegram API",
        "n8n-nodes-base.github" => "GitHub API",
        "n8n-nodes-base.jira" => "Jira API",
        "n8n-nodes-base.salesforce" => "Salesforce OAuth",
        "n8n-nodes-base.stripe" => "Stripe API",
        "n8n-nodes-base.twilio" => "Twilio API",
        _ => return None,
    };
    Some(credential)
}

fn known_meta(type_tag: &str) -> Option<(&'static str, NodeCategory, &'static str)> {
    use NodeCategory::*;
    let meta = match type_tag {
        // Triggers
        "n8n-nodes-base.webhook" => ("Webhook", Trigger, "Webhook"),
        "n8n-nodes-base.cron" => ("Clock", Trigger, "Schedule"),
        "n8n-nodes-base.schedule" => ("Calendar", Trigger, "Schedule"),
        "n8n-nodes-base.scheduleTrigger" => ("Calendar", Trigger, "Schedule"),
        "n8n-nodes-base.manualTrigger" => ("Play", Trigger, "Manual"),
        "n8n-nodes-base.errorTrigger" => ("AlertTriangle", Trigger, "Error"),
        "n8n-nodes-base.workflowTrigger" => ("Workflow", Trigger, "Workflow"),
        "n8n-nodes-base.emailTrigger" => ("Mail", Trigger, "Email"),

        // Actions
        "n8n-nodes-base.slack" => ("MessageSquare", Action, "Slack"),
        "n8n-nodes-base.googleSheets" => ("Table", Action, "Google Sheets"),
        "n8n-nodes-base.airtable" => ("Database", Action, "Airtable"),
        "n8n-nodes-base.notion" => ("FileText", Action, "Notion"),
        "n8n-nodes-base.httpRequest" => ("Globe", Action, "HTTP Request"),
        "n8n-nodes-base.gmail" => ("Mail", Action, "Gmail"),
        "n8n-nodes-base.discord" => ("MessageCircle", Action, "Discord"),
        "n8n-nodes-base.github" => ("Github", Action, "GitHub"),
        "n8n-nodes-base.jira" => ("CheckSquare", Action, "Jira"),
        "n8n-nodes-base.salesforce" => ("Cloud", Action, "Salesforce"),
        "n8n-nodes-base.stripe" => ("CreditCard", Action, "Stripe"),
        "n8n-nodes-base.twilio" => ("Phone", Action, "Twilio"),
        "n8n-nodes-base.telegram" => ("Send", Action, "Telegram"),

        // Logic
        "n8n-nodes-base.if" => ("GitBranch", Logic, "IF"),
        "n8n-nodes-base.switch" => ("GitMerge", Logic, "Switch"),
        "n8n-nodes-base.merge" => ("GitPullRequest", Logic, "Merge"),
        "n8n-nodes-base.filter" => ("Filter", Logic, "Filter"),
        "n8n-nodes-base.splitInBatches" => ("Layers", Logic, "Split Batches"),
        "n8n-nodes-base.wait" => ("Pause", Logic, "Wait"),

        // Transform
        "n8n-nodes-base.set" => ("Edit3", Transform, "Set"),
        "n8n-nodes-base.function" => ("Code", Transform, "Function"),
        "n8n-nodes-base.code" => ("Terminal", Transform, "Code"),
        "n8n-nodes-base.itemLists" => ("List", Transform, "Item Lists"),
        "n8n-nodes-base.dateTime" => ("Clock", Transform, "Date/Time"),
        "n8n-nodes-base.crypto" => ("Lock", Transform, "Crypto"),

        // Output
        "n8n-nodes-base.emailSend" => ("Send", Output, "Send Email"),
        "n8n-nodes-base.respondToWebhook" => ("Reply", Output, "Respond"),
        "n8n-nodes-base.noOp" => ("Circle", Output, "No Op"),

        _ => return None,
    };
    Some(meta)
}

/// Derive a readable display name from the trailing segment of a dotted
/// type tag, e.g. `"n8n-nodes-base.httpRequest"` -> `"Http Request"`.
fn derive_display_name(type_tag: &str) -> String {
    let segment = type_tag.rsplit('.').next().unwrap_or(type_tag);
    let mut out = String::with_capacity(segment.len() + 4);
    for (i, ch) in segment.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out.trim().to_string()
}
