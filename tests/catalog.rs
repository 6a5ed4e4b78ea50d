//! Tests for the node metadata catalog.
use flowlens::catalog::{
    inferred_credential, is_conditional_type, is_trigger_type, node_meta, NodeCategory,
};

#[test]
fn test_known_types_resolve() {
    let slack = node_meta("n8n-nodes-base.slack");
    assert_eq!(slack.icon, "MessageSquare");
    assert_eq!(slack.category, NodeCategory::Action);
    assert_eq!(slack.display_name, "Slack");

    let webhook = node_meta("n8n-nodes-base.webhook");
    assert_eq!(webhook.category, NodeCategory::Trigger);

    let respond = node_meta("n8n-nodes-base.respondToWebhook");
    assert_eq!(respond.category, NodeCategory::Output);

    let set = node_meta("n8n-nodes-base.set");
    assert_eq!(set.category, NodeCategory::Transform);
}

#[test]
fn test_unknown_types_derive_a_display_name() {
    let meta = node_meta("n8n-nodes-base.mySpecialStep");
    assert_eq!(meta.icon, "Box");
    assert_eq!(meta.category, NodeCategory::Action);
    assert_eq!(meta.display_name, "My Special Step");
}

#[test]
fn test_lookup_is_total() {
    // Any string yields well-formed metadata, never a failure.
    for tag in ["", ".", "a", "a.b.c", "....", "ALLCAPS", "\u{1F600}"] {
        let meta = node_meta(tag);
        assert!(!meta.icon.is_empty());
    }
}

#[test]
fn test_trigger_and_conditional_sets() {
    assert!(is_trigger_type("n8n-nodes-base.webhook"));
    assert!(is_trigger_type("n8n-nodes-base.scheduleTrigger"));
    assert!(!is_trigger_type("n8n-nodes-base.slack"));

    assert!(is_conditional_type("n8n-nodes-base.if"));
    assert!(is_conditional_type("n8n-nodes-base.switch"));
    assert!(!is_conditional_type("n8n-nodes-base.merge"));
}

#[test]
fn test_credential_inference() {
    assert_eq!(inferred_credential("n8n-nodes-base.slack"), Some("Slack API"));
    assert_eq!(
        inferred_credential("n8n-nodes-base.googleSheets"),
        Some("Google Sheets OAuth")
    );
    assert_eq!(inferred_credential("n8n-nodes-base.set"), None);
}
