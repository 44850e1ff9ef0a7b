use std::sync::Arc;

use quickhire::application::services::{StructuredCompleter, extract_json_object};
use quickhire::infrastructure::llm::MockLlmClient;
use serde::Deserialize;

#[derive(Debug, PartialEq, Deserialize)]
struct Verdict {
    label: String,
    score: u32,
}

fn fallback() -> Verdict {
    Verdict {
        label: "unknown".to_string(),
        score: 0,
    }
}

const SCHEMA: &str = r#"{"label": "string", "score": 0}"#;

#[test]
fn given_plain_json_when_extracting_then_returns_whole_object() {
    assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
}

#[test]
fn given_json_wrapped_in_prose_when_extracting_then_returns_object_only() {
    let reply = "Sure! Here you go:\n```json\n{\"a\": {\"b\": 2}}\n```\nAnything else?";
    assert_eq!(extract_json_object(reply), Some("{\"a\": {\"b\": 2}}"));
}

#[test]
fn given_braces_inside_strings_when_extracting_then_ignored() {
    let reply = r#"{"text": "use } and { freely", "n": 1} trailing"#;
    assert_eq!(
        extract_json_object(reply),
        Some(r#"{"text": "use } and { freely", "n": 1}"#)
    );
}

#[test]
fn given_unbalanced_or_missing_object_when_extracting_then_none() {
    assert_eq!(extract_json_object("no json here"), None);
    assert_eq!(extract_json_object(r#"{"a": 1"#), None);
}

#[tokio::test]
async fn given_well_formed_reply_when_completing_then_parses_value() {
    let client = Arc::new(MockLlmClient::with_reply(
        r#"Result: {"label": "plumbing", "score": 7}"#,
    ));
    let completer = StructuredCompleter::new(client);

    let verdict = completer.complete("classify", SCHEMA, fallback()).await;

    assert_eq!(
        verdict,
        Verdict {
            label: "plumbing".to_string(),
            score: 7,
        }
    );
}

#[tokio::test]
async fn given_unavailable_client_when_completing_then_returns_fallback() {
    let completer = StructuredCompleter::new(Arc::new(MockLlmClient::unavailable()));

    let verdict = completer.complete("classify", SCHEMA, fallback()).await;

    assert_eq!(verdict, fallback());
}

#[tokio::test]
async fn given_reply_without_json_when_completing_then_returns_fallback() {
    let completer = StructuredCompleter::new(Arc::new(MockLlmClient::with_reply(
        "I am not sure what you mean.",
    )));

    let verdict = completer.complete("classify", SCHEMA, fallback()).await;

    assert_eq!(verdict, fallback());
}

#[tokio::test]
async fn given_reply_with_wrong_shape_when_completing_then_returns_fallback() {
    let completer = StructuredCompleter::new(Arc::new(MockLlmClient::with_reply(
        r#"{"label": 42}"#,
    )));

    let verdict = completer.complete("classify", SCHEMA, fallback()).await;

    assert_eq!(verdict, fallback());
}
