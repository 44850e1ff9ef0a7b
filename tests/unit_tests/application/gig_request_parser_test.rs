use std::sync::Arc;

use quickhire::application::services::{GigRequestParser, StructuredCompleter};
use quickhire::domain::Urgency;
use quickhire::infrastructure::llm::MockLlmClient;

fn parser(client: MockLlmClient) -> GigRequestParser {
    GigRequestParser::new(StructuredCompleter::new(Arc::new(client)))
}

#[tokio::test]
async fn given_model_suggestion_when_parsing_then_returns_it() {
    let parser = parser(MockLlmClient::with_reply(
        r#"{"category": "Electrician", "urgency": "ASAP", "description": "Sparking outlet in the kitchen"}"#,
    ));

    let suggestion = parser
        .parse("my kitchen outlet is sparking, need someone now")
        .await;

    assert_eq!(suggestion.category, "Electrician");
    assert_eq!(suggestion.urgency, Urgency::Asap);
    assert_eq!(suggestion.description, "Sparking outlet in the kitchen");
}

#[tokio::test]
async fn given_unavailable_model_when_parsing_then_generic_draft_with_transcript() {
    let parser = parser(MockLlmClient::unavailable());

    let suggestion = parser.parse("  fix my fence sometime today  ").await;

    assert_eq!(suggestion.category, "General");
    assert_eq!(suggestion.urgency, Urgency::Today);
    assert_eq!(suggestion.description, "fix my fence sometime today");
}

#[tokio::test]
async fn given_blank_category_from_model_when_parsing_then_general() {
    let parser = parser(MockLlmClient::with_reply(
        r#"{"category": " ", "urgency": "Later", "description": "Paint the shed"}"#,
    ));

    let suggestion = parser.parse("paint my shed next month").await;

    assert_eq!(suggestion.category, "General");
    assert_eq!(suggestion.urgency, Urgency::Later);
}

#[tokio::test]
async fn given_empty_transcript_when_parsing_then_fallback_without_model_call() {
    let parser = parser(MockLlmClient::with_reply(
        r#"{"category": "Mover", "urgency": "ASAP", "description": "x"}"#,
    ));

    let suggestion = parser.parse("   ").await;

    assert_eq!(suggestion.category, "General");
    assert_eq!(suggestion.description, "");
}
