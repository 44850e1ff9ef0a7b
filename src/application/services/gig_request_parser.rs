use serde::{Deserialize, Serialize};

use crate::domain::Urgency;

use super::StructuredCompleter;

const FALLBACK_CATEGORY: &str = "General";

const SUGGESTION_SCHEMA: &str = r#"{"category": "Plumber", "urgency": "ASAP | Today | Later", "description": "short summary of the job"}"#;

const PROMPT_PREAMBLE: &str = "A customer described a job they need done. \
Pick the trade category, how urgent it is, and summarise the job in one sentence.\n\nTranscript: ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigDraftSuggestion {
    pub category: String,
    pub urgency: Urgency,
    pub description: String,
}

/// Turns a spoken job request into a pre-filled gig draft.
pub struct GigRequestParser {
    completer: StructuredCompleter,
}

impl GigRequestParser {
    pub fn new(completer: StructuredCompleter) -> Self {
        Self { completer }
    }

    pub async fn parse(&self, transcript: &str) -> GigDraftSuggestion {
        let transcript = transcript.trim();
        let fallback = GigDraftSuggestion {
            category: FALLBACK_CATEGORY.to_string(),
            urgency: Urgency::Today,
            description: transcript.to_string(),
        };

        if transcript.is_empty() {
            return fallback;
        }

        let prompt = format!("{}{}", PROMPT_PREAMBLE, transcript);
        let mut suggestion = self
            .completer
            .complete(&prompt, SUGGESTION_SCHEMA, fallback)
            .await;

        if suggestion.category.trim().is_empty() {
            suggestion.category = FALLBACK_CATEGORY.to_string();
        }
        suggestion
    }
}
