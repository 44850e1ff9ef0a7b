use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::application::ports::LlmClient;

/// Turns free-form model output into a typed value, degrading to a caller
/// supplied fallback on any failure instead of surfacing an error.
pub struct StructuredCompleter {
    llm_client: Arc<dyn LlmClient>,
}

impl StructuredCompleter {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// `schema` is a JSON example of the expected reply shape and is embedded
    /// in the instructions verbatim.
    pub async fn complete<T>(&self, prompt: &str, schema: &str, fallback: T) -> T
    where
        T: DeserializeOwned,
    {
        let instructions = format!(
            "Respond with a single JSON object and nothing else. \
             The object must match this shape:\n{}",
            schema
        );

        let reply = match self.llm_client.complete(prompt, &instructions).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "LLM completion failed, using fallback");
                return fallback;
            }
        };

        let Some(json) = extract_json_object(&reply) else {
            tracing::warn!(reply_len = reply.len(), "LLM reply had no JSON object, using fallback");
            return fallback;
        };

        match serde_json::from_str::<T>(json) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "LLM reply did not match schema, using fallback");
                fallback
            }
        }
    }
}

/// First balanced `{...}` in the text, skipping braces inside strings.
/// Models often wrap JSON in prose or code fences.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
