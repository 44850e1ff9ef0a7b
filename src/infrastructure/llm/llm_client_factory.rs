use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::LlmSettings;

use super::{MockLlmClient, OpenAiCompatibleClient};

pub fn create_llm_client(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientError> {
    let base_url = match settings.provider.as_str() {
        "none" | "mock" => {
            tracing::info!("LLM provider disabled, AI helpers will return fallbacks");
            return Ok(Arc::new(MockLlmClient::unavailable()));
        }
        "openai" => settings
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
        "lmstudio" => settings.base_url.clone().ok_or_else(|| {
            LlmClientError::NotConfigured("base_url required for lmstudio provider".to_string())
        })?,
        "azure" => {
            let endpoint = settings.azure_endpoint.as_ref().ok_or_else(|| {
                LlmClientError::NotConfigured(
                    "azure_endpoint required for azure provider".to_string(),
                )
            })?;
            format!(
                "{}/openai/deployments/{}",
                endpoint.trim_end_matches('/'),
                settings.chat_model
            )
        }
        other => {
            return Err(LlmClientError::NotConfigured(format!(
                "unknown provider: {}",
                other
            )));
        }
    };

    let client = OpenAiCompatibleClient::builder(base_url, settings.chat_model.clone())
        .api_key(settings.api_key.clone())
        .azure(settings.provider == "azure")
        .max_tokens(settings.max_tokens)
        .temperature(settings.temperature)
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .build()?;

    tracing::info!(provider = %settings.provider, model = %settings.chat_model, "LLM client configured");
    Ok(Arc::new(client))
}
