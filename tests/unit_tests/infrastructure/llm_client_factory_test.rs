use quickhire::application::ports::LlmClientError;
use quickhire::infrastructure::llm::create_llm_client;
use quickhire::presentation::config::LlmSettings;

fn settings(provider: &str) -> LlmSettings {
    LlmSettings {
        provider: provider.to_string(),
        api_key: "test-key".to_string(),
        base_url: None,
        azure_endpoint: None,
        chat_model: "gpt-4o-mini".to_string(),
        max_tokens: 256,
        temperature: 0.0,
        timeout_seconds: 5,
    }
}

#[tokio::test]
async fn given_disabled_provider_when_creating_client_then_completions_fail_softly() {
    let client = create_llm_client(&settings("none")).unwrap();

    let result = client.complete("hello", "").await;

    assert!(matches!(result, Err(LlmClientError::NotConfigured(_))));
}

#[test]
fn given_openai_provider_when_creating_client_then_succeeds() {
    assert!(create_llm_client(&settings("openai")).is_ok());
}

#[test]
fn given_lmstudio_without_base_url_when_creating_client_then_not_configured() {
    let result = create_llm_client(&settings("lmstudio"));
    assert!(matches!(result, Err(LlmClientError::NotConfigured(_))));
}

#[test]
fn given_lmstudio_with_base_url_when_creating_client_then_succeeds() {
    let mut lmstudio = settings("lmstudio");
    lmstudio.base_url = Some("http://localhost:1234/v1".to_string());
    assert!(create_llm_client(&lmstudio).is_ok());
}

#[test]
fn given_azure_without_endpoint_when_creating_client_then_not_configured() {
    let result = create_llm_client(&settings("azure"));
    assert!(matches!(result, Err(LlmClientError::NotConfigured(_))));
}

#[test]
fn given_unknown_provider_when_creating_client_then_not_configured() {
    let result = create_llm_client(&settings("carrier-pigeon"));
    assert!(matches!(result, Err(LlmClientError::NotConfigured(_))));
}
