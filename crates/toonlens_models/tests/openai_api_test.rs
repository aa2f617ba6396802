mod test_utils;

use test_utils::create_test_request;
use toonlens_error::ModelsErrorKind;
use toonlens_interface::UsageDriver;
use toonlens_models::{OpenAIClient, classify_error};

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // Nothing listens on the discard port locally.
    let client = OpenAIClient::new("sk-test").with_base_url("http://127.0.0.1:9/v1");
    let request = create_test_request("Hello", "gpt-4o", 10);

    // A proxy in the environment may answer with a gateway error instead.
    let err = client.usage(&request).await.unwrap_err();
    assert!(matches!(
        err.kind,
        ModelsErrorKind::Http(_) | ModelsErrorKind::Api { .. }
    ));
    assert_ne!(classify_error(&err), "auth");
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_usage_is_reported() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let client = OpenAIClient::new(std::env::var("OPENAI_API_KEY")?);
    let request = create_test_request("Process this JSON data:\n{\"a\": 1}", "gpt-4o-mini", 10);

    let usage = client.usage(&request).await?;

    assert!(*usage.prompt_tokens() > 0);
    assert!(*usage.total_tokens() >= *usage.prompt_tokens());
    println!("Usage: {:?}", usage);

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_rejects_bad_key() -> anyhow::Result<()> {
    let client = OpenAIClient::new("sk-invalid");
    let request = create_test_request("Hi", "gpt-4o-mini", 5);

    let err = client.usage(&request).await.unwrap_err();
    assert_eq!(classify_error(&err), "auth");

    Ok(())
}
