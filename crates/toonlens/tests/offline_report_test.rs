//! End-to-end offline runs through the facade crate.

use toonlens::{
    ComparisonConfig, ComparisonResult, PricingConfig, TiktokenCounter, render_report,
    run_comparison, run_comparison_with,
};

#[tokio::test]
async fn test_offline_run_renders_estimated_report() -> anyhow::Result<()> {
    let config = ComparisonConfig::builder().num_users(3usize).build()?;
    let result = run_comparison(&config).await?;

    assert!(!*result.api_called());
    assert!(result.json().tokens() > result.toon().tokens());

    let report = render_report(&result, false);
    assert!(report.contains("Model: gpt-4o"));
    assert!(report.contains("ESTIMATED"));
    assert!(report.contains("Token savings:"));

    Ok(())
}

#[tokio::test]
async fn test_result_serializes_for_json_output() -> anyhow::Result<()> {
    let pricing = PricingConfig::bundled()?;
    let config = ComparisonConfig::builder()
        .model("gpt-4o-mini")
        .num_users(2usize)
        .pricing(pricing.pricing_for("gpt-4o-mini"))
        .build()?;
    let counter = TiktokenCounter::new();
    let result = run_comparison_with(&config, None, &counter).await?;

    let json = serde_json::to_value(&result)?;
    assert_eq!(json["model"], "gpt-4o-mini");
    assert_eq!(json["api_called"], false);
    assert_eq!(json["json"]["format"], "json");
    assert_eq!(json["toon"]["format"], "toon");

    let back: ComparisonResult = serde_json::from_value(json)?;
    assert_eq!(back.json().tokens(), result.json().tokens());
    assert_eq!(back.toon().content(), result.toon().content());
    assert_eq!(back.savings().tokens(), result.savings().tokens());
    Ok(())
}

#[tokio::test]
async fn test_show_content_includes_previews() -> anyhow::Result<()> {
    let config = ComparisonConfig::builder().num_users(1usize).build()?;
    let result = run_comparison(&config).await?;

    let report = render_report(&result, true);
    assert!(report.contains("users[1]:"));
    Ok(())
}
