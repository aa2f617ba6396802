//! Tests for the layered pricing configuration.

use std::io::Write;
use toonlens_core::ModelPricing;
use toonlens_error::ToonlensErrorKind;
use toonlens_pricing::PricingConfig;

fn write_toml(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_includes_bundled_models() -> anyhow::Result<()> {
    let pricing = PricingConfig::load()?;
    for model in ["gpt-4o", "gpt-4o-mini", "gpt-4-turbo", "gpt-3.5-turbo"] {
        assert!(pricing.get(model).is_some(), "missing {model}");
    }
    Ok(())
}

#[test]
fn test_from_file_reads_custom_table() -> anyhow::Result<()> {
    let file = write_toml(
        r#"
default_model = "local-llm"

[models."local-llm"]
input_per_1k = 0.0
output_per_1k = 0.0

[models."gpt-4o"]
input_per_1k = 0.005
output_per_1k = 0.015
"#,
    )?;

    let pricing = PricingConfig::from_file(file.path())?;
    assert_eq!(pricing.default_model, "local-llm");
    assert_eq!(pricing.pricing_for("gpt-4o"), ModelPricing::new(0.005, 0.015));
    assert_eq!(pricing.pricing_for("unlisted"), ModelPricing::new(0.0, 0.0));
    Ok(())
}

#[test]
fn test_negative_rate_is_rejected() -> anyhow::Result<()> {
    let file = write_toml(
        r#"
[models."gpt-4o"]
input_per_1k = -1.0
output_per_1k = 0.01
"#,
    )?;

    let err = PricingConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), ToonlensErrorKind::Config(_)));
    assert!(err.to_string().contains("gpt-4o"));
    Ok(())
}

#[test]
fn test_unknown_field_is_rejected() -> anyhow::Result<()> {
    let file = write_toml(
        r#"
[models."gpt-4o"]
input_per_1k = 0.0025
output_per_1k = 0.01
cached_per_1k = 0.001
"#,
    )?;

    assert!(PricingConfig::from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_missing_file_is_a_config_error() {
    let err = PricingConfig::from_file("/nonexistent/toonlens.toml").unwrap_err();
    assert!(matches!(err.kind(), ToonlensErrorKind::Config(_)));
}
