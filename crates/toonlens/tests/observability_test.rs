//! Observability setup with span export disabled.
#![cfg(feature = "observability")]

use toonlens::observability::{ObservabilityConfig, init_observability_with_config};

#[test]
fn test_span_export_can_be_disabled() {
    let config = ObservabilityConfig::default()
        .with_log_level("warn")
        .with_span_export(false);
    assert!(!config.export_spans);

    let guard = init_observability_with_config(config).expect("subscriber installs once");
    assert!(!guard.exporting());
}
