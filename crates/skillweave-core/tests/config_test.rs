use skillweave_core::config::*;
use skillweave_core::EngineError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = EngineConfig::from_toml("").unwrap();

    // Taxonomy defaults
    assert_eq!(config.taxonomy.primary_edge_weight, 1.0);
    assert_eq!(config.taxonomy.secondary_edge_weight, 0.5);

    // Cascade defaults
    assert_eq!(config.cascade.hop_decay, 0.4);
    assert!((config.cascade.retention() - 0.6).abs() < f64::EPSILON);
    assert_eq!(config.cascade.materiality_threshold, 0.05);
    assert_eq!(config.cascade.max_depth, 4);

    // Bottleneck defaults
    assert_eq!(config.bottleneck.solid_threshold, 0.83);
    assert_eq!(config.bottleneck.significance_threshold, 0.5);

    // Risk defaults
    assert_eq!(config.risk.inversion_tolerance, 0.5);
    assert_eq!(config.risk.regression_tolerance, 0.15);
    assert_eq!(config.risk.stalling_tolerance, 0.1);
    assert_eq!(config.risk.stalling_min_span_days, 28);
    assert_eq!(config.risk.stalling_min_points, 3);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_partial_override_keeps_other_defaults() {
    let toml = r#"
[cascade]
hop_decay = 0.5

[risk]
regression_tolerance = 0.25
"#;
    let config = EngineConfig::from_toml(toml).unwrap();
    assert_eq!(config.cascade.hop_decay, 0.5);
    assert_eq!(config.cascade.max_depth, 4);
    assert_eq!(config.risk.regression_tolerance, 0.25);
    assert_eq!(config.risk.inversion_tolerance, 0.5);
}

#[test]
fn config_roundtrips_through_toml() {
    let mut config = EngineConfig::default();
    config.bottleneck.solid_threshold = 0.9;
    config.observability.json = true;
    let toml_str = config.to_toml().unwrap();
    let roundtripped = EngineConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn config_rejects_out_of_range_decay() {
    let err = EngineConfig::from_toml("[cascade]\nhop_decay = 1.0\n").unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig { .. }));
    assert!(err.to_string().contains("hop_decay"));
}

#[test]
fn config_rejects_zero_edge_weight() {
    let err = EngineConfig::from_toml("[taxonomy]\nsecondary_edge_weight = 0.0\n").unwrap_err();
    assert!(err.to_string().contains("secondary_edge_weight"));
}

#[test]
fn config_rejects_too_few_stalling_points() {
    let err = EngineConfig::from_toml("[risk]\nstalling_min_points = 2\n").unwrap_err();
    assert!(err.to_string().contains("stalling_min_points"));
}

#[test]
fn config_rejects_malformed_toml() {
    let err = EngineConfig::from_toml("[cascade\nhop_decay = ").unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig { .. }));
}
