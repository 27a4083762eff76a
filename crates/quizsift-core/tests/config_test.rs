use std::path::PathBuf;

use quizsift_core::config::SiftConfig;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SiftConfig::from_toml("").unwrap();

    assert_eq!(
        config.dataset.data_path,
        PathBuf::from("data/JEOPARDY_QUESTIONS1.json")
    );
    assert_eq!(config.dataset.output_dir, PathBuf::from("subsets"));
    assert_eq!(config.filter.subset_cap, 1000);
    assert_eq!(config.filter.rare_threshold, 3);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[dataset]
data_path = "/custom/questions.json"

[filter]
subset_cap = 250
"#;
    let config = SiftConfig::from_toml(toml).unwrap();
    assert_eq!(
        config.dataset.data_path,
        PathBuf::from("/custom/questions.json")
    );
    assert_eq!(config.filter.subset_cap, 250);
    // Non-overridden fields keep defaults
    assert_eq!(config.dataset.output_dir, PathBuf::from("subsets"));
    assert_eq!(config.filter.rare_threshold, 3);
}

#[test]
fn config_serde_roundtrip() {
    let config = SiftConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = SiftConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.dataset.data_path, config.dataset.data_path);
    assert_eq!(roundtripped.filter.subset_cap, config.filter.subset_cap);
}

#[test]
fn config_rejects_invalid_toml() {
    assert!(SiftConfig::from_toml("[dataset").is_err());
}
