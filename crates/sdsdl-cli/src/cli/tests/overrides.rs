//! Tests for applying input flags over the loaded config.

use crate::cli::InputArgs;
use sdsdl_core::config::SdsConfig;
use std::path::PathBuf;

#[test]
fn input_args_override_config() {
    let mut cfg = SdsConfig::default();
    let args = InputArgs {
        input: Some(PathBuf::from("snap.json")),
        base_url: Some("https://sds.example.com/DocContentSet".to_string()),
        strict: true,
    };
    args.apply(&mut cfg);
    assert_eq!(cfg.input_path, PathBuf::from("snap.json"));
    assert_eq!(cfg.base_url, "https://sds.example.com/DocContentSet");
    assert!(cfg.strict_input);
}

#[test]
fn absent_flags_keep_config() {
    let mut cfg = SdsConfig::default();
    cfg.strict_input = true;
    InputArgs::default().apply(&mut cfg);
    assert_eq!(cfg.input_path, PathBuf::from("main.json"));
    assert!(cfg.strict_input);
}
