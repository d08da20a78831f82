use foundry_domain::computer::Computer;
use foundry_domain::config::{AssemblyConfig, FoundryConfig, JournalConfig, LoggingConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
    assert!(!logging.json);

    assert_eq!(JournalConfig::default().path, std::path::PathBuf::from("app.log"));

    let assembly = AssemblyConfig::default();
    assert_eq!(assembly.builder, "gaming");
    assert_eq!(assembly.preset, "high-end");

    assert!(FoundryConfig::default().widgets.family.is_none());
}

#[test]
fn foundry_config_deserializes_partial_documents() {
    let raw = json!({
        "journal": { "path": "/tmp/foundry.log" },
        "widgets": { "family": "mac" },
        "assembly": { "preset": "minimal" }
    });

    let cfg: FoundryConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.journal.path, std::path::PathBuf::from("/tmp/foundry.log"));
    assert_eq!(cfg.widgets.family.as_deref(), Some("mac"));
    assert_eq!(cfg.assembly.preset, "minimal");
    assert_eq!(cfg.assembly.builder, "gaming");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn config_clones_share_until_mutated() {
    let base = FoundryConfig::default();
    let mut tuned = base.clone();
    tuned.logging.level = "debug".to_owned();

    assert_eq!(base.logging.level, "info");
    assert_eq!(tuned.logging.level, "debug");
}

#[test]
fn computer_snapshot_deserializes_with_missing_fields() {
    let raw = json!({ "cpu": "Entry-level CPU", "ram": ["8GB DDR4"] });

    let computer: Computer = serde_json::from_value(raw).expect("computer deserialize");
    assert_eq!(computer.cpu.as_deref(), Some("Entry-level CPU"));
    assert_eq!(computer.ram, vec!["8GB DDR4".to_owned()]);
    assert!(computer.gpu.is_none());
}
