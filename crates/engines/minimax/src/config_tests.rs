use super::*;

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.depth, 3);
    assert_eq!(config.pruning, Pruning::AlphaBeta);
}

#[test]
fn test_missing_keys_keep_defaults() {
    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());

    let config = EngineConfig::from_toml_str("depth = 5").unwrap();
    assert_eq!(config.depth, 5);
    assert_eq!(config.pruning, Pruning::AlphaBeta);
}

#[test]
fn test_pruning_can_be_disabled() {
    let config = EngineConfig::from_toml_str("depth = 2\npruning = \"disabled\"").unwrap();
    assert_eq!(
        config,
        EngineConfig {
            depth: 2,
            pruning: Pruning::Disabled,
        }
    );
}

#[test]
fn test_rejects_bad_documents() {
    for text in ["depth = \"deep\"", "depth = 300", "pruning = \"sometimes\"", "dpeth = 4"] {
        assert!(
            matches!(EngineConfig::from_toml_str(text), Err(ConfigError::Parse(_))),
            "{text} should not parse"
        );
    }
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("minimax-config-{}.toml", std::process::id()));
    std::fs::write(&path, "depth = 4\n").unwrap();
    let loaded = EngineConfig::load(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded.unwrap().depth, 4);
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("minimax-config-does-not-exist.toml");
    assert!(matches!(
        EngineConfig::load(&path),
        Err(ConfigError::Io { .. })
    ));
}
