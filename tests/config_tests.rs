mod common;

use std::fs;

use categorizer_core::{
    config::{Config, ConfigManager},
    CategorizerError, CategorySuggester,
};

#[test]
fn missing_config_loads_defaults() {
    let home = common::temp_home();
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf());
    let config = manager.load().expect("load");
    assert_eq!(config, Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let home = common::temp_home();
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf());

    let config = Config {
        threshold: 65,
        lexicon_path: Some(home.path().join("lexicon.json")),
        store_path: None,
    };
    manager.save(&config).expect("save");

    assert_eq!(manager.load().expect("load"), config);
}

#[test]
fn invalid_threshold_in_file_is_rejected() {
    let home = common::temp_home();
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf());
    fs::write(manager.path(), r#"{ "threshold": 150 }"#).expect("write");
    assert!(matches!(manager.load(), Err(CategorizerError::Config(_))));
}

#[test]
fn malformed_config_reports_path() {
    let home = common::temp_home();
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf());
    fs::write(manager.path(), "{ not json").expect("write");
    match manager.load() {
        Err(CategorizerError::Config(message)) => assert!(message.contains("config.json")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn lexicon_file_replaces_builtin_lexicon() {
    let home = common::temp_home();
    let lexicon_path = home.path().join("lexicon.json");
    common::write_lexicon(&lexicon_path, &[("gym", "Fitness"), ("uber", "Rides")]);

    let config = Config {
        lexicon_path: Some(lexicon_path),
        ..Config::default()
    };
    let suggester = CategorySuggester::new(config.load_lexicon().expect("lexicon"));

    assert_eq!(suggester.suggest("UBER TRIP"), Some("Rides"));
    assert_eq!(suggester.suggest("Starbucks"), None);
}

#[test]
fn invalid_lexicon_file_is_rejected() {
    let home = common::temp_home();
    let lexicon_path = home.path().join("lexicon.json");
    common::write_lexicon(&lexicon_path, &[("Gym", "Fitness")]);

    let config = Config {
        lexicon_path: Some(lexicon_path),
        ..Config::default()
    };
    assert!(matches!(
        config.load_lexicon(),
        Err(CategorizerError::InvalidLexicon(_))
    ));
}
