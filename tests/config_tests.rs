//! Integration tests for configuration round trips and the preference store.

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;
use termfolio::config::{Config, PreferenceStore, THEME_KEY};

#[test]
fn config_round_trips_through_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::new();
    config.ui.theme = Some("dark".to_string());
    config.profile.name = "Jamie Doe".to_string();
    config.profile.contact_email = "jamie@example.com".to_string();

    let content = toml::to_string_pretty(&config).unwrap();
    fs::write(&config_file, content).unwrap();

    let loaded: Config = toml::from_str(&fs::read_to_string(&config_file).unwrap()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn partial_config_fills_in_defaults() {
    let content = "[profile]\nname = \"Jamie Doe\"\n";
    let loaded: Config = toml::from_str(content).unwrap();

    assert_eq!(loaded.profile.name, "Jamie Doe");
    // Unspecified settings fall back to their defaults
    assert_eq!(loaded.profile.contact_email, "contact@example.com");
    assert_eq!(loaded.ui.theme, None);
}

#[test]
fn invalid_stored_theme_survives_load_untouched() {
    // Recovery-by-ignoring: the parser keeps the raw value, resolution skips it
    let content = "[ui]\ntheme = \"midnight\"\n";
    let loaded: Config = toml::from_str(content).unwrap();
    assert_eq!(loaded.ui.theme.as_deref(), Some("midnight"));
}

#[test]
fn config_exposes_theme_through_preference_store() {
    let mut config = Config::new();
    assert_eq!(PreferenceStore::get(&config, THEME_KEY), None);

    config.ui.theme = Some("dark".to_string());
    assert_eq!(
        PreferenceStore::get(&config, THEME_KEY).as_deref(),
        Some("dark")
    );
    assert_eq!(PreferenceStore::get(&config, "other-key"), None);
}

#[test]
fn memory_store_get_set() {
    let mut store: HashMap<String, String> = HashMap::new();
    assert_eq!(PreferenceStore::get(&store, THEME_KEY), None);

    store.set(THEME_KEY, "light").unwrap();
    assert_eq!(
        PreferenceStore::get(&store, THEME_KEY).as_deref(),
        Some("light")
    );
}
