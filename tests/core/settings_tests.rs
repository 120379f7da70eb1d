//! Tests for settings persistence

use vora::api::DEFAULT_API_BASE;
use vora::i18n::Language;
use vora::settings::UserSettings;

use crate::common::scratch_path;

#[test]
fn test_defaults() {
    let settings = UserSettings::default();
    assert_eq!(settings.version, 1);
    assert_eq!(settings.language, Language::Portuguese);
    assert!(settings.dark_mode);
    assert_eq!(settings.api_base_url, DEFAULT_API_BASE);
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = scratch_path("settings.json");
    let settings = UserSettings {
        language: Language::English,
        dark_mode: false,
        api_base_url: "https://api.vora.example".into(),
        ..Default::default()
    };

    settings.save_to(&path).unwrap();
    let loaded = UserSettings::load_from(&path);

    assert_eq!(loaded.language, Language::English);
    assert!(!loaded.dark_mode);
    assert_eq!(loaded.api_base_url, "https://api.vora.example");
}

#[test]
fn test_missing_file_gives_defaults() {
    let loaded = UserSettings::load_from(&scratch_path("settings.json"));
    assert_eq!(loaded.language, Language::Portuguese);
    assert!(loaded.dark_mode);
}

#[test]
fn test_missing_fields_take_defaults() {
    let path = scratch_path("settings.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"language":"English"}"#).unwrap();

    let loaded = UserSettings::load_from(&path);
    assert_eq!(loaded.language, Language::English);
    assert!(loaded.dark_mode);
    assert_eq!(loaded.api_base_url, DEFAULT_API_BASE);
}

#[test]
fn test_corrupt_file_gives_defaults() {
    let path = scratch_path("settings.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    let loaded = UserSettings::load_from(&path);
    assert_eq!(loaded.language, Language::Portuguese);
}
