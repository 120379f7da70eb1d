//! Tests for language selection and translated messages

use vora::controller::{preview_error_message, validation_message};
use vora::i18n::Language;
use vora::preview::PreviewError;
use vora::validation::ValidationError;

#[test]
fn test_language_codes() {
    assert_eq!(Language::Portuguese.locale_code(), "pt-BR");
    assert_eq!(Language::English.locale_code(), "en");
    assert_eq!(Language::all().len(), 2);
    assert_eq!(Language::default(), Language::Portuguese);
}

#[test]
fn test_language_serde_names() {
    let json = serde_json::to_string(&Language::English).unwrap();
    assert_eq!(json, "\"English\"");
    let parsed: Language = serde_json::from_str("\"Portuguese\"").unwrap();
    assert_eq!(parsed, Language::Portuguese);
}

// The locale is process-wide, so every assertion that depends on it lives
// in this one test.
#[test]
fn test_messages_follow_active_language() {
    Language::English.apply();
    let english = validation_message(&ValidationError::MissingFields);
    let english_preview = preview_error_message(&PreviewError::NotTabular);

    Language::Portuguese.apply();
    let portuguese = validation_message(&ValidationError::MissingFields);
    let portuguese_preview = preview_error_message(&PreviewError::NotTabular);

    Language::English.apply();

    assert!(!english.is_empty());
    assert!(!portuguese.is_empty());
    assert_ne!(english, portuguese);
    assert_ne!(english_preview, portuguese_preview);
    // Keys must resolve to text, never echo back
    assert!(!english.contains("auth."));
    assert!(!portuguese_preview.contains("preview."));
}
