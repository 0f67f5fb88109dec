//! Unit tests for the closed-set parameter types.

use psfoodservice::{Environment, Language, Output, OutputStyle, PsError};

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

#[test]
fn language_codes_round_trip() {
    for language in Language::ALL {
        assert_eq!(Language::sanitize(language.as_str()), language);
    }
}

#[test]
fn language_sanitize_falls_back_to_default() {
    assert_eq!(Language::sanitize("xx"), Language::Nl);
    assert_eq!(Language::sanitize(""), Language::Nl);
}

#[test]
fn language_validate_rejects_unknown_codes() {
    let err = Language::validate("klingon").unwrap_err();
    assert!(matches!(err, PsError::InvalidArgument(_)));
}

#[test]
fn language_validate_accepts_known_codes() {
    assert_eq!(Language::validate("de").unwrap(), Language::De);
    assert_eq!(Language::validate("all").unwrap(), Language::All);
}

#[test]
fn language_effective_rewrites_all_to_default() {
    assert_eq!(Language::All.effective(), Language::Nl);
    assert_eq!(Language::Fr.effective(), Language::Fr);
}

// ---------------------------------------------------------------------------
// OutputStyle
// ---------------------------------------------------------------------------

#[test]
fn output_style_defaults_to_table() {
    assert_eq!(OutputStyle::default(), OutputStyle::Table);
    assert_eq!(OutputStyle::sanitize("nonsense"), OutputStyle::Table);
}

#[test]
fn output_style_validate() {
    assert_eq!(
        OutputStyle::validate("bootstrap").unwrap(),
        OutputStyle::Bootstrap
    );
    assert!(OutputStyle::validate("grid").is_err());
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[test]
fn output_wire_values_are_pascal_case() {
    assert_eq!(Output::All.as_str(), "All");
    assert_eq!(Output::ProductContent.as_str(), "ProductContent");
}

#[test]
fn output_sanitize_falls_back_to_all() {
    assert_eq!(Output::sanitize("everything"), Output::All);
    assert_eq!(Output::sanitize("Logistics"), Output::Logistics);
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

#[test]
fn environment_defaults_to_preproduction() {
    assert_eq!(Environment::default(), Environment::Preproduction);
}

#[test]
fn environment_selects_base_url() {
    assert_eq!(
        psfoodservice::config::base_url(Environment::Production),
        "https://webapi.psinfoodservice.com/v7"
    );
    assert_eq!(
        psfoodservice::config::base_url(Environment::Preproduction),
        "https://webapi.prepod.psinfoodservice.com/v7"
    );
}
