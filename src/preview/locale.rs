//! Localization resolver for multilingual value lists.

use crate::models::{CountryOfOrigin, LocalizedValue};
use crate::types::Language;

/// Pick the value for `language` out of a multilingual value list.
///
/// Linear scan, first entry in the requested language wins. When the
/// language is not present the first entry's value is returned instead,
/// whatever its language -- requesting an unavailable language deliberately
/// falls back to what the supplier published first, not to `default`.
/// `default` is only returned for an empty list or a valueless first entry.
pub fn resolve_localized(values: &[LocalizedValue], language: Language, default: &str) -> String {
    let code = language.as_str();
    for entry in values {
        if entry.language.as_deref() == Some(code) {
            if let Some(value) = &entry.value {
                return value.clone();
            }
        }
    }

    if let Some(first) = values.first() {
        if let Some(value) = &first.value {
            return value.clone();
        }
    }

    default.to_string()
}

/// Localized country-of-origin names, with unresolvable (empty) names
/// dropped.
pub fn resolve_country_names(countries: &[CountryOfOrigin], language: Language) -> Vec<String> {
    countries
        .iter()
        .map(|country| resolve_localized(&country.name, language, ""))
        .filter(|name| !name.is_empty())
        .collect()
}
