//! Preparation instruction preview.

use serde::Serialize;

use crate::models::ProductSheet;
use crate::preview::locale;
use crate::types::Language;

/// One localized preparation method.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationView {
    pub preparation_type: String,
    pub description: String,
}

/// Localize the sheet's preparation instructions.
///
/// `None` when the sheet carries no preparation information list; an empty
/// list yields `Some` of an empty vec.
pub fn preparation_information_preview(
    sheet: &ProductSheet,
    language: Language,
) -> Option<Vec<PreparationView>> {
    let language = language.effective();
    let informations = sheet
        .specification
        .as_ref()?
        .preparation_informations
        .as_ref()?;

    Some(
        informations
            .iter()
            .map(|information| PreparationView {
                preparation_type: information
                    .preparation_type
                    .as_ref()
                    .map(|t| locale::resolve_localized(&t.name, language, ""))
                    .unwrap_or_default(),
                description: locale::resolve_localized(
                    &information.preparation_description,
                    language,
                    "",
                ),
            })
            .collect(),
    )
}
