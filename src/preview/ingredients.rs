//! Ingredient list preview.

use serde::Serialize;

use crate::models::ProductSheet;
use crate::preview::locale;
use crate::types::Language;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Localized ingredient information of one product sheet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientsPreview {
    /// Full ingredient declaration text.
    pub declaration: String,
    /// Shortened declaration for list views.
    pub declaration_preview: String,
    /// Per-ingredient breakdown, `None` when the sheet has none.
    pub ingredients: Option<Vec<IngredientView>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientView {
    pub sequence: Option<i64>,
    pub name: String,
    pub country_of_origins: Vec<String>,
}

/// Which declaration text of the ingredient set to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationField {
    Declaration,
    DeclarationPreview,
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// Bundle the declaration texts and the ingredient list for one sheet.
pub fn ingredients_preview(sheet: &ProductSheet, language: Language) -> IngredientsPreview {
    let language = language.effective();
    IngredientsPreview {
        declaration: declaration(sheet, DeclarationField::Declaration, language),
        declaration_preview: declaration(sheet, DeclarationField::DeclarationPreview, language),
        ingredients: extract_ingredients(sheet, language),
    }
}

/// Resolve one of the ingredient set's declaration texts.
///
/// Empty string when the ingredient set or the field is absent; otherwise
/// the usual localization rules apply, first-available language included.
pub fn declaration(sheet: &ProductSheet, field: DeclarationField, language: Language) -> String {
    let language = language.effective();
    let set = sheet
        .specification
        .as_ref()
        .and_then(|spec| spec.ingredient_set.as_ref());

    let values = set.and_then(|set| match field {
        DeclarationField::Declaration => set.declaration.as_deref(),
        DeclarationField::DeclarationPreview => set.declaration_preview.as_deref(),
    });

    match values {
        Some(values) => locale::resolve_localized(values, language, ""),
        None => String::new(),
    }
}

/// Localize the sheet's ingredient list.
///
/// `None` when the sheet carries no ingredients. Countries of origin that
/// do not resolve to a name are dropped.
pub fn extract_ingredients(
    sheet: &ProductSheet,
    language: Language,
) -> Option<Vec<IngredientView>> {
    let language = language.effective();
    let ingredients = sheet
        .specification
        .as_ref()?
        .ingredient_set
        .as_ref()?
        .ingredients
        .as_ref()?;

    let views: Vec<IngredientView> = ingredients
        .iter()
        .map(|ingredient| IngredientView {
            sequence: ingredient.sequence,
            name: locale::resolve_localized(&ingredient.name, language, ""),
            country_of_origins: locale::resolve_country_names(
                &ingredient.country_of_origins,
                language,
            ),
        })
        .collect();

    if views.is_empty() {
        None
    } else {
        Some(views)
    }
}
