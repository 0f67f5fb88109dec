//! Human-readable previews derived from a product sheet.
//!
//! Everything in this tree is pure given its inputs: a decoded
//! [`ProductSheet`](crate::models::ProductSheet), a [`Language`] and for the
//! allergen preview an [`OutputStyle`](crate::types::OutputStyle). Absent
//! document sections yield `None` or empty strings, never errors.
//!
//! The only process-wide state is the fixed per-language label table and the
//! containment glyphs below, both immutable `'static` data.
//!
//! Every public entry point rewrites [`Language::All`] to the default
//! language before resolving anything, so the pseudo-language never reaches
//! the localization scan.

pub mod allergens;
pub mod ingredients;
pub mod locale;
pub mod nutrition;
pub mod preparation;

pub use allergens::{
    allergens_preview, extract_allergens, render_allergens, sort_by_sequence, AllergenView,
};
pub use ingredients::{
    declaration, extract_ingredients, ingredients_preview, DeclarationField, IngredientView,
    IngredientsPreview,
};
pub use locale::{resolve_country_names, resolve_localized};
pub use nutrition::{
    extract_state_of_preparations, nutrients_preview, render_nutrition_table, NutrientView,
    StateOfPreparationView,
};
pub use preparation::{preparation_information_preview, PreparationView};

use crate::types::Language;

// ---------------------------------------------------------------------------
// UiLabels
// ---------------------------------------------------------------------------

/// Fixed UI strings for one language, used by the legend and table headers.
pub(crate) struct UiLabels {
    pub contains: &'static str,
    pub may_contain: &'static str,
    pub without: &'static str,
    pub not_specified: &'static str,
    pub per: &'static str,
    pub per_portie: &'static str,
}

static NL: UiLabels = UiLabels {
    contains: "Bevat",
    may_contain: "Kan sporen bevatten",
    without: "Zonder",
    not_specified: "Niet opgegeven",
    per: "Per",
    per_portie: "Per portie",
};

static EN: UiLabels = UiLabels {
    contains: "Contains",
    may_contain: "May contain traces",
    without: "Without",
    not_specified: "Not specified",
    per: "Per",
    per_portie: "Per portion",
};

// The trailing space in `per` is in the upstream label data.
static FR: UiLabels = UiLabels {
    contains: "Contient",
    may_contain: "Peut contenir des traces",
    without: "Sans",
    not_specified: "Non spécifié",
    per: "Par ",
    per_portie: "Par portion",
};

static DE: UiLabels = UiLabels {
    contains: "Enthält",
    may_contain: "Kann Spuren enthalten",
    without: "Ohne",
    not_specified: "Nicht angegeben",
    per: "Pro",
    per_portie: "Pro Portion",
};

pub(crate) fn ui_labels(language: Language) -> &'static UiLabels {
    match language.effective() {
        Language::Nl | Language::All => &NL,
        Language::En => &EN,
        Language::Fr => &FR,
        Language::De => &DE,
    }
}

// ---------------------------------------------------------------------------
// Containment glyphs
// ---------------------------------------------------------------------------

/// SVG glyphs for the levels of containment, indexed by containment id.
/// Ids outside the table render as empty markup.
pub(crate) const CONTAINMENT_ICONS: [&str; 4] = [
    r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 448 512" class="text-red-500" height="12" width="12" xmlns="http://www.w3.org/2000/svg"><path d="M256 80c0-17.7-14.3-32-32-32s-32 14.3-32 32V224H48c-17.7 0-32 14.3-32 32s14.3 32 32 32H192V432c0 17.7 14.3 32 32 32s32-14.3 32-32V288H400c17.7 0 32-14.3 32-32s-14.3-32-32-32H256V80z"></path></svg>"#,
    r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 384 512" class="text-red-500" height="12" width="12" xmlns="http://www.w3.org/2000/svg"><path d="M224 32c0-17.7-14.3-32-32-32s-32 14.3-32 32V144H48c-17.7 0-32 14.3-32 32s14.3 32 32 32H160V320c0 17.7 14.3 32 32 32s32-14.3 32-32V208H336c17.7 0 32-14.3 32-32s-14.3-32-32-32H224V32zM0 480c0 17.7 14.3 32 32 32H352c17.7 0 32-14.3 32-32s-14.3-32-32-32H32c-17.7 0-32 14.3-32 32z"></path></svg>"#,
    r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 448 512" height="12" width="12" xmlns="http://www.w3.org/2000/svg"><path d="M432 256c0 17.7-14.3 32-32 32L48 288c-17.7 0-32-14.3-32-32s14.3-32 32-32l352 0c17.7 0 32 14.3 32 32z"></path></svg>"#,
    r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 512 512" height="10" width="10" xmlns="http://www.w3.org/2000/svg"><path d="M464 256A208 208 0 1 0 48 256a208 208 0 1 0 416 0zM0 256a256 256 0 1 1 512 0A256 256 0 1 1 0 256z"></path></svg>"#,
];

/// Glyph for a containment id, empty markup when the id has no entry.
pub(crate) fn containment_icon(level_id: i64) -> &'static str {
    usize::try_from(level_id)
        .ok()
        .and_then(|i| CONTAINMENT_ICONS.get(i))
        .copied()
        .unwrap_or("")
}

// ---------------------------------------------------------------------------
// HTML escaping
// ---------------------------------------------------------------------------

/// Escape text for embedding in HTML, quotes included.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
