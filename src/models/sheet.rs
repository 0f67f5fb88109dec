//! Product-sheet document as returned by the `ProductSheet` endpoint.
//!
//! Every section is optional: the API omits whole subtrees depending on the
//! requested output section and on what the supplier filled in. The preview
//! transformers treat absence as "nothing to show", never as an error.
//!
//! Only `specification` is modelled in full -- the `logistic` and `product`
//! sections are passed through as raw JSON for callers that want them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// ProductSheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductSheet {
    pub logistic: Option<Value>,
    pub product: Option<Value>,
    pub specification: Option<Specification>,
}

// ---------------------------------------------------------------------------
// Specification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    pub allergen_set: Option<AllergenSet>,
    /// Wire key is all lower-case, unlike its sibling sets.
    pub nutrientset: Option<NutrientSet>,
    pub ingredient_set: Option<IngredientSet>,
    pub preparation_informations: Option<Vec<PreparationInformation>>,
}

// ---------------------------------------------------------------------------
// LocalizedValue
// ---------------------------------------------------------------------------

/// One language's rendition of a multilingual field. A field is represented
/// as a list of these, one entry per available language.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocalizedValue {
    pub language: Option<String>,
    pub value: Option<String>,
}

impl LocalizedValue {
    pub fn new(language: &str, value: &str) -> Self {
        Self {
            language: Some(language.to_string()),
            value: Some(value.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Allergens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllergenSet {
    pub allergens: Option<Vec<Allergen>>,
}

/// Flat allergen record. Hierarchy is declared through `parent_id`
/// (0 or absent = root); the tree is never materialized in the document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Allergen {
    pub id: i64,
    pub sequence: Option<i64>,
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub name: Vec<LocalizedValue>,
    pub level_of_containment: Option<LevelOfContainment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LevelOfContainment {
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Vec<LocalizedValue>,
}

// ---------------------------------------------------------------------------
// Nutrients
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NutrientSet {
    pub state_of_preparations: Option<Vec<StateOfPreparation>>,
}

/// Nutrition variant of the product (e.g. "as sold" vs "prepared"), each
/// carrying its own nutrient table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StateOfPreparation {
    pub state_of_preparation_id: Option<i64>,
    pub serving_unit_value: Option<f64>,
    #[serde(default)]
    pub state_of_preparation_name: Vec<LocalizedValue>,
    /// Upstream spelling of the per-100 unit-of-measure key.
    #[serde(default)]
    pub per_hunderd_uom_name: Vec<LocalizedValue>,
    #[serde(default)]
    pub serving_uom_name: Vec<LocalizedValue>,
    pub nutrients: Option<Vec<Nutrient>>,
}

/// Nutrient ids 1 (kJ) and 2 (kcal) are the energy pair by upstream
/// convention; there is no flag marking them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Nutrient {
    pub id: i64,
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub name: Vec<LocalizedValue>,
    pub value: Option<f64>,
    pub value_per_serving: Option<f64>,
    pub unit_of_measure: Option<UnitOfMeasure>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnitOfMeasure {
    #[serde(default)]
    pub name: Vec<LocalizedValue>,
}

// ---------------------------------------------------------------------------
// Ingredients
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSet {
    pub ingredients: Option<Vec<Ingredient>>,
    pub declaration: Option<Vec<LocalizedValue>>,
    pub declaration_preview: Option<Vec<LocalizedValue>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub sequence: Option<i64>,
    #[serde(default)]
    pub name: Vec<LocalizedValue>,
    #[serde(default)]
    pub country_of_origins: Vec<CountryOfOrigin>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CountryOfOrigin {
    #[serde(default)]
    pub name: Vec<LocalizedValue>,
}

// ---------------------------------------------------------------------------
// Preparation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreparationInformation {
    pub preparation_type: Option<PreparationType>,
    #[serde(default)]
    pub preparation_description: Vec<LocalizedValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreparationType {
    #[serde(default)]
    pub name: Vec<LocalizedValue>,
}
