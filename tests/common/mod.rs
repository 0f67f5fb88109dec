//! Shared test fixtures for the preview tests.
//!
//! Product sheets are built from `serde_json::json!` literals so the
//! fixtures exercise the same deserialization path as a real API response.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use psfoodservice::models::ProductSheet;
use serde_json::{json, Value};

/// Deserialize a JSON literal into a `ProductSheet`.
pub fn sheet(value: Value) -> ProductSheet {
    serde_json::from_value(value).expect("fixture should deserialize")
}

/// Sheet whose specification object is present but empty.
pub fn empty_specification_sheet() -> ProductSheet {
    sheet(json!({ "specification": {} }))
}

/// One language-tagged value entry.
pub fn localized(language: &str, value: &str) -> Value {
    json!({ "language": language, "value": value })
}

// -- Allergens --------------------------------------------------------------

/// Allergen record; `sequence` and `parent_id` are omitted from the JSON
/// when `None`, matching sheets where the supplier left them out.
pub fn allergen(
    id: i64,
    sequence: Option<i64>,
    parent_id: Option<i64>,
    name: &str,
    containment_id: i64,
) -> Value {
    let mut record = json!({
        "id": id,
        "name": [localized("nl", name), localized("en", name)],
        "levelOfContainment": {
            "id": containment_id,
            "name": [localized("nl", "Bevat"), localized("en", "Contains")]
        }
    });
    if let Some(sequence) = sequence {
        record["sequence"] = json!(sequence);
    }
    if let Some(parent_id) = parent_id {
        record["parentId"] = json!(parent_id);
    }
    record
}

pub fn allergen_sheet(allergens: Vec<Value>) -> ProductSheet {
    sheet(json!({
        "specification": { "allergenSet": { "allergens": allergens } }
    }))
}

// -- Nutrition --------------------------------------------------------------

pub fn nutrient(
    id: i64,
    parent_id: i64,
    name: &str,
    value: f64,
    value_per_serving: f64,
    unit: &str,
) -> Value {
    json!({
        "id": id,
        "parentId": parent_id,
        "name": [localized("en", name)],
        "value": value,
        "valuePerServing": value_per_serving,
        "unitOfMeasure": { "name": [localized("en", unit)] }
    })
}

pub fn state_of_preparation(id: i64, name: &str, nutrients: Vec<Value>) -> Value {
    json!({
        "stateOfPreparationId": id,
        "servingUnitValue": 30,
        "stateOfPreparationName": [localized("en", name)],
        "perHunderdUomName": [localized("en", "g")],
        "servingUomName": [localized("en", "g")],
        "nutrients": nutrients
    })
}

pub fn nutrition_sheet(states: Vec<Value>) -> ProductSheet {
    sheet(json!({
        "specification": { "nutrientset": { "stateOfPreparations": states } }
    }))
}
