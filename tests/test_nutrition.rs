//! Tests for the nutrition preview: extraction, the combined energy row,
//! textual sub-nutrient grouping and the pivoted table markup.

mod common;

use common::{empty_specification_sheet, nutrient, nutrition_sheet, state_of_preparation};
use psfoodservice::preview::{extract_state_of_preparations, nutrients_preview};
use psfoodservice::Language;

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

#[test]
fn absent_nutrient_set_yields_none() {
    let sheet = empty_specification_sheet();
    assert!(extract_state_of_preparations(&sheet, Language::Nl).is_none());
    assert!(nutrients_preview(&sheet, Language::Nl).is_none());
}

#[test]
fn states_are_localized() {
    let sheet = nutrition_sheet(vec![state_of_preparation(
        1,
        "Unprepared",
        vec![nutrient(10, 0, "Fat", 12.0, 3.6, "g")],
    )]);
    let states = extract_state_of_preparations(&sheet, Language::En).unwrap();
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].name, "Unprepared");
    assert_eq!(states[0].per_hunderd_uom_name, "g");
    assert_eq!(states[0].serving_unit_value, 30.0);

    let nutrients = states[0].nutrients.as_ref().unwrap();
    assert_eq!(nutrients[0].name, "Fat");
    assert_eq!(nutrients[0].unit_of_measure, "g");
}

#[test]
fn state_without_nutrients_extracts_with_none() {
    let sheet = nutrition_sheet(vec![state_of_preparation(1, "Unprepared", vec![])]);
    let states = extract_state_of_preparations(&sheet, Language::En).unwrap();
    assert!(states[0].nutrients.is_none());
}

// ---------------------------------------------------------------------------
// Energy row
// ---------------------------------------------------------------------------

#[test]
fn energy_row_combines_kj_and_kcal() {
    let sheet = nutrition_sheet(vec![state_of_preparation(
        1,
        "Unprepared",
        vec![
            nutrient(1, 0, "Energie", 250.0, 75.0, "kJ"),
            nutrient(2, 0, "Energie", 60.0, 18.0, "kcal"),
        ],
    )]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    assert!(html.contains("<td class=\"nutrient\">Energie (kJ/kcal)</td>"));
    assert!(html.contains("<td>250 / 60</td>"));
    assert!(html.contains("<td>75 / 18</td>"));
}

#[test]
fn state_missing_one_energy_id_renders_dashes() {
    let sheet = nutrition_sheet(vec![
        state_of_preparation(
            1,
            "Unprepared",
            vec![
                nutrient(1, 0, "Energy", 250.0, 75.0, "kJ"),
                nutrient(2, 0, "Energy", 60.0, 18.0, "kcal"),
            ],
        ),
        state_of_preparation(
            2,
            "Prepared",
            vec![nutrient(1, 0, "Energy", 300.0, 90.0, "kJ")],
        ),
    ]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    assert!(html.contains("<td>250 / 60</td>"));
    assert!(html.contains("<td>-</td><td>-</td>"));
}

#[test]
fn energy_label_falls_back_to_first_nutrient_name() {
    let sheet = nutrition_sheet(vec![state_of_preparation(
        1,
        "Unprepared",
        vec![nutrient(10, 0, "Fat", 12.0, 3.6, "g")],
    )]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    assert!(html.contains("<td class=\"nutrient\">Fat (kJ/kcal)</td>"));
}

#[test]
fn energy_label_defaults_without_any_nutrients() {
    let sheet = nutrition_sheet(vec![state_of_preparation(1, "Unprepared", vec![])]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    assert!(html.contains("<td class=\"nutrient\">Energy (kJ/kcal)</td>"));
}

// ---------------------------------------------------------------------------
// Sub-nutrient grouping
// ---------------------------------------------------------------------------

#[test]
fn sub_nutrient_groups_under_textual_parent() {
    let sheet = nutrition_sheet(vec![state_of_preparation(
        1,
        "Unprepared",
        vec![
            nutrient(10, 0, "Fat", 12.0, 3.6, "g"),
            nutrient(11, 10, "Saturated Fat", 4.0, 1.2, "g"),
        ],
    )]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();

    assert!(html.contains("<td class=\"nutrition-nutrient\">Fat</td>"));
    assert!(html.contains("<td class=\"nutrition-subnutrient\">Saturated Fat</td>"));

    let parent = html.find(">Fat<").unwrap();
    let child = html.find(">Saturated Fat<").unwrap();
    assert!(parent < child);
}

#[test]
fn sub_nutrient_without_textual_match_stays_in_the_row_list() {
    // Declared parent id 99 exists nowhere and no name contains "Sodium".
    let sheet = nutrition_sheet(vec![state_of_preparation(
        1,
        "Unprepared",
        vec![
            nutrient(10, 0, "Fat", 12.0, 3.6, "g"),
            nutrient(20, 99, "Sodium", 0.5, 0.1, "g"),
        ],
    )]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    // Still styled as a sub-row (marker from the declared parent id), but
    // emitted as its own top-level row.
    assert!(html.contains("<td class=\"nutrition-subnutrient\">Sodium</td>"));
}

#[test]
fn later_state_overwrites_the_row_label() {
    let sheet = nutrition_sheet(vec![
        state_of_preparation(1, "Unprepared", vec![nutrient(10, 0, "Fat", 12.0, 3.6, "g")]),
        state_of_preparation(2, "Prepared", vec![nutrient(10, 0, "Fett", 10.0, 3.0, "g")]),
    ]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    assert!(html.contains("<td class=\"nutrition-nutrient\">Fett</td>"));
    assert!(!html.contains("<td class=\"nutrition-nutrient\">Fat</td>"));
}

#[test]
fn state_lacking_a_nutrient_renders_dashes_in_its_columns() {
    let sheet = nutrition_sheet(vec![
        state_of_preparation(
            1,
            "Unprepared",
            vec![
                nutrient(10, 0, "Fat", 12.0, 3.6, "g"),
                nutrient(30, 0, "Fibre", 2.0, 0.6, "g"),
            ],
        ),
        state_of_preparation(2, "Prepared", vec![nutrient(10, 0, "Fat", 10.0, 3.0, "g")]),
    ]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    // The Fibre row has values for state 1 and dashes for state 2.
    assert!(html.contains("<td class=\"nutrition-nutrient\">Fibre</td><td>2 g</td><td>0.6 g</td><td>-</td><td>-</td>"));
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

#[test]
fn header_spans_two_columns_per_state() {
    let sheet = nutrition_sheet(vec![
        state_of_preparation(1, "Unprepared", vec![nutrient(10, 0, "Fat", 12.0, 3.6, "g")]),
        state_of_preparation(2, "Prepared", vec![nutrient(10, 0, "Fat", 10.0, 3.0, "g")]),
    ]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    assert!(html.contains("<table class=\"nutrition-tabel\">"));
    assert_eq!(html.matches("<th colspan=\"2\">").count(), 2);
    assert!(html.contains("<th>Per 100 g</th>"));
    assert!(html.contains("<th>Per portion (30 g)</th>"));
}

#[test]
fn header_labels_follow_the_language() {
    let sheet = nutrition_sheet(vec![state_of_preparation(
        1,
        "Onbereid",
        vec![nutrient(10, 0, "Vet", 12.0, 3.6, "g")],
    )]);
    let html = nutrients_preview(&sheet, Language::Nl).unwrap();
    assert!(html.contains("<th>Per 100 g</th>"));
    assert!(html.contains("<th>Per portie (30 g)</th>"));
}

#[test]
fn state_names_lose_line_breaks() {
    let sheet = nutrition_sheet(vec![state_of_preparation(
        1,
        "Unpre\r\npared",
        vec![nutrient(10, 0, "Fat", 12.0, 3.6, "g")],
    )]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    assert!(html.contains("<th colspan=\"2\">Unprepared</th>"));
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

#[test]
fn markup_in_names_is_escaped() {
    let sheet = nutrition_sheet(vec![state_of_preparation(
        1,
        "Unprepared",
        vec![nutrient(10, 0, "Fat <b>& more</b>", 12.0, 3.6, "g")],
    )]);
    let html = nutrients_preview(&sheet, Language::En).unwrap();
    assert!(html.contains("Fat &lt;b&gt;&amp; more&lt;/b&gt;"));
}
