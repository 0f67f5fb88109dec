//! Nutrition table preview.
//!
//! The sheet carries one nutrient table per state of preparation ("as sold",
//! "prepared", ...). The preview pivots them into a single HTML table: two
//! header rows (state names, then per-100/per-portion sub-headers), a
//! combined energy row, and one row per remaining nutrient with the states
//! as column pairs.
//!
//! Nutrient grouping is textual: a nutrient with a non-zero parent id is
//! indented under the first same-state nutrient whose name is contained in
//! its own ("Saturated fat" under "fat"). The declared parent id only
//! signals that a parent exists; the actual parent is found by this name
//! scan, and a nutrient without a textual match stays top-level. Consumers
//! rely on the resulting order, so both the scan order and the
//! first-encounter row order are load-bearing.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Nutrient, ProductSheet};
use crate::preview::{escape_html, resolve_localized, ui_labels};
use crate::types::Language;

/// kJ and kcal, the combined energy row, by upstream id convention.
const ENERGY_KJ_ID: i64 = 1;
const ENERGY_KCAL_ID: i64 = 2;

/// Name marker carried by sub-nutrients in the display name map; stripped
/// again at render time in exchange for the subnutrient style.
const SUB_MARKER: &str = " - ";

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// One state of preparation, localized, with its nutrient table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateOfPreparationView {
    pub state_of_preparation_id: Option<i64>,
    pub serving_unit_value: f64,
    pub name: String,
    pub per_hunderd_uom_name: String,
    pub serving_uom_name: String,
    pub nutrients: Option<Vec<NutrientView>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientView {
    pub id: i64,
    /// 0 for top-level nutrients.
    pub parent_id: i64,
    pub name: String,
    pub value: f64,
    pub value_per_serving: f64,
    pub unit_of_measure: String,
}

fn is_energy(nutrient: &NutrientView) -> bool {
    nutrient.id == ENERGY_KJ_ID || nutrient.id == ENERGY_KCAL_ID
}

fn format_value(value: f64) -> String {
    value.to_string()
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Localize the sheet's states of preparation and their nutrient tables.
///
/// `None` when the sheet carries no nutrient set.
pub fn extract_state_of_preparations(
    sheet: &ProductSheet,
    language: Language,
) -> Option<Vec<StateOfPreparationView>> {
    let language = language.effective();
    let states = sheet
        .specification
        .as_ref()?
        .nutrientset
        .as_ref()?
        .state_of_preparations
        .as_ref()?;

    let mut views = Vec::new();
    for state in states {
        views.push(StateOfPreparationView {
            state_of_preparation_id: state.state_of_preparation_id,
            serving_unit_value: state.serving_unit_value.unwrap_or(0.0),
            name: resolve_localized(&state.state_of_preparation_name, language, ""),
            per_hunderd_uom_name: resolve_localized(
                &state.per_hunderd_uom_name,
                language,
                "",
            ),
            serving_uom_name: resolve_localized(&state.serving_uom_name, language, ""),
            nutrients: extract_nutrients(state.nutrients.as_deref().unwrap_or(&[]), language),
        });
    }

    if views.is_empty() {
        None
    } else {
        Some(views)
    }
}

fn extract_nutrients(nutrients: &[Nutrient], language: Language) -> Option<Vec<NutrientView>> {
    let views: Vec<NutrientView> = nutrients
        .iter()
        .map(|nutrient| NutrientView {
            id: nutrient.id,
            parent_id: nutrient.parent_id.unwrap_or(0),
            name: resolve_localized(&nutrient.name, language, ""),
            value: nutrient.value.unwrap_or(0.0),
            value_per_serving: nutrient.value_per_serving.unwrap_or(0.0),
            unit_of_measure: nutrient
                .unit_of_measure
                .as_ref()
                .map(|uom| resolve_localized(&uom.name, language, ""))
                .unwrap_or_default(),
        })
        .collect();

    if views.is_empty() {
        None
    } else {
        Some(views)
    }
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// Extract the states of preparation and render the pivoted nutrition
/// table. `None` when the sheet carries no nutrient set.
pub fn nutrients_preview(sheet: &ProductSheet, language: Language) -> Option<String> {
    let language = language.effective();
    let states = extract_state_of_preparations(sheet, language)?;
    Some(render_nutrition_table(&states, language))
}

/// Render already extracted states into the pivoted HTML table.
pub fn render_nutrition_table(states: &[StateOfPreparationView], language: Language) -> String {
    if states.is_empty() {
        return String::new();
    }
    let labels = ui_labels(language);

    let mut html = String::from("<table class=\"nutrition-tabel\">");
    html.push_str("<thead><tr><th></th>");
    for state in states {
        let name = state.name.replace(['\r', '\n'], "");
        html.push_str(&format!("<th colspan=\"2\">{}</th>", escape_html(&name)));
    }
    html.push_str("</tr>");

    html.push_str("<tr><th></th>");
    for state in states {
        html.push_str(&format!(
            "<th>{} 100 {}</th>",
            labels.per,
            escape_html(&state.per_hunderd_uom_name)
        ));
        html.push_str(&format!(
            "<th>{} ({} {})</th>",
            labels.per_portie,
            format_value(state.serving_unit_value),
            escape_html(&state.serving_uom_name)
        ));
    }
    html.push_str("</tr></thead>");

    html.push_str("<tbody>");
    html.push_str(&energy_row(states));

    let (names, order, children) = nutrient_structure(states);
    for id in &order {
        if let Some(name) = names.get(id) {
            html.push_str(&nutrient_row(*id, name, states));
        }
        if let Some(subs) = children.get(id) {
            for sub in subs {
                if let Some(name) = names.get(sub) {
                    html.push_str(&nutrient_row(*sub, name, states));
                }
            }
        }
    }

    html.push_str("</tbody></table>");
    html
}

// ---------------------------------------------------------------------------
// Energy row
// ---------------------------------------------------------------------------

/// The combined kJ/kcal row.
///
/// The label is sourced once from the first state: its first energy
/// nutrient's name, else its first nutrient's name, else "Energy". A state
/// missing either energy id renders dashes for both of its cells.
fn energy_row(states: &[StateOfPreparationView]) -> String {
    let mut html = String::from("<tr>");

    let mut energy_name: &str = "Energy";
    if let Some(nutrients) = states.first().and_then(|s| s.nutrients.as_deref()) {
        if let Some(energy) = nutrients.iter().find(|n| is_energy(n)) {
            energy_name = energy.name.as_str();
        } else if let Some(first) = nutrients.first() {
            energy_name = first.name.as_str();
        }
    }
    html.push_str(&format!(
        "<td class=\"nutrient\">{} (kJ/kcal)</td>",
        escape_html(energy_name)
    ));

    for state in states {
        let nutrients = state.nutrients.as_deref().unwrap_or(&[]);
        let kj = nutrients.iter().find(|n| n.id == ENERGY_KJ_ID);
        let kcal = nutrients.iter().find(|n| n.id == ENERGY_KCAL_ID);
        match (kj, kcal) {
            (Some(kj), Some(kcal)) => {
                html.push_str(&format!(
                    "<td>{} / {}</td>",
                    format_value(kj.value),
                    format_value(kcal.value)
                ));
                html.push_str(&format!(
                    "<td>{} / {}</td>",
                    format_value(kj.value_per_serving),
                    format_value(kcal.value_per_serving)
                ));
            }
            _ => html.push_str("<td>-</td><td>-</td>"),
        }
    }

    html.push_str("</tr>");
    html
}

// ---------------------------------------------------------------------------
// Nutrient structure
// ---------------------------------------------------------------------------

/// Build the display name map and the row order over all states.
///
/// Names: union of non-energy nutrients across states, keyed by id, later
/// states overwriting earlier ones; sub-nutrient names carry the marker
/// prefix. Order: top-level ids by first encounter (a parent id counts as
/// encountered the moment a child names it), each with its matched sub-ids
/// in encounter order, deduplicated by id.
#[allow(clippy::type_complexity)]
fn nutrient_structure(
    states: &[StateOfPreparationView],
) -> (HashMap<i64, String>, Vec<i64>, HashMap<i64, Vec<i64>>) {
    let mut names: HashMap<i64, String> = HashMap::new();
    for state in states {
        for nutrient in state.nutrients.as_deref().unwrap_or(&[]) {
            if is_energy(nutrient) {
                continue;
            }
            let prefix = if nutrient.parent_id != 0 { SUB_MARKER } else { "" };
            names.insert(nutrient.id, format!("{}{}", prefix, nutrient.name));
        }
    }

    let mut order: Vec<i64> = Vec::new();
    let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
    for state in states {
        let nutrients = state.nutrients.as_deref().unwrap_or(&[]);
        for nutrient in nutrients {
            if is_energy(nutrient) {
                continue;
            }

            if nutrient.parent_id != 0 {
                let parent = nutrients
                    .iter()
                    .find(|candidate| {
                        candidate.id != nutrient.id
                            && nutrient.name.contains(candidate.name.as_str())
                    })
                    .map(|candidate| candidate.id);

                match parent {
                    Some(parent_id) => match children.entry(parent_id) {
                        Entry::Vacant(slot) => {
                            slot.insert(vec![nutrient.id]);
                            order.push(parent_id);
                        }
                        Entry::Occupied(mut slot) => {
                            let subs = slot.get_mut();
                            if !subs.contains(&nutrient.id) {
                                subs.push(nutrient.id);
                            }
                        }
                    },
                    None => {
                        if let Entry::Vacant(slot) = children.entry(nutrient.id) {
                            slot.insert(Vec::new());
                            order.push(nutrient.id);
                        }
                    }
                }
            } else if let Entry::Vacant(slot) = children.entry(nutrient.id) {
                slot.insert(Vec::new());
                order.push(nutrient.id);
            }
        }
    }

    (names, order, children)
}

/// One nutrient row across all states; dashes where a state lacks the id.
fn nutrient_row(id: i64, name: &str, states: &[StateOfPreparationView]) -> String {
    let mut html = String::from("<tr>");
    match name.strip_prefix(SUB_MARKER) {
        Some(stripped) => html.push_str(&format!(
            "<td class=\"nutrition-subnutrient\">{}</td>",
            escape_html(stripped)
        )),
        None => html.push_str(&format!(
            "<td class=\"nutrition-nutrient\">{}</td>",
            escape_html(name)
        )),
    }

    for state in states {
        let found = state
            .nutrients
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .find(|n| n.id == id);
        match found {
            Some(nutrient) => {
                html.push_str(&format!(
                    "<td>{} {}</td>",
                    format_value(nutrient.value),
                    escape_html(&nutrient.unit_of_measure)
                ));
                html.push_str(&format!(
                    "<td>{} {}</td>",
                    format_value(nutrient.value_per_serving),
                    escape_html(&nutrient.unit_of_measure)
                ));
            }
            None => html.push_str("<td>-</td><td>-</td>"),
        }
    }

    html.push_str("</tr>");
    html
}
