//! Allergen chart preview.
//!
//! Allergens arrive as a flat list with declared parent links. The preview
//! flattens them into localized views, orders them by their display
//! sequence, and renders either a single strip of icon cells (non-extended)
//! or a legend plus a three-column chart in which parents are immediately
//! followed by their children (extended).
//!
//! The three-column layout places items by running count -- the first ten
//! flattened rows go to column one, the next ten to column two, the rest to
//! column three. Consuming templates depend on this exact placement, so it
//! is not a height-balancing layout and must not become one.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::ALLERGEN_ICON_CDN;
use crate::models::ProductSheet;
use crate::preview::{
    containment_icon, escape_html, resolve_localized, ui_labels, CONTAINMENT_ICONS,
};
use crate::types::{Language, OutputStyle};

/// Sort key for allergens without a sequence; sorts them after any
/// sequenced entry.
const MISSING_SEQUENCE: i64 = 999;

/// Containment id meaning the allergen is actually contained. Every other
/// id (may contain, without, not specified) marks the cell as excluded in
/// the non-extended strip.
const CONTAINS_ID: i64 = 4;

// ---------------------------------------------------------------------------
// AllergenView
// ---------------------------------------------------------------------------

/// One allergen flattened and localized for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenView {
    pub id: i64,
    pub sequence: Option<i64>,
    /// 0 for root allergens.
    pub parent_id: i64,
    pub name: String,
    pub level_of_containment_id: i64,
    pub level_of_containment: String,
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Flatten and localize the sheet's allergen set.
///
/// `None` when the sheet carries no allergen list. Non-extended keeps root
/// allergens only; extended keeps every record including the parent link.
pub fn extract_allergens(
    sheet: &ProductSheet,
    extended: bool,
    language: Language,
) -> Option<Vec<AllergenView>> {
    let language = language.effective();
    let allergens = sheet
        .specification
        .as_ref()?
        .allergen_set
        .as_ref()?
        .allergens
        .as_ref()?;

    let mut views = Vec::new();
    for allergen in allergens {
        let parent_id = allergen.parent_id.unwrap_or(0);
        if !extended && parent_id != 0 {
            continue;
        }
        views.push(AllergenView {
            id: allergen.id,
            sequence: allergen.sequence,
            parent_id,
            name: resolve_localized(&allergen.name, language, ""),
            level_of_containment_id: allergen
                .level_of_containment
                .as_ref()
                .and_then(|level| level.id)
                .unwrap_or(0),
            level_of_containment: allergen
                .level_of_containment
                .as_ref()
                .map(|level| resolve_localized(&level.name, language, ""))
                .unwrap_or_default(),
        });
    }

    if views.is_empty() {
        None
    } else {
        Some(views)
    }
}

/// Order allergens by display sequence, missing sequence last. The sort is
/// stable so records sharing a sequence keep their document order.
pub fn sort_by_sequence(allergens: &mut [AllergenView]) {
    allergens.sort_by_key(|a| a.sequence.unwrap_or(MISSING_SEQUENCE));
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// Extract, sort and render the allergen chart in the requested style.
///
/// `None` when the sheet carries no allergen list.
pub fn allergens_preview(
    sheet: &ProductSheet,
    extended: bool,
    language: Language,
    style: OutputStyle,
) -> Option<String> {
    let language = language.effective();
    let mut list = extract_allergens(sheet, extended, language)?;
    sort_by_sequence(&mut list);
    Some(render_allergens(&list, extended, language, style))
}

/// Render an already extracted and sorted allergen list.
pub fn render_allergens(
    list: &[AllergenView],
    extended: bool,
    language: Language,
    style: OutputStyle,
) -> String {
    match style {
        OutputStyle::Table => render_table(list, extended, language),
        OutputStyle::Bootstrap => render_bootstrap(list, extended, language),
    }
}

// ---------------------------------------------------------------------------
// Column bucketing
// ---------------------------------------------------------------------------

/// Column index for the item at the given running count.
fn column_for(count: usize) -> usize {
    if count < 10 {
        0
    } else if count < 20 {
        1
    } else {
        2
    }
}

/// Walk roots in list order, appending each root and then its children, and
/// bucket the resulting flat sequence into three columns by running count.
///
/// Children are grouped per parent id; a child whose parent never appears
/// as a root is dropped, matching the upstream layout.
fn bucket_columns<'a>(list: &'a [AllergenView]) -> [Vec<&'a AllergenView>; 3] {
    let mut roots: Vec<&AllergenView> = Vec::new();
    let mut children: HashMap<i64, Vec<&AllergenView>> = HashMap::new();
    for allergen in list {
        if allergen.parent_id == 0 {
            roots.push(allergen);
        } else {
            children.entry(allergen.parent_id).or_default().push(allergen);
        }
    }

    let mut columns: [Vec<&AllergenView>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    let mut count = 0usize;
    for root in roots {
        columns[column_for(count)].push(root);
        count += 1;
        if let Some(subs) = children.get(&root.id) {
            for sub in subs {
                columns[column_for(count)].push(sub);
                count += 1;
            }
        }
    }
    columns
}

// ---------------------------------------------------------------------------
// Table style
// ---------------------------------------------------------------------------

fn render_table(list: &[AllergenView], extended: bool, language: Language) -> String {
    if !extended {
        let mut cells = String::new();
        for allergen in list {
            let excluded = if allergen.level_of_containment_id != CONTAINS_ID {
                " allergen-simple-excluded"
            } else {
                ""
            };
            cells.push_str(&format!(
                "<td class=\"allergen-simple-td{}\"><img loading=\"lazy\" src=\"{}{}.png\" \
                 title=\"{}\" class=\"allergen-simple-icon\"><div class=\"allergen-simple-text\">{}</div></td>",
                excluded,
                ALLERGEN_ICON_CDN,
                allergen.id,
                escape_html(&allergen.level_of_containment),
                escape_html(&allergen.name),
            ));
        }

        return format!(
            "<table class=\"allergens-simple-table\"><tbody><tr class=\"allergen-simple-tr\">{}</tr></tbody></table>",
            cells
        );
    }

    let labels = ui_labels(language);
    let legend = format!(
        "<tr><td class=\"allergen-header\">{}</td><td class=\"allergen-header\">{}</td>\
         <td class=\"allergen-header\">{}</td><td class=\"allergen-header\">{}</td></tr>\
         <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        labels.contains,
        labels.may_contain,
        labels.without,
        labels.not_specified,
        CONTAINMENT_ICONS[0],
        CONTAINMENT_ICONS[1],
        CONTAINMENT_ICONS[2],
        CONTAINMENT_ICONS[3],
    );

    let columns = bucket_columns(list);
    let max_rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut rows = String::new();
    for i in 0..max_rows {
        rows.push_str("<tr class=\"allergen-tr\">");
        for column in &columns {
            match column.get(i) {
                Some(allergen) => {
                    let class = if allergen.parent_id != 0 {
                        " allergen-subitem"
                    } else {
                        ""
                    };
                    rows.push_str(&format!(
                        "<td class=\"allergen-name{}\">{}</td><td class=\"allergen-levelofcontainment\">{}</td>",
                        class,
                        escape_html(&allergen.name),
                        containment_icon(allergen.level_of_containment_id),
                    ));
                }
                None => rows.push_str("<td></td><td></td>"),
            }
        }
        rows.push_str("</tr>");
    }

    format!(
        "<table class=\"allergens-table-legend\"><tbody>{}</tbody></table>   <table class=\"allergens-table\"><tbody>{}</tbody></table>",
        legend, rows
    )
}

// ---------------------------------------------------------------------------
// Bootstrap style
// ---------------------------------------------------------------------------

fn render_bootstrap(list: &[AllergenView], extended: bool, language: Language) -> String {
    if !extended {
        let mut cards = String::new();
        for allergen in list {
            let excluded = if allergen.level_of_containment_id != CONTAINS_ID {
                " allergen-excluded"
            } else {
                ""
            };
            cards.push_str(&format!(
                "<div class=\"col text-center{}\">\
                 <div class=\"card h-100 border-0\">\
                 <img loading=\"lazy\" src=\"{}{}.png\" class=\"mx-auto\" alt=\"{}\" title=\"{}\" style=\"width: 40px; height: 40px;\">\
                 <div class=\"card-body p-1\"><p class=\"card-text small\">{}</p></div>\
                 </div></div>",
                excluded,
                ALLERGEN_ICON_CDN,
                allergen.id,
                escape_html(&allergen.name),
                escape_html(&allergen.level_of_containment),
                escape_html(&allergen.name),
            ));
        }

        return format!(
            "<div class=\"container p-0\"><div class=\"row row-cols-4 row-cols-md-6 row-cols-lg-8 g-2\">{}</div></div>",
            cards
        );
    }

    let labels = ui_labels(language);
    let mut legend_cells = String::new();
    for (label, icon) in [
        (labels.contains, CONTAINMENT_ICONS[0]),
        (labels.may_contain, CONTAINMENT_ICONS[1]),
        (labels.without, CONTAINMENT_ICONS[2]),
        (labels.not_specified, CONTAINMENT_ICONS[3]),
    ] {
        legend_cells.push_str(&format!(
            "<div class=\"col-3 text-center\"><div><strong>{}</strong></div><div>{}</div></div>",
            label, icon
        ));
    }
    let legend = format!(
        "<div class=\"card mb-3\"><div class=\"card-body p-2\"><div class=\"row\">{}</div></div></div>",
        legend_cells
    );

    let columns = bucket_columns(list);
    let mut columns_html = String::from("<div class=\"row\">");
    for column in &columns {
        columns_html.push_str("<div class=\"col-md-4\">");
        for allergen in column {
            let padding = if allergen.parent_id != 0 { "ps-3" } else { "" };
            columns_html.push_str(&format!(
                "<div class=\"d-flex align-items-center mb-1 {}\">\
                 <div class=\"flex-grow-1\">{}</div><div class=\"ms-2\">{}</div></div>",
                padding,
                escape_html(&allergen.name),
                containment_icon(allergen.level_of_containment_id),
            ));
        }
        columns_html.push_str("</div>");
    }
    columns_html.push_str("</div>");

    format!("{}{}", legend, columns_html)
}
