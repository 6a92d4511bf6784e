//! Prose explanation builders.
//!
//! Each builder walks its configuration in a fixed field-priority order,
//! annotates every populated value through [`grid_explain::explain_value`],
//! wraps it in a templated sentence and joins the sentences with single
//! spaces. An empty configuration yields a fixed default message instead of
//! an empty string; that asymmetry with the CSS builders is a behavioral
//! contract, not an oversight.
//!
//! The insets and z-index of a child are only explained when its `position`
//! is set and non-static, and the flex sub-properties only when its display
//! establishes a flex context. The CSS builders do not gate on either; this
//! too is a deliberate, tested asymmetry.

use crate::config::{ChildConfig, ChildDisplay, ContainerConfig, Position};
use crate::resolve::{resolve_gaps, resolve_placement, PlacementProperty};
use grid_explain::explain_value;
use grid_tracks::{area_grid_to_css, template_to_css};

/// Explain a grid container configuration as prose.
pub fn explain_container_config(config: &ContainerConfig) -> String {
    let mut explanations: Vec<String> = Vec::new();

    if let Some(display) = config.display {
        let explained = explain_value("display", display.as_css());
        explanations.push(format!(
            "The container uses CSS Grid with display: {explained}."
        ));
    }

    if let Some(template) = &config.grid_template_columns {
        let columns_css = template_to_css(template);
        if !columns_css.is_empty() {
            let explained = explain_value("grid-template-columns", &columns_css);
            let plurality = if columns_css.contains(' ') {
                "multiple columns"
            } else {
                "columns"
            };
            explanations.push(format!(
                "The grid defines {plurality} with template: {explained}."
            ));
        }
    }
    if let Some(template) = &config.grid_template_rows {
        let rows_css = template_to_css(template);
        if !rows_css.is_empty() {
            let explained = explain_value("grid-template-rows", &rows_css);
            let plurality = if rows_css.contains(' ') {
                "multiple rows"
            } else {
                "rows"
            };
            explanations.push(format!(
                "The grid defines {plurality} with template: {explained}."
            ));
        }
    }
    if let Some(area_grid) = &config.grid_template_areas {
        let areas_css = area_grid_to_css(area_grid);
        if !areas_css.is_empty() {
            let explained = explain_value("grid-template-areas", &areas_css);
            explanations.push(format!("The grid uses named areas: {explained}."));
        }
    }

    let gaps = resolve_gaps(config);
    if let Some(gap) = gaps.gap {
        let explained = explain_value("gap", gap);
        explanations.push(format!(
            "There is a gap of {explained} between all grid items."
        ));
    } else {
        if let Some(column_gap) = gaps.column_gap {
            let explained = explain_value("column-gap", column_gap);
            explanations.push(format!(
                "There is a column gap of {explained} between grid items."
            ));
        }
        if let Some(row_gap) = gaps.row_gap {
            let explained = explain_value("row-gap", row_gap);
            explanations.push(format!(
                "There is a row gap of {explained} between grid items."
            ));
        }
    }

    if let Some(flow) = config.grid_auto_flow {
        let explained = explain_value("grid-auto-flow", flow.as_css());
        explanations.push(format!("Items are placed using {explained}."));
    }
    if let Some(auto_columns) = &config.grid_auto_columns {
        let explained = explain_value("grid-auto-columns", auto_columns);
        explanations.push(format!(
            "Automatically created columns will have a size of {explained}."
        ));
    }
    if let Some(auto_rows) = &config.grid_auto_rows {
        let explained = explain_value("grid-auto-rows", auto_rows);
        explanations.push(format!(
            "Automatically created rows will have a size of {explained}."
        ));
    }

    if let Some(justify_items) = config.justify_items {
        let explained = explain_value("justify-items", justify_items.as_css());
        explanations.push(format!(
            "All items are horizontally aligned to: {explained}."
        ));
    }
    if let Some(align_items) = config.align_items {
        let explained = explain_value("align-items", align_items.as_css());
        explanations.push(format!("All items are vertically aligned to: {explained}."));
    }
    if let Some(justify_content) = config.justify_content {
        let explained = explain_value("justify-content", justify_content.as_css());
        explanations.push(format!(
            "The entire grid is horizontally aligned to: {explained}."
        ));
    }
    if let Some(align_content) = config.align_content {
        let explained = explain_value("align-content", align_content.as_css());
        explanations.push(format!(
            "The entire grid is vertically aligned to: {explained}."
        ));
    }
    if let Some(place_items) = &config.place_items {
        let explained = explain_value("place-items", place_items);
        explanations.push(format!(
            "All items are positioned using place-items: {explained}."
        ));
    }
    if let Some(place_content) = &config.place_content {
        let explained = explain_value("place-content", place_content);
        explanations.push(format!(
            "The grid content is positioned using place-content: {explained}."
        ));
    }

    if let Some(width) = &config.width {
        let explained = explain_value("width", width);
        explanations.push(format!("The container has a width of {explained}."));
    }
    if let Some(height) = &config.height {
        let explained = explain_value("height", height);
        explanations.push(format!("The container has a height of {explained}."));
    }
    if let Some(min_width) = &config.min_width {
        let explained = explain_value("min-width", min_width);
        explanations.push(format!(
            "The container has a minimum width of {explained}."
        ));
    }
    if let Some(min_height) = &config.min_height {
        let explained = explain_value("min-height", min_height);
        explanations.push(format!(
            "The container has a minimum height of {explained}."
        ));
    }
    if let Some(max_width) = &config.max_width {
        let explained = explain_value("max-width", max_width);
        explanations.push(format!(
            "The container has a maximum width of {explained}."
        ));
    }
    if let Some(max_height) = &config.max_height {
        let explained = explain_value("max-height", max_height);
        explanations.push(format!(
            "The container has a maximum height of {explained}."
        ));
    }

    if explanations.is_empty() {
        return "The grid container has no specific configuration. Items will be placed automatically in a single column.".to_owned();
    }
    explanations.join(" ")
}

/// Explain a grid item configuration as prose.
pub fn explain_child_config(config: &ChildConfig) -> String {
    let mut explanations: Vec<String> = Vec::new();

    for (property, value) in resolve_placement(config) {
        let explained = explain_value(property.as_css(), value);
        let sentence = match property {
            PlacementProperty::GridArea => grid_area_sentence(value, &explained),
            PlacementProperty::GridColumn => format!("This item spans columns: {explained}."),
            PlacementProperty::GridColumnStart => {
                format!("This item starts at column line: {explained}.")
            }
            PlacementProperty::GridColumnEnd => {
                format!("This item ends at column line: {explained}.")
            }
            PlacementProperty::GridRow => format!("This item spans rows: {explained}."),
            PlacementProperty::GridRowStart => {
                format!("This item starts at row line: {explained}.")
            }
            PlacementProperty::GridRowEnd => format!("This item ends at row line: {explained}."),
        };
        explanations.push(sentence);
    }

    if let Some(justify_self) = config.justify_self {
        let explained = explain_value("justify-self", justify_self.as_css());
        explanations.push(format!(
            "This item is horizontally aligned to: {explained}."
        ));
    }
    if let Some(align_self) = config.align_self {
        let explained = explain_value("align-self", align_self.as_css());
        explanations.push(format!("This item is vertically aligned to: {explained}."));
    }
    if let Some(place_self) = &config.place_self {
        let explained = explain_value("place-self", place_self);
        explanations.push(format!("This item uses place-self: {explained}."));
    }

    if let Some(order) = config.order {
        let explained = explain_value("order", &order.to_string());
        explanations.push(format!(
            "This item has an order value of {explained}, affecting its placement order."
        ));
    }

    if let Some(width) = &config.width {
        let explained = explain_value("width", width);
        explanations.push(format!("This item has a width of {explained}."));
    }
    if let Some(height) = &config.height {
        let explained = explain_value("height", height);
        explanations.push(format!("This item has a height of {explained}."));
    }
    if let Some(min_width) = &config.min_width {
        let explained = explain_value("min-width", min_width);
        explanations.push(format!("This item has a minimum width of {explained}."));
    }
    if let Some(min_height) = &config.min_height {
        let explained = explain_value("min-height", min_height);
        explanations.push(format!("This item has a minimum height of {explained}."));
    }
    if let Some(max_width) = &config.max_width {
        let explained = explain_value("max-width", max_width);
        explanations.push(format!("This item has a maximum width of {explained}."));
    }
    if let Some(max_height) = &config.max_height {
        let explained = explain_value("max-height", max_height);
        explanations.push(format!("This item has a maximum height of {explained}."));
    }

    // Insets and z-index only make sense once the item is positioned.
    if let Some(position) = config.position {
        if position != Position::Static {
            let explained = explain_value("position", position.as_css());
            explanations.push(format!("This item uses {explained}."));
            if let Some(top) = &config.top {
                let explained_top = explain_value("top", top);
                explanations.push(format!("Positioned {explained_top} from the top."));
            }
            if let Some(right) = &config.right {
                let explained_right = explain_value("right", right);
                explanations.push(format!("Positioned {explained_right} from the right."));
            }
            if let Some(bottom) = &config.bottom {
                let explained_bottom = explain_value("bottom", bottom);
                explanations.push(format!("Positioned {explained_bottom} from the bottom."));
            }
            if let Some(left) = &config.left {
                let explained_left = explain_value("left", left);
                explanations.push(format!("Positioned {explained_left} from the left."));
            }
            if let Some(z_index) = config.z_index {
                let explained_z = explain_value("z-index", &z_index.to_string());
                explanations.push(format!("Has a z-index of {explained_z}."));
            }
        }
    }

    // Nested layout, with flex sub-properties gated on a flex display.
    if let Some(display) = config.display {
        if display != ChildDisplay::Block {
            let explained = explain_value("display", display.as_css());
            explanations.push(format!(
                "This item uses {explained} as its internal display type."
            ));
            if display.is_flex() {
                if let Some(direction) = config.flex_direction {
                    let explained_direction =
                        explain_value("flex-direction", direction.as_css());
                    explanations.push(format!(
                        "Flex direction is set to {explained_direction}."
                    ));
                }
                if let Some(justify_content) = config.justify_content {
                    let explained_justify =
                        explain_value("justify-content", justify_content.as_css());
                    explanations.push(format!(
                        "Content is justified with: {explained_justify}."
                    ));
                }
                if let Some(align_items) = config.align_items {
                    let explained_align = explain_value("align-items", align_items.as_css());
                    explanations.push(format!("Items are aligned with: {explained_align}."));
                }
            }
        }
    }

    if explanations.is_empty() {
        return "This grid item has no specific configuration. It will be placed automatically in the next available grid cell.".to_owned();
    }
    explanations.join(" ")
}

/// Sentence framing for a `grid-area` value, by value shape.
fn grid_area_sentence(value: &str, explained: &str) -> String {
    if value.contains('/') {
        return format!("This item is placed using grid-area with values: {explained}.");
    }
    let is_name = !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphabetic() || character == '-');
    if is_name {
        return format!("This item is placed in the named grid area: {explained}.");
    }
    format!("This item spans from grid lines specified by: {explained}.")
}
