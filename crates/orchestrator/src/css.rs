//! CSS declaration block builders.
//!
//! Same field traversal and precedence resolution as the prose builders, but
//! each populated field becomes a `property: value;` line. Lines are joined
//! by a newline plus two-space indent, ready to drop into a rule body. An
//! empty configuration yields an empty string, with no placeholder text.
//!
//! Unlike the prose builders, insets and the flex sub-properties are emitted
//! whenever set, with no gating on `position` or `display`. Deliberate
//! asymmetry, covered by tests on both sides.

use crate::config::{ChildConfig, ContainerConfig};
use crate::resolve::{resolve_gaps, resolve_placement};
use grid_tracks::{area_grid_to_css, template_to_css};

const LINE_SEPARATOR: &str = "\n  ";

/// Build the declaration block for a grid container configuration.
pub fn container_config_to_css(config: &ContainerConfig) -> String {
    let mut properties: Vec<String> = Vec::new();

    if let Some(display) = config.display {
        properties.push(format!("display: {};", display.as_css()));
    }

    if let Some(template) = &config.grid_template_columns {
        let columns_css = template_to_css(template);
        if !columns_css.is_empty() {
            properties.push(format!("grid-template-columns: {columns_css};"));
        }
    }
    if let Some(template) = &config.grid_template_rows {
        let rows_css = template_to_css(template);
        if !rows_css.is_empty() {
            properties.push(format!("grid-template-rows: {rows_css};"));
        }
    }
    if let Some(area_grid) = &config.grid_template_areas {
        let areas_css = area_grid_to_css(area_grid);
        if !areas_css.is_empty() {
            properties.push(format!("grid-template-areas: {areas_css};"));
        }
    }

    let gaps = resolve_gaps(config);
    if let Some(gap) = gaps.gap {
        properties.push(format!("gap: {gap};"));
    } else {
        if let Some(column_gap) = gaps.column_gap {
            properties.push(format!("column-gap: {column_gap};"));
        }
        if let Some(row_gap) = gaps.row_gap {
            properties.push(format!("row-gap: {row_gap};"));
        }
    }

    if let Some(flow) = config.grid_auto_flow {
        properties.push(format!("grid-auto-flow: {};", flow.as_css()));
    }
    if let Some(auto_columns) = &config.grid_auto_columns {
        properties.push(format!("grid-auto-columns: {auto_columns};"));
    }
    if let Some(auto_rows) = &config.grid_auto_rows {
        properties.push(format!("grid-auto-rows: {auto_rows};"));
    }

    if let Some(justify_items) = config.justify_items {
        properties.push(format!("justify-items: {};", justify_items.as_css()));
    }
    if let Some(align_items) = config.align_items {
        properties.push(format!("align-items: {};", align_items.as_css()));
    }
    if let Some(justify_content) = config.justify_content {
        properties.push(format!("justify-content: {};", justify_content.as_css()));
    }
    if let Some(align_content) = config.align_content {
        properties.push(format!("align-content: {};", align_content.as_css()));
    }
    if let Some(place_items) = &config.place_items {
        properties.push(format!("place-items: {place_items};"));
    }
    if let Some(place_content) = &config.place_content {
        properties.push(format!("place-content: {place_content};"));
    }

    push_sizing(&mut properties, &Sizing {
        width: config.width.as_deref(),
        height: config.height.as_deref(),
        min_width: config.min_width.as_deref(),
        min_height: config.min_height.as_deref(),
        max_width: config.max_width.as_deref(),
        max_height: config.max_height.as_deref(),
    });

    if let Some(padding) = &config.padding {
        properties.push(format!("padding: {padding};"));
    }
    if let Some(margin) = &config.margin {
        properties.push(format!("margin: {margin};"));
    }
    if let Some(border) = &config.border {
        properties.push(format!("border: {border};"));
    }
    if let Some(background_color) = &config.background_color {
        properties.push(format!("background-color: {background_color};"));
    }

    if let Some(position) = config.position {
        properties.push(format!("position: {};", position.as_css()));
    }
    push_insets(&mut properties, &Insets {
        top: config.top.as_deref(),
        right: config.right.as_deref(),
        bottom: config.bottom.as_deref(),
        left: config.left.as_deref(),
    });

    if let Some(overflow) = config.overflow {
        properties.push(format!("overflow: {};", overflow.as_css()));
    }
    if let Some(overflow_x) = config.overflow_x {
        properties.push(format!("overflow-x: {};", overflow_x.as_css()));
    }
    if let Some(overflow_y) = config.overflow_y {
        properties.push(format!("overflow-y: {};", overflow_y.as_css()));
    }

    properties.join(LINE_SEPARATOR)
}

/// Build the declaration block for a grid item configuration.
pub fn child_config_to_css(config: &ChildConfig) -> String {
    let mut properties: Vec<String> = Vec::new();

    for (property, value) in resolve_placement(config) {
        properties.push(format!("{}: {value};", property.as_css()));
    }

    if let Some(justify_self) = config.justify_self {
        properties.push(format!("justify-self: {};", justify_self.as_css()));
    }
    if let Some(align_self) = config.align_self {
        properties.push(format!("align-self: {};", align_self.as_css()));
    }
    if let Some(place_self) = &config.place_self {
        properties.push(format!("place-self: {place_self};"));
    }

    if let Some(order) = config.order {
        properties.push(format!("order: {order};"));
    }

    push_sizing(&mut properties, &Sizing {
        width: config.width.as_deref(),
        height: config.height.as_deref(),
        min_width: config.min_width.as_deref(),
        min_height: config.min_height.as_deref(),
        max_width: config.max_width.as_deref(),
        max_height: config.max_height.as_deref(),
    });

    if let Some(padding) = &config.padding {
        properties.push(format!("padding: {padding};"));
    }
    if let Some(margin) = &config.margin {
        properties.push(format!("margin: {margin};"));
    }
    if let Some(border) = &config.border {
        properties.push(format!("border: {border};"));
    }

    if let Some(background_color) = &config.background_color {
        properties.push(format!("background-color: {background_color};"));
    }
    if let Some(color) = &config.color {
        properties.push(format!("color: {color};"));
    }
    if let Some(opacity) = config.opacity {
        properties.push(format!("opacity: {opacity};"));
    }

    if let Some(position) = config.position {
        properties.push(format!("position: {};", position.as_css()));
    }
    push_insets(&mut properties, &Insets {
        top: config.top.as_deref(),
        right: config.right.as_deref(),
        bottom: config.bottom.as_deref(),
        left: config.left.as_deref(),
    });
    if let Some(z_index) = config.z_index {
        properties.push(format!("z-index: {z_index};"));
    }

    if let Some(overflow) = config.overflow {
        properties.push(format!("overflow: {};", overflow.as_css()));
    }
    if let Some(overflow_x) = config.overflow_x {
        properties.push(format!("overflow-x: {};", overflow_x.as_css()));
    }
    if let Some(overflow_y) = config.overflow_y {
        properties.push(format!("overflow-y: {};", overflow_y.as_css()));
    }

    if let Some(font_size) = &config.font_size {
        properties.push(format!("font-size: {font_size};"));
    }
    if let Some(font_weight) = &config.font_weight {
        properties.push(format!("font-weight: {font_weight};"));
    }
    if let Some(font_family) = &config.font_family {
        properties.push(format!("font-family: {font_family};"));
    }
    if let Some(text_align) = config.text_align {
        properties.push(format!("text-align: {};", text_align.as_css()));
    }

    if let Some(display) = config.display {
        properties.push(format!("display: {};", display.as_css()));
    }
    if let Some(direction) = config.flex_direction {
        properties.push(format!("flex-direction: {};", direction.as_css()));
    }
    if let Some(wrap) = config.flex_wrap {
        properties.push(format!("flex-wrap: {};", wrap.as_css()));
    }
    if let Some(justify_content) = config.justify_content {
        properties.push(format!("justify-content: {};", justify_content.as_css()));
    }
    if let Some(align_items) = config.align_items {
        properties.push(format!("align-items: {};", align_items.as_css()));
    }

    properties.join(LINE_SEPARATOR)
}

/// Width and height bounds shared by both builders.
struct Sizing<'config> {
    width: Option<&'config str>,
    height: Option<&'config str>,
    min_width: Option<&'config str>,
    min_height: Option<&'config str>,
    max_width: Option<&'config str>,
    max_height: Option<&'config str>,
}

fn push_sizing(properties: &mut Vec<String>, sizing: &Sizing<'_>) {
    if let Some(width) = sizing.width {
        properties.push(format!("width: {width};"));
    }
    if let Some(height) = sizing.height {
        properties.push(format!("height: {height};"));
    }
    if let Some(min_width) = sizing.min_width {
        properties.push(format!("min-width: {min_width};"));
    }
    if let Some(min_height) = sizing.min_height {
        properties.push(format!("min-height: {min_height};"));
    }
    if let Some(max_width) = sizing.max_width {
        properties.push(format!("max-width: {max_width};"));
    }
    if let Some(max_height) = sizing.max_height {
        properties.push(format!("max-height: {max_height};"));
    }
}

/// The four inset longhands, emitted whenever set.
struct Insets<'config> {
    top: Option<&'config str>,
    right: Option<&'config str>,
    bottom: Option<&'config str>,
    left: Option<&'config str>,
}

fn push_insets(properties: &mut Vec<String>, insets: &Insets<'_>) {
    if let Some(top) = insets.top {
        properties.push(format!("top: {top};"));
    }
    if let Some(right) = insets.right {
        properties.push(format!("right: {right};"));
    }
    if let Some(bottom) = insets.bottom {
        properties.push(format!("bottom: {bottom};"));
    }
    if let Some(left) = insets.left {
        properties.push(format!("left: {left};"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AlignKeyword, ChildDisplay, ContainerDisplay, FlexDirection, GridFlow, Overflow, Position,
    };
    use grid_tracks::{
        AreaGrid, RepeatCount, TrackRepeat, TrackSize, TrackTemplate, TrackUnit, TrackValue,
    };

    /// An empty configuration produces an empty block, not placeholder text.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_empty_configs() {
        assert_eq!(container_config_to_css(&ContainerConfig::default()), "");
        assert_eq!(child_config_to_css(&ChildConfig::default()), "");
    }

    /// Container declarations come out in field order, indent-joined.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_container_block() {
        let config = ContainerConfig {
            display: Some(ContainerDisplay::Grid),
            grid_template_columns: Some(TrackTemplate::from_repeat(TrackRepeat {
                count: RepeatCount::Fixed(3),
                value: TrackValue::Size(TrackSize::new(1.0, TrackUnit::Fr)),
            })),
            gap: Some("10px".to_owned()),
            grid_auto_flow: Some(GridFlow::Column),
            ..ContainerConfig::default()
        };
        assert_eq!(
            container_config_to_css(&config),
            "display: grid;\n  grid-template-columns: repeat(3, 1fr);\n  gap: 10px;\n  grid-auto-flow: column;"
        );
    }

    /// Named areas serialize into the declaration.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_container_areas() {
        let config = ContainerConfig {
            grid_template_areas: Some(AreaGrid {
                areas: vec![
                    vec!["header".to_owned(), "header".to_owned()],
                    vec!["sidebar".to_owned(), "main".to_owned()],
                ],
            }),
            ..ContainerConfig::default()
        };
        assert_eq!(
            container_config_to_css(&config),
            "grid-template-areas: \"header header\" \"sidebar main\";"
        );
    }

    /// An empty template value contributes no declaration at all.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_container_empty_template_skipped() {
        let config = ContainerConfig {
            grid_template_columns: Some(TrackTemplate::default()),
            grid_template_areas: Some(AreaGrid::default()),
            ..ContainerConfig::default()
        };
        assert_eq!(container_config_to_css(&config), "");
    }

    /// Gap precedence matches the prose builder.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_container_gap_precedence() {
        let shorthand = ContainerConfig {
            gap: Some("10px".to_owned()),
            column_gap: Some("20px".to_owned()),
            ..ContainerConfig::default()
        };
        assert_eq!(container_config_to_css(&shorthand), "gap: 10px;");

        let legacy = ContainerConfig {
            grid_column_gap: Some("4px".to_owned()),
            row_gap: Some("8px".to_owned()),
            ..ContainerConfig::default()
        };
        assert_eq!(
            container_config_to_css(&legacy),
            "column-gap: 4px;\n  row-gap: 8px;"
        );
    }

    /// Grid area suppresses column and row declarations.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_child_area_precedence() {
        let config = ChildConfig {
            grid_area: Some("header".to_owned()),
            grid_column: Some("1 / 3".to_owned()),
            grid_row_start: Some("2".to_owned()),
            ..ChildConfig::default()
        };
        let block = child_config_to_css(&config);
        assert!(block.contains("grid-area: header;"));
        assert!(!block.contains("grid-column"));
        assert!(!block.contains("grid-row"));
    }

    /// Column shorthand suppresses its longhands, row longhands survive.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_child_axis_precedence() {
        let config = ChildConfig {
            grid_column: Some("1 / 3".to_owned()),
            grid_column_start: Some("1".to_owned()),
            grid_row_start: Some("2".to_owned()),
            ..ChildConfig::default()
        };
        assert_eq!(
            child_config_to_css(&config),
            "grid-column: 1 / 3;\n  grid-row-start: 2;"
        );
    }

    /// Zero-valued order, opacity and z-index are emitted.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_child_zero_values() {
        let config = ChildConfig {
            order: Some(0),
            opacity: Some(0.0),
            z_index: Some(0),
            ..ChildConfig::default()
        };
        let block = child_config_to_css(&config);
        assert!(block.contains("order: 0;"));
        assert!(block.contains("opacity: 0;"));
        assert!(block.contains("z-index: 0;"));
    }

    /// Insets are emitted even under static position.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_child_insets_unconditional() {
        let config = ChildConfig {
            position: Some(Position::Static),
            top: Some("10px".to_owned()),
            left: Some("5px".to_owned()),
            ..ChildConfig::default()
        };
        assert_eq!(
            child_config_to_css(&config),
            "position: static;\n  top: 10px;\n  left: 5px;"
        );
    }

    /// The flex group is emitted without display gating.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_child_flex_group() {
        let config = ChildConfig {
            display: Some(ChildDisplay::Flex),
            flex_direction: Some(FlexDirection::Column),
            justify_content: Some(AlignKeyword::SpaceBetween),
            align_items: Some(AlignKeyword::Center),
            overflow: Some(Overflow::Hidden),
            ..ChildConfig::default()
        };
        assert_eq!(
            child_config_to_css(&config),
            "overflow: hidden;\n  display: flex;\n  flex-direction: column;\n  justify-content: space-between;\n  align-items: center;"
        );
    }
}
