#![allow(clippy::unwrap_used)]

//! End-to-end tests across the serde boundary: JSON configuration in,
//! declaration blocks and prose out, plus the free-text parsing entry points
//! feeding structured templates back into the builders.

use grid_orchestrator::{
    child_config_to_css, container_config_to_css, explain_child_config,
    explain_container_config, preview_stylesheet, ChildConfig, ContainerConfig,
};
use grid_tracks::{parse_area_grid, parse_track_template};

/// A JSON container configuration renders the same block as a native one.
///
/// # Panics
/// Panics if deserialization or assertions fail.
#[test]
fn test_container_from_json() {
    let config: ContainerConfig = serde_json::from_str(
        r#"{
            "display": "grid",
            "gridTemplateColumns": {"repeat": {"count": 3, "value": {"value": 1.0, "unit": "fr"}}},
            "gap": "10px",
            "justifyContent": "space-between"
        }"#,
    )
    .unwrap();

    let block = container_config_to_css(&config);
    assert_eq!(
        block,
        "display: grid;\n  grid-template-columns: repeat(3, 1fr);\n  gap: 10px;\n  justify-content: space-between;"
    );

    let prose = explain_container_config(&config);
    assert!(prose.contains("repeat(3, 1fr)"));
    assert!(prose.contains("There is a gap of 10px"));
}

/// A JSON child configuration follows the placement precedence ladder.
///
/// # Panics
/// Panics if deserialization or assertions fail.
#[test]
fn test_child_from_json() {
    let config: ChildConfig = serde_json::from_str(
        r#"{"gridArea": "header", "gridColumn": "1 / 3", "order": 0}"#,
    )
    .unwrap();

    let block = child_config_to_css(&config);
    assert!(block.contains("grid-area: header;"));
    assert!(!block.contains("grid-column"));
    assert!(!block.contains("grid-row"));
    assert!(block.contains("order: 0;"));

    let prose = explain_child_config(&config);
    assert!(prose.contains("named grid area: header"));
    assert!(prose.contains("order value of 0"));
}

/// Empty JSON objects hit both empty-config contracts: empty CSS block,
/// fixed prose messages.
///
/// # Panics
/// Panics if deserialization or assertions fail.
#[test]
fn test_empty_json_configs() {
    let container: ContainerConfig = serde_json::from_str("{}").unwrap();
    let child: ChildConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(container_config_to_css(&container), "");
    assert_eq!(child_config_to_css(&child), "");
    assert_eq!(
        explain_container_config(&container),
        "The grid container has no specific configuration. Items will be placed automatically in a single column."
    );
    assert_eq!(
        explain_child_config(&child),
        "This grid item has no specific configuration. It will be placed automatically in the next available grid cell."
    );
}

/// Free-text input parses into templates that feed straight into the
/// builders.
///
/// # Panics
/// Panics if parsing or assertions fail.
#[test]
fn test_parse_then_build() {
    let config = ContainerConfig {
        grid_template_columns: parse_track_template("repeat(auto-fit, minmax(100px, 1fr))"),
        grid_template_rows: parse_track_template("auto 1fr auto"),
        grid_template_areas: parse_area_grid("\"header header\" \"sidebar main\""),
        ..ContainerConfig::default()
    };

    let block = container_config_to_css(&config);
    assert!(block.contains("grid-template-columns: repeat(auto-fit, minmax(100px, 1fr));"));
    assert!(block.contains("grid-template-rows: auto 1fr auto;"));
    assert!(block.contains("grid-template-areas: \"header header\" \"sidebar main\";"));
}

/// Round-trip through serde preserves builder output.
///
/// # Panics
/// Panics if serialization or assertions fail.
#[test]
fn test_serde_round_trip() {
    let config = ChildConfig {
        grid_column: Some("span 2".to_owned()),
        order: Some(-1),
        opacity: Some(0.5),
        ..ChildConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let restored: ChildConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
    assert_eq!(child_config_to_css(&restored), child_config_to_css(&config));

    let prose = explain_child_config(&restored);
    assert!(prose.contains("span 2"));
    assert!(prose.contains("appears earlier"));
}

/// The preview stylesheet emits a container rule plus indexed child rules.
///
/// # Panics
/// Panics if deserialization or assertions fail.
#[test]
fn test_preview_stylesheet_shape() {
    let container: ContainerConfig =
        serde_json::from_str(r#"{"display": "grid", "gap": "8px"}"#).unwrap();
    let children: Vec<ChildConfig> = serde_json::from_str(
        r#"[{"gridArea": "header"}, {"gridColumn": "1 / 2"}]"#,
    )
    .unwrap();

    let stylesheet = preview_stylesheet(&container, &children, "grid-preview");
    assert!(stylesheet.contains(".grid-preview-container {\n  display: grid;\n  gap: 8px;\n}"));
    assert!(stylesheet.contains(".grid-preview-child-0 {\n  grid-area: header;\n}"));
    assert!(stylesheet.contains(".grid-preview-child-1 {\n  grid-column: 1 / 2;\n}"));
}
