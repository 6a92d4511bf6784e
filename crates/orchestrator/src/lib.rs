//! Grid configuration orchestration: configuration models, precedence
//! resolution, prose explanation builders and CSS declaration builders.
//!
//! Spec: CSS Grid Layout Module Level 2 <https://www.w3.org/TR/css-grid-2/>
//!
//! An external producer (a form UI or any other caller) hands in a
//! [`ContainerConfig`] or [`ChildConfig`] per edit. The CSS builders return a
//! declaration block for rendering, the explanation builders return prose for
//! display, and [`preview_stylesheet`] composes whole rules. All entry points
//! are pure and total.

#![forbid(unsafe_code)]

// Configuration models and keyword enums
mod config;
pub use config::{
    AlignKeyword, ChildConfig, ChildDisplay, ContainerConfig, ContainerDisplay, FlexDirection,
    FlexWrap, GridFlow, Overflow, Position, TextAlign,
};

// Shorthand/longhand precedence, resolved once for both output passes
mod resolve;
pub use resolve::{resolve_gaps, resolve_placement, GapResolution, PlacementProperty};

// Prose output
mod explain;
pub use explain::{explain_child_config, explain_container_config};

// CSS output
mod css;
pub use css::{child_config_to_css, container_config_to_css};

// Whole-rule assembly for previews
mod stylesheet;
pub use stylesheet::{css_rule, preview_stylesheet};
