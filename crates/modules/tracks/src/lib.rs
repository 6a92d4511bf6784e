//! Grid track value model, serialization and parsing.
//!
//! Spec: CSS Grid Layout Module Level 2 §7.2 Explicit Track Sizing
//! <https://www.w3.org/TR/css-grid-2/#track-sizing>
//!
//! This crate models the values of `grid-template-columns`/`-rows` and
//! `grid-template-areas` as plain data, converts them to their canonical CSS
//! text form, and parses free-text track lists back into the model. Parsing
//! is deliberately total: malformed input degrades to a best-effort value
//! instead of failing, so in-progress user typing never surfaces an error.

#![forbid(unsafe_code)]

// Track value model
mod types;
pub use types::{
    AreaGrid, AutoRepeat, RepeatCount, TrackRange, TrackRepeat, TrackSize, TrackTemplate,
    TrackUnit, TrackValue,
};

// Model -> CSS text
mod serialize;
pub use serialize::{
    area_grid_to_css, template_to_css, track_range_to_css, track_size_to_css, track_value_to_css,
};

// CSS text -> model
mod parse;
pub use parse::{parse_area_grid, parse_track_size, parse_track_template, parse_track_value};
