//! Track model to CSS text conversion.
//!
//! Spec: CSS Grid Layout Module Level 2 §7.2 Explicit Track Sizing
//! <https://www.w3.org/TR/css-grid-2/#track-sizing>

use crate::types::{AreaGrid, RepeatCount, TrackRange, TrackSize, TrackTemplate, TrackValue};

/// Convert a track size to its CSS text form.
///
/// Keyword units emit the bare keyword. Numeric units emit `{value}{unit}`
/// with the value in shortest decimal form (`1fr`, `1.5em`). A numeric unit
/// missing its value falls back to the bare unit text; that input is
/// malformed, but serialization stays total.
pub fn track_size_to_css(size: &TrackSize) -> String {
    if size.unit.is_keyword() {
        return size.unit.as_css().to_owned();
    }
    match size.value {
        Some(value) => format!("{value}{}", size.unit.as_css()),
        None => size.unit.as_css().to_owned(),
    }
}

/// Convert a `minmax()` range to its CSS text form.
pub fn track_range_to_css(range: &TrackRange) -> String {
    format!(
        "minmax({}, {})",
        track_size_to_css(&range.min),
        track_size_to_css(&range.max)
    )
}

/// Convert a track value to CSS text, dispatching on the union.
pub fn track_value_to_css(value: &TrackValue) -> String {
    match value {
        TrackValue::Range(range) => track_range_to_css(range),
        TrackValue::Size(size) => track_size_to_css(size),
    }
}

/// CSS text for a repeat count: the literal number or the auto keyword.
fn repeat_count_to_css(count: RepeatCount) -> String {
    match count {
        RepeatCount::Fixed(number) => number.to_string(),
        RepeatCount::Auto(keyword) => keyword.as_css().to_owned(),
    }
}

/// Convert a track template to a CSS track-list string.
///
/// A `repeat()` pattern wins over explicit values whenever present; explicit
/// values are space-joined; an empty template yields an empty string.
pub fn template_to_css(template: &TrackTemplate) -> String {
    if let Some(repeat) = &template.repeat {
        return format!(
            "repeat({}, {})",
            repeat_count_to_css(repeat.count),
            track_value_to_css(&repeat.value)
        );
    }
    if template.values.is_empty() {
        return String::new();
    }
    template
        .values
        .iter()
        .map(track_value_to_css)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Convert a named-area grid to a `grid-template-areas` value string.
///
/// Each row becomes a double-quoted, space-joined token list; rows are joined
/// by single spaces. An empty grid yields an empty string.
pub fn area_grid_to_css(area_grid: &AreaGrid) -> String {
    if area_grid.is_empty() {
        return String::new();
    }
    area_grid
        .areas
        .iter()
        .map(|row| format!("\"{}\"", row.join(" ")))
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AutoRepeat, TrackRepeat, TrackUnit};

    /// Keyword units serialize as bare keywords.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_keyword_units() {
        assert_eq!(track_size_to_css(&TrackSize::keyword(TrackUnit::Auto)), "auto");
        assert_eq!(
            track_size_to_css(&TrackSize::keyword(TrackUnit::MinContent)),
            "min-content"
        );
        assert_eq!(
            track_size_to_css(&TrackSize::keyword(TrackUnit::MaxContent)),
            "max-content"
        );
    }

    /// Numeric units concatenate value and unit without formatting noise.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_numeric_units() {
        assert_eq!(track_size_to_css(&TrackSize::new(1.0, TrackUnit::Fr)), "1fr");
        assert_eq!(track_size_to_css(&TrackSize::new(100.0, TrackUnit::Px)), "100px");
        assert_eq!(track_size_to_css(&TrackSize::new(50.0, TrackUnit::Percent)), "50%");
        assert_eq!(track_size_to_css(&TrackSize::new(1.5, TrackUnit::Em)), "1.5em");
        assert_eq!(track_size_to_css(&TrackSize::new(2.0, TrackUnit::Rem)), "2rem");
        assert_eq!(track_size_to_css(&TrackSize::new(50.0, TrackUnit::Vh)), "50vh");
        assert_eq!(track_size_to_css(&TrackSize::new(25.0, TrackUnit::Vw)), "25vw");
    }

    /// Decimal values keep their shortest form.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_decimal_value() {
        assert_eq!(track_size_to_css(&TrackSize::new(1.5, TrackUnit::Fr)), "1.5fr");
    }

    /// A numeric unit with no value degrades to the bare unit text.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_missing_value_fallback() {
        let malformed = TrackSize {
            value: None,
            unit: TrackUnit::Fr,
        };
        assert_eq!(track_size_to_css(&malformed), "fr");
    }

    /// `minmax()` serializes both bounds.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_minmax() {
        let range = TrackRange::new(
            TrackSize::new(100.0, TrackUnit::Px),
            TrackSize::new(1.0, TrackUnit::Fr),
        );
        assert_eq!(track_range_to_css(&range), "minmax(100px, 1fr)");
        assert_eq!(track_value_to_css(&TrackValue::Range(range)), "minmax(100px, 1fr)");
    }

    /// Explicit values are space-joined in order.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_template_values() {
        let template = TrackTemplate::from_values(vec![
            TrackValue::Size(TrackSize::new(1.0, TrackUnit::Fr)),
            TrackValue::Size(TrackSize::new(2.0, TrackUnit::Fr)),
            TrackValue::Size(TrackSize::keyword(TrackUnit::Auto)),
        ]);
        assert_eq!(template_to_css(&template), "1fr 2fr auto");
    }

    /// A fixed-count repeat emits `repeat(n, value)`.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_template_repeat_fixed() {
        let template = TrackTemplate::from_repeat(TrackRepeat {
            count: RepeatCount::Fixed(3),
            value: TrackValue::Size(TrackSize::new(1.0, TrackUnit::Fr)),
        });
        assert_eq!(template_to_css(&template), "repeat(3, 1fr)");
    }

    /// Auto keywords pass through as repeat counts.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_template_repeat_auto() {
        let template = TrackTemplate::from_repeat(TrackRepeat {
            count: RepeatCount::Auto(AutoRepeat::AutoFit),
            value: TrackValue::Range(TrackRange::new(
                TrackSize::new(100.0, TrackUnit::Px),
                TrackSize::new(1.0, TrackUnit::Fr),
            )),
        });
        assert_eq!(template_to_css(&template), "repeat(auto-fit, minmax(100px, 1fr))");
    }

    /// Repeat wins over explicit values when both are populated.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_repeat_precedence() {
        let template = TrackTemplate {
            values: vec![TrackValue::Size(TrackSize::new(5.0, TrackUnit::Px))],
            repeat: Some(TrackRepeat {
                count: RepeatCount::Fixed(2),
                value: TrackValue::Size(TrackSize::new(1.0, TrackUnit::Fr)),
            }),
        };
        assert_eq!(template_to_css(&template), "repeat(2, 1fr)");
    }

    /// An empty template serializes to nothing.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_empty_template() {
        assert_eq!(template_to_css(&TrackTemplate::default()), "");
    }

    /// Area rows are quoted and space-joined.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_area_grid() {
        let area_grid = AreaGrid {
            areas: vec![
                vec!["header".to_owned(), "header".to_owned()],
                vec!["sidebar".to_owned(), "main".to_owned()],
            ],
        };
        assert_eq!(area_grid_to_css(&area_grid), "\"header header\" \"sidebar main\"");
        assert_eq!(area_grid_to_css(&AreaGrid::default()), "");
    }

    /// The `.` placeholder is preserved inside rows.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_area_grid_placeholder() {
        let area_grid = AreaGrid {
            areas: vec![vec![".".to_owned(), "sidebar".to_owned()]],
        };
        assert_eq!(area_grid_to_css(&area_grid), "\". sidebar\"");
    }
}
