//! Human-readable annotations for CSS Grid and Flexbox property values.
//!
//! Spec: CSS Grid Layout Module Level 2 <https://www.w3.org/TR/css-grid-2/>
//! and CSS Box Alignment Module Level 3 <https://www.w3.org/TR/css-align-3/>
//!
//! Given a property name and a literal value string, [`explain_value`] returns
//! the value followed by a short parenthesized description of what it does,
//! or the value unchanged when no description applies. The function is total
//! and pure: unknown properties and unknown values pass through verbatim,
//! nothing ever fails.

#![forbid(unsafe_code)]

// Property name -> category, resolved once
mod classify;
pub use classify::{classify_property, AlignmentContext, PropertyCategory};

// Category -> annotated value
mod annotate;

/// Annotate a CSS value with a human-readable description.
///
/// The property name picks the vocabulary (a `start` on `justify-content`
/// reads differently than a `start` on `align-items`); the value picks the
/// clause. The original value is always preserved verbatim as a prefix of
/// the result.
pub fn explain_value(property: &str, value: &str) -> String {
    let normalized = value.to_lowercase();
    let normalized = normalized.trim();

    match classify_property(property) {
        PropertyCategory::Display => annotate::display(normalized, value),
        PropertyCategory::Overflow => annotate::overflow(normalized, value),
        PropertyCategory::Flow { flex } => annotate::flow(normalized, value, flex),
        PropertyCategory::Alignment(context) => annotate::alignment(normalized, value, context),
        PropertyCategory::Template => annotate::template(normalized, value),
        PropertyCategory::Placement => annotate::placement(normalized, value),
        PropertyCategory::Sizing => annotate::sizing(normalized, value),
        PropertyCategory::Position => annotate::position(normalized, value),
        PropertyCategory::Order => annotate::order(normalized, value),
        PropertyCategory::Other => {
            tracing::trace!("no explanation vocabulary for property {property:?}");
            value.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Display keywords carry their container descriptions.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_display_values() {
        assert!(explain_value("display", "grid").contains("grid container"));
        assert!(explain_value("display", "inline-grid").contains("inline-level grid container"));
        assert!(explain_value("display", "subgrid").contains("inherits the grid tracks"));
        assert!(explain_value("display", "flex").contains("flex container"));
        assert_eq!(explain_value("display", "block"), "block");
    }

    /// Overflow wins over flow despite containing the substring.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_overflow_values() {
        assert!(explain_value("overflow", "hidden").contains("clipped and hidden"));
        assert!(explain_value("overflow", "auto").contains("scrollbars appear only"));
        assert!(!explain_value("overflow", "auto").contains("placed horizontally"));
    }

    /// Flex direction and grid auto flow use separate vocabularies.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_flow_values() {
        assert!(
            explain_value("flex-direction", "row").contains("horizontally from left to right")
        );
        assert!(
            explain_value("flex-direction", "column-reverse")
                .contains("vertically from bottom to top")
        );
        assert!(explain_value("grid-auto-flow", "row").contains("filling each row"));
        assert!(explain_value("grid-auto-flow", "column").contains("filling each column"));
    }

    /// Dense flow values strip the keyword to pick a direction phrase.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_flow_dense_values() {
        let dense = explain_value("grid-auto-flow", "dense");
        assert!(dense.contains("horizontally (row by row)"));
        assert!(dense.contains("dense algorithm"));

        let column_dense = explain_value("grid-auto-flow", "column dense");
        assert!(column_dense.contains("vertically (column by column)"));

        let row_dense = explain_value("grid-auto-flow", "row dense");
        assert!(row_dense.contains("horizontally (row by row)"));
    }

    /// Alignment phrasing follows the axis and target of the property.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_alignment_context_phrasing() {
        assert!(explain_value("justify-content", "start").contains("main axis"));
        assert!(explain_value("align-content", "start").contains("cross axis"));
        assert!(explain_value("justify-items", "start").contains("typically the left"));
        assert!(explain_value("align-items", "start").contains("typically the top"));
        assert!(explain_value("align-self", "auto").contains("from justify-items or align-items"));
        assert!(explain_value("justify-content", "auto").contains("default alignment"));
        assert!(explain_value("align-items", "stretch").contains("stretches to fill its grid area"));
        assert!(
            explain_value("justify-content", "space-between").contains("no space at the edges")
        );
    }

    /// Template values annotate by shape, first match wins.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_template_values() {
        assert!(explain_value("grid-template-columns", "repeat(3, 1fr)").contains("repeat()"));
        assert!(explain_value("grid-template-columns", "minmax(100px, 1fr)").contains("minmax()"));
        assert!(
            explain_value("grid-template-areas", "\"header header\"").contains("named grid areas")
        );
        assert!(explain_value("grid-template-columns", "1fr 2fr").contains("fractional unit"));
        assert!(explain_value("grid-template-columns", "100px").contains("fixed pixel size"));
        assert!(explain_value("grid-template-columns", "50%").contains("percentage of container"));
        assert_eq!(explain_value("grid-template-columns", "foo bar"), "foo bar");
    }

    /// Placement values annotate by shape.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_placement_values() {
        assert!(explain_value("grid-column", "1 / 3").contains("grid line syntax"));
        assert!(explain_value("grid-column", "span 2").contains("span keyword"));
        assert!(explain_value("grid-row-start", "2").contains("grid line number"));
        assert!(explain_value("grid-row-start", "-1").contains("grid line number"));
        assert!(explain_value("grid-area", "header").contains("named grid area"));
        assert_eq!(explain_value("grid-area", "2 span"), "2 span (span keyword - spans across a specified number of tracks)");
    }

    /// Sizing values annotate along the unit ladder, rem before em.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_sizing_values() {
        assert!(explain_value("width", "minmax(10px, 1fr)").contains("size constraints"));
        assert!(explain_value("grid-auto-rows", "min-content").contains("fits the content"));
        assert!(explain_value("gap", "1rem").contains("root em unit"));
        assert!(explain_value("gap", "1.5em").contains("element's font size"));
        assert!(explain_value("height", "50vh").contains("viewport height"));
        assert!(explain_value("width", "25vw").contains("viewport width"));
        assert!(explain_value("width", "100px").contains("fixed pixel size"));
        assert!(explain_value("width", "50%").contains("percentage of parent"));
    }

    /// Position keywords carry fixed descriptions.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_position_values() {
        assert!(explain_value("position", "static").contains("normal document flow"));
        assert!(explain_value("position", "sticky").contains("scroll position"));
        assert_eq!(explain_value("position", "floating"), "floating");
    }

    /// Order annotations follow the sign; non-numeric passes through.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_order_values() {
        let earlier = explain_value("order", "-1");
        assert!(earlier.contains("-1"));
        assert!(earlier.contains("appears earlier"));
        assert!(explain_value("order", "2").contains("appears later"));
        assert!(explain_value("order", "0").contains("default order"));
        assert_eq!(explain_value("order", "first"), "first");
    }

    /// Every annotated result contains the original value verbatim.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_containment() {
        let cases = [
            ("display", "grid"),
            ("overflow", "scroll"),
            ("grid-auto-flow", "row dense"),
            ("justify-content", "space-evenly"),
            ("grid-template-columns", "repeat(2, 1fr)"),
            ("grid-column", "span 3"),
            ("width", "100px"),
            ("position", "absolute"),
            ("order", "-5"),
            ("color", "red"),
        ];
        for (property, value) in cases {
            assert!(
                explain_value(property, value).contains(value),
                "{property}: {value}"
            );
        }
    }

    /// Repeated calls with identical arguments return identical strings.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_idempotence() {
        let first = explain_value("align-items", "baseline");
        let second = explain_value("align-items", "baseline");
        assert_eq!(first, second);
    }

    /// Unknown properties pass values through untouched.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_unknown_property_passthrough() {
        assert_eq!(explain_value("background-color", "#fff"), "#fff");
        assert_eq!(explain_value("font-family", "serif"), "serif");
    }
}
