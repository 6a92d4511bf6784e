//! Property name classification.
//!
//! CSS property names are classified into explanation categories by substring
//! tests in a fixed priority order. The order is load-bearing because the
//! names overlap: `overflow` contains `flow`, `flex-direction` properties
//! would otherwise match the alignment keywords, and so on. Classification
//! happens exactly once per property; the explanation functions dispatch on
//! the resulting category instead of re-testing the name.

/// Alignment context flags derived from the property name.
///
/// `justify-content`, `align-items`, `place-self` and friends share one value
/// vocabulary but phrase their explanations by axis and by whether the
/// property targets the whole content, all items, or a single item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignmentContext {
    /// The name contains `justify` (main axis)
    pub justify: bool,
    /// The name contains `align` (cross axis)
    pub align: bool,
    /// The name contains `content` (content-level alignment)
    pub content: bool,
    /// The name contains `self` (single-item alignment)
    pub self_level: bool,
    /// The name contains `items` (all-items alignment)
    pub items: bool,
}

/// Explanation category of a CSS property name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyCategory {
    /// `display` and variants
    Display,
    /// `overflow`, `overflow-x`, `overflow-y`
    Overflow,
    /// `grid-auto-flow` or `flex-direction`; `flex` distinguishes the two
    Flow {
        /// Whether the property denotes a flex context
        flex: bool,
    },
    /// The `justify-*`/`align-*`/`place-*` family
    Alignment(AlignmentContext),
    /// `grid-template-columns`/`-rows`/`-areas`
    Template,
    /// `grid-column`/`grid-row`/`grid-area` placement
    Placement,
    /// Widths, heights, gaps and auto track sizes
    Sizing,
    /// `position`
    Position,
    /// `order`
    Order,
    /// Anything else; values pass through unexplained
    Other,
}

/// Classify a property name into its explanation category.
///
/// The name is lower-cased and trimmed first, so `" Display "` classifies the
/// same as `"display"`.
pub fn classify_property(property: &str) -> PropertyCategory {
    let name = property.to_lowercase();
    let name = name.trim();

    if name.contains("display") {
        return PropertyCategory::Display;
    }
    // Before the flow test, since "overflow" contains "flow".
    if name.contains("overflow") {
        return PropertyCategory::Overflow;
    }
    if name.contains("flow") || name.contains("flex-direction") {
        return PropertyCategory::Flow {
            flex: name.contains("flex"),
        };
    }
    if name.contains("justify") || name.contains("align") || name.contains("place") {
        return PropertyCategory::Alignment(AlignmentContext {
            justify: name.contains("justify"),
            align: name.contains("align"),
            content: name.contains("content"),
            self_level: name.contains("self"),
            items: name.contains("items"),
        });
    }
    if name.contains("template") {
        return PropertyCategory::Template;
    }
    if name.contains("grid-column") || name.contains("grid-row") || name.contains("grid-area") {
        return PropertyCategory::Placement;
    }
    if name.contains("width")
        || name.contains("height")
        || name.contains("gap")
        || name.contains("auto-rows")
        || name.contains("auto-columns")
    {
        return PropertyCategory::Sizing;
    }
    if name.contains("position") {
        return PropertyCategory::Position;
    }
    if name.contains("order") {
        return PropertyCategory::Order;
    }
    PropertyCategory::Other
}
