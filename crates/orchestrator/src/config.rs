//! Container and child configuration models.
//!
//! Spec: CSS Grid Layout Module Level 2 <https://www.w3.org/TR/css-grid-2/>
//!
//! Both configurations are flat records of optional fields, built fresh by an
//! external producer on every edit and never mutated here. Closed keyword
//! sets are typed enums serializing as their CSS keyword text; free-form
//! lengths and shorthands stay strings; template fields use the structured
//! track model. On the wire the field names are camelCase and absent fields
//! are omitted.

use grid_tracks::{AreaGrid, TrackTemplate};
use serde::{Deserialize, Serialize};

/// `display` keywords valid on a grid container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerDisplay {
    /// Block-level grid container
    #[serde(rename = "grid")]
    Grid,
    /// Inline-level grid container
    #[serde(rename = "inline-grid")]
    InlineGrid,
    /// Grid container inheriting tracks from its parent grid
    #[serde(rename = "subgrid")]
    Subgrid,
}

impl ContainerDisplay {
    /// CSS keyword for this display mode.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::InlineGrid => "inline-grid",
            Self::Subgrid => "subgrid",
        }
    }
}

/// `display` keywords valid on a grid item hosting a nested layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildDisplay {
    /// Block-level box
    #[serde(rename = "block")]
    Block,
    /// Inline box
    #[serde(rename = "inline")]
    Inline,
    /// Flex container
    #[serde(rename = "flex")]
    Flex,
    /// Inline-level flex container
    #[serde(rename = "inline-flex")]
    InlineFlex,
    /// Nested grid container
    #[serde(rename = "grid")]
    Grid,
    /// Inline-level nested grid container
    #[serde(rename = "inline-grid")]
    InlineGrid,
}

impl ChildDisplay {
    /// CSS keyword for this display mode.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Inline => "inline",
            Self::Flex => "flex",
            Self::InlineFlex => "inline-flex",
            Self::Grid => "grid",
            Self::InlineGrid => "inline-grid",
        }
    }

    /// Whether this display establishes a flex formatting context.
    pub const fn is_flex(self) -> bool {
        matches!(self, Self::Flex | Self::InlineFlex)
    }
}

/// `grid-auto-flow` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridFlow {
    /// Fill each row in turn
    #[serde(rename = "row")]
    Row,
    /// Fill each column in turn
    #[serde(rename = "column")]
    Column,
    /// Dense packing, row direction implied
    #[serde(rename = "dense")]
    Dense,
    /// Row direction with dense packing
    #[serde(rename = "row dense")]
    RowDense,
    /// Column direction with dense packing
    #[serde(rename = "column dense")]
    ColumnDense,
}

impl GridFlow {
    /// CSS text for this flow mode.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::Dense => "dense",
            Self::RowDense => "row dense",
            Self::ColumnDense => "column dense",
        }
    }
}

/// `position` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Normal document flow
    #[serde(rename = "static")]
    Static,
    /// Offset from its normal position
    #[serde(rename = "relative")]
    Relative,
    /// Positioned against the nearest positioned ancestor
    #[serde(rename = "absolute")]
    Absolute,
    /// Positioned against the viewport
    #[serde(rename = "fixed")]
    Fixed,
    /// Relative until a scroll threshold, then fixed
    #[serde(rename = "sticky")]
    Sticky,
}

impl Position {
    /// CSS keyword for this position scheme.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }
}

/// `overflow` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overflow {
    /// Content spills outside the box
    #[serde(rename = "visible")]
    Visible,
    /// Overflowing content is clipped
    #[serde(rename = "hidden")]
    Hidden,
    /// Scrollbars always shown
    #[serde(rename = "scroll")]
    Scroll,
    /// Scrollbars only when needed
    #[serde(rename = "auto")]
    Auto,
}

impl Overflow {
    /// CSS keyword for this overflow mode.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Scroll => "scroll",
            Self::Auto => "auto",
        }
    }
}

/// `flex-direction` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlexDirection {
    /// Left to right
    #[serde(rename = "row")]
    Row,
    /// Right to left
    #[serde(rename = "row-reverse")]
    RowReverse,
    /// Top to bottom
    #[serde(rename = "column")]
    Column,
    /// Bottom to top
    #[serde(rename = "column-reverse")]
    ColumnReverse,
}

impl FlexDirection {
    /// CSS keyword for this direction.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
            Self::Column => "column",
            Self::ColumnReverse => "column-reverse",
        }
    }
}

/// `flex-wrap` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlexWrap {
    /// Single line
    #[serde(rename = "nowrap")]
    NoWrap,
    /// Wrap onto new lines
    #[serde(rename = "wrap")]
    Wrap,
    /// Wrap onto new lines in reverse order
    #[serde(rename = "wrap-reverse")]
    WrapReverse,
}

impl FlexWrap {
    /// CSS keyword for this wrap mode.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::NoWrap => "nowrap",
            Self::Wrap => "wrap",
            Self::WrapReverse => "wrap-reverse",
        }
    }
}

/// `text-align` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// Align to the left edge
    #[serde(rename = "left")]
    Left,
    /// Align to the right edge
    #[serde(rename = "right")]
    Right,
    /// Centered
    #[serde(rename = "center")]
    Center,
    /// Justified
    #[serde(rename = "justify")]
    Justify,
    /// Align to the inline start
    #[serde(rename = "start")]
    Start,
    /// Align to the inline end
    #[serde(rename = "end")]
    End,
}

impl TextAlign {
    /// CSS keyword for this text alignment.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justify => "justify",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Shared keyword vocabulary of the box alignment properties.
///
/// Spec: CSS Box Alignment Module Level 3
/// <https://www.w3.org/TR/css-align-3/>
///
/// One superset serves every alignment field; which keywords make sense on
/// which property is CSS's concern, not enforced here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignKeyword {
    /// Start of the axis
    #[serde(rename = "start")]
    Start,
    /// End of the axis
    #[serde(rename = "end")]
    End,
    /// Centered on the axis
    #[serde(rename = "center")]
    Center,
    /// Stretch to fill
    #[serde(rename = "stretch")]
    Stretch,
    /// Text baseline alignment
    #[serde(rename = "baseline")]
    Baseline,
    /// Even spacing around items
    #[serde(rename = "space-around")]
    SpaceAround,
    /// Even spacing between items
    #[serde(rename = "space-between")]
    SpaceBetween,
    /// Even spacing between and around items
    #[serde(rename = "space-evenly")]
    SpaceEvenly,
    /// Inherit from the container's item alignment
    #[serde(rename = "auto")]
    Auto,
    /// Start of the flex container
    #[serde(rename = "flex-start")]
    FlexStart,
    /// End of the flex container
    #[serde(rename = "flex-end")]
    FlexEnd,
}

impl AlignKeyword {
    /// CSS keyword for this alignment.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Stretch => "stretch",
            Self::Baseline => "baseline",
            Self::SpaceAround => "space-around",
            Self::SpaceBetween => "space-between",
            Self::SpaceEvenly => "space-evenly",
            Self::Auto => "auto",
            Self::FlexStart => "flex-start",
            Self::FlexEnd => "flex-end",
        }
    }
}

/// Grid container configuration.
///
/// All fields optional; an empty configuration is valid and produces an
/// empty declaration block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerConfig {
    /// Display mode establishing the grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<ContainerDisplay>,

    /// Column track template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_columns: Option<TrackTemplate>,
    /// Row track template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_rows: Option<TrackTemplate>,
    /// Named area rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_areas: Option<AreaGrid>,

    /// Legacy column gap alias (`grid-column-gap`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column_gap: Option<String>,
    /// Legacy row gap alias (`grid-row-gap`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row_gap: Option<String>,
    /// Gap shorthand, wins over all other gap fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    /// Column gap, wins over the legacy alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<String>,
    /// Row gap, wins over the legacy alias
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_gap: Option<String>,

    /// Auto-placement direction and packing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_auto_flow: Option<GridFlow>,
    /// Size of implicitly created columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_auto_columns: Option<String>,
    /// Size of implicitly created rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_auto_rows: Option<String>,

    /// Inline-axis alignment of all items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_items: Option<AlignKeyword>,
    /// Block-axis alignment of all items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignKeyword>,
    /// Inline-axis alignment of the grid as a whole
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<AlignKeyword>,
    /// Block-axis alignment of the grid as a whole
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_content: Option<AlignKeyword>,
    /// `place-items` shorthand, kept free-form (one or two keywords)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_items: Option<String>,
    /// `place-content` shorthand, kept free-form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_content: Option<String>,

    /// Container width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Container height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Minimum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<String>,
    /// Minimum height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    /// Maximum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    /// Maximum height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<String>,

    /// Padding shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    /// Margin shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    /// Border shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Positioning scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Top inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    /// Right inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    /// Bottom inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    /// Left inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,

    /// Overflow on both axes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    /// Horizontal overflow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_x: Option<Overflow>,
    /// Vertical overflow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_y: Option<Overflow>,
}

/// Grid item configuration.
///
/// All fields optional. Placement fields follow the shorthand precedence
/// ladder (`grid_area` over `grid_column`/`grid_row` over the start/end
/// longhands) resolved by [`crate::resolve_placement`]. For `order`,
/// `opacity` and `z_index` the value zero is meaningful and rendered; only
/// `None` is treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildConfig {
    /// Column start line longhand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column_start: Option<String>,
    /// Column end line longhand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column_end: Option<String>,
    /// Row start line longhand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row_start: Option<String>,
    /// Row end line longhand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row_end: Option<String>,

    /// Column placement shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<String>,
    /// Row placement shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row: Option<String>,
    /// Area placement shorthand, wins over everything else
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_area: Option<String>,

    /// Inline-axis self alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_self: Option<AlignKeyword>,
    /// Block-axis self alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<AlignKeyword>,
    /// `place-self` shorthand, kept free-form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_self: Option<String>,

    /// Visual order; zero is meaningful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    /// Item width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Item height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Minimum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<String>,
    /// Minimum height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    /// Maximum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    /// Maximum height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<String>,

    /// Padding shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    /// Margin shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    /// Border shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,

    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Opacity; zero is meaningful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,

    /// Positioning scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Top inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    /// Right inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    /// Bottom inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    /// Left inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Stacking order; zero is meaningful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,

    /// Overflow on both axes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    /// Horizontal overflow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_x: Option<Overflow>,
    /// Vertical overflow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_y: Option<Overflow>,

    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    /// Font weight, kept free-form (keyword or number)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Text alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    /// Display mode for a nested layout inside the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<ChildDisplay>,
    /// Main axis direction of a nested flex layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    /// Wrapping of a nested flex layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
    /// Main axis content alignment of a nested flex layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<AlignKeyword>,
    /// Cross axis item alignment of a nested flex layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignKeyword>,
}
