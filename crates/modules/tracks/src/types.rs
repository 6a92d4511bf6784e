//! Grid track value model.
//!
//! Spec: CSS Grid Layout Module Level 2 §7.2.1 Track Sizing Functions
//! <https://www.w3.org/TR/css-grid-2/#track-sizing>

use serde::{Deserialize, Serialize};

/// CSS unit for a grid track size.
///
/// The serde names are the CSS unit texts, so configuration objects coming
/// from an external producer use `"fr"`, `"%"`, `"min-content"` and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackUnit {
    /// Fractional unit, a share of the leftover space
    #[serde(rename = "fr")]
    Fr,
    /// Pixels
    #[serde(rename = "px")]
    Px,
    /// Percentage of the container size
    #[serde(rename = "%")]
    Percent,
    /// Relative to the element's font size
    #[serde(rename = "em")]
    Em,
    /// Relative to the root font size
    #[serde(rename = "rem")]
    Rem,
    /// Percentage of the viewport height
    #[serde(rename = "vh")]
    Vh,
    /// Percentage of the viewport width
    #[serde(rename = "vw")]
    Vw,
    /// Automatic sizing
    #[serde(rename = "auto")]
    Auto,
    /// Minimum content size
    #[serde(rename = "min-content")]
    MinContent,
    /// Maximum content size
    #[serde(rename = "max-content")]
    MaxContent,
}

impl TrackUnit {
    /// CSS text for this unit.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::Px => "px",
            Self::Percent => "%",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Vh => "vh",
            Self::Vw => "vw",
            Self::Auto => "auto",
            Self::MinContent => "min-content",
            Self::MaxContent => "max-content",
        }
    }

    /// Keyword units stand alone, without a numeric value.
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::Auto | Self::MinContent | Self::MaxContent)
    }
}

/// A single grid track size.
///
/// `value` is present for the numeric units and absent for the keyword units
/// (`auto`, `min-content`, `max-content`). This is an immutable value type,
/// built fresh on each parse and never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackSize {
    /// Numeric value; absent for keyword units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    /// CSS unit for the track size
    pub unit: TrackUnit,
}

impl TrackSize {
    /// Create a track size with a numeric value.
    pub const fn new(value: f32, unit: TrackUnit) -> Self {
        Self {
            value: Some(value),
            unit,
        }
    }

    /// Create a keyword track size (`auto`, `min-content`, `max-content`).
    pub const fn keyword(unit: TrackUnit) -> Self {
        Self { value: None, unit }
    }
}

/// A `minmax()` track sizing function.
///
/// Spec: §7.2.1 `minmax(min, max)`
///
/// Both bounds are independent track sizes. No numeric ordering is enforced
/// between them; that is CSS's concern, not this model's.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackRange {
    /// Minimum size constraint
    pub min: TrackSize,
    /// Maximum size constraint
    pub max: TrackSize,
}

impl TrackRange {
    /// Create a range from its bounds.
    pub const fn new(min: TrackSize, max: TrackSize) -> Self {
        Self { min, max }
    }
}

/// A single track value: either a simple size or a `minmax()` range.
///
/// The union is untagged and discriminated structurally: a JSON object with
/// `min` and `max` keys is a range, anything else is a simple size. `Range`
/// is listed first so that discrimination order holds during deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackValue {
    /// A `minmax()` range
    Range(TrackRange),
    /// A simple track size
    Size(TrackSize),
}

/// The automatic repetition keywords of `repeat()`.
///
/// Spec: §7.2.3.2 Repeat-to-fill
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoRepeat {
    /// `auto-fit`: fill the axis, collapsing empty tracks
    #[serde(rename = "auto-fit")]
    AutoFit,
    /// `auto-fill`: fill the axis, keeping empty tracks
    #[serde(rename = "auto-fill")]
    AutoFill,
}

impl AutoRepeat {
    /// CSS keyword for this repetition mode.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::AutoFit => "auto-fit",
            Self::AutoFill => "auto-fill",
        }
    }
}

/// Repetition count of a `repeat()` function: a literal number or one of the
/// `auto-fit`/`auto-fill` keywords. Untagged on the wire (`3` or `"auto-fit"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepeatCount {
    /// A fixed number of repetitions
    Fixed(i32),
    /// An automatic repetition keyword
    Auto(AutoRepeat),
}

/// A `repeat()` track pattern.
///
/// Spec: §7.2.3 Repeating Rows and Columns
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackRepeat {
    /// Repetition count
    pub count: RepeatCount,
    /// The repeated track value
    pub value: TrackValue,
}

/// An ordered track list for one grid axis (`grid-template-columns` or
/// `grid-template-rows`).
///
/// When `repeat` is set it takes precedence over `values`; consumers always
/// check `repeat` first. A template with neither serializes to nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackTemplate {
    /// Explicit track values in axis order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<TrackValue>,
    /// Optional `repeat()` pattern; wins over `values` when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<TrackRepeat>,
}

impl TrackTemplate {
    /// Create a template from explicit track values.
    pub const fn from_values(values: Vec<TrackValue>) -> Self {
        Self {
            values,
            repeat: None,
        }
    }

    /// Create a template from a `repeat()` pattern.
    pub const fn from_repeat(repeat: TrackRepeat) -> Self {
        Self {
            values: Vec::new(),
            repeat: Some(repeat),
        }
    }
}

/// Named grid areas as a row-major matrix of area-name tokens.
///
/// Spec: §7.3 Named Areas: the `grid-template-areas` property
///
/// Each inner vector is one grid row; entries are named-area identifiers or
/// the `.` placeholder. Rectangularity is not enforced here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaGrid {
    /// Rows of area-name tokens
    pub areas: Vec<Vec<String>>,
}

impl AreaGrid {
    /// Whether the grid defines no areas at all.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
