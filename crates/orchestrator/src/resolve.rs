//! Shorthand over longhand precedence resolution.
//!
//! Spec: CSS Grid Layout Module Level 2 §8.4 Placement Shorthands
//! <https://www.w3.org/TR/css-grid-2/#placement-shorthands>
//!
//! The placement ladder (`grid-area` over `grid-column`/`grid-row` over the
//! start/end longhands) and the gap ladder (`gap` over `column-gap`/`row-gap`
//! over the legacy `grid-*-gap` aliases) are each resolved here exactly once.
//! The prose and CSS builders both consume these results, so the two outputs
//! cannot drift apart.

use crate::config::{ChildConfig, ContainerConfig};

/// A placement property surviving precedence resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementProperty {
    /// `grid-area`
    GridArea,
    /// `grid-column`
    GridColumn,
    /// `grid-column-start`
    GridColumnStart,
    /// `grid-column-end`
    GridColumnEnd,
    /// `grid-row`
    GridRow,
    /// `grid-row-start`
    GridRowStart,
    /// `grid-row-end`
    GridRowEnd,
}

impl PlacementProperty {
    /// CSS property name.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::GridArea => "grid-area",
            Self::GridColumn => "grid-column",
            Self::GridColumnStart => "grid-column-start",
            Self::GridColumnEnd => "grid-column-end",
            Self::GridRow => "grid-row",
            Self::GridRowStart => "grid-row-start",
            Self::GridRowEnd => "grid-row-end",
        }
    }
}

/// Resolve a child's placement fields into the effective property list.
///
/// `grid_area` suppresses everything else. Otherwise each axis resolves
/// independently: the axis shorthand suppresses its start/end longhands.
/// Output order is column fields before row fields, start before end.
pub fn resolve_placement(config: &ChildConfig) -> Vec<(PlacementProperty, &str)> {
    if let Some(area) = config.grid_area.as_deref() {
        if config.grid_column.is_some() || config.grid_row.is_some() {
            log::debug!("grid-area set, ignoring grid-column/grid-row");
        }
        return vec![(PlacementProperty::GridArea, area)];
    }

    let mut placements = Vec::new();
    if let Some(column) = config.grid_column.as_deref() {
        placements.push((PlacementProperty::GridColumn, column));
    } else {
        if let Some(start) = config.grid_column_start.as_deref() {
            placements.push((PlacementProperty::GridColumnStart, start));
        }
        if let Some(end) = config.grid_column_end.as_deref() {
            placements.push((PlacementProperty::GridColumnEnd, end));
        }
    }
    if let Some(row) = config.grid_row.as_deref() {
        placements.push((PlacementProperty::GridRow, row));
    } else {
        if let Some(start) = config.grid_row_start.as_deref() {
            placements.push((PlacementProperty::GridRowStart, start));
        }
        if let Some(end) = config.grid_row_end.as_deref() {
            placements.push((PlacementProperty::GridRowEnd, end));
        }
    }
    placements
}

/// Effective gap values after precedence resolution.
///
/// At most one of `gap` or the per-axis pair is populated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GapResolution<'config> {
    /// The `gap` shorthand, suppressing the per-axis fields
    pub gap: Option<&'config str>,
    /// Effective column gap (modern field or legacy alias)
    pub column_gap: Option<&'config str>,
    /// Effective row gap (modern field or legacy alias)
    pub row_gap: Option<&'config str>,
}

/// Resolve a container's gap fields.
///
/// `gap` wins outright. Per axis, `column_gap`/`row_gap` win over the legacy
/// `grid_column_gap`/`grid_row_gap` aliases.
pub fn resolve_gaps(config: &ContainerConfig) -> GapResolution<'_> {
    if let Some(gap) = config.gap.as_deref() {
        return GapResolution {
            gap: Some(gap),
            column_gap: None,
            row_gap: None,
        };
    }

    let column_gap = config.column_gap.as_deref().or_else(|| {
        let legacy = config.grid_column_gap.as_deref();
        if legacy.is_some() {
            log::debug!("using legacy grid-column-gap alias");
        }
        legacy
    });
    let row_gap = config.row_gap.as_deref().or_else(|| {
        let legacy = config.grid_row_gap.as_deref();
        if legacy.is_some() {
            log::debug!("using legacy grid-row-gap alias");
        }
        legacy
    });
    GapResolution {
        gap: None,
        column_gap,
        row_gap,
    }
}
