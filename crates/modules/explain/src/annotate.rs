//! Per-category value annotation.
//!
//! Each function receives the lower-cased, trimmed value alongside the
//! original text and returns either the original text unchanged or the
//! original text followed by one parenthesized clause. The original value is
//! always preserved verbatim as a prefix of the result.

use crate::classify::AlignmentContext;

/// `display` keyword descriptions.
pub fn display(normalized: &str, original: &str) -> String {
    match normalized {
        "grid" => format!(
            "{original} (creates a grid container where items are placed in a defined grid structure)"
        ),
        "inline-grid" => format!(
            "{original} (creates an inline-level grid container, behaving like an inline element while containing a grid)"
        ),
        "subgrid" => format!(
            "{original} (creates a grid container that inherits the grid tracks from its parent grid)"
        ),
        "flex" => format!("{original} (creates a flex container where items can flex and wrap)"),
        "inline-flex" => format!("{original} (creates an inline-level flex container)"),
        _ => original.to_owned(),
    }
}

/// `overflow` keyword descriptions.
pub fn overflow(normalized: &str, original: &str) -> String {
    match normalized {
        "visible" => format!("{original} (content overflows and is visible outside the container)"),
        "hidden" => format!("{original} (content that overflows is clipped and hidden)"),
        "scroll" => format!(
            "{original} (scrollbars are always shown, allowing scrolling even if content fits)"
        ),
        "auto" => format!("{original} (scrollbars appear only when content overflows)"),
        _ => original.to_owned(),
    }
}

/// Flow direction descriptions for `flex-direction` and `grid-auto-flow`.
///
/// In the grid context, any value containing `dense` is read as a direction
/// plus the dense packing algorithm: the word `dense` is stripped and the
/// remainder picks the direction phrase, defaulting to row when nothing is
/// left.
pub fn flow(normalized: &str, original: &str, flex: bool) -> String {
    if flex {
        return match normalized {
            "row" => format!("{original} (items are laid out horizontally from left to right)"),
            "row-reverse" => {
                format!("{original} (items are laid out horizontally from right to left)")
            }
            "column" => format!("{original} (items are laid out vertically from top to bottom)"),
            "column-reverse" => {
                format!("{original} (items are laid out vertically from bottom to top)")
            }
            _ => original.to_owned(),
        };
    }

    if normalized.contains("dense") {
        let direction = normalized.replace("dense", "");
        let direction = direction.trim();
        let direction_text = if direction == "column" {
            "vertically (column by column)"
        } else {
            "horizontally (row by row)"
        };
        return format!(
            "{original} (items are placed {direction_text}, and the dense algorithm fills gaps by looking back for available spaces)"
        );
    }
    match normalized {
        "row" => format!(
            "{original} (items are placed horizontally, filling each row before moving to the next)"
        ),
        "column" => format!(
            "{original} (items are placed vertically, filling each column before moving to the next)"
        ),
        _ => original.to_owned(),
    }
}

/// Alignment keyword descriptions, phrased by axis and target level.
pub fn alignment(normalized: &str, original: &str, context: AlignmentContext) -> String {
    match normalized {
        "start" => {
            if context.justify {
                return if context.content {
                    format!(
                        "{original} (aligns content to the start of the main axis - typically the left or top)"
                    )
                } else {
                    format!(
                        "{original} (aligns the item to the start of its grid area - typically the left)"
                    )
                };
            }
            if context.align {
                return if context.content {
                    format!(
                        "{original} (aligns content to the start of the cross axis - typically the top)"
                    )
                } else {
                    format!(
                        "{original} (aligns the item to the start of its grid area - typically the top)"
                    )
                };
            }
            format!("{original} (aligns to the start of the axis)")
        }
        "end" => {
            if context.justify {
                return if context.content {
                    format!(
                        "{original} (aligns content to the end of the main axis - typically the right or bottom)"
                    )
                } else {
                    format!(
                        "{original} (aligns the item to the end of its grid area - typically the right)"
                    )
                };
            }
            if context.align {
                return if context.content {
                    format!(
                        "{original} (aligns content to the end of the cross axis - typically the bottom)"
                    )
                } else {
                    format!(
                        "{original} (aligns the item to the end of its grid area - typically the bottom)"
                    )
                };
            }
            format!("{original} (aligns to the end of the axis)")
        }
        "center" => format!("{original} (centers the item or content within its area)"),
        "stretch" => {
            if context.self_level || context.items {
                return format!("{original} (the item stretches to fill its grid area)");
            }
            if context.content {
                return format!("{original} (content stretches to fill the container)");
            }
            format!("{original} (stretches to fill available space)")
        }
        "baseline" => format!(
            "{original} (aligns items along their baseline - useful for text alignment)"
        ),
        "space-around" => format!(
            "{original} (distributes space evenly around items, with half-size spaces at the edges)"
        ),
        "space-between" => format!(
            "{original} (distributes space evenly between items, with no space at the edges)"
        ),
        "space-evenly" => {
            format!("{original} (distributes space evenly between items and around edges)")
        }
        "auto" => {
            if context.self_level {
                format!(
                    "{original} (the item uses the alignment from justify-items or align-items on the container)"
                )
            } else {
                format!("{original} (uses default alignment behavior)")
            }
        }
        "flex-start" => format!("{original} (aligns items to the start of the flex container)"),
        "flex-end" => format!("{original} (aligns items to the end of the flex container)"),
        _ => original.to_owned(),
    }
}

/// Grid template value descriptions, by value shape.
pub fn template(normalized: &str, original: &str) -> String {
    if normalized.contains("repeat") {
        return format!("{original} (repeat() function - repeats a pattern of track sizes)");
    }
    if normalized.contains("minmax") {
        return format!(
            "{original} (minmax() function - defines a size range with minimum and maximum values)"
        );
    }
    if is_quoted_area_list(normalized) {
        return format!("{original} (named grid areas - defines named regions in the grid)");
    }
    if normalized.contains("fr") {
        return format!(
            "{original} (fractional unit - distributes available space proportionally)"
        );
    }
    if normalized.contains("auto") {
        return format!("{original} (takes up available space based on content)");
    }
    if is_pixel_value(normalized) {
        return format!("{original} (fixed pixel size)");
    }
    if is_percent_value(normalized) {
        return format!("{original} (percentage of container size)");
    }
    original.to_owned()
}

/// Grid placement value descriptions, by value shape.
pub fn placement(normalized: &str, original: &str) -> String {
    if normalized.contains('/') {
        return format!(
            "{original} (grid line syntax - uses forward slash to separate start and end lines)"
        );
    }
    if normalized.contains("span") {
        return format!("{original} (span keyword - spans across a specified number of tracks)");
    }
    if is_signed_integer(normalized) {
        return format!("{original} (grid line number - references a specific line in the grid)");
    }
    if is_identifier(normalized) {
        return format!("{original} (named grid area - places item in a named area)");
    }
    original.to_owned()
}

/// Length and track size descriptions, one fixed clause per unit family.
pub fn sizing(normalized: &str, original: &str) -> String {
    if normalized.contains("minmax") {
        return format!(
            "{original} (minmax() function - defines minimum and maximum size constraints)"
        );
    }
    if normalized.contains("min-content") {
        return format!("{original} (smallest size that fits the content)");
    }
    if normalized.contains("max-content") {
        return format!("{original} (smallest size that fits all content without wrapping)");
    }
    if normalized.contains("fr") {
        return format!("{original} (fractional unit - takes a fraction of available space)");
    }
    if normalized.contains("auto") {
        return format!("{original} (size based on content or available space)");
    }
    if is_pixel_value(normalized) {
        return format!("{original} (fixed pixel size)");
    }
    if is_percent_value(normalized) {
        return format!("{original} (percentage of parent size)");
    }
    // rem before em, since "rem" contains "em".
    if normalized.contains("rem") {
        return format!("{original} (root em unit - relative to root font size)");
    }
    if normalized.contains("em") {
        return format!("{original} (em unit - relative to element's font size)");
    }
    if normalized.contains("vh") {
        return format!("{original} (viewport height unit - percentage of viewport height)");
    }
    if normalized.contains("vw") {
        return format!("{original} (viewport width unit - percentage of viewport width)");
    }
    original.to_owned()
}

/// `position` keyword descriptions.
pub fn position(normalized: &str, original: &str) -> String {
    match normalized {
        "static" => format!("{original} (default position, follows normal document flow)"),
        "relative" => format!(
            "{original} (positioned relative to its normal position, can use top/right/bottom/left)"
        ),
        "absolute" => format!(
            "{original} (positioned relative to nearest positioned ancestor, removed from normal flow)"
        ),
        "fixed" => format!(
            "{original} (positioned relative to viewport, stays in place when scrolling)"
        ),
        "sticky" => format!(
            "{original} (switches between relative and fixed based on scroll position)"
        ),
        _ => original.to_owned(),
    }
}

/// `order` value descriptions, by sign. Non-numeric text passes through.
pub fn order(normalized: &str, original: &str) -> String {
    let Some(number) = parse_int_prefix(normalized) else {
        return original.to_owned();
    };
    if number == 0 {
        return format!("{original} (default order, appears in document order)");
    }
    if number > 0 {
        return format!(
            "{original} (appears later in visual order, after items with lower or default order)"
        );
    }
    format!(
        "{original} (appears earlier in visual order, before items with higher or default order)"
    )
}

/// Whether the value is a fully double-quoted area list: starts and ends with
/// a quote, with only letters, whitespace, hyphens and quotes inside.
fn is_quoted_area_list(value: &str) -> bool {
    value.len() >= 3
        && value.starts_with('"')
        && value.ends_with('"')
        && value
            .chars()
            .all(|character| {
                character.is_ascii_alphabetic()
                    || character.is_whitespace()
                    || character == '-'
                    || character == '"'
            })
}

fn is_pixel_value(value: &str) -> bool {
    value
        .strip_suffix("px")
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()))
}

fn is_percent_value(value: &str) -> bool {
    value
        .strip_suffix('%')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()))
}

fn is_signed_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphabetic() || character == '-')
}

/// Leading integer of a string, leniently: optional sign plus a digit run,
/// trailing text ignored. `None` when no digits lead the text.
fn parse_int_prefix(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while matches!(bytes.get(end), Some(b'0'..=b'9')) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    trimmed.get(..end).and_then(|prefix| prefix.parse::<i32>().ok())
}
