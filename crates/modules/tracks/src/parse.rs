//! Free-text track list parsing using cssparser.
//!
//! Spec: CSS Grid Layout Module Level 2 §7.2 Explicit Track Sizing
//! <https://www.w3.org/TR/css-grid-2/#track-sizing>
//!
//! Every public function here is total: input typed into a form mid-edit must
//! never surface an error, so unrecognized text degrades to a best-effort
//! value (`auto` for an unreadable track token, count `1` for an unreadable
//! repeat count) and only empty input maps to `None`. The function-structured
//! forms (`minmax()`, `repeat()`, quoted area rows) go through the cssparser
//! tokenizer; single track tokens keep a minimal suffix-based parse so that
//! numeric values round-trip exactly.

use crate::types::{
    AreaGrid, AutoRepeat, RepeatCount, TrackRange, TrackRepeat, TrackSize, TrackTemplate,
    TrackUnit, TrackValue,
};
use cssparser::{Delimiter, ParseError, Parser, ParserInput, Token};

/// Parse a single track size token (`1fr`, `100px`, `auto`, ...).
///
/// Resolution order: exact keyword match, then a number with a known unit
/// suffix, then a lenient recovery path for the common `fr`/`px`/`%` suffixes
/// that salvages a leading number (or records its absence), and finally a
/// silent fallback to `auto` for anything else. The fallback is a recovery
/// policy, not an error.
pub fn parse_track_size(token: &str) -> TrackSize {
    let trimmed = token.trim();
    match trimmed {
        "auto" => return TrackSize::keyword(TrackUnit::Auto),
        "min-content" => return TrackSize::keyword(TrackUnit::MinContent),
        "max-content" => return TrackSize::keyword(TrackUnit::MaxContent),
        _ => {}
    }

    if let Some(size) = parse_dimension(trimmed) {
        return size;
    }

    // Lenient recovery: keep the unit, salvage whatever number leads the token.
    for (suffix, unit) in [
        ("fr", TrackUnit::Fr),
        ("px", TrackUnit::Px),
        ("%", TrackUnit::Percent),
    ] {
        if trimmed.ends_with(suffix) {
            let value = parse_float_prefix(trimmed);
            tracing::debug!("lenient track size recovery for {trimmed:?} as {suffix}");
            return TrackSize { value, unit };
        }
    }

    tracing::debug!("unrecognized track size {trimmed:?}, defaulting to auto");
    TrackSize::keyword(TrackUnit::Auto)
}

/// Parse a track value: a `minmax()` range or a single track size.
pub fn parse_track_value(text: &str) -> TrackValue {
    let trimmed = text.trim();
    if let Some(range) = parse_minmax(trimmed) {
        return TrackValue::Range(range);
    }
    TrackValue::Size(parse_track_size(trimmed))
}

/// Parse a CSS track-list string into a track template.
///
/// Returns `None` for empty or whitespace-only input. A top-level `repeat()`
/// form is parsed into the repeat pattern; anything else is whitespace-split
/// and parsed token by token.
pub fn parse_track_template(text: &str) -> Option<TrackTemplate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(repeat) = parse_repeat(trimmed) {
        return Some(TrackTemplate::from_repeat(repeat));
    }

    let values = trimmed.split_whitespace().map(parse_track_value).collect();
    Some(TrackTemplate::from_values(values))
}

/// Parse a `grid-template-areas` value string into a named-area grid.
///
/// Returns `None` for empty input. Each double-quoted run becomes one row,
/// split on whitespace. Input with no quoted runs at all degrades to a single
/// row split on whitespace (lenient recovery, not an error).
pub fn parse_area_grid(text: &str) -> Option<AreaGrid> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut parser_input = ParserInput::new(trimmed);
    let mut parser = Parser::new(&mut parser_input);
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        if let Token::QuotedString(contents) = token {
            let row: Vec<String> = contents.split_whitespace().map(str::to_owned).collect();
            if !row.is_empty() {
                rows.push(row);
            }
        }
    }

    if rows.is_empty() {
        tracing::debug!("no quoted area rows in {trimmed:?}, treating as a single row");
        rows.push(trimmed.split_whitespace().map(str::to_owned).collect());
    }

    Some(AreaGrid { areas: rows })
}

/// Strict number-with-unit parse: a non-negative decimal immediately followed
/// by one of the known numeric unit suffixes, nothing else.
fn parse_dimension(text: &str) -> Option<TrackSize> {
    const UNITS: [(&str, TrackUnit); 7] = [
        ("fr", TrackUnit::Fr),
        ("px", TrackUnit::Px),
        ("%", TrackUnit::Percent),
        ("em", TrackUnit::Em),
        ("rem", TrackUnit::Rem),
        ("vh", TrackUnit::Vh),
        ("vw", TrackUnit::Vw),
    ];
    for (suffix, unit) in UNITS {
        if let Some(number) = text.strip_suffix(suffix) {
            if !number.is_empty()
                && number
                    .chars()
                    .all(|character| character.is_ascii_digit() || character == '.')
            {
                return Some(TrackSize {
                    value: parse_float_prefix(number),
                    unit,
                });
            }
        }
    }
    None
}

/// Parse a `minmax(min, max)` function via the tokenizer, delegating each raw
/// argument back to the lenient track size parse. `None` when the text is not
/// a well-formed function call.
fn parse_minmax(text: &str) -> Option<TrackRange> {
    let mut parser_input = ParserInput::new(text);
    let mut parser = Parser::new(&mut parser_input);
    parser.expect_function_matching("minmax").ok()?;
    let range = parser.parse_nested_block(parse_minmax_args).ok()?;
    parser.is_exhausted().then_some(range)
}

/// Parse the argument list of `minmax()`.
///
/// # Errors
/// Returns an error when either argument is missing.
fn parse_minmax_args<'input>(
    block: &mut Parser<'input, '_>,
) -> Result<TrackRange, ParseError<'input, ()>> {
    let min_raw = raw_until_comma(block)?;
    block.expect_comma()?;
    let max_raw = raw_remaining(block);
    if min_raw.trim().is_empty() || max_raw.trim().is_empty() {
        return Err(block.new_custom_error(()));
    }
    Ok(TrackRange::new(
        parse_track_size(&min_raw),
        parse_track_size(&max_raw),
    ))
}

/// Parse a `repeat(count, value)` function. `None` when the text is not a
/// well-formed function call, in which case the caller falls back to
/// whitespace splitting.
fn parse_repeat(text: &str) -> Option<TrackRepeat> {
    let mut parser_input = ParserInput::new(text);
    let mut parser = Parser::new(&mut parser_input);
    parser.expect_function_matching("repeat").ok()?;
    let repeat = parser.parse_nested_block(parse_repeat_args).ok()?;
    parser.is_exhausted().then_some(repeat)
}

/// Parse the argument list of `repeat()`.
///
/// # Errors
/// Returns an error when either argument is missing.
fn parse_repeat_args<'input>(
    block: &mut Parser<'input, '_>,
) -> Result<TrackRepeat, ParseError<'input, ()>> {
    let count_raw = raw_until_comma(block)?;
    block.expect_comma()?;
    let value_raw = raw_remaining(block);
    if count_raw.trim().is_empty() || value_raw.trim().is_empty() {
        return Err(block.new_custom_error(()));
    }
    Ok(TrackRepeat {
        count: parse_repeat_count(count_raw.trim()),
        value: parse_track_value(&value_raw),
    })
}

/// Parse a repeat count: the auto keywords pass through, anything else is a
/// lenient integer parse with an unreadable count degrading to `1`.
fn parse_repeat_count(text: &str) -> RepeatCount {
    match text {
        "auto-fit" => RepeatCount::Auto(AutoRepeat::AutoFit),
        "auto-fill" => RepeatCount::Auto(AutoRepeat::AutoFill),
        _ => {
            let count = parse_int_prefix(text).unwrap_or_else(|| {
                tracing::debug!("unreadable repeat count {text:?}, defaulting to 1");
                1
            });
            RepeatCount::Fixed(count)
        }
    }
}

/// Capture the raw text before the next top-level comma.
///
/// # Errors
/// Propagates tokenizer errors from the delimited region.
fn raw_until_comma<'input>(
    block: &mut Parser<'input, '_>,
) -> Result<String, ParseError<'input, ()>> {
    block.parse_until_before(Delimiter::Comma, |argument| {
        let start = argument.position();
        while argument.next_including_whitespace_and_comments().is_ok() {}
        Ok::<String, ParseError<'input, ()>>(argument.slice_from(start).to_owned())
    })
}

/// Capture the raw text of everything left in the block.
fn raw_remaining<'input>(block: &mut Parser<'input, '_>) -> String {
    let start = block.position();
    while block.next_including_whitespace_and_comments().is_ok() {}
    block.slice_from(start).to_owned()
}

/// Leading decimal number of a string, in the lenient style of a form field:
/// optional sign, digits with at most one dot, optional exponent. `None` when
/// no digits lead the text.
fn parse_float_prefix(text: &str) -> Option<f32> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    // Optional exponent part, only when digits follow it.
    if let Some(after_exponent) = exponent_end(bytes, end) {
        end = after_exponent;
    }
    trimmed.get(..end).and_then(|prefix| prefix.parse::<f32>().ok())
}

/// End index of a valid exponent suffix starting at `start`, if any.
fn exponent_end(bytes: &[u8], start: usize) -> Option<usize> {
    if !matches!(bytes.get(start), Some(b'e' | b'E')) {
        return None;
    }
    let mut cursor = start + 1;
    if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
        cursor += 1;
    }
    let digits_start = cursor;
    while matches!(bytes.get(cursor), Some(b'0'..=b'9')) {
        cursor += 1;
    }
    (cursor > digits_start).then_some(cursor)
}

/// Leading integer of a string: optional sign plus a digit run. `None` when
/// no digits lead the text.
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
