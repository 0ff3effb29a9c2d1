//! Parse attribute strings into numbers using the pest grammar
//!
//! Lenient helpers never fail: whatever the grammar rejects becomes NaN,
//! the same outcome as handing the string to a JavaScript `Number(...)`.
//! The strict helpers report the offending token instead.

use pest::Parser;
use pest::iterators::Pair;

use crate::errors::{AttributeSource, ConvertError};
use crate::{AttrParser, Rule};

/// A coordinate token of a `points` list with its byte range in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub value: f64,
    pub start: usize,
    pub end: usize,
}

/// Convert one attribute value to a number; unparsable input yields NaN.
pub fn number(text: &str) -> f64 {
    try_number(text).unwrap_or(f64::NAN)
}

/// Convert one attribute value to a number, `None` if it is not one.
///
/// Surrounding whitespace is ignored and blank input is zero.
pub fn try_number(text: &str) -> Option<f64> {
    let mut pairs = AttrParser::parse(Rule::number, js_trim(text)).ok()?;
    let literal = pairs
        .next()?
        .into_inner()
        .find(|pair| pair.as_rule() != Rule::EOI);
    Some(match literal {
        None => 0.0,
        Some(pair) => literal_value(pair),
    })
}

/// Convert an attribute value, reporting a diagnostic when it is not a number
pub fn strict_number(source: &AttributeSource) -> Result<f64, ConvertError> {
    try_number(&source.value).ok_or_else(|| {
        let lead = leading_space(&source.value);
        let len = js_trim(&source.value).len();
        crate::log::warn!(
            element = %source.element,
            attribute = %source.attribute,
            value = %source.value,
            "rejected non-numeric attribute"
        );
        ConvertError::invalid_number(source, (lead, len).into())
    })
}

/// Whitespace as JavaScript's `trim()` and `\s` see it
fn is_js_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn js_trim(text: &str) -> &str {
    text.trim_matches(is_js_space)
}

fn leading_space(text: &str) -> usize {
    text.len() - text.trim_start_matches(is_js_space).len()
}

fn literal_value(pair: Pair<'_, Rule>) -> f64 {
    let text = pair.as_str();
    match pair.as_rule() {
        Rule::hex_int => radix_value(&text[2..], 16),
        Rule::oct_int => radix_value(&text[2..], 8),
        Rule::bin_int => radix_value(&text[2..], 2),
        Rule::infinity => {
            if text.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        }
        // The grammar only admits literals Rust's float parser accepts
        _ => text.parse().unwrap_or(f64::NAN),
    }
}

fn radix_value(digits: &str, radix: u32) -> f64 {
    digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    })
}

/// Split a `points` list into coordinate tokens.
///
/// The list is trimmed, then commas and whitespace separate with runs
/// collapsing. A separator left at either end delimits an empty token and a
/// blank list is one empty token; empty tokens read as zero.
pub fn coordinates(text: &str) -> Result<Vec<Coordinate>, ConvertError> {
    let lead = leading_space(text);
    let pairs = AttrParser::parse(Rule::points, js_trim(text)).map_err(|e| ConvertError::Syntax {
        message: e.to_string(),
    })?;

    let coords: Vec<Coordinate> = pairs
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::coordinate)
        .map(|pair| {
            let span = pair.as_span();
            Coordinate {
                value: number(pair.as_str()),
                start: lead + span.start(),
                end: lead + span.end(),
            }
        })
        .collect();

    crate::log::trace!(count = coords.len(), "split points list");
    Ok(coords)
}

/// Lenient points list: non-numeric tokens become NaN
pub fn point_list(text: &str) -> Result<Vec<f64>, ConvertError> {
    Ok(coordinates(text)?.into_iter().map(|c| c.value).collect())
}

/// Strict points list: every token must be a number and they must pair up
pub fn strict_point_list(source: &AttributeSource) -> Result<Vec<f64>, ConvertError> {
    let coords = coordinates(&source.value)?;

    for coord in &coords {
        if coord.value.is_nan() {
            return Err(ConvertError::invalid_number(
                source,
                (coord.start, coord.end - coord.start).into(),
            ));
        }
    }

    if coords.len() % 2 != 0 {
        let last = &coords[coords.len() - 1];
        return Err(ConvertError::odd_coordinates(
            source,
            coords.len(),
            (last.start, last.end - last.start).into(),
        ));
    }

    Ok(coords.into_iter().map(|c| c.value).collect())
}
