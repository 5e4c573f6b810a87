//! Low-level nom parser functions for CSS-like style values.
//!
//! This module provides composable parser functions for parsing style values
//! like lengths, dimensions, colors, and letter-case keywords, used by the
//! serde visitors in this crate and by markup-compiler collaborators.

use crate::dimension::{Dimension, Margins};
use crate::text::LetterCase;
use kumihan_types::Color;
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_while_m_n};
use nom::character::complete::{char, space0, space1};
use nom::combinator::{map, map_res, opt, recognize};
use nom::multi::separated_list1;
use nom::sequence::{delimited, pair, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn ws<'a, F, O>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(space0, inner, space0)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(
                    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                    opt(pair(
                        char('.'),
                        take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                    )),
                )),
                recognize(pair(
                    char('.'),
                    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                )),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Dimension Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        map(tag_no_case("pt"), |_| 1.0),
        map(tag_no_case("px"), |_| 1.0), // Treat px as pt
        map(tag_no_case("in"), |_| 72.0),
        map(tag_no_case("cm"), |_| 28.35),
        map(tag_no_case("mm"), |_| 2.835),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, value * unit_multiplier.unwrap_or(1.0)))
}

/// Parses a dimension value (length or percentage).
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        map(pair(parse_f32, char('%')), |(val, _)| {
            Dimension::Percent(val)
        }),
        map(parse_length, Dimension::Pt),
    ))
    .parse(input)
}

/// Parses CSS shorthand margins (1, 2, or 4 values).
pub fn parse_shorthand_margins(input: &str) -> Result<Margins, StyleParseError> {
    let parts_res = separated_list1(space1, parse_length).parse(input.trim());

    match parts_res {
        Ok((rest, values)) if rest.trim().is_empty() => match values.len() {
            1 => Ok(Margins::all(values[0])),
            2 => Ok(Margins {
                top: values[0],
                right: values[1],
                bottom: values[0],
                left: values[1],
            }),
            4 => Ok(Margins {
                top: values[0],
                right: values[1],
                bottom: values[2],
                left: values[3],
            }),
            n => Err(StyleParseError::InvalidValue {
                property: "margins".to_string(),
                value: format!("expected 1, 2, or 4 values, got {}", n),
            }),
        },
        _ => Err(StyleParseError::Parse(input.to_string())),
    }
}

// --- Color Parser ---

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |s: &str| u8::from_str_radix(s, 16),
    )
    .parse(input)
}

/// Parses a hex color value ("#RRGGBB").
pub fn parse_color(input: &str) -> IResult<&str, Color> {
    map(
        preceded(char('#'), (hex_pair, hex_pair, hex_pair)),
        |(r, g, b)| Color::rgb(r, g, b),
    )
    .parse(input)
}

// --- Keyword Parsers ---

/// Parses a letter-case keyword ("none", "upper", "lower").
pub fn parse_letter_case(input: &str) -> IResult<&str, LetterCase> {
    ws(alt((
        map(tag("none"), |_| LetterCase::None),
        map(tag("upper"), |_| LetterCase::Upper),
        map(tag("lower"), |_| LetterCase::Lower),
    )))
    .parse(input)
}
