//! Low-level nom parser functions for CSS-like style values.
//!
//! Covers the color grammar understood by the compositor (hex, `rgb()`/`rgba()`,
//! named colors) and decoration style keyword lists.

use crate::text::DecorationStyle;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{alpha1, char, multispace0, multispace1};
use nom::combinator::{map, map_opt, map_res, opt};
use nom::multi::separated_list1;
use nom::number::complete::float;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use quire_types::Color;
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown decoration style keyword: '{0}'")]
    UnknownDecoration(String),
}

// --- Helper Parsers ---

fn ws<'a, F, O>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn comma(input: &str) -> IResult<&str, char> {
    ws(char(',')).parse(input)
}

// --- Hex Colors ---

fn from_hex(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), from_hex).parse(input)
}

fn hex_single(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, |c: char| c.is_ascii_hexdigit()), |d: &str| {
        from_hex(&d.repeat(2))
    })
    .parse(input)
}

fn alpha_byte(value: u8) -> f32 {
    value as f32 / 255.0
}

fn hex_color_8(input: &str) -> IResult<&str, Color> {
    map((hex_pair, hex_pair, hex_pair, hex_pair), |(r, g, b, a)| {
        Color::rgba(r, g, b, alpha_byte(a))
    })
    .parse(input)
}

fn hex_color_6(input: &str) -> IResult<&str, Color> {
    map((hex_pair, hex_pair, hex_pair), |(r, g, b)| Color::rgb(r, g, b)).parse(input)
}

fn hex_color_4(input: &str) -> IResult<&str, Color> {
    map((hex_single, hex_single, hex_single, hex_single), |(r, g, b, a)| {
        Color::rgba(r, g, b, alpha_byte(a))
    })
    .parse(input)
}

fn hex_color_3(input: &str) -> IResult<&str, Color> {
    map((hex_single, hex_single, hex_single), |(r, g, b)| Color::rgb(r, g, b)).parse(input)
}

/// Parses a hex color (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`).
pub fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    preceded(char('#'), alt((hex_color_8, hex_color_6, hex_color_4, hex_color_3))).parse(input)
}

// --- Functional Colors ---

/// A color channel: `0..=255` or a percentage.
fn rgb_channel(input: &str) -> IResult<&str, u8> {
    map((float, opt(char('%'))), |(value, percent)| {
        let value = if percent.is_some() { value * 2.55 } else { value };
        value.round().clamp(0.0, 255.0) as u8
    })
    .parse(input)
}

/// An alpha value: `0.0..=1.0` or a percentage.
fn alpha_channel(input: &str) -> IResult<&str, f32> {
    map((float, opt(char('%'))), |(value, percent)| {
        let value = if percent.is_some() { value / 100.0 } else { value };
        value.clamp(0.0, 1.0)
    })
    .parse(input)
}

/// Parses `rgb(r, g, b)` and `rgba(r, g, b, a)`; either name accepts an optional alpha.
pub fn parse_rgb_function(input: &str) -> IResult<&str, Color> {
    let (input, _) = alt((tag_no_case("rgba"), tag_no_case("rgb"))).parse(input)?;
    let (input, (r, _, g, _, b, a)) = delimited(
        ws(char('(')),
        (
            ws(rgb_channel),
            comma,
            ws(rgb_channel),
            comma,
            ws(rgb_channel),
            opt(preceded(comma, ws(alpha_channel))),
        ),
        char(')'),
    )
    .parse(input)?;
    Ok((input, Color::rgba(r, g, b, a.unwrap_or(1.0))))
}

// --- Named Colors ---

/// Looks up a CSS color keyword (case-insensitive).
pub fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "transparent" => Color::TRANSPARENT,
        "black" => Color::rgb(0, 0, 0),
        "white" => Color::rgb(255, 255, 255),
        "red" => Color::rgb(255, 0, 0),
        "green" => Color::rgb(0, 128, 0),
        "lime" => Color::rgb(0, 255, 0),
        "blue" => Color::rgb(0, 0, 255),
        "yellow" => Color::rgb(255, 255, 0),
        "cyan" | "aqua" => Color::rgb(0, 255, 255),
        "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "silver" => Color::rgb(192, 192, 192),
        "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
        "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
        "maroon" => Color::rgb(128, 0, 0),
        "olive" => Color::rgb(128, 128, 0),
        "navy" => Color::rgb(0, 0, 128),
        "purple" => Color::rgb(128, 0, 128),
        "teal" => Color::rgb(0, 128, 128),
        "orange" => Color::rgb(255, 165, 0),
        "pink" => Color::rgb(255, 192, 203),
        "brown" => Color::rgb(165, 42, 42),
        "gold" => Color::rgb(255, 215, 0),
        "indigo" => Color::rgb(75, 0, 130),
        "violet" => Color::rgb(238, 130, 238),
        _ => return None,
    };
    Some(color)
}

fn parse_named_color(input: &str) -> IResult<&str, Color> {
    map_opt(alpha1, named_color).parse(input)
}

/// Parses any color specification understood by the compositor.
pub fn parse_color(input: &str) -> IResult<&str, Color> {
    alt((parse_hex_color, parse_rgb_function, parse_named_color)).parse(input)
}

// --- Decoration Styles ---

fn decoration_keyword(input: &str) -> IResult<&str, DecorationStyle> {
    alt((
        map(tag_no_case("solid"), |_| DecorationStyle::SOLID),
        map(tag_no_case("dashed"), |_| DecorationStyle::DASHED),
        map(tag_no_case("dotted"), |_| DecorationStyle::DOTTED),
        map(tag_no_case("wavy"), |_| DecorationStyle::WAVY),
        map(tag_no_case("double"), |_| DecorationStyle::DOUBLE),
    ))
    .parse(input)
}

fn decoration_separator(input: &str) -> IResult<&str, ()> {
    alt((map(comma, |_| ()), map(multispace1, |_| ()))).parse(input)
}

/// Runs a parser over the whole (trimmed) input, failing if anything is left over.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Strictly parses a color specification.
pub fn parse_color_spec(input: &str) -> Result<Color, StyleParseError> {
    run_parser(parse_color, input)
}

/// Strictly parses a whitespace or comma separated list of decoration keywords.
pub fn parse_decoration_style(input: &str) -> Result<DecorationStyle, StyleParseError> {
    if input.trim().is_empty() {
        return Ok(DecorationStyle::SOLID);
    }
    run_parser(separated_list1(decoration_separator, decoration_keyword), input)
        .map(|styles| styles.into_iter().fold(DecorationStyle::empty(), DecorationStyle::union))
        .map_err(|_| StyleParseError::UnknownDecoration(input.trim().to_string()))
}
