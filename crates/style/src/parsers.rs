//! nom parsers for length values written in templates (e.g. `"1.25in"`, `"30mm"`).

use folio_types::POINTS_PER_INCH;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map_res, opt, recognize, value};
use nom::sequence::{delimited, pair};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// Points per unit.
fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")),
        value(POINTS_PER_INCH, tag_no_case("in")),
        value(28.35, tag_no_case("cm")),
        value(2.835, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length with an optional unit. A bare number is in inches, the unit
/// template margins have always been stored in.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, number) = parse_f32(input)?;
    let (input, unit) = opt(delimited(space0, parse_unit, space0)).parse(input)?;
    Ok((input, number * unit.unwrap_or(POINTS_PER_INCH)))
}

/// Parses a complete length string into points.
pub fn length_to_points(input: &str) -> Result<f32, StyleParseError> {
    match all_consuming(delimited(space0, parse_length, space0)).parse(input) {
        Ok((_, points)) if points >= 0.0 => Ok(points),
        Ok(_) => Err(StyleParseError::InvalidValue {
            property: "length".to_string(),
            value: input.to_string(),
        }),
        Err(e) => Err(StyleParseError::Parse(format!(
            "invalid length '{}': {}",
            input, e
        ))),
    }
}
