//! nom parsers for the small CSS subset stylesheets are written in.
//!
//! Only class selectors with flat declaration blocks are understood:
//!
//! ```css
//! .stroke { stroke:#202020; stroke-width:1; stroke-linecap:round; }
//! .fill-0 { fill:#303030; }
//! ```

use crate::StyleError;
use nom::bytes::complete::{take_till, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::opt;
use nom::multi::many0;
use nom::sequence::{delimited, preceded, separated_pair, terminated};
use nom::{IResult, Parser};

/// A parsed `.class { name: value; ... }` block, values trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRule<'a> {
    pub class: &'a str,
    pub declarations: Vec<(&'a str, &'a str)>,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn class_selector(input: &str) -> IResult<&str, &str> {
    preceded(char('.'), take_while1(is_name_char)).parse(input)
}

fn declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, (name, value)) = separated_pair(
        delimited(multispace0, take_while1(is_name_char), multispace0),
        char(':'),
        take_till(|c: char| c == ';' || c == '}'),
    )
    .parse(input)?;
    Ok((input, (name, value.trim())))
}

fn declaration_block(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    delimited(
        char('{'),
        many0(terminated(declaration, opt(char(';')))),
        preceded(multispace0, char('}')),
    )
    .parse(input)
}

fn rule(input: &str) -> IResult<&str, RawRule<'_>> {
    let (input, (class, declarations)) = (
        delimited(multispace0, class_selector, multispace0),
        declaration_block,
    )
        .parse(input)?;
    Ok((input, RawRule { class, declarations }))
}

/// Parses a whole stylesheet, requiring all input to be consumed.
pub fn parse_rules(input: &str) -> Result<Vec<RawRule<'_>>, StyleError> {
    match terminated(many0(rule), multispace0).parse(input) {
        Ok(("", rules)) => Ok(rules),
        Ok((rem, _)) => Err(StyleError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleError::Parse(e.to_string())),
    }
}
