//! Parser for declarative geometry property strings
//!
//! The host framework describes geometry with a style-like string such as
//! `primitive: triangle; vertexA: 0 0.5 0; vertexB: -0.5 -0.5 0`.

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, value},
    multi::separated_list0,
    number::complete::float,
    sequence::{delimited, separated_pair},
    Finish, IResult,
};
use nalgebra::Point3;
use std::str::FromStr;

use crate::error::{GeometryError, GeometryResult};

/// Ordered `name: value` pairs. A repeated name keeps its first position
/// and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `primitive` property, if set
    pub fn primitive(&self) -> Option<&str> {
        self.get("primitive")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Properties {
    type Err = GeometryError;

    fn from_str(s: &str) -> GeometryResult<Self> {
        parse_properties(s)
    }
}

/// Parse a `;`-separated list of `name: value` properties
pub fn parse_properties(input: &str) -> GeometryResult<Properties> {
    let (_, segments) = all_consuming(separated_list0(char(';'), segment))(input)
        .finish()
        .map_err(|e| GeometryError::Parse(format!("malformed property near `{}`", e.input.trim())))?;

    let mut props = Properties::new();
    for (name, raw) in segments.into_iter().flatten() {
        props.insert(name, raw);
    }
    Ok(props)
}

/// Parse up to three whitespace-separated numbers.
///
/// Missing trailing components are taken from `default`.
pub fn parse_vec3(input: &str, default: &Point3<f32>) -> GeometryResult<Point3<f32>> {
    let (_, values) = all_consuming(components)(input)
        .finish()
        .map_err(|e| GeometryError::Parse(format!("invalid number near `{}`", e.input.trim())))?;

    if values.len() > 3 {
        return Err(GeometryError::Parse(format!(
            "expected at most 3 components, found {}",
            values.len()
        )));
    }

    let mut point = *default;
    for (i, v) in values.into_iter().enumerate() {
        point[i] = v;
    }
    Ok(point)
}

/// One segment between semicolons: a property or nothing but whitespace
fn segment(input: &str) -> IResult<&str, Option<(&str, &str)>> {
    alt((map(property, Some), value(None, multispace0)))(input)
}

fn property(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, (name, raw)) = separated_pair(
        delimited(multispace0, property_name, multispace0),
        char(':'),
        take_till(|c: char| c == ';'),
    )(input)?;
    Ok((input, (name, raw.trim())))
}

fn property_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-')(input)
}

fn components(input: &str) -> IResult<&str, Vec<f32>> {
    delimited(multispace0, separated_list0(multispace1, float), multispace0)(input)
}
