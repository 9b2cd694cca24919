//! Shapes and shape specifications

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimensional profile of a (possibly nested) numeric value
///
/// The empty shape denotes a scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Shape of a scalar
    pub fn scalar() -> Self {
        Self(Vec::new())
    }

    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }

    /// Leading dimension, absent for scalars
    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Shape obtained by adding a new leading dimension
    pub(crate) fn prepend(mut self, len: usize) -> Self {
        self.0.insert(0, len);
        self
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => f.write_str("()"),
            [only] => write!(f, "({},)", only),
            dims => {
                let dims: Vec<String> = dims.iter().map(ToString::to_string).collect();
                write!(f, "({})", dims.join(", "))
            },
        }
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self(dims.to_vec())
    }
}

impl<const N: usize> PartialEq<[usize; N]> for Shape {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl PartialEq<[usize]> for Shape {
    fn eq(&self, other: &[usize]) -> bool {
        self.0.as_slice() == other
    }
}

/// Parses comma-separated dimensions such as `"2,3"`; the empty string is a scalar
impl FromStr for Shape {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')').trim();
        if inner.is_empty() {
            return Ok(Self::scalar());
        }
        // A single trailing comma is allowed, as in `(4,)`
        inner
            .strip_suffix(',')
            .unwrap_or(inner)
            .split(',')
            .map(str::trim)
            .map(str::parse)
            .collect::<Result<Vec<usize>, _>>()
            .map(Self)
    }
}

/// Relaxation applied to the leading dimension of a shape check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    /// Leading dimension must be at least the target's
    Min,
    /// Leading dimension must be at most the target's
    Max,
}

impl Bound {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            other => Err(format!("unknown bound '{}', expected 'min' or 'max'", other)),
        }
    }
}

/// A target shape plus an optional bound mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub shape: Shape,
    #[serde(default)]
    pub bound: Option<Bound>,
}

impl ShapeSpec {
    /// Target requiring an exact match
    pub fn exact<S: Into<Shape>>(shape: S) -> Self {
        Self {
            shape: shape.into(),
            bound: None,
        }
    }

    /// Target bounding the leading dimension from above
    pub fn at_most<S: Into<Shape>>(shape: S) -> Self {
        Self {
            shape: shape.into(),
            bound: Some(Bound::Max),
        }
    }

    /// Target bounding the leading dimension from below
    pub fn at_least<S: Into<Shape>>(shape: S) -> Self {
        Self {
            shape: shape.into(),
            bound: Some(Bound::Min),
        }
    }
}
