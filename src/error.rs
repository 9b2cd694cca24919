//! Error types for template input validation
//!
//! Every failure is a precondition violation reported straight back to the
//! caller. Shape and parameter failures carry a machine-readable reason plus
//! the caller's message; when a message is supplied it is rendered verbatim,
//! otherwise the reason renders itself.

use crate::shape::Shape;
use crate::value::ValueKind;
use std::fmt;
use thiserror::Error;

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors raised by the validators, `Wires` construction and contract loading
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The value has no extractable shape (strings, `None`, opaque objects)
    #[error("could not extract shape of object of type {kind}")]
    InvalidShape { kind: ValueKind },

    /// The value's shape violates the target shape or bound
    #[error("{}", render(.message.as_deref(), .reason))]
    ShapeMismatch {
        reason: ShapeMismatchReason,
        message: Option<String>,
    },

    /// A template parameter violates its precondition
    #[error("{}", render(.message.as_deref(), .reason))]
    InvalidParameter {
        reason: ParameterReason,
        message: Option<String>,
    },

    /// Wire collection construction failed
    #[error(transparent)]
    Wire(#[from] WireError),

    /// Malformed template contract
    #[error("Invalid template contract: {0}")]
    Contract(String),

    /// Contract file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Contract or input document is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn render(message: Option<&str>, reason: &dyn fmt::Display) -> String {
    match message {
        Some(msg) if !msg.is_empty() => msg.to_string(),
        _ => reason.to_string(),
    }
}

/// Why a shape check failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatchReason {
    /// Number of dimensions differs
    RankMismatch { expected: Shape, actual: Shape },
    /// Exact comparison failed, or a non-leading dimension differs under a bound
    DimensionMismatch { expected: Shape, actual: Shape },
    /// Leading dimension exceeds the target under `Bound::Max`
    AboveMaximum { expected: Shape, actual: Shape },
    /// Leading dimension falls short of the target under `Bound::Min`
    BelowMinimum { expected: Shape, actual: Shape },
    /// `check_shapes` received differing numbers of values and targets
    LengthMismatch { values: usize, targets: usize },
    /// `check_shapes` received a bounds list of the wrong length
    BoundsLengthMismatch { values: usize, bounds: usize },
}

impl fmt::Display for ShapeMismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RankMismatch { expected, actual } => write!(
                f,
                "expected {} dimensions (shape {}), got {} (shape {})",
                expected.rank(),
                expected,
                actual.rank(),
                actual
            ),
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "expected shape {}, got {}", expected, actual)
            },
            Self::AboveMaximum { expected, actual } => write!(
                f,
                "shape {} exceeds the maximum {} in its first dimension",
                actual, expected
            ),
            Self::BelowMinimum { expected, actual } => write!(
                f,
                "shape {} is below the minimum {} in its first dimension",
                actual, expected
            ),
            Self::LengthMismatch { values, targets } => write!(
                f,
                "got {} values but {} target shapes",
                values, targets
            ),
            Self::BoundsLengthMismatch { values, bounds } => {
                write!(f, "got {} values but {} bounds", values, bounds)
            },
        }
    }
}

/// Why a parameter check failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterReason {
    /// Wires were neither a non-negative integer nor a sequence of them
    InvalidWires { got: String },
    /// Per-layer parameters disagree on their leading dimension
    InconsistentLayers { dims: Vec<usize> },
    /// A per-layer parameter is a scalar and has no leading dimension
    ScalarParameter { position: usize },
    /// No parameters were given to count layers from
    NoParameters,
    /// Value is not among the allowed options
    NotInOptions,
    /// Value's kind is not among the allowed kinds
    TypeNotAllowed { kind: ValueKind },
    /// A contract names an input that was not supplied
    MissingInput { name: String },
}

impl fmt::Display for ParameterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWires { got } => write!(
                f,
                "wires must be a positive integer or iterable of positive integers; got {}.",
                got
            ),
            Self::InconsistentLayers { dims } => {
                let dims: Vec<String> = dims.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "The first dimension of all parameters needs to be the number of layers in \
                     the template; got differing first dimensions: {}.",
                    dims.join(", ")
                )
            },
            Self::ScalarParameter { position } => write!(
                f,
                "The first dimension of all parameters needs to be the number of layers in \
                 the template; parameter {} is a scalar.",
                position
            ),
            Self::NoParameters => write!(
                f,
                "The first dimension of all parameters needs to be the number of layers in \
                 the template; got no parameters."
            ),
            Self::NotInOptions => write!(f, "value is not one of the allowed options"),
            Self::TypeNotAllowed { kind } => write!(f, "type {} is not allowed", kind),
            Self::MissingInput { name } => write!(f, "missing input '{}'", name),
        }
    }
}

/// `Wires` construction contract violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WireError {
    /// An element is not integer-like
    #[error("Wire indices must be integers.")]
    NonInteger { position: usize },

    /// An element is negative
    #[error("Wire indices must be non-negative.")]
    Negative { value: i64 },

    /// An index appears more than once
    #[error("Each wire must be represented by a unique index.")]
    Duplicate { value: usize },

    /// `Wires::subset` was asked for a position past the end
    #[error("Position {position} is out of range for {len} wires.")]
    OutOfRange { position: usize, len: usize },
}

impl TemplateError {
    /// Create a shape mismatch error carrying the caller's message
    pub fn shape_mismatch<S: Into<String>>(reason: ShapeMismatchReason, msg: S) -> Self {
        Self::ShapeMismatch {
            reason,
            message: Some(msg.into()),
        }
    }

    /// Create a parameter error carrying the caller's message
    pub fn invalid_parameter<S: Into<String>>(reason: ParameterReason, msg: S) -> Self {
        Self::InvalidParameter {
            reason,
            message: Some(msg.into()),
        }
    }

    /// Create a parameter error that renders its reason text
    pub fn parameter(reason: ParameterReason) -> Self {
        Self::InvalidParameter {
            reason,
            message: None,
        }
    }

    /// Create a new contract error
    pub fn contract<S: Into<String>>(msg: S) -> Self {
        Self::Contract(msg.into())
    }

    /// Shape mismatch reason, if this is a shape mismatch
    pub fn shape_reason(&self) -> Option<&ShapeMismatchReason> {
        match self {
            Self::ShapeMismatch { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Parameter reason, if this is a parameter error
    pub fn parameter_reason(&self) -> Option<&ParameterReason> {
        match self {
            Self::InvalidParameter { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_message_rendered_verbatim() {
        let err = TemplateError::shape_mismatch(
            ShapeMismatchReason::DimensionMismatch {
                expected: Shape::from([2, 2]),
                actual: Shape::from([2]),
            },
            "XXX",
        );
        assert_eq!(err.to_string(), "XXX");
        assert!(matches!(
            err.shape_reason(),
            Some(ShapeMismatchReason::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_reason_rendered_without_message() {
        let err = TemplateError::parameter(ParameterReason::InconsistentLayers { dims: vec![3, 2] });
        let text = err.to_string();
        assert!(text.starts_with("The first dimension of all parameters"));
        assert!(text.contains("3, 2"));

        let err = TemplateError::ShapeMismatch {
            reason: ShapeMismatchReason::AboveMaximum {
                expected: Shape::from([1]),
                actual: Shape::from([2]),
            },
            message: Some(String::new()),
        };
        assert!(err.to_string().contains("exceeds the maximum (1,)"));
    }

    #[test]
    fn test_wire_error_display() {
        assert_eq!(
            WireError::NonInteger { position: 1 }.to_string(),
            "Wire indices must be integers."
        );
        assert_eq!(
            WireError::Negative { value: -1 }.to_string(),
            "Wire indices must be non-negative."
        );
        assert_eq!(
            WireError::Duplicate { value: 1 }.to_string(),
            "Each wire must be represented by a unique index."
        );

        let err: TemplateError = WireError::Duplicate { value: 1 }.into();
        assert!(matches!(err, TemplateError::Wire(WireError::Duplicate { value: 1 })));
    }

    #[test]
    fn test_invalid_shape_display() {
        let err = TemplateError::InvalidShape {
            kind: ValueKind::Str,
        };
        assert_eq!(err.to_string(), "could not extract shape of object of type str");
    }
}
