//! Shape validation utilities
//!
//! Extracts shapes from template inputs and checks them against target
//! shapes, either exactly or with the leading dimension bounded.

use crate::error::{Result, ShapeMismatchReason, TemplateError};
use crate::shape::{Bound, Shape, ShapeSpec};
use crate::value::Value;

/// Validator for value shapes
pub struct ShapeValidator;

impl ShapeValidator {
    /// Shape of a value
    ///
    /// Numeric scalars have the empty shape and arrays report their own
    /// shape. A list contributes its length followed by the shape of its
    /// *first* element only: nesting is assumed rectangular, so ragged
    /// siblings are not detected here. An empty list has shape `(0,)`.
    pub fn get_shape(value: &Value) -> Result<Shape> {
        match value {
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Complex(_) => {
                Ok(Shape::scalar())
            },
            Value::Array(array) => Ok(Shape::from(array.shape())),
            Value::List(items) => match items.first() {
                Some(first) => Ok(Self::get_shape(first)?.prepend(items.len())),
                None => Ok(Shape::from([0])),
            },
            Value::None | Value::Str(_) | Value::Object(_) => {
                tracing::debug!(kind = %value.kind(), "could not extract shape");
                Err(TemplateError::InvalidShape { kind: value.kind() })
            },
        }
    }

    /// Check a value's shape against a target, optionally bounding the leading dimension
    ///
    /// With `Bound::Max` (`Bound::Min`) the ranks must agree, the leading
    /// dimension must not exceed (fall short of) the target's, and all other
    /// dimensions must match exactly. `msg` becomes the error text.
    pub fn check_shape(value: &Value, target: &Shape, bound: Option<Bound>, msg: &str) -> Result<()> {
        let actual = Self::get_shape(value)?;
        match Self::compare(&actual, target, bound) {
            None => {
                tracing::trace!(shape = %actual, "shape check passed");
                Ok(())
            },
            Some(reason) => {
                tracing::debug!(
                    target_shape = %target,
                    actual_shape = %actual,
                    bound = bound.map_or("exact", Bound::as_str),
                    %reason,
                    "shape check failed"
                );
                Err(TemplateError::shape_mismatch(reason, msg))
            },
        }
    }

    /// Check a value against a bundled target shape and bound
    pub fn check_shape_spec(value: &Value, spec: &ShapeSpec, msg: &str) -> Result<()> {
        Self::check_shape(value, &spec.shape, spec.bound, msg)
    }

    /// Element-wise `check_shape` over parallel lists, failing on the first mismatch
    ///
    /// Missing `bounds` means an exact check for every element.
    pub fn check_shapes(
        values: &[Value],
        targets: &[Shape],
        bounds: Option<&[Option<Bound>]>,
        msg: &str,
    ) -> Result<()> {
        if values.len() != targets.len() {
            return Err(TemplateError::shape_mismatch(
                ShapeMismatchReason::LengthMismatch {
                    values: values.len(),
                    targets: targets.len(),
                },
                msg,
            ));
        }

        if let Some(bounds) = bounds {
            if bounds.len() != values.len() {
                return Err(TemplateError::shape_mismatch(
                    ShapeMismatchReason::BoundsLengthMismatch {
                        values: values.len(),
                        bounds: bounds.len(),
                    },
                    msg,
                ));
            }
        }

        for (i, (value, target)) in values.iter().zip(targets).enumerate() {
            let bound = bounds.and_then(|b| b.get(i).copied().flatten());
            Self::check_shape(value, target, bound, msg)?;
        }

        Ok(())
    }

    fn compare(actual: &Shape, target: &Shape, bound: Option<Bound>) -> Option<ShapeMismatchReason> {
        let Some(bound) = bound else {
            return (actual != target).then(|| ShapeMismatchReason::DimensionMismatch {
                expected: target.clone(),
                actual: actual.clone(),
            });
        };

        if actual.rank() != target.rank() {
            return Some(ShapeMismatchReason::RankMismatch {
                expected: target.clone(),
                actual: actual.clone(),
            });
        }

        let (Some((&lead, rest)), Some((&target_lead, target_rest))) =
            (actual.dims().split_first(), target.dims().split_first())
        else {
            // Both scalars
            return None;
        };

        if rest != target_rest {
            return Some(ShapeMismatchReason::DimensionMismatch {
                expected: target.clone(),
                actual: actual.clone(),
            });
        }

        match bound {
            Bound::Max if lead > target_lead => Some(ShapeMismatchReason::AboveMaximum {
                expected: target.clone(),
                actual: actual.clone(),
            }),
            Bound::Min if lead < target_lead => Some(ShapeMismatchReason::BelowMinimum {
                expected: target.clone(),
                actual: actual.clone(),
            }),
            _ => None,
        }
    }
}
