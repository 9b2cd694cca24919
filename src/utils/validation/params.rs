//! Template parameter validation utilities
//!
//! Checks wire specifications, option and type membership, and that
//! per-layer parameters agree on the number of layers.

use super::ShapeValidator;
use crate::error::{ParameterReason, Result, TemplateError};
use crate::value::{float_to_exact_integer, Value, ValueKind};
use std::collections::BTreeSet;

/// Validator for template hyperparameters
pub struct ParameterValidator;

impl ParameterValidator {
    /// Normalize a wire specification to a list of indices
    ///
    /// Accepts a single non-negative integer or a sequence of them. Floats
    /// are not accepted here, unlike [`crate::Wires`] construction.
    pub fn check_wires(wires: &Value) -> Result<Vec<usize>> {
        let parsed = match wires {
            Value::Int(n) => usize::try_from(*n).ok().map(|n| vec![n]),
            Value::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::Int(n) => usize::try_from(*n).ok(),
                    _ => None,
                })
                .collect::<Option<Vec<usize>>>(),
            // Integer-valued arrays are how numeric libraries hand over index lists
            Value::Array(array) if array.ndim() == 1 => array
                .iter()
                .map(|&x| float_to_exact_integer(x).and_then(|n| usize::try_from(n).ok()))
                .collect::<Option<Vec<usize>>>(),
            _ => None,
        };

        parsed.ok_or_else(|| {
            tracing::debug!(wires = %wires, "invalid wires");
            TemplateError::parameter(ParameterReason::InvalidWires {
                got: wires.to_string(),
            })
        })
    }

    /// Number of layers shared by per-layer parameters
    ///
    /// Every parameter's leading dimension is the number of layers; they must
    /// all agree.
    pub fn check_number_of_layers(params: &[Value]) -> Result<usize> {
        let mut first_dims = Vec::with_capacity(params.len());
        for (position, param) in params.iter().enumerate() {
            let shape = ShapeValidator::get_shape(param)?;
            let first = shape
                .first()
                .ok_or_else(|| TemplateError::parameter(ParameterReason::ScalarParameter { position }))?;
            first_dims.push(first);
        }

        let distinct: BTreeSet<usize> = first_dims.iter().copied().collect();
        match (first_dims.first(), distinct.len()) {
            (None, _) => Err(TemplateError::parameter(ParameterReason::NoParameters)),
            (Some(&layers), 1) => {
                tracing::trace!(layers, "number of layers consistent");
                Ok(layers)
            },
            _ => {
                tracing::debug!(dims = ?first_dims, "inconsistent number of layers");
                Err(TemplateError::parameter(ParameterReason::InconsistentLayers {
                    dims: distinct.into_iter().collect(),
                }))
            },
        }
    }

    /// Fail with `msg` unless `value` is one of `options`
    pub fn check_is_in_options<T: PartialEq>(value: &T, options: &[T], msg: &str) -> Result<()> {
        if options.contains(value) {
            Ok(())
        } else {
            Err(TemplateError::invalid_parameter(
                ParameterReason::NotInOptions,
                msg,
            ))
        }
    }

    /// Fail with `msg` unless the value's kind is exactly one of `allowed`
    pub fn check_type(value: &Value, allowed: &[ValueKind], msg: &str) -> Result<()> {
        let kind = value.kind();
        if allowed.contains(&kind) {
            Ok(())
        } else {
            tracing::debug!(%kind, ?allowed, "type not allowed");
            Err(TemplateError::invalid_parameter(
                ParameterReason::TypeNotAllowed { kind },
                msg,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_check_wires_array() {
        let wires = Value::from(array![2.0, 0.0]);
        assert_eq!(ParameterValidator::check_wires(&wires).unwrap(), vec![2, 0]);

        let wires = Value::from(array![2.5]);
        assert!(ParameterValidator::check_wires(&wires).is_err());

        let wires = Value::from(array![[1.0, 2.0]]);
        assert!(ParameterValidator::check_wires(&wires).is_err());
    }

    #[test]
    fn test_check_wires_rejects_floats_and_empty_is_ok() {
        assert!(ParameterValidator::check_wires(&Value::Float(1.0)).is_err());
        assert!(ParameterValidator::check_wires(&Value::from(vec![1.0])).is_err());
        assert_eq!(
            ParameterValidator::check_wires(&Value::List(Vec::new())).unwrap(),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn test_check_wires_message_names_input() {
        let err = ParameterValidator::check_wires(&Value::from(vec![-1])).unwrap_err();
        assert!(err.to_string().contains("got [-1]"));
        assert!(matches!(
            err.parameter_reason(),
            Some(ParameterReason::InvalidWires { .. })
        ));
    }

    #[test]
    fn test_layers_reasons() {
        let err = ParameterValidator::check_number_of_layers(&[]).unwrap_err();
        assert_eq!(err.parameter_reason(), Some(&ParameterReason::NoParameters));

        let params = [Value::from(vec![1, 2]), Value::Int(1)];
        let err = ParameterValidator::check_number_of_layers(&params).unwrap_err();
        assert_eq!(
            err.parameter_reason(),
            Some(&ParameterReason::ScalarParameter { position: 1 })
        );

        let params = [Value::from(vec![1, 2]), Value::from(vec![1, 2, 3])];
        let err = ParameterValidator::check_number_of_layers(&params).unwrap_err();
        assert_eq!(
            err.parameter_reason(),
            Some(&ParameterReason::InconsistentLayers { dims: vec![2, 3] })
        );
    }

    #[test]
    fn test_layers_propagates_shape_errors() {
        let params = [Value::from("a")];
        let err = ParameterValidator::check_number_of_layers(&params).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidShape { .. }));
    }

    #[test]
    fn test_check_type_is_exact() {
        // Booleans are not integers for type checks
        assert!(ParameterValidator::check_type(&Value::Bool(true), &[ValueKind::Int], "XXX").is_err());
        assert!(ParameterValidator::check_type(&Value::None, &[ValueKind::None], "XXX").is_ok());
    }

    #[test]
    fn test_check_options_generic() {
        assert!(ParameterValidator::check_is_in_options(&3, &[1, 2, 3], "XXX").is_ok());
        let err = ParameterValidator::check_is_in_options(&"Z", &["X", "Y"], "XXX").unwrap_err();
        assert_eq!(err.to_string(), "XXX");
    }
}
