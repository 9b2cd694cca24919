#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::must_use_candidate)]

//! # qwires
//!
//! Input-contract validation for quantum circuit templates.
//!
//! Templates take loosely structured hyperparameters: weight tensors whose
//! leading dimension is the number of layers, lists of wire indices, option
//! strings. This crate checks those inputs before a template builds anything
//! and reports precise, matchable errors when they are wrong.
//!
//! ## Features
//!
//! - **Shape checks**: extract the shape of nested lists or arrays and compare
//!   it against a target exactly or with the leading dimension bounded
//! - **Parameter checks**: wire specifications, option and type membership,
//!   consistent number of layers across parameters
//! - **Wires**: an ordered, duplicate-free set of non-negative wire indices
//! - **Template contracts**: JSON descriptions of a template's inputs, checked
//!   in one call
//! - **CLI Integration**: optional `qwires` binary (enable with `cli` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use qwires::{Bound, ParameterValidator, Shape, ShapeValidator, Value, Wires};
//!
//! # fn example() -> qwires::Result<()> {
//! let weights = Value::from(vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
//! assert_eq!(ShapeValidator::get_shape(&weights)?, [2, 2]);
//!
//! // At most three layers of two parameters each
//! ShapeValidator::check_shape(&weights, &Shape::from([3, 2]), Some(Bound::Max), "bad weights")?;
//!
//! let wires = ParameterValidator::check_wires(&Value::from(vec![0, 1]))?;
//! let wires = Wires::try_from(wires)?;
//! assert_eq!(wires.max(), Some(1));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Errors
//!
//! Every check returns [`TemplateError`]. Shape and parameter failures carry
//! a reason that can be matched on and render the caller's message as their
//! text:
//!
//! ```rust
//! use qwires::{ShapeMismatchReason, Shape, ShapeValidator, Value};
//!
//! let err = ShapeValidator::check_shape(&Value::from(vec![1.0]), &Shape::from([4, 5]), None, "XXX")
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "XXX");
//! assert!(matches!(err.shape_reason(), Some(ShapeMismatchReason::DimensionMismatch { .. })));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod shape;
#[cfg(feature = "cli")]
pub mod tracing_config;
pub mod utils;
pub mod value;
pub mod wires;

// Public API exports
pub use config::{ContractReport, ParameterContract, ParameterRule, TemplateContract};
pub use error::{ParameterReason, Result, ShapeMismatchReason, TemplateError, WireError};
pub use shape::{Bound, Shape, ShapeSpec};
pub use utils::{ParameterValidator, ShapeValidator};
pub use value::{try_to_exact_integer, Value, ValueKind};
pub use wires::Wires;

#[cfg(feature = "cli")]
pub use tracing_config::{
    init_cli_tracing, init_library_tracing, spans, TracingConfig, TracingFormat, TracingOutput,
};
