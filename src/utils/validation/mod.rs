//! Consolidated validation utilities
//!
//! Validators for the input contracts of circuit templates. Each check is
//! pure: it returns a value or an error and touches nothing else.

pub mod params;
pub mod shape;

pub use params::ParameterValidator;
pub use shape::ShapeValidator;
