#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Validation helpers that return a [`ShapeError`] on mismatch.
///
/// Each helper logs the mismatch at `debug` level through the `log` facade before
/// returning the error.
pub mod check;

/// Error types for shape and dimension mismatches.
///
/// Defines [`ShapeError`] and the [`ShapeErrorKind`] telling which constructor built it.
pub mod error;

/// Shape descriptor for tensors.
pub mod shape;

pub use error::{ShapeError, ShapeErrorKind};
pub use shape::Shape;
