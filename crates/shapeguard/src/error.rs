use std::fmt;

use thiserror::Error;

/// Boxed cause attached to a [`ShapeError`].
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The constructor path that produced a [`ShapeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeErrorKind {
    /// Two full shapes differ. Built by [`ShapeError::new`] or [`ShapeError::dimensions_mismatch`].
    ShapeMismatch,

    /// A single dimension differs from the expected value. Built by [`ShapeError::dim_mismatch`].
    DimensionMismatch,
}

/// An error reporting that two shapes (or two dimensions) were expected to match but did not.
///
/// The message is rendered once, at construction, and never changes afterwards. For two
/// shapes it reads:
///
/// ```text
/// In the context of {context}:
///
/// Shape1 != Shape2
///
/// Where:
///
/// Shape1={shape1}
/// Shape2={shape2}
/// ```
///
/// An optional cause can be attached with [`ShapeError::with_source`]; it is reported through
/// [`std::error::Error::source`] and is not part of the message.
///
/// # Examples
///
/// ```
/// use shapeguard::ShapeError;
///
/// let err = ShapeError::new("(3, 4)", "(4, 3)", "matrix multiply");
/// assert!(err.to_string().starts_with("In the context of matrix multiply:"));
/// ```
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ShapeError {
    kind: ShapeErrorKind,
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl ShapeError {
    /// Create a new shape mismatch error.
    ///
    /// The three inputs are interpolated verbatim through their [`fmt::Display`] output. No
    /// check is made that `shape1` and `shape2` actually differ; use
    /// [`ShapeError::dimensions_mismatch`] for that.
    ///
    /// # Arguments
    ///
    /// * `shape1` - The first shape.
    /// * `shape2` - The second shape.
    /// * `context` - The operation or call site where the shapes were compared.
    ///
    /// # Returns
    ///
    /// A new error with the rendered message.
    pub fn new(
        shape1: impl fmt::Display,
        shape2: impl fmt::Display,
        context: impl fmt::Display,
    ) -> Self {
        Self {
            kind: ShapeErrorKind::ShapeMismatch,
            message: format!(
                "In the context of {context}:\n\nShape1 != Shape2\n\nWhere:\n\nShape1={shape1}\nShape2={shape2}"
            ),
            source: None,
        }
    }

    /// Compare two shapes and build an error only if they differ.
    ///
    /// Equality is whatever `PartialEq` the shape type defines.
    ///
    /// # Arguments
    ///
    /// * `shape1` - The first shape.
    /// * `shape2` - The second shape.
    /// * `context` - The operation or call site where the shapes were compared.
    ///
    /// # Returns
    ///
    /// `None` if the shapes are equal, otherwise the error describing the mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeguard::{Shape, ShapeError};
    ///
    /// let a = Shape::from([2, 3]);
    /// let b = Shape::from([3, 2]);
    ///
    /// assert!(ShapeError::dimensions_mismatch(&a, &a, "add").is_none());
    /// assert!(ShapeError::dimensions_mismatch(&a, &b, "add").is_some());
    /// ```
    pub fn dimensions_mismatch<S1, S2>(
        shape1: S1,
        shape2: S2,
        context: impl fmt::Display,
    ) -> Option<Self>
    where
        S1: PartialEq<S2> + fmt::Display,
        S2: fmt::Display,
    {
        if shape1 == shape2 {
            None
        } else {
            Some(Self::new(shape1, shape2, context))
        }
    }

    /// Create a dimension mismatch error.
    ///
    /// The message is `Dimension mismatch: {expected} vs {observed}`. The error is built even
    /// when both values are equal.
    ///
    /// # Arguments
    ///
    /// * `expected` - The expected dimension (or dtype, or any other label).
    /// * `observed` - The observed value.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeguard::ShapeError;
    ///
    /// let err = ShapeError::dim_mismatch("int32", "float64");
    /// assert_eq!(err.to_string(), "Dimension mismatch: int32 vs float64");
    /// ```
    pub fn dim_mismatch(expected: impl fmt::Display, observed: impl fmt::Display) -> Self {
        Self {
            kind: ShapeErrorKind::DimensionMismatch,
            message: format!("Dimension mismatch: {expected} vs {observed}"),
            source: None,
        }
    }

    /// Attach the error that caused this mismatch.
    ///
    /// The message is left untouched.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<BoxedSource>,
    {
        self.source = Some(source.into());
        self
    }

    /// The constructor path that produced this error.
    pub fn kind(&self) -> ShapeErrorKind {
        self.kind
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
