use std::fmt;

use crate::{error::ShapeError, shape::Shape};

/// Check that two shapes are equal.
///
/// # Arguments
///
/// * `shape1` - The first shape.
/// * `shape2` - The second shape.
/// * `context` - The operation or call site doing the check.
///
/// # Errors
///
/// If the shapes differ, a [`ShapeError`] describing both shapes is returned.
///
/// Both shapes must implement [`fmt::Display`]. Raw dimension lists such as `&[usize]` or
/// `Vec<usize>` do not, so wrap them in a [`Shape`] first; `Shape` compares equal to raw
/// dimensions on either side.
///
/// # Example
///
/// ```
/// use shapeguard::{check::ensure_same_shape, Shape};
///
/// let a = Shape::from([2, 3]);
/// let b = Shape::from([2, 3]);
/// let c = Shape::from([3, 2]);
///
/// assert!(ensure_same_shape(&a, &b, "add").is_ok());
/// assert!(ensure_same_shape(&a, &c, "add").is_err());
///
/// let raw: &[usize] = &[2, 3];
/// assert!(ensure_same_shape(&Shape::from(raw), &a, "add").is_ok());
/// ```
pub fn ensure_same_shape<S1, S2>(
    shape1: S1,
    shape2: S2,
    context: impl fmt::Display,
) -> Result<(), ShapeError>
where
    S1: PartialEq<S2> + fmt::Display,
    S2: fmt::Display,
{
    match ShapeError::dimensions_mismatch(&shape1, &shape2, &context) {
        Some(err) => {
            log::debug!("shape mismatch in {context}: {shape1} != {shape2}");
            Err(err)
        }
        None => {
            log::trace!("shapes agree in {context}: {shape1}");
            Ok(())
        }
    }
}

/// Check that a single dimension has the expected value.
///
/// # Arguments
///
/// * `expected` - The expected value.
/// * `observed` - The observed value.
///
/// # Errors
///
/// If the values differ, a dimension mismatch [`ShapeError`] is returned.
pub fn ensure_dim<T>(expected: T, observed: T) -> Result<(), ShapeError>
where
    T: PartialEq + fmt::Display,
{
    if expected != observed {
        log::debug!("dimension mismatch: expected {expected}, got {observed}");
        return Err(ShapeError::dim_mismatch(expected, observed));
    }

    Ok(())
}

/// Check that a shape has the expected number of dimensions.
///
/// # Arguments
///
/// * `shape` - The shape to check.
/// * `ndim` - The expected number of dimensions.
/// * `context` - The operation or call site doing the check. Only used for logging.
///
/// # Errors
///
/// If the number of dimensions differs, a dimension mismatch [`ShapeError`] is returned.
/// Its message carries only the two ranks, so the context is lost unless a logger is
/// installed. Use [`ensure_same_shape`] when the call site must appear in the message.
pub fn ensure_ndim(
    shape: &Shape,
    ndim: usize,
    context: impl fmt::Display,
) -> Result<(), ShapeError> {
    if shape.ndim() != ndim {
        log::debug!(
            "rank mismatch in {context}: expected {ndim} dims, got {} for {shape}",
            shape.ndim()
        );
        return Err(ShapeError::dim_mismatch(ndim, shape.ndim()));
    }

    Ok(())
}

/// Check that every shape in a sequence equals the first one.
///
/// # Arguments
///
/// * `shapes` - The shapes to compare.
/// * `context` - The operation or call site doing the check.
///
/// # Errors
///
/// On the first shape that differs, a [`ShapeError`] with the first shape as `Shape1` and the
/// offending shape as `Shape2` is returned. An empty sequence is never an error.
///
/// # Example
///
/// ```
/// use shapeguard::{check::ensure_all_same, Shape};
///
/// let shapes = [Shape::from([4, 4]), Shape::from([4, 4]), Shape::from([4, 2])];
///
/// assert!(ensure_all_same(&shapes[..2], "stack").is_ok());
/// assert!(ensure_all_same(&shapes, "stack").is_err());
/// ```
pub fn ensure_all_same<I, S>(shapes: I, context: impl fmt::Display) -> Result<(), ShapeError>
where
    I: IntoIterator<Item = S>,
    S: PartialEq + fmt::Display,
{
    let mut iter = shapes.into_iter();
    let Some(first) = iter.next() else {
        return Ok(());
    };

    for (i, shape) in iter.enumerate() {
        if first != shape {
            log::debug!(
                "shape mismatch in {context}: item {} is {shape}, expected {first}",
                i + 1
            );
            return Err(ShapeError::new(first, shape, context));
        }
    }

    Ok(())
}
