use shapeguard::{check::ensure_same_shape, Shape, ShapeError};
use std::sync::Arc;
use std::thread;

const NUM_THREADS: usize = 8;
const ERRORS_PER_THREAD: usize = 1250;

fn assert_send_sync<T: Send + Sync + 'static>() {}

#[test]
fn test_shape_error_is_send_sync() {
    assert_send_sync::<ShapeError>();
    assert_send_sync::<Shape>();
}

/// Build and drop 10,000 errors across threads and check every message is intact.
#[test]
fn test_concurrent_construction() {
    let reference = Arc::new(Shape::from([3, 4]));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let reference = Arc::clone(&reference);
            thread::spawn(move || {
                let mut built = 0;
                for i in 0..ERRORS_PER_THREAD {
                    let observed = Shape::from([t, i]);
                    let context = format!("thread {t} item {i}");

                    let err = ShapeError::new(reference.as_ref(), &observed, &context);
                    let expected = format!(
                        "In the context of {context}:\n\nShape1 != Shape2\n\nWhere:\n\nShape1=(3, 4)\nShape2={observed}"
                    );
                    assert_eq!(err.to_string(), expected);

                    let dim = ShapeError::dim_mismatch(t, i);
                    assert_eq!(dim.to_string(), format!("Dimension mismatch: {t} vs {i}"));

                    built += 1;
                }
                built
            })
        })
        .collect();

    let total: usize = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"))
        .sum();

    assert_eq!(total, NUM_THREADS * ERRORS_PER_THREAD);
}

/// Errors created on one thread can be returned to and inspected on another.
#[test]
fn test_error_crosses_threads() {
    let handle = thread::spawn(|| {
        ensure_same_shape(Shape::from([2, 2]), Shape::from([2, 3]), "worker")
            .map_err(|e| e.with_source("batch 7 rejected"))
    });

    let err = handle
        .join()
        .expect("worker thread panicked")
        .expect_err("shapes differ");

    assert!(err.to_string().contains("In the context of worker:"));
    assert_eq!(
        std::error::Error::source(&err).map(|s| s.to_string()),
        Some("batch 7 rejected".to_string())
    );
}
