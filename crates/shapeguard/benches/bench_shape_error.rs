use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shapeguard::{check::ensure_same_shape, Shape, ShapeError};

fn bench_shape_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_error");

    for ndim in [1, 4, 16] {
        let a = Shape::new(vec![3; ndim]);
        let b = Shape::new(vec![4; ndim]);

        group.bench_function(format!("new_ndim_{}", ndim), |bencher| {
            bencher.iter(|| black_box(ShapeError::new(&a, &b, "matmul")))
        });

        group.bench_function(format!("guard_equal_ndim_{}", ndim), |bencher| {
            bencher.iter(|| black_box(ensure_same_shape(&a, &a, "matmul").is_ok()))
        });

        group.bench_function(format!("guard_unequal_ndim_{}", ndim), |bencher| {
            bencher.iter(|| black_box(ensure_same_shape(&a, &b, "matmul").is_err()))
        });
    }

    group.bench_function("dim_mismatch", |bencher| {
        bencher.iter(|| black_box(ShapeError::dim_mismatch("int32", "float64")))
    });

    group.finish();
}

criterion_group!(benches, bench_shape_error);
criterion_main!(benches);
