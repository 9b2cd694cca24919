use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array3;
use qwires::{Bound, ParameterValidator, Shape, ShapeValidator, Value, Wires};

fn nested_weights(layers: usize, wires: usize) -> Value {
    Value::from(vec![vec![vec![0.5_f64; 3]; wires]; layers])
}

fn bench_get_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_shape");
    for layers in [1, 16, 256] {
        let value = nested_weights(layers, 8);
        group.bench_with_input(BenchmarkId::new("nested_list", layers), &value, |b, v| {
            b.iter(|| ShapeValidator::get_shape(black_box(v)))
        });
    }

    let array = Value::from(Array3::<f64>::zeros((256, 8, 3)));
    group.bench_function("array", |b| {
        b.iter(|| ShapeValidator::get_shape(black_box(&array)))
    });
    group.finish();
}

fn bench_check_shape(c: &mut Criterion) {
    let value = nested_weights(16, 8);
    let target = Shape::from([32, 8, 3]);
    c.bench_function("check_shape_max", |b| {
        b.iter(|| {
            ShapeValidator::check_shape(black_box(&value), &target, Some(Bound::Max), "weights")
        })
    });

    let params: Vec<Value> = (0..8).map(|_| nested_weights(16, 4)).collect();
    c.bench_function("check_number_of_layers", |b| {
        b.iter(|| ParameterValidator::check_number_of_layers(black_box(&params)))
    });
}

fn bench_wires(c: &mut Criterion) {
    let mut group = c.benchmark_group("wires_construction");
    for size in [8_usize, 128, 4096] {
        let ints: Vec<i64> = (0..size as i64).rev().collect();
        let floats: Vec<f64> = (0..size).map(|i| i as f64).collect();

        group.bench_with_input(BenchmarkId::new("ints", size), &ints, |b, ints| {
            b.iter(|| Wires::try_from(black_box(ints.clone())))
        });
        group.bench_with_input(BenchmarkId::new("floats", size), &floats, |b, floats| {
            b.iter(|| Wires::try_from(black_box(floats.as_slice())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_get_shape, bench_check_shape, bench_wires);
criterion_main!(benches);
