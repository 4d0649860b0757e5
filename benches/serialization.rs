use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_ako::{from_str, parse, serialize, to_string, tokenize, AkoOptions};

#[derive(Serialize, Deserialize, Clone)]
struct Window {
    title: String,
    size: [u32; 2],
    position: [i32; 2],
    fullscreen: bool,
    scale: f64,
}

#[derive(Serialize, Deserialize, Clone)]
struct Entity {
    name: String,
    position: [f64; 3],
    rotation: [f64; 4],
    hp: u32,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Scene {
    window: Window,
    entities: Vec<Entity>,
}

fn window() -> Window {
    Window {
        title: "Ako".to_string(),
        size: [1280, 720],
        position: [100, 100],
        fullscreen: false,
        scale: 1.5,
    }
}

fn scene(size: u32) -> Scene {
    Scene {
        window: window(),
        entities: (0..size)
            .map(|i| Entity {
                name: format!("entity_{}", i),
                position: [f64::from(i), 0.5, 2.0],
                rotation: [0.0, 0.0, 0.0, 1.0],
                hp: 100 + i,
                tags: vec!["npc".to_string(), "spawned".to_string()],
            })
            .collect(),
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let window = window();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&window)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let ako = "title \"Ako\" size 1280x720 position 100x100 -fullscreen scale 1.5";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<Window>(black_box(ako)))
    });
}

fn benchmark_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [10, 100, 500].iter() {
        let ako = to_string(&scene(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &ako, |b, ako| {
            b.iter(|| tokenize(black_box(ako)))
        });
    }
    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 500].iter() {
        let ako = to_string(&scene(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &ako, |b, ako| {
            b.iter(|| parse(black_box(ako)))
        });
    }
    group.finish();
}

fn benchmark_serialize_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_value");

    for size in [10, 100, 500].iter() {
        let value = serde_ako::to_value(&scene(*size)).unwrap();

        group.bench_with_input(BenchmarkId::new("formatted", size), &value, |b, value| {
            b.iter(|| serialize(black_box(value), &AkoOptions::new()))
        });
        group.bench_with_input(BenchmarkId::new("compact", size), &value, |b, value| {
            b.iter(|| serialize(black_box(value), &AkoOptions::compact()))
        });
    }
    group.finish();
}

fn benchmark_deserialize_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_scene");

    for size in [10, 100, 500].iter() {
        let ako = to_string(&scene(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &ako, |b, ako| {
            b.iter(|| from_str::<Scene>(black_box(ako)))
        });
    }
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let data = scene(100);
    let mut group = c.benchmark_group("ako_vs_json");

    group.bench_function("ako_serialize", |b| b.iter(|| to_string(black_box(&data))));
    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&data)))
    });

    let ako = to_string(&data).unwrap();
    let json = serde_json::to_string(&data).unwrap();

    group.bench_function("ako_deserialize", |b| {
        b.iter(|| from_str::<Scene>(black_box(&ako)))
    });
    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Scene>(black_box(&json)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_tokenize,
    benchmark_parse,
    benchmark_serialize_value,
    benchmark_deserialize_scene,
    benchmark_comparison_with_json
);
criterion_main!(benches);
