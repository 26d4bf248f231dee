//! Benchmarks for feature encoding
//!
//! Run with: cargo bench --package pipeline

use catalog::{Product, Recipe};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::encode_presence_matrix;

fn build_catalog(n_products: usize, n_recipes: usize) -> (Vec<Product>, Vec<Recipe>) {
    let products: Vec<Product> = (0..n_products)
        .map(|i| Product {
            name: format!("product-{}", i),
        })
        .collect();

    // Each recipe lists every fifth product, so rows are sparse but not empty.
    let recipes: Vec<Recipe> = (0..n_recipes)
        .map(|i| {
            let ingredients: Vec<String> = (0..n_products)
                .filter(|j| (i + j) % 5 == 0)
                .map(|j| format!("product-{}", j))
                .collect();
            Recipe {
                id: i as u64,
                name: format!("recipe-{}", i),
                ingredients: ingredients.join(", "),
            }
        })
        .collect();

    (products, recipes)
}

fn bench_encode_presence_matrix(c: &mut Criterion) {
    let (products, recipes) = build_catalog(200, 500);

    c.bench_function("encode_presence_matrix_200x500", |b| {
        b.iter(|| {
            let matrix = encode_presence_matrix(black_box(&products), black_box(&recipes));
            black_box(matrix)
        })
    });
}

criterion_group!(benches, bench_encode_presence_matrix);
criterion_main!(benches);
