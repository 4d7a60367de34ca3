// ABOUTME: Criterion benchmarks for the suggestion rules
// ABOUTME: Measures detector, health swap, and prediction cost over growing pantries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! Criterion benchmarks for the suggestion rules.
//!
//! Detection runs after every household mutation, so its cost over a large
//! inventory bounds how responsive the list stays.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutricart_core::constants::time::MS_PER_DAY;
use nutricart_core::{Category, GroceryItem, InventoryItem, Timestamp};
use nutricart_intelligence::{RulesConfig, RulesEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

const NOW: Timestamp = 1_700_000_000_000;

const NAMES: [&str; 12] = [
    "Milk",
    "White Bread",
    "Eggs",
    "Bananas",
    "Chicken Breast",
    "Spinach",
    "Greek Yogurt",
    "Rice",
    "Coffee",
    "Pasta",
    "Cereal",
    "Apples",
];

/// Mixed stock and history; every third item is consumed
#[allow(clippy::cast_possible_wrap)]
fn generate_inventory(count: usize) -> Vec<InventoryItem> {
    (0..count)
        .map(|index| {
            let days_ago = (index % 20) as i64;
            let purchased = NOW - days_ago * MS_PER_DAY;
            let item = GroceryItem::new(
                format!("inv{index}"),
                NAMES[index % NAMES.len()],
                Category::Other,
                purchased,
            )
            .checked();
            let stocked =
                InventoryItem::from_purchase(item, purchased, purchased + 7 * MS_PER_DAY);
            if index % 3 == 0 {
                stocked.consumed()
            } else {
                stocked
            }
        })
        .collect()
}

fn bench_detect_all(c: &mut Criterion) {
    let engine = RulesEngine::new(&RulesConfig::default());
    let list = vec!["Milk".to_owned(), "Tea".to_owned()];
    let mut group = c.benchmark_group("detect_all");

    for count in [10_usize, 100, 1_000, 5_000] {
        let inventory = generate_inventory(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &inventory, |b, inv| {
            b.iter(|| engine.detect_all(black_box(inv), black_box(&list), NOW));
        });
    }

    group.finish();
}

fn bench_health_swap(c: &mut Criterion) {
    let engine = RulesEngine::new(&RulesConfig::default());
    let mut group = c.benchmark_group("health_swap");

    group.bench_function("match", |b| {
        b.iter(|| engine.find_healthier_alternative(black_box("Organic White Bread")));
    });
    group.bench_function("no_match", |b| {
        b.iter(|| engine.find_healthier_alternative(black_box("Broccoli")));
    });

    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let engine = RulesEngine::new(&RulesConfig::default());
    let stock: Vec<String> = NAMES.iter().map(|name| (*name).to_owned()).collect();
    let recent: Vec<String> = ["Tea", "Honey", "Lemons", "Oats", "Butter"]
        .iter()
        .map(|name| (*name).to_owned())
        .collect();
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("predict_missing_items", |b| {
        b.iter(|| {
            engine.predict_missing_items_with_rng(black_box(&stock), black_box(&recent), &mut rng)
        });
    });
}

criterion_group!(
    benches,
    bench_detect_all,
    bench_health_swap,
    bench_prediction
);
criterion_main!(benches);
