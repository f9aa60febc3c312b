#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use shipping_quote::application::services::{FixedOriginResolver, GroupingPolicy, group_by_shop};
use shipping_quote::domain::entities::{CartLine, Dimensions};
use shipping_quote::domain::value_objects::{ProductId, ShopId};
use std::hint::black_box;

fn cart(lines: usize, shops: usize) -> Vec<CartLine> {
    (0..lines)
        .map(|i| {
            CartLine::new(
                ProductId::new(format!("p-{}", i)),
                ShopId::new(format!("shop-{}", i % shops)),
                u32::try_from(i % 4 + 1).unwrap_or(1),
            )
            .with_unit_price_minor(i64::try_from(i).unwrap_or(0) * 10_000 + 150_000, "COP")
            .with_weight(Decimal::new(12, 1))
            .with_dimensions(Dimensions::new(
                Decimal::from(30),
                Decimal::from(20),
                Decimal::from(10),
            ))
        })
        .collect()
}

fn bench_group_by_shop(c: &mut Criterion) {
    let resolver = FixedOriginResolver::default();
    let policy = GroupingPolicy::default();
    let mut group = c.benchmark_group("shipping.group_by_shop");

    for (lines, shops) in [(10, 3), (100, 10), (1_000, 50)] {
        let input = cart(lines, shops);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", lines, shops)),
            &input,
            |b, input| b.iter(|| group_by_shop(black_box(input), &resolver, &policy)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_group_by_shop);
criterion_main!(benches);
