use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::Arc;

use chrono::Utc;
use vendo_core::ProductId;
use vendo_engine::StockService;
use vendo_orders::{OrderItem, validate_items, validate_totals};
use vendo_products::Product;
use vendo_stock::{MovementDirection, MovementDraft, MovementEntry};
use vendo_store::{InMemoryStore, ProductStore};

fn make_items(count: usize) -> Vec<OrderItem> {
    (0..count)
        .map(|i| {
            let quantity = (i as i64 % 9) + 1;
            let unit_price = 500 + i as i64;
            OrderItem {
                product_id: ProductId::new(),
                quantity,
                unit_price,
                total: quantity * unit_price,
            }
        })
        .collect()
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_validation");

    for count in [1usize, 10, 100] {
        let items = make_items(count);
        let subtotal: i64 = items.iter().map(|i| i.total).sum();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("items", count), &items, |b, items| {
            b.iter(|| {
                validate_items(black_box(items)).unwrap();
                validate_totals(black_box(items), black_box(subtotal), black_box(10)).unwrap();
            })
        });
    }

    group.finish();
}

fn seeded_service(products: usize, stock: i64) -> (StockService, Vec<ProductId>) {
    let store = Arc::new(InMemoryStore::new());
    let ids: Vec<ProductId> = (0..products)
        .map(|i| {
            let product = Product::new(
                ProductId::new(),
                format!("SKU-{i}"),
                format!("Product {i}"),
                1000,
                Utc::now(),
            )
            .with_stock(stock);
            let id = product.id;
            store.save(product).unwrap();
            id
        })
        .collect();
    (StockService::new(store), ids)
}

fn bench_stock_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("stock_reconciliation");

    for entries in [1usize, 10, 50] {
        // Plenty of stock so every batch commits.
        let (service, ids) = seeded_service(entries, i64::MAX / 2);

        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(BenchmarkId::new("batch", entries), &ids, |b, ids| {
            b.iter(|| {
                let draft = MovementDraft {
                    direction: MovementDirection::Out,
                    description: "bench batch".into(),
                    entries: ids
                        .iter()
                        .map(|&product_id| MovementEntry {
                            product_id,
                            quantity: 1,
                        })
                        .collect(),
                };
                service.create_movement(black_box(draft)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validation, bench_stock_batch);
criterion_main!(benches);
