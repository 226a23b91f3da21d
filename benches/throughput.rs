use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rust_decimal::Decimal;
use rusty_tally::{Category, Filter, Ledger, LedgerHandle, PageRequest, TransactionInput};
use std::time::Duration;
use tokio::runtime::Runtime;

const NUM_TRANSACTIONS: u64 = 100_000;

/// Deterministic inputs spread over one year and every category.
fn inputs() -> Vec<TransactionInput> {
    let start = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..NUM_TRANSACTIONS)
        .map(|i| {
            let category = Category::ALL[(i % Category::ALL.len() as u64) as usize];
            TransactionInput {
                description: format!("transaction {i}"),
                amount: category.signed(Decimal::new((i % 50_000) as i64 + 1, 2)),
                category,
                date: start + chrono::Days::new(i % 365),
            }
        })
        .collect()
}

fn filled_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    for input in inputs() {
        ledger.create(input).unwrap();
    }
    ledger
}

fn mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    group.throughput(Throughput::Elements(NUM_TRANSACTIONS));
    group.measurement_time(Duration::from_secs(20));
    group.sample_size(20);

    group.bench_function("sync_create_100K_transactions", |b| {
        b.iter_batched(
            inputs,
            |inputs| {
                let mut ledger = Ledger::new();
                for input in inputs {
                    ledger.create(input).unwrap();
                }
                ledger
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("async_create_100K_transactions", |b| {
        let rt = Runtime::new().unwrap();
        b.to_async(rt).iter_batched(
            inputs,
            |inputs| async move {
                let (handle, service) = LedgerHandle::spawn(Ledger::new());
                for input in inputs {
                    handle.create(input).await.unwrap();
                }
                drop(handle);
                service.await.unwrap()
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn queries(c: &mut Criterion) {
    let ledger = filled_ledger();
    let mut group = c.benchmark_group("queries");

    group.throughput(Throughput::Elements(NUM_TRANSACTIONS));
    group.sample_size(50);

    group.bench_function("query_first_page_unfiltered", |b| {
        b.iter(|| ledger.query(black_box(&Filter::default()), PageRequest::default()));
    });

    let filter = Filter::default().category(Category::Food).between(
        chrono::NaiveDate::from_ymd_opt(2025, 3, 1),
        chrono::NaiveDate::from_ymd_opt(2025, 6, 30),
    );
    group.bench_function("query_category_and_dates", |b| {
        b.iter(|| ledger.query(black_box(&filter), PageRequest::default()));
    });

    group.bench_function("by_category", |b| b.iter(|| ledger.by_category()));
    group.bench_function("reconcile", |b| b.iter(|| ledger.reconcile()));

    group.finish();
}

criterion_group!(benches, mutations, queries);
criterion_main!(benches);
