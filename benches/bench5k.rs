use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_book::prelude::ContactBook;

// Helper to create a book prepopulated with `n` contacts. Phone numbers are
// generated from the index so the uniqueness rule never trips.
fn make_book_with_n(n: usize) -> ContactBook {
    let mut book = ContactBook::new();
    for i in 1..=n {
        let phone = format!("09{:09}", i);
        book.add(&i.to_string(), &format!("User{i}"), &phone)
            .expect("seed contact");
    }
    book
}

fn bench_5k(c: &mut Criterion) {
    let book = make_book_with_n(5_000);

    c.bench_function("list_all 5k", |b| b.iter(|| black_box(book.list_all())));

    c.bench_function("find 5k", |b| b.iter(|| black_box(book.find("2500"))));

    c.bench_function("add+delete 5k", |b| {
        b.iter_batched(
            || make_book_with_n(5_000),
            |mut book| {
                book.add("5001", "NewUser", "09999999999").expect("add");
                book.delete("5001").expect("delete");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_5k);
criterion_main!(benches);
