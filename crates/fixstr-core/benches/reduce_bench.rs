use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};
use fixstr_core::reduce::{reduce_by_rescan, reduce_by_stack};

// ---------------------------------------------------------------------------
// Fixture data
// ---------------------------------------------------------------------------

/// `depth` nested pairs that fully collapse: "abc...CBA".
fn nested_collapse(depth: usize) -> String {
    let lower: String = (0..depth).map(|i| (b'a' + (i % 26) as u8) as char).collect();
    let upper: String = lower.chars().rev().map(|c| c.to_ascii_uppercase()).collect();
    format!("{lower}{upper}")
}

/// Mixed text where roughly one char in four cancels with its neighbour.
fn mixed_text(len: usize) -> String {
    (0..len)
        .map(|i| {
            let c = (b'a' + (i * 7 % 26) as u8) as char;
            if i % 4 == 1 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Strategy comparison
// ---------------------------------------------------------------------------

fn bench_nested_collapse(c: &mut Criterion) {
    let input = nested_collapse(200);

    c.bench_function("stack/nested_400", |b: &mut Bencher| {
        b.iter(|| reduce_by_stack(black_box(&input)))
    });
    c.bench_function("rescan/nested_400", |b: &mut Bencher| {
        b.iter(|| reduce_by_rescan(black_box(&input)))
    });
}

fn bench_mixed_text(c: &mut Criterion) {
    let input = mixed_text(2000);

    c.bench_function("stack/mixed_2000", |b: &mut Bencher| {
        b.iter(|| reduce_by_stack(black_box(&input)))
    });
    c.bench_function("rescan/mixed_2000", |b: &mut Bencher| {
        b.iter(|| reduce_by_rescan(black_box(&input)))
    });
}

criterion_group!(reduce_benches, bench_nested_collapse, bench_mixed_text);
criterion_main!(reduce_benches);
