use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minizone::{FULL_TIMEZONE_LIST, get_by_tz_code};

fn bench_get_by_tz_code(c: &mut Criterion) {
    // Worst case for the scan path: the last row of the table.
    let last = FULL_TIMEZONE_LIST[FULL_TIMEZONE_LIST.len() - 1].tz_code;

    c.bench_function("get_by_tz_code first row", |b| {
        b.iter(|| get_by_tz_code(black_box("Pacific/Pago_Pago")))
    });
    c.bench_function("get_by_tz_code last row", |b| {
        b.iter(|| get_by_tz_code(black_box(last)))
    });
    c.bench_function("get_by_tz_code miss", |b| {
        b.iter(|| get_by_tz_code(black_box("Mars/Olympus_Mons")))
    });
}

criterion_group!(benches, bench_get_by_tz_code);
criterion_main!(benches);
