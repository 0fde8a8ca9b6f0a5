use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pkcs7::{pad, pad_uncached, unpad, PaddingTable};

fn criterion_benchmark(c: &mut Criterion) {
    let plaintext = vec![0x5A; 1000];
    let table = PaddingTable::new(16).unwrap();

    c.bench_function("pad shared table", |b| {
        b.iter(|| pad(black_box(&plaintext), black_box(16)))
    });
    c.bench_function("pad uncached", |b| {
        b.iter(|| pad_uncached(black_box(&plaintext), black_box(16)))
    });
    c.bench_function("pad owned table", |b| {
        b.iter(|| table.pad(black_box(&plaintext)))
    });

    // Alternating sizes forces a rebuild on every call
    c.bench_function("pad alternating sizes", |b| {
        let mut size = 16;
        b.iter(|| {
            size = if size == 16 { 32 } else { 16 };
            pad(black_box(&plaintext), size)
        })
    });

    let padded = pad(&plaintext, 16);
    c.bench_function("unpad", |b| b.iter(|| unpad(black_box(&padded))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
