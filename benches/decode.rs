use cashaddr::{decode, encode, AddressType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("decode address", |b| {
        b.iter(|| decode(black_box("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a")))
    });
    c.bench_function("encode address", |b| {
        b.iter(|| encode(black_box("bitcoincash"), 0, AddressType::P2pkh, black_box(&[0x5a; 20])))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
