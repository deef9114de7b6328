use bignat::BigInt;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const MODULUS_HEX: &str = "d94d889e88853dd89769a18015a0a2e6bf82bf356fe14f251fb4f5e2df0d9f9a94a68a30c428b39e3362fb3779a497eceaea37100f264d7fb9fb1a97fbf621133de55fdcb9b1ad0d7a31b379216d79252f5c527b9bc63d83d4ecf4d1d45cbf843e8474babc655e9bb6799cba77a47eafa838296474afc24beb9c825b73ebf549";

pub fn bench_pow_mod(c: &mut Criterion) {
    let modulus = BigInt::from_hex(MODULUS_HEX).unwrap();
    let exponent = BigInt::from_hex("010001").unwrap();
    let message = BigInt::from(0xABCD_EF12_34u64);

    c.bench_function("pow_mod 1024-bit modulus", |b| {
        b.iter(|| {
            black_box(&message)
                .pow_mod(black_box(&exponent), black_box(&modulus))
                .unwrap()
        })
    });

    let small_modulus = BigInt::from(0xFFFF_FFFBu64);
    c.bench_function("pow_mod 32-bit modulus", |b| {
        b.iter(|| {
            black_box(&message)
                .pow_mod(black_box(&exponent), black_box(&small_modulus))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_pow_mod);
criterion_main!(benches);
