use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use classic_ciphers::{decrypt, encrypt, CipherKind, Keys};
use classic_core::{normalize_text, Escapes, KeyMatrix};

fn sample_text(len: usize) -> String {
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let pool = b"abcdefghijklmnopqrstuvwxyz0123456789    ";
    (0..len)
        .map(|_| char::from(pool[rng.gen_range(0..pool.len())]))
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let text = sample_text(4096);
    let config = CipherKind::Playfair.config();

    let mut group = c.benchmark_group("engine");
    group.bench_function("normalize_4k", |b| {
        b.iter(|| normalize_text(&text, &config.alphabet, Escapes::Tokens));
    });
    group.bench_function("key_matrix", |b| {
        b.iter(|| KeyMatrix::build("the quick brown fox", &config.alphabet));
    });
    group.finish();
}

fn bench_ciphers(c: &mut Criterion) {
    let text = sample_text(4096);
    let keys = Keys::new("na1c3h8tb2ome5wrpd4f6g7i9j0klqsuvxyz", "privacy");

    let mut group = c.benchmark_group("ciphers");
    group.sample_size(20);
    for kind in CipherKind::ALL {
        let config = kind.config();
        let sealed = encrypt(&text, &keys, &config).expect("encrypt");
        group.bench_function(format!("{}_encrypt_4k", kind.name()), |b| {
            b.iter(|| encrypt(&text, &keys, &config));
        });
        group.bench_function(format!("{}_decrypt_4k", kind.name()), |b| {
            b.iter(|| decrypt(&sealed.ciphertext, &keys, &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine, bench_ciphers);
criterion_main!(benches);
