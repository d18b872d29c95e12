use std::hint::black_box;
use std::io::Write;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;
use symmetric_cipher::crypto::algorithm::{decrypt, encrypt};
use symmetric_cipher::crypto::cipher_key::CipherKey;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::modes::{Cbc, Ctr, Ecb, Mode};
use symmetric_cipher::crypto::padding::Pkcs7;
use tempfile::NamedTempFile;

/// Накладные расходы движка без стоимости самого шифра.
struct IdentityCipher;

impl BlockCipher for IdentityCipher {
    const NAME: &'static str = "identity";
    const BLOCK_SIZE: usize = 16;
    const KEY_SIZES: &'static [usize] = &[16];

    fn with_key(_: &CipherKey<Self>) -> Self {
        IdentityCipher
    }
    fn encrypt_block(&self, _: &mut [u8]) {}
    fn decrypt_block(&self, _: &mut [u8]) {}
}

const KEY: [u8; 16] = [0u8; 16];
const IV: [u8; 16] = [0x24; 16];

fn bench_mode<M: Mode>(c: &mut Criterion, data: &[u8], iv: Option<&[u8]>) {
    let mut group = c.benchmark_group(format!("identity {}", M::NAME));
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_with_input(BenchmarkId::new("encrypt", data.len()), data, |b, data| {
        b.iter(|| encrypt::<IdentityCipher, M, Pkcs7>(black_box(data), &KEY, iv).unwrap())
    });
    let ciphertext = encrypt::<IdentityCipher, M, Pkcs7>(data, &KEY, iv).unwrap();
    group.bench_with_input(
        BenchmarkId::new("decrypt", data.len()),
        &ciphertext,
        |b, ct| b.iter(|| decrypt::<IdentityCipher, M, Pkcs7>(black_box(ct), &KEY, iv).unwrap()),
    );
    group.finish();
}

fn bench_engine_overhead(c: &mut Criterion) {
    let mut data = vec![0u8; 1024 * 1024];
    rand::rng().fill_bytes(&mut data);

    bench_mode::<Ecb>(c, &data, None);
    bench_mode::<Cbc>(c, &data, Some(&IV));
    bench_mode::<Ctr>(c, &data, Some(&IV));
}

fn bench_file_roundtrip(c: &mut Criterion) {
    let mut input_file = NamedTempFile::new().unwrap();
    let mut buffer = vec![0u8; 1024 * 1024];
    let mut rng = rand::rng();
    for _ in 0..16 {
        rng.fill_bytes(&mut buffer);
        input_file.write_all(&buffer).unwrap();
    }
    let input = std::fs::read(input_file.path()).unwrap();

    let mut group = c.benchmark_group("File Encryption 16MB");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function(BenchmarkId::new("CBC File Encrypt", "16MB"), |b| {
        b.iter(|| encrypt::<IdentityCipher, Cbc, Pkcs7>(black_box(&input), &KEY, Some(&IV)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_engine_overhead, bench_file_roundtrip);
criterion_main!(benches);
