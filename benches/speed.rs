use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use idea_cipher::cipher::{Block, BlockDecrypt, BlockEncrypt, Key, KeyInit};
use idea_cipher::{BLOCK_SIZE, Idea};

// Benchmarks single-block throughput; IDEA has no cross-block state, so
// multi-block throughput is this figure times the block count.
fn benchmarks(c: &mut Criterion) {
    let key = Key::<Idea>::default();
    let cipher = Idea::new(&key);

    let mut group = c.benchmark_group("idea-block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    let mut block = Block::<Idea>::default();
    group.bench_function("encrypt", |b| b.iter(|| cipher.encrypt_block(&mut block)));
    group.bench_function("decrypt", |b| b.iter(|| cipher.decrypt_block(&mut block)));
    group.finish();

    // Schedule expansion dominates one-shot use, so measure it separately.
    c.bench_function("key-schedule", |b| b.iter(|| Idea::new(&key)));
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
