use commit_range::{ComRangeProof, RangeProver};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::thread_rng;
use range_core::Scalar;

fn bench_range_proof(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_range_proof");
    let mut rng = thread_rng();

    for &bit_length in &[8usize, 16, 32] {
        let prover = RangeProver::new(bit_length).unwrap();
        let value = ((1u64 << bit_length) - 1) as i64;
        let blinding = Scalar::random(&mut rng);
        let commitment = prover.generators().commit(Scalar::from(value as u64), blinding);

        group.bench_with_input(BenchmarkId::new("prove", bit_length), &bit_length, |b, _| {
            b.iter(|| {
                prover
                    .prove(black_box(value), &blinding, &commitment, &mut thread_rng())
                    .unwrap()
            });
        });

        let proof = prover.prove(value, &blinding, &commitment, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("verify", bit_length), &bit_length, |b, _| {
            b.iter(|| black_box(&proof).verify().unwrap());
        });

        let bytes = proof.to_bytes().unwrap();
        group.bench_with_input(BenchmarkId::new("decode", bit_length), &bit_length, |b, _| {
            b.iter(|| ComRangeProof::from_bytes(black_box(&bytes)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_range_proof);
criterion_main!(benches);
