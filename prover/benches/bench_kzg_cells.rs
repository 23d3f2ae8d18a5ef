use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_peerdas_kzg_primitives::{blob::Blob, srs::SRS};
use rust_peerdas_kzg_prover::kzg::KZG;
use std::time::Duration;

fn bench_kzg_cells(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(77);
    let srs = SRS::insecure_random_setup(&mut rng);
    let kzg = KZG::new().unwrap();

    let raw: Vec<u8> = (0..100_000).map(|_| rng.gen()).collect();
    let blob = Blob::from_raw_data(&raw).unwrap();

    c.bench_function("bench_blob_to_kzg_commitment", |b| {
        b.iter(|| kzg.blob_to_kzg_commitment(&blob, &srs).unwrap());
    });

    c.bench_function("bench_compute_cells", |b| {
        b.iter(|| kzg.compute_cells(&blob).unwrap());
    });

    c.bench_function("bench_compute_cells_and_kzg_proofs", |b| {
        b.iter(|| kzg.compute_cells_and_kzg_proofs(&blob, &srs).unwrap());
    });
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(10))
        .sample_size(10)
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_kzg_cells
);
criterion_main!(benches);
