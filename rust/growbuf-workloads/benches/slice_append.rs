use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use growbuf_workloads::{AppendInput, AppendStrategy, SliceAppendCase};
use std::hint::black_box;

const SEED: u64 = 0xa99e;

fn bench_append<T: Clone>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    element: &str,
    input: &AppendInput<T>,
) {
    for strategy in AppendStrategy::ALL {
        group.bench_with_input(
            BenchmarkId::new(strategy.name(), element),
            input,
            |b, input| {
                b.iter_batched(
                    || input.make_base(),
                    |base| black_box(strategy.run(base, &input.tail, input.case.rounds)),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_slice_append(c: &mut Criterion) {
    for case in SliceAppendCase::default_cases() {
        let mut group = c.benchmark_group(case.name());
        group.throughput(Throughput::Elements((case.tail_len * case.rounds) as u64));

        let strings = AppendInput::strings(case, SEED).expect("default case is valid");
        bench_append(&mut group, "string", &strings);

        let records = AppendInput::records(case, SEED).expect("default case is valid");
        bench_append(&mut group, "record", &records);

        group.finish();
    }
}

criterion_group!(benches, bench_slice_append);
criterion_main!(benches);
