use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use growbuf_workloads::{ConcatStrategy, ResetStrategy, SegmentSet, StringBuildCase};
use std::hint::black_box;

const SEED: u64 = 0x5eed;

fn bench_concat(c: &mut Criterion) {
    for case in StringBuildCase::default_cases() {
        let set = SegmentSet::generate(case.num_segments, case.segment_length, SEED);
        let hint = case.size_hint();

        let mut group = c.benchmark_group(case.concat_name());
        group.throughput(Throughput::Bytes(set.total_len() as u64));

        for strategy in ConcatStrategy::ALL {
            group.bench_function(strategy.name(), |b| {
                b.iter(|| black_box(strategy.build(black_box(set.as_slice()), hint)));
            });
        }

        group.finish();
    }
}

fn bench_reset(c: &mut Criterion) {
    for case in StringBuildCase::default_cases() {
        let set = SegmentSet::generate(case.num_segments, case.segment_length, SEED);

        let mut group = c.benchmark_group(case.reset_name());
        group.throughput(Throughput::Bytes(set.total_len() as u64));

        for strategy in ResetStrategy::ALL {
            group.bench_function(strategy.name(), |b| {
                b.iter(|| {
                    black_box(strategy.run(black_box(set.as_slice()), case.clear_frequency))
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_concat, bench_reset);
criterion_main!(benches);
