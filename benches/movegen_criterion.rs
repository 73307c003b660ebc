use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quince_checkers::board::board::{perft, Board};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    descriptor: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        descriptor: "B:W21,22,23,24,25,26,27,28,29,30,31,32:B1,2,3,4,5,6,7,8,9,10,11,12",
        expected_nodes: &[7, 49, 302, 1469, 7361],
    },
    BenchCase {
        name: "midgame",
        descriptor: "B:W18,19,21,25,K29:B5,6,9,11,K12",
        expected_nodes: &[7],
    },
];

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(30);

    for case in CASES {
        let board = Board::from_descriptor(case.descriptor).expect("benchmark descriptor parses");

        group.bench_function(BenchmarkId::new("generate_moves", case.name), |b| {
            b.iter(|| black_box(&board).generate_moves().len());
        });

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u32;

            // Correctness guard before benchmarking.
            let mut warmup = board;
            assert_eq!(
                perft(&mut warmup, depth),
                *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name,
                depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            group.bench_with_input(
                BenchmarkId::new("perft", bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let mut bench_board = board;
                        let nodes = perft(black_box(&mut bench_board), black_box(depth));
                        assert_eq!(nodes, *expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(movegen_benches, bench_movegen);
criterion_main!(movegen_benches);
