use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizrun_core::model::QuizResult;
use quizrun_core::parser::parse_questions_str;
use quizrun_core::statistics::HistoryStats;

fn bench_question_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("question_parsing");

    let small = generate_question_file(5);
    let medium = generate_question_file(100);
    let large = generate_question_file(2_000);

    group.bench_function("5_questions", |b| {
        b.iter(|| parse_questions_str(black_box(&small), black_box("bench.txt".as_ref())))
    });

    group.bench_function("100_questions", |b| {
        b.iter(|| parse_questions_str(black_box(&medium), black_box("bench.txt".as_ref())))
    });

    group.bench_function("2000_questions", |b| {
        b.iter(|| parse_questions_str(black_box(&large), black_box("bench.txt".as_ref())))
    });

    group.finish();
}

fn bench_history_stats(c: &mut Criterion) {
    let history: Vec<QuizResult> = (0..10_000)
        .map(|i| QuizResult::new(i % 11, 10 + (i % 3)))
        .collect();

    c.bench_function("history_stats_10k", |b| {
        b.iter(|| HistoryStats::compute(black_box(&history)))
    });
}

fn generate_question_file(n: usize) -> String {
    let mut s = String::from("Benchmark\n---------\n");
    for i in 0..n {
        s.push_str(&format!("Question number {i}?\n"));
        if i % 10 == 9 {
            s.push('\n');
        }
    }
    s
}

criterion_group!(benches, bench_question_parsing, bench_history_stats);
criterion_main!(benches);
