//! パフォーマンスベンチマーク
//!
//! このモジュールは、uxtidfmtクレートのパフォーマンスを測定するための
//! ベンチマークを提供します。
//!
//! 実装するベンチマーク:
//! - プレーンテキスト入力に対するパイプライン全体の処理速度
//! - 区切りテキスト入力に対するパイプライン全体の処理速度
//!
//! 入力はメモリ上で合成するため、フィクスチャファイルは不要です。

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io::Cursor;
use uxtidfmt::{FormatterBuilder, InputFormat};

/// 行数を指定してプレーンテキスト入力を合成する
fn synth_plain_text(rows: usize) -> String {
    let mut content = String::from("UXTID\n");
    for i in 0..rows {
        content.push_str(&format!("2025-01-01\tABCCOB1F{:022}\tSUCCESS\n", i));
    }
    content.push_str("STATUS\n");
    content
}

/// 行数を指定して区切りテキスト入力を合成する
fn synth_csv(rows: usize) -> String {
    let mut content = String::from("UXTID\n");
    for i in 0..rows {
        content.push_str(&format!("2025-01-01,ABCCOB1F{:022},SUCCESS\n", i));
    }
    content.push_str("STATUS\n");
    content
}

/// プレーンテキスト入力のパイプライン全体
fn benchmark_plain_text_pipeline(c: &mut Criterion) {
    let content = synth_plain_text(10_000);
    let formatter = FormatterBuilder::new().build().unwrap();

    let mut group = c.benchmark_group("plain_text_pipeline");
    group.throughput(Throughput::Bytes(content.len() as u64));
    group.bench_function("10k_rows", |b| {
        b.iter(|| {
            let result = formatter
                .format_to_string(
                    Cursor::new(black_box(content.as_bytes())),
                    InputFormat::PlainText,
                )
                .unwrap();
            black_box(result);
        });
    });
    group.finish();
}

/// 区切りテキスト入力のパイプライン全体
fn benchmark_csv_pipeline(c: &mut Criterion) {
    let content = synth_csv(10_000);
    let formatter = FormatterBuilder::new().build().unwrap();

    let mut group = c.benchmark_group("csv_pipeline");
    group.throughput(Throughput::Bytes(content.len() as u64));
    group.bench_function("10k_rows", |b| {
        b.iter(|| {
            let result = formatter
                .format_to_string(
                    Cursor::new(black_box(content.as_bytes())),
                    InputFormat::Delimited,
                )
                .unwrap();
            black_box(result);
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_plain_text_pipeline, benchmark_csv_pipeline);
criterion_main!(benches);
