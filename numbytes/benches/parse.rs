use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use numbytes::{decimal_to_f64, defaults, parse_all, parse_f64, BatchConfig, Cursor, Encoding, TableConfig};
use rand::{Rng, SeedableRng};

fn corpus(count: usize) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xBE7C);
    std::iter::repeat_with(|| f64::from_bits(rng.gen::<u64>()))
        .filter(|value| value.is_finite())
        .take(count)
        .map(|value| format!("{value:e}"))
        .collect()
}

fn bench_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_to_f64");
    for (name, digits, scale) in [
        ("short", &b"125"[..], 1),
        ("full", &b"179769313486231570"[..], 309),
        ("subnormal", &b"49406564584124654"[..], -323),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| decimal_to_f64(black_box(digits), black_box(scale), false))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let texts = corpus(1024);
    let bytes: usize = texts.iter().map(String::len).sum();
    let mut group = c.benchmark_group("parse_f64");
    group.throughput(Throughput::Bytes(bytes as u64));

    for encoding in [Encoding::Utf8, Encoding::Utf16] {
        let data = defaults::invariant(encoding);
        let inputs: Vec<Vec<u8>> = texts.iter().map(|text| encoding.encode(text)).collect();
        group.bench_with_input(BenchmarkId::new("invariant", encoding), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(parse_f64(data, input, 0).ok());
                }
            })
        });
    }
    group.finish();
}

fn bench_feed(c: &mut Criterion) {
    let config = TableConfig {
        digits: ('\u{660}'..='\u{669}').map(String::from).collect(),
        ..TableConfig::default()
    };
    let data = config.build().expect("valid table");
    let input = "\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}\u{668}\u{669}\u{660}".repeat(16);

    c.bench_function("feed_slice/arabic_digits", |b| {
        b.iter(|| {
            let mut rest = input.as_bytes();
            let mut count = 0usize;
            while !rest.is_empty() {
                let (_, fed) = data.feed_slice(rest, Cursor::START);
                rest = &rest[fed..];
                count += 1;
            }
            black_box(count)
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let texts = corpus(16 * 1024);
    let data = defaults::invariant_utf8();
    let mut group = c.benchmark_group("parse_all");
    for min_parallel_len in [usize::MAX, 1] {
        let config = BatchConfig::default().with_min_parallel_len(min_parallel_len);
        let name = if config.is_parallel(texts.len()) { "parallel" } else { "sequential" };
        group.bench_function(name, |b| b.iter(|| parse_all(data, black_box(&texts), &config)));
    }
    group.finish();
}

criterion_group!(benches, bench_decimal, bench_parse, bench_feed, bench_batch);
criterion_main!(benches);
