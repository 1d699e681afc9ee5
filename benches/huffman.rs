use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use huffzip::{compress, decompress};

/// Text-like input: a small repeated vocabulary with skewed word frequencies.
fn text_like(len: usize) -> Vec<u8> {
    let words = ["the ", "quick ", "brown ", "fox ", "jumps ", "over ", "a ", "lazy ", "dog. "];
    let mut data = Vec::with_capacity(len);
    let mut i = 0_usize;
    while data.len() < len {
        // Favour the short words.
        let w = words[(i * i + i / 3) % words.len()];
        data.extend_from_slice(w.as_bytes());
        i += 1;
    }
    data.truncate(len);
    data
}

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    for size in [4 * 1024, 64 * 1024, 1024 * 1024] {
        let data = text_like(size);
        let packed = compress(&data).expect("compress");
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, d| {
            b.iter(|| compress(black_box(d)))
        });
        group.bench_with_input(BenchmarkId::new("decompress", size), &packed, |b, p| {
            b.iter(|| decompress(black_box(p)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_huffman);
criterion_main!(benches);
