use criterion::{black_box, criterion_group, criterion_main, Criterion};

use algoviz::compression::{huffman, lzw, rle};

fn sample_text() -> String {
    "the rain in spain stays mainly in the plain. ".repeat(24)
}

fn bench_rle(c: &mut Criterion) {
    let text: String = "aaaabbbbccccddddeeee".repeat(48);
    let encoded = rle::encode(&text);
    c.bench_function("rle_encode", |b| b.iter(|| rle::encode(black_box(&text))));
    c.bench_function("rle_decode", |b| {
        b.iter(|| rle::decode(black_box(&encoded.encoded)).unwrap())
    });
}

fn bench_huffman(c: &mut Criterion) {
    let text = sample_text();
    let encoded = huffman::encode(&text).unwrap();
    c.bench_function("huffman_encode", |b| {
        b.iter(|| huffman::encode(black_box(&text)).unwrap())
    });
    c.bench_function("huffman_decode", |b| {
        b.iter(|| huffman::decode(black_box(&encoded.bitstream), &encoded.tree).unwrap())
    });
}

fn bench_lzw(c: &mut Criterion) {
    let text = sample_text();
    let encoded = lzw::encode(text.as_bytes());
    c.bench_function("lzw_encode", |b| {
        b.iter(|| lzw::encode(black_box(text.as_bytes())))
    });
    c.bench_function("lzw_decode", |b| {
        b.iter(|| lzw::decode(black_box(&encoded.codes)).unwrap())
    });
}

criterion_group!(benches, bench_rle, bench_huffman, bench_lzw);
criterion_main!(benches);
