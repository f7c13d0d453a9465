use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sylphium::{codec, OpCode};

fn bench_encoding_frames(c: &mut Criterion) {
    c.bench_function("encode write float", |b| {
        b.iter(|| codec::encode_write_float(black_box(0x01), black_box(1010), black_box(0.5)))
    });
    c.bench_function("encode mem write", |b| {
        b.iter(|| {
            codec::encode_action_mem_uint(
                black_box(0x01),
                OpCode::I2cMemWrite,
                black_box(0x50),
                black_box(0xDEADBEEF),
            )
        })
    });
}

fn bench_decoding_frames(c: &mut Criterion) {
    let frame = codec::encode_write_float(0x01, 1010, 0.5);
    c.bench_function("decode header", |b| b.iter(|| codec::decode_header(black_box(&frame))));
    c.bench_function("decode read float", |b| {
        b.iter(|| codec::decode_read_float(black_box(&frame)))
    });
}

criterion_group!(benches, bench_encoding_frames, bench_decoding_frames);
criterion_main!(benches);
