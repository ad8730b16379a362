use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde::{Deserialize, Serialize};
use vellum::{
    MessageDecoder, MessageEncoder, PlainData, RawDecoder, RawEncoder, ReadCursor,
    StructuredDecoder, StructuredEncoder, WriteBuffer,
};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Sample {
    sequence: u64,
    reading: f64,
    channel: u32,
    flags: u32,
}

unsafe impl PlainData for Sample {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Tagged {
    sequence: u64,
    reading: f64,
    label: String,
}

fn benchmark_write_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("WriteBuffer_Throughput");

    for chunk_size in [64usize, 1024, 16384].iter() {
        group.throughput(Throughput::Bytes(*chunk_size as u64 * 64));
        group.bench_with_input(
            BenchmarkId::new("write_64_chunks", chunk_size),
            chunk_size,
            |b, &chunk_size| {
                let chunk = vec![0xA5u8; chunk_size];

                b.iter(|| {
                    let mut buf = WriteBuffer::with_capacity(chunk_size);
                    for _ in 0..64 {
                        buf.write(&chunk);
                    }
                    buf.snapshot()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_growth_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("WriteBuffer_Growth");
    let payload = vec![0x3Cu8; 256];

    // Worst case: every session starts from a tiny arena
    group.bench_function("from_tiny_capacity", |b| {
        b.iter(|| {
            let mut buf = WriteBuffer::with_capacity(1);
            for _ in 0..32 {
                buf.write(&payload);
            }
            buf.written_len()
        });
    });

    // Pre-sized: no growth events at all
    group.bench_function("pre_sized", |b| {
        b.iter(|| {
            let mut buf = WriteBuffer::with_capacity(32 * payload.len());
            for _ in 0..32 {
                buf.write(&payload);
            }
            buf.written_len()
        });
    });

    group.finish();
}

fn benchmark_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Archive_Codecs");
    let count = 1000usize;
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("raw_copy_round_trip", |b| {
        b.iter(|| {
            let mut encoder: RawEncoder<Sample> = MessageEncoder::new(64);
            for i in 0..count {
                encoder
                    .emit(&Sample {
                        sequence: i as u64,
                        reading: i as f64,
                        channel: 2,
                        flags: 0,
                    })
                    .unwrap();
            }
            encoder.flush().unwrap();

            let mut decoder: RawDecoder<Sample> =
                MessageDecoder::new(encoder.buffer_snapshot(), encoder.count());
            let mut last = None;
            while let Some(sample) = decoder.absorb().unwrap() {
                last = Some(sample);
            }
            last
        });
    });

    group.bench_function("structured_round_trip", |b| {
        b.iter(|| {
            let mut encoder: StructuredEncoder<Tagged> = MessageEncoder::new(64);
            for i in 0..count {
                encoder
                    .emit(&Tagged {
                        sequence: i as u64,
                        reading: i as f64,
                        label: "bench".to_string(),
                    })
                    .unwrap();
            }
            encoder.flush().unwrap();

            let mut decoder: StructuredDecoder<Tagged> =
                MessageDecoder::new(encoder.buffer_snapshot(), encoder.count());
            let mut last = None;
            while let Some(msg) = decoder.absorb().unwrap() {
                last = Some(msg);
            }
            last
        });
    });

    group.finish();
}

fn benchmark_read_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("ReadCursor_ChunkSizes");

    let mut buf = WriteBuffer::with_capacity(64 * 1024);
    buf.write(&vec![0x7Eu8; 64 * 1024]);
    let view = buf.snapshot();

    for chunk in [16usize, 256, 4096].iter() {
        group.throughput(Throughput::Bytes(64 * 1024));
        group.bench_with_input(BenchmarkId::new("drain", chunk), chunk, |b, &chunk| {
            b.iter(|| {
                let mut cursor = ReadCursor::new(view.clone());
                let mut total = 0usize;
                while let Some(bytes) = cursor.read(chunk) {
                    total += bytes.len();
                }
                total
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_write_throughput,
    benchmark_growth_policies,
    benchmark_codecs,
    benchmark_read_chunk_sizes
);
criterion_main!(benches);
