//! Basic usage example of the Vellum binary transport

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vellum::{
    MessageDecoder, MessageEncoder, PlainData, RawDecoder, RawEncoder, ReadCursor, Result,
    StructuredDecoder, StructuredEncoder, WriteBuffer,
};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Telemetry {
    sequence: u64,
    value: f64,
}

unsafe impl PlainData for Telemetry {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Report {
    host: String,
    readings: Vec<f64>,
    thresholds: HashMap<String, f64>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    println!("Vellum Binary Transport Example");
    println!("===============================");

    // Raw transport: write bytes, snapshot, read them back
    println!("\nWriting through a 4-byte buffer (watch it grow)...");
    let mut buf = WriteBuffer::with_capacity(4);
    buf.write(b"hello, ");
    buf.write(b"arena!");
    println!("  written: {} bytes", buf.written_len());
    println!("  capacity: {} bytes", buf.capacity());
    println!("  growth events: {}", buf.growth_events());

    let view = buf.snapshot();
    let mut cursor = ReadCursor::new(view);
    while let Some(chunk) = cursor.read(5) {
        println!("  read chunk: {:?}", String::from_utf8_lossy(chunk));
    }

    // Plain-data archive: one memcpy per message
    println!("\nEmitting 10 plain-data telemetry records...");
    let mut encoder: RawEncoder<Telemetry> = MessageEncoder::new(64);
    for i in 0..10u64 {
        encoder.emit(&Telemetry {
            sequence: i,
            value: i as f64 * 1.5,
        })?;
    }
    encoder.flush()?;
    println!("  count: {}, bytes: {}", encoder.count(), encoder.size());

    let mut decoder: RawDecoder<Telemetry> =
        MessageDecoder::new(encoder.buffer_snapshot(), encoder.count());
    let mut total = 0.0;
    while let Some(record) = decoder.absorb()? {
        total += record.value;
    }
    println!("  decoded all records, value sum = {}", total);

    // Structured archive: nested fields through the serde codec
    println!("\nEmitting a structured report...");
    let report = Report {
        host: "node-7".to_string(),
        readings: vec![0.1, 0.4, 0.9],
        thresholds: HashMap::from([("warn".to_string(), 0.5), ("crit".to_string(), 0.8)]),
    };

    let mut encoder: StructuredEncoder<Report> = MessageEncoder::new(128);
    encoder.emit(&report)?;
    encoder.flush()?;
    println!("  encoded {} bytes", encoder.size());

    let mut decoder: StructuredDecoder<Report> =
        MessageDecoder::new(encoder.buffer_snapshot(), encoder.count());
    let decoded = decoder.absorb()?.expect("one report was emitted");
    println!("  host: {}", decoded.host);
    println!("  readings: {:?}", decoded.readings);
    println!("  warn threshold: {:?}", decoded.thresholds.get("warn"));
    assert_eq!(decoded, report);

    println!("\nDone.");
    Ok(())
}
