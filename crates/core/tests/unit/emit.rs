//! Memory Image Emitter Unit Tests.
//!
//! Verifies little-endian byte serialization, listing line shape, and the
//! artifact-file lifecycle.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use rvgen_core::catalog::Format;
use rvgen_core::config::WalkPresets;
use rvgen_core::emit::{emit_files, word_bytes, write_listing, write_memory, ListingStyle};
use rvgen_core::error::GenError;
use rvgen_core::operand::OperandSource;
use rvgen_core::sequence::{mixed, walk};

// ──────────────────────────────────────────────────────────
// 1. Byte order
// ──────────────────────────────────────────────────────────

#[test]
fn words_split_little_endian() {
    assert_eq!(word_bytes(0x1234_5678), [0x78, 0x56, 0x34, 0x12]);
    assert_eq!(word_bytes(0x0000_0073), [0x73, 0x00, 0x00, 0x00]);
}

proptest! {
    /// Reassembling four consecutive emitted bytes reproduces the word.
    #[test]
    fn memory_stream_round_trips(seed in any::<u64>()) {
        let mut src = OperandSource::seeded(seed);
        let seq = mixed(16, &mut src);

        let mut out = Vec::new();
        write_memory(&seq, &mut out).unwrap();
        let bytes: Vec<u8> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| u8::from_str_radix(line, 2).unwrap())
            .collect();

        prop_assert_eq!(bytes.len(), seq.len() * 4);
        for (chunk, inst) in bytes.chunks_exact(4).zip(&seq) {
            let word = u32::from(chunk[0])
                | u32::from(chunk[1]) << 8
                | u32::from(chunk[2]) << 16
                | u32::from(chunk[3]) << 24;
            prop_assert_eq!(word, inst.word, "byte stream diverged for {}", &inst.asm);
        }
    }
}

// ──────────────────────────────────────────────────────────
// 2. Listing shape
// ──────────────────────────────────────────────────────────

#[test]
fn per_byte_listing_carries_index_pattern_and_comment() {
    let seq = walk(Format::Jump, &WalkPresets::default());

    let mut out = Vec::new();
    write_listing(&seq, ListingStyle::PerByte, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // jal x5, 4 (0x004002EF) followed by the ecall terminator.
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "mem[0] = 8'b11101111; // jal x5, 4 [byte 0]");
    assert_eq!(lines[3], "mem[3] = 8'b00000000; // jal x5, 4 [byte 3]");
    assert_eq!(lines[4], "mem[4] = 8'b01110011; // ecall [byte 0]");
}

#[test]
fn per_word_listing_uses_word_indices() {
    let seq = walk(Format::Jump, &WalkPresets::default());

    let mut out = Vec::new();
    write_listing(&seq, ListingStyle::PerWord, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "mem[0] = 32'b00000000010000000000001011101111; // jal x5, 4");
    assert_eq!(lines[1], "mem[1] = 32'b00000000000000000000000001110011; // ecall");
}

// ──────────────────────────────────────────────────────────
// 3. Artifact files
// ──────────────────────────────────────────────────────────

#[test]
fn emit_files_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let mut src = OperandSource::seeded(5);
    let seq = mixed(10, &mut src);

    emit_files(&seq, "m", dir.path(), ListingStyle::PerByte).unwrap();

    let listing = fs::read_to_string(dir.path().join("tc_m.txt")).unwrap();
    let memory = fs::read_to_string(dir.path().join("mem_m.txt")).unwrap();
    assert_eq!(listing.lines().count(), 40);
    assert_eq!(memory.lines().count(), 40);
    for line in memory.lines() {
        assert_eq!(line.len(), 8);
        assert!(line.bytes().all(|b| b == b'0' || b == b'1'));
    }
}

#[test]
fn unwritable_destination_reports_a_create_error() {
    let mut src = OperandSource::seeded(5);
    let seq = mixed(2, &mut src);
    let missing = Path::new("/nonexistent-rvgen-output-dir");

    let err = emit_files(&seq, "r", missing, ListingStyle::PerByte).unwrap_err();
    assert!(matches!(err, GenError::Create { .. }), "unexpected error: {err}");
}
