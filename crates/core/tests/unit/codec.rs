//! Field Codec Unit Tests.
//!
//! Verifies two's-complement packing, bit extraction, and the
//! fields-must-total-32 invariant of word assembly.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use rvgen_core::codec::{extract_bits, Field, WordBuilder};

// ──────────────────────────────────────────────────────────
// Two's-complement packing
// ──────────────────────────────────────────────────────────

#[test]
fn minus_one_in_twelve_bits_is_all_ones() {
    assert_eq!(Field::signed(-1, 12).bits(), 0b1111_1111_1111);
}

#[rstest]
#[case(5)]
#[case(12)]
#[case(13)]
#[case(20)]
#[case(21)]
fn minus_one_is_all_ones_at_every_width(#[case] width: u32) {
    assert_eq!(Field::signed(-1, width).bits(), (1 << width) - 1);
}

#[rstest]
#[case(5)]
#[case(12)]
#[case(13)]
#[case(20)]
#[case(21)]
fn zero_is_all_zeros_at_every_width(#[case] width: u32) {
    assert_eq!(Field::signed(0, width).bits(), 0);
}

#[test]
fn signed_range_extremes_pack() {
    assert_eq!(Field::signed(-2048, 12).bits(), 0b1000_0000_0000);
    assert_eq!(Field::signed(2047, 12).bits(), 0b0111_1111_1111);
}

#[test]
#[should_panic(expected = "does not fit")]
fn signed_overflow_is_a_defect() {
    let _ = Field::signed(2048, 12);
}

#[test]
#[should_panic(expected = "does not fit")]
fn unsigned_overflow_is_a_defect() {
    let _ = Field::unsigned(32, 5);
}

proptest! {
    /// Sign-extending the packed pattern recovers the original value.
    #[test]
    fn signed_pack_round_trips(value in -2048i32..=2047) {
        let bits = Field::signed(value, 12).bits();
        let recovered = ((bits << 20) as i32) >> 20;
        prop_assert_eq!(recovered, value);
    }
}

// ──────────────────────────────────────────────────────────
// Bit extraction
// ──────────────────────────────────────────────────────────

#[test]
fn extract_bits_inclusive_range() {
    let word = 0b1010_1100;
    assert_eq!(extract_bits(word, 3, 2), 0b11);
    assert_eq!(extract_bits(word, 7, 4), 0b1010);
    assert_eq!(extract_bits(word, 0, 0), 0);
    assert_eq!(extract_bits(word, 31, 0), word);
}

#[test]
fn extract_single_high_bit() {
    assert_eq!(extract_bits(0x8000_0000, 31, 31), 1);
}

// ──────────────────────────────────────────────────────────
// Word assembly
// ──────────────────────────────────────────────────────────

#[test]
fn builder_concatenates_most_significant_first() {
    let word = WordBuilder::new()
        .field(Field::unsigned(0b1111, 4))
        .field(Field::unsigned(0, 24))
        .field(Field::unsigned(0b1, 4))
        .finish();
    assert_eq!(word, 0xF000_0001);
}

#[test]
#[should_panic(expected = "expected 32")]
fn short_word_is_a_defect() {
    let _ = WordBuilder::new().field(Field::unsigned(0, 12)).finish();
}

#[test]
#[should_panic(expected = "overflow")]
fn overfull_word_is_a_defect() {
    let _ = WordBuilder::new()
        .field(Field::unsigned(0, 20))
        .field(Field::unsigned(0, 13));
}
