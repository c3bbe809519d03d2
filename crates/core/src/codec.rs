//! Bit-Field Packing Primitives.
//!
//! The pieces every format encoder is built from: pack an integer into an
//! N-bit two's-complement field, extract a bit range from a wider word, and
//! concatenate fields (most-significant first) into one 32-bit instruction
//! word.
//!
//! Range violations are programming defects — a catalog row or operand
//! source handing over a value that does not fit its declared width — and
//! fail loudly via `assert!` rather than truncating silently.

use crate::isa::WORD_BITS;

/// A packed bit field: `width` bits of payload, right-aligned in `bits`.
///
/// Construct with [`Field::unsigned`] or [`Field::signed`]; both guarantee
/// the payload fits the declared width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    bits: u32,
    width: u32,
}

impl Field {
    /// Packs an unsigned value into exactly `width` bits.
    ///
    /// # Panics
    ///
    /// If `width` is zero, exceeds the word width, or `value` needs more
    /// than `width` bits.
    pub fn unsigned(value: u32, width: u32) -> Self {
        assert!(width >= 1 && width <= WORD_BITS, "field width {width} out of range");
        assert!(
            width == WORD_BITS || value < (1 << width),
            "unsigned value {value} does not fit in {width} bits"
        );
        Self { bits: value, width }
    }

    /// Packs a signed value into exactly `width` bits of two's complement.
    ///
    /// Negative values keep the native two's-complement pattern restricted
    /// to the low `width` bits, so `-1` packs to all ones at any width.
    ///
    /// # Panics
    ///
    /// If `value` lies outside `[-2^(width-1), 2^(width-1) - 1]`.
    pub fn signed(value: i32, width: u32) -> Self {
        assert!(width >= 1 && width <= WORD_BITS, "field width {width} out of range");
        let bound = 1i64 << (width - 1);
        assert!(
            i64::from(value) >= -bound && i64::from(value) < bound,
            "signed value {value} does not fit in {width} bits"
        );
        let mask = if width == WORD_BITS { u32::MAX } else { (1 << width) - 1 };
        Self { bits: (value as u32) & mask, width }
    }

    /// The packed payload, right-aligned.
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// The declared width in bits.
    pub const fn width(self) -> u32 {
        self.width
    }
}

/// Returns the unsigned value of bits `[high:low]` of `word`, inclusive,
/// 0-indexed from the LSB.
///
/// # Panics
///
/// If `high < low` or `high` exceeds the word width.
pub fn extract_bits(word: u32, high: u32, low: u32) -> u32 {
    assert!(high >= low && high < WORD_BITS, "bit range [{high}:{low}] invalid");
    let span = high - low + 1;
    let mask = if span == WORD_BITS { u32::MAX } else { (1 << span) - 1 };
    (word >> low) & mask
}

/// Accumulates fields most-significant first into one 32-bit word.
///
/// The caller supplies fields in the ISA-mandated order for its format,
/// which for split immediates is deliberately not the numeric significance
/// order of the immediate's bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordBuilder {
    bits: u32,
    filled: u32,
}

impl WordBuilder {
    /// Creates an empty builder.
    pub const fn new() -> Self {
        Self { bits: 0, filled: 0 }
    }

    /// Appends `field` below the bits already placed.
    ///
    /// # Panics
    ///
    /// If the accumulated width would exceed the word width.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.filled += field.width();
        assert!(self.filled <= WORD_BITS, "fields overflow the {WORD_BITS}-bit word");
        self.bits = (self.bits << field.width()) | field.bits();
        self
    }

    /// Finishes the word.
    ///
    /// # Panics
    ///
    /// If the accumulated field widths do not total exactly the word width.
    pub fn finish(self) -> u32 {
        assert_eq!(
            self.filled, WORD_BITS,
            "fields total {} bits, expected {WORD_BITS}",
            self.filled
        );
        self.bits
    }
}
