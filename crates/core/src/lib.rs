//! Random RV32I instruction generator library.
//!
//! Synthesizes pseudo-random RV32I instructions and renders each one both
//! as a bit-exact 32-bit encoding and as assembly text, then serializes
//! the result into a little-endian memory image for a hardware-simulation
//! instruction memory. The crate provides:
//!
//! 1. **Codec:** bit-width-aware field packing, extraction, and word assembly.
//! 2. **Catalogs:** one immutable mnemonic/opcode table per instruction format.
//! 3. **Encoders:** per-format bit layout and assembly rendering.
//! 4. **Sequences:** single-format, mixed, and directed catalog-walk modes.
//! 5. **Emission:** annotated listing plus byte-per-line memory data files.
//!
//! It is deliberately not an assembler (no labels, no linking), not a
//! general disassembler, and not a simulator: every output is a
//! self-consistent (encoding, assembly) pair produced in one direction.

use std::path::Path;

/// Instruction catalogs and the format alphabet.
pub mod catalog;
/// Bit-field packing and word assembly primitives.
pub mod codec;
/// Defaults and catalog-walk operand presets.
pub mod config;
/// Memory image serialization and artifact writing.
pub mod emit;
/// Per-format instruction encoders.
pub mod encode;
/// Runtime-reportable error types.
pub mod error;
/// RV32I opcode and function-code constants.
pub mod isa;
/// Random operand source with an explicitly owned RNG handle.
pub mod operand;
/// Sequence generation modes.
pub mod sequence;

pub use crate::catalog::Format;
pub use crate::config::Config;
pub use crate::encode::Instruction;
pub use crate::error::GenError;
pub use crate::sequence::{Mode, Sequence};

/// Generates one sequence and writes both output artifacts into `dir`.
///
/// This is the single entry point the CLI dispatches to per format: given a
/// mode and count it performs generation (seeded from `seed` when given,
/// from entropy otherwise) and emits the listing and memory-data files.
///
/// # Errors
///
/// Returns [`GenError`] if either artifact cannot be created or written.
pub fn run(
    mode: Mode,
    count: usize,
    dir: &Path,
    seed: Option<u64>,
    config: &Config,
) -> Result<(), GenError> {
    let mut src = seed.map_or_else(operand::OperandSource::from_entropy, operand::OperandSource::seeded);
    let seq = sequence::generate(mode, count, &mut src, &config.walk);
    emit::emit_files(&seq, mode.tag(), dir, emit::ListingStyle::default())
}
