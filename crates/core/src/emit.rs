//! Memory Image Emitter.
//!
//! Serializes a generated sequence into a byte-addressed little-endian
//! memory layout and writes the two output artifacts:
//!
//! 1. **Listing** — one line per byte (or per word) carrying the memory
//!    index, a width-tagged Verilog-style bit pattern, and a trailing
//!    comment with the originating assembly.
//! 2. **Memory data** — one bare 8-bit pattern per line, address-ascending.
//!
//! Byte order is the compatibility-sensitive contract here: byte 0 of each
//! instruction is bits [7:0] of the word, byte 3 is bits [31:24], and
//! consumers reconstruct words by exactly that little-endian packing.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::GenError;
use crate::sequence::Sequence;

/// Granularity of listing lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingStyle {
    /// One line per emitted byte, four lines per instruction.
    #[default]
    PerByte,
    /// One line per 32-bit instruction word.
    PerWord,
}

/// Splits a word into its four little-endian memory bytes.
pub const fn word_bytes(word: u32) -> [u8; 4] {
    word.to_le_bytes()
}

/// Writes the annotated listing artifact.
///
/// # Errors
///
/// Propagates any failure of the underlying writer.
pub fn write_listing<W: Write>(
    seq: &Sequence,
    style: ListingStyle,
    out: &mut W,
) -> io::Result<()> {
    match style {
        ListingStyle::PerByte => {
            let mut addr = 0usize;
            for inst in seq {
                for (offset, byte) in word_bytes(inst.word).into_iter().enumerate() {
                    writeln!(out, "mem[{addr}] = 8'b{byte:08b}; // {} [byte {offset}]", inst.asm)?;
                    addr += 1;
                }
            }
        }
        ListingStyle::PerWord => {
            for (index, inst) in seq.iter().enumerate() {
                writeln!(out, "mem[{index}] = 32'b{:032b}; // {}", inst.word, inst.asm)?;
            }
        }
    }
    Ok(())
}

/// Writes the byte-only memory data artifact.
///
/// # Errors
///
/// Propagates any failure of the underlying writer.
pub fn write_memory<W: Write>(seq: &Sequence, out: &mut W) -> io::Result<()> {
    for inst in seq {
        for byte in word_bytes(inst.word) {
            writeln!(out, "{byte:08b}")?;
        }
    }
    Ok(())
}

/// Writes both artifacts for `seq` into `dir` as `tc_<tag>.txt` (listing)
/// and `mem_<tag>.txt` (memory data).
///
/// This is a one-shot batch write: a failure is surfaced once and nothing
/// is retried or cleaned up.
///
/// # Errors
///
/// [`GenError::Create`] if either destination cannot be created,
/// [`GenError::Write`] on any subsequent write failure.
pub fn emit_files(seq: &Sequence, tag: &str, dir: &Path, style: ListingStyle) -> Result<(), GenError> {
    let listing_path = dir.join(format!("tc_{tag}.txt"));
    let memory_path = dir.join(format!("mem_{tag}.txt"));

    let mut listing = create(&listing_path)?;
    write_listing(seq, style, &mut listing)?;
    listing.flush().map_err(GenError::Write)?;
    info!(path = %listing_path.display(), instructions = seq.len(), "wrote listing");

    let mut memory = create(&memory_path)?;
    write_memory(seq, &mut memory)?;
    memory.flush().map_err(GenError::Write)?;
    info!(path = %memory_path.display(), bytes = seq.len() * 4, "wrote memory image");

    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, GenError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| GenError::Create { path: path.to_path_buf(), source })
}
