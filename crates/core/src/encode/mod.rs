//! Format Encoders.
//!
//! One submodule per instruction format. Each exposes an `encode` function
//! that turns a catalog row plus concrete operands into an [`Instruction`],
//! and a `random` function that draws the row and operands from an
//! [`OperandSource`] first. The directed catalog walk reuses the `encode`
//! functions with fixed operands.

use std::fmt;

use crate::catalog::Format;
use crate::operand::OperandSource;

/// Conditional branches (B-type).
pub mod btype;
/// Immediate arithmetic, loads, and JALR (I-type).
pub mod itype;
/// Jump and link (J-type).
pub mod jtype;
/// Register-register arithmetic (R-type).
pub mod rtype;
/// Stores (S-type).
pub mod stype;
/// Zero-operand system instructions (fixed encodings).
pub mod system;
/// Upper immediates (U-type).
pub mod utype;

/// A generated instruction: the 32-bit encoding and its assembly rendering.
///
/// Immutable after creation; an instruction is regenerated, never edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The complete 32-bit instruction word.
    pub word: u32,
    /// Assembly text, e.g. `add x1, x2, x3`.
    pub asm: String,
}

impl Instruction {
    /// Pairs an encoding with its assembly text.
    pub const fn new(word: u32, asm: String) -> Self {
        Self { word, asm }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032b} // {}", self.word, self.asm)
    }
}

/// Generates one random instruction of the given format.
pub fn random(format: Format, src: &mut OperandSource) -> Instruction {
    match format {
        Format::Register => rtype::random(src),
        Format::Immediate => itype::random(src),
        Format::Store => stype::random(src),
        Format::Branch => btype::random(src),
        Format::Upper => utype::random(src),
        Format::Jump => jtype::random(src),
        Format::System => system::random(src),
    }
}
