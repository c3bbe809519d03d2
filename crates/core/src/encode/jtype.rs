//! J-Type Encoder (JAL).
//!
//! Layout: `imm[20](1) ‖ imm[10:1](10) ‖ imm[11](1) ‖ imm[19:12](8) ‖
//! rd(5) ‖ opcode(7)`.
//!
//! Field order does not follow bit significance: the 10-bit chunk precedes
//! the single bit 11, which precedes the 8-bit chunk. Bit 0 of the offset
//! is implicitly zero and never encoded.

use crate::codec::{extract_bits, Field, WordBuilder};
use crate::isa::{opcodes, OPCODE_BITS, REG_BITS};
use crate::operand::OperandSource;

use super::Instruction;

/// Encodes JAL with an even signed offset in [-1048576, 1048574].
pub fn encode(rd: u32, offset: i32) -> Instruction {
    let imm21 = Field::signed(offset, 21).bits();
    let word = WordBuilder::new()
        .field(Field::unsigned(extract_bits(imm21, 20, 20), 1))
        .field(Field::unsigned(extract_bits(imm21, 10, 1), 10))
        .field(Field::unsigned(extract_bits(imm21, 11, 11), 1))
        .field(Field::unsigned(extract_bits(imm21, 19, 12), 8))
        .field(Field::unsigned(rd, REG_BITS))
        .field(Field::unsigned(opcodes::OP_JAL, OPCODE_BITS))
        .finish();
    let asm = format!("jal x{rd}, {offset}");
    Instruction::new(word, asm)
}

/// Draws a register and a doubled 20-bit value as the offset.
pub fn random(src: &mut OperandSource) -> Instruction {
    let rd = src.reg();
    let offset = src.jump_offset();
    encode(rd, offset)
}
