//! B-Type Encoder (conditional branches).
//!
//! Layout: `imm[12](1) ‖ imm[10:5](6) ‖ rs2(5) ‖ rs1(5) ‖ funct3(3) ‖
//! imm[4:1](4) ‖ imm[11](1) ‖ opcode(7)`.
//!
//! The 13-bit offset is always even; bit 0 is implicitly zero and never
//! encoded. Bit 11 sits at the opposite end of the word from its numeric
//! position, immediately before the opcode.

use crate::catalog::{BranchOp, BRANCH_OPS};
use crate::codec::{extract_bits, Field, WordBuilder};
use crate::isa::{opcodes, OPCODE_BITS, REG_BITS};
use crate::operand::OperandSource;

use super::Instruction;

/// Encodes a branch with an even signed offset in [-4096, 4094].
///
/// The assembly text carries the full signed offset, not the truncated and
/// split encoding.
pub fn encode(op: &BranchOp, rs1: u32, rs2: u32, offset: i32) -> Instruction {
    let imm13 = Field::signed(offset, 13).bits();
    let word = WordBuilder::new()
        .field(Field::unsigned(extract_bits(imm13, 12, 12), 1))
        .field(Field::unsigned(extract_bits(imm13, 10, 5), 6))
        .field(Field::unsigned(rs2, REG_BITS))
        .field(Field::unsigned(rs1, REG_BITS))
        .field(Field::unsigned(op.funct3, 3))
        .field(Field::unsigned(extract_bits(imm13, 4, 1), 4))
        .field(Field::unsigned(extract_bits(imm13, 11, 11), 1))
        .field(Field::unsigned(opcodes::OP_BRANCH, OPCODE_BITS))
        .finish();
    let asm = format!("{} x{rs1}, x{rs2}, {offset}", op.mnemonic);
    Instruction::new(word, asm)
}

/// Draws a uniform catalog row, two registers, and an even offset.
pub fn random(src: &mut OperandSource) -> Instruction {
    let op = &BRANCH_OPS[src.row(BRANCH_OPS.len())];
    let rs1 = src.reg();
    let rs2 = src.reg();
    let offset = src.branch_offset();
    encode(op, rs1, rs2, offset)
}
