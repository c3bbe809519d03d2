//! S-Type Encoder (stores).
//!
//! Layout: `imm[11:5](7) ‖ rs2(5) ‖ rs1(5) ‖ funct3(3) ‖ imm[4:0](5) ‖
//! opcode(7)`. The 12-bit immediate is truncated to two's complement first,
//! then split across the two non-adjacent fields.

use crate::catalog::{StoreOp, STORE_OPS};
use crate::codec::{extract_bits, Field, WordBuilder};
use crate::isa::{opcodes, OPCODE_BITS, REG_BITS};
use crate::operand::OperandSource;

use super::Instruction;

/// Encodes a store with a signed 12-bit offset.
pub fn encode(op: &StoreOp, rs1: u32, rs2: u32, imm: i32) -> Instruction {
    let imm12 = Field::signed(imm, 12).bits();
    let word = WordBuilder::new()
        .field(Field::unsigned(extract_bits(imm12, 11, 5), 7))
        .field(Field::unsigned(rs2, REG_BITS))
        .field(Field::unsigned(rs1, REG_BITS))
        .field(Field::unsigned(op.funct3, 3))
        .field(Field::unsigned(extract_bits(imm12, 4, 0), 5))
        .field(Field::unsigned(opcodes::OP_STORE, OPCODE_BITS))
        .finish();
    let asm = format!("{} x{rs2}, {imm}(x{rs1})", op.mnemonic);
    Instruction::new(word, asm)
}

/// Draws a uniform catalog row, base and source registers, and an offset.
pub fn random(src: &mut OperandSource) -> Instruction {
    let op = &STORE_OPS[src.row(STORE_OPS.len())];
    let rs1 = src.reg();
    let rs2 = src.reg();
    let imm = src.imm12();
    encode(op, rs1, rs2, imm)
}
