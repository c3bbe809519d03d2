//! R-Type Encoder.
//!
//! Layout: `funct7(7) ‖ rs2(5) ‖ rs1(5) ‖ funct3(3) ‖ rd(5) ‖ opcode(7)`.

use crate::catalog::{RegOp, REG_OPS};
use crate::codec::{Field, WordBuilder};
use crate::isa::{opcodes, OPCODE_BITS, REG_BITS};
use crate::operand::OperandSource;

use super::Instruction;

/// Encodes a register-register operation with the given operands.
pub fn encode(op: &RegOp, rd: u32, rs1: u32, rs2: u32) -> Instruction {
    let word = WordBuilder::new()
        .field(Field::unsigned(op.funct7, 7))
        .field(Field::unsigned(rs2, REG_BITS))
        .field(Field::unsigned(rs1, REG_BITS))
        .field(Field::unsigned(op.funct3, 3))
        .field(Field::unsigned(rd, REG_BITS))
        .field(Field::unsigned(opcodes::OP_REG, OPCODE_BITS))
        .finish();
    let asm = format!("{} x{rd}, x{rs1}, x{rs2}", op.mnemonic);
    Instruction::new(word, asm)
}

/// Draws a uniform catalog row and three uniform registers.
pub fn random(src: &mut OperandSource) -> Instruction {
    let op = &REG_OPS[src.row(REG_OPS.len())];
    let rd = src.reg();
    let rs1 = src.reg();
    let rs2 = src.reg();
    encode(op, rd, rs1, rs2)
}
