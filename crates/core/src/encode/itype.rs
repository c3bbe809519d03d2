//! I-Type Encoder (immediate arithmetic, shifts, loads, JALR).
//!
//! Layout: `imm12(12) ‖ rs1(5) ‖ funct3(3) ‖ rd(5) ‖ opcode(7)`.
//!
//! Shift-immediate rows reinterpret the immediate field: the low 5 bits
//! carry an unsigned shift amount and the upper 7 bits are forced to zero
//! (RV32I has no variable content there). Assembly rendering follows the
//! row's [`ImmKind`]: loads and JALR use `mn rd, imm(rs1)`, everything else
//! `mn rd, rs1, imm`.

use crate::catalog::{ImmKind, ImmOp, IMM_OPS};
use crate::codec::{Field, WordBuilder};
use crate::isa::{OPCODE_BITS, REG_BITS};
use crate::operand::OperandSource;

use super::Instruction;

/// Encodes an I-type operation.
///
/// For [`ImmKind::Shift`] rows `imm` is the shift amount and must lie in
/// [0, 31]; for every other row it is a signed 12-bit immediate.
pub fn encode(op: &ImmOp, rd: u32, rs1: u32, imm: i32) -> Instruction {
    let builder = WordBuilder::new();
    let builder = match op.kind {
        ImmKind::Shift => builder
            .field(Field::unsigned(0, 7))
            .field(Field::unsigned(imm as u32, REG_BITS)),
        _ => builder.field(Field::signed(imm, 12)),
    };
    let word = builder
        .field(Field::unsigned(rs1, REG_BITS))
        .field(Field::unsigned(op.funct3, 3))
        .field(Field::unsigned(rd, REG_BITS))
        .field(Field::unsigned(op.opcode, OPCODE_BITS))
        .finish();

    let asm = match op.kind {
        ImmKind::Load | ImmKind::Jalr => format!("{} x{rd}, {imm}(x{rs1})", op.mnemonic),
        ImmKind::Arith | ImmKind::Shift => format!("{} x{rd}, x{rs1}, {imm}", op.mnemonic),
    };
    Instruction::new(word, asm)
}

/// Draws a uniform catalog row, two registers, and an in-range immediate.
pub fn random(src: &mut OperandSource) -> Instruction {
    let op = &IMM_OPS[src.row(IMM_OPS.len())];
    let rd = src.reg();
    let rs1 = src.reg();
    let imm = match op.kind {
        ImmKind::Shift => src.shamt() as i32,
        _ => src.imm12(),
    };
    encode(op, rd, rs1, imm)
}
