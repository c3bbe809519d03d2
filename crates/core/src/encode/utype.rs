//! U-Type Encoder (LUI / AUIPC).
//!
//! Layout: `imm[19:0](20) ‖ rd(5) ‖ opcode(7)`.

use crate::catalog::{UpperOp, UPPER_OPS};
use crate::codec::{Field, WordBuilder};
use crate::isa::{OPCODE_BITS, REG_BITS};
use crate::operand::OperandSource;

use super::Instruction;

/// Encodes an upper-immediate operation with a signed 20-bit immediate.
///
/// The assembly text shows the untruncated signed decimal value.
pub fn encode(op: &UpperOp, rd: u32, imm: i32) -> Instruction {
    let word = WordBuilder::new()
        .field(Field::signed(imm, 20))
        .field(Field::unsigned(rd, REG_BITS))
        .field(Field::unsigned(op.opcode, OPCODE_BITS))
        .finish();
    let asm = format!("{} x{rd}, {imm}", op.mnemonic);
    Instruction::new(word, asm)
}

/// Draws a register and immediate; the mnemonic comes from an independent
/// fair coin flip rather than the row draw used by the other formats.
pub fn random(src: &mut OperandSource) -> Instruction {
    let op = &UPPER_OPS[usize::from(src.coin())];
    let rd = src.reg();
    let imm = src.imm20();
    encode(op, rd, imm)
}
