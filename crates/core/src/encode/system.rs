//! System Instruction Encoder.
//!
//! No fields are assembled: every catalog row carries its complete 32-bit
//! encoding, and random generation only chooses which literal to emit.

use crate::catalog::{SystemOp, SYSTEM_OPS};
use crate::operand::OperandSource;

use super::Instruction;

/// Emits a system catalog row verbatim.
pub fn encode(op: &SystemOp) -> Instruction {
    Instruction::new(op.word, op.mnemonic.to_owned())
}

/// Draws a uniform catalog row.
pub fn random(src: &mut OperandSource) -> Instruction {
    encode(&SYSTEM_OPS[src.row(SYSTEM_OPS.len())])
}
