//! RV32I Instruction Set Definitions.
//!
//! Named encoding constants for the subset of RV32I this generator emits,
//! organized by field.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (bits 6-0) selecting the instruction format.
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits for R-type instructions.
//! - `system`: Complete 32-bit literals for zero-operand system instructions.

/// Function code 3 definitions.
pub mod funct3;

/// Function code 7 definitions for R-type instructions.
pub mod funct7;

/// Major opcodes for the generated instruction formats.
pub mod opcodes;

/// Pre-computed encodings for system and memory-ordering instructions.
pub mod system;

/// Width in bits of every generated instruction word.
pub const WORD_BITS: u32 = 32;

/// Width in bits of a register index field.
pub const REG_BITS: u32 = 5;

/// Width in bits of the major opcode field.
pub const OPCODE_BITS: u32 = 7;
