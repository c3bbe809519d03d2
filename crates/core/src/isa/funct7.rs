//! RV32I Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes R-type operations that
//! share the same `funct3` (ADD vs SUB, SRL vs SRA). For shift-immediate
//! instructions the same seven bits occupy the top of the immediate field
//! and must be zero for SLLI/SRLI.

/// Default operation (ADD, SRL, and all logical operations).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation, distinguishing SUB from ADD.
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b0100000;
