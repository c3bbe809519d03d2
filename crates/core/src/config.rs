//! Generator Configuration.
//!
//! Defaults for the instruction count and the fixed operand values used by
//! the directed catalog walk. The walk values are a generation policy, not
//! an ISA requirement: they only need to leave visibly distinguishable
//! register and memory contents for a downstream simulator, so they are
//! carried here as overridable presets rather than hardcoded in the walk.

use serde::Deserialize;

/// Default number of instructions when the caller supplies none or the
/// supplied count fails to parse.
pub const DEFAULT_COUNT: usize = 16;

/// Top-level generator configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Instruction count used when none is supplied.
    pub default_count: usize,
    /// Fixed operand presets for the directed catalog walk.
    pub walk: WalkPresets,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_count: DEFAULT_COUNT, walk: WalkPresets::default() }
    }
}

/// Fixed operand values for the directed catalog walk.
///
/// Register pairs are primed with small unequal values so that every
/// comparison and arithmetic result differs per operation; the store
/// pattern has four distinct bytes so a verifier can tell sb/sh/sw apart.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WalkPresets {
    /// Register primed as the left-hand operand of R/B walks.
    pub lhs_reg: u32,
    /// Value loaded into [`Self::lhs_reg`].
    pub lhs_value: i32,
    /// Register primed as the right-hand operand of R/B walks.
    pub rhs_reg: u32,
    /// Value loaded into [`Self::rhs_reg`].
    pub rhs_value: i32,
    /// First destination register; walks count upward from here.
    pub dest_base: u32,
    /// First immediate for arithmetic-immediate rows; rows count upward.
    pub imm_base: i32,
    /// Shift amount for the shift-immediate rows.
    pub shamt: u32,
    /// Byte stride between successive load/store offsets.
    pub mem_stride: i32,
    /// Byte stride between successive branch targets (must be even).
    pub branch_stride: i32,
    /// Register holding the store data pattern.
    pub store_data_reg: u32,
    /// 32-bit pattern stored by the store walk. The low 12 bits must stay
    /// below 0x800 so the lui/addi priming pair composes without the addi
    /// sign-extending.
    pub store_pattern: u32,
    /// Immediate used for the upper-immediate walk rows.
    pub upper_imm: i32,
}

impl Default for WalkPresets {
    fn default() -> Self {
        Self {
            lhs_reg: 2,
            lhs_value: 3,
            rhs_reg: 3,
            rhs_value: 2,
            dest_base: 5,
            imm_base: 3,
            shamt: 2,
            mem_stride: 4,
            branch_stride: 8,
            store_data_reg: 5,
            store_pattern: 0x1234_5678,
            upper_imm: 0x12345,
        }
    }
}
