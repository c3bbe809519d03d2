//! System and Memory-Ordering Instruction Encodings.
//!
//! These instructions take no variable operands, so they are carried as
//! complete pre-computed 32-bit literals rather than field-assembled
//! encodings.

/// Environment Call (ECALL). Traps to a higher privilege level.
pub const ECALL: u32 = 0x0000_0073;

/// Environment Break (EBREAK). Causes a breakpoint trap.
pub const EBREAK: u32 = 0x0010_0073;

/// Memory fence over all predecessor/successor access classes (FENCE iorw, iorw).
pub const FENCE: u32 = 0x0FF0_000F;

/// Total-store-ordering fence (FENCE.TSO).
pub const FENCE_TSO: u32 = 0x8330_000F;

/// Spin-wait hint (PAUSE), encoded as FENCE with pred=w, succ=0.
pub const PAUSE: u32 = 0x0100_000F;
