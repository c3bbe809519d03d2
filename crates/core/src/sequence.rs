//! Sequence Generator.
//!
//! Produces an ordered list of generated instructions in one of three
//! modes:
//!
//! 1. **Repeat:** `count` independently random instructions of one format.
//! 2. **Mixed:** each of `count` slots draws its format uniformly from the
//!    seven-format alphabet, then delegates.
//! 3. **Walk:** one instruction per catalog row of a chosen format, with
//!    fixed operands from [`WalkPresets`], any register-priming
//!    instructions placed before first use, and exactly one system
//!    instruction appended as a terminator.

use tracing::debug;

use crate::catalog::{
    Format, ImmKind, ADDI, BRANCH_OPS, IMM_OPS, LUI, REG_OPS, STORE_OPS, SYSTEM_OPS,
    TERMINATOR, UPPER_OPS,
};
use crate::config::WalkPresets;
use crate::encode::{self, btype, itype, jtype, rtype, stype, system, utype, Instruction};
use crate::operand::OperandSource;

/// How a sequence is generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// `count` random instructions of one fixed format.
    Repeat(Format),
    /// `count` random instructions, format drawn uniformly per slot.
    Mixed,
    /// Deterministic one-per-row walk over one format's catalog.
    Walk(Format),
}

impl Mode {
    /// Short lowercase tag used in artifact file names.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Repeat(f) => f.tag(),
            Self::Mixed => "m",
            Self::Walk(Format::Register) => "r_walk",
            Self::Walk(Format::Immediate) => "i_walk",
            Self::Walk(Format::Store) => "s_walk",
            Self::Walk(Format::Branch) => "b_walk",
            Self::Walk(Format::Upper) => "u_walk",
            Self::Walk(Format::Jump) => "j_walk",
            Self::Walk(Format::System) => "sys_walk",
        }
    }
}

/// An ordered list of generated instructions, built per request and handed
/// to the emitter read-only.
#[derive(Debug, Default)]
pub struct Sequence {
    items: Vec<Instruction>,
}

impl Sequence {
    fn with_capacity(n: usize) -> Self {
        Self { items: Vec::with_capacity(n) }
    }

    fn push(&mut self, inst: Instruction) {
        self.items.push(inst);
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The instructions, in generation order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.items
    }

    /// Iterates over the instructions in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Generates a sequence.
///
/// `count` bounds the repeat and mixed modes; the walk's length is fixed by
/// its catalog and ignores `count`.
pub fn generate(
    mode: Mode,
    count: usize,
    src: &mut OperandSource,
    presets: &WalkPresets,
) -> Sequence {
    let seq = match mode {
        Mode::Repeat(format) => repeat(format, count, src),
        Mode::Mixed => mixed(count, src),
        Mode::Walk(format) => walk(format, presets),
    };
    debug!(mode = ?mode, len = seq.len(), "generated sequence");
    seq
}

/// Emits `count` independently random instructions of one format.
pub fn repeat(format: Format, count: usize, src: &mut OperandSource) -> Sequence {
    let mut seq = Sequence::with_capacity(count);
    for _ in 0..count {
        seq.push(encode::random(format, src));
    }
    seq
}

/// Emits `count` random instructions, each slot's format drawn uniformly
/// from the seven-format alphabet.
pub fn mixed(count: usize, src: &mut OperandSource) -> Sequence {
    let mut seq = Sequence::with_capacity(count);
    for _ in 0..count {
        let format = Format::ALL[src.row(Format::ALL.len())];
        seq.push(encode::random(format, src));
    }
    seq
}

/// Emits one instruction per catalog row of `format` with fixed operands,
/// priming instructions first, terminated by one system instruction.
///
/// The concrete operand values come from `presets` and only need to keep
/// the program minimally self-consistent for a downstream simulator.
pub fn walk(format: Format, presets: &WalkPresets) -> Sequence {
    let mut seq = Sequence::default();
    match format {
        Format::Register => walk_register(&mut seq, presets),
        Format::Immediate => walk_immediate(&mut seq, presets),
        Format::Store => walk_store(&mut seq, presets),
        Format::Branch => walk_branch(&mut seq, presets),
        Format::Upper => walk_upper(&mut seq, presets),
        Format::Jump => walk_jump(&mut seq, presets),
        Format::System => walk_system(&mut seq),
    }
    seq.push(system::encode(TERMINATOR));
    seq
}

/// Loads a small immediate into a register via `addi reg, x0, value`.
fn prime(seq: &mut Sequence, reg: u32, value: i32) {
    seq.push(itype::encode(ADDI, reg, 0, value));
}

fn walk_register(seq: &mut Sequence, p: &WalkPresets) {
    prime(seq, p.lhs_reg, p.lhs_value);
    prime(seq, p.rhs_reg, p.rhs_value);
    for (i, op) in REG_OPS.iter().enumerate() {
        seq.push(rtype::encode(op, p.dest_base + i as u32, p.lhs_reg, p.rhs_reg));
    }
}

fn walk_immediate(seq: &mut Sequence, p: &WalkPresets) {
    prime(seq, p.lhs_reg, p.lhs_value);
    let mut load_slot = 0;
    for (i, op) in IMM_OPS.iter().enumerate() {
        let rd = p.dest_base + i as u32;
        match op.kind {
            ImmKind::Arith => seq.push(itype::encode(op, rd, p.lhs_reg, p.imm_base + i as i32)),
            ImmKind::Shift => seq.push(itype::encode(op, rd, p.lhs_reg, p.shamt as i32)),
            // Target the word after this one, assuming the image is loaded
            // at address zero.
            ImmKind::Jalr => {
                let target = 4 * (seq.len() as i32 + 1);
                seq.push(itype::encode(op, rd, 0, target));
            }
            // Word-spaced offsets off x0 keep the five load widths reading
            // from distinct, predictable addresses.
            ImmKind::Load => {
                seq.push(itype::encode(op, rd, 0, p.mem_stride * load_slot));
                load_slot += 1;
            }
        }
    }
}

fn walk_store(seq: &mut Sequence, p: &WalkPresets) {
    // Build a four-distinct-byte pattern so a verifier can tell the store
    // widths apart in the resulting memory image.
    let hi = (p.store_pattern >> 12) as i32;
    let lo = (p.store_pattern & 0xFFF) as i32;
    seq.push(utype::encode(LUI, p.store_data_reg, hi));
    seq.push(itype::encode(ADDI, p.store_data_reg, p.store_data_reg, lo));
    for (i, op) in STORE_OPS.iter().enumerate() {
        seq.push(stype::encode(op, 0, p.store_data_reg, p.mem_stride * i as i32));
    }
}

fn walk_branch(seq: &mut Sequence, p: &WalkPresets) {
    prime(seq, p.lhs_reg, p.lhs_value);
    prime(seq, p.rhs_reg, p.rhs_value);
    for (i, op) in BRANCH_OPS.iter().enumerate() {
        seq.push(btype::encode(op, p.lhs_reg, p.rhs_reg, p.branch_stride * (i as i32 + 1)));
    }
}

fn walk_upper(seq: &mut Sequence, p: &WalkPresets) {
    for (i, op) in UPPER_OPS.iter().enumerate() {
        seq.push(utype::encode(op, p.dest_base + i as u32, p.upper_imm));
    }
}

fn walk_jump(seq: &mut Sequence, p: &WalkPresets) {
    // Jump to the immediately following word so execution falls through.
    seq.push(jtype::encode(p.dest_base, 4));
}

fn walk_system(seq: &mut Sequence) {
    for op in &SYSTEM_OPS {
        seq.push(system::encode(op));
    }
}
