//! Instruction Catalogs.
//!
//! One immutable static table per instruction format, each row a structured
//! record `{mnemonic, opcode, function codes}`. Random generation selects
//! uniformly over the rows of a table; the directed catalog walk visits
//! every row exactly once in table order.
//!
//! Rows that share an opcode but render differently in assembly (the
//! immediate-arithmetic table carries loads and `jalr` alongside `addi` and
//! the shifts) carry their rendering sub-kind as data, resolved here at
//! table construction rather than by string comparison at generation time.

use std::fmt;

use crate::isa::{funct3, funct7, opcodes, system};

/// The seven-format alphabet this generator draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register arithmetic (R-type).
    Register,
    /// Immediate arithmetic, loads, and JALR (I-type).
    Immediate,
    /// Stores (S-type).
    Store,
    /// Conditional branches (B-type).
    Branch,
    /// LUI / AUIPC (U-type).
    Upper,
    /// JAL (J-type).
    Jump,
    /// Zero-operand system and fence instructions (fixed encodings).
    System,
}

impl Format {
    /// Every format, in the order used for directed "all formats" runs.
    pub const ALL: [Self; 7] = [
        Self::Register,
        Self::Immediate,
        Self::Store,
        Self::Branch,
        Self::Upper,
        Self::Jump,
        Self::System,
    ];

    /// Short lowercase tag used in artifact file names.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Register => "r",
            Self::Immediate => "i",
            Self::Store => "s",
            Self::Branch => "b",
            Self::Upper => "u",
            Self::Jump => "j",
            Self::System => "sys",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Register => "R",
            Self::Immediate => "I",
            Self::Store => "S",
            Self::Branch => "B",
            Self::Upper => "U",
            Self::Jump => "J",
            Self::System => "SYS",
        })
    }
}

/// R-type catalog row. Opcode is always [`opcodes::OP_REG`]; funct7 and
/// funct3 jointly disambiguate the eight operations.
#[derive(Debug)]
pub struct RegOp {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Minor function code (bits 14-12).
    pub funct3: u32,
    /// Major function code (bits 31-25).
    pub funct7: u32,
}

/// Register-register operations.
pub static REG_OPS: [RegOp; 8] = [
    RegOp { mnemonic: "add", funct3: funct3::ADD_SUB, funct7: funct7::DEFAULT },
    RegOp { mnemonic: "sub", funct3: funct3::ADD_SUB, funct7: funct7::SUB },
    RegOp { mnemonic: "and", funct3: funct3::AND, funct7: funct7::DEFAULT },
    RegOp { mnemonic: "or", funct3: funct3::OR, funct7: funct7::DEFAULT },
    RegOp { mnemonic: "xor", funct3: funct3::XOR, funct7: funct7::DEFAULT },
    RegOp { mnemonic: "sll", funct3: funct3::SLL, funct7: funct7::DEFAULT },
    RegOp { mnemonic: "srl", funct3: funct3::SRL_SRA, funct7: funct7::DEFAULT },
    RegOp { mnemonic: "sra", funct3: funct3::SRL_SRA, funct7: funct7::SRA },
];

/// Rendering and operand sub-kind of an I-type row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmKind {
    /// `mn rd, rs1, imm` with a signed 12-bit immediate.
    Arith,
    /// `mn rd, rs1, shamt`; low 5 immediate bits carry an unsigned shift
    /// amount, upper 7 forced to zero.
    Shift,
    /// `mn rd, imm(rs1)` memory load.
    Load,
    /// `jalr rd, imm(rs1)`.
    Jalr,
}

/// I-type catalog row. Loads and JALR carry their own opcodes, so each row
/// records its opcode explicitly.
#[derive(Debug)]
pub struct ImmOp {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Major opcode (bits 6-0).
    pub opcode: u32,
    /// Minor function code (bits 14-12).
    pub funct3: u32,
    /// Operand and rendering sub-kind.
    pub kind: ImmKind,
}

/// Immediate-arithmetic, shift, load, and JALR operations.
pub static IMM_OPS: [ImmOp; 12] = [
    ImmOp { mnemonic: "addi", opcode: opcodes::OP_IMM, funct3: funct3::ADD_SUB, kind: ImmKind::Arith },
    ImmOp { mnemonic: "andi", opcode: opcodes::OP_IMM, funct3: funct3::AND, kind: ImmKind::Arith },
    ImmOp { mnemonic: "ori", opcode: opcodes::OP_IMM, funct3: funct3::OR, kind: ImmKind::Arith },
    ImmOp { mnemonic: "xori", opcode: opcodes::OP_IMM, funct3: funct3::XOR, kind: ImmKind::Arith },
    ImmOp { mnemonic: "slli", opcode: opcodes::OP_IMM, funct3: funct3::SLL, kind: ImmKind::Shift },
    ImmOp { mnemonic: "srli", opcode: opcodes::OP_IMM, funct3: funct3::SRL_SRA, kind: ImmKind::Shift },
    ImmOp { mnemonic: "jalr", opcode: opcodes::OP_JALR, funct3: funct3::JALR, kind: ImmKind::Jalr },
    ImmOp { mnemonic: "lb", opcode: opcodes::OP_LOAD, funct3: funct3::LB, kind: ImmKind::Load },
    ImmOp { mnemonic: "lh", opcode: opcodes::OP_LOAD, funct3: funct3::LH, kind: ImmKind::Load },
    ImmOp { mnemonic: "lw", opcode: opcodes::OP_LOAD, funct3: funct3::LW, kind: ImmKind::Load },
    ImmOp { mnemonic: "lbu", opcode: opcodes::OP_LOAD, funct3: funct3::LBU, kind: ImmKind::Load },
    ImmOp { mnemonic: "lhu", opcode: opcodes::OP_LOAD, funct3: funct3::LHU, kind: ImmKind::Load },
];

/// S-type catalog row. Opcode is always [`opcodes::OP_STORE`].
#[derive(Debug)]
pub struct StoreOp {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Store width function code (bits 14-12).
    pub funct3: u32,
}

/// Store operations, narrowest width first.
pub static STORE_OPS: [StoreOp; 3] = [
    StoreOp { mnemonic: "sb", funct3: funct3::SB },
    StoreOp { mnemonic: "sh", funct3: funct3::SH },
    StoreOp { mnemonic: "sw", funct3: funct3::SW },
];

/// B-type catalog row. Opcode is always [`opcodes::OP_BRANCH`].
#[derive(Debug)]
pub struct BranchOp {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Comparison function code (bits 14-12).
    pub funct3: u32,
}

/// Conditional branch operations.
pub static BRANCH_OPS: [BranchOp; 6] = [
    BranchOp { mnemonic: "beq", funct3: funct3::BEQ },
    BranchOp { mnemonic: "bne", funct3: funct3::BNE },
    BranchOp { mnemonic: "blt", funct3: funct3::BLT },
    BranchOp { mnemonic: "bge", funct3: funct3::BGE },
    BranchOp { mnemonic: "bltu", funct3: funct3::BLTU },
    BranchOp { mnemonic: "bgeu", funct3: funct3::BGEU },
];

/// U-type catalog row. The two rows differ only in opcode.
#[derive(Debug)]
pub struct UpperOp {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Major opcode (bits 6-0).
    pub opcode: u32,
}

/// Upper-immediate operations.
pub static UPPER_OPS: [UpperOp; 2] = [
    UpperOp { mnemonic: "lui", opcode: opcodes::OP_LUI },
    UpperOp { mnemonic: "auipc", opcode: opcodes::OP_AUIPC },
];

/// System catalog row: a complete pre-computed encoding.
#[derive(Debug)]
pub struct SystemOp {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Full 32-bit instruction word.
    pub word: u32,
}

/// Zero-operand system and fence instructions.
pub static SYSTEM_OPS: [SystemOp; 5] = [
    SystemOp { mnemonic: "ecall", word: system::ECALL },
    SystemOp { mnemonic: "ebreak", word: system::EBREAK },
    SystemOp { mnemonic: "fence", word: system::FENCE },
    SystemOp { mnemonic: "fence.tso", word: system::FENCE_TSO },
    SystemOp { mnemonic: "pause", word: system::PAUSE },
];

/// The `addi` row, used by catalog walks to prime registers.
pub static ADDI: &ImmOp = &IMM_OPS[0];

/// The `lui` row, used by the store walk to build wide data patterns.
pub static LUI: &UpperOp = &UPPER_OPS[0];

/// Terminator appended to every catalog walk.
pub static TERMINATOR: &SystemOp = &SYSTEM_OPS[0];
