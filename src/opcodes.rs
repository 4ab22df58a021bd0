//! Primary and sub-opcode constants.

// Primary opcodes (bits 6..0).
pub const OP_ARITH: u8 = 0;
pub const OP_LOAD: u8 = 1;
pub const OP_SAVE: u8 = 2;
pub const OP_IMM: u8 = 3;
pub const OP_BRANCH: u8 = 4;
pub const OP_LUI: u8 = 5;
pub const OP_AUIPC: u8 = 6;
pub const OP_JAL: u8 = 7;

/// Flag bits distinguishing the "unique" (group-less) shapes from one
/// another when the primary opcode is none of the eight above: V
/// (bit 3), R1 (bit 4), R2 (bit 5).
pub const UNIQUE_FLAG_V: u8 = 0x08;
pub const UNIQUE_FLAG_R1: u8 = 0x10;
pub const UNIQUE_FLAG_R2: u8 = 0x20;

// ARITH group sub-opcodes (R3).
pub const ARITH_ADD: u32 = 0;
pub const ARITH_SUB: u32 = 1;
pub const ARITH_SLL: u32 = 2;
pub const ARITH_SRL: u32 = 3;
pub const ARITH_SRA: u32 = 4;
pub const ARITH_AND: u32 = 5;
pub const ARITH_OR: u32 = 6;
pub const ARITH_XOR: u32 = 7;
pub const ARITH_SLT: u32 = 8;
pub const ARITH_SLTU: u32 = 9;
pub const ARITH_MUL: u32 = 10;
pub const ARITH_MULH: u32 = 11;
pub const ARITH_MULHU: u32 = 12;
pub const ARITH_MULHSU: u32 = 13;
pub const ARITH_DIV: u32 = 14;
pub const ARITH_REM: u32 = 15;
pub const ARITH_DIVU: u32 = 16;
pub const ARITH_REMU: u32 = 17;
pub const ARITH_TABLE_LEN: usize = 32;

// LOAD group sub-opcodes (R2I1).
pub const LOAD_LB: u32 = 0;
pub const LOAD_LH: u32 = 1;
pub const LOAD_LW: u32 = 2;
pub const LOAD_LBU: u32 = 3;
pub const LOAD_LHU: u32 = 4;
pub const LOAD_LWU: u32 = 5;
pub const LOAD_LD: u32 = 6;
pub const LOAD_TABLE_LEN: usize = 8;

// SAVE group sub-opcodes (R2I1).
pub const SAVE_SB: u32 = 0;
pub const SAVE_SH: u32 = 1;
pub const SAVE_SW: u32 = 2;
pub const SAVE_SD: u32 = 3;
pub const SAVE_TABLE_LEN: usize = 8;

// IMM group sub-opcodes (R2I1).
pub const IMM_ADDI: u32 = 0;
pub const IMM_MULI: u32 = 1;
pub const IMM_SLTI: u32 = 2;
pub const IMM_SLTUI: u32 = 3;
pub const IMM_ANDI: u32 = 4;
pub const IMM_ORI: u32 = 5;
pub const IMM_XORI: u32 = 6;
pub const IMM_SHIFT_SELECTOR: u32 = 7;
pub const IMM_TABLE_LEN: usize = 8;

// IMM_SHIFT sub-shape sub-opcodes.
pub const IMM_SHIFT_SLLI: u32 = 0;
pub const IMM_SHIFT_SRLI: u32 = 1;
pub const IMM_SHIFT_SRAI: u32 = 2;
pub const IMM_SHIFT_TABLE_LEN: usize = 4;

// BRANCH group sub-opcodes (R2I1).
pub const BRANCH_JALR: u32 = 0;
pub const BRANCH_BEQ: u32 = 1;
pub const BRANCH_BNE: u32 = 2;
pub const BRANCH_BLT: u32 = 3;
pub const BRANCH_BGE: u32 = 4;
pub const BRANCH_BLTU: u32 = 5;
pub const BRANCH_BGEU: u32 = 6;
pub const BRANCH_TABLE_LEN: usize = 8;

// "Unique" V-shape sub-opcodes.
pub const V_RET: u32 = 0;
pub const V_HLT: u32 = 1;
pub const V_NOP: u32 = 2;
pub const V_TABLE_LEN: usize = 8;

// "Unique" R1-shape sub-opcodes.
pub const R1_PUSH: u32 = 0;
pub const R1_POP: u32 = 1;
pub const R1_CALL: u32 = 2;
pub const R1_TABLE_LEN: usize = 8;

// R2 shape carries a single instruction (MOV), so it needs no
// sub-opcode table; UNIQUE_FLAG_R2 alone selects it.
