//! Disassembler collaborator: renders a 32-bit instruction word as
//! `"MNEMONIC\top1, op2, op3\n"`, using the register alias names from
//! [`crate::registers`].

use crate::bits;
use crate::opcodes::*;
use crate::registers::name;

fn r3(mnemonic: &str, word: u32) -> String {
    format!(
        "{mnemonic}\t{}, {}, {}\n",
        name(bits::r3_rd(word)),
        name(bits::r3_ra(word)),
        name(bits::r3_rb(word))
    )
}

fn r2i1(mnemonic: &str, word: u32, imm_signed: bool) -> String {
    let imm = if imm_signed {
        bits::r2i1_imm_signed(word)
    } else {
        bits::r2i1_imm_raw(word) as i64
    };
    format!(
        "{mnemonic}\t{}, {}, {imm}\n",
        name(bits::r2i1_rd(word)),
        name(bits::r2i1_ra(word))
    )
}

fn r1i1(mnemonic: &str, word: u32) -> String {
    format!(
        "{mnemonic}\t{}, {}\n",
        name(bits::r1i1_rd(word)),
        bits::r1i1_imm(word)
    )
}

fn r1(mnemonic: &str, word: u32) -> String {
    format!("{mnemonic}\t{}\n", name(bits::r1_rd(word)))
}

fn v(mnemonic: &str) -> String {
    format!("{mnemonic}\n")
}

fn r2(mnemonic: &str, word: u32) -> String {
    format!(
        "{mnemonic}\t{}, {}\n",
        name(bits::r2_rd(word)),
        name(bits::r2_ra(word))
    )
}

/// Renders `word` as `"MNEMONIC\top1, op2, op3\n"`. Encodings with no
/// defined mnemonic render as `"???\t<hex>\n"` rather than panicking,
/// matching `exec::fault`'s policy of never crashing on an unknown
/// encoding.
pub fn disassemble(word: u32) -> String {
    match bits::opcode(word) {
        OP_ARITH => {
            let name = match bits::r3_op2(word) {
                ARITH_ADD => "ADD",
                ARITH_SUB => "SUB",
                ARITH_SLL => "SLL",
                ARITH_SRL => "SRL",
                ARITH_SRA => "SRA",
                ARITH_AND => "AND",
                ARITH_OR => "OR",
                ARITH_XOR => "XOR",
                ARITH_SLT => "SLT",
                ARITH_SLTU => "SLTU",
                ARITH_MUL => "MUL",
                ARITH_MULH => "MULH",
                ARITH_MULHU => "MULHU",
                ARITH_MULHSU => "MULHSU",
                ARITH_DIV => "DIV",
                ARITH_REM => "REM",
                ARITH_DIVU => "DIVU",
                ARITH_REMU => "REMU",
                _ => return unknown(word),
            };
            r3(name, word)
        }
        OP_LOAD => {
            let (name, signed) = match bits::r2i1_op2(word) {
                LOAD_LB => ("LB", true),
                LOAD_LH => ("LH", true),
                LOAD_LW => ("LW", true),
                LOAD_LBU => ("LBU", false),
                LOAD_LHU => ("LHU", false),
                LOAD_LWU => ("LWU", false),
                LOAD_LD => ("LD", false),
                _ => return unknown(word),
            };
            r2i1(name, word, signed)
        }
        OP_SAVE => {
            let name = match bits::r2i1_op2(word) {
                SAVE_SB => "SB",
                SAVE_SH => "SH",
                SAVE_SW => "SW",
                SAVE_SD => "SD",
                _ => return unknown(word),
            };
            r2i1(name, word, true)
        }
        OP_IMM => {
            let op2 = bits::r2i1_op2(word);
            if op2 == IMM_SHIFT_SELECTOR {
                let name = match bits::imm_shift_op3(word) {
                    IMM_SHIFT_SLLI => "SLLI",
                    IMM_SHIFT_SRLI => "SRLI",
                    IMM_SHIFT_SRAI => "SRAI",
                    _ => return unknown(word),
                };
                format!(
                    "{name}\t{}, {}, {}\n",
                    name_of(bits::r2i1_rd(word)),
                    name_of(bits::r2i1_ra(word)),
                    bits::imm_shift_count(word)
                )
            } else {
                let (name, signed) = match op2 {
                    IMM_ADDI => ("ADDI", true),
                    IMM_MULI => ("MULI", true),
                    IMM_SLTI => ("SLTI", true),
                    IMM_SLTUI => ("SLTUI", false),
                    IMM_ANDI => ("ANDI", false),
                    IMM_ORI => ("ORI", false),
                    IMM_XORI => ("XORI", false),
                    _ => return unknown(word),
                };
                r2i1(name, word, signed)
            }
        }
        OP_BRANCH => {
            let name = match bits::r2i1_op2(word) {
                BRANCH_JALR => "JALR",
                BRANCH_BEQ => "BEQ",
                BRANCH_BNE => "BNE",
                BRANCH_BLT => "BLT",
                BRANCH_BGE => "BGE",
                BRANCH_BLTU => "BLTU",
                BRANCH_BGEU => "BGEU",
                _ => return unknown(word),
            };
            r2i1(name, word, true)
        }
        OP_LUI => r1i1("LUI", word),
        OP_AUIPC => r1i1("AUIPC", word),
        OP_JAL => r1i1("JAL", word),
        op => {
            let byte = word as u8;
            let _ = op;
            if byte & UNIQUE_FLAG_V != 0 {
                match bits::op2_small(word) {
                    V_RET => v("RET"),
                    V_HLT => v("HLT"),
                    V_NOP => v("NOP"),
                    _ => unknown(word),
                }
            } else if byte & UNIQUE_FLAG_R1 != 0 {
                match bits::op2_small(word) {
                    R1_PUSH => r1("PUSH", word),
                    R1_POP => r1("POP", word),
                    R1_CALL => r1("CALL", word),
                    _ => unknown(word),
                }
            } else if byte & UNIQUE_FLAG_R2 != 0 {
                r2("MOV", word)
            } else {
                unknown(word)
            }
        }
    }
}

fn name_of(n: usize) -> String {
    name(n)
}

fn unknown(word: u32) -> String {
    format!("???\t{word:#010x}\n")
}
