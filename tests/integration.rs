//! End-to-end instruction-stream scenarios.
//!
//! Each test assembles a tiny raw instruction stream by hand (no
//! assembler is in scope) and runs it on a fresh [`Vm`].

use regvm::opcodes::*;
use regvm::registers::{BP, PC, RV, SP, ZR};
use regvm::vm::Vm;

fn r3(op2: u32, rd: usize, ra: usize, rb: usize) -> u32 {
    OP_ARITH as u32 | (rd as u32) << 7 | (ra as u32) << 12 | (rb as u32) << 17 | op2 << 22
}

fn r2i1(op: u8, op2: u32, rd: usize, ra: usize, imm: i64) -> u32 {
    op as u32 | (rd as u32) << 7 | (ra as u32) << 12 | op2 << 17 | ((imm as u32) & 0xfff) << 20
}

fn addi(rd: usize, ra: usize, imm: i64) -> u32 {
    r2i1(OP_IMM, IMM_ADDI, rd, ra, imm)
}

fn r1i1(op: u8, rd: usize, imm: i64) -> u32 {
    op as u32 | (rd as u32) << 7 | ((imm as u32) & 0xf_ffff) << 12
}

fn v(op2: u32) -> u32 {
    UNIQUE_FLAG_V as u32 | op2 << 7
}

fn r1(op2: u32, rd: usize) -> u32 {
    UNIQUE_FLAG_R1 as u32 | op2 << 7 | (rd as u32) << 10
}

fn code_of(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

#[test]
fn add_two_constants_via_lui_addi_add() {
    let words = [
        r1i1(OP_LUI, 8, 1),            // LUI X08, 1          -> X08 = 0x1000
        addi(8, 8, 0x234),              // ADDI X08, X08, 0x234 -> X08 = 0x1234
        r1i1(OP_LUI, 9, 0),             // LUI X09, 0
        addi(9, 9, 0x111),              // ADDI X09, X09, 0x111 -> X09 = 0x111
        r3(ARITH_ADD, 10, 8, 9),         // ADD X10, X08, X09
        v(V_HLT),
    ];
    let mut vm = Vm::new(4096);
    vm.load(&code_of(&words), &[]);
    vm.run(0).unwrap();
    assert_eq!(vm.registers.read(10).unwrap(), 0x1345);
}

#[test]
fn signed_vs_unsigned_compare() {
    let words = [
        addi(8, ZR, -1),
        addi(9, ZR, 1),
        r3(ARITH_SLT, 10, 8, 9),
        r3(ARITH_SLTU, 11, 8, 9),
        v(V_HLT),
    ];
    let mut vm = Vm::new(4096);
    vm.load(&code_of(&words), &[]);
    vm.run(0).unwrap();
    assert_eq!(vm.registers.read(10).unwrap(), 1);
    assert_eq!(vm.registers.read(11).unwrap(), 0);
}

#[test]
fn loop_count_via_blt() {
    // 0: ADDI X08, ZR, 0
    // 4: ADDI X09, ZR, 10
    // 8: L: ADDI X08, X08, 1
    // 12: BLT X08, X09, L
    // 16: HLT
    let branch_target: i64 = 8;
    let branch_pc_after_fetch: i64 = 16;
    let imm = (branch_target - branch_pc_after_fetch) >> 1; // -4
    let words = [
        addi(8, ZR, 0),
        addi(9, ZR, 10),
        addi(8, 8, 1),
        r2i1(OP_BRANCH, BRANCH_BLT, 8, 9, imm),
        v(V_HLT),
    ];
    let mut vm = Vm::new(4096);
    vm.load(&code_of(&words), &[]);
    vm.run(0).unwrap();
    assert_eq!(vm.registers.read(8).unwrap(), 10);
}

#[test]
fn call_and_ret_round_trip_with_argument_passing() {
    // 0:  ADDI X08, ZR, 7
    // 4:  ADDI X09, ZR, 16      (address of f)
    // 8:  CALL X09
    // 12: HLT
    // 16: f: ADD RV, X08, X08
    // 20: RET
    let words = [
        addi(8, ZR, 7),
        addi(9, ZR, 16),
        r1(R1_CALL, 9),
        v(V_HLT),
        r3(ARITH_ADD, RV, 8, 8),
        v(V_RET),
    ];
    let mut vm = Vm::new(4096);
    let sp_before = vm.registers.read(SP).unwrap();
    let bp_before = vm.registers.read(BP).unwrap();
    vm.load(&code_of(&words), &[]);
    vm.run(0).unwrap();
    assert_eq!(vm.registers.read(RV).unwrap(), 14);
    assert_eq!(vm.registers.read(SP).unwrap(), sp_before);
    assert_eq!(vm.registers.read(BP).unwrap(), bp_before);
}

#[test]
fn bare_ret_halts_via_the_pre_wired_null_frame() {
    let words = [v(V_RET)];
    let mut vm = Vm::new(4096);
    vm.load(&code_of(&words), &[]);
    vm.run(0).unwrap();
    assert_eq!(vm.registers.read(PC).unwrap(), 0);
    assert_eq!(vm.state(), regvm::vm::VmState::Halted);
}

#[test]
fn memory_store_then_load_round_trip() {
    let words = [
        addi(8, ZR, 0x42),
        addi(9, ZR, 0),
        r2i1(OP_SAVE, SAVE_SB, 9, 8, 0), // SB X09, X08, 0
        r2i1(OP_LOAD, LOAD_LBU, 10, 9, 0), // LBU X10, X09, 0
        v(V_HLT),
    ];
    let mut vm = Vm::new(4096);
    vm.load(&code_of(&words), &[]);
    vm.run(0).unwrap();
    assert_eq!(vm.registers.read(10).unwrap(), 0x42);
}
