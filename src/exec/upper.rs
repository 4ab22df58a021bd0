//! R1I1 shape: LUI, AUIPC, JAL, the three wide-immediate instructions.
//!
//! LUI adds its shifted immediate into `rd` rather than overwriting it.

use crate::bits;
use crate::error::ExecutionError;
use crate::registers::PC;
use crate::vm::Vm;

pub fn lui(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let rd = bits::r1i1_rd(word);
    let current = vm.registers.read(rd)?;
    let imm = bits::r1i1_imm(word);
    vm.registers.write(rd, current.wrapping_add((imm << 12) as u64))?;
    Ok(())
}

pub fn auipc(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let rd = bits::r1i1_rd(word);
    let pc = vm.registers.read(PC)?;
    let imm = bits::r1i1_imm(word);
    vm.registers.write(rd, (pc as i64).wrapping_add(imm << 12) as u64)?;
    Ok(())
}

pub fn jal(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let rd = bits::r1i1_rd(word);
    let pc = vm.registers.read(PC)?;
    vm.registers.write(rd, pc)?;
    let imm = bits::r1i1_imm(word);
    vm.registers.write(PC, (pc as i64).wrapping_add(imm << 1) as u64)?;
    Ok(())
}
