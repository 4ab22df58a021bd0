//! "Unique" V shape (RET, HLT, NOP) and R2 shape (MOV).
//!
//! RET restores the saved BP/PC frame and pops the stack back past it.
//! HLT halts immediately. NOP does nothing and advances PC normally.

use crate::bits;
use crate::dispatch::ExecFn;
use crate::error::ExecutionError;
use crate::exec::fault;
use crate::opcodes::*;
use crate::registers::{BP, PC, SP};
use crate::vm::Vm;

pub fn ret(vm: &mut Vm, _word: u32) -> Result<(), ExecutionError> {
    let bp = vm.registers.read(BP)?;
    let saved_bp = vm.data.read(bp, 8)?;
    let saved_pc = vm.data.read(bp + 8, 8)?;
    vm.registers.write(SP, bp + 16)?;
    vm.registers.write(BP, saved_bp)?;
    vm.registers.write(PC, saved_pc)?;
    Ok(())
}

pub fn hlt(vm: &mut Vm, _word: u32) -> Result<(), ExecutionError> {
    vm.registers.write(PC, 0)?;
    Ok(())
}

pub fn nop(_vm: &mut Vm, _word: u32) -> Result<(), ExecutionError> {
    Ok(())
}

pub static V_TABLE: [ExecFn; V_TABLE_LEN] = {
    let mut table: [ExecFn; V_TABLE_LEN] = [fault; V_TABLE_LEN];
    table[V_RET as usize] = ret;
    table[V_HLT as usize] = hlt;
    table[V_NOP as usize] = nop;
    table
};

pub fn mov(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let rd = bits::r2_rd(word);
    let value = vm.registers.read(bits::r2_ra(word))?;
    vm.registers.write(rd, value)?;
    Ok(())
}
