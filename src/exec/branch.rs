//! BRANCH group (R2I1 shape): JALR and the six conditional branches.
//!
//! Branch offsets and the JALR target are shifted left by one (2-byte
//! granularity) before being added to PC.

use crate::bits;
use crate::dispatch::ExecFn;
use crate::error::ExecutionError;
use crate::exec::fault;
use crate::opcodes::*;
use crate::registers::PC;
use crate::vm::Vm;

pub fn jalr(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let rd = bits::r2i1_rd(word);
    let ra_value = vm.registers.read(bits::r2i1_ra(word))?;
    let imm = bits::r2i1_imm_signed(word);
    let return_pc = vm.registers.read(PC)?;
    vm.registers.write(rd, return_pc)?;
    let target = (ra_value as i64).wrapping_add(imm << 1) as u64;
    vm.registers.write(PC, target)?;
    Ok(())
}

fn branch_if(vm: &mut Vm, word: u32, taken: bool) -> Result<(), ExecutionError> {
    if taken {
        let imm = bits::r2i1_imm_signed(word);
        let pc = vm.registers.read(PC)? as i64;
        vm.registers.write(PC, pc.wrapping_add(imm << 1) as u64)?;
    }
    Ok(())
}

fn operands(vm: &Vm, word: u32) -> Result<(u64, u64), ExecutionError> {
    let rd = vm.registers.read(bits::r2i1_rd(word))?;
    let ra = vm.registers.read(bits::r2i1_ra(word))?;
    Ok((rd, ra))
}

pub fn beq(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (a, b) = operands(vm, word)?;
    branch_if(vm, word, a == b)
}
pub fn bne(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (a, b) = operands(vm, word)?;
    branch_if(vm, word, a != b)
}
pub fn blt(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (a, b) = operands(vm, word)?;
    branch_if(vm, word, (a as i64) < (b as i64))
}
pub fn bge(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (a, b) = operands(vm, word)?;
    branch_if(vm, word, (a as i64) >= (b as i64))
}
pub fn bltu(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (a, b) = operands(vm, word)?;
    branch_if(vm, word, a < b)
}
pub fn bgeu(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (a, b) = operands(vm, word)?;
    branch_if(vm, word, a >= b)
}

pub static TABLE: [ExecFn; BRANCH_TABLE_LEN] = {
    let mut table: [ExecFn; BRANCH_TABLE_LEN] = [fault; BRANCH_TABLE_LEN];
    table[BRANCH_JALR as usize] = jalr;
    table[BRANCH_BEQ as usize] = beq;
    table[BRANCH_BNE as usize] = bne;
    table[BRANCH_BLT as usize] = blt;
    table[BRANCH_BGE as usize] = bge;
    table[BRANCH_BLTU as usize] = bltu;
    table[BRANCH_BGEU as usize] = bgeu;
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    fn r2i1_word(op2: u32, rd: usize, ra: usize, imm: u32) -> u32 {
        (rd as u32) << 7 | (ra as u32) << 12 | op2 << 17 | (imm & 0xfff) << 20
    }

    #[test]
    fn blt_taken_shifts_immediate_left_by_one() {
        let mut vm = Vm::new(64);
        vm.registers.write(PC, 100).unwrap();
        vm.registers.write(8, 1).unwrap();
        vm.registers.write(9, 2).unwrap();
        blt(&mut vm, r2i1_word(BRANCH_BLT, 8, 9, 4)).unwrap();
        assert_eq!(vm.registers.read(PC).unwrap(), 108);
    }

    #[test]
    fn branch_not_taken_leaves_pc_untouched() {
        let mut vm = Vm::new(64);
        vm.registers.write(PC, 100).unwrap();
        vm.registers.write(8, 2).unwrap();
        vm.registers.write(9, 1).unwrap();
        blt(&mut vm, r2i1_word(BRANCH_BLT, 8, 9, 4)).unwrap();
        assert_eq!(vm.registers.read(PC).unwrap(), 100);
    }

    #[test]
    fn jalr_captures_source_before_overwriting_destination() {
        let mut vm = Vm::new(64);
        vm.registers.write(PC, 40).unwrap();
        vm.registers.write(8, 16).unwrap();
        // rd == ra: must read ra's value before the write to rd lands.
        jalr(&mut vm, r2i1_word(BRANCH_JALR, 8, 8, 0)).unwrap();
        assert_eq!(vm.registers.read(PC).unwrap(), 16);
    }
}
