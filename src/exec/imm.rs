//! IMM group (R2I1 shape, plus the IMM_SHIFT sub-shape): register-immediate
//! arithmetic, logic, comparison, and shifts.

use crate::bits;
use crate::dispatch::ExecFn;
use crate::error::ExecutionError;
use crate::exec::fault;
use crate::opcodes::*;
use crate::vm::Vm;

fn signed_operands(vm: &Vm, word: u32) -> Result<(usize, i64, i64), ExecutionError> {
    let rd = bits::r2i1_rd(word);
    let ra = vm.registers.read(bits::r2i1_ra(word))? as i64;
    Ok((rd, ra, bits::r2i1_imm_signed(word)))
}

fn unsigned_operands(vm: &Vm, word: u32) -> Result<(usize, u64, u64), ExecutionError> {
    let rd = bits::r2i1_rd(word);
    let ra = vm.registers.read(bits::r2i1_ra(word))?;
    Ok((rd, ra, bits::r2i1_imm_raw(word)))
}

pub fn addi(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, imm) = signed_operands(vm, word)?;
    vm.registers.write(rd, ra.wrapping_add(imm) as u64)?;
    Ok(())
}

pub fn muli(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, imm) = signed_operands(vm, word)?;
    vm.registers.write(rd, ra.wrapping_mul(imm) as u64)?;
    Ok(())
}

pub fn slti(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, imm) = signed_operands(vm, word)?;
    vm.registers.write(rd, (ra < imm) as u64)?;
    Ok(())
}

pub fn sltui(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, imm) = unsigned_operands(vm, word)?;
    vm.registers.write(rd, (ra < imm) as u64)?;
    Ok(())
}

pub fn andi(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, imm) = unsigned_operands(vm, word)?;
    vm.registers.write(rd, ra & imm)?;
    Ok(())
}

pub fn ori(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, imm) = unsigned_operands(vm, word)?;
    vm.registers.write(rd, ra | imm)?;
    Ok(())
}

pub fn xori(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, imm) = unsigned_operands(vm, word)?;
    vm.registers.write(rd, ra ^ imm)?;
    Ok(())
}

pub static TABLE: [ExecFn; IMM_TABLE_LEN] = {
    let mut table: [ExecFn; IMM_TABLE_LEN] = [fault; IMM_TABLE_LEN];
    table[IMM_ADDI as usize] = addi;
    table[IMM_MULI as usize] = muli;
    table[IMM_SLTI as usize] = slti;
    table[IMM_SLTUI as usize] = sltui;
    table[IMM_ANDI as usize] = andi;
    table[IMM_ORI as usize] = ori;
    table[IMM_XORI as usize] = xori;
    table
};

fn shift_operands(vm: &Vm, word: u32) -> Result<(usize, u64, u32), ExecutionError> {
    let rd = bits::r2i1_rd(word);
    let ra = vm.registers.read(bits::r2i1_ra(word))?;
    // Only the low 6 bits of the 10-bit shift-immediate field are
    // significant.
    let count = bits::imm_shift_count(word) & 0x3f;
    Ok((rd, ra, count))
}

pub fn slli(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, count) = shift_operands(vm, word)?;
    vm.registers.write(rd, ra.wrapping_shl(count))?;
    Ok(())
}

pub fn srli(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, count) = shift_operands(vm, word)?;
    vm.registers.write(rd, ra.wrapping_shr(count))?;
    Ok(())
}

pub fn srai(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, ra, count) = shift_operands(vm, word)?;
    vm.registers
        .write(rd, (ra as i64).wrapping_shr(count) as u64)?;
    Ok(())
}

pub static SHIFT_TABLE: [ExecFn; IMM_SHIFT_TABLE_LEN] = {
    let mut table: [ExecFn; IMM_SHIFT_TABLE_LEN] = [fault; IMM_SHIFT_TABLE_LEN];
    table[IMM_SHIFT_SLLI as usize] = slli;
    table[IMM_SHIFT_SRLI as usize] = srli;
    table[IMM_SHIFT_SRAI as usize] = srai;
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    fn r2i1_word(op2: u32, rd: usize, ra: usize, imm: u32) -> u32 {
        (rd as u32) << 7 | (ra as u32) << 12 | op2 << 17 | (imm & 0xfff) << 20
    }

    fn shift_word(op3: u32, rd: usize, ra: usize, count: u32) -> u32 {
        (rd as u32) << 7 | (ra as u32) << 12 | IMM_SHIFT_SELECTOR << 17 | op3 << 20 | (count & 0x3ff) << 22
    }

    #[test]
    fn addi_sign_extends_negative_immediate() {
        let mut vm = Vm::new(64);
        vm.registers.write(8, 10).unwrap();
        addi(&mut vm, r2i1_word(IMM_ADDI, 9, 8, 0xfff)).unwrap();
        assert_eq!(vm.registers.read(9).unwrap(), 9);
    }

    #[test]
    fn andi_zero_extends() {
        let mut vm = Vm::new(64);
        vm.registers.write(8, 0xffff_ffff_ffff_ffff).unwrap();
        andi(&mut vm, r2i1_word(IMM_ANDI, 9, 8, 0x0f0)).unwrap();
        assert_eq!(vm.registers.read(9).unwrap(), 0x0f0);
    }

    #[test]
    fn shift_count_is_masked_to_six_bits() {
        let mut vm = Vm::new(64);
        vm.registers.write(8, 1).unwrap();
        // count = 64 -> masked to 0, a no-op shift.
        slli(&mut vm, shift_word(IMM_SHIFT_SLLI, 9, 8, 64)).unwrap();
        assert_eq!(vm.registers.read(9).unwrap(), 1);
    }

    #[test]
    fn srai_is_arithmetic() {
        let mut vm = Vm::new(64);
        vm.registers.write(8, (-8i64) as u64).unwrap();
        srai(&mut vm, shift_word(IMM_SHIFT_SRAI, 9, 8, 1)).unwrap();
        assert_eq!(vm.registers.read(9).unwrap() as i64, -4);
    }
}
