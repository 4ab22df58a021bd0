//! LOAD and SAVE groups (R2I1 shape): memory access through the data
//! region.
//!
//! LOAD computes `EA = X[ra] + sxt(imm)` and loads into `rd`. SAVE's
//! addressing differs: the *address* is `X[rd]` with no immediate
//! applied, while the *value* stored is `X[ra] + sxt(imm)` truncated
//! to the access width.

use crate::bits;
use crate::dispatch::ExecFn;
use crate::error::ExecutionError;
use crate::exec::fault;
use crate::opcodes::*;
use crate::vm::Vm;

fn effective_address(vm: &Vm, word: u32) -> Result<u64, ExecutionError> {
    let ra = vm.registers.read(bits::r2i1_ra(word))?;
    Ok((ra as i64).wrapping_add(bits::r2i1_imm_signed(word)) as u64)
}

fn load(vm: &mut Vm, word: u32, width: u8, sign_extend: bool) -> Result<(), ExecutionError> {
    let addr = effective_address(vm, word)?;
    let raw = vm.data.read(addr, width)?;
    let value = if sign_extend {
        crate::bits::sign_extend(raw, width as u32 * 8) as u64
    } else {
        raw
    };
    vm.registers.write(bits::r2i1_rd(word), value)?;
    Ok(())
}

pub fn lb(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    load(vm, word, 1, true)
}
pub fn lh(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    load(vm, word, 2, true)
}
pub fn lw(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    load(vm, word, 4, true)
}
pub fn lbu(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    load(vm, word, 1, false)
}
pub fn lhu(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    load(vm, word, 2, false)
}
pub fn lwu(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    load(vm, word, 4, false)
}
pub fn ld(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    load(vm, word, 8, false)
}

pub static LOAD_TABLE: [ExecFn; LOAD_TABLE_LEN] = {
    let mut table: [ExecFn; LOAD_TABLE_LEN] = [fault; LOAD_TABLE_LEN];
    table[LOAD_LB as usize] = lb;
    table[LOAD_LH as usize] = lh;
    table[LOAD_LW as usize] = lw;
    table[LOAD_LBU as usize] = lbu;
    table[LOAD_LHU as usize] = lhu;
    table[LOAD_LWU as usize] = lwu;
    table[LOAD_LD as usize] = ld;
    table
};

fn save(vm: &mut Vm, word: u32, width: u8) -> Result<(), ExecutionError> {
    let addr = vm.registers.read(bits::r2i1_rd(word))?;
    let ra = vm.registers.read(bits::r2i1_ra(word))? as i64;
    let value = ra.wrapping_add(bits::r2i1_imm_signed(word)) as u64;
    vm.data.write(addr, width, value)?;
    Ok(())
}

pub fn sb(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    save(vm, word, 1)
}
pub fn sh(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    save(vm, word, 2)
}
pub fn sw(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    save(vm, word, 4)
}
pub fn sd(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    save(vm, word, 8)
}

pub static SAVE_TABLE: [ExecFn; SAVE_TABLE_LEN] = {
    let mut table: [ExecFn; SAVE_TABLE_LEN] = [fault; SAVE_TABLE_LEN];
    table[SAVE_SB as usize] = sb;
    table[SAVE_SH as usize] = sh;
    table[SAVE_SW as usize] = sw;
    table[SAVE_SD as usize] = sd;
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    fn r2i1_word(op: u8, op2: u32, rd: usize, ra: usize, imm: u32) -> u32 {
        op as u32 | (rd as u32) << 7 | (ra as u32) << 12 | op2 << 17 | (imm & 0xfff) << 20
    }

    #[test]
    fn load_store_byte_round_trip() {
        let mut vm = Vm::new(64);
        // rd (address register) holds a writable offset.
        vm.registers.write(9, 0).unwrap(); // address base for SAVE's rd
        vm.registers.write(8, 0x42).unwrap(); // value source for SAVE's ra
        sb(&mut vm, r2i1_word(OP_SAVE, SAVE_SB, 9, 8, 0)).unwrap();
        vm.registers.write(8, 0).unwrap(); // address base for LOAD's ra
        lbu(&mut vm, r2i1_word(OP_LOAD, LOAD_LBU, 10, 8, 0)).unwrap();
        assert_eq!(vm.registers.read(10).unwrap(), 0x42);
    }

    #[test]
    fn save_address_ignores_the_immediate() {
        let mut vm = Vm::new(64);
        vm.registers.write(9, 4).unwrap(); // address register, fixed
        vm.registers.write(8, 1).unwrap();
        // A nonzero immediate must not perturb the store address.
        sb(&mut vm, r2i1_word(OP_SAVE, SAVE_SB, 9, 8, 20)).unwrap();
        assert_eq!(vm.data.read(4, 1).unwrap(), (1i64 + 20) as u64 & 0xff);
        assert_eq!(vm.data.read(24, 1).unwrap(), 0);
    }

    #[test]
    fn load_sign_extends_negative_byte() {
        let mut vm = Vm::new(64);
        vm.data.write(0, 1, 0xff).unwrap();
        vm.registers.write(8, 0).unwrap();
        lb(&mut vm, r2i1_word(OP_LOAD, LOAD_LB, 9, 8, 0)).unwrap();
        assert_eq!(vm.registers.read(9).unwrap() as i64, -1);
    }

    #[test]
    fn out_of_bounds_load_halts_rather_than_panicking() {
        let mut vm = Vm::new(64);
        vm.registers.write(8, 1000).unwrap();
        let err = lw(&mut vm, r2i1_word(OP_LOAD, LOAD_LW, 9, 8, 0));
        assert!(err.is_err());
    }
}
