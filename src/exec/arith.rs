//! ARITH group (R3 shape): register-register arithmetic, logic,
//! comparison, multiply, and divide.
//!
//! The multiply-high variants are computed via Rust's native 128-bit
//! widening multiply.

use crate::bits;
use crate::dispatch::ExecFn;
use crate::error::ExecutionError;
use crate::exec::fault;
use crate::opcodes::*;
use crate::vm::Vm;

fn operands(vm: &Vm, word: u32) -> Result<(usize, u64, u64), ExecutionError> {
    let rd = bits::r3_rd(word);
    let ra = vm.registers.read(bits::r3_ra(word))?;
    let rb = vm.registers.read(bits::r3_rb(word))?;
    Ok((rd, ra, rb))
}

macro_rules! binop {
    ($name:ident, |$a:ident, $b:ident| $body:expr) => {
        pub fn $name(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
            let (rd, $a, $b) = operands(vm, word)?;
            let result = $body;
            vm.registers.write(rd, result)?;
            Ok(())
        }
    };
}

binop!(add, |a, b| a.wrapping_add(b));
binop!(sub, |a, b| a.wrapping_sub(b));
binop!(sll, |a, b| a.wrapping_shl((b & 0x3f) as u32));
binop!(srl, |a, b| a.wrapping_shr((b & 0x3f) as u32));
binop!(sra, |a, b| ((a as i64).wrapping_shr((b & 0x3f) as u32)) as u64);
binop!(and, |a, b| a & b);
binop!(or, |a, b| a | b);
binop!(xor, |a, b| a ^ b);
binop!(slt, |a, b| ((a as i64) < (b as i64)) as u64);
binop!(sltu, |a, b| (a < b) as u64);
binop!(mul, |a, b| a.wrapping_mul(b));

pub fn mulh(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, a, b) = operands(vm, word)?;
    let product = (a as i64 as i128).wrapping_mul(b as i64 as i128);
    vm.registers.write(rd, (product >> 64) as u64)?;
    Ok(())
}

pub fn mulhu(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, a, b) = operands(vm, word)?;
    let product = (a as u128).wrapping_mul(b as u128);
    vm.registers.write(rd, (product >> 64) as u64)?;
    Ok(())
}

pub fn mulhsu(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, a, b) = operands(vm, word)?;
    let product = (a as i64 as i128 as u128).wrapping_mul(b as u128);
    vm.registers.write(rd, (product >> 64) as u64)?;
    Ok(())
}

pub fn div(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, a, b) = operands(vm, word)?;
    let (a, b) = (a as i64, b as i64);
    let result = if b == 0 {
        -1i64
    } else if a == i64::MIN && b == -1 {
        i64::MIN
    } else {
        a.wrapping_div(b)
    };
    vm.registers.write(rd, result as u64)?;
    Ok(())
}

pub fn rem(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, a, b) = operands(vm, word)?;
    let (a, b) = (a as i64, b as i64);
    let result = if b == 0 {
        a
    } else if a == i64::MIN && b == -1 {
        0
    } else {
        a.wrapping_rem(b)
    };
    vm.registers.write(rd, result as u64)?;
    Ok(())
}

pub fn divu(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, a, b) = operands(vm, word)?;
    let result = if b == 0 { u64::MAX } else { a / b };
    vm.registers.write(rd, result)?;
    Ok(())
}

pub fn remu(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    let (rd, a, b) = operands(vm, word)?;
    let result = if b == 0 { a } else { a % b };
    vm.registers.write(rd, result)?;
    Ok(())
}

pub static TABLE: [ExecFn; ARITH_TABLE_LEN] = {
    let mut table: [ExecFn; ARITH_TABLE_LEN] = [fault; ARITH_TABLE_LEN];
    table[ARITH_ADD as usize] = add;
    table[ARITH_SUB as usize] = sub;
    table[ARITH_SLL as usize] = sll;
    table[ARITH_SRL as usize] = srl;
    table[ARITH_SRA as usize] = sra;
    table[ARITH_AND as usize] = and;
    table[ARITH_OR as usize] = or;
    table[ARITH_XOR as usize] = xor;
    table[ARITH_SLT as usize] = slt;
    table[ARITH_SLTU as usize] = sltu;
    table[ARITH_MUL as usize] = mul;
    table[ARITH_MULH as usize] = mulh;
    table[ARITH_MULHU as usize] = mulhu;
    table[ARITH_MULHSU as usize] = mulhsu;
    table[ARITH_DIV as usize] = div;
    table[ARITH_REM as usize] = rem;
    table[ARITH_DIVU as usize] = divu;
    table[ARITH_REMU as usize] = remu;
    table
};
