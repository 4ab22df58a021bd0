//! Primary-opcode dispatch: a `switch` over the primary opcode byte,
//! driving per-group sub-opcode tables built in `exec`.

use crate::bits;
use crate::error::ExecutionError;
use crate::exec;
use crate::opcodes::*;
use crate::vm::{DispatchOutcome, Vm};

pub type ExecFn = fn(&mut Vm, u32) -> Result<(), ExecutionError>;

pub fn execute(vm: &mut Vm, word: u32) -> Result<(), DispatchOutcome> {
    let op = bits::opcode(word);
    match op {
        OP_ARITH => {
            let idx = bits::r3_op2(word) as usize;
            (exec::arith::TABLE[idx])(vm, word)?;
            Ok(())
        }
        OP_LOAD => {
            let idx = bits::r2i1_op2(word) as usize;
            (exec::memop::LOAD_TABLE[idx])(vm, word)?;
            Ok(())
        }
        OP_SAVE => {
            let idx = bits::r2i1_op2(word) as usize;
            (exec::memop::SAVE_TABLE[idx])(vm, word)?;
            Ok(())
        }
        OP_IMM => {
            let idx = bits::r2i1_op2(word) as usize;
            if idx as u32 == IMM_SHIFT_SELECTOR {
                let shift_idx = bits::imm_shift_op3(word) as usize;
                (exec::imm::SHIFT_TABLE[shift_idx])(vm, word)?;
            } else {
                (exec::imm::TABLE[idx])(vm, word)?;
            }
            Ok(())
        }
        OP_BRANCH => {
            let idx = bits::r2i1_op2(word) as usize;
            (exec::branch::TABLE[idx])(vm, word)?;
            Ok(())
        }
        OP_LUI => {
            exec::upper::lui(vm, word)?;
            Ok(())
        }
        OP_AUIPC => {
            exec::upper::auipc(vm, word)?;
            Ok(())
        }
        OP_JAL => {
            exec::upper::jal(vm, word)?;
            Ok(())
        }
        _ => {
            let byte = word as u8;
            if byte & UNIQUE_FLAG_V != 0 {
                let idx = bits::op2_small(word) as usize;
                (exec::unique::V_TABLE[idx])(vm, word)?;
                Ok(())
            } else if byte & UNIQUE_FLAG_R1 != 0 {
                let idx = bits::op2_small(word) as usize;
                (exec::stack::R1_TABLE[idx])(vm, word)?;
                Ok(())
            } else if byte & UNIQUE_FLAG_R2 != 0 {
                exec::unique::mov(vm, word)?;
                Ok(())
            } else {
                Err(DispatchOutcome::InvalidCode)
            }
        }
    }
}
