//! One module per instruction group, each exposing a `fn`-pointer
//! table indexed by sub-opcode, padded to the field's full value range
//! with [`fault`].

pub mod arith;
pub mod branch;
pub mod imm;
pub mod memop;
pub mod stack;
pub mod unique;
pub mod upper;

use crate::error::ExecutionError;
use crate::vm::Vm;

/// Fills unused table slots. An encoding that decodes to a shape but
/// has no defined mnemonic at that sub-opcode is a fatal instruction:
/// it halts rather than panicking or silently doing nothing.
pub fn fault(vm: &mut Vm, word: u32) -> Result<(), ExecutionError> {
    eprintln!(
        "regvm: no instruction defined for encoding {word:#010x} at pc {:#x}; halting",
        vm.pc().wrapping_sub(4)
    );
    vm.set_pc(0);
    Ok(())
}
