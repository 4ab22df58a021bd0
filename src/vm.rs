//! The virtual machine: register file, memory regions, and the
//! fetch/decode/execute loop.
//!
//! The program counter lives inside the register file at index 0
//! (`registers::PC`), matching this instruction set's register-alias
//! convention.

use crate::dispatch;
use crate::error::{ExecutionError, StepFault};
use crate::memory::Region;
use crate::registers::{self, Registers};

pub const DEFAULT_MEMORY_LEN: usize = 64 * 1024 * 1024;

/// The VM's lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmState {
    Unloaded,
    Ready,
    Running,
    Halted,
    Faulted,
}

pub struct Vm {
    pub registers: Registers,
    pub code: Region,
    pub data: Region,
    pub rodata: Region,
    state: VmState,
}

impl Vm {
    /// Creates a VM with a `memory_len`-byte data region and seeds a
    /// zeroed saved-BP/saved-PC pair at the very top of the data
    /// region, with BP and SP pointing at it. A bare top-level `RET`
    /// therefore pops PC=0 and halts cleanly.
    pub fn new(memory_len: usize) -> Self {
        let mut data = Region::new_writable(memory_len);
        let frame_addr = (memory_len - 2 * 8) as u64;
        data.write(frame_addr, 8, 0).expect("frame fits in memory");
        data.write(frame_addr + 8, 8, 0)
            .expect("frame fits in memory");

        let mut registers = Registers::new();
        registers.write(registers::BP, frame_addr).unwrap();
        registers.write(registers::SP, frame_addr).unwrap();
        registers.write(registers::PC, 0).unwrap();

        Self {
            registers,
            code: Region::new_writable(0),
            data,
            rodata: Region::new_readonly(Vec::new()),
            state: VmState::Unloaded,
        }
    }

    pub fn state(&self) -> VmState {
        self.state
    }

    /// Loads `code` (and, optionally, `rodata`) and transitions to
    /// [`VmState::Ready`]. The program begins execution at offset 0 of
    /// the code region; callers that need a different entry point set
    /// `PC` explicitly after loading.
    pub fn load(&mut self, code: &[u8], rodata: &[u8]) {
        self.code = Region::new_writable(code.len());
        self.code.load(code);
        self.rodata = Region::new_readonly(rodata.to_vec());
        self.registers.write(registers::PC, 0).unwrap();
        self.state = VmState::Ready;
    }

    pub fn pc(&self) -> u64 {
        self.registers.read(registers::PC).unwrap()
    }

    pub fn set_pc(&mut self, value: u64) {
        self.registers.write(registers::PC, value).unwrap();
    }

    /// Executes a single instruction. Returns `Ok(())` on success
    /// (including a clean halt, observable via `state()`), `Err` for
    /// the two recoverable faults.
    pub fn one_step(&mut self) -> Result<(), StepFault> {
        let pc = self.pc();
        if pc % 4 != 0 || pc.checked_add(4).map_or(true, |end| end > self.code.len() as u64) {
            self.state = VmState::Faulted;
            return Err(StepFault::PcOutOfProgram(pc));
        }
        let word = self
            .code
            .read(pc, 4)
            .expect("bounds already checked above") as u32;
        self.set_pc(pc + 4);

        match dispatch::execute(self, word) {
            Ok(()) => {
                if self.pc() == 0 {
                    self.state = VmState::Halted;
                }
                Ok(())
            }
            Err(DispatchOutcome::InvalidCode) => {
                self.state = VmState::Faulted;
                Err(StepFault::InvalidCode(word, pc))
            }
            Err(DispatchOutcome::Execution(_)) => {
                // A bounds/register error inside an otherwise valid
                // instruction halts the VM rather than propagating as
                // a decode-level fault.
                self.set_pc(0);
                self.state = VmState::Halted;
                Ok(())
            }
        }
    }

    /// Runs until halt or fault. `target` caps the number of
    /// instructions executed (0 means unbounded).
    pub fn run(&mut self, target: u64) -> Result<(), StepFault> {
        self.state = VmState::Running;
        let mut executed: u64 = 0;
        loop {
            if target != 0 && executed >= target {
                return Ok(());
            }
            self.one_step()?;
            executed += 1;
            if self.state == VmState::Halted {
                return Ok(());
            }
        }
    }
}

/// Internal dispatch result: distinguishes "no such sub-opcode"
/// (a decode-time fault) from "the instruction itself failed"
/// (halts rather than panicking).
pub(crate) enum DispatchOutcome {
    InvalidCode,
    Execution(ExecutionError),
}

impl From<ExecutionError> for DispatchOutcome {
    fn from(e: ExecutionError) -> Self {
        DispatchOutcome::Execution(e)
    }
}
