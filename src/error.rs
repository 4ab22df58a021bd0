//! Error types for every fallible boundary in the VM.
//!
//! One small `thiserror` enum per concern, composed with `#[from]` at
//! the boundary that needs to widen the error (`ExecutionError` over
//! `RegisterError`/`MemoryError`).

use thiserror::Error;

use crate::memory::MemoryError;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    #[error("register index {0} is out of range")]
    IndexInvalid(usize),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    #[error(transparent)]
    Register(#[from] RegisterError),
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

/// The two recoverable fault codes `one_step`/`run` can return. A
/// bounds/register error inside an otherwise well-shaped instruction
/// does not produce a `StepFault`; it halts the VM instead
/// (`Vm::one_step` sets PC to 0 and returns `Ok(())`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepFault {
    #[error("pc {0:#x} is out of the program region")]
    PcOutOfProgram(u64),
    #[error("invalid instruction encoding {0:#010x} at pc {1:#x}")]
    InvalidCode(u32, u64),
}

impl StepFault {
    /// The numeric status code (`1` or `2`) for callers that want a
    /// plain status instead of the typed error.
    pub fn code(&self) -> i32 {
        match self {
            StepFault::PcOutOfProgram(_) => 1,
            StepFault::InvalidCode(..) => 2,
        }
    }
}
