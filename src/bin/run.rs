//! Thin CLI front-end: load a program and run it to completion.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use regvm::vm::{Vm, DEFAULT_MEMORY_LEN};

#[derive(Parser, Debug)]
#[command(about = "Run a program on the register VM", wrap_help = true)]
struct Args {
    /// Path to the code region's byte stream.
    code: PathBuf,

    /// Optional path to the read-only data region's byte stream.
    #[arg(long)]
    rodata: Option<PathBuf>,

    /// Data region (heap+stack) size in bytes.
    #[arg(long, default_value_t = DEFAULT_MEMORY_LEN)]
    memory: usize,

    /// Print each instruction's disassembly before executing it.
    #[arg(long)]
    trace: bool,

    /// Maximum number of instructions to execute (0 = unbounded).
    #[arg(long, default_value_t = 0)]
    cycles: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut vm = Vm::new(args.memory);
    if let Err(e) = regvm::loader::load_from_files(&mut vm, &args.code, args.rodata.as_deref()) {
        eprintln!("regvm: failed to load program: {e}");
        return ExitCode::FAILURE;
    }

    if args.trace {
        run_traced(&mut vm, args.cycles)
    } else {
        match vm.run(args.cycles) {
            Ok(()) => report(&vm),
            Err(e) => {
                eprintln!("regvm: {e}");
                eprintln!("{}", vm.registers);
                ExitCode::FAILURE
            }
        }
    }
}

fn run_traced(vm: &mut Vm, cycles: u64) -> ExitCode {
    let mut executed = 0u64;
    loop {
        if cycles != 0 && executed >= cycles {
            return report(vm);
        }
        let pc = vm.pc();
        if let Ok(word) = vm.code.read(pc, 4) {
            print!("{:#010x}: {}", pc, regvm::disasm::disassemble(word as u32));
        }
        if let Err(e) = vm.one_step() {
            eprintln!("regvm: {e}");
            eprintln!("{}", vm.registers);
            return ExitCode::FAILURE;
        }
        executed += 1;
        if vm.state() == regvm::vm::VmState::Halted {
            return report(vm);
        }
    }
}

fn report(vm: &Vm) -> ExitCode {
    println!("halted, RV = {:#x}", vm.registers.read(regvm::registers::RV).unwrap_or(0));
    ExitCode::SUCCESS
}
