//! Program loader collaborator.
//!
//! Accepts already-separated code and rodata byte slices, typically
//! read from two files by the caller, and hands them to [`Vm::load`].

use std::fs;
use std::io;
use std::path::Path;

use crate::vm::Vm;

pub fn load_from_files(
    vm: &mut Vm,
    code_path: &Path,
    rodata_path: Option<&Path>,
) -> io::Result<()> {
    let code = fs::read(code_path)?;
    let rodata = match rodata_path {
        Some(path) => fs::read(path)?,
        None => Vec::new(),
    };
    vm.load(&code, &rodata);
    Ok(())
}
