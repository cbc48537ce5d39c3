pub mod alu;
pub mod cpu;
pub mod decoder;
pub mod error;
pub mod instructions;
pub mod loader;
pub mod machine;
pub mod registers;

pub use crate::cpu::{CpuState, Ls8Cpu, RunSummary};
pub use crate::error::CpuError;
pub use crate::loader::LoadError;
pub use crate::machine::{Ls8Machine, MachineError};
