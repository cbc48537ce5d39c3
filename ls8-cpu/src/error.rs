use std::io;

use ls8_core::cpu::opcode::Opcode8;
use ls8_core::AddressableComponentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CpuError {
    #[error("unknown instruction {opcode} at 0x{pc:02X}")]
    UnrecognizedOpcode { opcode: Opcode8, pc: usize },
    #[error("register index {0} out of bounds, must be [0, 8)")]
    InvalidRegister(u8),
    #[error(transparent)]
    OutOfBoundsAddress(#[from] AddressableComponentError),
    #[error("unsupported ALU operation {0}")]
    UnsupportedOperation(&'static str),
    #[error("division by zero")]
    DivisionByZero,
    #[error("failed to write program output")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, CpuError>;
