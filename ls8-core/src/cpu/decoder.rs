use thiserror::Error;

use crate::cpu::opcode::Opcode8;
use crate::cpu::Instruction;

#[derive(Debug, Error, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DecodeError {
    #[error("unknown instruction {0}")]
    UnrecognizedOpcode(Opcode8),
}

pub type Result<T> = std::result::Result<T, DecodeError>;

pub trait DecodeOne {
    type Instruction: Instruction;

    fn decode_one(&self, opcode: Opcode8) -> Result<Self::Instruction>;
}
