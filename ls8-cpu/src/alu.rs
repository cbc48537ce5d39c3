use std::cmp::Ordering;

use crate::error::{CpuError, Result};
use crate::instructions::Ls8Instruction;
use crate::registers::{FL_EQUAL, FL_GREATER, FL_LESS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Cmp,
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
    Mod,
}

impl TryFrom<Ls8Instruction> for AluOp {
    type Error = CpuError;

    fn try_from(instruction: Ls8Instruction) -> Result<Self> {
        let op = match instruction {
            Ls8Instruction::Compare => AluOp::Cmp,
            Ls8Instruction::And => AluOp::And,
            Ls8Instruction::Or => AluOp::Or,
            Ls8Instruction::Xor => AluOp::Xor,
            Ls8Instruction::Not => AluOp::Not,
            Ls8Instruction::ShiftLeft => AluOp::Shl,
            Ls8Instruction::ShiftRight => AluOp::Shr,
            Ls8Instruction::Modulo => AluOp::Mod,
            other => return Err(CpuError::UnsupportedOperation(other.mnemonic())),
        };
        Ok(op)
    }
}

/// Outcome of an ALU operation. `result` replaces register A when present,
/// `flags` replaces FL when present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    pub result: Option<u8>,
    pub flags: Option<u8>,
}

impl AluOutput {
    fn result(value: u8) -> Self {
        Self {
            result: Some(value),
            flags: None,
        }
    }

    fn flags(flags: u8) -> Self {
        Self {
            result: None,
            flags: Some(flags),
        }
    }
}

pub fn compare(a: u8, b: u8) -> u8 {
    match a.cmp(&b) {
        Ordering::Less => FL_LESS,
        Ordering::Greater => FL_GREATER,
        Ordering::Equal => FL_EQUAL,
    }
}

pub fn execute(op: AluOp, a: u8, b: u8) -> Result<AluOutput> {
    let output = match op {
        AluOp::Cmp => AluOutput::flags(compare(a, b)),
        AluOp::And => AluOutput::result(a & b),
        AluOp::Or => AluOutput::result(a | b),
        AluOp::Xor => AluOutput::result(a ^ b),
        AluOp::Not => AluOutput::result(!a),
        // Bits shifted past the register width are lost.
        AluOp::Shl => AluOutput::result(a.checked_shl(b as u32).unwrap_or(0)),
        AluOp::Shr => AluOutput::result(a.checked_shr(b as u32).unwrap_or(0)),
        AluOp::Mod => {
            let value = a.checked_rem(b).ok_or(CpuError::DivisionByZero)?;
            AluOutput::result(value)
        }
    };
    Ok(output)
}
