use ls8_core::cpu::decoder::{DecodeError, DecodeOne, Result};
use ls8_core::cpu::opcode::Opcode8;

use crate::instructions::Ls8Instruction;

/// Opcode to instruction lookup, filled once from the instruction set.
pub struct Ls8Decoder {
    table: [Option<Ls8Instruction>; 256],
}

impl Default for Ls8Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Ls8Decoder {
    pub fn new() -> Self {
        let mut table = [None; 256];
        for instruction in Ls8Instruction::ALL {
            table[instruction.opcode().value() as usize] = Some(instruction);
        }
        Ls8Decoder { table }
    }
}

impl DecodeOne for Ls8Decoder {
    type Instruction = Ls8Instruction;

    fn decode_one(&self, opcode: Opcode8) -> Result<Self::Instruction> {
        self.table[opcode.value() as usize].ok_or(DecodeError::UnrecognizedOpcode(opcode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::*;

    fn basic_harness(opcode: u8) -> Result<Ls8Instruction> {
        let decoder = Ls8Decoder::new();
        decoder.decode_one(Opcode8::new(opcode))
    }

    #[test]
    fn decodes_every_defined_opcode() {
        assert_eq!(basic_harness(LDI), Ok(Ls8Instruction::LoadImmediate));
        assert_eq!(basic_harness(PRN), Ok(Ls8Instruction::Print));
        assert_eq!(basic_harness(HLT), Ok(Ls8Instruction::Halt));
        assert_eq!(basic_harness(CMP), Ok(Ls8Instruction::Compare));
        assert_eq!(basic_harness(AND), Ok(Ls8Instruction::And));
        assert_eq!(basic_harness(OR), Ok(Ls8Instruction::Or));
        assert_eq!(basic_harness(XOR), Ok(Ls8Instruction::Xor));
        assert_eq!(basic_harness(NOT), Ok(Ls8Instruction::Not));
        assert_eq!(basic_harness(SHL), Ok(Ls8Instruction::ShiftLeft));
        assert_eq!(basic_harness(SHR), Ok(Ls8Instruction::ShiftRight));
        assert_eq!(basic_harness(MOD), Ok(Ls8Instruction::Modulo));
        assert_eq!(basic_harness(JEQ), Ok(Ls8Instruction::JumpIfEqual));
        assert_eq!(basic_harness(JNE), Ok(Ls8Instruction::JumpIfNotEqual));
        assert_eq!(basic_harness(JMP), Ok(Ls8Instruction::Jump));
    }

    #[test]
    fn rejects_everything_else() {
        let defined: Vec<u8> = Ls8Instruction::ALL
            .iter()
            .map(|ins| ins.opcode().value())
            .collect();
        for opcode in 0..=u8::MAX {
            if defined.contains(&opcode) {
                continue;
            }
            assert_eq!(
                basic_harness(opcode),
                Err(DecodeError::UnrecognizedOpcode(Opcode8::new(opcode)))
            );
        }
    }
}
