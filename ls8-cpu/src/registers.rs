use std::fmt;

use crate::error::{CpuError, Result};

pub const NUM_REGISTERS: usize = 8;

/// Register 7 is reserved as the stack pointer and seeded with this address.
pub const SP_INDEX: usize = 7;
pub const SP_INIT: u8 = 0xF4;

pub const FL_EQUAL: u8 = 0b0000_0001;
pub const FL_GREATER: u8 = 0b0000_0010;
pub const FL_LESS: u8 = 0b0000_0100;

#[derive(Clone, PartialEq, Eq)]
pub struct Ls8Registers {
    gpr: [u8; NUM_REGISTERS],
    pub pc: usize,
    pub fl: u8,
}

impl Default for Ls8Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Ls8Registers {
    pub fn new() -> Self {
        let mut gpr = [0; NUM_REGISTERS];
        gpr[SP_INDEX] = SP_INIT;
        Ls8Registers { gpr, pc: 0, fl: 0 }
    }

    pub fn read(&self, index: u8) -> Result<u8> {
        self.gpr
            .get(index as usize)
            .copied()
            .ok_or(CpuError::InvalidRegister(index))
    }

    pub fn write(&mut self, index: u8, value: u8) -> Result<()> {
        let slot = self
            .gpr
            .get_mut(index as usize)
            .ok_or(CpuError::InvalidRegister(index))?;
        *slot = value;
        Ok(())
    }

    pub fn general_purpose(&self) -> &[u8; NUM_REGISTERS] {
        &self.gpr
    }
}

impl fmt::Debug for Ls8Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("PC 0x{:02X} FL 0b{:03b} |", self.pc, self.fl))?;
        for value in &self.gpr {
            f.write_fmt(format_args!(" {:02X}", value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let regs = Ls8Registers::new();
        assert_eq!(regs.pc, 0);
        assert_eq!(regs.fl, 0);
        assert_eq!(regs.general_purpose(), &[0, 0, 0, 0, 0, 0, 0, 0xF4]);
    }

    #[test]
    fn can_write_then_read() {
        let mut regs = Ls8Registers::new();
        regs.write(3, 200).unwrap();
        assert_eq!(regs.read(3).unwrap(), 200);
    }

    #[test]
    fn rejects_invalid_index() {
        let mut regs = Ls8Registers::new();
        assert!(matches!(regs.read(8), Err(CpuError::InvalidRegister(8))));
        assert!(matches!(
            regs.write(255, 1),
            Err(CpuError::InvalidRegister(255))
        ));
        assert_eq!(regs, Ls8Registers::new());
    }

    #[test]
    fn debug_lists_every_register() {
        let regs = Ls8Registers::new();
        assert_eq!(
            format!("{:?}", regs),
            "PC 0x00 FL 0b000 | 00 00 00 00 00 00 00 F4"
        );
    }
}
