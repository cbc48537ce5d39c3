use std::fmt;

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opcode8 {
    value: u8,
}

impl Opcode8 {
    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Number of operand bytes encoded in the top two bits.
    pub fn operand_count(&self) -> usize {
        (self.value >> 6) as usize
    }
}

impl fmt::Debug for Opcode8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("0x{:02X}", self.value))
    }
}

impl fmt::Display for Opcode8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{} 0b{:08b}", self.value, self.value))
    }
}
