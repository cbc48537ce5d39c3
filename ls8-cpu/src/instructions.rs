use ls8_core::cpu::opcode::Opcode8;
use ls8_core::cpu::Instruction;

pub const LDI: u8 = 0b1000_0010;
pub const PRN: u8 = 0b0100_0111;
pub const HLT: u8 = 0b0000_0001;
pub const CMP: u8 = 0b1010_0111;
pub const AND: u8 = 0b1010_1000;
pub const OR: u8 = 0b1010_1010;
pub const XOR: u8 = 0b1010_1011;
pub const NOT: u8 = 0b0110_1001;
pub const SHL: u8 = 0b1010_1100;
pub const SHR: u8 = 0b1010_1101;
pub const MOD: u8 = 0b1010_0100;
pub const JEQ: u8 = 0b0101_0101;
pub const JNE: u8 = 0b0101_0110;
pub const JMP: u8 = 0b0101_0100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ls8Instruction {
    LoadImmediate, // LDI
    Print,         // PRN
    Halt,          // HLT
    Compare,       // CMP
    And,           // AND
    Or,            // OR
    Xor,           // XOR
    Not,           // NOT
    ShiftLeft,     // SHL
    ShiftRight,    // SHR
    Modulo,        // MOD
    JumpIfEqual,   // JEQ
    JumpIfNotEqual, // JNE
    Jump,          // JMP
}

impl Ls8Instruction {
    pub const ALL: [Ls8Instruction; 14] = [
        Ls8Instruction::LoadImmediate,
        Ls8Instruction::Print,
        Ls8Instruction::Halt,
        Ls8Instruction::Compare,
        Ls8Instruction::And,
        Ls8Instruction::Or,
        Ls8Instruction::Xor,
        Ls8Instruction::Not,
        Ls8Instruction::ShiftLeft,
        Ls8Instruction::ShiftRight,
        Ls8Instruction::Modulo,
        Ls8Instruction::JumpIfEqual,
        Ls8Instruction::JumpIfNotEqual,
        Ls8Instruction::Jump,
    ];

    pub fn opcode(&self) -> Opcode8 {
        let value = match self {
            Ls8Instruction::LoadImmediate => LDI,
            Ls8Instruction::Print => PRN,
            Ls8Instruction::Halt => HLT,
            Ls8Instruction::Compare => CMP,
            Ls8Instruction::And => AND,
            Ls8Instruction::Or => OR,
            Ls8Instruction::Xor => XOR,
            Ls8Instruction::Not => NOT,
            Ls8Instruction::ShiftLeft => SHL,
            Ls8Instruction::ShiftRight => SHR,
            Ls8Instruction::Modulo => MOD,
            Ls8Instruction::JumpIfEqual => JEQ,
            Ls8Instruction::JumpIfNotEqual => JNE,
            Ls8Instruction::Jump => JMP,
        };
        Opcode8::new(value)
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Ls8Instruction::LoadImmediate => "LDI",
            Ls8Instruction::Print => "PRN",
            Ls8Instruction::Halt => "HLT",
            Ls8Instruction::Compare => "CMP",
            Ls8Instruction::And => "AND",
            Ls8Instruction::Or => "OR",
            Ls8Instruction::Xor => "XOR",
            Ls8Instruction::Not => "NOT",
            Ls8Instruction::ShiftLeft => "SHL",
            Ls8Instruction::ShiftRight => "SHR",
            Ls8Instruction::Modulo => "MOD",
            Ls8Instruction::JumpIfEqual => "JEQ",
            Ls8Instruction::JumpIfNotEqual => "JNE",
            Ls8Instruction::Jump => "JMP",
        }
    }

    /// Operand bytes following the opcode, as encoded in its top two bits.
    pub fn operand_count(&self) -> usize {
        self.opcode().operand_count()
    }

    pub fn disassemble(&self, operand_a: u8, operand_b: u8) -> String {
        match self {
            Ls8Instruction::Halt => String::from(self.mnemonic()),
            Ls8Instruction::LoadImmediate => {
                format!("{} R{}, {}", self.mnemonic(), operand_a, operand_b)
            }
            _ if self.operand_count() == 1 => format!("{} R{}", self.mnemonic(), operand_a),
            _ => format!("{} R{}, R{}", self.mnemonic(), operand_a, operand_b),
        }
    }
}

impl Instruction for Ls8Instruction {
    fn len_bytes(&self) -> usize {
        1 + self.operand_count()
    }
}
