use std::io::Write;

use ls8_core::cpu::decoder::{DecodeError, DecodeOne};
use ls8_core::cpu::opcode::Opcode8;
use ls8_core::cpu::Instruction;
use ls8_core::{AddressableComponent, Component, ComponentId, RAM};

use crate::alu::{self, AluOp};
use crate::decoder::Ls8Decoder;
use crate::error::{CpuError, Result};
use crate::instructions::Ls8Instruction;
use crate::registers::{Ls8Registers, FL_EQUAL};

pub const MEMORY_SIZE: usize = 256;

pub type Ls8RAM = RAM<MEMORY_SIZE>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuState {
    Running,
    Halted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub instructions_executed: usize,
}

/// The LS-8 processor. Program output from `PRN` goes to `output`.
pub struct Ls8Cpu<W: Write> {
    id: ComponentId,
    ram: Ls8RAM,
    regs: Ls8Registers,
    decoder: Ls8Decoder,
    output: W,
    state: CpuState,
    instructions_executed: usize,
}

impl<W: Write> Component for Ls8Cpu<W> {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl<W: Write> Ls8Cpu<W> {
    pub fn new(output: W) -> Self {
        Ls8Cpu {
            id: ComponentId::new("LS-8 CPU"),
            ram: Ls8RAM::new("LS-8 RAM"),
            regs: Ls8Registers::new(),
            decoder: Ls8Decoder::new(),
            output,
            state: CpuState::Halted,
            instructions_executed: 0,
        }
    }

    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        self.ram.load(0, program)?;
        Ok(())
    }

    pub fn ram_read(&mut self, address: usize) -> Result<u8> {
        Ok(self.ram.read(address)?)
    }

    pub fn ram_write(&mut self, address: usize, value: u8) -> Result<()> {
        Ok(self.ram.write(address, value)?)
    }

    pub fn registers(&self) -> &Ls8Registers {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut Ls8Registers {
        &mut self.regs
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        tracing::info!("{}: starting execution at 0x{:02X}", self.id, self.regs.pc);
        self.state = CpuState::Running;
        let start = self.instructions_executed;

        while self.state == CpuState::Running {
            if let Err(err) = self.step() {
                tracing::debug!("{}: execution stopped at 0x{:02X}", self.id, self.regs.pc);
                return Err(err);
            }
        }
        self.output.flush().map_err(CpuError::Output)?;

        let summary = RunSummary {
            instructions_executed: self.instructions_executed - start,
        };
        tracing::info!(
            "{}: halted after {} instructions",
            self.id,
            summary.instructions_executed
        );
        tracing::debug!(
            "{}: {} reads, {} writes",
            self.ram.id(),
            self.ram.num_reads(),
            self.ram.num_writes()
        );
        Ok(summary)
    }

    /// Fetches, decodes and executes the instruction at PC.
    pub fn step(&mut self) -> Result<CpuState> {
        let pc = self.regs.pc;
        let opcode = Opcode8::new(self.ram.read(pc)?);
        // Operand bytes are fetched whether or not the instruction uses them.
        let operand_a = self.ram.read(pc + 1)?;
        let operand_b = self.ram.read(pc + 2)?;
        self.trace(opcode, operand_a, operand_b);

        let instruction = self
            .decoder
            .decode_one(opcode)
            .map_err(|DecodeError::UnrecognizedOpcode(opcode)| {
                CpuError::UnrecognizedOpcode { opcode, pc }
            })?;
        self.execute(instruction, operand_a, operand_b)?;
        self.instructions_executed += 1;
        Ok(self.state)
    }

    fn trace(&self, opcode: Opcode8, operand_a: u8, operand_b: u8) {
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!("{}", self.trace_line(opcode, operand_a, operand_b));
        }
    }

    /// `TRACE: PC | opcode a b | R0..R7 | disassembly`
    fn trace_line(&self, opcode: Opcode8, operand_a: u8, operand_b: u8) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.regs.pc,
            opcode.value(),
            operand_a,
            operand_b
        );
        for value in self.regs.general_purpose() {
            line.push_str(&format!(" {:02X}", value));
        }
        match self.decoder.decode_one(opcode) {
            Ok(instruction) => {
                line.push_str(" | ");
                line.push_str(&instruction.disassemble(operand_a, operand_b));
            }
            Err(_) => line.push_str(" | ???"),
        }
        line
    }

    fn execute(&mut self, instruction: Ls8Instruction, operand_a: u8, operand_b: u8) -> Result<()> {
        match instruction {
            Ls8Instruction::LoadImmediate => self.ldi(operand_a, operand_b),
            Ls8Instruction::Print => self.prn(operand_a),
            Ls8Instruction::Halt => self.hlt(),
            Ls8Instruction::JumpIfEqual => self.jeq(operand_a),
            Ls8Instruction::JumpIfNotEqual => self.jne(operand_a),
            Ls8Instruction::Jump => self.jmp(operand_a),
            Ls8Instruction::Compare
            | Ls8Instruction::And
            | Ls8Instruction::Or
            | Ls8Instruction::Xor
            | Ls8Instruction::Not
            | Ls8Instruction::ShiftLeft
            | Ls8Instruction::ShiftRight
            | Ls8Instruction::Modulo => self.alu(instruction, operand_a, operand_b),
        }
    }

    fn advance(&mut self, instruction: Ls8Instruction) {
        self.regs.pc += instruction.len_bytes();
    }

    fn ldi(&mut self, reg: u8, value: u8) -> Result<()> {
        self.regs.write(reg, value)?;
        self.advance(Ls8Instruction::LoadImmediate);
        Ok(())
    }

    fn prn(&mut self, reg: u8) -> Result<()> {
        let value = self.regs.read(reg)?;
        writeln!(self.output, "{}", value).map_err(CpuError::Output)?;
        self.advance(Ls8Instruction::Print);
        Ok(())
    }

    fn hlt(&mut self) -> Result<()> {
        self.state = CpuState::Halted;
        Ok(())
    }

    // JEQ and JNE test FL against the equal pattern exactly, not as a bitmask.
    fn jeq(&mut self, reg: u8) -> Result<()> {
        if self.regs.fl == FL_EQUAL {
            self.jmp(reg)
        } else {
            self.advance(Ls8Instruction::JumpIfEqual);
            Ok(())
        }
    }

    fn jne(&mut self, reg: u8) -> Result<()> {
        if self.regs.fl != FL_EQUAL {
            self.jmp(reg)
        } else {
            self.advance(Ls8Instruction::JumpIfNotEqual);
            Ok(())
        }
    }

    fn jmp(&mut self, reg: u8) -> Result<()> {
        self.regs.pc = self.regs.read(reg)? as usize;
        Ok(())
    }

    fn alu(&mut self, instruction: Ls8Instruction, reg_a: u8, reg_b: u8) -> Result<()> {
        let op = AluOp::try_from(instruction)?;
        let a = self.regs.read(reg_a)?;
        // NOT takes a single register; its second operand byte is not a register.
        let b = match op {
            AluOp::Not => 0,
            _ => self.regs.read(reg_b)?,
        };

        let output = alu::execute(op, a, b)?;
        if let Some(value) = output.result {
            self.regs.write(reg_a, value)?;
        }
        if let Some(flags) = output.flags {
            self.regs.fl = flags;
        }
        self.advance(instruction);
        Ok(())
    }
}
