use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::cpu::{Ls8Cpu, RunSummary};
use crate::error::CpuError;
use crate::loader::{self, LoadError};

#[derive(Debug, Error)]
pub enum MachineError {
    #[error(transparent)]
    Cpu(#[from] CpuError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type Result<T> = std::result::Result<T, MachineError>;

pub struct Ls8Machine<W: Write> {
    cpu: Ls8Cpu<W>,
    loaded: bool,
}

impl<W: Write> Ls8Machine<W> {
    pub fn new(output: W) -> Self {
        Ls8Machine {
            cpu: Ls8Cpu::new(output),
            loaded: false,
        }
    }

    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        if self.loaded {
            tracing::warn!("replacing previously loaded program");
        }
        self.cpu.load(program)?;
        self.loaded = true;
        Ok(())
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let program = loader::load_file(path)?;
        self.load(&program)
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        if !self.loaded {
            tracing::warn!("running with empty memory");
        }
        Ok(self.cpu.run()?)
    }

    pub fn into_output(self) -> W {
        self.cpu.into_output()
    }
}
