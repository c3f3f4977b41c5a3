//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire pipeline state. It holds the following:
//! 1. **State Management:** Program counter, the architectural register file, and the shadow
//!    register file consulted by Execute and Memory.
//! 2. **Pipeline Control:** The four inter-stage latches, the Fetch/Decode stall flags, the
//!    interlock retry slot, and the busy counters.
//! 3. **Memory:** The memory port shared by Fetch, the Memory stage and the syscall layer.
//! 4. **Statistics:** The counters updated by each stage.
//!
//! Stages hold no state between cycles beyond the latch they write.

/// Per-cycle pipeline driver.
pub mod execution;

use std::fmt;

use crate::common::RegisterFile;
use crate::config::{BusyCounterPolicy, Config};
use crate::core::pipeline::hazards::BusyCounters;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::isa::abi::REG_SP;
use crate::soc::Memory;
use crate::stats::SimStats;

/// How a simulation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The program requested exit through the syscall layer.
    Exited {
        /// Exit status passed by the program.
        code: i32,
    },
    /// An instruction that could not be decoded reached Writeback.
    IllegalInstruction {
        /// Address of the instruction.
        pc: u32,
        /// Raw encoding.
        inst: u32,
    },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited { code } => write!(f, "program exited with status {code}"),
            Self::IllegalInstruction { pc, inst } => {
                write!(f, "illegal instruction {inst:#010x} at pc {pc:#010x}")
            }
        }
    }
}

/// Lifecycle of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
    /// Instructions are flowing.
    Running,
    /// A syscall was decoded; Fetch and Decode are held until Writeback services it.
    SyscallPending,
    /// The simulation has ended; further ticks do nothing.
    Terminated(Termination),
}

/// Main CPU structure containing all pipeline state.
pub struct Cpu {
    /// Program Counter.
    pub pc: u32,
    /// Architectural registers, written only by Writeback and the syscall layer.
    pub regs: RegisterFile,
    /// Shadow registers, written eagerly by Execute and Memory.
    pub shadow: RegisterFile,
    /// Per-register busy counters.
    pub busy: BusyCounters,
    /// Busy-counter behavior while Decode is stalled.
    pub busy_policy: BusyCounterPolicy,

    /// IF/ID latch.
    pub if_id: IfIdEntry,
    /// ID/EX latch.
    pub id_ex: IdExEntry,
    /// EX/MEM latch.
    pub ex_mem: ExMemEntry,
    /// MEM/WB latch.
    pub mem_wb: MemWbEntry,

    /// Hold Fetch (set while a syscall is in flight).
    pub stall_fetch: bool,
    /// Hold Decode (set while a syscall is in flight).
    pub stall_decode: bool,
    /// A syscall was decoded last cycle; the instruction fetched behind it must be refetched.
    pub syscall_pending: bool,
    /// Instruction Decode rejected on a busy source, retried next cycle.
    pub interlocked: Option<IfIdEntry>,
    /// Set once Writeback terminates the simulation.
    pub terminated: Option<Termination>,

    /// Emit per-instruction trace events.
    pub trace: bool,
    /// Performance counters.
    pub stats: SimStats,
    /// Memory port.
    pub mem: Box<dyn Memory>,
}

impl Cpu {
    /// Creates a CPU attached to `mem`, with empty latches and all registers zero.
    ///
    /// The program counter starts at `config.general.boot_pc`; use [`Cpu::boot`] to
    /// start elsewhere.
    ///
    /// # Arguments
    ///
    /// * `mem` - Memory the program has been (or will be) loaded into.
    /// * `config` - Simulator configuration.
    pub fn new(mem: Box<dyn Memory>, config: &Config) -> Self {
        let mut cpu = Self {
            pc: config.general.boot_pc,
            regs: RegisterFile::new(),
            shadow: RegisterFile::new(),
            busy: BusyCounters::new(),
            busy_policy: config.pipeline.busy_counter_policy,
            if_id: IfIdEntry::default(),
            id_ex: IdExEntry::default(),
            ex_mem: ExMemEntry::default(),
            mem_wb: MemWbEntry::default(),
            stall_fetch: false,
            stall_decode: false,
            syscall_pending: false,
            interlocked: None,
            terminated: None,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            mem,
        };
        if let Some(sp) = config.general.initial_sp {
            cpu.set_reg(REG_SP, sp);
        }
        cpu
    }

    /// Sets the program counter of the first fetch.
    pub fn boot(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Writes a register in both the architectural and the shadow file.
    ///
    /// Intended for setup before the first cycle and for the syscall layer.
    pub fn set_reg(&mut self, idx: usize, val: u32) {
        self.regs.write(idx, val);
        self.shadow.write(idx, val);
    }

    /// Current pipeline state.
    pub fn state(&self) -> PipelineState {
        match self.terminated {
            Some(t) => PipelineState::Terminated(t),
            None if self.stall_decode => PipelineState::SyscallPending,
            None => PipelineState::Running,
        }
    }
}
