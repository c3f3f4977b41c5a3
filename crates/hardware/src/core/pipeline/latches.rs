//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five pipeline stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One value-type record per stage boundary, replaced every cycle.
//! 2. **Operand Capture:** Values read at Decode, later refreshed from the shadow registers.
//! 3. **Hazard Metadata:** Source registers and tolerated latencies for the busy counters.

use crate::core::pipeline::signals::ControlSignals;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Busy-counter requirements of a decoded instruction.
///
/// A source is available once its register's busy counter is no greater than the
/// tolerated slack; the destination counter is set to `dst` when the instruction
/// leaves Decode.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Latency {
    /// Slack tolerated on `sreg1`.
    pub src1: u32,
    /// Slack tolerated on `sreg2`.
    pub src2: u32,
    /// Slack tolerated on the floating-point source pair.
    pub fp: u32,
    /// Cycles until the destination value is visible.
    pub dst: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// First operand captured at decode.
    pub src1: u32,
    /// Second operand (register value or raw immediate) captured at decode.
    pub src2: u32,
    /// Store data captured at decode.
    pub src3: u32,
    /// Previous destination value merged by `lwl`/`lwr`.
    pub subreg: u32,
    /// Shift amount field.
    pub shamt: u32,
    /// Sign-extended 16-bit immediate (load/store displacement).
    pub offset: i32,
    /// Destination register (general or floating-point, per the write enables).
    pub dst: usize,
    /// Branch or jump target; register jumps resolve it in Execute.
    pub btgt: u32,
    /// First source register for hazard tracking and shadow refresh (0 = none).
    pub sreg1: usize,
    /// Second source register for hazard tracking and shadow refresh (0 = none).
    pub sreg2: usize,
    /// Floating-point source register.
    pub freg: Option<usize>,
    /// Busy-counter requirements.
    pub latency: Latency,
    /// Control signals.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Store data.
    pub src3: u32,
    /// Previous destination value merged by `lwl`/`lwr`.
    pub subreg: u32,
    /// Destination register.
    pub dst: usize,
    /// Source register supplying store data or the merge operand (0 = none).
    pub sreg2: usize,
    /// Floating-point source register.
    pub freg: Option<usize>,
    /// Primary result (LO for multiply/divide).
    pub result_lo: u32,
    /// Secondary result written to HI.
    pub result_hi: u32,
    /// Effective memory address.
    pub mar: u32,
    /// Branch target.
    pub btgt: u32,
    /// Branch resolved as taken.
    pub taken: bool,
    /// Control signals.
    pub ctrl: ControlSignals,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Store data.
    pub src3: u32,
    /// Previous destination value merged by `lwl`/`lwr`.
    pub subreg: u32,
    /// Destination register.
    pub dst: usize,
    /// Result to commit (loaded value for loads).
    pub result_lo: u32,
    /// Result to commit to HI.
    pub result_hi: u32,
    /// Effective memory address.
    pub mar: u32,
    /// Control signals.
    pub ctrl: ControlSignals,
}

impl From<&IdExEntry> for ExMemEntry {
    fn from(de: &IdExEntry) -> Self {
        Self {
            pc: de.pc,
            inst: de.inst,
            src3: de.src3,
            subreg: de.subreg,
            dst: de.dst,
            sreg2: de.sreg2,
            freg: de.freg,
            btgt: de.btgt,
            ctrl: de.ctrl,
            ..Self::default()
        }
    }
}

impl From<&ExMemEntry> for MemWbEntry {
    fn from(em: &ExMemEntry) -> Self {
        Self {
            pc: em.pc,
            inst: em.inst,
            src3: em.src3,
            subreg: em.subreg,
            dst: em.dst,
            result_lo: em.result_lo,
            result_hi: em.result_hi,
            mar: em.mar,
            ctrl: em.ctrl,
        }
    }
}
