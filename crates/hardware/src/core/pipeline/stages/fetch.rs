//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the word at the current Program Counter into the IF/ID latch and
//! advances the PC sequentially. There is no branch prediction: Execute redirects
//! the PC for taken branches, and Decode rewinds it for interlocks and syscalls,
//! both before Fetch commits.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;

/// Values sampled by Fetch in phase 0.
#[derive(Clone, Copy, Debug)]
pub struct FetchSample {
    stalled: bool,
}

/// Phase 0 of the Fetch stage: samples the stall flag.
pub const fn sample(cpu: &Cpu) -> FetchSample {
    FetchSample {
        stalled: cpu.stall_fetch,
    }
}

/// Phase 1 of the Fetch stage.
///
/// Unless stalled, fetches the word at the PC into the IF/ID latch and advances the
/// PC by one instruction. A stalled Fetch leaves the PC, the latch and the fetch count
/// untouched.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `sampled` - Values captured by [`sample`] this cycle.
pub fn commit(cpu: &mut Cpu, sampled: FetchSample) {
    if sampled.stalled {
        return;
    }

    let pc = cpu.pc;
    let inst = cpu.mem.read_word(u64::from(pc));
    cpu.if_id = IfIdEntry { pc, inst };
    cpu.pc = pc.wrapping_add(INSTRUCTION_SIZE);
    cpu.stats.instructions_fetched += 1;

    if cpu.trace {
        tracing::trace!(
            pc = format_args!("{pc:#010x}"),
            inst = format_args!("{inst:#010x}"),
            "fetch"
        );
    }
}
