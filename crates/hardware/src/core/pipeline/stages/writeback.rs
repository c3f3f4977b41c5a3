//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits results to the architectural register file (GPR, FPR lane, HI or LO),
//! hands syscalls to the emulation layer, and terminates the simulation when an
//! illegal instruction retires or the program asks to exit.

use crate::common::constants::{HI_REG, LO_REG};
use crate::core::Cpu;
use crate::core::cpu::Termination;
use crate::core::pipeline::latches::MemWbEntry;
use crate::isa::disasm::disassemble;
use crate::sim::syscall::{SyscallContext, SyscallHandler, SyscallOutcome};

/// Phase 0 of the Writeback stage.
///
/// Commits the MEM/WB entry to the architectural register file. Syscalls and illegal
/// instructions commit nothing here; they are handled in [`commit`].
///
/// # Returns
///
/// The entry, for phase 1.
pub fn sample(cpu: &mut Cpu) -> MemWbEntry {
    let mw = cpu.mem_wb;
    let ctrl = mw.ctrl;

    if ctrl.is_illegal || ctrl.is_syscall {
        return mw;
    }

    let regs = &mut cpu.regs;
    if ctrl.reg_write {
        regs.write(mw.dst, mw.result_lo);
    }
    if ctrl.fp_reg_write {
        regs.write_f(mw.dst, mw.result_lo);
    }
    if ctrl.hi_write {
        regs.write(HI_REG, mw.result_hi);
    }
    if ctrl.lo_write {
        regs.write(LO_REG, mw.result_lo);
    }

    if cpu.trace && (ctrl.reg_write || ctrl.fp_reg_write || ctrl.hi_write || ctrl.lo_write) {
        tracing::trace!(
            pc = format_args!("{:#010x}", mw.pc),
            dst = mw.dst,
            value = format_args!("{:#010x}", mw.result_lo),
            "commit: {}",
            disassemble(mw.inst)
        );
    }

    mw
}

/// Phase 1 of the Writeback stage.
///
/// Services a syscall through `syscalls`: the handler sees the architectural state,
/// the Fetch and Decode stalls are released, and the shadow register file is refreshed
/// from the architectural one. An illegal instruction logs a register dump and ends
/// the simulation.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `mw` - Entry returned by [`sample`] this cycle.
/// * `syscalls` - Syscall emulation layer.
///
/// # Returns
///
/// `Some` if the simulation ends this cycle.
pub fn commit(
    cpu: &mut Cpu,
    mw: MemWbEntry,
    syscalls: &mut dyn SyscallHandler,
) -> Option<Termination> {
    if mw.ctrl.is_syscall {
        let outcome = {
            let mut ctx = SyscallContext::new(
                mw.pc,
                cpu.stats.cycles,
                &mut cpu.regs,
                cpu.mem.as_mut(),
                &mut cpu.stats,
            );
            syscalls.emulate(&mut ctx)
        };
        cpu.stats.syscalls += 1;
        cpu.stall_fetch = false;
        cpu.stall_decode = false;
        cpu.shadow = cpu.regs.clone();

        return match outcome {
            SyscallOutcome::Continue => None,
            SyscallOutcome::Exit(code) => {
                tracing::debug!(code, "program exit");
                Some(Termination::Exited { code })
            }
        };
    }

    if mw.ctrl.is_illegal {
        tracing::error!(
            pc = format_args!("{:#010x}", mw.pc),
            inst = format_args!("{:#010x}", mw.inst),
            "illegal instruction ({})\n{}",
            disassemble(mw.inst),
            cpu.regs.dump()
        );
        return Some(Termination::IllegalInstruction {
            pc: mw.pc,
            inst: mw.inst,
        });
    }

    None
}
