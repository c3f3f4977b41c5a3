//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It performs the following:
//! 1. **Operand Refresh:** Re-reads source registers from the shadow register file, which
//!    already holds the results of instructions still in flight.
//! 2. **Computation:** Dispatches the `ExecOp` to the ALU or the branch unit and computes
//!    effective addresses for loads and stores.
//! 3. **Branch Resolution:** Redirects the PC for taken branches in the same cycle.
//! 4. **Shadow Update:** Makes non-memory results visible to younger instructions.

use crate::common::constants::{HI_REG, LO_REG};
use crate::core::Cpu;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::signals::ExecOp;
use crate::core::units::alu::{Alu, AluInputs};
use crate::core::units::bru;

/// Phase 0 of the Execute stage.
///
/// Computes the EX/MEM entry for the instruction in the ID/EX latch. A taken branch or
/// jump writes its target to the PC before Fetch commits this cycle. Syscalls and
/// illegal instructions pass through without executing.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Returns
///
/// The entry to latch into EX/MEM in phase 1.
pub fn sample(cpu: &mut Cpu) -> ExMemEntry {
    let de = cpu.id_ex;
    let mut em = ExMemEntry::from(&de);

    if de.ctrl.is_illegal || de.ctrl.is_syscall {
        return em;
    }

    let shadow = &cpu.shadow;
    let mut a = de.src1;
    let mut b = de.src2;
    if de.sreg1 != 0 {
        a = shadow.read(de.sreg1);
    }
    if de.sreg2 != 0 && !de.ctrl.mem_control {
        b = shadow.read(de.sreg2);
    }
    if let Some(f) = de.freg.filter(|_| de.ctrl.src1_fp) {
        a = shadow.read_f(f);
    }

    let result = Alu::execute(
        de.ctrl.op,
        AluInputs {
            a,
            b,
            shamt: de.shamt,
            hi: shadow.hi(),
            lo: shadow.lo(),
        },
    );
    em.result_lo = result.lo;
    em.result_hi = result.hi;

    if de.ctrl.mem_control {
        em.mar = a.wrapping_add(de.offset as u32);
    }

    if de.ctrl.is_branch {
        if de.ctrl.op == ExecOp::JumpReg {
            em.btgt = a;
        }
        em.taken = bru::is_taken(de.ctrl.op, a, b);
        if de.ctrl.reg_write {
            em.result_lo = bru::link_address(de.pc);
        }
        if em.taken {
            cpu.pc = em.btgt;
        }
    }

    em
}

/// Phase 1 of the Execute stage.
///
/// Latches the entry, updates the instruction-mix counters, and writes non-memory
/// results to the shadow register file.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `em` - Entry produced by [`sample`] this cycle.
pub fn commit(cpu: &mut Cpu, em: ExMemEntry) {
    let ctrl = em.ctrl;
    let stats = &mut cpu.stats;

    if ctrl.op.is_conditional_branch() {
        stats.cond_branches += 1;
    }
    match (ctrl.op, ctrl.reg_write) {
        (ExecOp::Jump | ExecOp::JumpReg, true) => stats.jal += 1,
        (ExecOp::JumpReg, false) => stats.jr += 1,
        _ => {}
    }
    if ctrl.mem_op.is_load() {
        stats.loads += 1;
    } else if ctrl.mem_op.is_store() {
        stats.stores += 1;
    }

    if !ctrl.mem_control {
        let shadow = &mut cpu.shadow;
        if ctrl.reg_write {
            shadow.write(em.dst, em.result_lo);
        }
        if ctrl.fp_reg_write {
            shadow.write_f(em.dst, em.result_lo);
        }
        if ctrl.hi_write {
            shadow.write(HI_REG, em.result_hi);
        }
        if ctrl.lo_write {
            shadow.write(LO_REG, em.result_lo);
        }
    }

    cpu.ex_mem = em;
}
