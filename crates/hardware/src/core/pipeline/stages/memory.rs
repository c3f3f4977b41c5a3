//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! Store data and the `lwl`/`lwr` merge operand are refreshed from the shadow
//! register file, the access is performed through the LSU, and load results are
//! made visible to younger instructions in the shadow register file.

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::units::lsu::Lsu;

/// Phase 0 of the Memory stage.
///
/// Builds the MEM/WB entry for the instruction in the EX/MEM latch, replacing the store
/// data captured at Decode with the current shadow value.
pub fn sample(cpu: &Cpu) -> MemWbEntry {
    let em = &cpu.ex_mem;
    let mut mw = MemWbEntry::from(em);

    if em.ctrl.mem_control {
        if em.sreg2 != 0 {
            let value = cpu.shadow.read(em.sreg2);
            mw.subreg = value;
            mw.src3 = value;
        }
        if let Some(f) = em.freg.filter(|_| em.ctrl.store_fp) {
            mw.src3 = cpu.shadow.read_f(f);
        }
    }

    mw
}

/// Phase 1 of the Memory stage.
///
/// Performs the memory access and latches the entry into MEM/WB. Load results are
/// written to the shadow register file.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `mw` - Entry produced by [`sample`] this cycle.
pub fn commit(cpu: &mut Cpu, mut mw: MemWbEntry) {
    if mw.ctrl.mem_control {
        Lsu::access(cpu.mem.as_mut(), &mut mw);

        if mw.ctrl.mem_op.is_load() {
            if mw.ctrl.reg_write {
                cpu.shadow.write(mw.dst, mw.result_lo);
            }
            if mw.ctrl.fp_reg_write {
                cpu.shadow.write_f(mw.dst, mw.result_lo);
            }
        }
    }

    cpu.mem_wb = mw;
}
