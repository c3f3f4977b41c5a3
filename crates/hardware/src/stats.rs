//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters the pipeline stages update. It provides:
//! 1. **Cycle and CPI:** Total cycles and fetched instructions, and the derived CPI/IPC.
//! 2. **Instruction mix:** Conditional branches, linking jumps, register jumps, loads, stores,
//!    syscalls, and floating-point instructions.
//! 3. **Syscall traffic:** Memory words read and written by the syscall layer.
//! 4. **Stalls:** Cycles lost to load-use interlocks.
//!
//! Every counter is monotonically increasing, except that `instructions_fetched` gives back
//! fetches that Decode discards (interlock retries and the instruction behind a syscall).

use std::fmt::Write as _;
use std::time::Instant;

use serde::Serialize;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Instructions fetched and accepted by Decode.
    pub instructions_fetched: u64,
    /// Conditional branches executed.
    pub cond_branches: u64,
    /// `jal` and `jalr` executed.
    pub jal: u64,
    /// `jr` executed.
    pub jr: u64,
    /// Loads executed by the pipeline.
    pub loads: u64,
    /// Stores executed by the pipeline.
    pub stores: u64,
    /// Memory reads performed by the syscall layer.
    pub syscall_loads: u64,
    /// Memory writes performed by the syscall layer.
    pub syscall_stores: u64,
    /// Syscalls serviced.
    pub syscalls: u64,
    /// Coprocessor 1 instructions accepted by Decode.
    pub fp_instructions: u64,
    /// Cycles Decode spent interlocked on a busy source register.
    pub load_stalls: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_fetched: 0,
            cond_branches: 0,
            jal: 0,
            jr: 0,
            loads: 0,
            stores: 0,
            syscall_loads: 0,
            syscall_stores: 0,
            syscalls: 0,
            fp_instructions: 0,
            load_stalls: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"stalls"`.
/// Pass an empty slice to `report_sections` to include all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "stalls"];

impl SimStats {
    /// Cycles per fetched instruction; 0.0 before anything was fetched.
    pub fn cpi(&self) -> f64 {
        if self.instructions_fetched == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_fetched as f64
        }
    }

    /// Fetched instructions per cycle; 0.0 before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_fetched as f64 / self.cycles as f64
        }
    }

    /// Renders the requested statistics sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Section names from [`STATS_SECTIONS`], or empty for all.
    pub fn report_sections(&self, sections: &[&str]) -> String {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let mut out = String::new();

        // Writing to a String cannot fail.
        if want("summary") {
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "MIPS PIPELINE SIMULATION STATISTICS");
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "host_seconds             {seconds:.4} s");
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_fetched);
            let _ = writeln!(out, "sim_ipc                  {:.4}", self.ipc());
            let _ = writeln!(out, "sim_cpi                  {:.4}", self.cpi());
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            let _ = writeln!(out, "  op.cond_branch         {}", self.cond_branches);
            let _ = writeln!(out, "  op.jal                 {}", self.jal);
            let _ = writeln!(out, "  op.jr                  {}", self.jr);
            let _ = writeln!(out, "  op.fp                  {}", self.fp_instructions);
            let _ = writeln!(out, "  op.load                {}", self.loads);
            let _ = writeln!(out, "  op.load.syscall        {}", self.syscall_loads);
            let _ = writeln!(out, "  op.store               {}", self.stores);
            let _ = writeln!(out, "  op.store.syscall       {}", self.syscall_stores);
            let _ = writeln!(out, "  op.syscall             {}", self.syscalls);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("stalls") {
            let _ = writeln!(out, "STALLS");
            let _ = writeln!(out, "  stall.load_use         {}", self.load_stalls);
            let _ = writeln!(out, "==========================================================");
        }
        out
    }

    /// Renders every statistics section.
    pub fn report(&self) -> String {
        self.report_sections(&[])
    }

    /// Prints every statistics section to stdout.
    pub fn print(&self) {
        print!("{}", self.report());
    }
}
