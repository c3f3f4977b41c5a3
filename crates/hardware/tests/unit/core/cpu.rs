//! CPU lifecycle tests: construction, termination, and the r0 invariant.

use mipsim_core::config::Config;
use mipsim_core::core::{Cpu, PipelineState, Termination};
use mipsim_core::isa::abi::REG_SP;
use mipsim_core::soc::SparseMemory;
use pretty_assertions::assert_eq;

use crate::common::harness::with_exit;
use crate::common::{InstructionBuilder, TEXT_BASE, TestContext};

/// Encoding with primary opcode 0x3f, which the machine does not implement.
const ILLEGAL: u32 = 0xfc00_0000;

#[test]
fn new_cpu_boots_at_configured_pc() {
    let mut config = Config::default();
    config.general.boot_pc = 0x0000_1000;
    config.general.initial_sp = Some(0x7fff_eff8);

    let cpu = Cpu::new(Box::new(SparseMemory::new()), &config);
    assert_eq!(cpu.pc, 0x1000);
    assert_eq!(cpu.regs.read(REG_SP), 0x7fff_eff8);
    assert_eq!(cpu.shadow.read(REG_SP), 0x7fff_eff8);
    assert_eq!(cpu.state(), PipelineState::Running);
    assert_eq!(cpu.stats.cycles, 0);
}

#[test]
fn set_reg_updates_both_register_files() {
    let mut ctx = TestContext::new();
    ctx.set_reg(9, 77);
    assert_eq!(ctx.cpu().regs.read(9), 77);
    assert_eq!(ctx.cpu().shadow.read(9), 77);
}

#[test]
fn straight_line_program_takes_four_cycles_more_than_it_fetches() {
    let b = InstructionBuilder::new;
    let mut ctx = TestContext::with_program(&[
        b().addiu(8, 0, 1).build(),
        b().addiu(9, 0, 2).build(),
        b().addiu(10, 0, 3).build(),
    ]);

    assert_eq!(ctx.run_to_exit(), Termination::Exited { code: 0 });
    assert_eq!(ctx.stats().cycles, 3 + 7);
    assert_eq!(ctx.stats().instructions_fetched, 3 + 3);
    assert_eq!(ctx.stats().load_stalls, 0);
    assert_eq!(
        (ctx.get_reg(8), ctx.get_reg(9), ctx.get_reg(10)),
        (1, 2, 3)
    );
}

#[test]
fn illegal_instruction_halts_at_writeback() {
    let b = InstructionBuilder::new;
    let mut ctx = TestContext::new().load_program(
        TEXT_BASE,
        &[ILLEGAL, b().addiu(2, 0, 5).build(), b().nop().build()],
    );

    let t = ctx.run(100);
    assert_eq!(
        t,
        Some(Termination::IllegalInstruction {
            pc: TEXT_BASE,
            inst: ILLEGAL
        })
    );
    assert_eq!(ctx.stats().cycles, 5);
    assert_eq!(ctx.stats().instructions_fetched, 4);
    assert_eq!(ctx.get_reg(2), 0, "younger instruction must not commit");
    assert!(ctx.syscall_log().is_empty());
}

#[test]
fn ticks_after_termination_do_nothing() {
    let mut ctx = TestContext::new().load_program(TEXT_BASE, &[ILLEGAL]);
    let t = ctx.run(10).unwrap();

    let cycles = ctx.stats().cycles;
    assert_eq!(ctx.run(10), None);
    assert_eq!(ctx.stats().cycles, cycles);
    assert_eq!(ctx.cpu().state(), PipelineState::Terminated(t));
}

#[test]
fn unknown_special_function_is_illegal() {
    // SPECIAL with funct 0x3f.
    let inst = 0x0000_003f;
    let mut ctx = TestContext::new().load_program(TEXT_BASE, &[inst]);
    assert_eq!(
        ctx.run(10),
        Some(Termination::IllegalInstruction {
            pc: TEXT_BASE,
            inst
        })
    );
}

#[test]
fn exit_status_is_reported() {
    let mut ctx = TestContext::new().load_program(TEXT_BASE, &with_exit(&[], 42));
    assert_eq!(ctx.run_to_exit(), Termination::Exited { code: 42 });
}

#[test]
fn r0_stays_zero_after_every_kind_of_write() {
    let b = InstructionBuilder::new;
    let mut ctx = TestContext::with_program(&[
        b().addiu(0, 0, 5).build(),
        b().lui(0, 0x1234).build(),
        b().addiu(8, 0, 0x100).build(),
        b().sw(8, 8, 0).build(),
        b().lw(0, 8, 0).build(),
        b().mfc1(0, 4).build(),
        // Reads r0 in Execute and in Memory; both must see zero.
        b().addu(9, 0, 0).build(),
        b().sw(0, 8, 4).build(),
    ]);
    let _ = ctx.run_to_exit();

    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.cpu().shadow.read(0), 0);
    assert_eq!(ctx.get_reg(9), 0);
    assert_eq!(ctx.read_word(0x104), 0);
}

#[test]
fn running_state_reports_pending_syscall() {
    let b = InstructionBuilder::new;
    let mut ctx = TestContext::new().load_program(
        TEXT_BASE,
        &[b().addiu(2, 0, 4000).build(), b().syscall().build()],
    );
    // The syscall is decoded in cycle 3.
    let _ = ctx.run(3);
    assert_eq!(ctx.cpu().state(), PipelineState::SyscallPending);
}
