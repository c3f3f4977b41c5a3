//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Converts a raw 32-bit instruction into control signals, an execute
//!    operation and a memory operation.
//! 2. **Register Read:** Captures source operands from the architectural register file.
//! 3. **Hazard Detection:** Interlocks on busy source registers and claims destinations.
//! 4. **Syscall Protocol:** Freezes Fetch and Decode when a syscall is decoded.

use crate::common::RegisterFile;
use crate::common::constants::{
    ALU_RESULT_LATENCY, EXECUTE_SOURCE_SLACK, HI_REG, LO_REG, LOAD_RESULT_LATENCY,
    MEMORY_SOURCE_SLACK, NOP,
};
use crate::config::BusyCounterPolicy;
use crate::core::Cpu;
use crate::core::pipeline::hazards::need_stall_busy_source;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::{ControlSignals, ExecOp, MemOp};
use crate::core::units::bru;
use crate::isa::abi::REG_RA;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::{
    FMT_MFC1, FMT_MTC1, FUNCT_ADD, FUNCT_ADDU, FUNCT_AND, FUNCT_BREAK, FUNCT_DIV, FUNCT_DIVU,
    FUNCT_JALR, FUNCT_JR, FUNCT_MFHI, FUNCT_MFLO, FUNCT_MTHI, FUNCT_MTLO, FUNCT_MULT,
    FUNCT_MULTU, FUNCT_NOR, FUNCT_OR, FUNCT_SLL, FUNCT_SLLV, FUNCT_SLT, FUNCT_SLTU, FUNCT_SRA,
    FUNCT_SRAV, FUNCT_SRL, FUNCT_SRLV, FUNCT_SUB, FUNCT_SUBU, FUNCT_SYSCALL, FUNCT_XOR,
    OP_ADDI, OP_ADDIU, OP_ANDI, OP_BEQ, OP_BGTZ, OP_BLEZ, OP_BNE, OP_COP1, OP_J, OP_JAL, OP_LB,
    OP_LBU, OP_LH, OP_LHU, OP_LUI, OP_LW, OP_LWC1, OP_LWL, OP_LWR, OP_ORI, OP_REGIMM, OP_SB,
    OP_SH, OP_SLTI, OP_SLTIU, OP_SPECIAL, OP_SW, OP_SWC1, OP_SWL, OP_SWR, OP_XORI, RT_BGEZ,
    RT_BGEZAL, RT_BLTZ, RT_BLTZAL,
};

/// Values sampled by Decode in phase 0.
#[derive(Clone, Copy, Debug)]
pub struct DecodeSample {
    entry: IfIdEntry,
    stalled: bool,
}

/// Phase 0 of the Decode stage.
///
/// Resolves last cycle's interlock (rewinding Fetch and retrying the held instruction),
/// nullifies the instruction fetched behind a syscall, and advances the busy counters.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn sample(cpu: &mut Cpu) -> DecodeSample {
    if let Some(retry) = cpu.interlocked.take() {
        cpu.pc = cpu.if_id.pc;
        cpu.stats.instructions_fetched = cpu.stats.instructions_fetched.saturating_sub(1);
        cpu.stats.load_stalls += 1;
        cpu.if_id = retry;
    }

    let stalled = cpu.stall_decode;

    if cpu.syscall_pending {
        cpu.pc = cpu.if_id.pc;
        cpu.if_id.inst = NOP;
        cpu.stats.instructions_fetched = cpu.stats.instructions_fetched.saturating_sub(1);
        cpu.syscall_pending = false;
    }

    let paused = stalled && cpu.busy_policy == BusyCounterPolicy::PauseWhileStalled;
    if !paused {
        cpu.busy.tick();
    }

    DecodeSample {
        entry: cpu.if_id,
        stalled,
    }
}

/// Phase 1 of the Decode stage.
///
/// Decodes the sampled instruction into the ID/EX latch. A syscall freezes Fetch and
/// Decode; an instruction with a busy source is held for retry and replaced by a bubble;
/// any other legal instruction claims its destination registers.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `sampled` - Values captured by [`sample`] this cycle.
pub fn commit(cpu: &mut Cpu, sampled: DecodeSample) {
    let DecodeSample { entry, stalled } = sampled;

    if stalled {
        cpu.id_ex = bubble(entry.pc);
        return;
    }

    let decoded = decode_instruction(entry.inst, entry.pc, &cpu.regs);

    if decoded.ctrl.is_syscall {
        cpu.stall_fetch = true;
        cpu.stall_decode = true;
        cpu.syscall_pending = true;
        tracing::debug!(pc = format_args!("{:#010x}", entry.pc), "syscall decoded");
    } else if need_stall_busy_source(&decoded, &cpu.busy) {
        if cpu.trace {
            tracing::trace!(
                pc = format_args!("{:#010x}", entry.pc),
                "interlock: {}",
                disassemble(entry.inst)
            );
        }
        cpu.interlocked = Some(entry);
        cpu.id_ex = bubble(entry.pc);
        return;
    } else if !decoded.ctrl.is_illegal {
        cpu.busy.claim_destinations(&decoded);
        if entry.inst.opcode() == OP_COP1 {
            cpu.stats.fp_instructions += 1;
        }
    }

    if cpu.trace {
        tracing::trace!(
            pc = format_args!("{:#010x}", entry.pc),
            "decode: {}",
            disassemble(entry.inst)
        );
    }
    cpu.id_ex = decoded;
}

/// Returns the decoded form of `sll r0, r0, 0` at `pc`.
pub fn bubble(pc: u32) -> IdExEntry {
    decode_instruction(NOP, pc, &RegisterFile::default())
}

/// Decodes a raw instruction word.
///
/// Source operands are read from `regs`; Execute and Memory later refresh them from the
/// shadow register file. Immediates are extended here: sign extension for arithmetic and
/// set-on-less-than, zero extension for the logical operations.
///
/// Unrecognized encodings produce an entry with `is_illegal` set and every write enable
/// cleared.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction.
/// * `pc` - Address of the instruction.
/// * `regs` - Register file supplying source operands.
///
/// # Examples
///
/// ```
/// use mipsim_core::common::RegisterFile;
/// use mipsim_core::core::pipeline::signals::ExecOp;
/// use mipsim_core::core::pipeline::stages::decode::decode_instruction;
///
/// let mut regs = RegisterFile::new();
/// regs.write(4, 41);
///
/// // addiu a0, a0, 1
/// let e = decode_instruction(0x2484_0001, 0x400000, &regs);
/// assert_eq!(e.ctrl.op, ExecOp::Add);
/// assert!(e.ctrl.reg_write);
/// assert_eq!((e.src1, e.src2, e.dst), (41, 1, 4));
/// ```
pub fn decode_instruction(inst: u32, pc: u32, regs: &RegisterFile) -> IdExEntry {
    let mut e = IdExEntry {
        pc,
        inst,
        ..Default::default()
    };

    match inst.opcode() {
        OP_SPECIAL => decode_special(&mut e, regs),
        OP_REGIMM => decode_regimm(&mut e, regs),
        OP_J | OP_JAL => {
            e.btgt = bru::jump_target(pc, inst.target());
            e.ctrl.is_branch = true;
            e.ctrl.op = ExecOp::Jump;
            if inst.opcode() == OP_JAL {
                write_gpr(&mut e, REG_RA);
            }
        }
        OP_BEQ | OP_BNE => {
            read_rs(&mut e, regs);
            read_rt(&mut e, regs);
            branch(&mut e);
            e.ctrl.op = if inst.opcode() == OP_BEQ {
                ExecOp::Beq
            } else {
                ExecOp::Bne
            };
        }
        OP_BLEZ | OP_BGTZ => {
            read_rs(&mut e, regs);
            branch(&mut e);
            e.ctrl.op = if inst.opcode() == OP_BLEZ {
                ExecOp::Blez
            } else {
                ExecOp::Bgtz
            };
        }
        OP_ADDI | OP_ADDIU | OP_SLTI | OP_SLTIU => {
            read_rs(&mut e, regs);
            e.src2 = inst.simm() as u32;
            write_gpr(&mut e, inst.rt());
            e.ctrl.op = match inst.opcode() {
                OP_SLTI => ExecOp::Slt,
                OP_SLTIU => ExecOp::Sltu,
                _ => ExecOp::Add,
            };
        }
        OP_ANDI | OP_ORI | OP_XORI => {
            read_rs(&mut e, regs);
            e.src2 = inst.imm();
            write_gpr(&mut e, inst.rt());
            e.ctrl.op = match inst.opcode() {
                OP_ANDI => ExecOp::And,
                OP_ORI => ExecOp::Or,
                _ => ExecOp::Xor,
            };
        }
        OP_LUI => {
            e.src2 = inst.imm();
            write_gpr(&mut e, inst.rt());
            e.ctrl.op = ExecOp::Lui;
        }
        OP_COP1 => decode_cop1(&mut e, regs),
        OP_LB | OP_LBU | OP_LH | OP_LHU | OP_LW | OP_LWL | OP_LWR | OP_LWC1 => {
            address(&mut e, regs);
            e.dst = inst.rt();
            e.latency.dst = LOAD_RESULT_LATENCY;
            if inst.opcode() == OP_LWC1 {
                e.ctrl.fp_reg_write = true;
            } else {
                e.ctrl.reg_write = true;
            }
            e.ctrl.mem_op = match inst.opcode() {
                OP_LB => MemOp::Lb,
                OP_LBU => MemOp::Lbu,
                OP_LH => MemOp::Lh,
                OP_LHU => MemOp::Lhu,
                OP_LW => MemOp::Lw,
                OP_LWL => MemOp::Lwl,
                OP_LWR => MemOp::Lwr,
                _ => MemOp::Lwc1,
            };
            if matches!(e.ctrl.mem_op, MemOp::Lwl | MemOp::Lwr) {
                e.subreg = regs.read(inst.rt());
                e.sreg2 = inst.rt();
                e.latency.src2 = MEMORY_SOURCE_SLACK;
            }
        }
        OP_SB | OP_SH | OP_SW | OP_SWL | OP_SWR => {
            address(&mut e, regs);
            e.src3 = regs.read(inst.rt());
            e.sreg2 = inst.rt();
            e.latency.src2 = MEMORY_SOURCE_SLACK;
            e.ctrl.mem_op = match inst.opcode() {
                OP_SB => MemOp::Sb,
                OP_SH => MemOp::Sh,
                OP_SW => MemOp::Sw,
                OP_SWL => MemOp::Swl,
                _ => MemOp::Swr,
            };
        }
        OP_SWC1 => {
            address(&mut e, regs);
            e.src3 = regs.read_f(inst.rt());
            e.freg = Some(inst.rt());
            e.latency.fp = MEMORY_SOURCE_SLACK;
            e.ctrl.store_fp = true;
            e.ctrl.mem_op = MemOp::Swc1;
        }
        _ => illegal(&mut e),
    }

    e
}

fn decode_special(e: &mut IdExEntry, regs: &RegisterFile) {
    let inst = e.inst;
    read_rs(e, regs);
    read_rt(e, regs);
    write_gpr(e, inst.rd());

    match inst.funct() {
        FUNCT_ADD | FUNCT_ADDU => e.ctrl.op = ExecOp::Add,
        FUNCT_SUB | FUNCT_SUBU => e.ctrl.op = ExecOp::Sub,
        FUNCT_AND => e.ctrl.op = ExecOp::And,
        FUNCT_OR => e.ctrl.op = ExecOp::Or,
        FUNCT_XOR => e.ctrl.op = ExecOp::Xor,
        FUNCT_NOR => e.ctrl.op = ExecOp::Nor,
        FUNCT_SLT => e.ctrl.op = ExecOp::Slt,
        FUNCT_SLTU => e.ctrl.op = ExecOp::Sltu,
        FUNCT_SLL | FUNCT_SRL | FUNCT_SRA => {
            e.shamt = inst.sa();
            e.ctrl.op = match inst.funct() {
                FUNCT_SLL => ExecOp::Sll,
                FUNCT_SRL => ExecOp::Srl,
                _ => ExecOp::Sra,
            };
        }
        FUNCT_SLLV => e.ctrl.op = ExecOp::Sllv,
        FUNCT_SRLV => e.ctrl.op = ExecOp::Srlv,
        FUNCT_SRAV => e.ctrl.op = ExecOp::Srav,
        FUNCT_MULT | FUNCT_MULTU | FUNCT_DIV | FUNCT_DIVU => {
            e.ctrl.reg_write = false;
            e.ctrl.hi_write = true;
            e.ctrl.lo_write = true;
            e.ctrl.op = match inst.funct() {
                FUNCT_MULT => ExecOp::Mult,
                FUNCT_MULTU => ExecOp::Multu,
                FUNCT_DIV => ExecOp::Div,
                _ => ExecOp::Divu,
            };
        }
        FUNCT_MFHI => {
            e.sreg1 = HI_REG;
            e.latency.src1 = EXECUTE_SOURCE_SLACK;
            e.src1 = regs.hi();
            e.ctrl.op = ExecOp::Mfhi;
        }
        FUNCT_MFLO => {
            e.sreg1 = LO_REG;
            e.latency.src1 = EXECUTE_SOURCE_SLACK;
            e.src1 = regs.lo();
            e.ctrl.op = ExecOp::Mflo;
        }
        FUNCT_MTHI => {
            e.ctrl.reg_write = false;
            e.ctrl.hi_write = true;
            e.ctrl.op = ExecOp::Mthi;
        }
        FUNCT_MTLO => {
            e.ctrl.reg_write = false;
            e.ctrl.lo_write = true;
            e.ctrl.op = ExecOp::Mtlo;
        }
        FUNCT_JR => {
            e.ctrl.reg_write = false;
            e.ctrl.is_branch = true;
            e.ctrl.op = ExecOp::JumpReg;
        }
        FUNCT_JALR => {
            e.ctrl.is_branch = true;
            e.ctrl.op = ExecOp::JumpReg;
        }
        FUNCT_SYSCALL => {
            e.ctrl.reg_write = false;
            e.ctrl.is_syscall = true;
            e.ctrl.op = ExecOp::Nop;
        }
        FUNCT_BREAK => {
            e.ctrl.reg_write = false;
            e.ctrl.op = ExecOp::Nop;
        }
        _ => illegal(e),
    }
}

fn decode_regimm(e: &mut IdExEntry, regs: &RegisterFile) {
    let rt = e.inst.rt();
    read_rs(e, regs);
    branch(e);

    match rt {
        RT_BLTZ | RT_BLTZAL => e.ctrl.op = ExecOp::Bltz,
        RT_BGEZ | RT_BGEZAL => e.ctrl.op = ExecOp::Bgez,
        _ => return illegal(e),
    }
    if matches!(rt, RT_BLTZAL | RT_BGEZAL) {
        write_gpr(e, REG_RA);
    }
}

fn decode_cop1(e: &mut IdExEntry, regs: &RegisterFile) {
    let inst = e.inst;

    match inst.fmt() {
        FMT_MTC1 => {
            e.src1 = regs.read(inst.rt());
            e.sreg1 = inst.rt();
            e.latency.src1 = EXECUTE_SOURCE_SLACK;
            e.dst = inst.fs();
            e.latency.dst = ALU_RESULT_LATENCY;
            e.ctrl.fp_reg_write = true;
            e.ctrl.op = ExecOp::Mtc1;
        }
        FMT_MFC1 => {
            e.src1 = regs.read_f(inst.fs());
            e.freg = Some(inst.fs());
            e.latency.fp = EXECUTE_SOURCE_SLACK;
            e.ctrl.src1_fp = true;
            write_gpr(e, inst.rt());
            e.ctrl.op = ExecOp::Mfc1;
        }
        _ => illegal(e),
    }
}

fn read_rs(e: &mut IdExEntry, regs: &RegisterFile) {
    let rs = e.inst.rs();
    e.src1 = regs.read(rs);
    e.sreg1 = rs;
    e.latency.src1 = EXECUTE_SOURCE_SLACK;
}

fn read_rt(e: &mut IdExEntry, regs: &RegisterFile) {
    let rt = e.inst.rt();
    e.src2 = regs.read(rt);
    e.sreg2 = rt;
    e.latency.src2 = EXECUTE_SOURCE_SLACK;
}

fn write_gpr(e: &mut IdExEntry, dst: usize) {
    e.dst = dst;
    e.latency.dst = ALU_RESULT_LATENCY;
    e.ctrl.reg_write = true;
}

fn branch(e: &mut IdExEntry) {
    e.btgt = bru::branch_target(e.pc, e.inst.simm());
    e.ctrl.is_branch = true;
}

fn address(e: &mut IdExEntry, regs: &RegisterFile) {
    read_rs(e, regs);
    e.src2 = e.inst.imm();
    e.offset = e.inst.simm();
    e.ctrl.mem_control = true;
    e.ctrl.op = ExecOp::MemAddr;
}

fn illegal(e: &mut IdExEntry) {
    e.ctrl = ControlSignals {
        is_illegal: true,
        op: ExecOp::Nop,
        ..ControlSignals::default()
    };
    e.latency.dst = 0;
}
