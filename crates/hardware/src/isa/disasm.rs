//! Instruction Disassembler for the modeled MIPS subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for trace events and the illegal-instruction report.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x2484_0001); // addiu a0, a0, 1
//! assert_eq!(text, "addiu a0, a0, 1");
//! ```

use crate::isa::abi::REG_NAMES;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::*;

/// Returns the ABI name for an integer register index.
#[inline]
fn reg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("r??")
}

/// Disassembles a 32-bit MIPS instruction into a human-readable string.
///
/// Branch displacements are printed as signed byte offsets relative to the
/// delay slot, jump targets as the 28-bit region offset.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
///
/// # Returns
///
/// A mnemonic like `"addu v0, a0, a1"`, or `"unknown"` for encodings the
/// pipeline treats as illegal.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }
    let (rs, rt) = (reg(inst.rs()), reg(inst.rt()));
    let simm = inst.simm();
    let boff = simm << 2;

    match inst.opcode() {
        OP_SPECIAL => disassemble_special(inst),
        OP_REGIMM => {
            let name = match inst.rt() {
                RT_BLTZ => "bltz",
                RT_BGEZ => "bgez",
                RT_BLTZAL => "bltzal",
                RT_BGEZAL => "bgezal",
                _ => return unknown(),
            };
            format!("{name} {rs}, {boff}")
        }
        OP_J => format!("j {:#x}", inst.target() << 2),
        OP_JAL => format!("jal {:#x}", inst.target() << 2),
        OP_BEQ => format!("beq {rs}, {rt}, {boff}"),
        OP_BNE => format!("bne {rs}, {rt}, {boff}"),
        OP_BLEZ => format!("blez {rs}, {boff}"),
        OP_BGTZ => format!("bgtz {rs}, {boff}"),
        OP_ADDI => format!("addi {rt}, {rs}, {simm}"),
        OP_ADDIU => format!("addiu {rt}, {rs}, {simm}"),
        OP_SLTI => format!("slti {rt}, {rs}, {simm}"),
        OP_SLTIU => format!("sltiu {rt}, {rs}, {simm}"),
        OP_ANDI => format!("andi {rt}, {rs}, {:#x}", inst.imm()),
        OP_ORI => format!("ori {rt}, {rs}, {:#x}", inst.imm()),
        OP_XORI => format!("xori {rt}, {rs}, {:#x}", inst.imm()),
        OP_LUI => format!("lui {rt}, {:#x}", inst.imm()),
        OP_COP1 => match inst.fmt() {
            FMT_MFC1 => format!("mfc1 {rt}, f{}", inst.fs()),
            FMT_MTC1 => format!("mtc1 {rt}, f{}", inst.fs()),
            _ => unknown(),
        },
        OP_LB => format!("lb {rt}, {simm}({rs})"),
        OP_LH => format!("lh {rt}, {simm}({rs})"),
        OP_LWL => format!("lwl {rt}, {simm}({rs})"),
        OP_LW => format!("lw {rt}, {simm}({rs})"),
        OP_LBU => format!("lbu {rt}, {simm}({rs})"),
        OP_LHU => format!("lhu {rt}, {simm}({rs})"),
        OP_LWR => format!("lwr {rt}, {simm}({rs})"),
        OP_SB => format!("sb {rt}, {simm}({rs})"),
        OP_SH => format!("sh {rt}, {simm}({rs})"),
        OP_SWL => format!("swl {rt}, {simm}({rs})"),
        OP_SW => format!("sw {rt}, {simm}({rs})"),
        OP_SWR => format!("swr {rt}, {simm}({rs})"),
        OP_LWC1 => format!("lwc1 f{}, {simm}({rs})", inst.rt()),
        OP_SWC1 => format!("swc1 f{}, {simm}({rs})", inst.rt()),
        _ => unknown(),
    }
}

fn disassemble_special(inst: u32) -> String {
    let (rs, rt, rd) = (reg(inst.rs()), reg(inst.rt()), reg(inst.rd()));
    let sa = inst.sa();
    let three = |name: &str| format!("{name} {rd}, {rs}, {rt}");

    match inst.funct() {
        FUNCT_SLL => format!("sll {rd}, {rt}, {sa}"),
        FUNCT_SRL => format!("srl {rd}, {rt}, {sa}"),
        FUNCT_SRA => format!("sra {rd}, {rt}, {sa}"),
        FUNCT_SLLV => format!("sllv {rd}, {rt}, {rs}"),
        FUNCT_SRLV => format!("srlv {rd}, {rt}, {rs}"),
        FUNCT_SRAV => format!("srav {rd}, {rt}, {rs}"),
        FUNCT_JR => format!("jr {rs}"),
        FUNCT_JALR => format!("jalr {rd}, {rs}"),
        FUNCT_SYSCALL => "syscall".to_string(),
        FUNCT_BREAK => "break".to_string(),
        FUNCT_MFHI => format!("mfhi {rd}"),
        FUNCT_MTHI => format!("mthi {rs}"),
        FUNCT_MFLO => format!("mflo {rd}"),
        FUNCT_MTLO => format!("mtlo {rs}"),
        FUNCT_MULT => format!("mult {rs}, {rt}"),
        FUNCT_MULTU => format!("multu {rs}, {rt}"),
        FUNCT_DIV => format!("div {rs}, {rt}"),
        FUNCT_DIVU => format!("divu {rs}, {rt}"),
        FUNCT_ADD => three("add"),
        FUNCT_ADDU => three("addu"),
        FUNCT_SUB => three("sub"),
        FUNCT_SUBU => three("subu"),
        FUNCT_AND => three("and"),
        FUNCT_OR => three("or"),
        FUNCT_XOR => three("xor"),
        FUNCT_NOR => three("nor"),
        FUNCT_SLT => three("slt"),
        FUNCT_SLTU => three("sltu"),
        _ => unknown(),
    }
}

fn unknown() -> String {
    "unknown".to_string()
}
