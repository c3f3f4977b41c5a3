use mipsim_core::isa::opcodes::*;

/// Fluent encoder for MIPS instructions.
///
/// Register arguments are raw register numbers; immediates are passed as the value
/// that ends up in the 16-bit field (branch offsets in words).
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rs: u32,
    rt: u32,
    rd: u32,
    sa: u32,
    funct: u32,
    imm: i32,
    target: u32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rs(mut self, rs: u32) -> Self {
        self.rs = rs;
        self
    }

    pub fn rt(mut self, rt: u32) -> Self {
        self.rt = rt;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn funct(mut self, funct: u32) -> Self {
        self.funct = funct;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- R-type ---

    fn r(mut self, funct: u32, rd: u32, rs: u32, rt: u32) -> Self {
        self.opcode = OP_SPECIAL;
        self.funct = funct;
        self.rd = rd;
        self.rs = rs;
        self.rt = rt;
        self
    }

    pub fn addu(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_ADDU, rd, rs, rt)
    }

    pub fn add(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_ADD, rd, rs, rt)
    }

    pub fn subu(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_SUBU, rd, rs, rt)
    }

    pub fn and(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_AND, rd, rs, rt)
    }

    pub fn or(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_OR, rd, rs, rt)
    }

    pub fn xor(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_XOR, rd, rs, rt)
    }

    pub fn nor(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_NOR, rd, rs, rt)
    }

    pub fn slt(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_SLT, rd, rs, rt)
    }

    pub fn sltu(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_SLTU, rd, rs, rt)
    }

    pub fn sll(mut self, rd: u32, rt: u32, sa: u32) -> Self {
        self.sa = sa;
        self.r(FUNCT_SLL, rd, 0, rt)
    }

    pub fn srl(mut self, rd: u32, rt: u32, sa: u32) -> Self {
        self.sa = sa;
        self.r(FUNCT_SRL, rd, 0, rt)
    }

    pub fn sra(mut self, rd: u32, rt: u32, sa: u32) -> Self {
        self.sa = sa;
        self.r(FUNCT_SRA, rd, 0, rt)
    }

    pub fn sllv(self, rd: u32, rt: u32, rs: u32) -> Self {
        self.r(FUNCT_SLLV, rd, rs, rt)
    }

    pub fn mult(self, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_MULT, 0, rs, rt)
    }

    pub fn multu(self, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_MULTU, 0, rs, rt)
    }

    pub fn div(self, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_DIV, 0, rs, rt)
    }

    pub fn divu(self, rs: u32, rt: u32) -> Self {
        self.r(FUNCT_DIVU, 0, rs, rt)
    }

    pub fn mfhi(self, rd: u32) -> Self {
        self.r(FUNCT_MFHI, rd, 0, 0)
    }

    pub fn mflo(self, rd: u32) -> Self {
        self.r(FUNCT_MFLO, rd, 0, 0)
    }

    pub fn mthi(self, rs: u32) -> Self {
        self.r(FUNCT_MTHI, 0, rs, 0)
    }

    pub fn mtlo(self, rs: u32) -> Self {
        self.r(FUNCT_MTLO, 0, rs, 0)
    }

    pub fn jr(self, rs: u32) -> Self {
        self.r(FUNCT_JR, 0, rs, 0)
    }

    pub fn jalr(self, rd: u32, rs: u32) -> Self {
        self.r(FUNCT_JALR, rd, rs, 0)
    }

    pub fn syscall(self) -> Self {
        self.r(FUNCT_SYSCALL, 0, 0, 0)
    }

    pub fn brk(self) -> Self {
        self.r(FUNCT_BREAK, 0, 0, 0)
    }

    pub fn nop(self) -> Self {
        self.sll(0, 0, 0)
    }

    // --- I-type ---

    fn i(mut self, opcode: u32, rt: u32, rs: u32, imm: i32) -> Self {
        self.opcode = opcode;
        self.rt = rt;
        self.rs = rs;
        self.imm = imm;
        self
    }

    pub fn addiu(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_ADDIU, rt, rs, imm)
    }

    pub fn addi(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_ADDI, rt, rs, imm)
    }

    pub fn slti(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_SLTI, rt, rs, imm)
    }

    pub fn sltiu(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_SLTIU, rt, rs, imm)
    }

    pub fn andi(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_ANDI, rt, rs, imm)
    }

    pub fn ori(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_ORI, rt, rs, imm)
    }

    pub fn xori(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.i(OP_XORI, rt, rs, imm)
    }

    pub fn lui(self, rt: u32, imm: i32) -> Self {
        self.i(OP_LUI, rt, 0, imm)
    }

    pub fn beq(self, rs: u32, rt: u32, offset: i32) -> Self {
        self.i(OP_BEQ, rt, rs, offset)
    }

    pub fn bne(self, rs: u32, rt: u32, offset: i32) -> Self {
        self.i(OP_BNE, rt, rs, offset)
    }

    pub fn blez(self, rs: u32, offset: i32) -> Self {
        self.i(OP_BLEZ, 0, rs, offset)
    }

    pub fn bgtz(self, rs: u32, offset: i32) -> Self {
        self.i(OP_BGTZ, 0, rs, offset)
    }

    pub fn bltz(self, rs: u32, offset: i32) -> Self {
        self.i(OP_REGIMM, RT_BLTZ as u32, rs, offset)
    }

    pub fn bgez(self, rs: u32, offset: i32) -> Self {
        self.i(OP_REGIMM, RT_BGEZ as u32, rs, offset)
    }

    pub fn bltzal(self, rs: u32, offset: i32) -> Self {
        self.i(OP_REGIMM, RT_BLTZAL as u32, rs, offset)
    }

    pub fn bgezal(self, rs: u32, offset: i32) -> Self {
        self.i(OP_REGIMM, RT_BGEZAL as u32, rs, offset)
    }

    pub fn lb(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_LB, rt, rs, offset)
    }

    pub fn lbu(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_LBU, rt, rs, offset)
    }

    pub fn lh(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_LH, rt, rs, offset)
    }

    pub fn lhu(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_LHU, rt, rs, offset)
    }

    pub fn lw(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_LW, rt, rs, offset)
    }

    pub fn lwl(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_LWL, rt, rs, offset)
    }

    pub fn lwr(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_LWR, rt, rs, offset)
    }

    pub fn sb(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_SB, rt, rs, offset)
    }

    pub fn sh(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_SH, rt, rs, offset)
    }

    pub fn sw(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_SW, rt, rs, offset)
    }

    pub fn swl(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_SWL, rt, rs, offset)
    }

    pub fn swr(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_SWR, rt, rs, offset)
    }

    pub fn lwc1(self, ft: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_LWC1, ft, rs, offset)
    }

    pub fn swc1(self, ft: u32, rs: u32, offset: i32) -> Self {
        self.i(OP_SWC1, ft, rs, offset)
    }

    // --- COP1 moves (fs travels in the rd field) ---

    pub fn mtc1(mut self, rt: u32, fs: u32) -> Self {
        self.opcode = OP_COP1;
        self.rs = FMT_MTC1;
        self.rt = rt;
        self.rd = fs;
        self
    }

    pub fn mfc1(mut self, rt: u32, fs: u32) -> Self {
        self.opcode = OP_COP1;
        self.rs = FMT_MFC1;
        self.rt = rt;
        self.rd = fs;
        self
    }

    // --- J-type ---

    pub fn j(mut self, target: u32) -> Self {
        self.opcode = OP_J;
        self.target = target;
        self
    }

    pub fn jal(mut self, target: u32) -> Self {
        self.opcode = OP_JAL;
        self.target = target;
        self
    }

    pub fn build(self) -> u32 {
        let op = (self.opcode & 0x3f) << 26;
        let rs = (self.rs & 0x1f) << 21;
        let rt = (self.rt & 0x1f) << 16;

        match self.opcode {
            OP_SPECIAL | OP_COP1 => {
                let rd = (self.rd & 0x1f) << 11;
                let sa = (self.sa & 0x1f) << 6;
                op | rs | rt | rd | sa | (self.funct & 0x3f)
            }
            OP_J | OP_JAL => op | (self.target & 0x03ff_ffff),
            _ => op | rs | rt | (self.imm as u32 & 0xffff),
        }
    }
}

/// Instructions that terminate the program through the exit syscall.
pub fn exit_sequence(code: i32) -> [u32; 3] {
    [
        InstructionBuilder::new().addiu(2, 0, 1001).build(),
        InstructionBuilder::new().addiu(4, 0, code).build(),
        InstructionBuilder::new().syscall().build(),
    ]
}
