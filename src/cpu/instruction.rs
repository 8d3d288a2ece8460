use std::fmt;

use crate::cpu::op::{Op, Cond};
use crate::cpu::register::{R8, R16};
use crate::hex::{hex_bytes, right_pad};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Parameter {
    None,
    Reg8(R8),
    /// the memory byte addressed by HL, operand index 6
    MemHL,
    Reg16(R16),
    Imm8(u8),
    Imm16(u16),
    /// a direct 16-bit address immediate
    Ptr16(u16),
}

impl Parameter {
    pub fn is_imm(&self) -> bool {
        match *self {
            Parameter::Imm8(_) | Parameter::Imm16(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Parameter::None => Ok(()),
            Parameter::Reg8(r) => write!(f, "{}", r.as_str()),
            Parameter::MemHL => write!(f, "m"),
            Parameter::Reg16(r) => write!(f, "{}", r.as_str()),
            Parameter::Imm8(v) => write!(f, "0x{:02X}", v),
            Parameter::Imm16(v) => write!(f, "0x{:04X}", v),
            Parameter::Ptr16(v) => write!(f, "0x{:04X}", v),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParameterSet {
    pub dst: Parameter,
    pub src: Parameter,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Instruction {
    pub command: Op,
    pub params: ParameterSet,
    pub length: u8,
}

impl Instruction {
    pub fn new(op: Op) -> Self {
        Instruction::new2(op, Parameter::None, Parameter::None)
    }

    pub fn new1(op: Op, dst: Parameter) -> Self {
        Instruction::new2(op, dst, Parameter::None)
    }

    pub fn new2(op: Op, dst: Parameter, src: Parameter) -> Self {
        Instruction {
            command: op,
            params: ParameterSet { dst, src },
            length: 0,
        }
    }

    /// The assembler mnemonic. The immediate forms of the move and ALU
    /// families carry their own mnemonics (mvi, adi, ...), and the
    /// conditional branches fold the condition into the name.
    pub fn mnemonic(&self) -> String {
        let imm = self.params.dst.is_imm() || self.params.src.is_imm();
        let s = match self.command {
            Op::Nop => "nop",
            Op::Mov => if imm { "mvi" } else { "mov" },
            Op::Lxi => "lxi",
            Op::Stax => "stax",
            Op::Ldax => "ldax",
            Op::Shld => "shld",
            Op::Lhld => "lhld",
            Op::Sta => "sta",
            Op::Lda => "lda",
            Op::Add => if imm { "adi" } else { "add" },
            Op::Adc => if imm { "aci" } else { "adc" },
            Op::Sub => if imm { "sui" } else { "sub" },
            Op::Sbb => if imm { "sbi" } else { "sbb" },
            Op::Ana => if imm { "ani" } else { "ana" },
            Op::Xra => if imm { "xri" } else { "xra" },
            Op::Ora => if imm { "ori" } else { "ora" },
            Op::Cmp => if imm { "cpi" } else { "cmp" },
            Op::Inr => "inr",
            Op::Dcr => "dcr",
            Op::Inx => "inx",
            Op::Dcx => "dcx",
            Op::Dad => "dad",
            Op::Rlc => "rlc",
            Op::Rrc => "rrc",
            Op::Ral => "ral",
            Op::Rar => "rar",
            Op::Daa => "daa",
            Op::Cma => "cma",
            Op::Stc => "stc",
            Op::Cmc => "cmc",
            Op::Jmp(Cond::Always) => "jmp",
            Op::Jmp(cond) => return format!("j{}", cond.as_str()),
            Op::Call(Cond::Always) => "call",
            Op::Call(cond) => return format!("c{}", cond.as_str()),
            Op::Ret(Cond::Always) => "ret",
            Op::Ret(cond) => return format!("r{}", cond.as_str()),
            Op::Rst(n) => return format!("rst {}", n),
            Op::Pchl => "pchl",
            Op::Push => "push",
            Op::Pop => "pop",
            Op::Xchg => "xchg",
            Op::Xthl => "xthl",
            Op::Sphl => "sphl",
            Op::In => "in",
            Op::Out => "out",
            Op::Ei => "ei",
            Op::Di => "di",
            Op::Hlt => "hlt",
        };
        s.to_owned()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.params.dst, &self.params.src) {
            (&Parameter::None, _) => write!(f, "{}", self.mnemonic()),
            (dst, &Parameter::None) => write!(f, "{} {}", self.mnemonic(), dst),
            (dst, src) => write!(f, "{} {},{}", self.mnemonic(), dst, src),
        }
    }
}

/// A decoded instruction together with where it came from, for
/// disassembly listings.
#[derive(Clone, Debug, PartialEq)]
pub struct InstructionInfo {
    pub offset: u16,
    pub bytes: Vec<u8>,
    pub instruction: Instruction,
}

impl fmt::Display for InstructionInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04X}: {} {}",
               self.offset,
               right_pad(&hex_bytes(&self.bytes), 8),
               self.instruction)
    }
}
