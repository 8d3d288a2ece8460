use crate::cpu::instruction::{Instruction, InstructionInfo, Parameter};
use crate::cpu::op::{Op, Cond};
use crate::cpu::register::{R8, R16};
use crate::memory::Memory;

#[cfg(test)]
#[path = "./decoder_test.rs"]
mod decoder_test;

#[derive(Clone, Default)]
pub struct Decoder {
    // instruction decoding cursor
    current_offset: u16,
}

impl Decoder {
    /// decodes `n` instructions starting at `offset`
    pub fn decode_to_block(&mut self, memory: &Memory, offset: u16, n: usize) -> Vec<InstructionInfo> {
        let mut ops: Vec<InstructionInfo> = Vec::new();
        let mut inst_offset = 0;
        for _ in 0..n {
            let op = self.get_instruction_info(memory, offset.wrapping_add(inst_offset));
            inst_offset = inst_offset.wrapping_add(op.bytes.len() as u16);
            ops.push(op);
        }
        ops
    }

    pub fn disassemble_block_to_str(&mut self, memory: &Memory, offset: u16, n: usize) -> String {
        let ops = self.decode_to_block(memory, offset, n);
        let strs: Vec<String> = ops.iter().map(|op| op.to_string()).collect();
        strs.join("\n")
    }

    // decodes op at offset into a InstructionInfo
    pub fn get_instruction_info(&mut self, memory: &Memory, offset: u16) -> InstructionInfo {
        let instr = self.get_instruction(memory, offset);
        InstructionInfo {
            offset,
            bytes: memory.read(offset, instr.length as usize),
            instruction: instr,
        }
    }

    // decodes op at offset into a Instruction
    pub fn get_instruction(&mut self, memory: &Memory, offset: u16) -> Instruction {
        self.current_offset = offset;
        let b = self.read_u8(memory);

        let mut op = match b {
            // the 8080 silently runs the seven undocumented 0x-8/0x-0
            // holes below 0x40 as NOP
            0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => {
                Instruction::new(Op::Nop)
            }
            0x01 | 0x11 | 0x21 | 0x31 => {
                // lxi rp,d16
                let imm = Parameter::Imm16(self.read_u16(memory));
                Instruction::new2(Op::Lxi, pair_sp(b >> 4 & 3), imm)
            }
            0x02 | 0x12 => {
                // stax b/d
                Instruction::new1(Op::Stax, pair_sp(b >> 4 & 3))
            }
            0x0A | 0x1A => {
                // ldax b/d
                Instruction::new1(Op::Ldax, pair_sp(b >> 4 & 3))
            }
            0x22 => {
                // shld a16
                let addr = Parameter::Ptr16(self.read_u16(memory));
                Instruction::new1(Op::Shld, addr)
            }
            0x2A => {
                // lhld a16
                let addr = Parameter::Ptr16(self.read_u16(memory));
                Instruction::new1(Op::Lhld, addr)
            }
            0x32 => {
                // sta a16
                let addr = Parameter::Ptr16(self.read_u16(memory));
                Instruction::new1(Op::Sta, addr)
            }
            0x3A => {
                // lda a16
                let addr = Parameter::Ptr16(self.read_u16(memory));
                Instruction::new1(Op::Lda, addr)
            }
            0x03 | 0x13 | 0x23 | 0x33 => {
                // inx rp
                Instruction::new1(Op::Inx, pair_sp(b >> 4 & 3))
            }
            0x0B | 0x1B | 0x2B | 0x3B => {
                // dcx rp
                Instruction::new1(Op::Dcx, pair_sp(b >> 4 & 3))
            }
            0x09 | 0x19 | 0x29 | 0x39 => {
                // dad rp
                Instruction::new1(Op::Dad, pair_sp(b >> 4 & 3))
            }
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                // inr r/m
                Instruction::new1(Op::Inr, operand(b >> 3 & 7))
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                // dcr r/m
                Instruction::new1(Op::Dcr, operand(b >> 3 & 7))
            }
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                // mvi r/m,d8
                let imm = Parameter::Imm8(self.read_u8(memory));
                Instruction::new2(Op::Mov, operand(b >> 3 & 7), imm)
            }
            0x07 => Instruction::new(Op::Rlc),
            0x0F => Instruction::new(Op::Rrc),
            0x17 => Instruction::new(Op::Ral),
            0x1F => Instruction::new(Op::Rar),
            0x27 => Instruction::new(Op::Daa),
            0x2F => Instruction::new(Op::Cma),
            0x37 => Instruction::new(Op::Stc),
            0x3F => Instruction::new(Op::Cmc),
            0x76 => Instruction::new(Op::Hlt),
            0x40..=0x7F => {
                // mov dst,src; both operand fields use the shared 3-bit
                // encoding with index 6 meaning the byte at HL
                Instruction::new2(Op::Mov, operand(b >> 3 & 7), operand(b & 7))
            }
            0x80..=0x87 => Instruction::new1(Op::Add, operand(b & 7)),
            0x88..=0x8F => Instruction::new1(Op::Adc, operand(b & 7)),
            0x90..=0x97 => Instruction::new1(Op::Sub, operand(b & 7)),
            0x98..=0x9F => Instruction::new1(Op::Sbb, operand(b & 7)),
            0xA0..=0xA7 => Instruction::new1(Op::Ana, operand(b & 7)),
            0xA8..=0xAF => Instruction::new1(Op::Xra, operand(b & 7)),
            0xB0..=0xB7 => Instruction::new1(Op::Ora, operand(b & 7)),
            0xB8..=0xBF => Instruction::new1(Op::Cmp, operand(b & 7)),
            0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => {
                // conditional ret
                Instruction::new(Op::Ret(cond(b >> 3 & 7)))
            }
            // 0xD9 is an undocumented alias of RET
            0xC9 | 0xD9 => Instruction::new(Op::Ret(Cond::Always)),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => {
                // pop rp
                Instruction::new1(Op::Pop, pair_psw(b >> 4 & 3))
            }
            0xC5 | 0xD5 | 0xE5 | 0xF5 => {
                // push rp
                Instruction::new1(Op::Push, pair_psw(b >> 4 & 3))
            }
            0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => {
                // conditional jmp a16
                let target = Parameter::Imm16(self.read_u16(memory));
                Instruction::new1(Op::Jmp(cond(b >> 3 & 7)), target)
            }
            // 0xCB is an undocumented alias of JMP
            0xC3 | 0xCB => {
                let target = Parameter::Imm16(self.read_u16(memory));
                Instruction::new1(Op::Jmp(Cond::Always), target)
            }
            0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => {
                // conditional call a16
                let target = Parameter::Imm16(self.read_u16(memory));
                Instruction::new1(Op::Call(cond(b >> 3 & 7)), target)
            }
            // 0xDD, 0xED and 0xFD are undocumented aliases of CALL
            0xCD | 0xDD | 0xED | 0xFD => {
                let target = Parameter::Imm16(self.read_u16(memory));
                Instruction::new1(Op::Call(Cond::Always), target)
            }
            0xC6 => {
                // adi d8
                let imm = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::Add, imm)
            }
            0xCE => {
                // aci d8
                let imm = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::Adc, imm)
            }
            0xD6 => {
                // sui d8
                let imm = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::Sub, imm)
            }
            0xDE => {
                // sbi d8
                let imm = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::Sbb, imm)
            }
            0xE6 => {
                // ani d8
                let imm = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::Ana, imm)
            }
            0xEE => {
                // xri d8
                let imm = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::Xra, imm)
            }
            0xF6 => {
                // ori d8
                let imm = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::Ora, imm)
            }
            0xFE => {
                // cpi d8
                let imm = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::Cmp, imm)
            }
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
                // rst n
                Instruction::new(Op::Rst(b >> 3 & 7))
            }
            0xD3 => {
                // out port
                let port = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::Out, port)
            }
            0xDB => {
                // in port
                let port = Parameter::Imm8(self.read_u8(memory));
                Instruction::new1(Op::In, port)
            }
            0xE3 => Instruction::new(Op::Xthl),
            0xE9 => Instruction::new(Op::Pchl),
            0xEB => Instruction::new(Op::Xchg),
            0xF3 => Instruction::new(Op::Di),
            0xF9 => Instruction::new(Op::Sphl),
            0xFB => Instruction::new(Op::Ei),
        };

        op.length = self.current_offset.wrapping_sub(offset) as u8;
        op
    }

    fn read_u8(&mut self, memory: &Memory) -> u8 {
        let b = memory.read_u8(self.current_offset);
        self.current_offset = self.current_offset.wrapping_add(1);
        b
    }

    fn read_u16(&mut self, memory: &Memory) -> u16 {
        let lo = self.read_u8(memory);
        let hi = self.read_u8(memory);
        u16::from(hi) << 8 | u16::from(lo)
    }
}

// the shared 3-bit source/destination operand field
fn operand(bits: u8) -> Parameter {
    match bits {
        0 => Parameter::Reg8(R8::B),
        1 => Parameter::Reg8(R8::C),
        2 => Parameter::Reg8(R8::D),
        3 => Parameter::Reg8(R8::E),
        4 => Parameter::Reg8(R8::H),
        5 => Parameter::Reg8(R8::L),
        6 => Parameter::MemHL,
        7 => Parameter::Reg8(R8::A),
        _ => unreachable!(),
    }
}

// register pair field where encoding 3 means SP
fn pair_sp(bits: u8) -> Parameter {
    match bits {
        0 => Parameter::Reg16(R16::BC),
        1 => Parameter::Reg16(R16::DE),
        2 => Parameter::Reg16(R16::HL),
        3 => Parameter::Reg16(R16::SP),
        _ => unreachable!(),
    }
}

// register pair field where encoding 3 means PSW (push/pop)
fn pair_psw(bits: u8) -> Parameter {
    match bits {
        0 => Parameter::Reg16(R16::BC),
        1 => Parameter::Reg16(R16::DE),
        2 => Parameter::Reg16(R16::HL),
        3 => Parameter::Reg16(R16::PSW),
        _ => unreachable!(),
    }
}

fn cond(bits: u8) -> Cond {
    match bits {
        0 => Cond::NonZero,
        1 => Cond::Zero,
        2 => Cond::NoCarry,
        3 => Cond::Carry,
        4 => Cond::ParityOdd,
        5 => Cond::ParityEven,
        6 => Cond::Plus,
        7 => Cond::Minus,
        _ => unreachable!(),
    }
}
