use crate::cpu::decoder::Decoder;
use crate::memory::Memory;

fn memory_with_code(code: &[u8]) -> Memory {
    let mut memory = Memory::new();
    memory.write(0x0100, code);
    memory
}

#[test]
fn can_decode_instruction_lengths() {
    let memory = memory_with_code(&[
        0x3E, 0x05,       // mvi a,0x05
        0xC3, 0x00, 0x01, // jmp 0x0100
        0x76,             // hlt
    ]);
    let mut decoder = Decoder::default();

    let op = decoder.get_instruction(&memory, 0x0100);
    assert_eq!(2, op.length);
    assert_eq!("mvi a,0x05", op.to_string());

    let op = decoder.get_instruction(&memory, 0x0102);
    assert_eq!(3, op.length);
    assert_eq!("jmp 0x0100", op.to_string());

    let op = decoder.get_instruction(&memory, 0x0105);
    assert_eq!(1, op.length);
    assert_eq!("hlt", op.to_string());
}

#[test]
fn can_decode_mov_family() {
    let memory = memory_with_code(&[
        0x41, // mov b,c
        0x77, // mov m,a
        0x7E, // mov a,m
        0x36, 0x99, // mvi m,0x99
    ]);
    let mut decoder = Decoder::default();

    assert_eq!("mov b,c", decoder.get_instruction(&memory, 0x0100).to_string());
    assert_eq!("mov m,a", decoder.get_instruction(&memory, 0x0101).to_string());
    assert_eq!("mov a,m", decoder.get_instruction(&memory, 0x0102).to_string());
    assert_eq!("mvi m,0x99", decoder.get_instruction(&memory, 0x0103).to_string());
}

#[test]
fn can_decode_alu_and_stack() {
    let memory = memory_with_code(&[
        0x80,       // add b
        0x96,       // sub m
        0xC6, 0x10, // adi 0x10
        0xFE, 0x2A, // cpi 0x2a
        0xF5,       // push psw
        0xC1,       // pop b
        0xDB, 0x10, // in 0x10
        0xD3, 0x11, // out 0x11
    ]);
    let mut decoder = Decoder::default();

    assert_eq!("add b", decoder.get_instruction(&memory, 0x0100).to_string());
    assert_eq!("sub m", decoder.get_instruction(&memory, 0x0101).to_string());
    assert_eq!("adi 0x10", decoder.get_instruction(&memory, 0x0102).to_string());
    assert_eq!("cpi 0x2A", decoder.get_instruction(&memory, 0x0104).to_string());
    assert_eq!("push psw", decoder.get_instruction(&memory, 0x0106).to_string());
    assert_eq!("pop b", decoder.get_instruction(&memory, 0x0107).to_string());
    assert_eq!("in 0x10", decoder.get_instruction(&memory, 0x0108).to_string());
    assert_eq!("out 0x11", decoder.get_instruction(&memory, 0x010A).to_string());
}

#[test]
fn can_decode_branches() {
    let memory = memory_with_code(&[
        0xC2, 0x34, 0x12, // jnz 0x1234
        0xD8,             // rc
        0xF4, 0x05, 0x00, // cp 0x0005
        0xC7,             // rst 0
        0xFF,             // rst 7
        0xE9,             // pchl
    ]);
    let mut decoder = Decoder::default();

    assert_eq!("jnz 0x1234", decoder.get_instruction(&memory, 0x0100).to_string());
    assert_eq!("rc", decoder.get_instruction(&memory, 0x0103).to_string());
    assert_eq!("cp 0x0005", decoder.get_instruction(&memory, 0x0104).to_string());
    assert_eq!("rst 0", decoder.get_instruction(&memory, 0x0107).to_string());
    assert_eq!("rst 7", decoder.get_instruction(&memory, 0x0108).to_string());
    assert_eq!("pchl", decoder.get_instruction(&memory, 0x0109).to_string());
}

#[test]
fn can_decode_undocumented_opcodes() {
    let memory = memory_with_code(&[
        0x08,             // undocumented nop
        0xCB, 0x00, 0x02, // undocumented jmp alias
        0xD9,             // undocumented ret alias
        0xED, 0x00, 0x02, // undocumented call alias
    ]);
    let mut decoder = Decoder::default();

    assert_eq!("nop", decoder.get_instruction(&memory, 0x0100).to_string());
    assert_eq!("jmp 0x0200", decoder.get_instruction(&memory, 0x0101).to_string());
    assert_eq!("ret", decoder.get_instruction(&memory, 0x0104).to_string());
    assert_eq!("call 0x0200", decoder.get_instruction(&memory, 0x0105).to_string());
}

#[test]
fn can_disassemble_block() {
    let memory = memory_with_code(&[
        0x3E, 0x05,       // mvi a,0x05
        0x06, 0x03,       // mvi b,0x03
        0x80,             // add b
        0x76,             // hlt
    ]);
    let mut decoder = Decoder::default();

    let res = decoder.disassemble_block_to_str(&memory, 0x0100, 4);
    assert_eq!("\
0100: 3E 05    mvi a,0x05
0102: 06 03    mvi b,0x03
0104: 80       add b
0105: 76       hlt", res);
}
