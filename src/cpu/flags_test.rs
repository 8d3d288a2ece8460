use crate::cpu::flags::Flags;

#[test]
fn can_pack_unpack_flags() {
    let mut flags = Flags::new();
    // reset state is the bare fixed bit
    assert_eq!(0x02, flags.u8());

    // bit 1 reads back as one, bits 3 and 5 as zero
    flags.set_u8(0xFF);
    assert_eq!(0xD7, flags.u8());

    flags.set_u8(0x00);
    assert_eq!(0x02, flags.u8());
}

#[test]
fn can_set_parity() {
    let mut flags = Flags::new();
    flags.set_parity(0x00);
    assert_eq!(true, flags.parity);
    flags.set_parity(0x01);
    assert_eq!(false, flags.parity);
    flags.set_parity(0x03);
    assert_eq!(true, flags.parity);
    // only the low byte of the result counts
    flags.set_parity(0x107);
    assert_eq!(false, flags.parity);
}

#[test]
fn can_set_szp() {
    let mut flags = Flags::new();
    flags.set_szp(0x00);
    assert_eq!(true, flags.zero);
    assert_eq!(false, flags.sign);
    assert_eq!(true, flags.parity);

    // 0x180 masks to 0x80
    flags.set_szp(0x180);
    assert_eq!(false, flags.zero);
    assert_eq!(true, flags.sign);
    assert_eq!(false, flags.parity);
}

#[test]
fn can_set_auxiliary() {
    let mut flags = Flags::new();
    // 0x0F + 0x01 carries out of bit 3
    flags.set_auxiliary(0x10, 0x0F, 0x01);
    assert_eq!(true, flags.auxiliary_carry);

    // 0x04 + 0x05 does not
    flags.set_auxiliary(0x09, 0x04, 0x05);
    assert_eq!(false, flags.auxiliary_carry);
}

#[test]
fn can_set_carry() {
    let mut flags = Flags::new();
    flags.set_carry(0x100);
    assert_eq!(true, flags.carry);
    flags.set_carry(0xFF);
    assert_eq!(false, flags.carry);
}
