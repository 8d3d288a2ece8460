pub fn hex_bytes(data: &[u8]) -> String {
    let strs: Vec<String> = data.iter().map(|b| format!("{:02X}", b)).collect();
    strs.join(" ")
}

pub fn right_pad(s: &str, len: usize) -> String {
    let mut res = String::from(s);
    while res.len() < len {
        res.push(' ');
    }
    res
}

#[test]
fn can_format_hex_bytes() {
    assert_eq!("3E 05 80", hex_bytes(&[0x3E, 0x05, 0x80]));
    assert_eq!("", hex_bytes(&[]));
}

#[test]
fn can_right_pad() {
    assert_eq!("mov   ", right_pad("mov", 6));
    assert_eq!("rotate", right_pad("rotate", 4));
}
