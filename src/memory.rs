/// Flat 64 KiB address space. Addresses are 16 bits wide by
/// construction and all arithmetic on them wraps.
#[derive(Clone)]
pub struct Memory {
    data: Vec<u8>,
}

impl Default for Memory {
    fn default() -> Self {
        Memory { data: vec![0u8; 0x1_0000] }
    }
}

impl Memory {
    pub fn new() -> Self {
        Memory::default()
    }

    pub fn clear(&mut self) {
        for b in &mut self.data {
            *b = 0;
        }
    }

    pub fn read_u8(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    pub fn write_u8(&mut self, addr: u16, data: u8) {
        self.data[addr as usize] = data;
    }

    // little-endian word, the 8080 byte order
    pub fn read_u16(&self, addr: u16) -> u16 {
        u16::from(self.read_u8(addr)) |
            u16::from(self.read_u8(addr.wrapping_add(1))) << 8
    }

    pub fn write_u16(&mut self, addr: u16, data: u16) {
        self.write_u8(addr, (data & 0xFF) as u8);
        self.write_u8(addr.wrapping_add(1), (data >> 8) as u8);
    }

    pub fn read(&self, addr: u16, length: usize) -> Vec<u8> {
        (0..length)
            .map(|i| self.read_u8(addr.wrapping_add(i as u16)))
            .collect()
    }

    pub fn write(&mut self, addr: u16, data: &[u8]) {
        for (i, b) in data.iter().enumerate() {
            self.write_u8(addr.wrapping_add(i as u16), *b);
        }
    }
}
