use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::cpu::CPU;
use crate::hardware::{Sio, SioPort};
use crate::tools::{read_binary, LoadError};

#[cfg(test)]
#[path = "./machine_test.rs"]
mod machine_test;

/// An Altair 8800 with a serial console: the CPU core wired to an
/// 88-2SIO style terminal port.
pub struct Machine {
    pub cpu: CPU,
    sio: Rc<RefCell<Sio>>,
}

impl Default for Machine {
    fn default() -> Self {
        let sio = Rc::new(RefCell::new(Sio::new()));
        let mut cpu = CPU::new();
        cpu.attach_io(Box::new(SioPort { sio: Rc::clone(&sio) }));
        Machine { cpu, sio }
    }
}

impl Machine {
    // reset the CPU and memory; the console keeps its buffers
    pub fn hard_reset(&mut self) {
        self.cpu.reset();
    }

    /// loads a raw image at `base` and points PC at it
    pub fn load_bin(&mut self, base: u16, data: &[u8]) {
        self.cpu.load(base, data);
        self.cpu.regs.pc = base;
    }

    /// loads a raw image from disk at `base`
    pub fn load_rom_file<P: AsRef<Path>>(&mut self, base: u16, path: P) -> Result<(), LoadError> {
        let data = read_binary(path)?;
        self.load_bin(base, &data);
        Ok(())
    }

    /// queues text as terminal input for the guest
    pub fn type_text(&mut self, text: &str) {
        self.sio.borrow_mut().queue_input(text.as_bytes());
    }

    /// drains everything the guest has printed so far
    pub fn console_output(&mut self) -> String {
        let bytes = self.sio.borrow_mut().drain_output();
        bytes.iter().map(|&b| char::from(b)).collect()
    }

    pub fn execute_instruction(&mut self) {
        self.cpu.step();
    }

    pub fn execute_instructions(&mut self, count: usize) {
        for _ in 0..count {
            self.execute_instruction()
        }
    }

    /// runs until HLT or until the instruction limit is reached.
    /// Returns the number of instructions retired.
    pub fn run_until_halt(&mut self, limit: usize) -> usize {
        self.cpu.run(limit)
    }
}
