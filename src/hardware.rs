use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::cpu::IoHandler;

/// 88-2SIO style serial console. Port 0x10 is the status register,
/// port 0x11 the data register.
pub const SIO_STATUS_PORT: u8 = 0x10;
pub const SIO_DATA_PORT: u8 = 0x11;

// status register bits
const STATUS_RX_READY: u8 = 0x01;
const STATUS_TX_EMPTY: u8 = 0x02;

/// Serial console state: a queue of bytes typed at the terminal and a
/// buffer of bytes the guest has written back.
#[derive(Default)]
pub struct Sio {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl Sio {
    pub fn new() -> Self {
        Sio::default()
    }

    /// queues terminal input for the guest to read
    pub fn queue_input(&mut self, data: &[u8]) {
        self.input.extend(data.iter().cloned());
    }

    /// drains everything the guest has written so far
    pub fn drain_output(&mut self) -> Vec<u8> {
        self.output.drain(..).collect()
    }

    fn status(&self) -> u8 {
        // the emulated transmitter is always ready
        let mut status = STATUS_TX_EMPTY;
        if !self.input.is_empty() {
            status |= STATUS_RX_READY;
        }
        status
    }
}

/// The console's face on the I/O bus. Shares the buffers with the
/// machine through an Rc so the host can type and read while the CPU
/// owns the bus end.
pub struct SioPort {
    pub sio: Rc<RefCell<Sio>>,
}

impl IoHandler for SioPort {
    fn port_in(&mut self, port: u8) -> u8 {
        let mut sio = self.sio.borrow_mut();
        match port {
            SIO_STATUS_PORT => sio.status(),
            SIO_DATA_PORT => sio.input.pop_front().unwrap_or(0),
            _ => 0,
        }
    }

    fn port_out(&mut self, port: u8, data: u8) {
        match port {
            // writes to the status port configure the real UART;
            // nothing to configure here
            SIO_STATUS_PORT => {}
            SIO_DATA_PORT => self.sio.borrow_mut().output.push(data),
            _ => {}
        }
    }
}
