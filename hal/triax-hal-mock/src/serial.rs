//! Scripted serial port mock

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use triax_hal::SerialPort;

/// Errors produced by the mock transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockSerialError {
    /// The scripted receive queue is exhausted
    Eof,
}

#[derive(Debug, Default)]
struct SerialState {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

/// Serial port fed from a scripted byte queue
///
/// Receive bytes come from a script set up by the test; transmitted
/// bytes are captured for inspection. A blocking read on an exhausted
/// script returns [`MockSerialError::Eof`] instead of hanging, which
/// also gives tests a clean way to stop the controller loop.
#[derive(Debug, Clone, Default)]
pub struct MockSerial {
    state: Rc<RefCell<SerialState>>,
}

impl MockSerial {
    /// Create an empty port
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a port with an initial receive script
    pub fn with_script(script: &[u8]) -> Self {
        let port = Self::new();
        port.push_bytes(script);
        port
    }

    /// Append bytes to the receive script
    pub fn push_bytes(&self, bytes: &[u8]) {
        self.state.borrow_mut().rx.extend(bytes.iter().copied());
    }

    /// Everything the controller has written so far
    pub fn tx_bytes(&self) -> Vec<u8> {
        self.state.borrow().tx.clone()
    }

    /// Drain and return the captured transmit bytes
    pub fn take_tx(&self) -> Vec<u8> {
        std::mem::take(&mut self.state.borrow_mut().tx)
    }
}

impl SerialPort for MockSerial {
    type Error = MockSerialError;

    fn byte_available(&mut self) -> bool {
        !self.state.borrow().rx.is_empty()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.state
            .borrow_mut()
            .rx
            .pop_front()
            .ok_or(MockSerialError::Eof)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.state.borrow_mut().tx.push(byte);
        Ok(())
    }
}
