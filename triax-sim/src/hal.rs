//! Host implementations of the Triax HAL traits
//!
//! The transport is stdin/stdout: a reader thread pumps stdin bytes
//! into a channel so `byte_available` has something to poll, matching
//! how a UART receive buffer behaves. GPIO writes are logged instead of
//! driven, and the home inputs read a level fixed at startup.

use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};
use triax_hal::{DelayMs, InputPin, OutputPin, SerialPort};

/// Transport errors for the stdio serial port
#[derive(Debug)]
pub enum SimSerialError {
    /// stdin reached end of file
    Disconnected,
    /// stdout write failed
    Io(io::Error),
}

impl std::fmt::Display for SimSerialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimSerialError::Disconnected => write!(f, "stdin closed"),
            SimSerialError::Io(err) => write!(f, "stdout write failed: {}", err),
        }
    }
}

impl std::error::Error for SimSerialError {}

impl From<io::Error> for SimSerialError {
    fn from(err: io::Error) -> Self {
        SimSerialError::Io(err)
    }
}

/// Serial port over stdin/stdout
pub struct StdioSerial {
    rx: Receiver<u8>,
    peeked: Option<u8>,
}

impl StdioSerial {
    /// Spawn the stdin reader thread and wire up the port
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for byte in stdin.lock().bytes() {
                let Ok(byte) = byte else { break };
                if tx.send(byte).is_err() {
                    break;
                }
            }
        });
        Self { rx, peeked: None }
    }
}

impl Default for StdioSerial {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialPort for StdioSerial {
    type Error = SimSerialError;

    fn byte_available(&mut self) -> bool {
        if self.peeked.is_some() {
            return true;
        }
        match self.rx.try_recv() {
            Ok(byte) => {
                self.peeked = Some(byte);
                true
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => false,
        }
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        if let Some(byte) = self.peeked.take() {
            return Ok(byte);
        }
        self.rx.recv().map_err(|_| SimSerialError::Disconnected)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&[byte])?;
        stdout.flush()?;
        Ok(())
    }
}

/// Output pin that logs its transitions
pub struct SimOutputPin {
    pin: u8,
    label: &'static str,
    high: bool,
}

impl SimOutputPin {
    pub fn new(pin: u8, label: &'static str) -> Self {
        Self {
            pin,
            label,
            high: false,
        }
    }
}

impl OutputPin for SimOutputPin {
    fn set_high(&mut self) {
        if !self.high {
            trace!(pin = self.pin, label = self.label, "pin high");
        }
        self.high = true;
    }

    fn set_low(&mut self) {
        if self.high {
            trace!(pin = self.pin, label = self.label, "pin low");
        }
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin with a level fixed at startup
pub struct SimInputPin {
    pin: u8,
    level: bool,
}

impl SimInputPin {
    pub fn new(pin: u8, level: bool) -> Self {
        Self { pin, level }
    }
}

impl InputPin for SimInputPin {
    fn is_high(&self) -> bool {
        debug!(pin = self.pin, level = self.level, "home input read");
        self.level
    }
}

/// Real blocking delay
pub struct SleepDelay;

impl DelayMs for SleepDelay {
    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
