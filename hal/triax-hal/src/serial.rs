//! Serial transport abstraction
//!
//! Provides a trait for the byte-oriented serial link the command
//! interpreter runs over. The transport owns its own receive buffer;
//! bytes that arrive while the controller is busy stay buffered until
//! the next read.

/// Byte-oriented serial port
///
/// Combines receive and transmit on a single peripheral, which is how
/// every transport the controller targets (UART, USB-CDC, a host pipe)
/// presents itself.
pub trait SerialPort {
    /// Error type for transport operations
    type Error;

    /// Check whether at least one received byte is waiting
    fn byte_available(&mut self) -> bool;

    /// Read a single byte
    ///
    /// Blocks until a byte is available or an error occurs.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Write a single byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a full buffer
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}
