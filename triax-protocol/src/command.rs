//! Command types and encoding
//!
//! A [`Command`] is a transient value: decoded from the wire, executed
//! once, discarded. Encoding exists for tests and host-side simulation.

use heapless::Vec;

/// Action selector byte: query the configured axis count
pub const ACTION_AXIS_COUNT: u8 = b'A';
/// Action selector byte: move an axis forward
pub const ACTION_MOVE_FORWARD: u8 = b'+';
/// Action selector byte: move an axis backward
pub const ACTION_MOVE_BACKWARD: u8 = b'-';
/// Action selector byte: read an axis home switch
pub const ACTION_HOME_STATUS: u8 = b'H';

/// Maximum encoded command size (action + axis digit + u32 digit run)
pub const MAX_COMMAND_SIZE: usize = 12;

/// Errors that can occur while encoding a command or response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Output buffer too small for the encoded bytes
    BufferTooSmall,
    /// A field does not fit its single-digit wire representation
    ValueOutOfRange,
}

/// A single decoded command
///
/// The axis index is carried exactly as decoded (`axis byte - '0'`,
/// wrapping); range validation against the configured axis count is the
/// controller's job, not the protocol's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Step an axis forward by `amount` pulses
    MoveForward { axis: u8, amount: u32 },
    /// Step an axis backward by `amount` pulses
    MoveBackward { axis: u8, amount: u32 },
    /// Read an axis home switch
    HomeStatus { axis: u8 },
    /// Report the configured axis count
    AxisCount,
    /// Unrecognized action byte (the axis byte is still consumed)
    Unknown { action: u8, axis: u8 },
}

impl Command {
    /// The axis this command targets, if it is axis-scoped
    pub fn axis(&self) -> Option<u8> {
        match self {
            Command::MoveForward { axis, .. }
            | Command::MoveBackward { axis, .. }
            | Command::HomeStatus { axis }
            | Command::Unknown { axis, .. } => Some(*axis),
            Command::AxisCount => None,
        }
    }

    /// Encode this command into a byte buffer (for tests or simulation)
    ///
    /// Returns the number of bytes written. Axis indices above 9 have
    /// no wire representation and yield [`EncodeError::ValueOutOfRange`].
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        match self {
            Command::AxisCount => {
                write_byte(buffer, 0, ACTION_AXIS_COUNT)?;
                Ok(1)
            }
            Command::HomeStatus { axis } => {
                write_byte(buffer, 0, ACTION_HOME_STATUS)?;
                write_byte(buffer, 1, axis_digit(*axis)?)?;
                Ok(2)
            }
            Command::Unknown { action, axis } => {
                write_byte(buffer, 0, *action)?;
                write_byte(buffer, 1, axis_digit(*axis)?)?;
                Ok(2)
            }
            Command::MoveForward { axis, amount } => {
                encode_move(buffer, ACTION_MOVE_FORWARD, *axis, *amount)
            }
            Command::MoveBackward { axis, amount } => {
                encode_move(buffer, ACTION_MOVE_BACKWARD, *axis, *amount)
            }
        }
    }

    /// Encode this command into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_COMMAND_SIZE>, EncodeError> {
        let mut buffer = [0u8; MAX_COMMAND_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| EncodeError::BufferTooSmall)?;
        Ok(vec)
    }
}

fn axis_digit(axis: u8) -> Result<u8, EncodeError> {
    if axis > 9 {
        return Err(EncodeError::ValueOutOfRange);
    }
    Ok(b'0' + axis)
}

fn write_byte(buffer: &mut [u8], index: usize, byte: u8) -> Result<(), EncodeError> {
    *buffer.get_mut(index).ok_or(EncodeError::BufferTooSmall)? = byte;
    Ok(())
}

fn encode_move(buffer: &mut [u8], action: u8, axis: u8, amount: u32) -> Result<usize, EncodeError> {
    write_byte(buffer, 0, action)?;
    write_byte(buffer, 1, axis_digit(axis)?)?;

    // Decimal digits, most significant first.
    let mut digits = [0u8; 10];
    let mut remaining = amount;
    let mut count = 0;
    loop {
        digits[count] = b'0' + (remaining % 10) as u8;
        remaining /= 10;
        count += 1;
        if remaining == 0 {
            break;
        }
    }
    for i in 0..count {
        write_byte(buffer, 2 + i, digits[count - 1 - i])?;
    }
    Ok(2 + count)
}
