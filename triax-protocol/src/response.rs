//! Response types and encoding
//!
//! Every command gets exactly one response: a status digit, optionally
//! followed by a single space and an action-specific payload byte.

use heapless::Vec;

use crate::command::EncodeError;

/// Maximum encoded response size (status + space + payload byte)
pub const MAX_RESPONSE_SIZE: usize = 3;

/// Per-command status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Command executed
    Ok,
    /// Action byte not in the dispatch table
    UnknownCommand,
    /// Axis selector outside the configured range
    InvalidAxis,
}

impl Status {
    /// The ASCII digit this status encodes as
    pub const fn to_byte(self) -> u8 {
        match self {
            Status::Ok => b'0',
            Status::UnknownCommand => b'1',
            Status::InvalidAxis => b'2',
        }
    }

    /// Parse a status digit (for host-side clients and tests)
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'0' => Some(Status::Ok),
            b'1' => Some(Status::UnknownCommand),
            b'2' => Some(Status::InvalidAxis),
            _ => None,
        }
    }
}

/// Action-specific response payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Payload {
    /// Home switch state: `T` tripped, `F` clear
    Home(bool),
    /// Configured axis count as a single digit
    AxisCount(u8),
}

impl Payload {
    fn to_byte(self) -> Result<u8, EncodeError> {
        match self {
            Payload::Home(true) => Ok(b'T'),
            Payload::Home(false) => Ok(b'F'),
            Payload::AxisCount(count) => {
                if count > 9 {
                    return Err(EncodeError::ValueOutOfRange);
                }
                Ok(b'0' + count)
            }
        }
    }
}

/// A single response, built by the controller and written to the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    pub status: Status,
    pub payload: Option<Payload>,
}

impl Response {
    /// Bare success, no payload (Move commands)
    pub const fn ok() -> Self {
        Self {
            status: Status::Ok,
            payload: None,
        }
    }

    /// Success with a home switch payload
    pub const fn home(tripped: bool) -> Self {
        Self {
            status: Status::Ok,
            payload: Some(Payload::Home(tripped)),
        }
    }

    /// Success with an axis count payload
    pub const fn axis_count(count: u8) -> Self {
        Self {
            status: Status::Ok,
            payload: Some(Payload::AxisCount(count)),
        }
    }

    /// Error response carrying only a status digit
    pub const fn status(status: Status) -> Self {
        Self {
            status,
            payload: None,
        }
    }

    /// Encode into a byte buffer, returning the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        if buffer.is_empty() {
            return Err(EncodeError::BufferTooSmall);
        }
        buffer[0] = self.status.to_byte();
        match self.payload {
            None => Ok(1),
            Some(payload) => {
                if buffer.len() < 3 {
                    return Err(EncodeError::BufferTooSmall);
                }
                buffer[1] = b' ';
                buffer[2] = payload.to_byte()?;
                Ok(3)
            }
        }
    }

    /// Encode into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_RESPONSE_SIZE>, EncodeError> {
        let mut buffer = [0u8; MAX_RESPONSE_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| EncodeError::BufferTooSmall)?;
        Ok(vec)
    }
}
