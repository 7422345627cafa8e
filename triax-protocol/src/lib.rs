//! ASCII motion command protocol
//!
//! This crate defines the byte-oriented protocol between a host and the
//! Triax controller. The protocol is deliberately minimal: no framing,
//! no checksum, no acknowledgment beyond a one-digit status code.
//!
//! # Protocol overview
//!
//! ```text
//! Command:   <action:1B> [ <axis:1 ASCII digit> [ <amount: ASCII digits> ] ]
//! Response:  <status:1 ASCII digit> [ ' ' <payload> ]
//! ```
//!
//! | action | meaning       | axis | amount | response payload      |
//! |--------|---------------|------|--------|-----------------------|
//! | `A`    | axis count    | no   | no     | single digit, count   |
//! | `+`    | move forward  | yes  | yes    | none                  |
//! | `-`    | move backward | yes  | yes    | none                  |
//! | `H`    | home status   | yes  | no     | `T` / `F`             |
//! | other  | unknown       | yes  | no     | none                  |
//!
//! Status codes: `0` success, `1` unknown command, `2` invalid axis.
//!
//! The amount digit run has no terminator of its own; it ends at the
//! first non-digit byte (which starts the next command) or when the
//! line goes idle, see [`Decoder::finish`].

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod decoder;
pub mod response;

pub use command::{Command, EncodeError, MAX_COMMAND_SIZE};
pub use decoder::Decoder;
pub use response::{Payload, Response, Status, MAX_RESPONSE_SIZE};
