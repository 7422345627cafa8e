//! Board-agnostic core logic for the Triax controller
//!
//! This crate contains everything between the wire protocol and the
//! hardware traits:
//!
//! - Configuration type definitions (axis pin tables, step timing)
//! - Axis actuation (step pulse sequencing, home switch reads)
//! - The command dispatch loop
//!
//! The controller runs one command at a time to completion on a single
//! cooperative loop. A Move blocks the whole loop for its duration;
//! bytes that arrive mid-move wait in the transport's receive buffer.
//! That blocking model is a deliberate scheduling contract for a
//! dedicated motion controller, not an implementation shortcut.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod axis;
pub mod config;
pub mod controller;

pub use axis::{AxisBank, AxisDriver, Direction};
pub use config::{AxisPinConfig, ControllerConfig, HardwareConfig, MAX_AXES};
pub use controller::Controller;
