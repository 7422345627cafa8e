//! Triax Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that board-specific
//! HALs implement. The controller core only ever talks to these traits,
//! so the same dispatch and actuation logic runs on real hardware and on
//! the host-side mock HAL used by the test suite and simulator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (triax-core, triax-sim)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  triax-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  board HAL    │       │  triax-hal-   │
//! │  (target)     │       │  mock (host)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`serial::SerialPort`] - Byte-oriented serial transport
//! - [`delay::DelayMs`] - Blocking millisecond delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod serial;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::{InputPin, OutputPin};
pub use serial::SerialPort;
