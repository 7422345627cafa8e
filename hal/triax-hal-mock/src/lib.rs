//! Host-side mock implementations of the Triax HAL traits
//!
//! These implementations record what the controller does to them
//! (pin levels, step pulse edges, transmitted bytes, requested delays)
//! so tests can assert on actuation behavior without hardware.
//!
//! All mocks are cheap to clone; clones share state, so a test can keep
//! a handle to a pin after moving the original into a driver:
//!
//! ```
//! use triax_hal::OutputPin;
//! use triax_hal_mock::MockOutputPin;
//!
//! let pin = MockOutputPin::new();
//! let mut moved = pin.clone();
//! moved.set_high();
//! assert_eq!(pin.pulse_count(), 1);
//! ```

pub mod delay;
pub mod gpio;
pub mod serial;

pub use delay::MockDelay;
pub use gpio::{MockInputPin, MockOutputPin};
pub use serial::{MockSerial, MockSerialError};
