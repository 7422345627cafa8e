//! Configuration type definitions
//!
//! Configuration is built once at startup by the board support code and
//! passed by reference from then on; nothing here mutates after init.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum axes per controller
pub const MAX_AXES: usize = 3;

/// GPIO assignment for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisPinConfig {
    /// Step pulse output pin
    pub step_pin: u8,
    /// Direction output pin
    pub dir_pin: u8,
    /// Home switch input pin
    pub home_pin: u8,
}

impl AxisPinConfig {
    /// Create a new axis pin assignment
    pub const fn new(step_pin: u8, dir_pin: u8, home_pin: u8) -> Self {
        Self {
            step_pin,
            dir_pin,
            home_pin,
        }
    }
}

/// Runtime timing configuration for the dispatch loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Hold time between step pulse edges, in milliseconds
    ///
    /// One full pulse is high-delay-low-delay, so a move of `n` steps
    /// blocks for roughly `2 * n * step_delay_ms`.
    pub step_delay_ms: u32,
    /// Idle window after which an open Move amount is taken as complete
    ///
    /// The amount digit run has no terminator; when no further byte
    /// arrives within this window the amount ends, matching the numeric
    /// parse timeout of common serial consoles.
    pub amount_timeout_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 1,
            amount_timeout_ms: 1000,
        }
    }
}

/// Full hardware configuration for one controller
///
/// The axis table length is the configured axis count (1-3, fixed at
/// startup).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HardwareConfig {
    /// Per-axis pin assignments, one entry per configured axis
    pub axes: Vec<AxisPinConfig, MAX_AXES>,
    /// Dispatch loop timing
    pub timing: ControllerConfig,
}

impl HardwareConfig {
    /// Number of configured axes
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }
}
