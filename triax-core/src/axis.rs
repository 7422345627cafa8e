//! Axis actuation
//!
//! An [`AxisDriver`] owns the three GPIO lines of one stepper channel
//! and realizes moves as blocking step pulse trains. The [`AxisBank`]
//! holds the configured drivers and turns every axis index access into
//! an explicit range check; an out-of-range index is a `None`, never an
//! unchecked lookup.

use heapless::Vec;
use triax_hal::{DelayMs, InputPin, OutputPin};

use crate::config::MAX_AXES;

/// Axis travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Away from the home switch
    Forward,
    /// Toward the home switch
    Backward,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// The level the direction output is driven to
    fn level(self) -> bool {
        matches!(self, Direction::Forward)
    }
}

/// Driver for one stepper axis
pub struct AxisDriver<O: OutputPin, I: InputPin> {
    step: O,
    dir: O,
    home: I,
}

impl<O: OutputPin, I: InputPin> AxisDriver<O, I> {
    /// Create a driver from the axis's step, direction, and home pins
    pub fn new(step: O, dir: O, home: I) -> Self {
        Self { step, dir, home }
    }

    /// Emit `amount` step pulses in the given direction
    ///
    /// Sets the direction output, drives the step output low, then for
    /// each pulse drives it high, holds `step_delay_ms`, drives it low,
    /// and holds again. Blocks for roughly `2 * amount * step_delay_ms`
    /// and cannot be cancelled; an amount of zero sets up the outputs
    /// and emits nothing.
    pub fn move_steps(
        &mut self,
        direction: Direction,
        amount: u32,
        delay: &mut impl DelayMs,
        step_delay_ms: u32,
    ) {
        self.dir.set_state(direction.level());
        self.step.set_low();

        for _ in 0..amount {
            self.step.set_high();
            delay.delay_ms(step_delay_ms);
            self.step.set_low();
            delay.delay_ms(step_delay_ms);
        }
    }

    /// Read the home switch: true while the axis sits on its reference
    /// position
    ///
    /// A single instantaneous level read, no debouncing.
    pub fn is_home(&self) -> bool {
        self.home.is_high()
    }
}

/// The configured set of axis drivers
///
/// Capacity is [`MAX_AXES`]; the populated length is the configured
/// axis count reported by the `A` command.
pub struct AxisBank<O: OutputPin, I: InputPin> {
    axes: Vec<AxisDriver<O, I>, MAX_AXES>,
}

impl<O: OutputPin, I: InputPin> Default for AxisBank<O, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OutputPin, I: InputPin> AxisBank<O, I> {
    /// Create an empty bank
    pub fn new() -> Self {
        Self { axes: Vec::new() }
    }

    /// Add an axis driver, failing once the bank is full
    pub fn add_axis(&mut self, driver: AxisDriver<O, I>) -> Result<(), AxisDriver<O, I>> {
        self.axes.push(driver)
    }

    /// Number of configured axes
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Look up an axis for actuation; `None` for out-of-range indices
    pub fn get_mut(&mut self, index: usize) -> Option<&mut AxisDriver<O, I>> {
        self.axes.get_mut(index)
    }

    /// Look up an axis for reads; `None` for out-of-range indices
    pub fn get(&self, index: usize) -> Option<&AxisDriver<O, I>> {
        self.axes.get(index)
    }
}
