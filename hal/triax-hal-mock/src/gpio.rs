//! Recording GPIO pin mocks

use std::cell::RefCell;
use std::rc::Rc;

use triax_hal::{InputPin, OutputPin};

#[derive(Debug, Default)]
struct OutputState {
    high: bool,
    rising_edges: u32,
}

/// Output pin that records its level and counts rising edges
///
/// A rising edge (low-to-high transition) corresponds to one step pulse
/// when the pin is wired as a step output.
#[derive(Debug, Clone, Default)]
pub struct MockOutputPin {
    state: Rc<RefCell<OutputState>>,
}

impl MockOutputPin {
    /// Create a new pin, initially low
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of low-to-high transitions seen so far
    pub fn pulse_count(&self) -> u32 {
        self.state.borrow().rising_edges
    }

    /// Current recorded level
    pub fn is_high(&self) -> bool {
        self.state.borrow().high
    }
}

impl OutputPin for MockOutputPin {
    fn set_high(&mut self) {
        let mut state = self.state.borrow_mut();
        if !state.high {
            state.rising_edges += 1;
        }
        state.high = true;
    }

    fn set_low(&mut self) {
        self.state.borrow_mut().high = false;
    }

    fn is_set_high(&self) -> bool {
        self.state.borrow().high
    }
}

/// Input pin with a test-settable level
#[derive(Debug, Clone, Default)]
pub struct MockInputPin {
    level: Rc<RefCell<bool>>,
}

impl MockInputPin {
    /// Create a new pin, initially low
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new pin at a given level
    pub fn with_level(high: bool) -> Self {
        let pin = Self::new();
        pin.set_level(high);
        pin
    }

    /// Set the level the controller will read
    pub fn set_level(&self, high: bool) {
        *self.level.borrow_mut() = high;
    }
}

impl InputPin for MockInputPin {
    fn is_high(&self) -> bool {
        *self.level.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_edges_counted_once_per_transition() {
        let pin = MockOutputPin::new();
        let mut driven = pin.clone();

        driven.set_high();
        driven.set_high(); // already high, not a new edge
        driven.set_low();
        driven.set_high();

        assert_eq!(pin.pulse_count(), 2);
        assert!(pin.is_high());
    }

    #[test]
    fn input_level_shared_across_clones() {
        let pin = MockInputPin::new();
        let reader = pin.clone();
        assert!(!reader.is_high());

        pin.set_level(true);
        assert!(reader.is_high());
    }
}
