//! Accounting delay mock

use std::cell::RefCell;
use std::rc::Rc;

use triax_hal::DelayMs;

/// Delay that records requested time instead of sleeping
///
/// Tests use the accumulated total to check that blocking motion time
/// is proportional to the commanded step count.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    total_ms: Rc<RefCell<u64>>,
}

impl MockDelay {
    /// Create a delay with zero accumulated time
    pub fn new() -> Self {
        Self::default()
    }

    /// Total milliseconds requested so far
    pub fn total_ms(&self) -> u64 {
        *self.total_ms.borrow()
    }
}

impl DelayMs for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        *self.total_ms.borrow_mut() += u64::from(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_requested_time() {
        let delay = MockDelay::new();
        let mut handle = delay.clone();
        handle.delay_ms(3);
        handle.delay_ms(7);
        assert_eq!(delay.total_ms(), 10);
    }
}
