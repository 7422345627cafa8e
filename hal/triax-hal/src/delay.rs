//! Blocking delay abstraction
//!
//! Step pulse pacing is a blocking busy-wait by design (the controller
//! runs a single cooperative loop, see triax-core), so the only timing
//! primitive the core needs is a blocking millisecond delay.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Pause execution for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
