//! GPIO pin abstractions
//!
//! The controller drives exactly three lines per axis: a step output,
//! a direction output, and a home switch input. These traits are the
//! whole contract; level inversion and pull configuration stay in the
//! board support code that constructs the pins.

/// Digital output pin (step or direction line)
///
/// Writes are infallible: a GPIO register write cannot meaningfully
/// fail, and the actuation path has no way to recover if it could.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a given level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Last level this pin was driven to
    fn is_set_high(&self) -> bool;

    /// Inverse of [`is_set_high`](Self::is_set_high)
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin (home switch line)
///
/// Reads are instantaneous level samples; debouncing, if a switch
/// needs it, belongs to the board support code.
pub trait InputPin {
    /// Current level: true when the line reads high
    fn is_high(&self) -> bool;

    /// Current level: true when the line reads low
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
