//! Command dispatch loop
//!
//! The [`Controller`] ties the serial transport, the protocol decoder,
//! and the axis bank together: block for one command, execute it to
//! completion, write exactly one response, repeat. There is no queue
//! and no state carried across commands.

use triax_hal::{DelayMs, InputPin, OutputPin, SerialPort};
use triax_protocol::{Command, Decoder, Response, Status, MAX_RESPONSE_SIZE};

use crate::axis::{AxisBank, Direction};
use crate::config::ControllerConfig;

/// The command interpreter
pub struct Controller<S, O, I, D>
where
    S: SerialPort,
    O: OutputPin,
    I: InputPin,
    D: DelayMs,
{
    serial: S,
    delay: D,
    axes: AxisBank<O, I>,
    decoder: Decoder,
    config: ControllerConfig,
}

impl<S, O, I, D> Controller<S, O, I, D>
where
    S: SerialPort,
    O: OutputPin,
    I: InputPin,
    D: DelayMs,
{
    /// Create a controller over a configured axis bank
    pub fn new(serial: S, delay: D, axes: AxisBank<O, I>, config: ControllerConfig) -> Self {
        Self {
            serial,
            delay,
            axes,
            decoder: Decoder::new(),
            config,
        }
    }

    /// Run the dispatch loop until the transport fails
    pub fn run(&mut self) -> Result<(), S::Error> {
        loop {
            self.run_once()?;
        }
    }

    /// Process exactly one command: decode, execute, respond
    pub fn run_once(&mut self) -> Result<(), S::Error> {
        let command = self.poll_command()?;
        let response = self.execute(command);
        self.respond(&response)
    }

    /// Block until one complete command is decoded
    ///
    /// Blocks on the transport for the action and axis bytes. While a
    /// Move amount is open and the line is idle, waits one
    /// `amount_timeout_ms` window for more digits before closing the
    /// amount with what has arrived (possibly no digits at all).
    fn poll_command(&mut self) -> Result<Command, S::Error> {
        loop {
            if let Some(command) = self.decoder.take_queued() {
                return Ok(command);
            }

            if self.decoder.awaiting_amount() && !self.serial.byte_available() {
                self.delay.delay_ms(self.config.amount_timeout_ms);
                if !self.serial.byte_available() {
                    if let Some(command) = self.decoder.finish() {
                        return Ok(command);
                    }
                }
                continue;
            }

            let byte = self.serial.read_byte()?;
            if let Some(command) = self.decoder.feed(byte) {
                return Ok(command);
            }
        }
    }

    /// Execute a command against the axis bank
    ///
    /// Axis validation happens here, before any actuation: an axis
    /// index outside the configured range produces `InvalidAxis` and
    /// suppresses the move entirely.
    fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::AxisCount => Response::axis_count(self.axes.axis_count() as u8),
            Command::Unknown { .. } => Response::status(Status::UnknownCommand),
            Command::MoveForward { axis, amount } => {
                self.execute_move(axis, Direction::Forward, amount)
            }
            Command::MoveBackward { axis, amount } => {
                self.execute_move(axis, Direction::Backward, amount)
            }
            Command::HomeStatus { axis } => match self.axes.get(usize::from(axis)) {
                Some(driver) => Response::home(driver.is_home()),
                None => Response::status(Status::InvalidAxis),
            },
        }
    }

    fn execute_move(&mut self, axis: u8, direction: Direction, amount: u32) -> Response {
        match self.axes.get_mut(usize::from(axis)) {
            Some(driver) => {
                driver.move_steps(direction, amount, &mut self.delay, self.config.step_delay_ms);
                Response::ok()
            }
            None => Response::status(Status::InvalidAxis),
        }
    }

    /// Write one encoded response to the transport
    fn respond(&mut self, response: &Response) -> Result<(), S::Error> {
        let mut buffer = [0u8; MAX_RESPONSE_SIZE];
        // A failed encode degrades to the bare status digit.
        let len = match response.encode(&mut buffer) {
            Ok(len) => len,
            Err(_) => {
                buffer[0] = response.status.to_byte();
                1
            }
        };
        self.serial.write_all(&buffer[..len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisDriver;
    use triax_hal_mock::{MockDelay, MockInputPin, MockOutputPin, MockSerial};

    /// Full controller with observing handles on every pin
    struct Harness {
        serial: MockSerial,
        delay: MockDelay,
        steps: std::vec::Vec<MockOutputPin>,
        dirs: std::vec::Vec<MockOutputPin>,
        homes: std::vec::Vec<MockInputPin>,
        controller: Controller<MockSerial, MockOutputPin, MockInputPin, MockDelay>,
    }

    fn harness(axis_count: usize, script: &[u8]) -> Harness {
        let serial = MockSerial::with_script(script);
        let delay = MockDelay::new();
        let mut steps = std::vec::Vec::new();
        let mut dirs = std::vec::Vec::new();
        let mut homes = std::vec::Vec::new();

        let mut axes = AxisBank::new();
        for _ in 0..axis_count {
            let step = MockOutputPin::new();
            let dir = MockOutputPin::new();
            let home = MockInputPin::new();
            steps.push(step.clone());
            dirs.push(dir.clone());
            homes.push(home.clone());
            if axes
                .add_axis(AxisDriver::new(step, dir, home))
                .is_err()
            {
                panic!("bank overflow");
            }
        }

        let controller = Controller::new(
            serial.clone(),
            delay.clone(),
            axes,
            ControllerConfig::default(),
        );
        Harness {
            serial,
            delay,
            steps,
            dirs,
            homes,
            controller,
        }
    }

    #[test]
    fn axis_count_reports_configured_axes() {
        for n in 1..=3 {
            let mut h = harness(n, b"A");
            h.controller.run_once().unwrap();
            assert_eq!(h.serial.tx_bytes(), [b'0', b' ', b'0' + n as u8]);
        }
    }

    #[test]
    fn axis_count_consumes_no_axis_byte() {
        // The byte after `A` must decode as its own command.
        let mut h = harness(1, b"AH0");
        h.controller.run_once().unwrap();
        h.controller.run_once().unwrap();
        assert_eq!(h.serial.tx_bytes(), b"0 10 F");
    }

    #[test]
    fn move_forward_pulses_and_direction() {
        // Trailing `A` terminates the amount without the idle timeout.
        let mut h = harness(2, b"+0100A");
        h.controller.run_once().unwrap();

        assert_eq!(h.serial.tx_bytes(), b"0");
        assert_eq!(h.steps[0].pulse_count(), 100);
        assert_eq!(h.steps[1].pulse_count(), 0);
        assert!(h.dirs[0].is_high());
        // Blocking time: two step_delay_ms holds per pulse.
        assert_eq!(h.delay.total_ms(), 2 * 100);
    }

    #[test]
    fn move_backward_sets_opposite_direction() {
        let mut h = harness(2, b"-150A");
        h.controller.run_once().unwrap();

        assert_eq!(h.serial.tx_bytes(), b"0");
        assert_eq!(h.steps[1].pulse_count(), 50);
        assert!(!h.dirs[1].is_high());
    }

    #[test]
    fn blocking_time_proportional_to_amount() {
        let mut short = harness(1, b"+010A");
        short.controller.run_once().unwrap();
        let mut long = harness(1, b"+0100A");
        long.controller.run_once().unwrap();
        assert_eq!(long.delay.total_ms(), 10 * short.delay.total_ms());
    }

    #[test]
    fn zero_amount_move_is_a_no_op() {
        let mut h = harness(1, b"+0A");
        h.controller.run_once().unwrap();
        assert_eq!(h.serial.tx_bytes(), b"0");
        assert_eq!(h.steps[0].pulse_count(), 0);
    }

    #[test]
    fn invalid_axis_suppresses_actuation() {
        for script in [b"+9".as_slice(), b"-9", b"H9"] {
            let mut h = harness(2, script);
            h.controller.run_once().unwrap();
            assert_eq!(h.serial.tx_bytes(), b"2");
            for step in &h.steps {
                assert_eq!(step.pulse_count(), 0);
            }
            for dir in &h.dirs {
                assert_eq!(dir.pulse_count(), 0);
            }
        }
    }

    #[test]
    fn non_digit_axis_byte_is_invalid_axis() {
        let mut h = harness(3, b"H/");
        h.controller.run_once().unwrap();
        assert_eq!(h.serial.tx_bytes(), b"2");
    }

    #[test]
    fn unknown_action_reports_status_one_without_actuation() {
        let mut h = harness(2, b"Z0");
        h.controller.run_once().unwrap();
        assert_eq!(h.serial.tx_bytes(), b"1");
        assert_eq!(h.steps[0].pulse_count(), 0);
    }

    #[test]
    fn home_status_reads_level_without_writes() {
        let mut h = harness(2, b"H1H1H1");
        h.homes[1].set_level(true);

        h.controller.run_once().unwrap();
        h.controller.run_once().unwrap();
        h.homes[1].set_level(false);
        h.controller.run_once().unwrap();

        // Idempotent while the physical state holds.
        assert_eq!(h.serial.tx_bytes(), b"0 T0 T0 F");
        assert_eq!(h.steps[1].pulse_count(), 0);
        assert_eq!(h.dirs[1].pulse_count(), 0);
    }

    #[test]
    fn open_amount_flushes_after_idle_timeout() {
        let mut h = harness(2, b"+0100");
        h.controller.run_once().unwrap();

        assert_eq!(h.serial.tx_bytes(), b"0");
        assert_eq!(h.steps[0].pulse_count(), 100);
        // One idle window plus the pulse train holds.
        let timeout = u64::from(ControllerConfig::default().amount_timeout_ms);
        assert_eq!(h.delay.total_ms(), timeout + 2 * 100);
    }

    #[test]
    fn scenario_two_axis_session() {
        // A, +0100, H1 (home tripped), Z0, +9 — one response each.
        let mut h = harness(2, b"A+0100H1Z0+9");
        h.homes[1].set_level(true);

        for _ in 0..5 {
            h.controller.run_once().unwrap();
        }

        assert_eq!(h.serial.tx_bytes(), b"0 200 T12");
        assert_eq!(h.steps[0].pulse_count(), 100);
        assert_eq!(h.steps[1].pulse_count(), 0);
    }

    #[test]
    fn transport_error_propagates() {
        let mut h = harness(1, b"");
        assert!(h.controller.run_once().is_err());
    }
}
