//! Push-based command decoder
//!
//! The decoder is a byte-at-a-time state machine. The caller feeds it
//! received bytes and gets back at most one complete [`Command`] per
//! call. No internal buffering of raw bytes is needed: the protocol has
//! a fixed action/axis prefix and the amount accumulates directly into
//! an integer.
//!
//! The one subtlety is amount termination. A Move amount has no
//! terminator byte of its own; it ends at the first non-digit, which is
//! already the next command's action selector. [`Decoder::feed`]
//! handles that byte in the same call, and if it completes a second
//! command (a bare `A`), that command is held back and returned by
//! [`Decoder::take_queued`]. When the line instead goes idle mid-amount
//! the transport layer decides the sender is done and calls
//! [`Decoder::finish`].

use crate::command::{
    Command, ACTION_AXIS_COUNT, ACTION_HOME_STATUS, ACTION_MOVE_BACKWARD, ACTION_MOVE_FORWARD,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Waiting for an action selector byte
    AwaitAction,
    /// Got a non-`A` action, waiting for the axis selector byte
    AwaitAxis { action: u8 },
    /// Accumulating the decimal amount of a Move command
    ReadAmount { action: u8, axis: u8, amount: u32 },
}

/// State machine for decoding incoming commands
#[derive(Debug, Clone)]
pub struct Decoder {
    state: DecodeState,
    queued: Option<Command>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self {
            state: DecodeState::AwaitAction,
            queued: None,
        }
    }

    /// Reset the decoder state, dropping any partial command
    pub fn reset(&mut self) {
        self.state = DecodeState::AwaitAction;
        self.queued = None;
    }

    /// True when no command is partially decoded
    pub fn is_idle(&self) -> bool {
        self.state == DecodeState::AwaitAction && self.queued.is_none()
    }

    /// True while a Move command's amount digit run is open
    ///
    /// In this state the command can be completed without further input
    /// (via [`finish`](Self::finish)); every other mid-command state
    /// still needs bytes from the wire.
    pub fn awaiting_amount(&self) -> bool {
        matches!(self.state, DecodeState::ReadAmount { .. })
    }

    /// Take a command completed as a side effect of a previous feed
    pub fn take_queued(&mut self) -> Option<Command> {
        self.queued.take()
    }

    /// Feed a single received byte
    ///
    /// Returns a complete command as soon as one is decoded. Check
    /// [`take_queued`](Self::take_queued) afterwards: a byte that
    /// terminates a Move amount can complete two commands at once.
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        let mut emitted = None;
        let mut pending = Some(byte);

        while let Some(b) = pending.take() {
            match self.state {
                DecodeState::AwaitAction => {
                    if b == ACTION_AXIS_COUNT {
                        self.emit(Command::AxisCount, &mut emitted);
                    } else {
                        self.state = DecodeState::AwaitAxis { action: b };
                    }
                }
                DecodeState::AwaitAxis { action } => {
                    // Axis index is the byte minus ASCII '0'. Non-digit
                    // bytes land outside [0, axis count) and get
                    // rejected by the controller's range check.
                    let axis = b.wrapping_sub(b'0');
                    match action {
                        ACTION_MOVE_FORWARD | ACTION_MOVE_BACKWARD => {
                            self.state = DecodeState::ReadAmount {
                                action,
                                axis,
                                amount: 0,
                            };
                        }
                        ACTION_HOME_STATUS => {
                            self.state = DecodeState::AwaitAction;
                            self.emit(Command::HomeStatus { axis }, &mut emitted);
                        }
                        other => {
                            self.state = DecodeState::AwaitAction;
                            self.emit(Command::Unknown { action: other, axis }, &mut emitted);
                        }
                    }
                }
                DecodeState::ReadAmount { action, axis, amount } => {
                    if b.is_ascii_digit() {
                        let digit = u32::from(b - b'0');
                        self.state = DecodeState::ReadAmount {
                            action,
                            axis,
                            amount: amount.saturating_mul(10).saturating_add(digit),
                        };
                    } else {
                        self.state = DecodeState::AwaitAction;
                        self.emit(make_move(action, axis, amount), &mut emitted);
                        // The terminator byte starts the next command.
                        pending = Some(b);
                    }
                }
            }
        }

        emitted
    }

    /// Complete an open Move command when the line has gone idle
    ///
    /// A Move with no digits seen yet completes with amount 0. States
    /// still waiting for an axis byte are left pending; those reads
    /// block until the sender supplies the byte.
    pub fn finish(&mut self) -> Option<Command> {
        match self.state {
            DecodeState::ReadAmount { action, axis, amount } => {
                self.state = DecodeState::AwaitAction;
                Some(make_move(action, axis, amount))
            }
            _ => None,
        }
    }

    fn emit(&mut self, command: Command, out: &mut Option<Command>) {
        if out.is_none() {
            *out = Some(command);
        } else {
            // At most two commands can complete on one byte: a Move
            // terminated by a bare `A`.
            self.queued = Some(command);
        }
    }
}

fn make_move(action: u8, axis: u8, amount: u32) -> Command {
    if action == ACTION_MOVE_FORWARD {
        Command::MoveForward { axis, amount }
    } else {
        Command::MoveBackward { axis, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Drain a byte slice through the decoder, flushing at the end
    fn decode_all(bytes: &[u8]) -> Vec<Command, 8> {
        let mut decoder = Decoder::new();
        let mut commands = Vec::new();
        for &byte in bytes {
            if let Some(cmd) = decoder.feed(byte) {
                commands.push(cmd).unwrap();
            }
            if let Some(cmd) = decoder.take_queued() {
                commands.push(cmd).unwrap();
            }
        }
        if let Some(cmd) = decoder.finish() {
            commands.push(cmd).unwrap();
        }
        commands
    }

    #[test]
    fn decode_axis_count() {
        assert_eq!(&decode_all(b"A")[..], &[Command::AxisCount]);
    }

    #[test]
    fn decode_home_status() {
        assert_eq!(&decode_all(b"H1")[..], &[Command::HomeStatus { axis: 1 }]);
    }

    #[test]
    fn decode_move_forward_flushed_on_idle() {
        assert_eq!(
            &decode_all(b"+0100")[..],
            &[Command::MoveForward { axis: 0, amount: 100 }]
        );
    }

    #[test]
    fn decode_move_terminated_by_next_command() {
        assert_eq!(
            &decode_all(b"+0100H1")[..],
            &[
                Command::MoveForward { axis: 0, amount: 100 },
                Command::HomeStatus { axis: 1 },
            ]
        );
    }

    #[test]
    fn move_terminated_by_bare_axis_count_yields_both() {
        assert_eq!(
            &decode_all(b"-25A")[..],
            &[
                Command::MoveBackward { axis: 2, amount: 5 },
                Command::AxisCount,
            ]
        );
    }

    #[test]
    fn move_with_no_digits_flushes_to_zero_amount() {
        assert_eq!(
            &decode_all(b"+9")[..],
            &[Command::MoveForward { axis: 9, amount: 0 }]
        );
    }

    #[test]
    fn unknown_action_consumes_axis_byte() {
        assert_eq!(
            &decode_all(b"Z0")[..],
            &[Command::Unknown { action: b'Z', axis: 0 }]
        );
    }

    #[test]
    fn non_digit_axis_maps_out_of_range() {
        let commands = decode_all(b"H/");
        assert_eq!(commands.len(), 1);
        match commands[0] {
            Command::HomeStatus { axis } => assert!(axis > 9),
            _ => panic!("expected HomeStatus"),
        }
    }

    #[test]
    fn amount_saturates_instead_of_wrapping() {
        assert_eq!(
            &decode_all(b"+099999999999999999999")[..],
            &[Command::MoveForward { axis: 0, amount: u32::MAX }]
        );
    }

    #[test]
    fn finish_leaves_partial_axis_read_pending() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.feed(b'H'), None);
        assert_eq!(decoder.finish(), None);
        assert!(!decoder.is_idle());
        assert_eq!(decoder.feed(b'0'), Some(Command::HomeStatus { axis: 0 }));
    }

    #[test]
    fn reset_drops_partial_command() {
        let mut decoder = Decoder::new();
        decoder.feed(b'+');
        decoder.feed(b'1');
        decoder.reset();
        assert!(decoder.is_idle());
        assert_eq!(&decode_all(b"A")[..], &[Command::AxisCount]);
    }

    mod properties {
        use super::*;
        use crate::command::MAX_COMMAND_SIZE;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn move_commands_roundtrip(axis in 0u8..=9, amount in any::<u32>(), forward: bool) {
                let original = if forward {
                    Command::MoveForward { axis, amount }
                } else {
                    Command::MoveBackward { axis, amount }
                };
                let encoded = original.encode_to_vec().unwrap();
                let decoded = decode_all(&encoded);
                prop_assert_eq!(&decoded[..], &[original]);
            }

            #[test]
            fn concatenated_commands_all_decode(
                axis_a in 0u8..=9,
                amount in any::<u32>(),
                axis_b in 0u8..=9,
            ) {
                let first = Command::MoveForward { axis: axis_a, amount };
                let second = Command::HomeStatus { axis: axis_b };

                let mut wire = [0u8; 2 * MAX_COMMAND_SIZE];
                let len_a = first.encode(&mut wire).unwrap();
                let len_b = second.encode(&mut wire[len_a..]).unwrap();

                let decoded = decode_all(&wire[..len_a + len_b]);
                prop_assert_eq!(&decoded[..], &[first, second]);
            }

            #[test]
            fn feed_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
                let mut decoder = Decoder::new();
                for byte in bytes {
                    let _ = decoder.feed(byte);
                    let _ = decoder.take_queued();
                }
                let _ = decoder.finish();
            }
        }
    }
}
