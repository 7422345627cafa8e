//! Triax host simulator
//!
//! Runs the full controller dispatch loop on a host machine: commands
//! come from stdin, responses go to stdout, and actuation is visible
//! through tracing output instead of real pins.
//!
//! ```text
//! $ RUST_LOG=triax_sim=trace cargo run -p triax-sim
//! A        -> 0 3
//! +0100    -> 0        (after the amount idle window)
//! H1       -> 0 F
//! ```

mod hal;

use anyhow::{anyhow, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use triax_core::{AxisBank, AxisDriver, AxisPinConfig, Controller, ControllerConfig, HardwareConfig};

use hal::{SimInputPin, SimOutputPin, SleepDelay, StdioSerial};

/// Default three-axis pin map, mirroring a typical driver breakout
fn default_config() -> HardwareConfig {
    let mut config = HardwareConfig {
        axes: heapless::Vec::new(),
        timing: ControllerConfig::default(),
    };
    for (step, dir, home) in [(2, 3, 9), (4, 5, 10), (6, 7, 11)] {
        // Capacity is MAX_AXES and we add exactly that many.
        let _ = config.axes.push(AxisPinConfig::new(step, dir, home));
    }
    config
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = default_config();
    info!(axes = config.axis_count(), "starting triax simulator");

    let mut axes = AxisBank::new();
    for pins in &config.axes {
        let driver = AxisDriver::new(
            SimOutputPin::new(pins.step_pin, "step"),
            SimOutputPin::new(pins.dir_pin, "dir"),
            SimInputPin::new(pins.home_pin, false),
        );
        if axes.add_axis(driver).is_err() {
            return Err(anyhow!("more than {} axes configured", triax_core::MAX_AXES));
        }
    }

    let mut controller = Controller::new(StdioSerial::new(), SleepDelay, axes, config.timing);

    // Runs until stdin closes.
    match controller.run() {
        Err(hal::SimSerialError::Disconnected) => {
            info!("transport closed, shutting down");
            Ok(())
        }
        Err(err) => Err(anyhow!(err)),
        Ok(()) => Ok(()),
    }
}
