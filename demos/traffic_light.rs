//! Traffic Light
//!
//! This example drives a cyclic machine that never reaches a terminal
//! state, so the driver's step limit bounds the run.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Step limits for machines that never stop on their own
//! - Custom pacing interval
//!
//! Run with: cargo run --example traffic_light

use flywheel::builder::{simple_rule, MachineBuilder};
use flywheel::driver::Driver;
use flywheel::state_enum;
use std::time::Duration;

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Traffic Light ===");

    let machine = MachineBuilder::new()
        .initial(TrafficLight::Red)
        .context(())
        .add_rule(simple_rule(TrafficLight::Red, TrafficLight::Green))
        .add_rule(simple_rule(TrafficLight::Green, TrafficLight::Yellow))
        .add_rule(simple_rule(TrafficLight::Yellow, TrafficLight::Red))
        .build()
        .unwrap();

    let mut driver = Driver::builder(machine)
        .interval(Duration::from_millis(250))
        .max_steps(9)
        .build();

    let summary = driver.run()?;

    println!("Light cycled for {} steps", summary.steps);
    Ok(())
}
