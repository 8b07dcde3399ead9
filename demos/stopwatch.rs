//! Stopwatch
//!
//! This example drives a small timer machine on the real clock.
//!
//! Key concepts:
//! - Timer transitions via time-in-state guards
//! - Wall-clock machine time fed in by the driver
//! - Paced iterations (10ms between ticks)
//!
//! Run with: cargo run --example stopwatch

use flywheel::builder::{simple_rule, timed_rule, MachineBuilder};
use flywheel::driver::Driver;
use flywheel::state_enum;
use std::time::Duration;

state_enum! {
    enum Stopwatch {
        Armed,
        Counting,
        Expired,
    }
    final: [Expired]
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    println!("--- Starting stopwatch ---");

    let machine = MachineBuilder::new()
        .initial(Stopwatch::Armed)
        .context(())
        .add_rule(simple_rule(Stopwatch::Armed, Stopwatch::Counting))
        .add_rule(timed_rule(
            Stopwatch::Counting,
            Stopwatch::Expired,
            Duration::from_millis(100),
        ))
        .build()
        .unwrap();

    let mut driver = Driver::builder(machine).build();
    let summary = driver.run()?;

    println!(
        "Stopped after {} steps in '{}'",
        summary.steps, summary.final_label
    );
    Ok(())
}
