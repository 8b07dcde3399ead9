//! Integration tests for the driver loop.
//!
//! Each test builds a small machine, drives it on a virtual clock into an
//! in-memory sink, and compares the full output line by line.

use flywheel::builder::{simple_rule, stop_rule, timed_rule, MachineBuilder, RuleBuilder};
use flywheel::driver::{Driver, NoPacer, RunSummary, SteppedClock};
use flywheel::machine::Machine;
use flywheel::state_enum;
use flywheel::State;
use std::time::Duration;

/// Drive a machine to completion on a 10ms stepped clock, capturing
/// every snapshot line.
fn run_lines<S: State, C>(machine: Machine<S, C>, max_steps: Option<u64>) -> (Vec<String>, RunSummary) {
    let mut builder = Driver::builder(machine)
        .clock(SteppedClock::new(Duration::from_millis(10)))
        .pacer(NoPacer)
        .sink(Vec::new());

    if let Some(max) = max_steps {
        builder = builder.max_steps(max);
    }

    let mut driver = builder.build();
    let summary = driver.run().expect("writing to a Vec cannot fail");

    let lines = String::from_utf8(driver.into_sink())
        .expect("snapshots are valid utf-8")
        .lines()
        .map(str::to_string)
        .collect();

    (lines, summary)
}

state_enum! {
    enum Phase {
        Start,
        Running,
        Done,
    }
    final: [Done]
}

#[test]
fn three_state_machine_prints_expected_snapshots() {
    let machine = MachineBuilder::new()
        .initial(Phase::Start)
        .context(())
        .add_rule(simple_rule(Phase::Start, Phase::Running))
        .add_rule(simple_rule(Phase::Running, Phase::Done))
        .build()
        .unwrap();

    let (lines, summary) = run_lines(machine, None);

    assert_eq!(lines, ["Start", "01: Running", "02: Done"]);
    assert_eq!(summary.steps, 2);
    assert_eq!(summary.final_label, "Done");
}

#[test]
fn first_line_is_unlabeled_and_counters_increase_from_one() {
    let machine = MachineBuilder::new()
        .initial(Phase::Start)
        .context(())
        .add_rule(simple_rule(Phase::Start, Phase::Running))
        .add_rule(simple_rule(Phase::Running, Phase::Done))
        .build()
        .unwrap();

    let (lines, _) = run_lines(machine, None);

    assert!(!lines[0].contains(':'));
    for (i, line) in lines[1..].iter().enumerate() {
        let (counter, _) = line.split_once(": ").expect("labeled line");
        assert_eq!(counter.parse::<u64>().unwrap(), i as u64 + 1);
    }
}

state_enum! {
    enum Timer {
        Waiting,
        Done,
    }
    final: [Done]
}

#[test]
fn timer_machine_leaves_waiting_when_threshold_reached() {
    // 100ms threshold on a 10ms clock: ten ticks of waiting, then done
    let machine = MachineBuilder::new()
        .initial(Timer::Waiting)
        .context(())
        .add_rule(timed_rule(Timer::Waiting, Timer::Done, Duration::from_millis(100)))
        .build()
        .unwrap();

    let (lines, summary) = run_lines(machine, None);

    let mut expected = vec!["Waiting".to_string()];
    for step in 1..10 {
        expected.push(format!("{step:02}: Waiting"));
    }
    expected.push("10: Done".to_string());

    assert_eq!(lines, expected);
    assert_eq!(summary.steps, 10);
}

state_enum! {
    enum Blinker {
        Blink,
    }
}

#[derive(Default)]
struct BlinkCtx {
    loops: u32,
}

#[test]
fn self_transition_resets_the_state_timer() {
    // Re-enters Blink every 30ms of time-in-state; stops after three
    // loops. If re-entry did not reset the timer, the guard would stay
    // ready and the run would finish earlier.
    let machine = MachineBuilder::new()
        .initial(Blinker::Blink)
        .context(BlinkCtx::default())
        .rule(
            RuleBuilder::new()
                .from(Blinker::Blink)
                .stop()
                .when(|ctx: &BlinkCtx| ctx.loops >= 3),
        )
        .unwrap()
        .rule(
            RuleBuilder::new()
                .from(Blinker::Blink)
                .to(Blinker::Blink)
                .after(Duration::from_millis(30))
                .action(|ctx: &mut BlinkCtx| ctx.loops += 1),
        )
        .unwrap()
        .build()
        .unwrap();

    let mut driver = Driver::builder(machine)
        .clock(SteppedClock::new(Duration::from_millis(10)))
        .pacer(NoPacer)
        .sink(Vec::new())
        .build();

    let summary = driver.run().unwrap();

    assert_eq!(summary.steps, 10);
    assert_eq!(summary.final_label, "FINISHED");
    assert_eq!(driver.machine().context().loops, 3);
    assert_eq!(driver.machine().log().records().len(), 3);

    let output = String::from_utf8(driver.into_sink()).unwrap();
    let last = output.lines().last().unwrap();
    assert_eq!(last, "10: FINISHED");
}

state_enum! {
    enum Pulse {
        Firing,
    }
}

#[test]
fn termination_renders_finished() {
    let machine = MachineBuilder::new()
        .initial(Pulse::Firing)
        .context(())
        .add_rule(stop_rule(Pulse::Firing))
        .build()
        .unwrap();

    let (lines, summary) = run_lines(machine, None);

    assert_eq!(lines, ["Firing", "01: FINISHED"]);
    assert_eq!(summary.final_label, "FINISHED");
}

state_enum! {
    enum Light {
        Red,
        Green,
        Yellow,
    }
}

#[test]
fn cyclic_machine_stops_at_step_limit() {
    let machine = MachineBuilder::new()
        .initial(Light::Red)
        .context(())
        .add_rule(simple_rule(Light::Red, Light::Green))
        .add_rule(simple_rule(Light::Green, Light::Yellow))
        .add_rule(simple_rule(Light::Yellow, Light::Red))
        .build()
        .unwrap();

    let (lines, summary) = run_lines(machine, Some(5));

    assert_eq!(
        lines,
        ["Red", "01: Green", "02: Yellow", "03: Red", "04: Green", "05: Yellow"]
    );
    assert_eq!(summary.steps, 5);
    assert_eq!(summary.final_label, "Yellow");
}

state_enum! {
    enum Verbose {
        AbsurdlyLongStateLabelThatKeepsGoing,
        Done,
    }
    final: [Done]
}

#[test]
fn long_labels_are_clamped_to_capacity() {
    let machine = MachineBuilder::new()
        .initial(Verbose::AbsurdlyLongStateLabelThatKeepsGoing)
        .context(())
        .add_rule(simple_rule(
            Verbose::AbsurdlyLongStateLabelThatKeepsGoing,
            Verbose::Done,
        ))
        .build()
        .unwrap();

    let mut driver = Driver::builder(machine)
        .clock(SteppedClock::new(Duration::from_millis(10)))
        .pacer(NoPacer)
        .label_capacity(7)
        .sink(Vec::new())
        .build();

    driver.run().unwrap();

    let output = String::from_utf8(driver.into_sink()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines, ["Absurdl", "01: Done"]);
}

#[test]
fn step_limit_of_zero_only_renders_the_initial_snapshot() {
    let machine = MachineBuilder::new()
        .initial(Light::Red)
        .context(())
        .add_rule(simple_rule(Light::Red, Light::Green))
        .add_rule(simple_rule(Light::Green, Light::Yellow))
        .add_rule(simple_rule(Light::Yellow, Light::Red))
        .build()
        .unwrap();

    let (lines, summary) = run_lines(machine, Some(0));

    assert_eq!(lines, ["Red"]);
    assert_eq!(summary.steps, 0);
    assert_eq!(summary.final_label, "Red");
}
