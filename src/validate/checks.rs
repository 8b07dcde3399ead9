//! Audit checks over rule tables using Validation.

use crate::core::State;
use crate::machine::{Rule, Target};
use crate::validate::issues::DefinitionIssue;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Flag rules that leave a final state.
///
/// A final state stops the machine, so no rule sourced in one can ever
/// fire.
pub fn check_final_sources<S: State, C>(
    rules: &[Rule<S, C>],
) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
    let checks: Vec<Validation<(), NonEmptyVec<DefinitionIssue>>> = rules
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            if rule.from.is_final() {
                Validation::fail(DefinitionIssue::RuleFromFinalState {
                    index,
                    state: rule.from.name().to_string(),
                })
            } else {
                Validation::success(())
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Flag rules shadowed by an earlier unguarded rule on the same state.
///
/// Rules are evaluated in declaration order and an unguarded rule is
/// always ready, so nothing declared after it on the same source state
/// can ever fire.
pub fn check_shadowing<S: State, C>(
    rules: &[Rule<S, C>],
) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
    let checks: Vec<Validation<(), NonEmptyVec<DefinitionIssue>>> = rules
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            let shadow = rules[..index]
                .iter()
                .position(|earlier| earlier.from == rule.from && earlier.guard.is_none());

            match shadow {
                Some(earlier) => Validation::fail(DefinitionIssue::ShadowedRule {
                    index,
                    earlier,
                    state: rule.from.name().to_string(),
                }),
                None => Validation::success(()),
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Flag rules sourced in states unreachable from the initial state.
///
/// Reachability follows `Goto` targets only; guards are ignored, so this
/// is an over-approximation of what can actually run.
pub fn check_reachability<S: State, C>(
    initial: &S,
    rules: &[Rule<S, C>],
) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
    let mut reachable = vec![initial.clone()];
    let mut changed = true;
    while changed {
        changed = false;
        for rule in rules {
            if !reachable.contains(&rule.from) {
                continue;
            }
            if let Target::Goto(next) = &rule.target {
                if !reachable.contains(next) {
                    reachable.push(next.clone());
                    changed = true;
                }
            }
        }
    }

    let checks: Vec<Validation<(), NonEmptyVec<DefinitionIssue>>> = rules
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            if reachable.contains(&rule.from) {
                Validation::success(())
            } else {
                Validation::fail(DefinitionIssue::UnreachableSource {
                    index,
                    state: rule.from.name().to_string(),
                })
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Audit a whole definition, accumulating ALL issues.
///
/// Returns `Validation::Success(())` if every check passes.
/// Returns `Validation::Failure` with ALL issues if any fail.
pub fn audit<S: State, C>(
    initial: &S,
    rules: &[Rule<S, C>],
) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
    Validation::all_vec(vec![
        check_final_sources(rules),
        check_shadowing(rules),
        check_reachability(initial, rules),
    ])
    .map(|_| ())
}
