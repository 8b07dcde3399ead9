//! Validation-based audit of machine definitions.
//!
//! This module checks a machine definition before the machine is built,
//! using Stillwater's `Validation` type to accumulate ALL issues instead
//! of fail-fast behavior.
//!
//! # Philosophy
//!
//! Following Stillwater's philosophy: "Don't stop at first error - collect them all!"
//!
//! Traditional validation with `Result` stops at the first error, frustrating
//! users who must fix their rule tables one issue at a time. The `Validation`
//! type accumulates all issues, reporting the whole audit in a single pass.
//!
//! # Checks
//!
//! - Rules that leave a final state (they can never fire)
//! - Rules shadowed by an earlier unguarded rule on the same state
//! - Rules sourced in states unreachable from the initial state

pub mod checks;
pub mod issues;

// Re-export commonly used types
pub use checks::{audit, check_final_sources, check_reachability, check_shadowing};
pub use issues::DefinitionIssue;
