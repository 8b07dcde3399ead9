//! Build errors for machine and rule builders.

use crate::validate::DefinitionIssue;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Errors that can occur when building machines and rules.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Machine context not specified. Call .context(value) before .build()")]
    MissingContext,

    #[error("No rules defined. Add at least one rule")]
    NoRules,

    #[error("Rule source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Rule target not specified. Call .to(state) or .stop()")]
    MissingTarget,

    #[error("Definition rejected: {}", describe(.0))]
    Rejected(NonEmptyVec<DefinitionIssue>),
}

fn describe(issues: &NonEmptyVec<DefinitionIssue>) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
