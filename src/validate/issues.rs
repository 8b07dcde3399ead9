//! Issues reported by the definition audit.

use thiserror::Error;

/// Problems found in a machine definition.
///
/// Indices refer to rule declaration order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionIssue {
    #[error("Rule {index} leaves final state '{state}' and can never fire")]
    RuleFromFinalState { index: usize, state: String },

    #[error("Rule {index} from '{state}' is shadowed by earlier unguarded rule {earlier}")]
    ShadowedRule {
        index: usize,
        earlier: usize,
        state: String,
    },

    #[error("Rule {index} is sourced in '{state}', which is unreachable from the initial state")]
    UnreachableSource { index: usize, state: String },
}
