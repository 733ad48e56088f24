//! Data structures for suppression directives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The mutator-name token that matches every mutator.
pub const WILDCARD: &str = "all";

/// Whether a token is the wildcard.
///
/// Mutator-name matching is case-insensitive, so the wildcard is too.
pub fn is_wildcard(token: &str) -> bool {
    token.eq_ignore_ascii_case(WILDCARD)
}

/// What a directive does to mutant generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectiveKind {
    /// Suppress matching mutants, with a reason.
    Disable,

    /// Lift earlier suppressions for the matching mutants.
    Restore,
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveKind::Disable => f.write_str("disable"),
            DirectiveKind::Restore => f.write_str("restore"),
        }
    }
}

/// The reach of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectiveScope {
    /// From the annotated node to the end of the file, until overridden.
    File,

    /// Only the exact line of the annotated node.
    NextLine,
}

/// A parsed suppression directive from one comment.
///
/// Transient: directives are translated into chain rules immediately after
/// parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub scope: DirectiveScope,

    /// Trimmed mutator-name tokens in their original casing (matching is
    /// case-insensitive; casing is kept for diagnostics). May contain the
    /// wildcard `all`.
    pub mutator_names: Vec<String>,

    /// Suppression reason. Always present for `Disable` (a default is
    /// supplied when the comment has none); always absent for `Restore`.
    pub reason: Option<String>,

    /// 1-based line of the node the directive comment is attached to.
    pub anchor_line: u32,
}
