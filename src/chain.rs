//! The append-only rule chain that answers suppression queries.
//!
//! Each directive becomes one immutable [`SuppressionRule`] pushed onto a
//! singly-linked chain. Resolution walks from the newest rule backward, so
//! the most recent directive affecting a given (line, mutator) pair always
//! wins, independent of scope breadth: a later line-scoped restore overrides
//! an earlier file-wide disable, and vice versa.

use std::collections::HashSet;

use crate::directives::{is_wildcard, Directive, DirectiveKind, DirectiveScope};

/// Which mutator names a rule applies to. Names are stored case-folded.
#[derive(Debug)]
enum NameMatch {
    /// The directive named the wildcard; matches every mutator.
    All,
    Names(HashSet<String>),
}

impl NameMatch {
    fn matches(&self, mutator_name_lower: &str) -> bool {
        match self {
            NameMatch::All => true,
            NameMatch::Names(names) => names.contains(mutator_name_lower),
        }
    }
}

/// One link in the chain. Immutable once created; the chain exclusively owns
/// its predecessor.
#[derive(Debug)]
struct SuppressionRule {
    names: NameMatch,

    /// `Some` for `next-line` directives (matches only that line); `None`
    /// for file-wide directives (matches every line).
    line: Option<u32>,

    /// `Some` = suppress with this reason; `None` = explicitly not
    /// suppressed (a restore), which shadows any older matching disable.
    reason: Option<String>,

    previous: Option<Box<SuppressionRule>>,
}

impl SuppressionRule {
    fn matches(&self, line: u32, mutator_name_lower: &str) -> bool {
        self.line.map_or(true, |l| l == line) && self.names.matches(mutator_name_lower)
    }
}

/// The per-file suppression history.
///
/// Grows by [`push`](RuleChain::push), never mutates existing rules, and is
/// queried via [`resolve`](RuleChain::resolve). The empty chain is the
/// recursion base: nothing matches, nothing is suppressed.
#[derive(Debug, Default)]
pub struct RuleChain {
    head: Option<Box<SuppressionRule>>,
}

impl RuleChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a directive into a rule and make it the new head.
    ///
    /// `node_line` is the 1-based starting line of the annotated node; it
    /// becomes the rule's line for `next-line` directives.
    pub fn push(&mut self, directive: &Directive, node_line: u32) {
        let names = if directive.mutator_names.iter().any(|n| is_wildcard(n)) {
            NameMatch::All
        } else {
            NameMatch::Names(
                directive
                    .mutator_names
                    .iter()
                    .map(|n| n.to_ascii_lowercase())
                    .collect(),
            )
        };

        let line = match directive.scope {
            DirectiveScope::NextLine => Some(node_line),
            DirectiveScope::File => None,
        };

        let reason = match directive.kind {
            DirectiveKind::Disable => directive.reason.clone(),
            DirectiveKind::Restore => None,
        };

        self.head = Some(Box::new(SuppressionRule {
            names,
            line,
            reason,
            previous: self.head.take(),
        }));
    }

    /// Find the suppression reason for a mutant of `mutator_name_lower` at
    /// `line`, newest rule first.
    ///
    /// The first rule matching both line and name decides: `Some(reason)`
    /// means suppressed, `None` from a matching restore means explicitly not
    /// suppressed and older rules are not consulted. `None` with no matching
    /// rule at all means the same thing to the caller: generate the mutant.
    ///
    /// Expects an already case-folded mutator name.
    pub fn resolve(&self, line: u32, mutator_name_lower: &str) -> Option<&str> {
        let mut current = self.head.as_deref();
        while let Some(rule) = current {
            if rule.matches(line, mutator_name_lower) {
                return rule.reason.as_deref();
            }
            current = rule.previous.as_deref();
        }
        None
    }
}

impl Drop for RuleChain {
    // Unlink iteratively so a long chain cannot overflow the stack on drop.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut rule) = current {
            current = rule.previous.take();
        }
    }
}
