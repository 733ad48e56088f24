//! Shared types and the seams to the surrounding instrumenter.
//!
//! The directive engine never reads files or walks an AST itself. The
//! traversal hands it nodes ([`SourceNode`]), the instrumenter hands it the
//! mutator registry ([`Mutator`]), and diagnostics flow out through a
//! [`DiagnosticSink`].

use serde::{Deserialize, Serialize};

use crate::directives::DirectiveKind;

/// Engine-internal identifier for a file being instrumented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub u64);

/// A (line, column) anchor for a diagnostic; 1-based line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub line: u32,
    pub column: u32,
}

/// A named mutant-producing capability.
///
/// The directive engine only ever consults the name; the mutation algorithms
/// themselves live elsewhere.
pub trait Mutator {
    fn name(&self) -> &str;
}

/// The slice of the AST node contract this engine consumes: leading comments
/// and a starting position.
///
/// Locations are `Option` so that a malformed node is detectable; the
/// bookkeeper treats a directive-bearing node without a location as a fatal
/// precondition violation rather than guessing.
pub trait SourceNode {
    /// Raw text of each leading comment, in source order, without the
    /// comment markers themselves.
    fn leading_comments(&self) -> Vec<String>;

    /// 1-based line of the node's starting position.
    fn start_line(&self) -> Option<u32>;

    /// 0-based column of the node's starting position.
    fn start_column(&self) -> Option<u32>;
}

/// A diagnostic surfaced as an already-ignored mutant.
///
/// Unused-directive findings ride the same reporting shape as suppressed
/// mutants so they show up in reports without affecting scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredMutant {
    /// The offending mutator-name token, in its original casing.
    pub mutator_name: String,

    /// The kind of directive that named it.
    pub kind: DirectiveKind,

    /// Human-readable explanation, e.g. `Unused 'Stryker disable' directive`.
    pub message: String,
}

/// Sink for unused-directive diagnostics.
///
/// Reporting never blocks processing; the directive is still honored for the
/// names that are known.
pub trait DiagnosticSink {
    fn report(&mut self, file_id: FileId, mutant: IgnoredMutant, anchor: Anchor);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== FileId Tests ====================

    #[test]
    fn file_id_equality() {
        assert_eq!(FileId(1), FileId(1));
        assert_ne!(FileId(1), FileId(2));
    }

    #[test]
    fn file_id_can_be_serialized() {
        let json = serde_json::to_string(&FileId(42)).unwrap();
        assert_eq!(json, "42");
    }

    // ==================== Anchor Tests ====================

    #[test]
    fn anchor_round_trips_through_json() {
        let anchor = Anchor { line: 7, column: 3 };
        let json = serde_json::to_string(&anchor).unwrap();
        let back: Anchor = serde_json::from_str(&json).unwrap();
        assert_eq!(anchor, back);
    }

    // ==================== IgnoredMutant Tests ====================

    #[test]
    fn ignored_mutant_can_be_serialized() {
        let mutant = IgnoredMutant {
            mutator_name: "Typofied".to_string(),
            kind: DirectiveKind::Disable,
            message: "Unused 'Stryker disable' directive".to_string(),
        };

        let json = serde_json::to_string(&mutant).unwrap();
        assert!(json.contains("Typofied"));
        assert!(json.contains("Unused"));
    }

    #[test]
    fn ignored_mutant_can_be_cloned() {
        let mutant = IgnoredMutant {
            mutator_name: "StringLiteral".to_string(),
            kind: DirectiveKind::Restore,
            message: "Unused 'Stryker restore' directive".to_string(),
        };

        assert_eq!(mutant, mutant.clone());
    }
}
