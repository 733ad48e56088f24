//! Per-file orchestration of directive processing and suppression queries.

use crate::chain::RuleChain;
use crate::directives::{find_unused_names, parse_directive};
use crate::error::DirectiveError;
use crate::types::{Anchor, DiagnosticSink, FileId, Mutator, SourceNode};

/// Tracks suppression state for one file's single-pass AST walk.
///
/// The traversal calls [`process_directives`](Bookkeeper::process_directives)
/// for each node in source order; the generation phase calls
/// [`find_ignore_reason`](Bookkeeper::find_ignore_reason) whenever it
/// considers producing a mutant. Queries read the chain's current head, so
/// directives for a node must be processed before any query concerning
/// mutants at or after that node.
///
/// One instance per file; discard it when the file's generation completes.
/// No state crosses file boundaries.
#[derive(Debug)]
pub struct Bookkeeper {
    file_id: FileId,
    chain: RuleChain,
}

impl Bookkeeper {
    pub fn new(file_id: FileId) -> Self {
        Self {
            file_id,
            chain: RuleChain::new(),
        }
    }

    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    /// Parse and apply every directive in the node's leading comments, in
    /// the order the comments appear.
    ///
    /// For each parsed directive, mutator names unknown to `mutators` are
    /// reported through `sink` as already-ignored mutants, then the
    /// directive is pushed onto the chain regardless (it still counts for
    /// the names that are known). Comments that do not match the grammar
    /// are silently skipped.
    ///
    /// # Errors
    /// Returns [`DirectiveError::MissingLocation`] if the node carries
    /// leading comments but no source location. That is a malformed-AST
    /// precondition violation, not a recoverable condition.
    pub fn process_directives(
        &mut self,
        node: &dyn SourceNode,
        mutators: &[&dyn Mutator],
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), DirectiveError> {
        let comments = node.leading_comments();
        if comments.is_empty() {
            return Ok(());
        }

        let (Some(line), Some(column)) = (node.start_line(), node.start_column()) else {
            return Err(DirectiveError::MissingLocation {
                file_id: self.file_id,
            });
        };

        for comment in &comments {
            let Some(directive) = parse_directive(comment, line) else {
                continue;
            };

            for unused in find_unused_names(&directive, mutators) {
                // Anchored one line above the node: the directive comment is
                // assumed to occupy exactly the preceding line. Stacked
                // directives or blank lines in between misattribute the
                // reported line; known fragility, kept for compatibility.
                let anchor = Anchor {
                    line: line.saturating_sub(1),
                    column,
                };
                sink.report(self.file_id, unused, anchor);
            }

            self.chain.push(&directive, line);
        }

        Ok(())
    }

    /// The reason a mutant of `mutator_name` at `line` should be skipped, or
    /// `None` to generate it.
    pub fn find_ignore_reason(&self, line: u32, mutator_name: &str) -> Option<&str> {
        let lower = mutator_name.to_ascii_lowercase();
        self.chain.resolve(line, &lower)
    }
}
