//! mutest-directives: comment-directive suppression for mutation testing
//!
//! This crate is the suppression core of a mutation-testing instrumenter:
//! it parses `Stryker disable` / `Stryker restore` comments discovered while
//! walking a file's AST and answers, for any (line, mutator name) pair the
//! generation phase considers, whether that mutant is currently suppressed
//! and why.
//!
//! Directive effects accumulate and nest: rules are pushed onto an
//! append-only chain in document order and resolved newest-first, so the
//! most recent directive affecting a pair always wins.
//!
//! # Example
//!
//! ```ignore
//! use mutest_directives::{Bookkeeper, FileId};
//!
//! let mut bookkeeper = Bookkeeper::new(FileId(1));
//! for node in traversal {
//!     bookkeeper.process_directives(&node, &mutators, &mut sink)?;
//!     // ... mutant generation for this node ...
//!     if let Some(reason) = bookkeeper.find_ignore_reason(line, "StringLiteral") {
//!         // skip the mutant, attach `reason`
//!     }
//! }
//! ```

pub mod bookkeeper;
pub mod chain;
pub mod directives;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use bookkeeper::Bookkeeper;
pub use chain::RuleChain;
pub use directives::{parse_directive, Directive, DirectiveKind, DirectiveScope};
pub use error::DirectiveError;
pub use types::{Anchor, DiagnosticSink, FileId, IgnoredMutant, Mutator, SourceNode};
