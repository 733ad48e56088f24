//! Mutant suppression via inline comments.
//!
//! Developers annotate source code to switch classes of mutants off and on
//! again:
//!
//! ```text
//! // Stryker disable all
//! // Stryker disable next-line StringLiteral: covered elsewhere
//! // Stryker restore StringLiteral
//! ```
//!
//! Directives can be:
//! - **File-scoped**: effective from the annotated node to the end of the
//!   file, until overridden by a later directive
//! - **Line-scoped** (`next-line`): effective only on the annotated node's
//!   exact line
//!
//! A `disable` carries an optional reason after a colon; a `restore` lifts
//! earlier suppression for the named mutators. The name `all` is a wildcard.

mod detector;
mod model;
mod parser;

pub use detector::find_unused_names;
pub use model::{is_wildcard, Directive, DirectiveKind, DirectiveScope, WILDCARD};
pub use parser::{parse_directive, DEFAULT_REASON};
