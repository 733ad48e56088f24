//! Parser for suppression-directive comments.

use std::sync::LazyLock;

use regex::Regex;

use crate::directives::model::{Directive, DirectiveKind, DirectiveScope};

/// Reason attached to a `disable` directive that does not supply one.
pub const DEFAULT_REASON: &str = "Ignored using a comment";

/// The directive grammar. Keywords are case-sensitive; mutator names are
/// matched case-insensitively later.
///
/// Deliberately unanchored at the end: trailing text after the name list
/// (other than a `:`-prefixed reason) is ignored, matching established
/// directive-comment behavior.
static DIRECTIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s?Stryker (disable|restore)(?: (next-line))? ([a-zA-Z, ]+)(?::(.+)?)?")
        .expect("directive regex should compile")
});

/// Parse one comment's raw text into a directive.
///
/// Returns `None` when the text does not match the grammar, or when the name
/// list contains no usable tokens. Non-matching comments are not an error;
/// most comments are ordinary prose.
///
/// # Arguments
/// * `comment` - The comment text, without comment markers (`//`, `/*`).
/// * `anchor_line` - 1-based line of the node the comment is attached to.
///
/// # Example
/// ```
/// use mutest_directives::directives::{parse_directive, DirectiveKind, DirectiveScope};
///
/// let d = parse_directive(" Stryker disable next-line StringLiteral: flaky", 10).unwrap();
/// assert_eq!(d.kind, DirectiveKind::Disable);
/// assert_eq!(d.scope, DirectiveScope::NextLine);
/// assert_eq!(d.reason.as_deref(), Some("flaky"));
/// ```
pub fn parse_directive(comment: &str, anchor_line: u32) -> Option<Directive> {
    let caps = DIRECTIVE_PATTERN.captures(comment)?;

    let kind = match caps.get(1).map(|m| m.as_str()) {
        Some("disable") => DirectiveKind::Disable,
        Some("restore") => DirectiveKind::Restore,
        _ => return None,
    };

    let scope = match caps.get(2).map(|m| m.as_str()) {
        Some("next-line") => DirectiveScope::NextLine,
        _ => DirectiveScope::File,
    };

    let mutator_names: Vec<String> = caps
        .get(3)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .split(',')
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect();
    if mutator_names.is_empty() {
        return None;
    }

    let reason = caps
        .get(4)
        .map(|m| m.as_str().trim().to_string())
        .filter(|r| !r.is_empty());
    let reason = match kind {
        DirectiveKind::Disable => Some(reason.unwrap_or_else(|| DEFAULT_REASON.to_string())),
        // Restore directives lift suppression; a reason is meaningless.
        DirectiveKind::Restore => None,
    };

    Some(Directive {
        kind,
        scope,
        mutator_names,
        reason,
        anchor_line,
    })
}
