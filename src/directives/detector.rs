//! Detection of directives naming unknown mutators.

use crate::directives::model::{is_wildcard, Directive};
use crate::types::{IgnoredMutant, Mutator};

/// Cross-check a directive's mutator names against the registry.
///
/// Every named token other than the wildcard is compared case-insensitively
/// against the known mutator names; each non-match yields one diagnostic.
/// The directive is still honored for the names that are known, so this is
/// validation, never rejection.
pub fn find_unused_names(directive: &Directive, mutators: &[&dyn Mutator]) -> Vec<IgnoredMutant> {
    directive
        .mutator_names
        .iter()
        .filter(|token| !is_wildcard(token))
        .filter(|token| {
            !mutators
                .iter()
                .any(|mutator| mutator.name().eq_ignore_ascii_case(token))
        })
        .map(|token| IgnoredMutant {
            mutator_name: token.clone(),
            kind: directive.kind,
            message: format!("Unused 'Stryker {}' directive", directive.kind),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::model::{DirectiveKind, DirectiveScope};

    struct NamedMutator(&'static str);

    impl Mutator for NamedMutator {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn make_directive(kind: DirectiveKind, names: Vec<&str>) -> Directive {
        Directive {
            kind,
            scope: DirectiveScope::File,
            mutator_names: names.into_iter().map(|n| n.to_string()).collect(),
            reason: None,
            anchor_line: 1,
        }
    }

    // ==================== find_unused_names Tests ====================

    #[test]
    fn known_name_produces_no_diagnostic() {
        let registry: &[&dyn Mutator] = &[&NamedMutator("StringLiteral")];
        let directive = make_directive(DirectiveKind::Disable, vec!["StringLiteral"]);

        assert!(find_unused_names(&directive, registry).is_empty());
    }

    #[test]
    fn unknown_name_produces_one_diagnostic() {
        let registry: &[&dyn Mutator] = &[&NamedMutator("StringLiteral")];
        let directive = make_directive(DirectiveKind::Disable, vec!["Typofied"]);

        let unused = find_unused_names(&directive, registry);
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].mutator_name, "Typofied");
        assert_eq!(unused[0].kind, DirectiveKind::Disable);
        assert_eq!(unused[0].message, "Unused 'Stryker disable' directive");
    }

    #[test]
    fn restore_kind_appears_in_message() {
        let registry: &[&dyn Mutator] = &[];
        let directive = make_directive(DirectiveKind::Restore, vec!["Typofied"]);

        let unused = find_unused_names(&directive, registry);
        assert_eq!(unused[0].message, "Unused 'Stryker restore' directive");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let registry: &[&dyn Mutator] = &[&NamedMutator("StringLiteral")];
        let directive = make_directive(
            DirectiveKind::Disable,
            vec!["stringliteral", "STRINGLITERAL"],
        );

        assert!(find_unused_names(&directive, registry).is_empty());
    }

    #[test]
    fn wildcard_is_never_unknown() {
        let registry: &[&dyn Mutator] = &[];
        let directive = make_directive(DirectiveKind::Disable, vec!["all", "ALL"]);

        assert!(find_unused_names(&directive, registry).is_empty());
    }

    #[test]
    fn mixed_known_and_unknown_reports_only_unknown() {
        let registry: &[&dyn Mutator] =
            &[&NamedMutator("StringLiteral"), &NamedMutator("BooleanLiteral")];
        let directive = make_directive(
            DirectiveKind::Disable,
            vec!["StringLiteral", "Typofied", "BooleanLiteral"],
        );

        let unused = find_unused_names(&directive, registry);
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].mutator_name, "Typofied");
    }
}
