use thiserror::Error;

use crate::types::FileId;

/// Top-level error type exposed by the directive engine.
///
/// Malformed comment text is never an error (it is simply ignored); the only
/// failures here are broken preconditions in the caller's AST input.
#[derive(Debug, Error)]
pub enum DirectiveError {
    /// A node carrying directive comments has no source location. The
    /// traversal must guarantee well-formed input; this is not recovered.
    #[error("node in file {file_id:?} has directive comments but no source location")]
    MissingLocation { file_id: FileId },

    /// "Catch-all" for unexpected internal failures.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_location_display_names_the_file() {
        let err = DirectiveError::MissingLocation { file_id: FileId(7) };
        let msg = err.to_string();
        assert!(msg.contains("FileId(7)"));
        assert!(msg.contains("no source location"));
    }

    #[test]
    fn internal_wraps_anyhow() {
        let err: DirectiveError = anyhow::anyhow!("unexpected failure").into();
        assert!(err.to_string().contains("internal error"));
        assert!(err.to_string().contains("unexpected failure"));
    }
}
