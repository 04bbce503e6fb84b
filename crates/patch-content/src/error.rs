//! Error types for patch-content

/// Result type for patch-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying edits
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Exact old block not found: {preview:?}")]
    LiteralNotFound { preview: String },

    #[error("Old block occurs {count} times, expected exactly one: {preview:?}")]
    AmbiguousLiteral { preview: String, count: usize },

    #[error("No line starting with {marker:?} after the start marker on line {start_line}")]
    EndMarkerNotFound { marker: String, start_line: usize },

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Rule #{index}{} failed: {source}", rule_label(.name))]
    Rule {
        index: usize,
        name: Option<String>,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Fs(#[from] patch_fs::Error),
}

fn rule_label(name: &Option<String>) -> String {
    name.as_deref().map(|n| format!(" ({n})")).unwrap_or_default()
}

impl Error {
    /// First line of a literal, truncated, for error messages.
    pub(crate) fn preview(literal: &str) -> String {
        const MAX: usize = 60;
        let first = literal.lines().next().unwrap_or_default();
        if first.chars().count() > MAX {
            let cut: String = first.chars().take(MAX).collect();
            format!("{cut}...")
        } else {
            first.to_string()
        }
    }

    /// The underlying failure, looking through [`Error::Rule`] wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Rule { source, .. } => source.root(),
            other => other,
        }
    }
}
