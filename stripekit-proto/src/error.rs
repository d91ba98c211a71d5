//! Errors produced while decoding API documents.

/// Decoding an API document failed.
///
/// Every variant is terminal for the decode call: no partial record is
/// returned. Variants carrying a `path` locate the offending value inside
/// the document, e.g. `lines.data[0].type`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document exceeds the configured size limit.
    #[error("document is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge {
        /// Size of the rejected document.
        size: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// An enumerated field held a literal outside the known set.
    #[error("unknown variant `{literal}`{}", located(path))]
    UnknownVariant {
        /// Location of the field.
        path: String,
        /// The unrecognized literal.
        literal: String,
    },

    /// A mandatory field was absent.
    #[error("missing field `{field}`{}", located(path))]
    MissingField {
        /// Location of the record missing the field.
        path: String,
        /// Name of the missing field.
        field: String,
    },

    /// A value had the wrong JSON type or an invalid form.
    #[error("invalid value{}: {message}", located(path))]
    InvalidShape {
        /// Location of the value.
        path: String,
        /// What was wrong with it.
        message: String,
    },
}

impl DecodeError {
    /// Returns the location of the failure inside the document.
    ///
    /// `None` when the failure is not tied to a value or sits at the
    /// document root.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::UnknownVariant { path, .. }
            | Self::MissingField { path, .. }
            | Self::InvalidShape { path, .. } => Some(path.as_str()).filter(|p| !p.is_empty()),
            Self::Json(_) | Self::TooLarge { .. } => None,
        }
    }

    /// Whether an enumerated field held an unknown literal.
    #[must_use]
    pub const fn is_unknown_variant(&self) -> bool {
        matches!(self, Self::UnknownVariant { .. })
    }

    /// Whether a mandatory field was absent.
    #[must_use]
    pub const fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        // The document root renders as `.`.
        let path = match err.path().to_string() {
            root if root == "." => String::new(),
            path => path,
        };
        let inner = err.into_inner();
        if !inner.is_data() {
            return Self::Json(inner);
        }

        // serde's derive reports these through `de::Error::unknown_variant`
        // and `de::Error::missing_field`, whose wording is stable.
        let message = inner.to_string();
        if let Some(literal) = message
            .strip_prefix("unknown variant ")
            .and_then(backticked)
        {
            return Self::UnknownVariant {
                path,
                literal: literal.to_owned(),
            };
        }
        if let Some(field) = message.strip_prefix("missing field ").and_then(backticked) {
            return Self::MissingField {
                path,
                field: field.to_owned(),
            };
        }
        Self::InvalidShape { path, message }
    }
}

fn located(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at `{path}`")
    }
}

/// Returns the text between the leading pair of backticks.
fn backticked(s: &str) -> Option<&str> {
    s.strip_prefix('`')?.split_once('`').map(|(inner, _)| inner)
}
