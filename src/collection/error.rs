use thiserror::Error;

/// Raised when a name does not match any reference collection kind.
///
/// The offending input is kept verbatim so callers can render their own
/// diagnostics (an HTTP 400 body, a CLI message) around it.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("The provided reference collection name is not supported: {input}")]
pub struct InvalidCollectionKind {
    input: String,
}

impl InvalidCollectionKind {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The name exactly as it was supplied.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn into_input(self) -> String {
        self.input
    }
}
