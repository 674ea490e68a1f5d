use std::io;

/// Errors reported by the algorithm registry and the hash-object interface.
///
/// The rendered messages are part of the public contract: callers that match
/// on the text of a failure (for example scripts wrapping the command-line
/// front end) see the same wording regardless of which entry point failed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum HashError {
    /// No algorithm name was supplied, or the supplied name was empty.
    #[error("Missing algorithm.")]
    MissingAlgorithm,
    /// The supplied name does not exactly match a supported algorithm.
    #[error("Unsupported algorithm.")]
    UnsupportedAlgorithm {
        /// Name the caller asked for.
        name: String,
    },
    /// `update` received something that is neither text nor bytes.
    #[error("Not a string or buffer")]
    InvalidInput,
    /// `update` was called after the digest had already been produced.
    #[error("HashUpdate fail")]
    UseAfterFinalize,
    /// The digest was requested a second time.
    #[error("Not initialized")]
    NotInitialized,
}

impl HashError {
    /// Reports whether the error stems from the finalization lockout rather
    /// than from a bad argument.
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(self, Self::UseAfterFinalize | Self::NotInitialized)
    }
}

impl From<HashError> for io::Error {
    fn from(error: HashError) -> Self {
        let kind = if error.is_lifecycle() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::InvalidInput
        };
        Self::new(kind, error)
    }
}
