//! Error types and handling for Vellum

/// Result type alias for Vellum operations
pub type Result<T> = std::result::Result<T, VellumError>;

/// Error types for the Vellum binary transport
#[derive(Debug, thiserror::Error)]
pub enum VellumError {
    /// Structured codec (de)serialization failures
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Plain-data decode found fewer bytes than the message's fixed size.
    ///
    /// This means the buffer and the out-of-band count disagree about how
    /// many messages were emitted. The transport state is corrupt at this
    /// point; callers must treat the decoder as unusable.
    #[error("Integrity violation: expected {expected} bytes, only {actual} remained")]
    IntegrityViolation { expected: usize, actual: usize },
}

impl VellumError {
    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an integrity violation error
    pub fn integrity_violation(expected: usize, actual: usize) -> Self {
        Self::IntegrityViolation { expected, actual }
    }
}

impl From<bincode::Error> for VellumError {
    fn from(err: bincode::Error) -> Self {
        Self::serialization(format!("Bincode error: {}", err))
    }
}
