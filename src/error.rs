//! Failure taxonomy shared by the parser adapters, the builder and the emitter.
//!
//! Every failure is fatal to the inference call that raised it; there is no
//! partial registry and nothing to resume.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The sample could not be turned into an element tree.
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    /// A caller-supplied name or option is unusable.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// An element whose contents contradict its origin.
    #[error("unsupported shape: {message}")]
    UnsupportedShape { message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput { message: message.into() }
    }
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedShape { message: message.into() }
    }
}
