use thiserror::Error;

/// The whole error taxonomy of the collection.
///
/// Every failure here is a usage error reported back to the caller as a
/// value; none of the demos exercise a hard failure path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown variant requested: '{kind}'")]
    UnknownVariant { kind: String },

    #[error("no capability bound to this client")]
    UnboundCapability,

    #[error("no handler accepted request: {request}")]
    Unhandled { request: String },

    #[error("nothing to restore: history is empty")]
    NoHistory,
}

impl PatternError {
    pub fn unknown_variant(kind: impl Into<String>) -> Self {
        Self::UnknownVariant { kind: kind.into() }
    }

    pub fn unhandled(request: impl Into<String>) -> Self {
        Self::Unhandled {
            request: request.into(),
        }
    }
}
