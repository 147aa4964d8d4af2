use thiserror::Error;

/// Failure reported by a service collaborator while handling a request line.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("request rejected: {reason}")]
    Rejected { reason: String },
}

impl ServiceError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}
