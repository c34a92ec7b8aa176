//! # Domain Errors
//!
//! Error types shared by the wizard core and its collaborators.

use crate::domain::catalog::SelectionTarget;

/// Rejections of user events by the selection store or step controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("'{label}' is not a valid option for {}", .target.key())]
    UnknownLabel {
        target: SelectionTarget,
        label: String,
    },

    #[error("{0} cannot be edited on the current step")]
    InactiveField(&'static str),

    #[error("the session is already closed")]
    Closed,
}

/// Failures of the remote character API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a readable response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-ok status.
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
}
