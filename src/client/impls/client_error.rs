use crate::client::enums::client_error::ClientError;

impl ClientError {
    /// `true` for errors the tracker reported through an `ERR` reply.
    pub fn is_application(&self) -> bool {
        matches!(self, ClientError::Application { .. })
    }

    /// The `ERR` code, for application errors.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Application { code } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Whether the tracker that served the request is held responsible.
    pub fn blames_tracker(&self) -> bool {
        matches!(self, ClientError::Transport { .. } | ClientError::MalformedReply { .. })
    }

    /// The tracker involved, when the error is tied to one.
    pub fn tracker(&self) -> Option<&str> {
        match self {
            ClientError::Acquisition { tracker, .. }
            | ClientError::Transport { tracker, .. }
            | ClientError::MalformedReply { tracker, .. } => Some(tracker.as_str()),
            _ => None,
        }
    }
}
