use std::fmt;
use crate::client::enums::client_state::ClientState;

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientState::Uninitialized => write!(f, "uninitialized"),
            ClientState::Bound => write!(f, "bound"),
        }
    }
}
