use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("no trackers configured")]
    NoTrackers,

    #[error("all trackers unreachable, last tried {tracker}: {source}")]
    Acquisition {
        tracker: String,
        source: io::Error,
    },

    #[error("transport error with tracker {tracker}: {source}")]
    Transport {
        tracker: String,
        source: io::Error,
    },

    #[error("internal:invalid tracker reply from {tracker}: {line:?}")]
    MalformedReply {
        tracker: String,
        line: String,
    },

    #[error("mogilefsd:{code}")]
    Application {
        code: String,
    },

    #[error("invalid reply payload: {0}")]
    PayloadParse(String),
}
