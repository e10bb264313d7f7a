#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerReply {
    /// `OK <payload>\r\n`, carrying the still encoded payload.
    Ok(String),
    /// `ERR <code> ...`, carrying the error code token.
    Err(String),
    /// Anything else, carrying the raw line.
    Malformed(String),
}
