use crate::protocol::enums::tracker_reply::TrackerReply;

impl TrackerReply {
    /// Whether this reply counts against the tracker that sent it.
    ///
    /// Only a reply matching neither grammar does: an `ERR` line is the tracker
    /// correctly reporting a domain failure, and a broken `OK` payload is still
    /// a well formed reply.
    pub fn blames_tracker(&self) -> bool {
        matches!(self, TrackerReply::Malformed(_))
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, TrackerReply::Ok(_))
    }
}
