//! MogileFS tracker wire protocol.
//!
//! The tracker protocol is plain text over TCP, one line per message:
//!
//! ```text
//! request:  <COMMAND> <urlencoded key=value&...>\r\n
//! success:  OK <urlencoded key=value&...>\r\n
//! failure:  ERR <error-code> <optional free text>\r\n
//! ```
//!
//! Anything else received from a tracker is a protocol violation.
//!
//! # Components
//!
//! - `QueryValues` - Ordered multimap used for request arguments and reply payloads
//! - `TrackerReply` - Classification of a single reply line
//! - `encode_request` / `classify_reply` - Line codec helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use mogilefs_client::protocol::protocol::{classify_reply, encode_request};
//! use mogilefs_client::protocol::structs::query_values::QueryValues;
//!
//! let mut args = QueryValues::new();
//! args.add("domain", "photos");
//! args.add("key", "cat.jpg");
//! assert_eq!(encode_request("get_paths", &args), "get_paths domain=photos&key=cat.jpg\r\n");
//! ```

/// Reply classification enumeration.
pub mod enums;

/// Implementation blocks for protocol types.
pub mod impls;

/// Query value containers.
pub mod structs;

/// Line encoding, reply classification and query string codec.
#[allow(clippy::module_inception)]
pub mod protocol;
