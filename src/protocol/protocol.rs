use log::debug;
use once_cell::sync::Lazy;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::bytes::Regex;
use crate::client::enums::client_error::ClientError;
use crate::protocol::enums::tracker_reply::TrackerReply;
use crate::protocol::structs::query_values::QueryValues;

pub const CMD_GET_PATHS: &str = "get_paths";
pub const CMD_RENAME: &str = "rename";
pub const CMD_DELETE: &str = "delete";
pub const CMD_FILE_DEBUG: &str = "file_debug";
pub const CMD_CREATE_OPEN: &str = "create_open";
pub const CMD_CREATE_CLOSE: &str = "create_close";

pub const LINE_TERMINATOR: &str = "\r\n";

/// Everything but `A-Z a-z 0-9 - _ . ~` gets escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// Full-line match for success, prefix match for failure. Both run on raw
// bytes; the code class is ASCII whitespace only.
static REPLY_OK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u)^OK (.*)\r\n$").unwrap());
static REPLY_ERR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u)^ERR ([^\t\n\f\r ]+) ").unwrap());

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string().replace("%20", "+")
}

pub fn decode_component(input: &str) -> Result<String, ClientError> {
    let bytes = input.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let valid = bytes.len() > index + 2
                && bytes[index + 1].is_ascii_hexdigit()
                && bytes[index + 2].is_ascii_hexdigit();
            if !valid {
                let end = (index + 3).min(bytes.len());
                return Err(ClientError::PayloadParse(format!(
                    "invalid URL escape {:?}",
                    String::from_utf8_lossy(&bytes[index..end])
                )));
            }
            index += 3;
        } else {
            index += 1;
        }
    }

    let plus_decoded = input.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ClientError::PayloadParse(format!("invalid UTF-8 in {:?}: {}", input, e)))
}

pub fn encode_query(values: &QueryValues) -> String {
    let mut encoded = String::new();
    for (key, key_values) in values.iter() {
        let key_encoded = encode_component(key);
        for value in key_values {
            if !encoded.is_empty() {
                encoded.push('&');
            }
            encoded.push_str(&key_encoded);
            encoded.push('=');
            encoded.push_str(&encode_component(value));
        }
    }
    encoded
}

pub fn parse_query(query: &str) -> Result<QueryValues, ClientError> {
    let mut values = QueryValues::new();
    for query_item in query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        if query_item.contains(';') {
            return Err(ClientError::PayloadParse(String::from("invalid semicolon separator in query")));
        }
        let (key_raw, value_raw) = query_item.split_once('=').unwrap_or((query_item, ""));
        let key = decode_component(key_raw)?;
        let value = decode_component(value_raw)?;
        values.add(key, value);
    }
    Ok(values)
}

pub fn encode_request(command: &str, args: &QueryValues) -> String {
    format!("{} {}{}", command, encode_query(args), LINE_TERMINATOR)
}

/// Sorts one raw reply line into `OK`, `ERR` or malformed.
///
/// # Errors
///
/// - `ClientError::PayloadParse` - The line is an `OK` reply whose payload is
///   not valid UTF-8
pub fn classify_reply(line: &[u8]) -> Result<TrackerReply, ClientError> {
    if let Some(captures) = REPLY_OK.captures(line) {
        return std::str::from_utf8(&captures[1])
            .map(|payload| TrackerReply::Ok(payload.to_string()))
            .map_err(|e| ClientError::PayloadParse(format!("invalid UTF-8 in reply payload: {}", e)));
    }
    if let Some(captures) = REPLY_ERR.captures(line) {
        return Ok(TrackerReply::Err(String::from_utf8_lossy(&captures[1]).into_owned()));
    }
    let line = String::from_utf8_lossy(line).into_owned();
    debug!("[PROTOCOL] Unrecognized tracker reply: {:?}", line);
    Ok(TrackerReply::Malformed(line))
}
