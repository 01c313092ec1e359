//! Path-segment escaping compatible with Go's `url.PathEscape`.
//!
//! Saved sessions are stored in one directory per server endpoint, so the
//! endpoint has to become a single path component. The escaping must match
//! the tools that write the session files byte for byte.

use std::str::Utf8Error;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except unreserved characters and the sub-delimiters a path
/// segment may carry literally (`$ & + : = @`).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Escapes `s` so it can be used as one path segment.
pub fn path_escape(s: &str) -> String {
    utf8_percent_encode(s, PATH_SEGMENT).to_string()
}

/// Reverses [`path_escape`].
pub fn path_unescape(s: &str) -> Result<String, Utf8Error> {
    percent_decode_str(s).decode_utf8().map(|c| c.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unreserved_and_sub_delims() {
        assert_eq!(path_escape("AZaz09-_.~"), "AZaz09-_.~");
        assert_eq!(path_escape("$&+:=@"), "$&+:=@");
    }

    #[test]
    fn escapes_segment_separators() {
        assert_eq!(path_escape("/"), "%2F");
        assert_eq!(path_escape("?"), "%3F");
        assert_eq!(path_escape(";"), "%3B");
        assert_eq!(path_escape(","), "%2C");
        assert_eq!(path_escape(" "), "%20");
        assert_eq!(path_escape("%"), "%25");
    }

    #[test]
    fn matches_go_for_typical_endpoints() {
        assert_eq!(path_escape("localhost:8080"), "localhost:8080");
        assert_eq!(
            path_escape("wss://example.com/game"),
            "wss:%2F%2Fexample.com%2Fgame"
        );
        assert_eq!(path_escape("games.example.com/a b"), "games.example.com%2Fa%20b");
    }

    #[test]
    fn escapes_non_ascii_as_utf8_bytes() {
        assert_eq!(path_escape("ü"), "%C3%BC");
    }

    #[test]
    fn roundtrip_never_adds_separators() {
        let endpoints = [
            "wss://example.com/game",
            "localhost:8080/?x=1",
            "a/b/c:d?e",
            "host:1/path with space",
            "ünïcode/ü?",
        ];
        for endpoint in endpoints {
            let escaped = path_escape(endpoint);
            assert!(!escaped.contains('/'), "{escaped}");
            assert!(!escaped.contains('\\'), "{escaped}");
            assert!(!escaped.contains('?'), "{escaped}");
            assert_eq!(path_unescape(&escaped).unwrap(), endpoint);
        }
    }

    #[test]
    fn unescape_rejects_invalid_utf8() {
        assert!(path_unescape("%FF").is_err());
    }
}
