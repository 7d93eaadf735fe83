//! Character classes, LWS trimming, quoted-string handling, and the
//! `host[:port]` splitter.
//!
//! The input character set is ISO-8859-1: one byte is one code unit and
//! nothing here performs UTF-8 decoding.

use bytes::Bytes;
use smol_str::SmolStr;

/// SIP linear white space: space and horizontal tab.
pub const LWS: &[u8] = b" \t";

pub fn is_lws(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Quote characters. The single quote is not part of the quoted-string
/// production, but some peers rely on it being accepted.
pub fn is_quote(c: u8) -> bool {
    c == b'"' || c == b'\''
}

/// RFC 2616 token character: no CTLs, no 8-bit bytes, no separators.
pub fn is_token_char(c: u8) -> bool {
    !(c >= 0x80
        || c <= 0x1f
        || c == 0x7f
        || matches!(
            c,
            b'(' | b')'
                | b'<'
                | b'>'
                | b'@'
                | b','
                | b';'
                | b':'
                | b'\\'
                | b'"'
                | b'/'
                | b'['
                | b']'
                | b'?'
                | b'='
                | b'{'
                | b'}'
                | b' '
                | b'\t'
        ))
}

/// Whether `bytes` is a non-empty run of token characters.
pub fn is_token(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(|&c| is_token_char(c))
}

/// Strips LWS from both ends.
pub fn trim_lws(bytes: &[u8]) -> &[u8] {
    let mut begin = 0;
    let mut end = bytes.len();
    while begin < end && is_lws(bytes[begin]) {
        begin += 1;
    }
    while begin < end && is_lws(bytes[end - 1]) {
        end -= 1;
    }
    &bytes[begin..end]
}

/// Compares `bytes` against a previously lowercased ASCII constant.
pub fn lower_eq(bytes: &[u8], lowercase: &[u8]) -> bool {
    bytes.len() == lowercase.len()
        && bytes
            .iter()
            .zip(lowercase)
            .all(|(&a, &b)| a.to_ascii_lowercase() == b)
}

/// ASCII-lowercases into an owned copy.
pub fn to_lower(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| b.to_ascii_lowercase()).collect()
}

/// ASCII-lowercases and re-interprets the bytes as ISO-8859-1 to build a
/// canonical name string (one char per byte).
pub fn lower_name(bytes: &[u8]) -> SmolStr {
    bytes
        .iter()
        .map(|&b| b.to_ascii_lowercase() as char)
        .collect()
}

fn unquote_impl(bytes: &[u8], strict: bool) -> Option<Vec<u8>> {
    if bytes.is_empty() {
        return None;
    }
    if !is_quote(bytes[0]) {
        return None;
    }
    if strict && bytes[0] != b'"' {
        return None;
    }
    // Needs a matching terminal quote mark.
    if bytes.len() < 2 || bytes[0] != bytes[bytes.len() - 1] {
        return None;
    }

    let quote = bytes[0];
    let body = &bytes[1..bytes.len() - 1];

    // Unescape quoted-pair (RFC 2616 §2.2).
    let mut prev_escape = false;
    let mut unescaped = Vec::with_capacity(body.len());
    for &c in body {
        if c == b'\\' && !prev_escape {
            prev_escape = true;
            continue;
        }
        if strict && !prev_escape && c == quote {
            return None;
        }
        prev_escape = false;
        unescaped.push(c);
    }

    // Terminal quote is escaped.
    if strict && prev_escape {
        return None;
    }

    Some(unescaped)
}

/// Strips surrounding quote marks and unescapes quoted-pairs. Acts as the
/// identity function when the input is not quoted.
pub fn unquote(bytes: &[u8]) -> Vec<u8> {
    unquote_impl(bytes, false).unwrap_or_else(|| bytes.to_vec())
}

/// Like [`unquote`], but requires double quotes and rejects unescaped
/// quote marks inside the body.
pub fn strict_unquote(bytes: &[u8]) -> Option<Vec<u8>> {
    unquote_impl(bytes, true)
}

/// Splits `host[:port]` bytes. The host may be a DNS name, an IPv4
/// literal, or a bracketed IPv6 literal; a bracketed host is returned with
/// its brackets intact. A missing port yields `-1`; trailing garbage after
/// the port or the closing bracket is an error. The host is not
/// canonicalized and may be invalid.
pub fn parse_host_and_port(bytes: &[u8]) -> Option<(Bytes, i32)> {
    if bytes.is_empty() {
        return None;
    }

    let mut pos = 0;
    let host_end;
    if bytes[0] == b'[' {
        while pos < bytes.len() && bytes[pos] != b']' {
            pos += 1;
        }
        if pos == bytes.len() {
            return None;
        }
        pos += 1; // include the ']'
        host_end = pos;
    } else {
        while pos < bytes.len() && bytes[pos] != b':' {
            pos += 1;
        }
        host_end = pos;
    }

    let port = if pos < bytes.len() && bytes[pos] == b':' {
        pos += 1;
        let port_start = pos;
        while pos < bytes.len() {
            if !bytes[pos].is_ascii_digit() {
                return None;
            }
            pos += 1;
        }
        if port_start == pos {
            // bare colon, port counts as absent
            -1
        } else {
            parse_int(&bytes[port_start..pos])?
        }
    } else {
        if pos < bytes.len() {
            // trailing garbage after a bracketed host
            return None;
        }
        -1
    };

    Some((Bytes::copy_from_slice(&bytes[..host_end]), port))
}

/// Strict decimal integer conversion: optional sign, digits only, no
/// surrounding whitespace, overflow rejected.
pub fn parse_int(bytes: &[u8]) -> Option<i32> {
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

/// Strict decimal float conversion.
pub fn parse_float(bytes: &[u8]) -> Option<f64> {
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_charset() {
        assert!(is_token(b"z9hG4bK"));
        assert!(is_token(b"!#$%&'*+-.^_`|~"));
        assert!(!is_token(b""));
        assert!(!is_token(b"a b"));
        assert!(!is_token(b"a:b"));
        assert!(!is_token(b"a@b"));
        assert!(!is_token(&[0x80]));
        assert!(!is_token(&[0x1f]));
        assert!(!is_token(&[0x7f]));
    }

    #[test]
    fn trim_strips_both_ends_only() {
        assert_eq!(trim_lws(b" \ta b\t "), b"a b");
        assert_eq!(trim_lws(b"   "), b"");
        assert_eq!(trim_lws(b""), b"");
    }

    #[test]
    fn lower_eq_matches_constants() {
        assert!(lower_eq(b"SIP/", b"sip/"));
        assert!(lower_eq(b"sIp", b"sip"));
        assert!(!lower_eq(b"sip", b"sips"));
    }

    #[test]
    fn unquote_is_identity_for_unquoted() {
        assert_eq!(unquote(b"plain"), b"plain");
        assert_eq!(unquote(b""), b"");
        // Mismatched quote marks fall back to the identity.
        assert_eq!(unquote(b"\"half"), b"\"half");
        assert_eq!(unquote(b"\""), b"\"");
    }

    #[test]
    fn unquote_unescapes_pairs() {
        assert_eq!(unquote(br#""a\"b""#), br#"a"b"#);
        assert_eq!(unquote(br#""a\\b""#), br#"a\b"#);
        assert_eq!(unquote(b"'abc'"), b"abc");
    }

    #[test]
    fn strict_unquote_rejects_single_quotes_and_bare_quotes() {
        assert_eq!(strict_unquote(b"'abc'"), None);
        assert_eq!(strict_unquote(br#""a"b""#), None);
        assert_eq!(strict_unquote(br#""a\""#), None);
        assert_eq!(strict_unquote(br#""ok""#), Some(b"ok".to_vec()));
    }

    #[test]
    fn host_and_port_variants() {
        assert_eq!(
            parse_host_and_port(b"host.example"),
            Some((Bytes::from_static(b"host.example"), -1))
        );
        assert_eq!(
            parse_host_and_port(b"host.example:1234"),
            Some((Bytes::from_static(b"host.example"), 1234))
        );
        assert_eq!(
            parse_host_and_port(b"10.0.0.1:5060"),
            Some((Bytes::from_static(b"10.0.0.1"), 5060))
        );
    }

    #[test]
    fn host_and_port_ipv6() {
        assert_eq!(
            parse_host_and_port(b"[::1]"),
            Some((Bytes::from_static(b"[::1]"), -1))
        );
        assert_eq!(
            parse_host_and_port(b"[::1]:90"),
            Some((Bytes::from_static(b"[::1]"), 90))
        );
        assert_eq!(parse_host_and_port(b"[::1"), None);
        assert_eq!(parse_host_and_port(b"[::1]junk"), None);
    }

    #[test]
    fn host_and_port_rejects_bad_ports() {
        assert_eq!(parse_host_and_port(b"host:12x"), None);
        assert_eq!(parse_host_and_port(b""), None);
    }

    #[test]
    fn bare_colon_counts_as_absent_port() {
        assert_eq!(
            parse_host_and_port(b"host:"),
            Some((Bytes::from_static(b"host"), -1))
        );
    }
}
