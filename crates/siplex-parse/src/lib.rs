// siplex - SIP message parsing for Rust
// Copyright (C) 2026 The Siplex Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SIP message parser: framing, start lines, and grammar-aware headers.
//!
//! [`parse`] takes one whole message head as ISO-8859-1 bytes and returns
//! the structured [`Message`]: the start line plus an ordered map of
//! parsed header values. Folded lines are joined first, each header is
//! routed through the registry of per-header grammars, and repeated
//! multi-value headers concatenate in document order.
//!
//! The parser is a pure function: no I/O, no shared mutable state, and
//! every output owns its bytes, so the input buffer can be dropped as
//! soon as the call returns. Malformed header *lines* are skipped;
//! malformed header *values* of known headers abort the parse with one of
//! the [`ParseError`] codes.
//!
//! # Example
//!
//! ```
//! use siplex_parse::parse;
//! use siplex_types::{HeaderName, HeaderValue, Method};
//!
//! let raw = b"INVITE sip:bob@example.com SIP/2.0\r\n\
//!             CSeq: 314159 INVITE\r\n\
//!             Max-Forwards: 70\r\n\r\n";
//! let message = parse(raw).unwrap();
//! let line = message.request_line().unwrap();
//! assert_eq!(line.method, Method::Invite);
//! assert_eq!(
//!     message.headers.get(&HeaderName::MaxForwards),
//!     Some(&HeaderValue::Integer(70))
//! );
//! ```

use bytes::Bytes;
use siplex_types::{
    Headers, Message, ParseError, RequestLine, StartLine, StatusLine,
};

pub mod date;
mod header_values;
pub mod iter;
mod registry;
pub mod text;
pub mod tokenizer;

pub use header_values::{
    parse_cseq, parse_date, parse_mime_version, parse_multiple_contact_params,
    parse_multiple_token_params, parse_multiple_tokens, parse_multiple_type_subtype_params,
    parse_multiple_uri_params, parse_multiple_vias, parse_multiple_warnings,
    parse_only_auth_params, parse_retry_after, parse_scheme_and_auth_params,
    parse_single_contact_params, parse_single_integer, parse_single_token,
    parse_single_token_params, parse_single_type_subtype_params,
    parse_star_or_multiple_contact_params, parse_timestamp, parse_trimmed_utf8,
};
pub use registry::{lookup, parse_header, parse_value, HeaderDef, ValueFormat};

use crate::text::{is_lws, lower_eq, LWS};
use crate::tokenizer::Tokenizer;

/// Parses one SIP message head.
///
/// The buffer must hold the whole start line and header block; anything
/// after the blank line is passed over by the header iterator (body
/// extraction is the caller's concern).
pub fn parse(input: &[u8]) -> Result<Message, ParseError> {
    let unfolded = assemble_raw_headers(input)?;
    let buf = unfolded.as_slice();

    let line_end = find_line_end(buf);
    let first_line = &buf[..line_end];
    let start_line = if is_status_line(first_line) {
        StartLine::Status(parse_status_line(first_line)?)
    } else {
        StartLine::Request(parse_request_line(first_line)?)
    };

    // Jump over the start line's terminator.
    let mut rest = line_end;
    if rest < buf.len() && buf[rest] == b'\r' {
        rest += 1;
    }
    if rest < buf.len() && buf[rest] == b'\n' {
        rest += 1;
    }

    let mut headers = Headers::new();
    for (name, value) in iter::HeadersIterator::new(&buf[rest..]) {
        let (name, value) = registry::parse_header(name, value)?;
        headers.push(name, value)?;
    }

    Ok(Message {
        start_line,
        headers,
    })
}

/// Joins folded lines into one logical line per header.
///
/// `\r\n` and bare `\n` terminate a line; a bare `\r` is a framing error.
/// A terminator followed by LWS marks a continuation: the terminator is
/// dropped and the continuation bytes run on. Logical lines are separated
/// by a single `\n` in the output.
pub fn assemble_raw_headers(input: &[u8]) -> Result<Vec<u8>, ParseError> {
    let mut output = Vec::with_capacity(input.len());
    let mut tok = Tokenizer::new(input);

    loop {
        let line_start = tok.current();
        let line_end = tok.skip_not_in(b"\r\n");
        if line_start != line_end {
            output.extend_from_slice(tok.slice(line_start, line_end));
        }
        if tok.eof() {
            break;
        }
        if tok.peek() == Some(b'\n') {
            tok.skip(); // accept single LF
        } else {
            tok.skip();
            if tok.peek() == Some(b'\n') {
                tok.skip(); // CRLF sequence
            } else {
                return Err(ParseError::InvalidLineBreak);
            }
        }
        if tok.eof() {
            break;
        }
        if !is_lws(input[tok.current()]) {
            output.push(b'\n'); // not line folding
        }
    }

    Ok(output)
}

fn find_line_end(buf: &[u8]) -> usize {
    buf.iter()
        .position(|&c| c == b'\r' || c == b'\n')
        .unwrap_or(buf.len())
}

fn is_status_line(line: &[u8]) -> bool {
    line.len() > 4 && lower_eq(&line[..4], b"sip/")
}

/// Parses `SIP/M.m`, tolerating LWS around the slash and digits.
pub(crate) fn parse_version(line: &[u8]) -> Result<(u8, u8), ParseError> {
    if line.len() < 3 || !lower_eq(&line[..3], b"sip") {
        return Err(ParseError::MissingVersionSpec);
    }
    let mut tok = Tokenizer::new(line);
    tok.skip_n(3);
    tok.skip_in(LWS);
    if tok.peek() != Some(b'/') {
        return Err(ParseError::MissingVersion);
    }
    tok.skip();
    let major_start = tok.skip_in(LWS);
    tok.skip_to(b'.');
    tok.skip();
    let minor_start = tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::MalformedVersion);
    }

    let major = line[major_start];
    let minor = line[minor_start];
    if !major.is_ascii_digit() || !minor.is_ascii_digit() {
        return Err(ParseError::MalformedVersionNumber);
    }
    Ok((major - b'0', minor - b'0'))
}

fn parse_status_line(line: &[u8]) -> Result<StatusLine, ParseError> {
    let version = parse_version(line)?;

    let mut pos = line
        .iter()
        .position(|&c| c == b' ')
        .ok_or(ParseError::MissingStatusCode)?;
    while pos < line.len() && line[pos] == b' ' {
        pos += 1;
    }

    let code_start = pos;
    while pos < line.len() && line[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == code_start {
        return Err(ParseError::EmptyStatusCode);
    }
    let status_code =
        text::parse_int(&line[code_start..pos]).ok_or(ParseError::InvalidStatusCode)?;

    while pos < line.len() && line[pos] == b' ' {
        pos += 1;
    }
    let mut end = line.len();
    while end > pos && line[end - 1] == b' ' {
        end -= 1;
    }

    Ok(StatusLine {
        version,
        status_code,
        reason_phrase: Bytes::copy_from_slice(&line[pos..end]),
    })
}

fn parse_request_line(line: &[u8]) -> Result<RequestLine, ParseError> {
    let mut begin = 0;
    while begin < line.len()
        && matches!(line[begin], b' ' | b'\t' | b'\r' | b'\n')
    {
        begin += 1;
    }
    let line = &line[begin..];

    let method_end = line
        .iter()
        .position(|&c| c == b' ')
        .ok_or(ParseError::MissingMethod)?;
    let method = siplex_types::Method::from_token(&line[..method_end]);

    let mut pos = method_end;
    while pos < line.len() && line[pos] == b' ' {
        pos += 1;
    }
    let uri_start = pos;
    let uri_end = line[pos..]
        .iter()
        .position(|&c| c == b' ')
        .map(|offset| pos + offset)
        .ok_or(ParseError::MissingUri)?;
    let request_uri = Bytes::copy_from_slice(&line[uri_start..uri_end]);

    pos = uri_end;
    while pos < line.len() && line[pos] == b' ' {
        pos += 1;
    }
    let version = parse_version(&line[pos..])?;

    Ok(RequestLine {
        method,
        request_uri,
        version,
    })
}
