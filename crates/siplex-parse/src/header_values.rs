// siplex - SIP message parsing for Rust
// Copyright (C) 2026 The Siplex Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grammar-specific header value parsers.
//!
//! Each `parse_*` function takes the raw value bytes of one header line
//! (already unfolded and LWS-trimmed) and produces the matching
//! [`HeaderValue`] variant, or the error code of the first grammar
//! violation. Comma-separated grammars run each element through the
//! singular parser and abort on the first failure.

use bytes::Bytes;
use siplex_types::{
    Challenge, Contact, HeaderValue, HostPort, MediaType, Method, Params, ParseError, Protocol,
    UriParams, Via, Warning,
};
use smol_str::SmolStr;
use tracing::debug;

use crate::date;
use crate::iter::{GenericParametersIterator, NameValuePairsIterator, ValuesIterator};
use crate::text::{
    is_quote, is_token, lower_eq, lower_name, parse_float, parse_host_and_port, parse_int,
    trim_lws, LWS,
};
use crate::tokenizer::Tokenizer;

const LWS_SEMI: &[u8] = b" \t;";
const LWS_SLASH: &[u8] = b" \t/";
const LWS_COMMENT: &[u8] = b" \t(;";

/// One token, e.g. `Call-ID`.
pub fn parse_single_token(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    Ok(HeaderValue::Token(parse_token(&mut tok)?))
}

/// Token plus `;` parameters, e.g. `Content-Disposition`.
pub fn parse_single_token_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    let token = parse_token(&mut tok)?;
    let params = parse_parameters(&mut tok);
    Ok(HeaderValue::TokenParams(token, params))
}

/// Comma-separated tokens, e.g. `Allow`, `Supported`.
pub fn parse_multiple_tokens(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tokens = Vec::new();
    for element in ValuesIterator::new(value, b',') {
        let mut tok = Tokenizer::new(element);
        tokens.push(parse_token(&mut tok)?);
    }
    Ok(HeaderValue::Tokens(tokens))
}

/// Comma-separated token + parameters, e.g. `Accept-Encoding`.
pub fn parse_multiple_token_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut values = Vec::new();
    for element in ValuesIterator::new(value, b',') {
        let mut tok = Tokenizer::new(element);
        let token = parse_token(&mut tok)?;
        let params = parse_parameters(&mut tok);
        values.push((token, params));
    }
    Ok(HeaderValue::TokensParams(values))
}

/// `type/subtype` plus parameters, e.g. `Content-Type`.
pub fn parse_single_type_subtype_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    let media = parse_type_subtype(&mut tok)?;
    let params = parse_parameters(&mut tok);
    Ok(HeaderValue::MediaType(MediaType {
        value: media,
        params,
    }))
}

/// Comma-separated media descriptors, e.g. `Accept`.
pub fn parse_multiple_type_subtype_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut values = Vec::new();
    for element in ValuesIterator::new(value, b',') {
        let mut tok = Tokenizer::new(element);
        let media = parse_type_subtype(&mut tok)?;
        let params = parse_parameters(&mut tok);
        values.push(MediaType {
            value: media,
            params,
        });
    }
    Ok(HeaderValue::MediaTypes(values))
}

/// Comma-separated `<uri>` references, e.g. `Alert-Info`, `Call-Info`.
pub fn parse_multiple_uri_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut uris = Vec::new();
    for element in ValuesIterator::new(value, b',') {
        let mut tok = Tokenizer::new(element);
        tok.skip_to(b'<');
        if tok.eof() {
            debug!("uri reference without laquot");
            return Err(ParseError::InvalidUri);
        }
        let uri_start = tok.skip();
        let uri_end = tok.skip_to(b'>');
        if tok.eof() {
            debug!("unclosed '<' in uri reference");
            return Err(ParseError::UnclosedLaquot);
        }
        tok.skip();
        let params = parse_parameters(&mut tok);
        uris.push(UriParams {
            uri: Bytes::copy_from_slice(tok.slice(uri_start, uri_end)),
            params,
        });
    }
    Ok(HeaderValue::Uris(uris))
}

/// A decimal integer, e.g. `Content-Length`, `Max-Forwards`.
pub fn parse_single_integer(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    let start = tok.skip_in(LWS);
    let end = tok.skip_not_in(LWS);
    let digits = tok.slice(start, end);
    let integer = parse_int(digits).ok_or(ParseError::InvalidDigits)?;
    Ok(HeaderValue::Integer(integer))
}

/// Bare `name=value` auth parameters, e.g. `Authentication-Info`.
pub fn parse_only_auth_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let tok = Tokenizer::new(value);
    Ok(HeaderValue::AuthParams(parse_auth_params(&tok)))
}

/// `scheme` followed by `name=value` parameters, e.g. `Authorization`.
///
/// The result is a one-element list so repeated credential headers
/// concatenate instead of colliding.
pub fn parse_scheme_and_auth_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    let scheme = parse_auth_scheme(&mut tok)?;
    let params = parse_auth_params(&tok);
    Ok(HeaderValue::Challenges(vec![Challenge { scheme, params }]))
}

/// One contact plus parameters, e.g. `From`, `To`, `Refer-To`.
pub fn parse_single_contact_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    let (display_name, address) = parse_contact(&mut tok)?;
    let params = parse_parameters(&mut tok);
    Ok(HeaderValue::Contact(Contact {
        display_name,
        address,
        params,
    }))
}

/// Comma-separated contacts, e.g. `Route`, `Record-Route`.
pub fn parse_multiple_contact_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut contacts = Vec::new();
    for element in ValuesIterator::new(value, b',') {
        let mut tok = Tokenizer::new(element);
        let (display_name, address) = parse_contact(&mut tok)?;
        let params = parse_parameters(&mut tok);
        contacts.push(Contact {
            display_name,
            address,
            params,
        });
    }
    Ok(HeaderValue::Contacts(contacts))
}

/// `*` or comma-separated contacts (`Contact`).
pub fn parse_star_or_multiple_contact_params(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    tok.skip_in(LWS);
    if tok.peek() == Some(b'*') {
        return Ok(HeaderValue::Star);
    }
    parse_multiple_contact_params(value)
}

/// LWS-trimmed free text, e.g. `Subject`, `Server`, `User-Agent`.
pub fn parse_trimmed_utf8(value: &[u8]) -> Result<HeaderValue, ParseError> {
    Ok(HeaderValue::Text(Bytes::copy_from_slice(trim_lws(value))))
}

/// `sequence method` (`CSeq`).
pub fn parse_cseq(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    let integer_start = tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::MissingSequence);
    }
    let integer_end = tok.skip_not_in(LWS);
    let sequence =
        parse_int(tok.slice(integer_start, integer_end)).ok_or(ParseError::InvalidSequence)?;
    let method_start = tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::MissingMethod);
    }
    let method_end = tok.skip_not_in(LWS);
    let method = Method::from_token(tok.slice(method_start, method_end));
    Ok(HeaderValue::CSeq(sequence, method))
}

/// An RFC 2616 date (`Date`).
pub fn parse_date(value: &[u8]) -> Result<HeaderValue, ParseError> {
    Ok(HeaderValue::Date(date::parse_date(value)?))
}

/// `timestamp [delay]` (`Timestamp`). Errors in the optional delay are
/// ignored.
pub fn parse_timestamp(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    let timestamp_start = tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::MissingTimestamp);
    }
    let timestamp_end = tok.skip_not_in(LWS);
    let timestamp = parse_float(tok.slice(timestamp_start, timestamp_end))
        .ok_or(ParseError::InvalidTimestamp)?;

    let mut delay = 0.0;
    let delay_start = tok.skip_in(LWS);
    if !tok.eof() {
        let delay_end = tok.skip_not_in(LWS);
        delay = parse_float(tok.slice(delay_start, delay_end)).unwrap_or(0.0);
    }
    Ok(HeaderValue::Timestamp(timestamp, delay))
}

/// `major.minor` (`MIME-Version`).
pub fn parse_mime_version(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    let major_start = tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::MissingMajor);
    }
    let major_end = tok.skip_to(b'.');
    let major = parse_int(tok.slice(major_start, major_end))
        .ok_or(ParseError::MissingOrInvalidMajor)?;
    tok.skip();
    let minor_start = tok.skip_in(LWS);
    let minor =
        parse_int(tok.slice(minor_start, tok.end())).ok_or(ParseError::InvalidMinor)?;
    Ok(HeaderValue::MimeVersion(major, minor))
}

/// `delta-seconds [(comment)] [;params]` (`Retry-After`).
pub fn parse_retry_after(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut tok = Tokenizer::new(value);
    let delta_start = tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::MissingDeltaSecs);
    }
    let delta_end = tok.skip_not_in(LWS_COMMENT);
    let delta = parse_int(tok.slice(delta_start, delta_end))
        .ok_or(ParseError::MissingOrInvalidDeltaSecs)?;

    let mut comment = Bytes::new();
    tok.skip_in(LWS);
    if tok.peek() == Some(b'(') {
        comment = parse_comment(&mut tok)?;
    }
    let params = parse_parameters(&mut tok);
    Ok(HeaderValue::RetryAfter(delta, comment, params))
}

/// Comma-separated warning values (`Warning`).
pub fn parse_multiple_warnings(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut warnings = Vec::new();
    for element in ValuesIterator::new(value, b',') {
        warnings.push(parse_warning(element)?);
    }
    Ok(HeaderValue::Warnings(warnings))
}

/// Comma-separated Via values (`Via`).
pub fn parse_multiple_vias(value: &[u8]) -> Result<HeaderValue, ParseError> {
    let mut vias = Vec::new();
    for element in ValuesIterator::new(value, b',') {
        vias.push(parse_via(element)?);
    }
    Ok(HeaderValue::Vias(vias))
}

/// A token run: leading LWS skipped, terminated by LWS or `;`.
fn parse_token(tok: &mut Tokenizer) -> Result<Bytes, ParseError> {
    let token_start = tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::EmptyValue);
    }
    let token_end = tok.skip_not_in(LWS_SEMI);
    Ok(Bytes::copy_from_slice(tok.slice(token_start, token_end)))
}

/// `token "/" token`, both lowercased. Empty input is an absent value.
fn parse_type_subtype(
    tok: &mut Tokenizer,
) -> Result<Option<(SmolStr, SmolStr)>, ParseError> {
    let type_start = tok.skip_in(LWS);
    if tok.eof() {
        // empty header is OK
        return Ok(None);
    }
    let type_end = tok.skip_not_in(LWS_SLASH);
    let mime_type = tok.slice(type_start, type_end);
    if !is_token(mime_type) {
        return Err(ParseError::InvalidToken);
    }

    tok.skip_to(b'/');
    tok.skip();

    let subtype_start = tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::MissingSubtype);
    }
    let subtype_end = tok.skip_not_in(LWS_SEMI);
    let subtype = tok.slice(subtype_start, subtype_end);
    if !is_token(subtype) {
        return Err(ParseError::InvalidToken);
    }

    Ok(Some((lower_name(mime_type), lower_name(subtype))))
}

/// `;`-led generic parameters from the cursor position onward.
///
/// Parameter names are lowercased; values keep their case and are
/// unquoted when fully quoted.
fn parse_parameters(tok: &mut Tokenizer) -> Params {
    let mut params = Params::new();
    if tok.eof() {
        return params;
    }
    tok.skip_to(b';');
    tok.skip();

    let mut it = GenericParametersIterator::new(tok.rest());
    while it.get_next() {
        params.insert(
            lower_name(it.name()),
            Bytes::copy_from_slice(it.value()),
        );
    }
    params
}

/// The auth scheme: a non-LWS run after leading LWS.
fn parse_auth_scheme(tok: &mut Tokenizer) -> Result<Bytes, ParseError> {
    let scheme_start = tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::MissingAuthScheme);
    }
    let scheme_end = tok.skip_not_in(LWS);
    Ok(Bytes::copy_from_slice(tok.slice(scheme_start, scheme_end)))
}

/// Comma-separated `name=value` pairs with unquoted values.
///
/// A malformed pair silently terminates the iteration; everything parsed
/// up to that point is kept.
fn parse_auth_params(tok: &Tokenizer) -> Params {
    let mut params = Params::new();
    let mut it = NameValuePairsIterator::new(tok.rest(), b',');
    while it.get_next() {
        params.insert(
            lower_name(it.name()),
            Bytes::copy_from_slice(it.value()),
        );
    }
    params
}

/// One contact: `"display" <addr>`, `tokens <addr>`, or a bare addr.
///
/// The cursor is left after the address so `;` parameters can follow.
/// Empty input fails with `missing_address`; comma-separated callers
/// never produce it, but the singular From/To path can.
fn parse_contact(tok: &mut Tokenizer) -> Result<(Option<Bytes>, Bytes), ParseError> {
    tok.skip_in(LWS);
    let Some(first) = tok.peek() else {
        debug!("empty contact value");
        return Err(ParseError::MissingAddress);
    };

    let display_name;
    let address;
    if is_quote(first) {
        // contact-param = quoted-string LAQUOT addr-spec RAQUOT
        let display_start = tok.current();
        tok.skip();
        loop {
            match tok.peek() {
                None => {
                    debug!("unclosed quoted-string in contact");
                    return Err(ParseError::UnclosedQstring);
                }
                Some(b'\\') => {
                    tok.skip();
                    tok.skip();
                }
                Some(c) if is_quote(c) => break,
                Some(_) => {
                    tok.skip();
                }
            }
        }
        let display_end = tok.skip();
        display_name = tok.slice(display_start, display_end).to_vec();

        tok.skip_to(b'<');
        if tok.eof() {
            debug!("missing address in contact");
            return Err(ParseError::MissingAddress);
        }
        let address_start = tok.skip();
        let address_end = tok.skip_to(b'>');
        if tok.eof() {
            debug!("unclosed '<' in contact");
            return Err(ParseError::UnclosedLaquot);
        }
        tok.skip();
        address = Bytes::copy_from_slice(tok.slice(address_start, address_end));
    } else {
        let mut laquot = tok.clone();
        laquot.skip_to(b'<');
        if !laquot.eof() {
            // contact-param = *(token LWS) LAQUOT addr-spec RAQUOT
            display_name = trim_lws(tok.slice(tok.current(), laquot.current())).to_vec();
            let address_start = laquot.skip();
            let address_end = laquot.skip_to(b'>');
            if laquot.eof() {
                debug!("unclosed '<' in contact");
                return Err(ParseError::UnclosedLaquot);
            }
            address = Bytes::copy_from_slice(laquot.slice(address_start, address_end));
            laquot.skip();
            tok.set_current(laquot.current());
        } else if crate::text::is_token_char(first) {
            let address_start = tok.current();
            let address_end = tok.skip_not_in(LWS_SEMI);
            display_name = Vec::new();
            address = Bytes::copy_from_slice(tok.slice(address_start, address_end));
        } else {
            debug!("invalid leading character in contact");
            return Err(ParseError::InvalidCharFound);
        }
    }

    let display_name = crate::text::unquote(&display_name);
    let display_name = if display_name.is_empty() {
        None
    } else {
        Some(Bytes::from(display_name))
    };
    Ok((display_name, address))
}

/// A parenthesized comment at the cursor, which must point at `(`.
///
/// Nesting balances; `\x` consumes the next byte. The returned bytes are
/// the LWS-trimmed content without the outer parentheses, and the cursor
/// is left just past the closing parenthesis.
fn parse_comment(tok: &mut Tokenizer) -> Result<Bytes, ParseError> {
    let content_start = tok.skip();
    let mut depth = 1u32;
    loop {
        match tok.peek() {
            None => {
                debug!("unbalanced comment");
                return Err(ParseError::InvalidComment);
            }
            Some(b'\\') => {
                tok.skip();
                tok.skip();
            }
            Some(b'(') => {
                depth += 1;
                tok.skip();
            }
            Some(b')') => {
                depth -= 1;
                if depth == 0 {
                    let content_end = tok.current();
                    tok.skip();
                    return Ok(Bytes::copy_from_slice(trim_lws(
                        tok.slice(content_start, content_end),
                    )));
                }
                tok.skip();
            }
            Some(_) => {
                tok.skip();
            }
        }
    }
}

/// `code SP agent SP "text"`, with the code in 100..=999.
fn parse_warning(value: &[u8]) -> Result<Warning, ParseError> {
    let mut tok = Tokenizer::new(value);
    let code_start = tok.skip_in(LWS);
    if tok.eof() {
        debug!("empty warning value");
        return Err(ParseError::EmptyInput);
    }
    let code_end = tok.skip_not_in(LWS);
    let code = parse_int(tok.slice(code_start, code_end))
        .filter(|code| (100..=999).contains(code))
        .ok_or(ParseError::InvalidCode)?;

    let agent_start = tok.skip_in(LWS);
    if tok.eof() {
        debug!("empty warn-agent");
        return Err(ParseError::EmptyWarnAgent);
    }
    let agent_end = tok.skip_not_in(LWS);
    let agent = Bytes::copy_from_slice(tok.slice(agent_start, agent_end));

    tok.skip_in(LWS);
    if tok.eof() {
        return Err(ParseError::MissingWarnText);
    }
    if tok.peek() != Some(b'"') {
        debug!("warn-text is not a quoted string");
        return Err(ParseError::InvalidWarnText);
    }
    let text_start = tok.current();
    tok.skip();
    loop {
        match tok.peek() {
            None => {
                debug!("unclosed warn-text");
                return Err(ParseError::UnclosedQstring);
            }
            Some(b'\\') => {
                tok.skip();
                tok.skip();
            }
            Some(b'"') => break,
            Some(_) => {
                tok.skip();
            }
        }
    }
    let text_end = tok.skip();
    let text = crate::text::unquote(tok.slice(text_start, text_end));

    Ok(Warning {
        code: code as u16,
        agent,
        text: Bytes::from(text),
    })
}

/// `SIP/M.m/PROTO sent-by [;params]`.
fn parse_via(value: &[u8]) -> Result<Via, ParseError> {
    let mut tok = Tokenizer::new(value);
    tok.skip_in(LWS);
    if tok.remaining() < 3 || !lower_eq(&tok.rest()[..3], b"sip") {
        debug!("via does not start with a sip version");
        return Err(ParseError::UnknownVersion);
    }
    let version_start = tok.current();
    tok.skip_to(b'/');
    tok.skip();
    if tok.eof() {
        return Err(ParseError::MissingVersion);
    }
    let version_end = tok.skip_to(b'/');
    let version = crate::parse_version(tok.slice(version_start, version_end))?;

    let protocol_start = tok.skip();
    if tok.eof() {
        debug!("missing sent-protocol in via");
        return Err(ParseError::MissingSentProtocol);
    }
    let protocol_end = tok.skip_not_in(LWS);
    let protocol = Protocol::from_token(tok.slice(protocol_start, protocol_end));

    let sentby_start = tok.skip_in(LWS);
    if tok.eof() {
        debug!("missing sent-by in via");
        return Err(ParseError::MissingSentby);
    }
    let sentby_end = tok.skip_to(b';');
    let sent_by = trim_lws(tok.slice(sentby_start, sentby_end));
    if sent_by.is_empty() {
        return Err(ParseError::MissingSentby);
    }
    let (host, port) = parse_host_and_port(sent_by).ok_or_else(|| {
        debug!("invalid sent-by in via");
        ParseError::InvalidSentby
    })?;
    let port = if port == -1 {
        protocol.default_port()
    } else {
        port
    };
    // Remove brackets from IPv6 hosts.
    let host = if host.first() == Some(&b'[') {
        host.slice(1..host.len() - 1)
    } else {
        host
    };

    let params = parse_parameters(&mut tok);
    Ok(Via {
        version,
        protocol,
        sent_by: HostPort { host, port },
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &'static [u8])]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (SmolStr::new(*k), Bytes::from_static(v)))
            .collect()
    }

    #[test]
    fn single_token() {
        assert_eq!(
            parse_single_token(b"  abc123@host "),
            Ok(HeaderValue::Token(Bytes::from_static(b"abc123@host")))
        );
        assert_eq!(parse_single_token(b"  \t"), Err(ParseError::EmptyValue));
    }

    #[test]
    fn single_token_stops_at_semicolon() {
        assert_eq!(
            parse_single_token_params(b"attachment;handling=optional"),
            Ok(HeaderValue::TokenParams(
                Bytes::from_static(b"attachment"),
                params(&[("handling", b"optional")]),
            ))
        );
    }

    #[test]
    fn multiple_tokens() {
        assert_eq!(
            parse_multiple_tokens(b"100rel, timer,, path "),
            Ok(HeaderValue::Tokens(vec![
                Bytes::from_static(b"100rel"),
                Bytes::from_static(b"timer"),
                Bytes::from_static(b"path"),
            ]))
        );
        assert_eq!(parse_multiple_tokens(b""), Ok(HeaderValue::Tokens(vec![])));
    }

    #[test]
    fn multiple_token_params() {
        assert_eq!(
            parse_multiple_token_params(b"gzip;q=1.0, identity; q=0.5"),
            Ok(HeaderValue::TokensParams(vec![
                (Bytes::from_static(b"gzip"), params(&[("q", b"1.0")])),
                (Bytes::from_static(b"identity"), params(&[("q", b"0.5")])),
            ]))
        );
    }

    #[test]
    fn type_subtype_lowercases() {
        assert_eq!(
            parse_single_type_subtype_params(b"Application/SDP; Charset=UTF-8"),
            Ok(HeaderValue::MediaType(MediaType {
                value: Some((SmolStr::new("application"), SmolStr::new("sdp"))),
                params: params(&[("charset", b"UTF-8")]),
            }))
        );
    }

    #[test]
    fn type_subtype_empty_is_absent() {
        assert_eq!(
            parse_single_type_subtype_params(b"  "),
            Ok(HeaderValue::MediaType(MediaType {
                value: None,
                params: Params::new(),
            }))
        );
    }

    #[test]
    fn type_subtype_errors() {
        assert_eq!(
            parse_single_type_subtype_params(b"text/"),
            Err(ParseError::MissingSubtype)
        );
        assert_eq!(
            parse_single_type_subtype_params(b"te@xt/plain"),
            Err(ParseError::InvalidToken)
        );
        assert_eq!(
            parse_single_type_subtype_params(b"text/pl@in"),
            Err(ParseError::InvalidToken)
        );
    }

    #[test]
    fn multiple_type_subtype_params() {
        let parsed =
            parse_multiple_type_subtype_params(b"application/sdp, text/plain;format=flowed")
                .unwrap();
        let HeaderValue::MediaTypes(list) = parsed else {
            panic!("wrong variant");
        };
        assert_eq!(list.len(), 2);
        assert_eq!(
            list[1].value,
            Some((SmolStr::new("text"), SmolStr::new("plain")))
        );
        assert_eq!(list[1].params, params(&[("format", b"flowed")]));
    }

    #[test]
    fn uri_params() {
        assert_eq!(
            parse_multiple_uri_params(b"<http://a/b>;purpose=icon, <sip:x@y>"),
            Ok(HeaderValue::Uris(vec![
                UriParams {
                    uri: Bytes::from_static(b"http://a/b"),
                    params: params(&[("purpose", b"icon")]),
                },
                UriParams {
                    uri: Bytes::from_static(b"sip:x@y"),
                    params: Params::new(),
                },
            ]))
        );
        assert_eq!(
            parse_multiple_uri_params(b"no-brackets"),
            Err(ParseError::InvalidUri)
        );
        assert_eq!(
            parse_multiple_uri_params(b"<sip:x@y"),
            Err(ParseError::UnclosedLaquot)
        );
    }

    #[test]
    fn single_integer() {
        assert_eq!(parse_single_integer(b" 42 "), Ok(HeaderValue::Integer(42)));
        assert_eq!(
            parse_single_integer(b"12x"),
            Err(ParseError::InvalidDigits)
        );
        assert_eq!(parse_single_integer(b""), Err(ParseError::InvalidDigits));
        assert_eq!(
            parse_single_integer(b"99999999999999999999"),
            Err(ParseError::InvalidDigits)
        );
    }

    #[test]
    fn only_auth_params() {
        assert_eq!(
            parse_only_auth_params(br#"nextnonce="abc", qop=auth"#),
            Ok(HeaderValue::AuthParams(params(&[
                ("nextnonce", b"abc"),
                ("qop", b"auth"),
            ])))
        );
    }

    #[test]
    fn scheme_and_auth_params() {
        assert_eq!(
            parse_scheme_and_auth_params(
                br#"Digest realm="sip.example", nonce="xyz", algorithm=MD5"#
            ),
            Ok(HeaderValue::Challenges(vec![Challenge {
                scheme: Bytes::from_static(b"Digest"),
                params: params(&[
                    ("realm", b"sip.example"),
                    ("nonce", b"xyz"),
                    ("algorithm", b"MD5"),
                ]),
            }]))
        );
        assert_eq!(
            parse_scheme_and_auth_params(b"  "),
            Err(ParseError::MissingAuthScheme)
        );
    }

    #[test]
    fn auth_params_stop_at_first_malformed_pair() {
        assert_eq!(
            parse_only_auth_params(b"a=1, bogus, c=3"),
            Ok(HeaderValue::AuthParams(params(&[("a", b"1")])))
        );
    }

    #[test]
    fn contact_with_quoted_display_name() {
        assert_eq!(
            parse_single_contact_params(br#""Alice \"A\"" <sip:alice@a.com>;q=0.7"#),
            Ok(HeaderValue::Contact(Contact {
                display_name: Some(Bytes::from_static(br#"Alice "A""#)),
                address: Bytes::from_static(b"sip:alice@a.com"),
                params: params(&[("q", b"0.7")]),
            }))
        );
    }

    #[test]
    fn contact_with_token_display_name() {
        assert_eq!(
            parse_single_contact_params(b"Bob Smith <sip:bob@b.com>"),
            Ok(HeaderValue::Contact(Contact {
                display_name: Some(Bytes::from_static(b"Bob Smith")),
                address: Bytes::from_static(b"sip:bob@b.com"),
                params: Params::new(),
            }))
        );
    }

    #[test]
    fn contact_bare_address() {
        assert_eq!(
            parse_single_contact_params(b"sip:carol@c.com ;expires=60"),
            Ok(HeaderValue::Contact(Contact {
                display_name: None,
                address: Bytes::from_static(b"sip:carol@c.com"),
                params: params(&[("expires", b"60")]),
            }))
        );
    }

    #[test]
    fn contact_errors() {
        assert_eq!(
            parse_single_contact_params(b""),
            Err(ParseError::MissingAddress)
        );
        assert_eq!(
            parse_single_contact_params(br#""Alice"#),
            Err(ParseError::UnclosedQstring)
        );
        assert_eq!(
            parse_single_contact_params(br#""Alice" sip:a@b"#),
            Err(ParseError::MissingAddress)
        );
        assert_eq!(
            parse_single_contact_params(br#""Alice" <sip:a@b"#),
            Err(ParseError::UnclosedLaquot)
        );
        assert_eq!(
            parse_single_contact_params(b"Bob <sip:b@b"),
            Err(ParseError::UnclosedLaquot)
        );
        assert_eq!(
            parse_single_contact_params(b"<"),
            Err(ParseError::UnclosedLaquot)
        );
        assert_eq!(
            parse_single_contact_params(b"@bad"),
            Err(ParseError::InvalidCharFound)
        );
    }

    #[test]
    fn multiple_contacts() {
        let parsed = parse_multiple_contact_params(
            br#"<sip:a@a.com>;q=0.5, "B, B" <sip:b@b.com>"#,
        )
        .unwrap();
        let HeaderValue::Contacts(contacts) = parsed else {
            panic!("wrong variant");
        };
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].address, Bytes::from_static(b"sip:a@a.com"));
        assert_eq!(
            contacts[1].display_name,
            Some(Bytes::from_static(b"B, B"))
        );
    }

    #[test]
    fn star_contact() {
        assert_eq!(
            parse_star_or_multiple_contact_params(b" * "),
            Ok(HeaderValue::Star)
        );
        let parsed = parse_star_or_multiple_contact_params(b"<sip:a@b>").unwrap();
        assert!(matches!(parsed, HeaderValue::Contacts(ref c) if c.len() == 1));
    }

    #[test]
    fn trimmed_text() {
        assert_eq!(
            parse_trimmed_utf8(b" \tI know you're there \t"),
            Ok(HeaderValue::Text(Bytes::from_static(
                b"I know you're there"
            )))
        );
    }

    #[test]
    fn cseq() {
        assert_eq!(
            parse_cseq(b"4711 INVITE"),
            Ok(HeaderValue::CSeq(4711, Method::Invite))
        );
        assert_eq!(
            parse_cseq(b"1 BREW"),
            Ok(HeaderValue::CSeq(
                1,
                Method::Unknown(Bytes::from_static(b"brew"))
            ))
        );
        assert_eq!(parse_cseq(b"  "), Err(ParseError::MissingSequence));
        assert_eq!(parse_cseq(b"x INVITE"), Err(ParseError::InvalidSequence));
        assert_eq!(parse_cseq(b"42 "), Err(ParseError::MissingMethod));
    }

    #[test]
    fn timestamp() {
        assert_eq!(
            parse_timestamp(b"54.3 1.5"),
            Ok(HeaderValue::Timestamp(54.3, 1.5))
        );
        assert_eq!(
            parse_timestamp(b"54"),
            Ok(HeaderValue::Timestamp(54.0, 0.0))
        );
        // A bad optional delay falls back to zero.
        assert_eq!(
            parse_timestamp(b"54.3 oops"),
            Ok(HeaderValue::Timestamp(54.3, 0.0))
        );
        assert_eq!(parse_timestamp(b" "), Err(ParseError::MissingTimestamp));
        assert_eq!(
            parse_timestamp(b"oops"),
            Err(ParseError::InvalidTimestamp)
        );
    }

    #[test]
    fn mime_version() {
        assert_eq!(
            parse_mime_version(b"1.0"),
            Ok(HeaderValue::MimeVersion(1, 0))
        );
        assert_eq!(parse_mime_version(b"  "), Err(ParseError::MissingMajor));
        assert_eq!(
            parse_mime_version(b"x.0"),
            Err(ParseError::MissingOrInvalidMajor)
        );
        assert_eq!(parse_mime_version(b"1."), Err(ParseError::InvalidMinor));
        assert_eq!(parse_mime_version(b"1.y"), Err(ParseError::InvalidMinor));
        assert_eq!(parse_mime_version(b"1"), Err(ParseError::InvalidMinor));
    }

    #[test]
    fn retry_after() {
        assert_eq!(
            parse_retry_after(b"120"),
            Ok(HeaderValue::RetryAfter(120, Bytes::new(), Params::new()))
        );
        assert_eq!(
            parse_retry_after(b"120 (I'm in a meeting) ;duration=3600"),
            Ok(HeaderValue::RetryAfter(
                120,
                Bytes::from_static(b"I'm in a meeting"),
                params(&[("duration", b"3600")]),
            ))
        );
        assert_eq!(
            parse_retry_after(b"18000;duration=3600"),
            Ok(HeaderValue::RetryAfter(
                18000,
                Bytes::new(),
                params(&[("duration", b"3600")]),
            ))
        );
    }

    #[test]
    fn retry_after_nested_comment() {
        assert_eq!(
            parse_retry_after(b"60 (outer (inner) tail)"),
            Ok(HeaderValue::RetryAfter(
                60,
                Bytes::from_static(b"outer (inner) tail"),
                Params::new(),
            ))
        );
    }

    #[test]
    fn retry_after_errors() {
        assert_eq!(
            parse_retry_after(b" "),
            Err(ParseError::MissingDeltaSecs)
        );
        assert_eq!(
            parse_retry_after(b"soon"),
            Err(ParseError::MissingOrInvalidDeltaSecs)
        );
        assert_eq!(
            parse_retry_after(b"60 (unbalanced"),
            Err(ParseError::InvalidComment)
        );
    }

    #[test]
    fn warnings() {
        let parsed = parse_multiple_warnings(
            br#"307 isi.edu "Session parameter 'foo' not understood", 301 isi.edu "Incompatible network address type 'E.164'""#,
        )
        .unwrap();
        let HeaderValue::Warnings(warnings) = parsed else {
            panic!("wrong variant");
        };
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].code, 307);
        assert_eq!(warnings[0].agent, Bytes::from_static(b"isi.edu"));
        assert_eq!(
            warnings[0].text,
            Bytes::from_static(b"Session parameter 'foo' not understood")
        );
        assert_eq!(warnings[1].code, 301);
    }

    #[test]
    fn warning_errors() {
        assert_eq!(
            parse_multiple_warnings(b"99 agent \"text\""),
            Err(ParseError::InvalidCode)
        );
        assert_eq!(
            parse_multiple_warnings(b"1000 agent \"text\""),
            Err(ParseError::InvalidCode)
        );
        assert_eq!(
            parse_multiple_warnings(b"307"),
            Err(ParseError::EmptyWarnAgent)
        );
        assert_eq!(
            parse_multiple_warnings(b"307 isi.edu"),
            Err(ParseError::MissingWarnText)
        );
        assert_eq!(
            parse_multiple_warnings(b"307 isi.edu text"),
            Err(ParseError::InvalidWarnText)
        );
        assert_eq!(
            parse_multiple_warnings(b"307 isi.edu \"unclosed"),
            Err(ParseError::UnclosedQstring)
        );
    }

    #[test]
    fn via_basic() {
        let parsed =
            parse_multiple_vias(b"SIP/2.0/UDP host.example:1234;branch=z9hG4bK87a").unwrap();
        let HeaderValue::Vias(vias) = parsed else {
            panic!("wrong variant");
        };
        assert_eq!(vias.len(), 1);
        let via = &vias[0];
        assert_eq!(via.version, (2, 0));
        assert_eq!(via.protocol, Protocol::Udp);
        assert_eq!(via.sent_by.host, Bytes::from_static(b"host.example"));
        assert_eq!(via.sent_by.port, 1234);
        assert_eq!(
            via.get_param("branch"),
            Some(&Bytes::from_static(b"z9hG4bK87a"))
        );
    }

    #[test]
    fn via_default_ports() {
        let cases: &[(&[u8], i32)] = &[
            (b"SIP/2.0/UDP host", 5060),
            (b"SIP/2.0/TCP host", 5060),
            (b"SIP/2.0/TLS host", 5061),
            (b"SIP/2.0/SCTP host", 0),
        ];
        for (input, port) in cases {
            let HeaderValue::Vias(vias) = parse_multiple_vias(input).unwrap() else {
                panic!("wrong variant");
            };
            assert_eq!(vias[0].sent_by.port, *port, "input {:?}", input);
        }
    }

    #[test]
    fn via_ipv6_brackets_are_stripped() {
        let HeaderValue::Vias(vias) =
            parse_multiple_vias(b"SIP/2.0/TCP [2001:db8::1]:5060").unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(vias[0].sent_by.host, Bytes::from_static(b"2001:db8::1"));
        assert_eq!(vias[0].sent_by.port, 5060);
    }

    #[test]
    fn via_unknown_transport_is_lowercased() {
        let HeaderValue::Vias(vias) =
            parse_multiple_vias(b"SIP/2.0/QUIC host:7777").unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(
            vias[0].protocol,
            Protocol::Unknown(Bytes::from_static(b"quic"))
        );
        assert_eq!(vias[0].sent_by.port, 7777);
    }

    #[test]
    fn via_multiple_values() {
        let HeaderValue::Vias(vias) = parse_multiple_vias(
            b"SIP/2.0/UDP one.example;branch=z9hG4bK1, SIP/2.0/TCP two.example;branch=z9hG4bK2",
        )
        .unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(vias.len(), 2);
        assert_eq!(vias[0].sent_by.host, Bytes::from_static(b"one.example"));
        assert_eq!(vias[1].protocol, Protocol::Tcp);
    }

    #[test]
    fn via_errors() {
        assert_eq!(
            parse_multiple_vias(b"HTTP/1.1/TCP host"),
            Err(ParseError::UnknownVersion)
        );
        assert_eq!(
            parse_multiple_vias(b"SIP/2.0/"),
            Err(ParseError::MissingSentProtocol)
        );
        assert_eq!(
            parse_multiple_vias(b"SIP/2.0/UDP"),
            Err(ParseError::MissingSentby)
        );
        assert_eq!(
            parse_multiple_vias(b"SIP/2.0/UDP host:port"),
            Err(ParseError::InvalidSentby)
        );
        assert_eq!(
            parse_multiple_vias(b"SIP/x.0/UDP host"),
            Err(ParseError::MalformedVersionNumber)
        );
    }
}
