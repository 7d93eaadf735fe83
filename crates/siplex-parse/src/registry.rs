// siplex - SIP message parsing for Rust
// Copyright (C) 2026 The Siplex Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The header registry: one table listing every known header with its
//! optional compact letter and value grammar, resolved once at startup
//! into lookup maps.

use std::collections::HashMap;
use std::sync::OnceLock;

use bytes::Bytes;
use siplex_types::{HeaderName, HeaderValue, ParseError};

use crate::header_values as values;

/// The grammar used to parse a header's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    SingleToken,
    SingleTokenParams,
    MultipleTokens,
    MultipleTokenParams,
    SingleTypeSubtypeParams,
    MultipleTypeSubtypeParams,
    MultipleUriParams,
    SingleInteger,
    OnlyAuthParams,
    SchemeAndAuthParams,
    SingleContactParams,
    MultipleContactParams,
    StarOrMultipleContactParams,
    TrimmedUtf8,
    Cseq,
    Date,
    Timestamp,
    MimeVersion,
    RetryAfter,
    MultipleWarnings,
    MultipleVias,
}

/// One row of the header table.
pub struct HeaderDef {
    pub name: HeaderName,
    pub compact: Option<u8>,
    pub format: ValueFormat,
}

const fn def(name: HeaderName, compact: Option<u8>, format: ValueFormat) -> HeaderDef {
    HeaderDef {
        name,
        compact,
        format,
    }
}

/// Every known header, in canonical-name order.
static HEADER_TABLE: [HeaderDef; 48] = [
    def(HeaderName::Accept, None, ValueFormat::MultipleTypeSubtypeParams),
    def(HeaderName::AcceptEncoding, None, ValueFormat::MultipleTokenParams),
    def(HeaderName::AcceptLanguage, None, ValueFormat::MultipleTokenParams),
    def(HeaderName::AlertInfo, None, ValueFormat::MultipleUriParams),
    def(HeaderName::Allow, None, ValueFormat::MultipleTokens),
    def(HeaderName::AllowEvents, Some(b'u'), ValueFormat::MultipleTokens),
    def(HeaderName::AuthenticationInfo, None, ValueFormat::OnlyAuthParams),
    def(HeaderName::Authorization, None, ValueFormat::SchemeAndAuthParams),
    def(HeaderName::CallId, Some(b'i'), ValueFormat::SingleToken),
    def(HeaderName::CallInfo, None, ValueFormat::MultipleUriParams),
    def(HeaderName::Contact, Some(b'm'), ValueFormat::StarOrMultipleContactParams),
    def(HeaderName::ContentDisposition, None, ValueFormat::SingleTokenParams),
    def(HeaderName::ContentEncoding, Some(b'e'), ValueFormat::MultipleTokens),
    def(HeaderName::ContentLanguage, None, ValueFormat::MultipleTokens),
    def(HeaderName::ContentLength, Some(b'l'), ValueFormat::SingleInteger),
    def(HeaderName::ContentType, Some(b'c'), ValueFormat::SingleTypeSubtypeParams),
    def(HeaderName::Cseq, None, ValueFormat::Cseq),
    def(HeaderName::Date, None, ValueFormat::Date),
    def(HeaderName::ErrorInfo, None, ValueFormat::MultipleUriParams),
    def(HeaderName::Event, Some(b'o'), ValueFormat::SingleTokenParams),
    def(HeaderName::Expires, None, ValueFormat::SingleInteger),
    def(HeaderName::From, Some(b'f'), ValueFormat::SingleContactParams),
    def(HeaderName::InReplyTo, None, ValueFormat::MultipleTokens),
    def(HeaderName::MaxForwards, None, ValueFormat::SingleInteger),
    def(HeaderName::MimeVersion, None, ValueFormat::MimeVersion),
    def(HeaderName::MinExpires, None, ValueFormat::SingleInteger),
    def(HeaderName::Organization, None, ValueFormat::TrimmedUtf8),
    def(HeaderName::Priority, None, ValueFormat::SingleToken),
    def(HeaderName::ProxyAuthenticate, None, ValueFormat::SchemeAndAuthParams),
    def(HeaderName::ProxyAuthorization, None, ValueFormat::SchemeAndAuthParams),
    def(HeaderName::ProxyRequire, None, ValueFormat::MultipleTokens),
    def(HeaderName::RecordRoute, None, ValueFormat::MultipleContactParams),
    def(HeaderName::ReferTo, Some(b'r'), ValueFormat::SingleContactParams),
    def(HeaderName::ReferredBy, Some(b'b'), ValueFormat::SingleContactParams),
    def(HeaderName::ReplyTo, None, ValueFormat::SingleContactParams),
    def(HeaderName::Require, None, ValueFormat::MultipleTokens),
    def(HeaderName::RetryAfter, None, ValueFormat::RetryAfter),
    def(HeaderName::Route, None, ValueFormat::MultipleContactParams),
    def(HeaderName::Server, None, ValueFormat::TrimmedUtf8),
    def(HeaderName::Subject, Some(b's'), ValueFormat::TrimmedUtf8),
    def(HeaderName::Supported, Some(b'k'), ValueFormat::MultipleTokens),
    def(HeaderName::Timestamp, None, ValueFormat::Timestamp),
    def(HeaderName::To, Some(b't'), ValueFormat::SingleContactParams),
    def(HeaderName::Unsupported, None, ValueFormat::MultipleTokens),
    def(HeaderName::UserAgent, None, ValueFormat::TrimmedUtf8),
    def(HeaderName::Via, Some(b'v'), ValueFormat::MultipleVias),
    def(HeaderName::Warning, None, ValueFormat::MultipleWarnings),
    def(HeaderName::WwwAuthenticate, None, ValueFormat::SchemeAndAuthParams),
];

struct Registry {
    by_name: HashMap<&'static str, &'static HeaderDef>,
    by_compact: HashMap<u8, &'static HeaderDef>,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut by_name = HashMap::with_capacity(HEADER_TABLE.len());
        let mut by_compact = HashMap::new();
        for entry in &HEADER_TABLE {
            if let Some(name) = entry.name.as_str() {
                by_name.insert(name, entry);
            }
            if let Some(compact) = entry.compact {
                by_compact.insert(compact, entry);
            }
        }
        Registry {
            by_name,
            by_compact,
        }
    })
}

/// Finds the table entry for a raw header name.
///
/// Single-letter names try the compact alias map first; everything else
/// is canonicalized (lowercase, `-` to `_`) and looked up by name.
pub fn lookup(name: &[u8]) -> Option<&'static HeaderDef> {
    let registry = registry();
    if name.len() == 1 {
        if let Some(entry) = registry.by_compact.get(&name[0].to_ascii_lowercase()).copied() {
            return Some(entry);
        }
    }
    let canonical: String = name
        .iter()
        .map(|&b| match b {
            b'-' => '_',
            other => other.to_ascii_lowercase() as char,
        })
        .collect();
    registry.by_name.get(canonical.as_str()).copied()
}

/// Routes one raw `name: values` pair through the registered parser.
///
/// Unknown headers keep their raw name and wrap the raw value bytes in a
/// one-element list.
pub fn parse_header(name: &[u8], value: &[u8]) -> Result<(HeaderName, HeaderValue), ParseError> {
    match lookup(name) {
        Some(entry) => Ok((entry.name.clone(), parse_value(entry.format, value)?)),
        None => Ok((
            HeaderName::Other(Bytes::copy_from_slice(name)),
            HeaderValue::Raw(vec![Bytes::copy_from_slice(value)]),
        )),
    }
}

/// Dispatches raw value bytes to the parser for `format`.
pub fn parse_value(format: ValueFormat, value: &[u8]) -> Result<HeaderValue, ParseError> {
    match format {
        ValueFormat::SingleToken => values::parse_single_token(value),
        ValueFormat::SingleTokenParams => values::parse_single_token_params(value),
        ValueFormat::MultipleTokens => values::parse_multiple_tokens(value),
        ValueFormat::MultipleTokenParams => values::parse_multiple_token_params(value),
        ValueFormat::SingleTypeSubtypeParams => values::parse_single_type_subtype_params(value),
        ValueFormat::MultipleTypeSubtypeParams => {
            values::parse_multiple_type_subtype_params(value)
        }
        ValueFormat::MultipleUriParams => values::parse_multiple_uri_params(value),
        ValueFormat::SingleInteger => values::parse_single_integer(value),
        ValueFormat::OnlyAuthParams => values::parse_only_auth_params(value),
        ValueFormat::SchemeAndAuthParams => values::parse_scheme_and_auth_params(value),
        ValueFormat::SingleContactParams => values::parse_single_contact_params(value),
        ValueFormat::MultipleContactParams => values::parse_multiple_contact_params(value),
        ValueFormat::StarOrMultipleContactParams => {
            values::parse_star_or_multiple_contact_params(value)
        }
        ValueFormat::TrimmedUtf8 => values::parse_trimmed_utf8(value),
        ValueFormat::Cseq => values::parse_cseq(value),
        ValueFormat::Date => values::parse_date(value),
        ValueFormat::Timestamp => values::parse_timestamp(value),
        ValueFormat::MimeVersion => values::parse_mime_version(value),
        ValueFormat::RetryAfter => values::parse_retry_after(value),
        ValueFormat::MultipleWarnings => values::parse_multiple_warnings(value),
        ValueFormat::MultipleVias => values::parse_multiple_vias(value),
    }
}
