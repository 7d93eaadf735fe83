use std::collections::BTreeMap;

use bytes::Bytes;
use smol_str::SmolStr;

use crate::{Contact, Method, ParseError, SipDateTime, Via, Warning};

/// Header parameters: lowercased names mapped to verbatim value bytes.
///
/// Quoted values arrive already unquoted; a value-less parameter maps to
/// empty bytes.
pub type Params = BTreeMap<SmolStr, Bytes>;

/// A `type/subtype` media descriptor with parameters.
///
/// `value` is `None` when the header value was empty, which is accepted
/// for Accept-style headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    pub value: Option<(SmolStr, SmolStr)>,
    pub params: Params,
}

/// An `<uri>` reference with parameters (Alert-Info, Call-Info, Error-Info).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParams {
    pub uri: Bytes,
    pub params: Params,
}

/// An authentication scheme with its comma-separated parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub scheme: Bytes,
    pub params: Params,
}

/// The parsed value of a header, discriminated by the header's grammar.
///
/// Multi-value grammars produce list variants; repeated occurrences of the
/// same header merge by appending in document order. Scalar variants do
/// not merge and repeating them is a parse error.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    /// A single token run (Call-ID, Priority).
    Token(Bytes),
    /// A token followed by `;` parameters (Content-Disposition, Event).
    TokenParams(Bytes, Params),
    /// A comma-separated list of tokens (Allow, Supported, Require).
    Tokens(Vec<Bytes>),
    /// A comma-separated list of token + parameters (Accept-Encoding).
    TokensParams(Vec<(Bytes, Params)>),
    /// `type/subtype` with parameters (Content-Type).
    MediaType(MediaType),
    /// Comma-separated media descriptors (Accept).
    MediaTypes(Vec<MediaType>),
    /// Comma-separated `<uri>` references (Alert-Info, Call-Info).
    Uris(Vec<UriParams>),
    /// A decimal integer (Content-Length, Max-Forwards, Expires).
    Integer(i32),
    /// Bare auth parameters with no scheme (Authentication-Info).
    AuthParams(Params),
    /// Scheme + parameters, one element per header occurrence
    /// (Authorization, WWW-Authenticate).
    Challenges(Vec<Challenge>),
    /// A single contact value (From, To, Refer-To).
    Contact(Contact),
    /// Comma-separated contact values (Route, Record-Route).
    Contacts(Vec<Contact>),
    /// The literal `*` accepted by Contact.
    Star,
    /// Free-form text, LWS-trimmed (Subject, Server, User-Agent).
    Text(Bytes),
    /// `sequence method` (CSeq).
    CSeq(i32, Method),
    /// An RFC 2616 date normalized to UTC.
    Date(SipDateTime),
    /// `timestamp [delay]` (Timestamp). The delay defaults to zero.
    Timestamp(f64, f64),
    /// `major.minor` (MIME-Version).
    MimeVersion(i32, i32),
    /// `delta-seconds [(comment)] [;params]` (Retry-After).
    RetryAfter(i32, Bytes, Params),
    /// Comma-separated warning values (Warning).
    Warnings(Vec<Warning>),
    /// Comma-separated Via values (Via).
    Vias(Vec<Via>),
    /// Unknown header: the raw value bytes as a one-element list.
    Raw(Vec<Bytes>),
}

impl HeaderValue {
    /// Appends `other` to this value when both are list-shaped.
    ///
    /// Used when the same header name occurs more than once: elements are
    /// concatenated in document order. Non-list values cannot be repeated.
    pub fn merge(&mut self, other: HeaderValue) -> Result<(), ParseError> {
        use HeaderValue::*;
        match (self, other) {
            (Tokens(a), Tokens(b)) => a.extend(b),
            (TokensParams(a), TokensParams(b)) => a.extend(b),
            (MediaTypes(a), MediaTypes(b)) => a.extend(b),
            (Uris(a), Uris(b)) => a.extend(b),
            (Challenges(a), Challenges(b)) => a.extend(b),
            (Contacts(a), Contacts(b)) => a.extend(b),
            (Warnings(a), Warnings(b)) => a.extend(b),
            (Vias(a), Vias(b)) => a.extend(b),
            (Raw(a), Raw(b)) => a.extend(b),
            _ => return Err(ParseError::MultipleDefinition),
        }
        Ok(())
    }
}
