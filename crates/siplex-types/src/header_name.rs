use std::fmt;

use bytes::Bytes;

/// Canonical identifier of a SIP header field.
///
/// Known headers form a closed set; anything else is carried verbatim in
/// [`HeaderName::Other`]. The canonical textual form is the lowercased
/// name with `-` replaced by `_` (e.g. `content_length`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HeaderName {
    Accept,
    AcceptEncoding,
    AcceptLanguage,
    AlertInfo,
    Allow,
    AllowEvents,
    AuthenticationInfo,
    Authorization,
    CallId,
    CallInfo,
    Contact,
    ContentDisposition,
    ContentEncoding,
    ContentLanguage,
    ContentLength,
    ContentType,
    Cseq,
    Date,
    ErrorInfo,
    Event,
    Expires,
    From,
    InReplyTo,
    MaxForwards,
    MimeVersion,
    MinExpires,
    Organization,
    Priority,
    ProxyAuthenticate,
    ProxyAuthorization,
    ProxyRequire,
    RecordRoute,
    ReferTo,
    ReferredBy,
    ReplyTo,
    Require,
    RetryAfter,
    Route,
    Server,
    Subject,
    Supported,
    Timestamp,
    To,
    Unsupported,
    UserAgent,
    Via,
    Warning,
    WwwAuthenticate,
    /// A header outside the known set; the raw name bytes are kept.
    Other(Bytes),
}

impl HeaderName {
    /// Returns the canonical name, or `None` for unknown headers.
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            HeaderName::Accept => Some("accept"),
            HeaderName::AcceptEncoding => Some("accept_encoding"),
            HeaderName::AcceptLanguage => Some("accept_language"),
            HeaderName::AlertInfo => Some("alert_info"),
            HeaderName::Allow => Some("allow"),
            HeaderName::AllowEvents => Some("allow_events"),
            HeaderName::AuthenticationInfo => Some("authentication_info"),
            HeaderName::Authorization => Some("authorization"),
            HeaderName::CallId => Some("call_id"),
            HeaderName::CallInfo => Some("call_info"),
            HeaderName::Contact => Some("contact"),
            HeaderName::ContentDisposition => Some("content_disposition"),
            HeaderName::ContentEncoding => Some("content_encoding"),
            HeaderName::ContentLanguage => Some("content_language"),
            HeaderName::ContentLength => Some("content_length"),
            HeaderName::ContentType => Some("content_type"),
            HeaderName::Cseq => Some("cseq"),
            HeaderName::Date => Some("date"),
            HeaderName::ErrorInfo => Some("error_info"),
            HeaderName::Event => Some("event"),
            HeaderName::Expires => Some("expires"),
            HeaderName::From => Some("from"),
            HeaderName::InReplyTo => Some("in_reply_to"),
            HeaderName::MaxForwards => Some("max_forwards"),
            HeaderName::MimeVersion => Some("mime_version"),
            HeaderName::MinExpires => Some("min_expires"),
            HeaderName::Organization => Some("organization"),
            HeaderName::Priority => Some("priority"),
            HeaderName::ProxyAuthenticate => Some("proxy_authenticate"),
            HeaderName::ProxyAuthorization => Some("proxy_authorization"),
            HeaderName::ProxyRequire => Some("proxy_require"),
            HeaderName::RecordRoute => Some("record_route"),
            HeaderName::ReferTo => Some("refer_to"),
            HeaderName::ReferredBy => Some("referred_by"),
            HeaderName::ReplyTo => Some("reply_to"),
            HeaderName::Require => Some("require"),
            HeaderName::RetryAfter => Some("retry_after"),
            HeaderName::Route => Some("route"),
            HeaderName::Server => Some("server"),
            HeaderName::Subject => Some("subject"),
            HeaderName::Supported => Some("supported"),
            HeaderName::Timestamp => Some("timestamp"),
            HeaderName::To => Some("to"),
            HeaderName::Unsupported => Some("unsupported"),
            HeaderName::UserAgent => Some("user_agent"),
            HeaderName::Via => Some("via"),
            HeaderName::Warning => Some("warning"),
            HeaderName::WwwAuthenticate => Some("www_authenticate"),
            HeaderName::Other(_) => None,
        }
    }

    /// Canonical name for known headers, raw name bytes otherwise.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            HeaderName::Other(raw) => raw.as_ref(),
            known => known.as_str().unwrap_or_default().as_bytes(),
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.as_bytes() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_use_underscores() {
        assert_eq!(HeaderName::ContentLength.as_str(), Some("content_length"));
        assert_eq!(HeaderName::WwwAuthenticate.as_str(), Some("www_authenticate"));
        assert_eq!(HeaderName::Cseq.as_str(), Some("cseq"));
    }

    #[test]
    fn other_keeps_raw_bytes() {
        let name = HeaderName::Other(Bytes::from_static(b"X-Custom"));
        assert_eq!(name.as_str(), None);
        assert_eq!(name.as_bytes(), b"X-Custom");
        assert_eq!(name.to_string(), "X-Custom");
    }
}
