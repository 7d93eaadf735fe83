use bytes::Bytes;

/// One Warning header value: `code agent "text"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Three-digit warn-code, 100..=999.
    pub code: u16,
    /// The warn-agent host or pseudonym.
    pub agent: Bytes,
    /// The warn-text, already unquoted.
    pub text: Bytes,
}
