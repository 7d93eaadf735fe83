use std::fmt;

use bytes::Bytes;

/// SIP request methods from the IANA method registry.
///
/// Methods outside the registry are preserved as their lowercased bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Ack,
    Bye,
    Cancel,
    Info,
    Invite,
    Message,
    Notify,
    Options,
    Prack,
    Publish,
    Pull,
    Push,
    Refer,
    Register,
    Store,
    Subscribe,
    Update,
    Unknown(Bytes),
}

impl Method {
    /// Parses a method token case-insensitively, keeping unregistered
    /// methods as lowercased bytes.
    pub fn from_token(token: &[u8]) -> Method {
        let lower: Vec<u8> = token.iter().map(|b| b.to_ascii_lowercase()).collect();
        match lower.as_slice() {
            b"ack" => Method::Ack,
            b"bye" => Method::Bye,
            b"cancel" => Method::Cancel,
            b"info" => Method::Info,
            b"invite" => Method::Invite,
            b"message" => Method::Message,
            b"notify" => Method::Notify,
            b"options" => Method::Options,
            b"prack" => Method::Prack,
            b"publish" => Method::Publish,
            b"pull" => Method::Pull,
            b"push" => Method::Push,
            b"refer" => Method::Refer,
            b"register" => Method::Register,
            b"store" => Method::Store,
            b"subscribe" => Method::Subscribe,
            b"update" => Method::Update,
            _ => Method::Unknown(Bytes::from(lower)),
        }
    }

    /// Returns the canonical lowercase identifier, or `None` for
    /// unregistered methods.
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            Method::Ack => Some("ack"),
            Method::Bye => Some("bye"),
            Method::Cancel => Some("cancel"),
            Method::Info => Some("info"),
            Method::Invite => Some("invite"),
            Method::Message => Some("message"),
            Method::Notify => Some("notify"),
            Method::Options => Some("options"),
            Method::Prack => Some("prack"),
            Method::Publish => Some("publish"),
            Method::Pull => Some("pull"),
            Method::Push => Some("push"),
            Method::Refer => Some("refer"),
            Method::Register => Some("register"),
            Method::Store => Some("store"),
            Method::Subscribe => Some("subscribe"),
            Method::Update => Some("update"),
            Method::Unknown(_) => None,
        }
    }

    /// Returns the lowercase identifier as bytes, for both registered and
    /// unregistered methods.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Method::Unknown(token) => token.as_ref(),
            known => known.as_str().unwrap_or_default().as_bytes(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.as_bytes() {
            // Method bytes are ISO-8859-1; write one char per byte.
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
