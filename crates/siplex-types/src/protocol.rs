use std::fmt;

use bytes::Bytes;

/// Transport protocols that may appear in a Via `sent-protocol`.
///
/// Unregistered transports are preserved as their lowercased bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Protocol {
    Amqp,
    Dccp,
    Dtls,
    Sctp,
    Stomp,
    Tcp,
    Tls,
    Udp,
    Ws,
    Wss,
    Unknown(Bytes),
}

impl Protocol {
    /// Parses a transport token case-insensitively.
    pub fn from_token(token: &[u8]) -> Protocol {
        let lower: Vec<u8> = token.iter().map(|b| b.to_ascii_lowercase()).collect();
        match lower.as_slice() {
            b"amqp" => Protocol::Amqp,
            b"dccp" => Protocol::Dccp,
            b"dtls" => Protocol::Dtls,
            b"sctp" => Protocol::Sctp,
            b"stomp" => Protocol::Stomp,
            b"tcp" => Protocol::Tcp,
            b"tls" => Protocol::Tls,
            b"udp" => Protocol::Udp,
            b"ws" => Protocol::Ws,
            b"wss" => Protocol::Wss,
            _ => Protocol::Unknown(Bytes::from(lower)),
        }
    }

    /// Canonical uppercase transport name, or `None` when unregistered.
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            Protocol::Amqp => Some("AMQP"),
            Protocol::Dccp => Some("DCCP"),
            Protocol::Dtls => Some("DTLS"),
            Protocol::Sctp => Some("SCTP"),
            Protocol::Stomp => Some("STOMP"),
            Protocol::Tcp => Some("TCP"),
            Protocol::Tls => Some("TLS"),
            Protocol::Udp => Some("UDP"),
            Protocol::Ws => Some("WS"),
            Protocol::Wss => Some("WSS"),
            Protocol::Unknown(_) => None,
        }
    }

    /// Default port implied when a Via sent-by omits one.
    pub const fn default_port(&self) -> i32 {
        match self {
            Protocol::Udp | Protocol::Tcp => 5060,
            Protocol::Tls => 5061,
            _ => 0,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Unknown(token) => {
                for &b in token.as_ref() {
                    write!(f, "{}", b as char)?;
                }
                Ok(())
            }
            known => f.write_str(known.as_str().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_transports_resolve() {
        assert_eq!(Protocol::from_token(b"UDP"), Protocol::Udp);
        assert_eq!(Protocol::from_token(b"udp"), Protocol::Udp);
        assert_eq!(Protocol::from_token(b"wss"), Protocol::Wss);
        assert_eq!(Protocol::from_token(b"Stomp"), Protocol::Stomp);
    }

    #[test]
    fn unknown_transport_keeps_lowercased_bytes() {
        let p = Protocol::from_token(b"QUIC");
        assert_eq!(p, Protocol::Unknown(Bytes::from_static(b"quic")));
        assert_eq!(p.default_port(), 0);
    }

    #[test]
    fn default_ports() {
        assert_eq!(Protocol::Udp.default_port(), 5060);
        assert_eq!(Protocol::Tcp.default_port(), 5060);
        assert_eq!(Protocol::Tls.default_port(), 5061);
        assert_eq!(Protocol::Sctp.default_port(), 0);
    }
}
