// siplex - SIP message parsing for Rust
// Copyright (C) 2026 The Siplex Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core SIP message types shared by the siplex parser.
//!
//! This crate defines the data model produced by parsing a SIP message
//! head: the start line ([`RequestLine`] / [`StatusLine`]), the ordered
//! [`Headers`] map, the per-grammar [`HeaderValue`] variants, and the
//! closed identifier sets for [`Method`], [`Protocol`], and [`HeaderName`].
//!
//! Text handling follows two rules throughout:
//! - canonical ASCII identifiers (lowercased names, tokens) use
//!   [`SmolStr`](smol_str::SmolStr);
//! - free-form ISO-8859-1 value bytes (URIs, display names, reason
//!   phrases) use [`Bytes`](bytes::Bytes) and are copied out of the input
//!   buffer, never borrowed.
//!
//! Errors are the atom-like codes of [`ParseError`]; see
//! [`ParseError::code`] for the stable textual form.

pub mod contact;
pub mod date_time;
pub mod error;
pub mod header_name;
pub mod header_value;
pub mod message;
pub mod method;
pub mod protocol;
pub mod via;
pub mod warning;

pub use contact::Contact;
pub use date_time::SipDateTime;
pub use error::ParseError;
pub use header_name::HeaderName;
pub use header_value::{Challenge, HeaderValue, MediaType, Params, UriParams};
pub use message::{Headers, Message, RequestLine, StartLine, StatusLine};
pub use method::Method;
pub use protocol::Protocol;
pub use via::{HostPort, Via};
pub use warning::Warning;
