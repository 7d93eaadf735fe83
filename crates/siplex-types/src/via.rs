// siplex - SIP message parsing for Rust
// Copyright (C) 2026 The Siplex Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Via header values (RFC 3261 §20.42).

use bytes::Bytes;

use crate::{Params, Protocol};

/// A `host[:port]` pair as found in a Via sent-by.
///
/// IPv6 hosts are stored without their surrounding brackets. A port of
/// `-1` means "absent"; the Via parser substitutes the transport default
/// before the value reaches callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort {
    pub host: Bytes,
    pub port: i32,
}

impl HostPort {
    pub fn new(host: impl Into<Bytes>, port: i32) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// One parsed Via value: protocol version, transport, sent-by, parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Via {
    pub version: (u8, u8),
    pub protocol: Protocol,
    pub sent_by: HostPort,
    pub params: Params,
}

impl Via {
    /// Looks up a parameter by its lowercased name.
    pub fn get_param(&self, name: &str) -> Option<&Bytes> {
        self.params.get(name)
    }
}
