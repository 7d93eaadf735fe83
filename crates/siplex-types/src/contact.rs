// siplex - SIP message parsing for Rust
// Copyright (C) 2026 The Siplex Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact-shaped header values (From/To/Contact/Route and friends).

use bytes::Bytes;

use crate::Params;

/// A single contact value: optional display name, address, parameters.
///
/// The address is the raw `addr-spec` bytes; no URI validation is applied
/// at this layer. Display names arrive already unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub display_name: Option<Bytes>,
    pub address: Bytes,
    pub params: Params,
}

impl Contact {
    pub fn display_name(&self) -> Option<&[u8]> {
        self.display_name.as_deref()
    }

    pub fn address(&self) -> &[u8] {
        self.address.as_ref()
    }

    /// Looks up a parameter by its lowercased name.
    pub fn get_param(&self, name: &str) -> Option<&Bytes> {
        self.params.get(name)
    }
}
