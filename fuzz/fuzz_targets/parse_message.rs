// siplex - SIP message parsing for Rust
// Copyright (C) 2026 The Siplex Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![no_main]
use libfuzzer_sys::fuzz_target;
use siplex_parse::parse;

fuzz_target!(|data: &[u8]| {
    if data.len() > 16 * 1024 {
        return;
    }
    // Parsing arbitrary bytes must never panic.
    let _ = parse(data);
});
