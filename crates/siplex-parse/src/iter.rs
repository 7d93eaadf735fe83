// siplex - SIP message parsing for Rust
// Copyright (C) 2026 The Siplex Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pass iterators over header lines, delimited values, and
//! parameter pairs.
//!
//! All iterators walk half-open byte ranges without copying; only the
//! parameter iterators stage an owned buffer, and then only while
//! unquoting a value. Yielded slices must not be retained past the next
//! advance when they may point at that staging buffer.

use crate::text::{is_lws, is_quote, is_token, strict_unquote, trim_lws, unquote};
use crate::tokenizer::StringTokenizer;

/// Iterates over `name: values` header lines in an already-unfolded block.
///
/// Malformed lines (no colon, empty name, leading LWS before the name,
/// non-token name bytes) are silently skipped: hostile peers can inject
/// junk lines without aborting the parse.
pub struct HeadersIterator<'a> {
    lines: StringTokenizer<'a>,
}

impl<'a> HeadersIterator<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            lines: StringTokenizer::new(input, b"\r\n"),
        }
    }
}

impl<'a> Iterator for HeadersIterator<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        while self.lines.get_next() {
            let line = self.lines.token();
            let Some(colon) = line.iter().position(|&c| c == b':') else {
                continue; // skip malformed header
            };
            let name_raw = &line[..colon];
            // A name starting with LWS would be a line continuation; those
            // are joined before this iterator runs, so the line is invalid.
            if name_raw.is_empty() || is_lws(name_raw[0]) {
                continue;
            }
            let name = trim_lws(name_raw);
            if !is_token(name) {
                continue; // skip malformed header
            }
            let values = trim_lws(&line[colon + 1..]);
            return Some((name, values));
        }
        None
    }
}

/// Iterates over delimited values in a header, skipping quoted delimiters.
///
/// LWS is trimmed from each value and empty values are bypassed.
pub struct ValuesIterator<'a> {
    values: StringTokenizer<'a>,
}

impl<'a> ValuesIterator<'a> {
    pub fn new(input: &'a [u8], delimiter: u8) -> Self {
        let mut values = StringTokenizer::new(input, &[delimiter]);
        values.set_quote_chars(b"\"'");
        Self { values }
    }

    /// Restricts the quote characters to `"` only.
    pub fn strict_quotes(mut self) -> Self {
        self.values.set_quote_chars(b"\"");
        self
    }
}

impl<'a> Iterator for ValuesIterator<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while self.values.get_next() {
            let value = trim_lws(self.values.token());
            if !value.is_empty() {
                return Some(value);
            }
        }
        None
    }
}

/// Iterates over `;`-delimited `name[=value]` parameters.
///
/// Values are LWS-trimmed; a fully quoted value is unquoted, while a lone
/// leading quote is stripped as lenient recovery. Properties without an
/// `=` yield the whole property as the name and an empty value.
pub struct GenericParametersIterator<'a> {
    props: ValuesIterator<'a>,
    name: &'a [u8],
    raw_value: &'a [u8],
    unquoted: Vec<u8>,
    value_is_quoted: bool,
}

impl<'a> GenericParametersIterator<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            props: ValuesIterator::new(input, b';'),
            name: b"",
            raw_value: b"",
            unquoted: Vec::new(),
            value_is_quoted: false,
        }
    }

    pub fn get_next(&mut self) -> bool {
        let Some(prop) = self.props.next() else {
            return false;
        };

        let equals = prop.iter().position(|&c| c == b'=');
        let (name, value) = match equals {
            Some(e) if e != 0 => (&prop[..e], &prop[e + 1..]),
            _ => (prop, &prop[prop.len()..]),
        };

        self.name = trim_lws(name);
        let mut value = trim_lws(value);
        self.value_is_quoted = false;
        self.unquoted.clear();

        if !value.is_empty() && is_quote(value[0]) {
            if value[0] != value[value.len() - 1] || value.len() == 1 {
                // Gracefully recover from a mismatched quote.
                value = &value[1..];
            } else {
                self.value_is_quoted = true;
                self.unquoted = unquote(value);
            }
        }
        self.raw_value = value;
        true
    }

    pub fn name(&self) -> &'a [u8] {
        self.name
    }

    /// The parameter value, unquoted when it was fully quoted.
    pub fn value(&self) -> &[u8] {
        if self.value_is_quoted {
            &self.unquoted
        } else {
            self.raw_value
        }
    }

    /// The value before unquoting.
    pub fn raw_value(&self) -> &'a [u8] {
        self.raw_value
    }
}

/// Whether every pair must carry an `=value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Values {
    Required,
    Optional,
}

/// Whether mismatched quotes invalidate the iterator or are recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quotes {
    Strict,
    Lenient,
}

/// Iterates over a delimited sequence of `name=value` pairs, where the
/// value may be a token or a quoted string.
///
/// Unlike [`GenericParametersIterator`], malformed pairs invalidate the
/// iterator: it stops producing values and [`valid`](Self::valid) turns
/// false. In strict-quotes mode, mismatched or internally unescaped
/// quotes are also fatal; the lenient default recovers like the buggy
/// embedded peers this grammar has to tolerate.
pub struct NameValuePairsIterator<'a> {
    props: ValuesIterator<'a>,
    valid: bool,
    name: &'a [u8],
    raw_value: &'a [u8],
    unquoted: Vec<u8>,
    value_is_quoted: bool,
    values_optional: bool,
    strict_quotes: bool,
}

impl<'a> NameValuePairsIterator<'a> {
    /// Values required, lenient quotes.
    pub fn new(input: &'a [u8], delimiter: u8) -> Self {
        Self::with_options(input, delimiter, Values::Required, Quotes::Lenient)
    }

    pub fn with_options(
        input: &'a [u8],
        delimiter: u8,
        values: Values,
        quotes: Quotes,
    ) -> Self {
        let mut props = ValuesIterator::new(input, delimiter);
        if quotes == Quotes::Strict {
            props = props.strict_quotes();
        }
        Self {
            props,
            valid: true,
            name: b"",
            raw_value: b"",
            unquoted: Vec::new(),
            value_is_quoted: false,
            values_optional: values == Values::Optional,
            strict_quotes: quotes == Quotes::Strict,
        }
    }

    /// False once a malformed pair has been seen.
    pub fn valid(&self) -> bool {
        self.valid
    }

    fn is_quote(&self, c: u8) -> bool {
        if self.strict_quotes {
            c == b'"'
        } else {
            is_quote(c)
        }
    }

    fn invalidate(&mut self) -> bool {
        self.valid = false;
        false
    }

    pub fn get_next(&mut self) -> bool {
        if !self.valid {
            return false;
        }
        let Some(pair) = self.props.next() else {
            return false;
        };

        let equals = pair.iter().position(|&c| c == b'=');
        match equals {
            Some(0) => return self.invalidate(), // no name
            None if !self.values_optional => return self.invalidate(),
            _ => {}
        }
        if let Some(e) = equals {
            // A quote before the equals sign means the "name" was quoted.
            if pair[..e].iter().any(|&c| self.is_quote(c)) {
                return self.invalidate();
            }
        }

        let (name, value, has_value) = match equals {
            Some(e) => (&pair[..e], &pair[e + 1..], true),
            None => (pair, &pair[pair.len()..], false),
        };

        self.name = trim_lws(name);
        let mut value = trim_lws(value);
        self.value_is_quoted = false;
        self.unquoted.clear();

        if has_value && value.is_empty() {
            return self.invalidate();
        }

        if !value.is_empty() && self.is_quote(value[0]) {
            self.value_is_quoted = true;

            if self.strict_quotes {
                match strict_unquote(value) {
                    Some(unquoted) => {
                        self.unquoted = unquoted;
                        self.raw_value = value;
                        return true;
                    }
                    None => return self.invalidate(),
                }
            }

            if value[0] != value[value.len() - 1] || value.len() == 1 {
                // Mismatched quotes: keep the rest verbatim. Quoted-pairs
                // are no longer unquoted and an escaped final quote goes
                // undetected, matching the recovery the wire needs.
                self.value_is_quoted = false;
                value = &value[1..];
            } else {
                self.unquoted = unquote(value);
            }
        }
        self.raw_value = value;
        true
    }

    pub fn name(&self) -> &'a [u8] {
        self.name
    }

    /// The pair's value, unquoted when it was quoted.
    pub fn value(&self) -> &[u8] {
        if self.value_is_quoted {
            &self.unquoted
        } else {
            self.raw_value
        }
    }

    /// The value before unquoting (if any).
    pub fn raw_value(&self) -> &'a [u8] {
        self.raw_value
    }

    pub fn value_is_quoted(&self) -> bool {
        self.value_is_quoted
    }
}
