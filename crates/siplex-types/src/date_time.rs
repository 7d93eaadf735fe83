/// A calendar timestamp normalized to UTC, as produced by the Date parser.
///
/// The microsecond field is a `(value, precision)` pair: precision is `5`
/// when the value is non-zero and `0` otherwise, a display hint consumers
/// rely on. Offsets are always zero after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: (u32, u8),
    pub utc_offset: i32,
    pub std_offset: i32,
}

impl SipDateTime {
    pub const fn time_zone(&self) -> &'static str {
        "Etc/UTC"
    }

    pub const fn zone_abbr(&self) -> &'static str {
        "UTC"
    }
}
