#![no_main]
use libfuzzer_sys::fuzz_target;
use siplex_parse::parse_multiple_vias;

fuzz_target!(|data: &[u8]| {
    if data.len() > 512 {
        return;
    }
    let _ = parse_multiple_vias(data);
});
