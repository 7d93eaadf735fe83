#![no_main]
use libfuzzer_sys::fuzz_target;
use siplex_parse::parse_star_or_multiple_contact_params;

fuzz_target!(|data: &[u8]| {
    if data.len() > 512 {
        return;
    }
    let _ = parse_star_or_multiple_contact_params(data);
});
