#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(stem) = std::str::from_utf8(data) {
        // Arbitrary file stems, non-ASCII included, must never panic
        let name = iconpack::naming::pascal_case(stem);
        let _ = iconpack::naming::validate_identifier(&name);
    }
});
