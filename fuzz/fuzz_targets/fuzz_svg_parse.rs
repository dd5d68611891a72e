#![no_main]

use libfuzzer_sys::fuzz_target;

use iconpack::adapters::component::synthesize;
use iconpack::models::Format;

fuzz_target!(|data: &[u8]| {
    if let Ok(markup) = std::str::from_utf8(data) {
        // Arbitrary markup must synthesize or return an error, never panic
        let path = std::path::Path::new("fuzz.svg");
        if iconpack::svg::parse(markup, path).is_ok() {
            let _ = synthesize(markup, "Fuzz", Format::Esm, false, path);
            let _ = synthesize(markup, "Fuzz", Format::Cjs, true, path);
        }
    }
});
