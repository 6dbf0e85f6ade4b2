// Run with: cargo fuzz run fuzz_call_id
#![no_main]

use libfuzzer_sys::fuzz_target;
use intake::domain::CallId;
use intake::utils::escape_html;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(call_id) = CallId::parse(s.to_string()) {
            // The id is echoed back into the lookup page.
            assert!(!escape_html(call_id.as_ref()).contains('<'));
        }
    }
});
