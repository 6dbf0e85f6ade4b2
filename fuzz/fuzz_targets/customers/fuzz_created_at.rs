// Run with: cargo fuzz run fuzz_created_at
// Purpose: find timestamps from the store that crash the JST conversion
#![no_main]

use libfuzzer_sys::fuzz_target;
use intake::domain::format_jst;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = format_jst(s);
    }
});
