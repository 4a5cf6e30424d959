#![no_main]

use libfuzzer_sys::fuzz_target;
use srec_core::{decode_str, parse_record};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(records) = decode_str(text) {
        for record in &records {
            assert!(record.data.len() < 256);
        }
    }

    for line in text.lines() {
        let _ = parse_record(line);
    }
});
