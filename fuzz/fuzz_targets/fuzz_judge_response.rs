#![no_main]

use libfuzzer_sys::fuzz_target;
use ojdrive::infrastructure::judge::interpret_response;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let status = u16::from_le_bytes([data[0], data[1]]) % 600;
    if let Ok(body) = std::str::from_utf8(&data[2..]) {
        if let Ok(value) = interpret_response(status, body) {
            // Whatever we accept must serialize back to a single JSON line
            let line = serde_json::to_string(&value).unwrap();
            assert!(!line.contains('\n'));
        }
    }
});
