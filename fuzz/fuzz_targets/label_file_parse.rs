//! Fuzz target for label-file parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 text to the label-file parser,
//! checking for panics, crashes, or hangs. Malformed lines must come back
//! as warnings, never failures.

#![no_main]

use boxmark::label::io_yolo::fuzz_parse_labels;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    fuzz_parse_labels(text);
});
