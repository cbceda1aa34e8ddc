#![no_main]

use libfuzzer_sys::fuzz_target;
use robotparse::{ParseConfig, parser, writer};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // A model read with layout must write back to its input
        let file = parser::parse(s, &ParseConfig::default(), None);
        assert_eq!(writer::to_text(&file), s);

        // Data-only parsing must not panic either
        let _ = parser::parse(s, &ParseConfig::new().with_data_only(true), None);
    }
});
