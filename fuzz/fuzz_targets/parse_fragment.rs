#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for block in subcast::fuzzing::split_blocks_input(input) {
            if let Ok(fragment) = subcast::fuzzing::parse_fragment_input(&block) {
                debug_assert_eq!(fragment.text, fragment.text.trim());
                let reparsed = subcast::fuzzing::parse_fragment_input(&fragment.to_wire_text());
                if !fragment.text.is_empty() {
                    debug_assert!(reparsed.is_ok());
                }
            }
        }
    }
});
