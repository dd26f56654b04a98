#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let ms = subcast::fuzzing::parse_timestamp_input(input);
        let formatted = subcast::fragment::format_timestamp(ms);
        if ms < 360_000_000 {
            debug_assert_eq!(subcast::fuzzing::parse_timestamp_input(&formatted), ms);
        }
        if let Ok(duration) = subcast::fuzzing::parse_duration_input(input) {
            debug_assert!(!duration.is_zero());
        }
    }
});
