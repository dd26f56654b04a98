#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(args) = subcast::fuzzing::apply_config_from_toml(input) {
            debug_assert!(args.capacity.get() >= 1);
            debug_assert!(args.max_lines.get() >= 1);
            debug_assert!(args.tail.get() >= 1);
            debug_assert!(!args.fade_in.is_zero());
            debug_assert!(!args.hide_after.is_zero());
            debug_assert!(!args.fade_out.is_zero());
            debug_assert!(!args.frame_interval.is_zero());
        }
    }
});
