#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(args) = subcast::fuzzing::apply_config_from_json(data) {
        debug_assert!(args.capacity.get() >= 1);
        debug_assert!(args.width.map_or(true, |width| width.get() >= 1));
    }
});
