#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any config content
    let _ = beaver::Config::from_yaml_str(data);
    let _ = beaver::Config::from_json_str(data);
});
