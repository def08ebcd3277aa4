#![no_main]

use libfuzzer_sys::fuzz_target;

use shipmate::models::ReleaseVersion;

fuzz_target!(|data: &[u8]| {
    if let Ok(tag) = std::str::from_utf8(data) {
        // Fuzz release tag parsing - this should never panic
        let _ = tag.parse::<ReleaseVersion>();
    }
});
