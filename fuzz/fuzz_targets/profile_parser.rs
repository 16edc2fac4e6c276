#![no_main]

use libfuzzer_sys::fuzz_target;
use shiftcrack::profile_store::profile_from_json;
use shiftcrack::{recover_caesar_shift, ENGLISH_REFERENCE};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Recovery must always produce a decoding of the same length
        let recovery = recover_caesar_shift(input, &ENGLISH_REFERENCE);
        assert_eq!(recovery.plaintext.chars().count(), input.chars().count());

        // Any model the parser accepts must be usable for scoring
        if let Ok(profile) = profile_from_json(input) {
            let recovery = recover_caesar_shift(input, &profile);
            assert_eq!(recovery.plaintext.chars().count(), input.chars().count());
        }
    }
});
