#![no_main]

// Harness: decode_bytes – arbitrary input must either fail cleanly or yield a
// clock whose encoding decodes back to the same bytes.

use libfuzzer_sys::fuzz_target;
use vclock_core::{Relation, VClock};

fuzz_target!(|bytes: &[u8]| {
    let Ok(vc) = VClock::from_bytes(bytes) else {
        return;
    };
    let encoded = vc.to_bytes();
    let again = VClock::from_bytes(&encoded).expect("re-encoded clock must decode");
    assert_eq!(again.to_bytes(), encoded);
    assert!(again.compare(&vc, Relation::EQUAL));
});
