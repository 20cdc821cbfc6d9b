#![no_main]

// Harness: compare_merge_laws – symmetry of compare and idempotent merge over
// arbitrary update sequences.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vclock_core::{Relation, VClock};

#[derive(Arbitrary, Debug, Clone)]
struct Update(u8, u64);

#[derive(Arbitrary, Debug, Clone)]
struct Pair {
    left: Vec<Update>,
    right: Vec<Update>,
}

fn build(updates: &[Update]) -> VClock {
    let mut vc = VClock::new();
    for Update(actor, when) in updates {
        vc.update([*actor % 16], *when);
    }
    vc
}

fuzz_target!(|pair: Pair| {
    let a = build(&pair.left);
    let b = build(&pair.right);

    assert_eq!(a.compare(&b, Relation::ANCESTOR), b.compare(&a, Relation::DESCENDANT));
    assert_eq!(a.compare(&b, Relation::CONCURRENT), b.compare(&a, Relation::CONCURRENT));

    let mut merged = a.clone();
    merged.merge(&b);
    let mut twice = merged.clone();
    twice.merge(&b);
    assert!(twice.compare(&merged, Relation::EQUAL));
    assert!(a.compare(&merged, Relation::EQUAL | Relation::DESCENDANT));
});
