use proptest::prelude::*;
use std::collections::HashMap;
use vclock_core::{Relation, TruncatePolicy, VClock};

// Small actor alphabet so generated clocks overlap often.
fn arb_updates() -> impl Strategy<Value = Vec<(u8, u64)>> {
    prop::collection::vec((0u8..6, prop_oneof![Just(0u64), 0u64..1_000]), 0..24)
}

fn arb_vclock() -> impl Strategy<Value = VClock> {
    arb_updates().prop_map(|updates| {
        let mut vc = VClock::new();
        for (actor, when) in updates {
            vc.update([b'r', actor], when);
        }
        vc
    })
}

fn counters(vc: &VClock) -> HashMap<Vec<u8>, u64> {
    vc.iter().map(|e| (e.actor().as_bytes().to_vec(), e.counter())).collect()
}

/// Two-pass reference classification of `b` as seen from `a`.
fn reference_relation(a: &VClock, b: &VClock) -> Relation {
    let (ca, cb) = (counters(a), counters(b));
    let b_covers_a = ca.iter().all(|(k, v)| cb.get(k).copied().unwrap_or(0) >= *v);
    let a_covers_b = cb.iter().all(|(k, v)| ca.get(k).copied().unwrap_or(0) >= *v);
    match (b_covers_a, a_covers_b) {
        (true, true) => Relation::EQUAL,
        (true, false) => Relation::DESCENDANT,
        (false, true) => Relation::ANCESTOR,
        (false, false) => Relation::CONCURRENT,
    }
}

const SINGLES: [Relation; 4] = [Relation::EQUAL, Relation::ANCESTOR, Relation::DESCENDANT, Relation::CONCURRENT];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_compare_is_reflexive(a in arb_vclock()) {
        prop_assert!(a.compare(&a, Relation::EQUAL));
        prop_assert!(a.compare(&a.clone(), Relation::EQUAL));
        prop_assert!(!a.compare(&a, !Relation::EQUAL));
    }

    #[test]
    fn prop_ancestor_descendant_symmetry(a in arb_vclock(), b in arb_vclock()) {
        prop_assert_eq!(a.compare(&b, Relation::ANCESTOR), b.compare(&a, Relation::DESCENDANT));
        prop_assert_eq!(a.compare(&b, Relation::DESCENDANT), b.compare(&a, Relation::ANCESTOR));
        prop_assert_eq!(a.compare(&b, Relation::EQUAL), b.compare(&a, Relation::EQUAL));
        prop_assert_eq!(a.compare(&b, Relation::CONCURRENT), b.compare(&a, Relation::CONCURRENT));
    }

    #[test]
    fn prop_exactly_one_relation_holds(a in arb_vclock(), b in arb_vclock()) {
        let held = SINGLES.iter().filter(|r| a.compare(&b, **r)).count();
        prop_assert_eq!(held, 1);
        let actual = a.relation(&b);
        prop_assert!(a.compare(&b, actual));
        prop_assert!(!a.compare(&b, !actual));
    }

    #[test]
    fn prop_single_pass_matches_reference(a in arb_vclock(), b in arb_vclock()) {
        let expected = reference_relation(&a, &b);
        prop_assert_eq!(a.relation(&b), expected);
        // Every requested subset must agree with the exact relation.
        for bits in 0u8..16 {
            let wanted = Relation::from_bits_truncate(bits);
            prop_assert_eq!(a.compare(&b, wanted), wanted.intersects(expected), "wanted {:?}", wanted);
        }
    }

    #[test]
    fn prop_binary_roundtrip(a in arb_vclock()) {
        let bytes = a.to_bytes();
        prop_assert_eq!(bytes.is_empty(), a.is_empty());
        let back = VClock::from_bytes(&bytes).unwrap();
        prop_assert_eq!(back.to_bytes(), bytes);
        prop_assert!(back.compare(&a, Relation::EQUAL));
        prop_assert_eq!(back.last_update(), a.last_update());
    }

    #[test]
    fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Ok(vc) = VClock::from_bytes(&bytes) {
            let again = VClock::from_bytes(&vc.to_bytes()).unwrap();
            prop_assert!(again.compare(&vc, Relation::EQUAL));
        }
    }

    #[test]
    fn prop_merge_is_idempotent_and_dominates(a in arb_vclock(), b in arb_vclock()) {
        let mut once = a.clone();
        once.merge(&b);
        let mut twice = once.clone();
        twice.merge(&b);
        prop_assert!(twice.compare(&once, Relation::EQUAL));

        // The merged clock has seen everything either side has.
        prop_assert!(a.compare(&once, Relation::EQUAL | Relation::DESCENDANT));
        prop_assert!(b.compare(&once, Relation::EQUAL | Relation::DESCENDANT));
    }

    #[test]
    fn prop_merge_result_is_commutative(a in arb_vclock(), b in arb_vclock()) {
        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_copy_is_a_snapshot(mut a in arb_vclock(), actor in 0u8..8) {
        let snapshot = a.clone();
        let before = snapshot.to_bytes();
        a.update([b'r', actor], 7);
        prop_assert_eq!(snapshot.to_bytes(), before);
        prop_assert!(snapshot.compare(&a, Relation::DESCENDANT));
    }

    #[test]
    fn prop_truncate_honours_keep_rules(
        a in arb_vclock(),
        keep_min_n in 0usize..8,
        keep_after in 0u64..1_000,
        cut_above_n in 0usize..8,
        cut_before in 0u64..1_000,
    ) {
        let policy = TruncatePolicy { keep_min_n, keep_after, cut_above_n, cut_before };
        let before = a.to_bytes();
        let t = a.truncate(&policy);

        // Receiver untouched.
        prop_assert_eq!(a.to_bytes(), before);
        prop_assert!(t.len() >= keep_min_n.min(a.len()));
        prop_assert!(t.len() <= a.len());
        for e in a.iter() {
            if keep_after > 0 && e.last_update() > keep_after {
                prop_assert_eq!(t.counter(e.actor()), e.counter());
            }
        }
        // Survivors keep their counters, so the original descends from the cut.
        prop_assert!(t.compare(&a, Relation::EQUAL | Relation::DESCENDANT));
    }
}
