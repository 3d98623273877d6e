//! Property tests across both encodings.

use crate::*;
use proptest::prelude::*;

fn arb_uuid() -> impl Strategy<Value = Uuid> {
    any::<[u8; 16]>().prop_map(Uuid::from_bytes)
}

/// Small alphabet so duplicates and ties show up often
fn arb_clustered_uuid() -> impl Strategy<Value = Uuid> {
    (0u8..6).prop_map(small_id)
}

fn arb_slice() -> impl Strategy<Value = Slice> {
    prop::option::of(prop::collection::vec(arb_clustered_uuid(), 0..20)).prop_map(Slice::from)
}

proptest! {
    #[test]
    fn prop_set_text_roundtrip(ids in prop::collection::vec(arb_uuid(), 0..24)) {
        let set = Set::from_slice(&ids);
        let mut back = Set::nil();
        back.scan(&set.value()).unwrap();
        prop_assert_eq!(back, set);
    }

    #[test]
    fn prop_slice_json_roundtrip(s in arb_slice()) {
        let json = s.to_json().unwrap();
        prop_assert_eq!(Slice::from_json(json.as_bytes()).unwrap(), s);
    }

    #[test]
    fn prop_slice_text_roundtrip(s in arb_slice()) {
        let mut back = Slice::new();
        back.scan(&s.value()).unwrap();
        prop_assert_eq!(back, s);
    }

    #[test]
    fn prop_sorted_clone_is_ordered_permutation(s in arb_slice()) {
        let sorted = s.sorted_clone();
        for pair in sorted.as_slice().windows(2) {
            prop_assert!(!uuidcol::less(&pair[1], &pair[0]));
        }
        prop_assert_eq!(sorted.to_set(), s.to_set());
        prop_assert_eq!(sorted.len(), s.len());
        prop_assert_eq!(sorted.is_nil(), s.is_nil());
    }

    #[test]
    fn prop_diff_symmetry(
        a in prop::collection::vec(arb_clustered_uuid(), 0..10),
        b in prop::collection::vec(arb_clustered_uuid(), 0..10),
    ) {
        let (a, b) = (Set::from_slice(&a), Set::from_slice(&b));
        prop_assert_eq!(a.diff(&b), b.diff(&a));
        prop_assert!(a.diff(&a).is_empty());
    }

    #[test]
    fn prop_null_uuid_roundtrip(id in arb_uuid(), valid in any::<bool>()) {
        let n = if valid { NullUuid::from(id) } else { NullUuid::default() };

        let json = n.to_json().unwrap();
        prop_assert_eq!(NullUuid::from_json(json.as_bytes()).unwrap(), n);

        let mut back = NullUuid::default();
        back.scan(&n.value()).unwrap();
        prop_assert_eq!(back, n);
    }
}
