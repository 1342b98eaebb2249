use std::collections::BTreeSet;

use code_obfuscator::rename_map::{build_rename_map, NameGenerator, RenameError};
use proptest::prelude::*;

fn name_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn values_are_pairwise_distinct() {
    let names: BTreeSet<String> = (0..200).map(|i| format!("name{i}")).collect();
    let mut generator = NameGenerator::new(Some(1), 4);
    let map = build_rename_map(&names, &BTreeSet::new(), &mut generator).unwrap();
    let values: BTreeSet<&String> = map.values().collect();
    assert_eq!(values.len(), map.len());
    assert_eq!(map.len(), names.len());
}

#[test]
fn values_do_not_collide_with_existing_names() {
    let names = name_set(&["alpha", "beta", "_a1b2"]);
    let mut generator = NameGenerator::new(Some(2), 4);
    let map = build_rename_map(&names, &BTreeSet::new(), &mut generator).unwrap();
    for value in map.values() {
        assert!(!names.contains(value));
    }
}

#[test]
fn values_have_fixed_shape() {
    let names = name_set(&["calculate_salary"]);
    let mut generator = NameGenerator::new(Some(3), 6);
    let map = build_rename_map(&names, &BTreeSet::new(), &mut generator).unwrap();
    let value = &map["calculate_salary"];
    assert!(value.starts_with('_'));
    assert_eq!(value.len(), 7);
    assert!(value[1..].chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn same_seed_gives_same_map() {
    let names: BTreeSet<String> = (0..50).map(|i| format!("sym{i}")).collect();
    let mut g1 = NameGenerator::new(Some(42), 4);
    let mut g2 = NameGenerator::new(Some(42), 4);
    let m1 = build_rename_map(&names, &BTreeSet::new(), &mut g1).unwrap();
    let m2 = build_rename_map(&names, &BTreeSet::new(), &mut g2).unwrap();
    assert_eq!(m1, m2);
}

#[test]
fn excluded_names_are_not_mapped() {
    let names = name_set(&["main", "helper"]);
    let exclude = name_set(&["main"]);
    let mut generator = NameGenerator::new(Some(4), 4);
    let map = build_rename_map(&names, &exclude, &mut generator).unwrap();
    assert!(!map.contains_key("main"));
    assert!(map.contains_key("helper"));
}

#[test]
fn exhausted_namespace_fails_instead_of_duplicating() {
    // Length 1 gives 62 possible identifiers; 100 inputs cannot all fit.
    let names: BTreeSet<String> = (0..100).map(|i| format!("crowded{i}")).collect();
    let mut generator = NameGenerator::new(Some(5), 1);
    let err = build_rename_map(&names, &BTreeSet::new(), &mut generator).unwrap_err();
    assert!(matches!(err, RenameError::Collision { .. }));
}

proptest! {
    #[test]
    fn rename_map_is_always_collision_free(
        names in prop::collection::btree_set("[a-z_]{3,10}", 1..60),
        seed in any::<u64>(),
    ) {
        let mut generator = NameGenerator::new(Some(seed), 4);
        let map = build_rename_map(&names, &BTreeSet::new(), &mut generator).unwrap();
        let values: BTreeSet<&String> = map.values().collect();
        prop_assert_eq!(values.len(), map.len());
        for value in map.values() {
            prop_assert!(!names.contains(value));
            prop_assert!(value.starts_with('_'));
        }
    }
}
