use hashskip::{HashedSkipList, KeyScope, LevelGenerator, SkipListConfig};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

fn build(
    patterns: &[String],
    max_level: usize,
    prefix_length: usize,
    key_scope: KeyScope,
    seed: u64,
) -> HashedSkipList {
    let config = SkipListConfig::new(max_level, prefix_length)
        .with_key_scope(key_scope)
        .with_seed(seed);
    let mut list = HashedSkipList::with_config(config).unwrap();
    list.extend(patterns.iter().map(String::as_str));
    list
}

fn key_scope() -> impl Strategy<Value = KeyScope> {
    prop_oneof![Just(KeyScope::FullString), Just(KeyScope::Prefix)]
}

proptest! {
    #[test]
    fn level_zero_is_ordered_and_complete(
        patterns in prop::collection::vec("[a-d]{0,6}", 0..200),
        max_level in 1usize..12,
        prefix_length in 1usize..4,
        scope in key_scope(),
        seed in any::<u64>(),
    ) {
        let list = build(&patterns, max_level, prefix_length, scope, seed);
        let accepted = patterns.iter().filter(|p| p.len() >= prefix_length).count();

        let keys = list.iter().map(|e| e.key).collect::<Vec<_>>();
        prop_assert_eq!(keys.len(), accepted);
        prop_assert_eq!(list.len(), accepted);
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn towers_are_nested_and_bounded(
        patterns in prop::collection::vec("[a-z]{3,10}", 1..150),
        max_level in 1usize..10,
        seed in any::<u64>(),
    ) {
        let list = build(&patterns, max_level, 3, KeyScope::FullString, seed);
        prop_assert!(list.current_level() >= 1);
        prop_assert!(list.current_level() <= max_level);

        for entry in list.iter() {
            prop_assert!(entry.level >= 1 && entry.level <= max_level);
        }
        for level in 1..list.current_level() {
            let upper = list.iter_level(level).collect::<Vec<_>>();
            let lower = list.iter_level(level - 1).collect::<Vec<_>>();
            prop_assert!(upper.windows(2).all(|w| w[0].key <= w[1].key));
            // every tower reaching this level is also linked one level down
            let mut lower_iter = lower.iter();
            for entry in &upper {
                prop_assert!(lower_iter.any(|e| e == entry));
            }
        }
    }

    #[test]
    fn membership_matches_model(
        patterns in prop::collection::vec("[a-c]{1,5}", 0..120),
        queries in prop::collection::vec("[a-c]{0,5}", 0..60),
        prefix_length in 1usize..4,
        scope in key_scope(),
        seed in any::<u64>(),
    ) {
        let list = build(&patterns, 8, prefix_length, scope, seed);
        let model = patterns
            .iter()
            .filter(|p| p.len() >= prefix_length)
            .map(String::as_str)
            .collect::<FxHashSet<_>>();

        for p in &patterns {
            prop_assert_eq!(list.contains(p), p.len() >= prefix_length);
        }
        for q in &queries {
            prop_assert_eq!(list.contains(q), model.contains(q.as_str()));
        }
    }

    #[test]
    fn clear_matches_fresh_list(
        patterns in prop::collection::vec("[a-z]{3,8}", 0..80),
        seed in any::<u64>(),
    ) {
        let mut list = build(&patterns, 10, 3, KeyScope::FullString, seed);
        list.clear();
        list.clear();

        prop_assert_eq!(list.len(), 0);
        prop_assert_eq!(list.current_level(), 0);
        prop_assert_eq!(list.iter().count(), 0);
        for p in &patterns {
            prop_assert!(!list.contains(p));
        }
    }

    #[test]
    fn random_level_never_exceeds_max(
        max_level in 1usize..33,
        seed in any::<u64>(),
    ) {
        let mut levels = LevelGenerator::new(max_level, ChaCha8Rng::seed_from_u64(seed));
        for _ in 0..500 {
            let level = levels.random_level();
            prop_assert!(level >= 1 && level <= max_level);
        }
    }
}
