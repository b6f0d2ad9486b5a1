//! Property tests for dealing the question pool (pure domain, no DB).
//!
//! Properties tested:
//! - Every question is assigned exactly once
//! - Per-player counts differ by at most one, larger counts first
//! - The same seed yields the same plan

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::assignment::{plan_assignments, MIN_PLAYERS};
use crate::domain::random::SeededRandom;
use crate::domain::test_prelude;

fn roster_and_pool() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    (MIN_PLAYERS..8usize, 1..40usize).prop_map(|(players, questions)| {
        let roster = (1..=players as i32).collect();
        let pool = (100..100 + questions as i32).collect();
        (roster, pool)
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the plan is a partition of the pool
    #[test]
    fn prop_every_question_assigned_once(
        (roster, pool) in roster_and_pool(),
        seed in any::<u64>(),
    ) {
        let plan = plan_assignments(&roster, pool.clone(), &mut SeededRandom::new(seed)).unwrap();

        let assigned: Vec<i32> = plan.links().map(|(_, q)| q).collect();
        prop_assert_eq!(assigned.len(), pool.len());

        let unique: BTreeSet<i32> = assigned.iter().copied().collect();
        let expected: BTreeSet<i32> = pool.iter().copied().collect();
        prop_assert_eq!(unique, expected);
    }

    /// Property: counts are balanced, remainder goes to the first players
    #[test]
    fn prop_counts_balanced_front_loaded(
        (roster, pool) in roster_and_pool(),
        seed in any::<u64>(),
    ) {
        let n = pool.len();
        let k = roster.len();
        let plan = plan_assignments(&roster, pool, &mut SeededRandom::new(seed)).unwrap();

        let ids: Vec<i32> = plan.per_player.iter().map(|(p, _)| *p).collect();
        prop_assert_eq!(ids, roster);

        for (i, (_, qs)) in plan.per_player.iter().enumerate() {
            let expected = n / k + usize::from(i < n % k);
            prop_assert_eq!(qs.len(), expected);
        }
    }

    /// Property: seeded plans are reproducible
    #[test]
    fn prop_same_seed_same_plan(
        (roster, pool) in roster_and_pool(),
        seed in any::<u64>(),
    ) {
        let a = plan_assignments(&roster, pool.clone(), &mut SeededRandom::new(seed)).unwrap();
        let b = plan_assignments(&roster, pool, &mut SeededRandom::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
