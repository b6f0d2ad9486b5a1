//! Property tests for turn rotation (pure domain, no DB).
//!
//! Properties tested:
//! - Within one round every player is picked exactly once
//! - The queue never holds ids outside the roster
//! - Removing a player purges them from queue and current turn

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::random::SeededRandom;
use crate::domain::test_prelude;
use crate::domain::turns::{TurnPhase, TurnScheduler};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a full round visits everyone once, then the queue refills
    #[test]
    fn prop_round_visits_each_player_once(
        size in 1..10i32,
        seed in any::<u64>(),
    ) {
        let roster: Vec<i32> = (1..=size).collect();
        let mut turns = TurnScheduler::new();
        turns.begin(&roster);
        let mut rng = SeededRandom::new(seed);

        let mut picked = BTreeSet::new();
        for _ in 0..roster.len() {
            let id = turns.select_next(&roster, &mut rng).unwrap();
            prop_assert!(picked.insert(id), "player {} picked twice in one round", id);
            prop_assert_eq!(turns.current(), Some(id));
        }

        prop_assert_eq!(picked.len(), roster.len());
        prop_assert_eq!(turns.pending(), roster.as_slice());
        prop_assert_eq!(turns.phase(), TurnPhase::TurnActive);
    }

    /// Property: selections never produce ids outside the roster
    #[test]
    fn prop_picks_stay_in_roster(
        size in 1..8i32,
        rounds in 1..30usize,
        seed in any::<u64>(),
    ) {
        let roster: Vec<i32> = (1..=size).collect();
        let mut turns = TurnScheduler::new();
        turns.begin(&roster);
        let mut rng = SeededRandom::new(seed);

        for _ in 0..rounds {
            let id = turns.select_next(&roster, &mut rng).unwrap();
            prop_assert!(roster.contains(&id));
            prop_assert!(turns.pending().iter().all(|p| roster.contains(p)));
            prop_assert!(!turns.pending().is_empty());
        }
    }

    /// Property: removal leaves no trace of the player
    #[test]
    fn prop_remove_purges_player(
        size in 2..8i32,
        picks in 0..5usize,
        victim_idx in 0..8usize,
        seed in any::<u64>(),
    ) {
        let roster: Vec<i32> = (1..=size).collect();
        let victim = roster[victim_idx % roster.len()];
        let mut turns = TurnScheduler::new();
        turns.begin(&roster);
        let mut rng = SeededRandom::new(seed);
        for _ in 0..picks {
            turns.select_next(&roster, &mut rng).unwrap();
        }

        let rest: Vec<i32> = roster.iter().copied().filter(|p| *p != victim).collect();
        turns.remove(victim, &rest);
        prop_assert!(!turns.pending().contains(&victim));
        prop_assert_ne!(turns.current(), Some(victim));
        prop_assert!(!turns.pending().is_empty());
    }
}
