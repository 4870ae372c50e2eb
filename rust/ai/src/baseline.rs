//! Baseline randomized policy.
//!
//! Deliberately myopic: it never looks at cards or hand strength, only at
//! the pot when sizing a raise. One uniform draw decides the action —
//! half the time it calls (which checks when nothing is owed), 30% of the
//! time it raises 10–30% of the pot, and the remaining 20% it folds.
//! A stand-in opponent, not a competitive one.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use felt_engine::player::PlayerAction;
use felt_engine::state::DecisionContext;

use crate::DecisionPolicy;

/// Probability mass below which the policy calls.
const CALL_THRESHOLD: f64 = 0.5;
/// Probability mass below which the policy raises (and above which it folds).
const RAISE_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct BaselinePolicy {
    rng: ChaCha20Rng,
}

impl BaselinePolicy {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Policy with a pinned RNG for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Raise sizing: a further uniform draw picks 10–30% of the pot,
    /// rounded down. The table floors undersized results to its minimum.
    fn raise_size(&mut self, pot: u32) -> u32 {
        let fraction = 0.1 + self.rng.random::<f64>() * 0.2;
        (fraction * pot as f64).floor() as u32
    }
}

impl Default for BaselinePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionPolicy for BaselinePolicy {
    fn decide(&mut self, ctx: &DecisionContext) -> PlayerAction {
        let roll = self.rng.random::<f64>();
        if roll < CALL_THRESHOLD {
            PlayerAction::Call
        } else if roll < RAISE_THRESHOLD {
            PlayerAction::Raise(self.raise_size(ctx.pot))
        } else {
            PlayerAction::Fold
        }
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_engine::game::Phase;

    fn ctx(pot: u32) -> DecisionContext {
        DecisionContext {
            table_bet: 20,
            pot,
            community: Vec::new(),
            phase: Phase::PreFlop,
        }
    }

    #[test]
    fn policy_reports_its_name() {
        let policy = BaselinePolicy::with_seed(1);
        assert_eq!(policy.name(), "baseline");
    }

    #[test]
    fn same_seed_same_decisions() {
        let mut a = BaselinePolicy::with_seed(99);
        let mut b = BaselinePolicy::with_seed(99);
        for _ in 0..50 {
            assert_eq!(a.decide(&ctx(200)), b.decide(&ctx(200)));
        }
    }

    #[test]
    fn action_mix_matches_the_thresholds() {
        // Statistical check, not exact equality: over many draws the
        // call/raise/fold split should sit near 50/30/20.
        let mut policy = BaselinePolicy::with_seed(42);
        let trials = 10_000;
        let mut calls = 0usize;
        let mut raises = 0usize;
        let mut folds = 0usize;
        for _ in 0..trials {
            match policy.decide(&ctx(500)) {
                PlayerAction::Call => calls += 1,
                PlayerAction::Raise(_) => raises += 1,
                PlayerAction::Fold => folds += 1,
                other => panic!("unexpected action {:?}", other),
            }
        }
        let frac = |n: usize| n as f64 / trials as f64;
        assert!((frac(calls) - 0.5).abs() < 0.05, "calls: {}", calls);
        assert!((frac(raises) - 0.3).abs() < 0.05, "raises: {}", raises);
        assert!((frac(folds) - 0.2).abs() < 0.05, "folds: {}", folds);
    }

    #[test]
    fn raises_stay_between_ten_and_thirty_percent_of_pot() {
        let mut policy = BaselinePolicy::with_seed(7);
        let pot = 1_000;
        let mut seen_raise = false;
        for _ in 0..1_000 {
            if let PlayerAction::Raise(amount) = policy.decide(&ctx(pot)) {
                seen_raise = true;
                assert!(
                    (100..300).contains(&amount),
                    "raise {} outside 10-30% of pot {}",
                    amount,
                    pot
                );
            }
        }
        assert!(seen_raise);
    }

    #[test]
    fn empty_pot_raise_is_zero_and_left_to_the_table_floor() {
        let mut policy = BaselinePolicy::with_seed(3);
        for _ in 0..100 {
            if let PlayerAction::Raise(amount) = policy.decide(&ctx(0)) {
                assert_eq!(amount, 0);
            }
        }
    }
}
