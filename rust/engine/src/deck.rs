use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Rebuild the deck in canonical order without disturbing the RNG stream.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    /// Fisher-Yates permutation of a fresh 52-card deck.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Remove and return the next `n` cards.
    ///
    /// If fewer than `n` remain this returns an empty vector instead of a
    /// partial draw. A 4-seat hand consumes at most 13 of 52 cards, so an
    /// underflow here means the caller's phase or seat bookkeeping is broken.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        if self.remaining() < n {
            tracing::warn!(
                requested = n,
                remaining = self.remaining(),
                "deck underflow: refusing partial deal"
            );
            return Vec::new();
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        dealt
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards not yet dealt, in deal order.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}
