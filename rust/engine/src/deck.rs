use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::player::Player;

#[derive(Debug)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck().into(),
            rng,
        }
    }

    /// Restore a deck from a saved card order. The RNG is re-seeded; the
    /// card sequence itself is what a resumed round depends on.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards: cards.into(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Rebuild the full 52-card deck and apply a uniform random permutation.
    /// Callers must clear player hands first; shuffling mid-round would
    /// duplicate held cards.
    pub fn shuffle(&mut self) {
        self.cards = full_deck().into();
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Deal `n` cards to each player in seat order, popping from the deal end.
    pub fn deal(&mut self, players: &mut [Player], n: usize) -> Result<(), GameError> {
        if n * players.len() > self.cards.len() {
            return Err(GameError::EmptyDeck);
        }
        for player in players.iter_mut() {
            for _ in 0..n {
                match self.cards.pop_back() {
                    Some(card) => player.take_card(card),
                    None => return Err(GameError::EmptyDeck),
                }
            }
        }
        Ok(())
    }

    /// Remove and return the top card (the draw end).
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    /// Append a card to the bottom, recycling it for later draws without a
    /// reshuffle. Discards sit far from the draw end, so they are unlikely
    /// to come back within the same round.
    pub fn discard_to_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ordered view of the remaining cards, draw end first. Used for
    /// session persistence.
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}
