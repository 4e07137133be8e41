//! Baseline bot policy for draw-poker gameplay.
//!
//! Implements a weighted-random strategy informed by hand strength: the
//! made-hand category shifts the base call/fold/raise weights, the raise
//! increment is always the minimum (one big blind), and the exchange
//! keeps paired ranks and high cards while sending back low unpaired
//! cards.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use drawfive_engine::cards::{Card, Rank};
use drawfive_engine::engine::Decisions;
use drawfive_engine::hand::{Category, evaluate_hand};
use drawfive_engine::player::{HAND_SIZE, Player, PlayerAction};
use drawfive_engine::rules::MAX_EXCHANGE;

/// Weighted-random baseline policy.
///
/// Deterministic under a fixed seed: the same seed and the same sequence
/// of decision points reproduce the same choices, which keeps bot-only
/// simulations replayable.
#[derive(Debug)]
pub struct BaselineBot {
    rng: StdRng,
    big_blind: u32,
}

impl BaselineBot {
    pub fn new(big_blind: u32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            big_blind,
        }
    }
}

impl Decisions for BaselineBot {
    fn get_action(&mut self, player: &Player, to_call: u32) -> PlayerAction {
        let category = hand_category(player.hand());
        let choices = action_choices(category, to_call, player.stack(), self.big_blind);
        choices
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PlayerAction::Fold)
    }

    fn get_raise_amount(&mut self, _player: &Player, _to_call: u32) -> u32 {
        // Minimum-raise policy: one big blind on top of the call.
        self.big_blind
    }

    fn get_exchange_indices(&mut self, player: &Player) -> Vec<usize> {
        choose_exchange(player.hand())
    }
}

/// Category of the current hand; anything short of five cards rates as
/// high card.
fn hand_category(hand: &[Card]) -> Category {
    match <[Card; HAND_SIZE]>::try_from(hand) {
        Ok(cards) => evaluate_hand(&cards).category,
        Err(_) => Category::HighCard,
    }
}

/// Build the weighted choice list for one decision point.
///
/// Base weights are call x5 / fold x3 / raise x2; hand strength shifts
/// them: made hands of two pair or better stop folding and raise more,
/// bare high cards fold more and barely raise. An empty list means the
/// seat cannot fund any forward action and must fold.
fn action_choices(
    category: Category,
    to_call: u32,
    stack: u32,
    big_blind: u32,
) -> Vec<PlayerAction> {
    use PlayerAction::{Call, Check, Fold, Raise};

    if to_call == 0 {
        let mut choices = vec![Check; 4];
        if category >= Category::TwoPair && stack >= big_blind {
            choices.extend([Raise, Raise]);
        }
        return choices;
    }

    let mut choices = Vec::new();
    if stack >= to_call {
        choices.extend([Call; 5]);
        let folds = match category {
            Category::HighCard => 5,
            Category::OnePair => 3,
            _ => 0,
        };
        choices.extend(std::iter::repeat_n(Fold, folds));
    }
    if stack >= to_call + big_blind {
        let raises = match category {
            Category::HighCard => 1,
            Category::OnePair => 2,
            Category::TwoPair | Category::ThreeOfAKind => 3,
            _ => 4,
        };
        choices.extend(std::iter::repeat_n(Raise, raises));
    }
    choices
}

/// Pick the hand positions to send back: unpaired cards below Ten, the
/// lowest first, capped at the exchange limit. Paired ranks and
/// Ten-or-better cards stay.
pub fn choose_exchange(hand: &[Card]) -> Vec<usize> {
    let mut counts = [0u8; 15];
    for card in hand {
        counts[card.rank.value() as usize] += 1;
    }
    let mut candidates: Vec<usize> = hand
        .iter()
        .enumerate()
        .filter(|(_, card)| counts[card.rank.value() as usize] == 1 && card.rank < Rank::Ten)
        .map(|(i, _)| i)
        .collect();
    candidates.sort_by_key(|&i| hand[i].rank.value());
    candidates.truncate(MAX_EXCHANGE);
    candidates.sort_unstable();
    candidates
}
