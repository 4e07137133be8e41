use std::collections::{HashMap, HashSet};

use drawfive_engine::cards::Card;
use drawfive_engine::deck::Deck;
use drawfive_engine::engine::{Decisions, RoundEngine, RoundEvent};
use drawfive_engine::player::{Player, PlayerAction};

/// Checks or calls through the betting street, then hands each player a
/// fixed exchange selection.
struct Exchanger {
    selections: HashMap<String, Vec<usize>>,
    rejected: Vec<String>,
}

impl Exchanger {
    fn new(plan: &[(&str, &[usize])]) -> Self {
        Self {
            selections: plan
                .iter()
                .map(|(name, indices)| (name.to_string(), indices.to_vec()))
                .collect(),
            rejected: Vec::new(),
        }
    }
}

impl Decisions for Exchanger {
    fn get_action(&mut self, _player: &Player, to_call: u32) -> PlayerAction {
        if to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        }
    }

    fn get_raise_amount(&mut self, _player: &Player, _to_call: u32) -> u32 {
        50
    }

    fn get_exchange_indices(&mut self, player: &Player) -> Vec<usize> {
        self.selections
            .get(player.name())
            .cloned()
            .unwrap_or_default()
    }

    fn observe_event(&mut self, event: &RoundEvent) {
        if let RoundEvent::ExchangeRejected { player, .. } = event {
            self.rejected.push(player.clone());
        }
    }
}

fn engine_for(names: &[&str]) -> RoundEngine {
    let players: Vec<Player> = names
        .iter()
        .map(|name| Player::new(*name, 1_000, false))
        .collect();
    RoundEngine::new(players, Deck::new_with_seed(77), 25, 50)
}

fn deck_and_hands_cover_every_card(engine: &RoundEngine) {
    let mut all: Vec<Card> = engine.deck().cards();
    for p in engine.players() {
        all.extend_from_slice(p.hand());
    }
    assert_eq!(all.len(), 52);
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), 52, "no card is duplicated or lost");
}

#[test]
fn exchange_replaces_selected_positions_and_recycles_discards() {
    let mut engine = engine_for(&["A", "B"]);
    let mut host = Exchanger::new(&[("A", &[0, 1, 2]), ("B", &[4])]);
    let summary = engine.play_round(&mut host).expect("round ok");

    let counts: HashMap<&str, usize> = summary
        .exchanges
        .iter()
        .map(|e| (e.player.as_str(), e.count))
        .collect();
    assert_eq!(counts["A"], 3);
    assert_eq!(counts["B"], 1);

    // 52 minus two dealt hands; every discard went back to the bottom.
    assert_eq!(engine.deck().len(), 42);
    deck_and_hands_cover_every_card(&engine);
}

#[test]
fn out_of_range_selection_is_a_no_op_for_that_player() {
    let mut engine = engine_for(&["A", "B"]);
    let mut host = Exchanger::new(&[("A", &[7]), ("B", &[1])]);
    let summary = engine.play_round(&mut host).expect("round ok");

    assert_eq!(host.rejected, vec!["A".to_string()]);
    assert!(summary.exchanges.iter().all(|e| e.player == "B"));
    deck_and_hands_cover_every_card(&engine);
}

#[test]
fn more_than_three_distinct_positions_is_rejected() {
    let mut engine = engine_for(&["A", "B"]);
    let mut host = Exchanger::new(&[("A", &[0, 1, 2, 3]), ("B", &[])]);
    let summary = engine.play_round(&mut host).expect("round ok");

    assert_eq!(host.rejected, vec!["A".to_string()]);
    assert!(summary.exchanges.is_empty());
}

#[test]
fn duplicate_positions_collapse_before_the_cap_applies() {
    let mut engine = engine_for(&["A", "B"]);
    let mut host = Exchanger::new(&[("A", &[1, 1, 2]), ("B", &[])]);
    let summary = engine.play_round(&mut host).expect("round ok");

    assert!(host.rejected.is_empty());
    assert_eq!(summary.exchanges.len(), 1);
    assert_eq!(summary.exchanges[0].player, "A");
    assert_eq!(summary.exchanges[0].count, 2);
    deck_and_hands_cover_every_card(&engine);
}

#[test]
fn standing_pat_leaves_the_hand_untouched() {
    let mut engine = engine_for(&["A", "B"]);

    let mut host = Exchanger::new(&[("A", &[]), ("B", &[])]);
    let summary = engine.play_round(&mut host).expect("round ok");

    assert!(summary.exchanges.is_empty());
    assert_eq!(engine.deck().len(), 42);
    for p in engine.players() {
        assert_eq!(p.hand().len(), 5);
    }
}
