use std::collections::{HashMap, VecDeque};

use drawfive_engine::deck::Deck;
use drawfive_engine::engine::{Decisions, RoundEngine, RoundEvent, Stage};
use drawfive_engine::player::{Player, PlayerAction};

/// Scripted decision source: plays a fixed action sequence per player,
/// then checks or calls once the script runs out. Records the events the
/// engine emits so tests can assert on ordering.
struct Script {
    actions: HashMap<String, VecDeque<PlayerAction>>,
    raise_by: u32,
    blinds_posted: Vec<String>,
    stages: Vec<Stage>,
}

impl Script {
    fn new(plan: &[(&str, &[PlayerAction])], raise_by: u32) -> Self {
        let actions = plan
            .iter()
            .map(|(name, seq)| (name.to_string(), seq.iter().copied().collect()))
            .collect();
        Self {
            actions,
            raise_by,
            blinds_posted: Vec::new(),
            stages: Vec::new(),
        }
    }
}

impl Decisions for Script {
    fn get_action(&mut self, player: &Player, to_call: u32) -> PlayerAction {
        self.actions
            .get_mut(player.name())
            .and_then(|queue| queue.pop_front())
            .unwrap_or(if to_call == 0 {
                PlayerAction::Check
            } else {
                PlayerAction::Call
            })
    }

    fn get_raise_amount(&mut self, _player: &Player, _to_call: u32) -> u32 {
        self.raise_by
    }

    fn get_exchange_indices(&mut self, _player: &Player) -> Vec<usize> {
        Vec::new()
    }

    fn observe_event(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::BlindPosted { player, .. } => self.blinds_posted.push(player.clone()),
            RoundEvent::StageChanged(stage) => self.stages.push(*stage),
            _ => {}
        }
    }
}

fn engine_for(stacks: &[(&str, u32)]) -> RoundEngine {
    let players: Vec<Player> = stacks
        .iter()
        .map(|(name, stack)| Player::new(*name, *stack, false))
        .collect();
    RoundEngine::new(players, Deck::new_with_seed(1234), 25, 50)
}

#[test]
fn two_player_round_closes_after_one_pass_without_raises() {
    // Stacks 1000/1000, blinds 25/50: A completes the small blind, B
    // checks, no raise, one pass, pot 75 to the better hand.
    let mut engine = engine_for(&[("A", 1_000), ("B", 1_000)]);
    let mut script = Script::new(
        &[
            ("A", &[PlayerAction::Call]),
            ("B", &[PlayerAction::Check]),
        ],
        50,
    );
    let summary = engine.play_round(&mut script).expect("round ok");

    let kinds: Vec<PlayerAction> = summary.actions.iter().map(|a| a.action).collect();
    assert_eq!(kinds, vec![PlayerAction::Call, PlayerAction::Check]);
    let amounts: Vec<u32> = summary.actions.iter().map(|a| a.amount).collect();
    assert_eq!(amounts, vec![25, 0]);

    assert_eq!(summary.pot_awarded, 75);
    assert!(summary.showdown.is_some(), "both players reach showdown");

    let total: u32 = engine.players().iter().map(|p| p.stack()).sum();
    assert_eq!(total, 2_000, "chips only move between the seats");
    let net_sum: i64 = summary.net.values().sum();
    assert_eq!(net_sum, 0);
}

#[test]
fn raise_reopens_action_for_players_who_already_acted() {
    // Three seats: A posts 25, B posts 50, C is clear. After A and B
    // have acted, C's raise must give both of them another turn.
    let mut engine = engine_for(&[("A", 1_000), ("B", 1_000), ("C", 1_000)]);
    let mut script = Script::new(
        &[
            ("A", &[PlayerAction::Call, PlayerAction::Call]),
            ("B", &[PlayerAction::Check, PlayerAction::Call]),
            ("C", &[PlayerAction::Raise]),
        ],
        50,
    );
    let summary = engine.play_round(&mut script).expect("round ok");

    let order: Vec<(&str, PlayerAction)> = summary
        .actions
        .iter()
        .map(|a| (a.player.as_str(), a.action))
        .collect();
    assert_eq!(
        order,
        vec![
            ("A", PlayerAction::Call),
            ("B", PlayerAction::Check),
            ("C", PlayerAction::Raise),
            ("A", PlayerAction::Call),
            ("B", PlayerAction::Call),
        ]
    );

    // Blinds 75 + A's 25 + C's 100 + A's 50 + B's 50
    assert_eq!(summary.pot_awarded, 300);
    let net_sum: i64 = summary.net.values().sum();
    assert_eq!(net_sum, 0);
}

#[test]
fn fold_out_ends_the_round_without_showdown() {
    let mut engine = engine_for(&[("A", 1_000), ("B", 1_000)]);
    let mut script = Script::new(
        &[
            ("A", &[PlayerAction::Raise]),
            ("B", &[PlayerAction::Fold]),
        ],
        50,
    );
    let summary = engine.play_round(&mut script).expect("round ok");

    assert_eq!(summary.winner, "A");
    assert!(summary.showdown.is_none(), "no hand comparison on fold-out");
    assert_eq!(summary.pot_awarded, 150);
    assert_eq!(summary.net["A"], 50);
    assert_eq!(summary.net["B"], -50);
    assert!(
        !script.stages.contains(&Stage::Exchange),
        "a single remaining player skips the exchange"
    );
}

#[test]
fn illegal_check_into_a_bet_is_auto_folded() {
    let mut engine = engine_for(&[("A", 1_000), ("B", 1_000)]);
    let mut script = Script::new(
        &[
            ("A", &[PlayerAction::Raise]),
            ("B", &[PlayerAction::Check]),
        ],
        50,
    );
    let summary = engine.play_round(&mut script).expect("round ok");

    assert_eq!(summary.winner, "A");
    let last = summary.actions.last().expect("actions recorded");
    assert_eq!(last.player, "B");
    assert_eq!(last.action, PlayerAction::Fold, "the illegal check folds B");
}

#[test]
fn call_without_funds_is_auto_folded() {
    let mut engine = engine_for(&[("A", 1_000), ("B", 100)]);
    let mut script = Script::new(
        &[
            ("A", &[PlayerAction::Raise]),
            ("B", &[PlayerAction::Call]),
        ],
        200,
    );
    let summary = engine.play_round(&mut script).expect("round ok");

    assert_eq!(summary.winner, "A");
    assert!(summary.showdown.is_none());
    // B only loses the posted big blind
    assert_eq!(summary.net["B"], -50);
    let total: u32 = engine.players().iter().map(|p| p.stack()).sum();
    assert_eq!(total, 1_100);
}

#[test]
fn stage_transitions_run_forward_in_order() {
    let mut engine = engine_for(&[("A", 1_000), ("B", 1_000)]);
    let mut script = Script::new(
        &[
            ("A", &[PlayerAction::Call]),
            ("B", &[PlayerAction::Check]),
        ],
        50,
    );
    engine.play_round(&mut script).expect("round ok");

    assert_eq!(
        script.stages,
        vec![
            Stage::PreBetting,
            Stage::Betting,
            Stage::Exchange,
            Stage::Showdown,
            Stage::Complete,
        ]
    );
    assert_eq!(engine.stage(), Stage::Complete);
    assert_eq!(engine.pot(), 0, "pot is drained by the award");
}

#[test]
fn rotating_the_button_moves_the_blinds() {
    let mut engine = engine_for(&[("A", 1_000), ("B", 1_000), ("C", 1_000)]);

    let mut first = Script::new(&[], 50);
    engine.play_round(&mut first).expect("round ok");
    assert_eq!(first.blinds_posted, vec!["A".to_string(), "B".to_string()]);

    engine.rotate_button();
    let mut second = Script::new(&[], 50);
    engine.play_round(&mut second).expect("round ok");
    assert_eq!(second.blinds_posted, vec!["B".to_string(), "C".to_string()]);
}

#[test]
fn a_round_requires_two_seats() {
    let mut engine = engine_for(&[("A", 1_000)]);
    let mut script = Script::new(&[], 50);
    assert!(engine.play_round(&mut script).is_err());
}
