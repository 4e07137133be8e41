use std::cmp::Ordering;
use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{compare_hands, evaluate_hand, HandStrength};
use crate::logger::{ActionRecord, ExchangeRecord, ShowdownEntry};
use crate::player::{Player, PlayerAction, HAND_SIZE};
use crate::rules::{validate_action, validate_exchange, ValidatedAction};

/// The stages of a round. Transitions are strictly forward;
/// `Complete` is terminal and a new round re-enters `PreBetting`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    PreBetting,
    Betting,
    Exchange,
    Showdown,
    Complete,
}

/// Observable round events, emitted for logging and live display. Hosts
/// are free to ignore them; they carry no engine state obligations.
#[derive(Debug, Clone)]
pub enum RoundEvent {
    StageChanged(Stage),
    BlindPosted {
        seat: usize,
        player: String,
        amount: u32,
        pot: u32,
    },
    ActionTaken {
        seat: usize,
        player: String,
        action: PlayerAction,
        amount: u32,
        pot: u32,
    },
    AutoFolded {
        seat: usize,
        player: String,
        reason: String,
    },
    CardsExchanged {
        seat: usize,
        player: String,
        count: usize,
    },
    ExchangeRejected {
        seat: usize,
        player: String,
        reason: String,
    },
    ShowdownResult {
        entries: Vec<ShowdownEntry>,
        winner_seat: usize,
        winner: String,
        pot: u32,
    },
}

/// The synchronous capability contract the engine calls for every
/// decision point. The host supplies the human side; the bot policy
/// satisfies the same contract for automated seats.
///
/// Illegal returns never abort a round: a bad action auto-folds the
/// player and a bad exchange selection becomes a no-op for that player.
pub trait Decisions {
    /// Choose an action given the amount required to call.
    fn get_action(&mut self, player: &Player, to_call: u32) -> PlayerAction;

    /// Raise increment on top of the call amount. Only consulted after a
    /// `Raise`; values below the big blind are lifted to it.
    fn get_raise_amount(&mut self, player: &Player, to_call: u32) -> u32;

    /// Hand positions to replace during the exchange phase (at most 3).
    fn get_exchange_indices(&mut self, player: &Player) -> Vec<usize>;

    /// Observation hook for stage transitions, chip movements, and the
    /// showdown summary. Default: ignore.
    fn observe_event(&mut self, _event: &RoundEvent) {}
}

/// Outcome of one completed round.
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub winner_seat: usize,
    pub winner: String,
    pub pot_awarded: u32,
    pub actions: Vec<ActionRecord>,
    pub exchanges: Vec<ExchangeRecord>,
    /// Per-player stack delta over the round; the deltas sum to zero.
    pub net: BTreeMap<String, i64>,
    /// Evaluated hands at showdown; `None` when the round ended by fold-out.
    pub showdown: Option<Vec<ShowdownEntry>>,
}

/// Upper bound on betting-round turns; hitting it signals a stalled
/// state machine, not a legal game.
const MAX_BETTING_TURNS: usize = 1024;

/// Orchestrates one full round of five-card draw: blinds, deal, betting,
/// exchange, showdown, pot award. The engine exclusively owns the deck
/// and the pot; players are mutated only through `pay`/`change_card`.
///
/// # Examples
///
/// ```
/// use drawfive_engine::deck::Deck;
/// use drawfive_engine::engine::{Decisions, RoundEngine};
/// use drawfive_engine::player::{Player, PlayerAction};
///
/// struct CallingStation;
///
/// impl Decisions for CallingStation {
///     fn get_action(&mut self, _player: &Player, to_call: u32) -> PlayerAction {
///         if to_call == 0 { PlayerAction::Check } else { PlayerAction::Call }
///     }
///     fn get_raise_amount(&mut self, _player: &Player, _to_call: u32) -> u32 {
///         0
///     }
///     fn get_exchange_indices(&mut self, _player: &Player) -> Vec<usize> {
///         Vec::new()
///     }
/// }
///
/// let players = vec![
///     Player::new("You", 1_000, true),
///     Player::new("Bot 1", 1_000, false),
/// ];
/// let mut engine = RoundEngine::new(players, Deck::new_with_seed(42), 25, 50);
/// let summary = engine.play_round(&mut CallingStation).unwrap();
/// // Small blind 25 + big blind 50 + the small blind's call of 25
/// assert_eq!(summary.pot_awarded, 100);
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    players: Vec<Player>,
    deck: Deck,
    small_blind: u32,
    big_blind: u32,
    pot: u32,
    current_bet: u32,
    stage: Stage,
    button: usize,
}

impl RoundEngine {
    pub fn new(players: Vec<Player>, deck: Deck, small_blind: u32, big_blind: u32) -> Self {
        Self {
            players,
            deck,
            small_blind,
            big_blind,
            pot: 0,
            current_bet: 0,
            stage: Stage::PreBetting,
            button: 0,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn blinds(&self) -> (u32, u32) {
        (self.small_blind, self.big_blind)
    }
    pub fn button(&self) -> usize {
        self.button
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn set_button(&mut self, button: usize) {
        if !self.players.is_empty() {
            self.button = button % self.players.len();
        }
    }

    /// Move the blinds one seat onward for the next round.
    pub fn rotate_button(&mut self) {
        if !self.players.is_empty() {
            self.button = (self.button + 1) % self.players.len();
        }
    }

    /// Play one full round: blinds, deal, betting, exchange, showdown,
    /// pot award. Per-player faults (insufficient funds, illegal action)
    /// fold the offender; only engine invariant violations surface as
    /// errors.
    pub fn play_round(&mut self, decisions: &mut dyn Decisions) -> Result<RoundSummary, GameError> {
        if self.players.len() < 2 {
            return Err(GameError::InvalidAction(
                "a round requires at least two seated players".into(),
            ));
        }

        let starting: Vec<u32> = self.players.iter().map(|p| p.stack()).collect();
        let mut actions = Vec::new();
        let mut exchanges = Vec::new();

        self.reset_round();
        self.enter(Stage::PreBetting, decisions);
        self.post_blinds(decisions);

        self.deck.shuffle();
        self.deck.deal(&mut self.players, HAND_SIZE)?;

        self.enter(Stage::Betting, decisions);
        self.betting_round(decisions, &mut actions)?;

        if self.unfolded_count() >= 2 {
            self.enter(Stage::Exchange, decisions);
            self.exchange_phase(decisions, &mut exchanges)?;
        }

        self.enter(Stage::Showdown, decisions);
        let (winner_seat, showdown) = self.showdown()?;
        let pot_awarded = self.award_pot(winner_seat);
        let winner = self.players[winner_seat].name().to_string();
        decisions.observe_event(&RoundEvent::ShowdownResult {
            entries: showdown.clone().unwrap_or_default(),
            winner_seat,
            winner: winner.clone(),
            pot: pot_awarded,
        });
        self.enter(Stage::Complete, decisions);

        let net = self
            .players
            .iter()
            .zip(starting)
            .map(|(p, was)| (p.name().to_string(), i64::from(p.stack()) - i64::from(was)))
            .collect();

        Ok(RoundSummary {
            winner_seat,
            winner,
            pot_awarded,
            actions,
            exchanges,
            net,
            showdown,
        })
    }

    fn enter(&mut self, stage: Stage, decisions: &mut dyn Decisions) {
        self.stage = stage;
        decisions.observe_event(&RoundEvent::StageChanged(stage));
    }

    fn reset_round(&mut self) {
        for player in &mut self.players {
            player.reset_for_round();
        }
        self.pot = 0;
        self.current_bet = 0;
        self.stage = Stage::PreBetting;
    }

    /// The button seat posts the small blind, the next seat the big
    /// blind. Short stacks post what they can; the table bet is still
    /// the configured big blind.
    fn post_blinds(&mut self, decisions: &mut dyn Decisions) {
        let n = self.players.len();
        let posts = [
            (self.button, self.small_blind),
            ((self.button + 1) % n, self.big_blind),
        ];
        for (seat, blind) in posts {
            let paid = self.players[seat].pay_up_to(blind);
            self.pot += paid;
            self.players[seat].add_to_current_bet(paid);
            decisions.observe_event(&RoundEvent::BlindPosted {
                seat,
                player: self.players[seat].name().to_string(),
                amount: paid,
                pot: self.pot,
            });
        }
        self.current_bet = self.big_blind;
    }

    /// One betting street. Seats are visited in order from the button; a
    /// raise reopens the action by requeueing every other active seat.
    /// The queue drains exactly when action has returned to the seat
    /// after the last raiser with every active player matched (zero-stack
    /// players stand pat on whatever they could post).
    fn betting_round(
        &mut self,
        decisions: &mut dyn Decisions,
        actions: &mut Vec<ActionRecord>,
    ) -> Result<(), GameError> {
        let n = self.players.len();
        let mut queue: VecDeque<usize> = (0..n).map(|i| (self.button + i) % n).collect();
        let mut turns = 0usize;

        while let Some(seat) = queue.pop_front() {
            if self.unfolded_count() < 2 {
                break;
            }
            if self.players[seat].folded() || self.players[seat].stack() == 0 {
                continue;
            }
            turns += 1;
            if turns > MAX_BETTING_TURNS {
                return Err(GameError::BettingStalled);
            }

            let to_call = self.current_bet - self.players[seat].current_bet();
            let action = decisions.get_action(&self.players[seat], to_call);
            match validate_action(to_call, action) {
                Err(reason) => self.auto_fold(seat, &reason, decisions, actions),
                Ok(ValidatedAction::Fold) => {
                    self.players[seat].set_folded(true);
                    self.apply(seat, PlayerAction::Fold, 0, decisions, actions);
                }
                Ok(ValidatedAction::Check) => {
                    self.apply(seat, PlayerAction::Check, 0, decisions, actions);
                }
                Ok(ValidatedAction::Call(amount)) => match self.players[seat].pay(amount) {
                    Ok(paid) => {
                        self.pot += paid;
                        self.players[seat].add_to_current_bet(paid);
                        self.apply(seat, PlayerAction::Call, paid, decisions, actions);
                    }
                    Err(reason) => self.auto_fold(seat, &reason, decisions, actions),
                },
                Ok(ValidatedAction::Raise) => {
                    let increment = decisions
                        .get_raise_amount(&self.players[seat], to_call)
                        .max(self.big_blind);
                    match self.players[seat].pay(to_call + increment) {
                        Ok(paid) => {
                            self.pot += paid;
                            self.players[seat].add_to_current_bet(paid);
                            self.current_bet = self.players[seat].current_bet();
                            self.apply(seat, PlayerAction::Raise, paid, decisions, actions);
                            // Reopen: every other active seat acts again.
                            queue.clear();
                            for i in 1..n {
                                let s = (seat + i) % n;
                                if !self.players[s].folded() {
                                    queue.push_back(s);
                                }
                            }
                        }
                        Err(reason) => self.auto_fold(seat, &reason, decisions, actions),
                    }
                }
            }
        }
        Ok(())
    }

    fn apply(
        &mut self,
        seat: usize,
        action: PlayerAction,
        amount: u32,
        decisions: &mut dyn Decisions,
        actions: &mut Vec<ActionRecord>,
    ) {
        self.players[seat].set_last_action(action);
        let player = self.players[seat].name().to_string();
        decisions.observe_event(&RoundEvent::ActionTaken {
            seat,
            player: player.clone(),
            action,
            amount,
            pot: self.pot,
        });
        actions.push(ActionRecord {
            seat,
            player,
            stage: Stage::Betting,
            action,
            amount,
        });
    }

    fn auto_fold(
        &mut self,
        seat: usize,
        reason: &GameError,
        decisions: &mut dyn Decisions,
        actions: &mut Vec<ActionRecord>,
    ) {
        self.players[seat].set_folded(true);
        decisions.observe_event(&RoundEvent::AutoFolded {
            seat,
            player: self.players[seat].name().to_string(),
            reason: reason.to_string(),
        });
        self.apply(seat, PlayerAction::Fold, 0, decisions, actions);
    }

    /// Each remaining player may replace up to three cards. Replacements
    /// are drawn first; the displaced cards go to the deck bottom after
    /// the batch, so a discard can never come straight back in the same
    /// selection.
    fn exchange_phase(
        &mut self,
        decisions: &mut dyn Decisions,
        exchanges: &mut Vec<ExchangeRecord>,
    ) -> Result<(), GameError> {
        let n = self.players.len();
        for i in 0..n {
            let seat = (self.button + i) % n;
            if self.players[seat].folded() {
                continue;
            }
            let raw = decisions.get_exchange_indices(&self.players[seat]);
            let indices = match validate_exchange(&raw, self.players[seat].hand().len()) {
                Ok(indices) => indices,
                Err(reason) => {
                    decisions.observe_event(&RoundEvent::ExchangeRejected {
                        seat,
                        player: self.players[seat].name().to_string(),
                        reason: reason.to_string(),
                    });
                    continue;
                }
            };
            if indices.is_empty() {
                continue;
            }
            let mut displaced = Vec::with_capacity(indices.len());
            for &idx in &indices {
                let replacement = self.deck.draw()?;
                displaced.push(self.players[seat].change_card(replacement, idx)?);
            }
            for card in displaced {
                self.deck.discard_to_bottom(card);
            }
            self.players[seat].validate_hand()?;
            decisions.observe_event(&RoundEvent::CardsExchanged {
                seat,
                player: self.players[seat].name().to_string(),
                count: indices.len(),
            });
            exchanges.push(ExchangeRecord {
                seat,
                player: self.players[seat].name().to_string(),
                count: indices.len(),
            });
        }
        Ok(())
    }

    /// Pick the winning seat. With one unfolded player there is no hand
    /// comparison; with several, the maximum `(category, kickers)` wins
    /// and ties go to the first seat in showdown iteration order.
    fn showdown(&mut self) -> Result<(usize, Option<Vec<ShowdownEntry>>), GameError> {
        let n = self.players.len();
        let active: Vec<usize> = (0..n)
            .map(|i| (self.button + i) % n)
            .filter(|&s| !self.players[s].folded())
            .collect();

        match active.as_slice() {
            [] => Err(GameError::NoActivePlayers),
            [only] => Ok((*only, None)),
            _ => {
                let mut entries = Vec::with_capacity(active.len());
                let mut best: Option<(usize, HandStrength)> = None;
                for &seat in &active {
                    self.players[seat].validate_hand()?;
                    let hand: [crate::cards::Card; HAND_SIZE] = self.players[seat]
                        .hand()
                        .try_into()
                        .map_err(|_| GameError::InvalidHand("hand is not five cards".into()))?;
                    let strength = evaluate_hand(&hand);
                    entries.push(ShowdownEntry {
                        seat,
                        player: self.players[seat].name().to_string(),
                        category: strength.category.label().to_string(),
                        cards: hand.to_vec(),
                    });
                    let better = match &best {
                        None => true,
                        Some((_, current)) => {
                            compare_hands(&strength, current) == Ordering::Greater
                        }
                    };
                    if better {
                        best = Some((seat, strength));
                    }
                }
                let (winner_seat, _) = best.ok_or(GameError::NoActivePlayers)?;
                Ok((winner_seat, Some(entries)))
            }
        }
    }

    /// The single pot debit: credit the winner, zero the pot and the
    /// table bet. Isolated so a side-pot model could replace it without
    /// touching the betting traversal.
    fn award_pot(&mut self, winner_seat: usize) -> u32 {
        let amount = self.pot;
        self.players[winner_seat].add_chips(amount);
        self.pot = 0;
        self.current_bet = 0;
        amount
    }

    fn unfolded_count(&self) -> usize {
        self.players.iter().filter(|p| !p.folded()).count()
    }
}
