use crate::betting::{Action, ActionError, BettingRound, Payout, Phase, Step, Winner};
use crate::cards::Card;
use crate::config::{ConfigError, TableConfig};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_holdem, Evaluation, HandCategory};
use crate::hand::{Board, HoleCards, BOARD_SIZE};
use core::cmp::Ordering;
use core::fmt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    /// Hands were compared on a full board.
    Showdown { winner: Winner, payout: Payout },
    /// The user folded.
    Folded { payout: Payout },
    /// The user could not cover a call; balances were restarted.
    Bankrupt,
    /// The deck ran dry mid-round; committed chips went back to both sides.
    Aborted { refund: Payout },
}

impl Outcome {
    /// `None` for an aborted round.
    pub fn winner(&self) -> Option<Winner> {
        match self {
            Outcome::Showdown { winner, .. } => Some(*winner),
            Outcome::Folded { .. } | Outcome::Bankrupt => Some(Winner::Computer),
            Outcome::Aborted { .. } => None,
        }
    }

    pub fn folded(&self) -> bool {
        matches!(self, Outcome::Folded { .. } | Outcome::Bankrupt)
    }

    /// Chips each side received when the round ended.
    pub fn payout(&self) -> Payout {
        match self {
            Outcome::Showdown { payout, .. } | Outcome::Folded { payout } => *payout,
            Outcome::Aborted { refund } => *refund,
            Outcome::Bankrupt => Payout::default(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Showdown { winner: Winner::Push, payout } => {
                write!(f, "split pot ({} / {})", payout.user, payout.computer)
            }
            Outcome::Showdown { winner, payout } => {
                write!(f, "{} wins {}", winner.label(), payout.user + payout.computer)
            }
            Outcome::Folded { payout } => write!(f, "user folds, computer wins {}", payout.computer),
            Outcome::Bankrupt => f.write_str("user bankrupt, balances restarted"),
            Outcome::Aborted { .. } => f.write_str("round aborted"),
        }
    }
}

/// Everything a front end needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Snapshot {
    pub phase: Phase,
    pub pot: u64,
    pub current_wager: u64,
    pub minimum_wager: u64,
    pub amount_at_risk: u64,
    pub user_balance: u64,
    pub computer_balance: u64,
    pub community: Vec<Card>,
    pub user_hole: Option<HoleCards>,
    /// Hidden until the round has been decided.
    pub computer_hole: Option<HoleCards>,
    pub computer_thinking: bool,
    pub can_raise: bool,
    pub outcome: Option<Outcome>,
    pub user_category: Option<HandCategory>,
    pub computer_category: Option<HandCategory>,
    pub rounds_played: u64,
}

/// A heads-up table: one human seat, one computer seat.
#[derive(Debug, Clone)]
pub struct Game {
    config: TableConfig,
    rng: ChaCha8Rng,
    pub(crate) deck: Deck,
    pub(crate) betting: BettingRound,
    pub(crate) board: Board,
    pub(crate) user_hole: Option<HoleCards>,
    pub(crate) computer_hole: Option<HoleCards>,
    pub(crate) user_eval: Option<Evaluation>,
    pub(crate) computer_eval: Option<Evaluation>,
    pub(crate) outcome: Option<Outcome>,
    rounds_played: u64,
}

impl Game {
    /// Build a table and deal the first round.
    ///
    /// ```
    /// use headsup_holdem::betting::Phase;
    /// use headsup_holdem::config::TableConfig;
    /// use headsup_holdem::game::Game;
    ///
    /// let game = Game::new(TableConfig::default().with_seed(42)).unwrap();
    /// let state = game.snapshot();
    /// assert_eq!(state.phase, Phase::PreFlop);
    /// assert!(state.user_hole.is_some());
    /// assert!(state.computer_hole.is_none());
    /// ```
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut game = Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            deck: Deck::new(config.deck_multiple),
            betting: BettingRound::new(
                config.starting_balance,
                config.minimum_wager,
                config.computer_delay,
            ),
            board: Board::new(),
            user_hole: None,
            computer_hole: None,
            user_eval: None,
            computer_eval: None,
            outcome: None,
            rounds_played: 0,
            config,
        };
        game.begin_round();
        Ok(game)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn betting(&self) -> &BettingRound {
        &self.betting
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn phase(&self) -> Phase {
        self.betting.phase()
    }

    pub fn user_hole(&self) -> Option<HoleCards> {
        self.user_hole
    }

    /// Outcome of the most recent finished round.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Deal a fresh round. Only allowed once the previous one is over.
    pub fn start_new_round(&mut self) -> Result<(), ActionError> {
        if self.betting.phase() != Phase::RoundOver {
            log::warn!("new round requested during {}", self.betting.phase().label());
            return Err(ActionError::RoundInProgress);
        }
        self.begin_round();
        Ok(())
    }

    fn begin_round(&mut self) {
        self.betting.reset_for_round();
        self.deck.return_all();
        self.deck.shuffle_with(&mut self.rng);
        self.board.clear();
        self.user_hole = None;
        self.computer_hole = None;
        self.user_eval = None;
        self.computer_eval = None;
        self.outcome = None;

        match self.deal_holes() {
            Ok((user, computer)) => {
                self.user_hole = Some(user);
                self.computer_hole = Some(computer);
                log::info!(
                    "round {} dealt; balances user {} computer {}",
                    self.rounds_played + 1,
                    self.betting.user_balance(),
                    self.betting.computer_balance()
                );
            }
            Err(e) => self.abort(e),
        }
    }

    /// User's pair first, then the computer's.
    fn deal_holes(&mut self) -> Result<(HoleCards, HoleCards), DeckError> {
        let user = HoleCards::new(self.deck.draw()?, self.deck.draw()?);
        let computer = HoleCards::new(self.deck.draw()?, self.deck.draw()?);
        Ok((user, computer))
    }

    pub fn apply_action(&mut self, action: Action) -> Result<(), ActionError> {
        self.apply_action_at(action, Instant::now())
    }

    /// Apply a user action at `now`. On error nothing changes.
    pub fn apply_action_at(&mut self, action: Action, now: Instant) -> Result<(), ActionError> {
        let step = match self.betting.apply(action, now) {
            Ok(step) => step,
            Err(e) => {
                log::warn!("{action:?} rejected: {e}");
                return Err(e);
            }
        };
        match step {
            Step::Folded(payout) => {
                self.reveal_for_display();
                self.finish_round(Outcome::Folded { payout });
            }
            Step::Bankrupt => {
                self.reveal_for_display();
                self.finish_round(Outcome::Bankrupt);
            }
            Step::AwaitComputer => {
                log::debug!("computer matches; thinking until next reveal");
            }
            Step::Showdown => self.resolve(),
        }
        Ok(())
    }

    /// Drive the computer's turn. Returns true when cards were revealed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.betting.computer_ready(now) {
            return false;
        }
        self.reveal_next()
    }

    fn reveal_next(&mut self) -> bool {
        let Some(next) = self.betting.phase().next_street() else {
            return false;
        };
        let wanted = next.community_cards().saturating_sub(self.board.len());
        let cards = match self.deck.draw_n(wanted) {
            Ok(cards) => cards,
            Err(e) => {
                self.abort(e);
                return false;
            }
        };
        if let Err(e) = self.board.extend(cards) {
            self.abort(e);
            return false;
        }
        self.betting.advance_street();
        log::debug!("{} revealed: {}", next.label(), self.board_text());
        true
    }

    /// Deal out the rest of the board and grade both hands after a fold.
    fn reveal_for_display(&mut self) {
        let missing = BOARD_SIZE - self.board.len();
        match self.deck.draw_n(missing) {
            Ok(cards) => {
                if let Err(e) = self.board.extend(cards) {
                    log::error!("could not complete board for display: {e}");
                }
            }
            Err(e) => log::error!("could not complete board for display: {e}"),
        }
        self.grade_hands();
    }

    fn grade_hands(&mut self) {
        self.user_eval = self.user_hole.and_then(|h| evaluate_holdem(&h, &self.board).ok());
        self.computer_eval =
            self.computer_hole.and_then(|h| evaluate_holdem(&h, &self.board).ok());
    }

    /// Compare both hands on the full board and pay the pot out.
    fn resolve(&mut self) {
        self.grade_hands();
        let (Some(user), Some(computer)) = (self.user_eval, self.computer_eval) else {
            self.abort(format!("showdown with {} board cards", self.board.len()));
            return;
        };
        let winner = match self.config.tie_break.compare(&user, &computer) {
            Ordering::Greater => Winner::User,
            Ordering::Less => Winner::Computer,
            Ordering::Equal => Winner::Push,
        };
        log::debug!("showdown: user {} vs computer {}", user.category, computer.category);
        let payout = self.betting.settle(winner);
        self.finish_round(Outcome::Showdown { winner, payout });
    }

    fn abort(&mut self, reason: impl fmt::Display) {
        log::error!("round aborted: {reason}");
        let refund = self.betting.refund();
        self.finish_round(Outcome::Aborted { refund });
    }

    fn finish_round(&mut self, outcome: Outcome) {
        self.rounds_played += 1;
        log::info!(
            "round {} over: {outcome}; balances user {} computer {}",
            self.rounds_played,
            self.betting.user_balance(),
            self.betting.computer_balance()
        );
        self.outcome = Some(outcome);
    }

    fn board_text(&self) -> String {
        self.board.as_slice().iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
    }

    fn computer_hole_visible(&self) -> bool {
        self.betting.phase() == Phase::RoundOver
            && matches!(self.outcome, Some(o) if o.winner().is_some())
    }

    pub fn snapshot(&self) -> Snapshot {
        let b = &self.betting;
        Snapshot {
            phase: b.phase(),
            pot: b.pot(),
            current_wager: b.current_wager(),
            minimum_wager: b.minimum_wager(),
            amount_at_risk: b.amount_at_risk(),
            user_balance: b.user_balance(),
            computer_balance: b.computer_balance(),
            community: self.board.as_slice().to_vec(),
            user_hole: self.user_hole,
            computer_hole: self.computer_hole.filter(|_| self.computer_hole_visible()),
            computer_thinking: b.computer_pending(),
            can_raise: b.validate(Action::Raise).is_ok(),
            outcome: self.outcome,
            user_category: self.user_eval.map(|e| e.category),
            computer_category: self.computer_eval.map(|e| e.category),
            rounds_played: self.rounds_played,
        }
    }
}
