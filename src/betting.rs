//! Betting state machine for one heads-up round.
//!
//! The human acts; the computer always matches whatever the human commits.
//! After each match the computer "thinks" for a fixed delay, then the
//! orchestrator reveals the next community cards and calls
//! [`BettingRound::advance_street`].

use std::time::{Duration, Instant};

/// Round phases, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    RoundOver,
}

impl Phase {
    /// Community cards visible once this phase is reached.
    pub const fn community_cards(self) -> usize {
        match self {
            Phase::PreFlop => 0,
            Phase::Flop => 3,
            Phase::Turn => 4,
            Phase::River | Phase::Showdown | Phase::RoundOver => 5,
        }
    }

    /// The betting phase that follows this one, if cards remain to reveal.
    pub const fn next_street(self) -> Option<Phase> {
        match self {
            Phase::PreFlop => Some(Phase::Flop),
            Phase::Flop => Some(Phase::Turn),
            Phase::Turn => Some(Phase::River),
            Phase::River | Phase::Showdown | Phase::RoundOver => None,
        }
    }

    /// Whether the human may fold, call or raise in this phase.
    pub const fn is_betting(self) -> bool {
        matches!(self, Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Phase::PreFlop => "Pre-flop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
            Phase::RoundOver => "Round over",
        }
    }
}

/// Actions available to the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Call,
    Raise,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("the round is over")]
    RoundOver,
    #[error("the computer is still making its move")]
    ComputerTurn,
    #[error("not enough funds to raise: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },
    #[error("a round is still in progress")]
    RoundInProgress,
}

/// Who takes the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    User,
    Computer,
    /// Equal hands; the pot is split.
    Push,
}

impl Winner {
    pub const fn label(self) -> &'static str {
        match self {
            Winner::User => "User",
            Winner::Computer => "Computer",
            Winner::Push => "Nobody",
        }
    }
}

/// Chips paid out to each side when a round ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Payout {
    pub user: u64,
    pub computer: u64,
}

/// What the orchestrator must do after an accepted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Step {
    /// The human folded and the computer took the pot.
    Folded(Payout),
    /// The human could not cover the call; both balances were reset and the
    /// round ends as a fold.
    Bankrupt,
    /// Wagers matched; the next cards come out once the computer's delay ends.
    AwaitComputer,
    /// Wagers matched on the river; hands must be compared now.
    Showdown,
}

/// Money and phase for the current round.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BettingRound {
    pub(crate) pot: u64,
    pub(crate) current_wager: u64,
    pub(crate) amount_at_risk: u64,
    pub(crate) computer_committed: u64,
    pub(crate) user_balance: u64,
    pub(crate) computer_balance: u64,
    pub(crate) phase: Phase,
    pub(crate) folded: bool,
    pub(crate) computer_deadline: Option<Instant>,
    starting_balance: u64,
    minimum_wager: u64,
    computer_delay: Duration,
}

impl BettingRound {
    pub fn new(starting_balance: u64, minimum_wager: u64, computer_delay: Duration) -> Self {
        Self {
            pot: 0,
            current_wager: minimum_wager,
            amount_at_risk: 0,
            computer_committed: 0,
            user_balance: starting_balance,
            computer_balance: starting_balance,
            phase: Phase::RoundOver,
            folded: false,
            computer_deadline: None,
            starting_balance,
            minimum_wager,
            computer_delay,
        }
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    /// Amount required to call.
    pub fn current_wager(&self) -> u64 {
        self.current_wager
    }

    pub fn minimum_wager(&self) -> u64 {
        self.minimum_wager
    }

    /// Total the human has put in this round.
    pub fn amount_at_risk(&self) -> u64 {
        self.amount_at_risk
    }

    pub fn user_balance(&self) -> u64 {
        self.user_balance
    }

    pub fn computer_balance(&self) -> u64 {
        self.computer_balance
    }

    pub fn starting_balance(&self) -> u64 {
        self.starting_balance
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn folded(&self) -> bool {
        self.folded
    }

    pub fn computer_pending(&self) -> bool {
        self.computer_deadline.is_some()
    }

    /// Whether a raise would be accepted right now, funds-wise.
    pub fn can_raise(&self) -> bool {
        self.user_balance >= self.raise_cost()
    }

    fn raise_cost(&self) -> u64 {
        self.current_wager.saturating_mul(2)
    }

    /// Prepare for a new round. A side left with nothing restarts both balances.
    pub fn reset_for_round(&mut self) {
        if self.user_balance == 0 || self.computer_balance == 0 {
            log::warn!(
                "balance exhausted (user {}, computer {}); restarting both at {}",
                self.user_balance,
                self.computer_balance,
                self.starting_balance
            );
            self.reset_balances();
        }
        self.pot = 0;
        self.current_wager = self.minimum_wager;
        self.amount_at_risk = 0;
        self.computer_committed = 0;
        self.phase = Phase::PreFlop;
        self.folded = false;
        self.computer_deadline = None;
    }

    fn reset_balances(&mut self) {
        self.user_balance = self.starting_balance;
        self.computer_balance = self.starting_balance;
    }

    fn ensure_can_act(&self) -> Result<(), ActionError> {
        if !self.phase.is_betting() {
            return Err(ActionError::RoundOver);
        }
        if self.computer_deadline.is_some() {
            return Err(ActionError::ComputerTurn);
        }
        Ok(())
    }

    /// Check an action without applying it.
    pub fn validate(&self, action: Action) -> Result<(), ActionError> {
        self.ensure_can_act()?;
        if action == Action::Raise && !self.can_raise() {
            return Err(ActionError::InsufficientFunds {
                needed: self.raise_cost(),
                available: self.user_balance,
            });
        }
        Ok(())
    }

    pub fn apply(&mut self, action: Action, now: Instant) -> Result<Step, ActionError> {
        match action {
            Action::Fold => self.fold(),
            Action::Call => self.call(now),
            Action::Raise => self.raise(now),
        }
    }

    /// Forfeit the pot to the computer.
    pub fn fold(&mut self) -> Result<Step, ActionError> {
        self.validate(Action::Fold)?;
        log::debug!("user folds; computer takes {}", self.pot);
        self.folded = true;
        let payout = self.settle(Winner::Computer);
        Ok(Step::Folded(payout))
    }

    /// Match the current wager.
    pub fn call(&mut self, now: Instant) -> Result<Step, ActionError> {
        self.validate(Action::Call)?;
        if self.user_balance < self.current_wager {
            log::warn!(
                "user cannot cover {} with {}; restarting both balances",
                self.current_wager,
                self.user_balance
            );
            self.reset_balances();
            self.pot = 0;
            self.amount_at_risk = 0;
            self.computer_committed = 0;
            self.folded = true;
            self.settle(Winner::Computer);
            return Ok(Step::Bankrupt);
        }
        log::debug!("user calls {}", self.current_wager);
        Ok(self.commit(self.current_wager, now))
    }

    /// Double the wager, then both sides commit the doubled amount.
    pub fn raise(&mut self, now: Instant) -> Result<Step, ActionError> {
        self.validate(Action::Raise)?;
        self.current_wager = self.raise_cost();
        log::debug!("user raises to {}", self.current_wager);
        Ok(self.commit(self.current_wager, now))
    }

    fn commit(&mut self, amount: u64, now: Instant) -> Step {
        // The computer always matches, short only when it cannot cover.
        // The user never puts in more than the computer can call.
        let matched = amount.min(self.computer_balance);
        if matched < amount {
            log::debug!("computer covers only {matched} of {amount}; the rest stays with the user");
        }
        self.user_balance -= matched;
        self.amount_at_risk += matched;
        self.computer_balance -= matched;
        self.computer_committed += matched;
        self.pot += 2 * matched;
        if self.phase == Phase::River {
            self.phase = Phase::Showdown;
            return Step::Showdown;
        }
        // An unrepresentable deadline means the computer is ready at once.
        self.computer_deadline = Some(now.checked_add(self.computer_delay).unwrap_or(now));
        Step::AwaitComputer
    }

    /// True once the computer's delay has run out. Clears the deadline.
    pub fn computer_ready(&mut self, now: Instant) -> bool {
        match self.computer_deadline {
            Some(deadline) if now >= deadline => {
                self.computer_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Move to the next betting phase after its cards are revealed.
    pub fn advance_street(&mut self) -> Option<Phase> {
        let next = self.phase.next_street()?;
        self.phase = next;
        self.current_wager = self.minimum_wager;
        Some(next)
    }

    /// Pay the pot out and end the round. A push splits it; the odd chip goes to the user.
    pub fn settle(&mut self, winner: Winner) -> Payout {
        let payout = match winner {
            Winner::User => Payout { user: self.pot, computer: 0 },
            Winner::Computer => Payout { user: 0, computer: self.pot },
            Winner::Push => {
                let half = self.pot / 2;
                Payout { user: self.pot - half, computer: half }
            }
        };
        self.user_balance += payout.user;
        self.computer_balance += payout.computer;
        self.end_round();
        payout
    }

    /// Give back what each side committed and end the round with no winner.
    pub fn refund(&mut self) -> Payout {
        let payout = Payout { user: self.amount_at_risk, computer: self.computer_committed };
        self.user_balance += payout.user;
        self.computer_balance += payout.computer;
        self.end_round();
        payout
    }

    fn end_round(&mut self) {
        self.pot = 0;
        self.current_wager = self.minimum_wager;
        self.amount_at_risk = 0;
        self.computer_committed = 0;
        self.computer_deadline = None;
        self.phase = Phase::RoundOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> BettingRound {
        let mut b = BettingRound::new(500, 20, Duration::from_secs(1));
        b.reset_for_round();
        b
    }

    #[test]
    fn phases_reveal_three_one_one() {
        assert_eq!(Phase::PreFlop.next_street(), Some(Phase::Flop));
        assert_eq!(Phase::Flop.community_cards(), 3);
        assert_eq!(Phase::Turn.community_cards(), 4);
        assert_eq!(Phase::River.community_cards(), 5);
        assert_eq!(Phase::River.next_street(), None);
        assert!(!Phase::Showdown.is_betting());
    }

    #[test]
    fn call_matches_and_waits_for_computer() {
        let mut b = round();
        let t0 = Instant::now();
        assert_eq!(b.call(t0).unwrap(), Step::AwaitComputer);
        assert_eq!(b.pot, 40);
        assert_eq!(b.user_balance, 480);
        assert_eq!(b.computer_balance, 480);
        assert_eq!(b.amount_at_risk, 20);
        assert_eq!(b.call(t0), Err(ActionError::ComputerTurn));
        assert!(!b.computer_ready(t0 + Duration::from_millis(999)));
        assert!(b.computer_ready(t0 + Duration::from_secs(1)));
        assert!(!b.computer_pending());
    }

    #[test]
    fn raise_doubles_wager_and_commits_it() {
        let mut b = round();
        b.raise(Instant::now()).unwrap();
        assert_eq!(b.current_wager, 40);
        assert_eq!(b.pot, 80);
        assert_eq!(b.amount_at_risk, 40);
    }

    #[test]
    fn advance_street_resets_wager() {
        let mut b = round();
        let t0 = Instant::now();
        b.raise(t0).unwrap();
        assert!(b.computer_ready(t0 + Duration::from_secs(2)));
        assert_eq!(b.advance_street(), Some(Phase::Flop));
        assert_eq!(b.current_wager, 20);
    }

    #[test]
    fn unaffordable_raise_changes_nothing() {
        let mut b = round();
        b.user_balance = 39;
        let before = (b.pot, b.current_wager, b.user_balance, b.computer_balance, b.phase);
        assert_eq!(
            b.raise(Instant::now()),
            Err(ActionError::InsufficientFunds { needed: 40, available: 39 })
        );
        assert_eq!(before, (b.pot, b.current_wager, b.user_balance, b.computer_balance, b.phase));
        assert!(!b.computer_pending());
    }

    #[test]
    fn river_call_goes_to_showdown_without_delay() {
        let mut b = round();
        b.phase = Phase::River;
        assert_eq!(b.call(Instant::now()).unwrap(), Step::Showdown);
        assert_eq!(b.phase, Phase::Showdown);
        assert!(!b.computer_pending());
    }

    #[test]
    fn fold_pays_computer() {
        let mut b = round();
        b.pot = 100;
        let payout = match b.fold().unwrap() {
            Step::Folded(p) => p,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(payout, Payout { user: 0, computer: 100 });
        assert_eq!(b.computer_balance, 600);
        assert_eq!(b.phase, Phase::RoundOver);
        assert!(b.folded);
        assert_eq!(b.fold(), Err(ActionError::RoundOver));
    }

    #[test]
    fn short_call_restarts_economy() {
        let mut b = round();
        b.user_balance = 10;
        b.computer_balance = 990;
        b.pot = 60;
        assert_eq!(b.call(Instant::now()).unwrap(), Step::Bankrupt);
        assert_eq!(b.user_balance, 500);
        assert_eq!(b.computer_balance, 500);
        assert_eq!(b.pot, 0);
        assert_eq!(b.phase, Phase::RoundOver);
        assert!(b.folded);
    }

    #[test]
    fn push_gives_odd_chip_to_user() {
        let mut b = round();
        b.user_balance = 0;
        b.computer_balance = 0;
        b.pot = 41;
        assert_eq!(b.settle(Winner::Push), Payout { user: 21, computer: 20 });
    }

    #[test]
    fn computer_matches_only_what_it_has() {
        let mut b = round();
        b.computer_balance = 5;
        b.call(Instant::now()).unwrap();
        assert_eq!(b.computer_balance, 0);
        assert_eq!(b.user_balance, 495, "uncalled part stays with the user");
        assert_eq!(b.amount_at_risk, 5);
        assert_eq!(b.pot, 10);
        b.computer_deadline = None;
        b.refund();
        assert_eq!(b.user_balance, 500);
        assert_eq!(b.computer_balance, 5);
    }

    #[test]
    fn broke_computer_wins_only_what_it_matched() {
        let mut b = round();
        b.phase = Phase::River;
        b.computer_balance = 5;
        assert_eq!(b.call(Instant::now()).unwrap(), Step::Showdown);
        assert_eq!(b.settle(Winner::Computer), Payout { user: 0, computer: 10 });
        assert_eq!((b.user_balance, b.computer_balance), (495, 10));
    }

    #[test]
    fn huge_delay_does_not_overflow_the_clock() {
        let mut b = BettingRound::new(500, 20, Duration::MAX);
        b.reset_for_round();
        let t0 = Instant::now();
        assert_eq!(b.call(t0).unwrap(), Step::AwaitComputer);
        assert!(b.computer_ready(t0));
    }

    #[test]
    fn reset_restores_exhausted_balances() {
        let mut b = round();
        b.computer_balance = 0;
        b.user_balance = 1000;
        b.end_round();
        b.reset_for_round();
        assert_eq!((b.user_balance, b.computer_balance), (500, 500));
        assert_eq!(b.phase, Phase::PreFlop);
    }
}
