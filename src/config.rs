use crate::evaluator::TieBreak;
use std::time::Duration;

/// Table settings for a heads-up game.
///
/// ```
/// use headsup_holdem::config::TableConfig;
/// use std::time::Duration;
///
/// let cfg = TableConfig::default().with_seed(7).with_computer_delay(Duration::ZERO);
/// assert_eq!(cfg.minimum_wager, 20);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    /// Balance each side starts with, and is reset to after a bankruptcy.
    pub starting_balance: u64,
    /// Wager required to call at the start of every betting phase.
    pub minimum_wager: u64,
    /// How long the computer "thinks" before the next cards are revealed.
    pub computer_delay: Duration,
    /// Number of 52-card sets in the deck.
    pub deck_multiple: usize,
    pub tie_break: TieBreak,
    /// Seed for the shuffle RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Ticks per second the driving loop is expected to call `tick` at.
    pub tick_hz: u32,
}

impl TableConfig {
    pub const DEFAULT_STARTING_BALANCE: u64 = 500;
    pub const DEFAULT_MINIMUM_WAGER: u64 = 20;
    pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_secs(1);
    pub const DEFAULT_TICK_HZ: u32 = 30;
    /// Largest starting balance; keeps every pot and payout sum inside `u64`.
    pub const MAX_STARTING_BALANCE: u64 = u64::MAX / 4;
    pub const MAX_COMPUTER_DELAY: Duration = Duration::from_secs(60 * 60);

    pub fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    pub fn with_minimum_wager(mut self, wager: u64) -> Self {
        self.minimum_wager = wager;
        self
    }

    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    pub fn with_deck_multiple(mut self, multiple: usize) -> Self {
        self.deck_multiple = multiple;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set a deterministic RNG seed for reproducible shuffles.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tick_hz(mut self, hz: u32) -> Self {
        self.tick_hz = hz;
        self
    }

    /// Interval between ticks implied by `tick_hz`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_hz.max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_multiple == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        if self.minimum_wager == 0 {
            return Err(ConfigError::ZeroMinimumWager);
        }
        if self.starting_balance < self.minimum_wager {
            return Err(ConfigError::BalanceBelowMinimum {
                balance: self.starting_balance,
                minimum: self.minimum_wager,
            });
        }
        if self.starting_balance > Self::MAX_STARTING_BALANCE {
            return Err(ConfigError::BalanceTooLarge {
                balance: self.starting_balance,
                maximum: Self::MAX_STARTING_BALANCE,
            });
        }
        if self.computer_delay > Self::MAX_COMPUTER_DELAY {
            return Err(ConfigError::DelayTooLong {
                delay: self.computer_delay,
                maximum: Self::MAX_COMPUTER_DELAY,
            });
        }
        if self.tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_balance: Self::DEFAULT_STARTING_BALANCE,
            minimum_wager: Self::DEFAULT_MINIMUM_WAGER,
            computer_delay: Self::DEFAULT_COMPUTER_DELAY,
            deck_multiple: 1,
            tie_break: TieBreak::default(),
            seed: None,
            tick_hz: Self::DEFAULT_TICK_HZ,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("deck multiple must be at least 1")]
    EmptyDeck,
    #[error("minimum wager must be positive")]
    ZeroMinimumWager,
    #[error("starting balance {balance} is below the minimum wager {minimum}")]
    BalanceBelowMinimum { balance: u64, minimum: u64 },
    #[error("starting balance {balance} exceeds {maximum}")]
    BalanceTooLarge { balance: u64, maximum: u64 },
    #[error("computer delay {delay:?} exceeds {maximum:?}")]
    DelayTooLong { delay: Duration, maximum: Duration },
    #[error("tick rate must be positive")]
    ZeroTickRate,
}
