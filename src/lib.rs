//! headsup-holdem: heads-up Texas Hold'em core
//!
//! Goals:
//! - Best-of-seven hand evaluation with full kicker comparison
//! - A human-vs-computer betting state machine driven by a caller-supplied clock
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use headsup_holdem::cards::{Card, Rank, Suit};
//! use headsup_holdem::evaluator::{evaluate_holdem, HandCategory};
//! use headsup_holdem::hand::{Board, HoleCards};
//!
//! let hole = HoleCards::new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! );
//! let board = Board::try_new(vec![
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ]).unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, HandCategory::OnePair);
//! ```
//!
//! ## Quick start: play a round
//! ```
//! use headsup_holdem::betting::{Action, Phase};
//! use headsup_holdem::config::TableConfig;
//! use headsup_holdem::engine::GameEngine;
//! use headsup_holdem::game::Game;
//! use std::time::{Duration, Instant};
//!
//! let mut game = Game::new(TableConfig::default().with_seed(1)).unwrap();
//! let t0 = Instant::now();
//! game.apply_action_at(Action::Call, t0).unwrap();
//! assert!(game.current_state().computer_thinking);
//! assert!(game.tick(t0 + Duration::from_secs(1)));
//! assert_eq!(game.current_state().phase, Phase::Flop);
//! ```
//!
//! ## Simulator
//! Play scripted rounds headlessly with:
//! ```sh
//! RUST_LOG=info cargo run --bin holdem-sim -- --rounds 10 --seed 7
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
