use clap::{Parser, ValueEnum};
use headsup_holdem::betting::{Action, Phase};
use headsup_holdem::config::{ConfigError, TableConfig};
use headsup_holdem::engine::GameEngine;
use headsup_holdem::evaluator::{HandCategory, TieBreak};
use headsup_holdem::game::Game;
use std::process::ExitCode;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TieBreakArg {
    Kickers,
    HighCard,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Kickers => TieBreak::Kickers,
            TieBreakArg::HighCard => TieBreak::HighCard,
        }
    }
}

/// Play scripted heads-up rounds against the computer without a screen.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rounds to play
    #[arg(short, long, default_value_t = 5)]
    rounds: u64,
    /// Shuffle seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Raise whenever affordable instead of calling
    #[arg(long)]
    raise: bool,
    /// Simulated ticks per second
    #[arg(long, default_value_t = TableConfig::DEFAULT_TICK_HZ)]
    tick_hz: u32,
    /// Computer thinking time in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
    #[arg(long, value_enum, default_value_t = TieBreakArg::Kickers)]
    tie_break: TieBreakArg,
}

impl Args {
    fn table_config(&self) -> TableConfig {
        let cfg = TableConfig::default()
            .with_tick_hz(self.tick_hz)
            .with_computer_delay(Duration::from_millis(self.delay_ms))
            .with_tie_break(self.tie_break.into());
        match self.seed {
            Some(seed) => cfg.with_seed(seed),
            None => cfg,
        }
    }
}

/// Upper bound on ticks spent waiting for one reveal.
const MAX_WAIT_TICKS: u32 = 10_000;

fn play_round(game: &mut Game, raise: bool, clock: &mut Instant, step: Duration) {
    loop {
        let state = game.current_state();
        if !state.phase.is_betting() {
            return;
        }
        let action = if raise && state.can_raise { Action::Raise } else { Action::Call };
        if let Err(e) = game.apply_action_at(action, *clock) {
            log::warn!("scripted {action:?} refused: {e}; folding");
            if let Err(e) = game.apply_action_at(Action::Fold, *clock) {
                log::warn!("scripted fold refused: {e}");
            }
            return;
        }
        let mut waited = 0;
        while game.current_state().computer_thinking && waited < MAX_WAIT_TICKS {
            *clock += step;
            game.tick(*clock);
            waited += 1;
        }
    }
}

fn category_label(category: Option<HandCategory>) -> &'static str {
    category.map_or("-", HandCategory::label)
}

fn run(args: &Args) -> Result<(), ConfigError> {
    let cfg = args.table_config();
    let step = cfg.tick_interval();
    let mut game = Game::new(cfg)?;
    let mut clock = Instant::now();

    for n in 0..args.rounds {
        if n > 0 {
            if let Err(e) = game.start_new_round() {
                log::error!("could not start round {}: {e}", n + 1);
                break;
            }
        }
        play_round(&mut game, args.raise, &mut clock, step);
        let state = game.current_state();
        if state.phase == Phase::RoundOver {
            println!(
                "round {:>3}: {:<32} user {:<15} computer {:<15} balances {}/{}",
                state.rounds_played,
                state.outcome.map_or_else(String::new, |o| o.to_string()),
                category_label(state.user_category),
                category_label(state.computer_category),
                state.user_balance,
                state.computer_balance
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("invalid table settings: {e}");
            eprintln!("holdem-sim {}: {e}", headsup_holdem::VERSION);
            ExitCode::FAILURE
        }
    }
}
