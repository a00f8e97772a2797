// Game engine API boundary. Front ends (a GUI, the headless simulator, tests)
// drive the table through this trait and read back a `Snapshot`, without
// touching deck or betting internals. Implemented for `Game`.

use crate::betting::{Action, ActionError};
use crate::game::{Game, Snapshot};
use std::time::Instant;

pub trait GameEngine {
    // Round lifecycle
    fn start_new_round(&mut self) -> Result<(), ActionError>;

    // User actions
    fn apply_action(&mut self, action: Action) -> Result<(), ActionError>;
    fn apply_action_at(&mut self, action: Action, now: Instant) -> Result<(), ActionError>;

    // Clock; true when community cards were revealed
    fn tick(&mut self, now: Instant) -> bool;

    // Queries
    fn current_state(&self) -> Snapshot;
}

impl GameEngine for Game {
    fn start_new_round(&mut self) -> Result<(), ActionError> {
        Game::start_new_round(self)
    }

    fn apply_action(&mut self, action: Action) -> Result<(), ActionError> {
        Game::apply_action(self, action)
    }
    fn apply_action_at(&mut self, action: Action, now: Instant) -> Result<(), ActionError> {
        Game::apply_action_at(self, action, now)
    }

    fn tick(&mut self, now: Instant) -> bool {
        Game::tick(self, now)
    }

    fn current_state(&self) -> Snapshot {
        self.snapshot()
    }
}
