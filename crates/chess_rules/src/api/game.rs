//! Game lifecycle management

use crate::config::{Layout, RulesConfig};
use crate::state::GameState;

/// Create a new game from `layout` under `rules`
pub fn new_game(layout: Layout, rules: RulesConfig) -> GameState {
    GameState::with_config(layout, rules)
}

/// Reset to the standard opening position, keeping the rule settings
pub fn reset_game(state: &mut GameState) {
    *state = GameState::with_config(Layout::Standard, state.rules());
}
