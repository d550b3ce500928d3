//! Plain-text presentation of events and player status.

use game_core::{GameEvent, GameState};

/// One log line, e.g. `[3] attack_hit: You hit the enemy #1 for 4.`
pub fn format_event(event: &GameEvent) -> String {
    format!("[{}] {}: {}", event.turn, event.category, event.message)
}

/// Compact status line shown after every command.
pub fn status_line(state: &GameState) -> String {
    let player = state.player();
    let mut line = format!(
        "Turn {} | HP {}/{} | ATK +{} | Enemies {}",
        state.turn_number(),
        player.hp,
        player.max_hp,
        player.attack_bonus,
        state.entities.enemy_count(),
    );
    if player.is_dashing() {
        line.push_str(&format!(" | Dash {}", player.dash_turns_remaining));
    }
    if state.is_game_over() {
        line.push_str(" | GAME OVER");
    }
    line
}
