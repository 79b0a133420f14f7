//! Logging utilities
//!
//! Thin helpers over the `log` facade so every crate logs under the same
//! target. The backend is picked by the binary: `console_log` in the
//! browser, `env_logger` on the terminal.

pub const TARGET: &str = "fabo";

/// Log an info message
#[inline]
pub fn info(msg: &str) {
    ::log::info!(target: TARGET, "{}", msg);
}

/// Log a warning message
#[inline]
pub fn warn(msg: &str) {
    ::log::warn!(target: TARGET, "{}", msg);
}

/// Log an error message
#[inline]
pub fn error(msg: &str) {
    ::log::error!(target: TARGET, "{}", msg);
}

/// Log a debug message with a label
#[inline]
pub fn debug(label: &str, msg: &str) {
    ::log::debug!(target: TARGET, "[{}] {}", label, msg);
}

/// Log a summary of the board after a turn lands
pub fn state_summary(game_id: u64, player_id: u32, turns: u64, p1_health: i32, p2_health: i32) {
    ::log::debug!(
        target: TARGET,
        "game={} player={} turns={} health={}/{}",
        game_id,
        player_id,
        turns,
        p1_health,
        p2_health
    );
}

/// Log an action being dispatched
#[inline]
pub fn action(name: &str, details: &str) {
    ::log::debug!(target: TARGET, "action {}: {}", name, details);
}

/// Log action result
#[inline]
pub fn result(success: bool, msg: &str) {
    if success {
        ::log::debug!(target: TARGET, "ok: {}", msg);
    } else {
        ::log::warn!(target: TARGET, "failed: {}", msg);
    }
}
