// src/logging.rs
// =============================================================================
// Diagnostic logging setup.
//
// Logs go to stderr and are OFF unless the user passes -v. Without -v the
// only thing this program ever writes to stderr is the single error line
// printed by main.rs.
// =============================================================================

use tracing::Level;

// Maps the number of -v flags to the most detailed level we show
fn level_for(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

// Installs the global tracing subscriber (call once, at startup)
pub fn init(verbosity: u8) {
    let Some(level) = level_for(verbosity) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
