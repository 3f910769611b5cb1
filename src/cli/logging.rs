//! Output gating for the pruning CLI
//!
//! Text reports (matrices, removal tables) go out at Normal; the
//! removal-by-removal narration only at Verbose; Quiet silences everything.
//! Machine-readable output (`--format json`) bypasses this gate entirely so
//! stdout stays parseable.

/// How much of the pruning run to narrate
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    /// Errors only
    Quiet,
    /// Matrices, removal log, and kept items
    Normal,
    /// Normal plus a line per eliminated item
    Verbose,
}

/// True when output tagged `required` should print at the current `level`
fn permits(level: LogLevel, required: LogLevel) -> bool {
    match level {
        LogLevel::Quiet => false,
        LogLevel::Normal => required == LogLevel::Normal,
        LogLevel::Verbose => true,
    }
}

/// Print `msg` when the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if permits(level, required) {
        println!("{msg}");
    }
}
