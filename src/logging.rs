//! Internal logging helpers for structured tristate events.

/// Single logging target for the crate.
pub(crate) const LOG_TARGET: &str = "tristate";

/// Records the out-of-range code observed by a truth decode.
///
/// Emitted once, immediately before the decode aborts; the panic itself
/// carries no context about where the code came from, so this line is the
/// place to capture it for post-mortem logs.
pub(crate) fn log_decode_defect(code: u32) {
    log::error!(
        target: LOG_TARGET,
        "event=truth_decode_defect code={code} expected_range=0..3"
    );
}
