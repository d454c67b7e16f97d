//! Threat-tier scores for candidate evaluation
//!
//! The exact values are a tuning knob; the tier ordering is the contract.
//! Closer-to-winning and more-open must strictly outrank further-from-winning
//! or more-closed, since that is what makes the opponent block real threats
//! before building its own.

/// Threat scores per tier
pub struct ThreatScore;

impl ThreatScore {
    /// Run that reaches the winning length outright
    pub const WIN: i32 = 100_000;
    /// Run one cell short of winning with a completable end
    pub const WIN_THREAT: i32 = 10_000;
    /// Run two short of winning with both ends open
    pub const OPEN_RUN: i32 = 1_000;
    /// Run two short of winning with a single open end
    pub const CLOSED_RUN: i32 = 100;
    /// Shorter run with both ends open
    pub const OPEN_STRETCH: i32 = 50;
    /// Fallback weight per cell of any other run
    pub const PER_CELL: i32 = 10;
}

/// Score a line assessment against the configured winning length.
///
/// `run_length` counts the hypothetical placement itself, so a value of
/// `win_length` means the placement wins outright and `win_length - 1`
/// means it creates an immediate win threat.
pub fn threat_score(run_length: usize, open_ends: u8, win_length: usize) -> i32 {
    if run_length == 0 {
        return 0;
    }
    if run_length >= win_length {
        return ThreatScore::WIN;
    }
    // Both ends blocked and still short of the winning length: the line
    // can never be completed.
    if open_ends == 0 {
        return 0;
    }
    if run_length + 1 == win_length {
        return ThreatScore::WIN_THREAT;
    }
    if run_length + 2 == win_length {
        return match open_ends {
            2 => ThreatScore::OPEN_RUN,
            1 => ThreatScore::CLOSED_RUN,
            _ => 0,
        };
    }
    if run_length >= 2 && open_ends == 2 {
        return ThreatScore::OPEN_STRETCH;
    }
    ThreatScore::PER_CELL * run_length as i32
}
