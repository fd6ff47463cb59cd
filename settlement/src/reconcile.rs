//! Chip-count audit.
//!
//! Computes the facts only: whether counted chips match the total implied
//! by buy-ins. What to do about an imbalance is a caller concern.

use feltbook_types::PlayerStanding;
use serde::Serialize;

use crate::rounding::clamp_i64;

/// Expected vs counted chips for one tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChipAudit {
    /// `starting_stack * buyin_count`.
    pub expected: u64,
    /// Sum of the standings' chip counts.
    pub counted: u64,
    /// `counted - expected`; positive means chips appeared from nowhere.
    pub delta: i64,
}

impl ChipAudit {
    pub fn balanced(&self) -> bool {
        self.delta == 0
    }
}

/// Reconcile counted chips against the total the buy-ins put in play.
pub fn audit_chips(
    starting_stack: u64,
    buyin_count: u64,
    standings: &[PlayerStanding],
) -> ChipAudit {
    let expected = starting_stack.saturating_mul(buyin_count);
    let counted = standings
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.chips));
    ChipAudit {
        expected,
        counted,
        delta: clamp_i64(counted as i128 - expected as i128),
    }
}
