use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::{DEFAULT_PODIUM_SPLIT, DEFAULT_ROUNDING_UNIT};

/// How the podium carve-out pot is funded.
///
/// `FixedFromNet` is the authoritative mode; `PercentOfGross` is the older
/// scheme kept as an explicit variant so historical tournaments can be
/// re-settled with the rules they ran under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum CarveOut {
    /// Fixed amount reserved from the net pool.
    FixedFromNet { amount: u64 },
    /// Pot computed as a percentage of the gross pool.
    PercentOfGross { percent: u64 },
}

impl CarveOut {
    /// No carve-out: the whole net pool goes to the chip-based split.
    pub fn none() -> Self {
        Self::FixedFromNet { amount: 0 }
    }
}

impl Default for CarveOut {
    fn default() -> Self {
        Self::none()
    }
}

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum EconomicsInvariantError {
    #[error("admin fee exceeds entry fee (admin={admin}, entry={entry})")]
    AdminFeeExceedsEntry { admin: u64, entry: u64 },
    #[error("rounding unit must be non-zero")]
    ZeroRoundingUnit,
    #[error("carve-out percent out of range (got={got}, max=100)")]
    CarveOutPercentOutOfRange { got: u64 },
}

/// Entry-fee economics for one tournament.
///
/// Amounts are whole currency units. `buyin_count` counts buy-in units sold,
/// not players; a player may have bought in more than once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryEconomics {
    /// Amount collected per buy-in.
    pub entry_fee: u64,
    /// Amount withheld per buy-in before pooling.
    #[serde(default)]
    pub admin_fee: u64,
    /// Buy-in units sold.
    pub buyin_count: u64,
    /// Funding rule for the podium carve-out pot.
    #[serde(default)]
    pub carve_out: CarveOut,
    /// Percent of the carve-out pot for ranks 1..3. Applied per slot; the
    /// final eligible slot absorbs the exact residual, so the split is not
    /// required to sum to 100.
    #[serde(default = "default_podium_split")]
    pub podium_split: [u64; 3],
    /// Removed from the pool before distribution; never paid to a player.
    #[serde(default)]
    pub activity_bonus: u64,
    /// Payout granularity.
    #[serde(default = "default_rounding_unit")]
    pub rounding_unit: u64,
}

fn default_podium_split() -> [u64; 3] {
    DEFAULT_PODIUM_SPLIT
}

fn default_rounding_unit() -> u64 {
    DEFAULT_ROUNDING_UNIT
}

impl EntryEconomics {
    pub fn new(entry_fee: u64, buyin_count: u64) -> Self {
        Self {
            entry_fee,
            admin_fee: 0,
            buyin_count,
            carve_out: CarveOut::none(),
            podium_split: DEFAULT_PODIUM_SPLIT,
            activity_bonus: 0,
            rounding_unit: DEFAULT_ROUNDING_UNIT,
        }
    }

    /// Check configuration invariants the type system cannot express.
    ///
    /// The settlement engine itself never fails on degenerate input; this is
    /// for callers that want to reject misconfigured tournaments up front.
    pub fn validate(&self) -> Result<(), EconomicsInvariantError> {
        if self.admin_fee > self.entry_fee {
            return Err(EconomicsInvariantError::AdminFeeExceedsEntry {
                admin: self.admin_fee,
                entry: self.entry_fee,
            });
        }
        if self.rounding_unit == 0 {
            return Err(EconomicsInvariantError::ZeroRoundingUnit);
        }
        if let CarveOut::PercentOfGross { percent } = self.carve_out {
            if percent > 100 {
                return Err(EconomicsInvariantError::CarveOutPercentOutOfRange { got: percent });
            }
        }
        Ok(())
    }
}

impl Default for EntryEconomics {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Pool quantities derived from [`EntryEconomics`] for one settlement run.
///
/// Computed fresh per call, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PoolBreakdown {
    /// `(entry_fee - admin_fee) * buyin_count`.
    pub gross_pool: u64,
    /// Gross pool minus the activity bonus.
    pub net_pool: u64,
    /// Carve-out pot actually reserved (clamped to the net pool; zero when
    /// no player holds chips).
    pub carve_out_total: u64,
    /// Net pool minus the carve-out pot; the chip-based distribution base.
    pub distributable_pool: u64,
}
