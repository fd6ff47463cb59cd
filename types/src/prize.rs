use serde::{Deserialize, Serialize};

/// One player's row in the settlement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPrize {
    pub member_id: String,
    /// 1-based rank by descending chips (ties keep submission order).
    pub rank: u32,
    pub chips: u64,
    /// Share of total chips among chip-holding players, in basis points.
    /// Informational; payouts are computed from raw chip counts.
    pub chip_share_bps: u32,
    /// Chip-proportional share of the distributable pool, floored to the
    /// rounding unit.
    pub chip_prize: u64,
    /// Carve-out amount for a podium finisher, else 0.
    pub podium_bonus: u64,
    /// Final payout after the remainder correction.
    pub payout: u64,
}

/// Carve-out paid to one podium finisher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodiumPrize {
    pub rank: u32,
    /// Configured percent for this slot.
    pub percent: u64,
    pub amount: u64,
}

/// Full prize settlement for one tournament.
///
/// Always fully populated; degenerate inputs produce a zeroed settlement,
/// never an error. `adjustment` and `undistributed` surface every corrective
/// policy step so the figures can be audited.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settlement {
    pub gross_pool: u64,
    pub net_pool: u64,
    pub activity_bonus: u64,
    pub carve_out_total: u64,
    pub distributable_pool: u64,
    /// Sum of chip-proportional prizes before the remainder correction.
    pub chip_prize_total: u64,
    /// Sum of final payouts.
    pub payout_total: u64,
    /// Remainder added to the rank-1 payout to force exact conservation.
    pub adjustment: i64,
    /// Net pool money no payout policy could assign (all players at zero
    /// chips). Reported, never silently dropped.
    pub undistributed: u64,
    pub podium: Vec<PodiumPrize>,
    pub players: Vec<PlayerPrize>,
}
