//! Prize allocation engine.
//!
//! Pure settlement of a tournament prize pool in three stages: podium
//! carve-out first (it reduces the pool before the proportional split),
//! then chip-proportional distribution, then a single remainder correction
//! that forces exact conservation against the net pool.
//!
//! Every stage is deterministic integer arithmetic; identical inputs
//! produce identical settlements, and the engine never mutates its inputs
//! or holds state between calls.

use feltbook_types::{
    rank_standings, CarveOut, EntryEconomics, PlayerPrize, PlayerStanding, PodiumPrize,
    PoolBreakdown, RankedStanding, Settlement, BPS_DENOMINATOR, PODIUM_SLOTS,
};

use crate::rounding::{clamp_i64, floor_to_unit, proportional, round_half_up_percent};

/// Derive the pool quantities for one settlement run.
///
/// `eligible_players` is the number of standings with chips; with none, no
/// carve-out is reserved (there is nobody to pay it to) and the whole net
/// pool stays undistributable.
pub fn pool_breakdown(economics: &EntryEconomics, eligible_players: usize) -> PoolBreakdown {
    let per_buyin = economics.entry_fee.saturating_sub(economics.admin_fee);
    let gross_pool = per_buyin.saturating_mul(economics.buyin_count);
    let net_pool = gross_pool.saturating_sub(economics.activity_bonus);

    let requested = match economics.carve_out {
        CarveOut::FixedFromNet { amount } => amount,
        CarveOut::PercentOfGross { percent } => round_half_up_percent(gross_pool, percent),
    };
    let carve_out_total = if eligible_players == 0 {
        0
    } else {
        requested.min(net_pool)
    };

    PoolBreakdown {
        gross_pool,
        net_pool,
        carve_out_total,
        distributable_pool: net_pool - carve_out_total,
    }
}

/// Split the carve-out pot across the eligible podium slots.
///
/// Non-final slots take `round_half_up(pot * percent / 100)`, clamped to
/// what remains of the pot; the final eligible slot absorbs the exact
/// residual. The amounts therefore always sum to the pot, whatever the
/// split percentages say.
fn podium_carve_out(pot: u64, split: &[u64; 3], eligible_players: usize) -> Vec<PodiumPrize> {
    let slots = eligible_players.min(PODIUM_SLOTS);
    if pot == 0 || slots == 0 {
        return Vec::new();
    }

    let mut prizes = Vec::with_capacity(slots);
    let mut remaining = pot;
    for (i, &percent) in split.iter().take(slots).enumerate() {
        let amount = if i + 1 == slots {
            remaining
        } else {
            round_half_up_percent(pot, percent).min(remaining)
        };
        remaining -= amount;
        prizes.push(PodiumPrize {
            rank: (i + 1) as u32,
            percent,
            amount,
        });
    }
    prizes
}

/// Chip-proportional share of the distributable pool for each ranked
/// standing, floored to the rounding unit. Zero-chip players get 0 and are
/// excluded from the denominator.
fn chip_distribution(pool: u64, ranked: &[RankedStanding], unit: u64) -> Vec<u64> {
    let total_chips = ranked
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.chips));
    ranked
        .iter()
        .map(|entry| {
            if entry.chips == 0 {
                0
            } else {
                floor_to_unit(proportional(pool, entry.chips, total_chips), unit)
            }
        })
        .collect()
}

/// Settle a tournament: compute every player's payout from the entry
/// economics and final chip counts.
///
/// Degenerate inputs (zero pool, no standings, all chips at zero) return a
/// well-formed zeroed settlement rather than an error, so callers can
/// always render the result.
pub fn settle(economics: &EntryEconomics, standings: &[PlayerStanding]) -> Settlement {
    let unit = economics.rounding_unit.max(1);
    let ranked = rank_standings(standings);
    // Sorted descending, so the chip-holding players are a leading run.
    let eligible = ranked.iter().filter(|r| r.chips > 0).count();
    let pools = pool_breakdown(economics, eligible);

    if standings.is_empty() || pools.gross_pool == 0 {
        return Settlement::default();
    }

    let podium = podium_carve_out(pools.carve_out_total, &economics.podium_split, eligible);
    let chip_prizes = chip_distribution(pools.distributable_pool, &ranked, unit);

    let total_chips = ranked
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.chips));

    let mut chip_prize_total: u64 = 0;
    let mut players: Vec<PlayerPrize> = Vec::with_capacity(ranked.len());
    for (i, entry) in ranked.iter().enumerate() {
        if entry.chips == 0 {
            players.push(PlayerPrize {
                member_id: entry.member_id.clone(),
                rank: entry.rank,
                chips: 0,
                chip_share_bps: 0,
                chip_prize: 0,
                podium_bonus: 0,
                payout: 0,
            });
            continue;
        }

        let chip_prize = chip_prizes[i];
        let podium_bonus = podium.get(i).map_or(0, |p| p.amount);
        chip_prize_total = chip_prize_total.saturating_add(chip_prize);
        players.push(PlayerPrize {
            member_id: entry.member_id.clone(),
            rank: entry.rank,
            chips: entry.chips,
            chip_share_bps: proportional(BPS_DENOMINATOR, entry.chips, total_chips) as u32,
            chip_prize,
            podium_bonus,
            payout: floor_to_unit(chip_prize.saturating_add(podium_bonus), unit),
        });
    }

    let payout_total: u64 = players.iter().fold(0u64, |acc, p| acc.saturating_add(p.payout));

    // Remainder policy: whatever flooring left unassigned goes, in full, to
    // the rank-1 player. A negative remainder (degenerate configuration)
    // clamps that payout at zero; the reported adjustment keeps the
    // shortfall visible either way.
    let (adjustment, undistributed) = if eligible == 0 {
        (0, pools.net_pool)
    } else {
        let remainder = clamp_i64(pools.net_pool as i128 - payout_total as i128);
        let first = &mut players[0];
        if remainder >= 0 {
            first.payout = first.payout.saturating_add(remainder as u64);
        } else {
            first.payout = first.payout.saturating_sub(remainder.unsigned_abs());
        }
        (remainder, 0)
    };

    let payout_total = players.iter().fold(0u64, |acc, p| acc.saturating_add(p.payout));

    Settlement {
        gross_pool: pools.gross_pool,
        net_pool: pools.net_pool,
        activity_bonus: economics.activity_bonus,
        carve_out_total: pools.carve_out_total,
        distributable_pool: pools.distributable_pool,
        chip_prize_total,
        payout_total,
        adjustment,
        undistributed,
        podium,
        players,
    }
}
