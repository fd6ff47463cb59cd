//! Observability around the pure settlement call.
//!
//! The engine itself is side-effect free; tracing and explanation live here
//! as a decorator so diagnostic output can never influence the figures.

use feltbook_types::{EntryEconomics, PlayerStanding, Settlement};
use serde::Serialize;
use tracing::{debug, info};

use crate::allocation::settle;

/// Structured explanation of one settlement run, derived entirely from the
/// settlement output. Suitable for audit logs or export alongside the
/// figures themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AllocationTrace {
    pub eligible_players: usize,
    pub total_chips: u64,
    pub gross_pool: u64,
    pub net_pool: u64,
    pub carve_out_total: u64,
    pub distributable_pool: u64,
    pub podium_amounts: Vec<u64>,
    pub adjustment: i64,
    pub undistributed: u64,
}

impl AllocationTrace {
    pub fn from_settlement(settlement: &Settlement) -> Self {
        let eligible_players = settlement.players.iter().filter(|p| p.chips > 0).count();
        let total_chips = settlement
            .players
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.chips));
        Self {
            eligible_players,
            total_chips,
            gross_pool: settlement.gross_pool,
            net_pool: settlement.net_pool,
            carve_out_total: settlement.carve_out_total,
            distributable_pool: settlement.distributable_pool,
            podium_amounts: settlement.podium.iter().map(|p| p.amount).collect(),
            adjustment: settlement.adjustment,
            undistributed: settlement.undistributed,
        }
    }
}

/// Emit tracing events describing a computed settlement.
pub fn log_settlement(settlement: &Settlement) {
    info!(
        gross_pool = settlement.gross_pool,
        net_pool = settlement.net_pool,
        carve_out = settlement.carve_out_total,
        payout_total = settlement.payout_total,
        adjustment = settlement.adjustment,
        players = settlement.players.len(),
        "settlement computed"
    );
    for prize in &settlement.players {
        debug!(
            member = %prize.member_id,
            rank = prize.rank,
            chips = prize.chips,
            chip_prize = prize.chip_prize,
            podium_bonus = prize.podium_bonus,
            payout = prize.payout,
            "player payout"
        );
    }
    if settlement.undistributed > 0 {
        info!(
            undistributed = settlement.undistributed,
            "net pool stranded: no player holds chips"
        );
    }
}

/// Settle and return the structured trace, logging along the way.
pub fn settle_traced(
    economics: &EntryEconomics,
    standings: &[PlayerStanding],
) -> (Settlement, AllocationTrace) {
    let settlement = settle(economics, standings);
    let trace = AllocationTrace::from_settlement(&settlement);
    log_settlement(&settlement);
    (settlement, trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feltbook_types::CarveOut;

    #[test]
    fn test_trace_mirrors_settlement() {
        let economics = EntryEconomics {
            carve_out: CarveOut::FixedFromNet { amount: 1_000 },
            ..EntryEconomics::new(600, 10)
        };
        let standings = vec![
            PlayerStanding::new("alice", 6_000),
            PlayerStanding::new("bob", 4_000),
            PlayerStanding::new("carol", 0),
        ];

        let (settlement, trace) = settle_traced(&economics, &standings);
        assert_eq!(trace.eligible_players, 2);
        assert_eq!(trace.total_chips, 10_000);
        assert_eq!(trace.net_pool, settlement.net_pool);
        assert_eq!(trace.podium_amounts, vec![500, 500]);
        assert_eq!(trace.adjustment, settlement.adjustment);
    }

    #[test]
    fn test_trace_exports_as_json() {
        let economics = EntryEconomics::new(600, 10);
        let standings = vec![PlayerStanding::new("alice", 5_000)];
        let (_, trace) = settle_traced(&economics, &standings);

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["net_pool"], 6_000);
        assert_eq!(value["eligible_players"], 1);
    }

    #[test]
    fn test_traced_settlement_matches_pure_call() {
        let economics = EntryEconomics::new(600, 10);
        let standings = vec![PlayerStanding::new("alice", 1)];

        let (traced, _) = settle_traced(&economics, &standings);
        assert_eq!(traced, settle(&economics, &standings));
    }
}
