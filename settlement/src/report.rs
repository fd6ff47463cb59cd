//! Settlement report rendering.
//!
//! Formatting only; every figure comes from the settlement, audit, and
//! ledger structures.

use std::fmt::Write;

use feltbook_types::{CarveOut, EntryEconomics, Settlement};

use crate::ledger::NetPosition;
use crate::reconcile::ChipAudit;

fn format_bps(bps: u32) -> String {
    format!("{}.{:02}%", bps / 100, bps % 100)
}

fn ordinal(rank: u32) -> String {
    match rank {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{}th", n),
    }
}

/// Render the operator-facing settlement report.
pub fn render_report(
    name: &str,
    economics: &EntryEconomics,
    settlement: &Settlement,
    audit: Option<&ChipAudit>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== {} ==", name);
    let _ = writeln!(
        out,
        "buy-ins: {} x {} (admin fee {})",
        economics.buyin_count, economics.entry_fee, economics.admin_fee
    );
    let _ = writeln!(out, "gross pool:        {:>12}", settlement.gross_pool);
    let _ = writeln!(out, "activity bonus:    {:>12}", settlement.activity_bonus);
    let _ = writeln!(out, "net pool:          {:>12}", settlement.net_pool);

    match economics.carve_out {
        CarveOut::FixedFromNet { .. } => {
            let _ = writeln!(out, "podium carve-out:  {:>12}", settlement.carve_out_total);
        }
        CarveOut::PercentOfGross { percent } => {
            let _ = writeln!(
                out,
                "podium carve-out:  {:>12} ({}% of gross)",
                settlement.carve_out_total, percent
            );
        }
    }
    for prize in &settlement.podium {
        let _ = writeln!(
            out,
            "  {:<4} ({:>3}%) {:>12}",
            ordinal(prize.rank),
            prize.percent,
            prize.amount
        );
    }
    let _ = writeln!(out, "distributable:     {:>12}", settlement.distributable_pool);

    let _ = writeln!(out, "players:");
    for prize in &settlement.players {
        let _ = writeln!(
            out,
            "  #{:<3} {:<20} chips {:>10} ({:>7})  chip {:>10} + podium {:>8} => {:>10}",
            prize.rank,
            prize.member_id,
            prize.chips,
            format_bps(prize.chip_share_bps),
            prize.chip_prize,
            prize.podium_bonus,
            prize.payout
        );
    }

    if settlement.adjustment != 0 {
        let _ = writeln!(
            out,
            "adjustment to 1st: {:>+12}",
            settlement.adjustment
        );
    }
    if settlement.undistributed > 0 {
        let _ = writeln!(out, "undistributed:     {:>12}", settlement.undistributed);
    }
    let _ = writeln!(out, "total paid out:    {:>12}", settlement.payout_total);

    if let Some(audit) = audit {
        let status = if audit.balanced() { "balanced" } else { "OFF" };
        let _ = writeln!(
            out,
            "chip audit: expected {}, counted {}, delta {:+} ({})",
            audit.expected, audit.counted, audit.delta, status
        );
    }

    out
}

/// Render payouts netted against outstanding buy-in debt.
pub fn render_net_positions(positions: &[NetPosition]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "net positions (payout - outstanding):");
    for position in positions {
        let _ = writeln!(
            out,
            "  {:<20} payout {:>10}  owes {:>10}  net {:>+11}",
            position.member_id, position.payout, position.outstanding, position.net
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::settle;
    use crate::reconcile::audit_chips;
    use feltbook_types::PlayerStanding;

    fn example() -> (EntryEconomics, Vec<PlayerStanding>) {
        let economics = EntryEconomics {
            carve_out: CarveOut::FixedFromNet { amount: 1_000 },
            ..EntryEconomics::new(600, 10)
        };
        let standings = vec![
            PlayerStanding::new("alice", 6_000),
            PlayerStanding::new("bob", 4_000),
            PlayerStanding::new("carol", 0),
        ];
        (economics, standings)
    }

    #[test]
    fn test_report_carries_all_totals() {
        let (economics, standings) = example();
        let settlement = settle(&economics, &standings);
        let audit = audit_chips(1_000, 10, &standings);
        let report = render_report("Friday Game", &economics, &settlement, Some(&audit));

        assert!(report.contains("== Friday Game =="));
        assert!(report.contains("6000"));
        assert!(report.contains("alice"));
        assert!(report.contains("1st"));
        assert!(report.contains("chip audit"));
        assert!(report.contains("balanced"));
    }

    #[test]
    fn test_report_flags_unbalanced_audit() {
        let (economics, standings) = example();
        let settlement = settle(&economics, &standings);
        let audit = audit_chips(1_000, 11, &standings);
        let report = render_report("Friday Game", &economics, &settlement, Some(&audit));
        assert!(report.contains("OFF"));
    }

    #[test]
    fn test_format_bps() {
        assert_eq!(format_bps(10_000), "100.00%");
        assert_eq!(format_bps(5_500), "55.00%");
        assert_eq!(format_bps(7), "0.07%");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(11), "11th");
    }
}
