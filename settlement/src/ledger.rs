//! Payment ledger: who bought in, who has paid, and who still owes what.
//!
//! The ledger tracks the money side the allocation engine does not see.
//! Accounts are keyed by member id in a `BTreeMap` so iteration order is
//! deterministic.

use std::collections::BTreeMap;

use feltbook_types::Settlement;
use serde::Serialize;
use thiserror::Error as ThisError;

use crate::rounding::clamp_i64;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum LedgerError {
    /// A payment was recorded for a member with no buy-in on file.
    #[error("unknown member: {member_id}")]
    UnknownMember { member_id: String },
}

/// One member's buy-in and payment tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct PlayerAccount {
    pub buyins: u64,
    pub paid: u64,
}

impl PlayerAccount {
    /// Total owed for the recorded buy-ins.
    pub fn owed(&self, entry_fee: u64) -> u64 {
        self.buyins.saturating_mul(entry_fee)
    }

    /// Amount still outstanding after payments.
    pub fn outstanding(&self, entry_fee: u64) -> u64 {
        self.owed(entry_fee).saturating_sub(self.paid)
    }
}

/// A member's final position: prize payout against outstanding debt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetPosition {
    pub member_id: String,
    pub payout: u64,
    pub outstanding: u64,
    /// `payout - outstanding`; negative means the member still owes the
    /// house after prizes.
    pub net: i64,
}

/// Buy-in and payment bookkeeping for one tournament.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PaymentLedger {
    accounts: BTreeMap<String, PlayerAccount>,
}

impl PaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` additional buy-ins for a member, opening the account
    /// if needed.
    pub fn record_buyin(&mut self, member_id: &str, count: u64) {
        let account = self.accounts.entry(member_id.to_string()).or_default();
        account.buyins = account.buyins.saturating_add(count);
    }

    /// Record a payment against an existing account.
    ///
    /// A payment for a member with no buy-in is a data error, not a new
    /// account.
    pub fn record_payment(&mut self, member_id: &str, amount: u64) -> Result<(), LedgerError> {
        match self.accounts.get_mut(member_id) {
            Some(account) => {
                account.paid = account.paid.saturating_add(amount);
                Ok(())
            }
            None => Err(LedgerError::UnknownMember {
                member_id: member_id.to_string(),
            }),
        }
    }

    pub fn account(&self, member_id: &str) -> Option<&PlayerAccount> {
        self.accounts.get(member_id)
    }

    pub fn accounts(&self) -> impl Iterator<Item = (&String, &PlayerAccount)> {
        self.accounts.iter()
    }

    pub fn total_buyins(&self) -> u64 {
        self.accounts
            .values()
            .fold(0u64, |acc, a| acc.saturating_add(a.buyins))
    }

    pub fn total_owed(&self, entry_fee: u64) -> u64 {
        self.accounts
            .values()
            .fold(0u64, |acc, a| acc.saturating_add(a.owed(entry_fee)))
    }

    pub fn total_paid(&self) -> u64 {
        self.accounts
            .values()
            .fold(0u64, |acc, a| acc.saturating_add(a.paid))
    }

    /// Pair settlement rows with ledger accounts: each member's payout, what
    /// they still owe, and the signed net. Members without an account are
    /// treated as fully paid.
    pub fn net_settlement(&self, settlement: &Settlement, entry_fee: u64) -> Vec<NetPosition> {
        settlement
            .players
            .iter()
            .map(|prize| {
                let outstanding = self
                    .account(&prize.member_id)
                    .map_or(0, |a| a.outstanding(entry_fee));
                NetPosition {
                    member_id: prize.member_id.clone(),
                    payout: prize.payout,
                    outstanding,
                    net: clamp_i64(prize.payout as i128 - outstanding as i128),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::settle;
    use feltbook_types::{EntryEconomics, PlayerStanding};

    #[test]
    fn test_account_arithmetic() {
        let mut ledger = PaymentLedger::new();
        ledger.record_buyin("alice", 2);
        ledger.record_payment("alice", 700).unwrap();

        let account = ledger.account("alice").unwrap();
        assert_eq!(account.owed(600), 1_200);
        assert_eq!(account.outstanding(600), 500);
    }

    #[test]
    fn test_overpayment_outstanding_saturates_at_zero() {
        let mut ledger = PaymentLedger::new();
        ledger.record_buyin("alice", 1);
        ledger.record_payment("alice", 900).unwrap();
        assert_eq!(ledger.account("alice").unwrap().outstanding(600), 0);
    }

    #[test]
    fn test_payment_for_unknown_member_rejected() {
        let mut ledger = PaymentLedger::new();
        assert_eq!(
            ledger.record_payment("ghost", 100),
            Err(LedgerError::UnknownMember {
                member_id: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_rebuys_accumulate() {
        let mut ledger = PaymentLedger::new();
        ledger.record_buyin("alice", 1);
        ledger.record_buyin("alice", 1);
        assert_eq!(ledger.account("alice").unwrap().buyins, 2);
        assert_eq!(ledger.total_buyins(), 2);
    }

    #[test]
    fn test_totals() {
        let mut ledger = PaymentLedger::new();
        ledger.record_buyin("alice", 2);
        ledger.record_buyin("bob", 1);
        ledger.record_payment("alice", 1_200).unwrap();

        assert_eq!(ledger.total_owed(600), 1_800);
        assert_eq!(ledger.total_paid(), 1_200);
    }

    #[test]
    fn test_net_settlement_pairs_payouts_with_debt() {
        let economics = EntryEconomics::new(600, 3);
        let standings = vec![
            PlayerStanding::new("alice", 9_000),
            PlayerStanding::new("bob", 1_000),
        ];
        let settlement = settle(&economics, &standings);

        let mut ledger = PaymentLedger::new();
        ledger.record_buyin("alice", 1);
        ledger.record_payment("alice", 600).unwrap();
        ledger.record_buyin("bob", 2);
        // bob never paid.

        let positions = ledger.net_settlement(&settlement, 600);
        assert_eq!(positions.len(), 2);

        // Output follows settlement (rank) order.
        assert_eq!(positions[0].member_id, "alice");
        assert_eq!(positions[0].outstanding, 0);
        assert_eq!(positions[0].net, positions[0].payout as i64);

        assert_eq!(positions[1].member_id, "bob");
        assert_eq!(positions[1].outstanding, 1_200);
        assert_eq!(
            positions[1].net,
            positions[1].payout as i64 - 1_200
        );
    }

    #[test]
    fn test_net_settlement_without_account_is_fully_paid() {
        let economics = EntryEconomics::new(600, 1);
        let standings = vec![PlayerStanding::new("alice", 100)];
        let settlement = settle(&economics, &standings);

        let ledger = PaymentLedger::new();
        let positions = ledger.net_settlement(&settlement, 600);
        assert_eq!(positions[0].outstanding, 0);
    }
}
