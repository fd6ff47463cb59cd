//! Feltbook settlement engine.
//!
//! Deterministic prize settlement for live poker tournaments: podium
//! carve-out, chip-proportional distribution, payment-ledger netting, and
//! chip audits.
//!
//! ## Determinism requirements
//! - All money arithmetic is integer-only (`u64` with `u128`
//!   intermediates); floating point never touches an amount.
//! - No wall-clock time, no randomness, no I/O inside settlement; the same
//!   inputs always produce the same figures.
//! - Iteration order is always explicit (ranked vectors, `BTreeMap`
//!   accounts), never hash-map order.
//!
//! The primary entrypoint is [`settle`]; [`settle_traced`] wraps it with
//! structured tracing for operators who want the computation explained.

mod allocation;
mod ledger;
mod reconcile;
mod report;
mod rounding;
mod trace;


pub use allocation::{pool_breakdown, settle};
pub use ledger::{LedgerError, NetPosition, PaymentLedger, PlayerAccount};
pub use reconcile::{audit_chips, ChipAudit};
pub use report::{render_net_positions, render_report};
pub use rounding::{floor_to_unit, proportional, round_half_up_percent};
pub use trace::{log_settlement, settle_traced, AllocationTrace};
