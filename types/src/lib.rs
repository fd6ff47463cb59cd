//! Feltbook domain types.
//!
//! Defines the entry economics, player standings, and settlement result
//! structures shared by the settlement engine and the operator CLI.

mod constants;
mod economy;
mod prize;
mod standings;

pub use constants::*;
pub use economy::{CarveOut, EconomicsInvariantError, EntryEconomics, PoolBreakdown};
pub use prize::{PlayerPrize, PodiumPrize, Settlement};
pub use standings::{rank_standings, PlayerStanding, RankedStanding};
