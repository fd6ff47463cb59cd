/// Payout granularity: prize amounts are floored to whole multiples of this
/// unit before the remainder correction.
pub const DEFAULT_ROUNDING_UNIT: u64 = 100;

/// Number of guaranteed finisher slots funded by the carve-out.
pub const PODIUM_SLOTS: usize = 3;

/// Default carve-out split across ranks 1..3 (percent, applied per slot).
pub const DEFAULT_PODIUM_SPLIT: [u64; 3] = [50, 30, 20];

/// Default chip stack issued per buy-in.
pub const DEFAULT_STARTING_STACK: u64 = 10_000;

/// Denominator for basis-point chip shares.
pub const BPS_DENOMINATOR: u64 = 10_000;
