use serde::{Deserialize, Serialize};

/// A player's final chip count, as supplied by the operator.
///
/// `chips == 0` is meaningful: the player is eliminated and holds no stake
/// in the chip-based split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub member_id: String,
    pub chips: u64,
}

impl PlayerStanding {
    pub fn new(member_id: impl Into<String>, chips: u64) -> Self {
        Self {
            member_id: member_id.into(),
            chips,
        }
    }
}

/// A standing with its 1-based rank by descending chips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedStanding {
    pub rank: u32,
    pub member_id: String,
    pub chips: u64,
}

/// Sort standings by descending chips and stamp 1-based ranks.
///
/// The sort is stable, so ties keep their submission order and distinct
/// ranks; tied players are never collapsed onto one rank.
pub fn rank_standings(standings: &[PlayerStanding]) -> Vec<RankedStanding> {
    let mut ranked: Vec<RankedStanding> = standings
        .iter()
        .map(|s| RankedStanding {
            rank: 0,
            member_id: s.member_id.clone(),
            chips: s.chips,
        })
        .collect();

    ranked.sort_by(|a, b| b.chips.cmp(&a.chips));

    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = (i + 1) as u32;
    }
    ranked
}
