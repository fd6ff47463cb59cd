//! Tournament sheet: the YAML file an operator keeps during an event.

use feltbook_settlement::PaymentLedger;
use feltbook_types::{EntryEconomics, PlayerStanding, DEFAULT_STARTING_STACK};
use serde::{Deserialize, Serialize};

fn default_starting_stack() -> u64 {
    DEFAULT_STARTING_STACK
}

fn default_buyins() -> u64 {
    1
}

/// One player row in the sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub member_id: String,
    pub chips: u64,
    #[serde(default = "default_buyins")]
    pub buyins: u64,
    /// Amount already collected from this player.
    #[serde(default)]
    pub paid: u64,
}

/// The full tournament sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentFile {
    pub name: String,
    /// Chip stack issued per buy-in; used by the chip audit.
    #[serde(default = "default_starting_stack")]
    pub starting_stack: u64,
    pub economics: EntryEconomics,
    pub players: Vec<PlayerEntry>,
}

impl TournamentFile {
    pub fn standings(&self) -> Vec<PlayerStanding> {
        self.players
            .iter()
            .map(|p| PlayerStanding::new(p.member_id.clone(), p.chips))
            .collect()
    }

    pub fn ledger(&self) -> PaymentLedger {
        let mut ledger = PaymentLedger::new();
        for player in &self.players {
            ledger.record_buyin(&player.member_id, player.buyins);
            if player.paid > 0 {
                // Accounts were just opened above, so this cannot fail.
                let _ = ledger.record_payment(&player.member_id, player.paid);
            }
        }
        ledger
    }
}
