use modhunt_core::Reaction;
use serde::Serialize;

use crate::MintReceipt;

/// Informational message for the presentation layer. Failures reported here never change
/// the game's stats or status.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Notice {
    TransactionSent { sequence: u8, explorer_link: String },
    TransactionFailed { sequence: u8, reason: String },
    InsufficientBalance { balance: f64 },
    Minting,
    Minted(MintReceipt),
    MintFailed { reason: String },
    /// A delayed reaction that was still current when its timer fired.
    Reaction(Reaction),
}
