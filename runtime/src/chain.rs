use async_trait::async_trait;
use modhunt_core::GameStats;
use serde::{Deserialize, Serialize};

use crate::{ChainError, Result};

pub const EXPLORER_URL: &str = "https://explorer.testnet.carv.io";

pub const NETWORK: &str = "carv-testnet";

/// Balance needed before a found-mod transaction is attempted: the transfer plus fees.
pub const MIN_BALANCE_SOL: f64 = 0.002;

pub fn mod_found_memo(sequence: u8) -> String {
    format!("CARV Mod Hunt - Mod #{sequence} Found! 🎮")
}

pub fn explorer_tx_link(signature: &str) -> String {
    format!("{EXPLORER_URL}/tx/{signature}")
}

/// The player's wallet on the game's network.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Public address, `None` while no wallet is connected.
    fn address(&self) -> Option<String>;

    /// Balance in SOL.
    async fn balance(&self) -> Result<f64>;

    /// Signs and sends the found-mod transaction, returning its signature as soon as it is
    /// submitted.
    async fn send_mod_found(&self, sequence: u8, memo: &str) -> Result<String>;
}

/// Backend that mints the victory NFT.
#[async_trait]
pub trait Minter: Send + Sync {
    async fn mint(&self, request: MintRequest) -> Result<MintReceipt>;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub wallet_address: String,
    pub stats: GameStats,
    pub network: &'static str,
}

impl MintRequest {
    pub fn new(wallet_address: String, stats: GameStats) -> Self {
        Self {
            wallet_address,
            stats,
            network: NETWORK,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintReceipt {
    pub signature: String,
    pub mint_address: String,
    pub explorer_url: String,
}

/// Stand-in for both collaborators when playing without a wallet.
#[derive(Copy, Clone, Debug, Default)]
pub struct Disconnected;

#[async_trait]
impl Wallet for Disconnected {
    fn address(&self) -> Option<String> {
        None
    }

    async fn balance(&self) -> Result<f64> {
        Err(ChainError::WalletNotConnected)
    }

    async fn send_mod_found(&self, _sequence: u8, _memo: &str) -> Result<String> {
        Err(ChainError::WalletNotConnected)
    }
}

#[async_trait]
impl Minter for Disconnected {
    async fn mint(&self, _request: MintRequest) -> Result<MintReceipt> {
        Err(ChainError::WalletNotConnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_and_link_formats() {
        assert_eq!(mod_found_memo(2), "CARV Mod Hunt - Mod #2 Found! 🎮");
        assert_eq!(
            explorer_tx_link("5xSig"),
            "https://explorer.testnet.carv.io/tx/5xSig"
        );
    }

    #[test]
    fn mint_request_uses_backend_field_names() {
        let stats = GameStats {
            hp: 4,
            mods_found: 3,
            tiles_revealed: 9,
        };
        let request = MintRequest::new("Wallet111".to_owned(), stats);

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "walletAddress": "Wallet111",
                "stats": { "hp": 4, "modsFound": 3, "tilesRevealed": 9 },
                "network": "carv-testnet",
            })
        );
    }

    #[test]
    fn mint_receipt_reads_backend_response() {
        let receipt: MintReceipt = serde_json::from_str(
            r#"{ "signature": "sig", "mintAddress": "mint", "explorerUrl": "https://x/tx/sig" }"#,
        )
        .unwrap();

        assert_eq!(receipt.mint_address, "mint");
        assert_eq!(receipt.explorer_url, "https://x/tx/sig");
    }

    #[tokio::test]
    async fn disconnected_wallet_refuses_everything() {
        let wallet = Disconnected;

        assert_eq!(wallet.address(), None);
        assert_eq!(wallet.balance().await, Err(ChainError::WalletNotConnected));
        assert_eq!(
            Minter::mint(&wallet, MintRequest::new(String::new(), GameStats::new(5))).await,
            Err(ChainError::WalletNotConnected)
        );
    }
}
