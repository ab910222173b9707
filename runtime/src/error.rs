use thiserror::Error;

/// Failures reported by the wallet and mint collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Wallet not connected. Please reconnect your wallet.")]
    WalletNotConnected,
    #[error("Transaction was rejected")]
    Rejected,
    #[error("Insufficient SOL balance")]
    InsufficientFunds,
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("Failed to mint NFT: {0}")]
    Mint(String),
}

pub type Result<T> = core::result::Result<T, ChainError>;
