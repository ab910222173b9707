use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use modhunt_core::{
    Dice, Effect, GameConfig, GameSession, GameStats, GameStatus, Reaction, RevealOutcome,
    ScheduledReaction, Tile, TileId,
};
use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::*;

/// Collaborators effects are dispatched to.
#[derive(Clone)]
pub struct Ports {
    pub audio: Arc<AudioDirector>,
    pub wallet: Arc<dyn Wallet>,
    pub minter: Arc<dyn Minter>,
}

/// Everything the presentation layer reads back after a command.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionView {
    pub tiles: Vec<Tile>,
    pub stats: GameStats,
    pub status: GameStatus,
    pub reaction: Option<Reaction>,
}

/// Runs session commands and dispatches their effects without waiting on them.
///
/// Commands spawn Tokio tasks and must be called from within a runtime.
pub struct GameDriver<D> {
    session: Arc<Mutex<GameSession<D>>>,
    ports: Ports,
    notices: UnboundedSender<Notice>,
}

impl<D: Dice + Send + 'static> GameDriver<D> {
    pub fn new(session: GameSession<D>, ports: Ports) -> (Self, UnboundedReceiver<Notice>) {
        let (notices, receiver) = mpsc::unbounded_channel();
        let driver = Self {
            session: Arc::new(Mutex::new(session)),
            ports,
            notices,
        };
        (driver, receiver)
    }

    pub fn audio(&self) -> &AudioDirector {
        &self.ports.audio
    }

    pub fn view(&self) -> SessionView {
        let session = lock(&self.session);
        SessionView {
            tiles: session.tiles().to_vec(),
            stats: session.stats(),
            status: session.status(),
            reaction: session.reaction(),
        }
    }

    pub fn config(&self) -> GameConfig {
        *lock(&self.session).config()
    }

    pub fn start_new_game(&self) {
        let effects = lock(&self.session).start_new_game();
        self.dispatch(effects);
    }

    pub fn reveal(&self, id: TileId) -> RevealOutcome {
        let report = lock(&self.session).reveal_tile(id);
        self.dispatch(report.effects);
        report.outcome
    }

    fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            log::trace!("Dispatching {effect:?}");
            match effect {
                Effect::Sound(cue) => self.ports.audio.play(cue),
                Effect::StartMusic => self.ports.audio.start_music(),
                Effect::StopMusic => self.ports.audio.stop_music(),
                Effect::SubmitModFound { sequence } => {
                    let wallet = Arc::clone(&self.ports.wallet);
                    let notices = self.notices.clone();
                    tokio::spawn(async move {
                        record_mod_found(wallet.as_ref(), sequence, &notices).await;
                    });
                }
                Effect::RequestVictoryMint { stats } => {
                    let wallet = Arc::clone(&self.ports.wallet);
                    let minter = Arc::clone(&self.ports.minter);
                    let notices = self.notices.clone();
                    tokio::spawn(async move {
                        mint_victory(wallet.as_ref(), minter.as_ref(), stats, &notices).await;
                    });
                }
                Effect::ScheduleReaction(scheduled) => {
                    let session = Arc::clone(&self.session);
                    let notices = self.notices.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(scheduled.delay).await;
                        if let Some(reaction) = deliver(&session, scheduled) {
                            notify(&notices, Notice::Reaction(reaction));
                        }
                    });
                }
            }
        }
    }
}

fn lock<D>(session: &Mutex<GameSession<D>>) -> MutexGuard<'_, GameSession<D>> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

fn deliver<D: Dice>(
    session: &Mutex<GameSession<D>>,
    scheduled: ScheduledReaction,
) -> Option<Reaction> {
    lock(session).deliver_scheduled(scheduled)
}

fn notify(notices: &UnboundedSender<Notice>, notice: Notice) {
    if notices.send(notice).is_err() {
        log::trace!("Notice receiver dropped");
    }
}

async fn record_mod_found(wallet: &dyn Wallet, sequence: u8, notices: &UnboundedSender<Notice>) {
    if wallet.address().is_none() {
        log::debug!("No wallet connected, mod #{sequence} stays off chain");
        return;
    }

    match wallet.balance().await {
        Ok(balance) if balance < MIN_BALANCE_SOL => {
            log::info!("Balance {balance} SOL too low for mod #{sequence} transaction");
            notify(notices, Notice::InsufficientBalance { balance });
            return;
        }
        Ok(_) => {}
        Err(err) => {
            log::warn!("Balance check failed: {err}");
            return;
        }
    }

    match wallet.send_mod_found(sequence, &mod_found_memo(sequence)).await {
        Ok(signature) => {
            log::info!("Mod #{sequence} transaction sent: {signature}");
            notify(
                notices,
                Notice::TransactionSent {
                    sequence,
                    explorer_link: explorer_tx_link(&signature),
                },
            );
        }
        Err(err) => {
            log::warn!("Mod #{sequence} transaction failed: {err}");
            notify(
                notices,
                Notice::TransactionFailed {
                    sequence,
                    reason: err.to_string(),
                },
            );
        }
    }
}

async fn mint_victory(
    wallet: &dyn Wallet,
    minter: &dyn Minter,
    stats: GameStats,
    notices: &UnboundedSender<Notice>,
) {
    let Some(address) = wallet.address() else {
        log::debug!("No wallet connected, skipping victory mint");
        return;
    };

    notify(notices, Notice::Minting);
    match minter.mint(MintRequest::new(address, stats)).await {
        Ok(receipt) => {
            log::info!("Victory NFT minted at {}", receipt.mint_address);
            notify(notices, Notice::Minted(receipt));
        }
        Err(err) => {
            log::warn!("Victory mint failed: {err}");
            notify(
                notices,
                Notice::MintFailed {
                    reason: err.to_string(),
                },
            );
        }
    }
}
