use core::time::Duration;
use serde::Serialize;

use crate::{GameStats, ReactionCategory};

/// Named audio cues the audio collaborator knows how to play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SoundCue {
    Click,
    Success,
    Explosion,
    HpGain,
    Random,
    Win,
    Lose,
}

/// Reaction to surface later, only valid while the session is still in `epoch`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduledReaction {
    pub epoch: u64,
    pub category: ReactionCategory,
    pub delay: Duration,
}

/// Side effect requested by a session command. The session never performs these itself,
/// results of executing them must not feed back into game state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Effect {
    Sound(SoundCue),
    StartMusic,
    StopMusic,
    /// Record a found mod on chain, `sequence` is the number of mods found so far.
    SubmitModFound { sequence: u8 },
    RequestVictoryMint { stats: GameStats },
    ScheduleReaction(ScheduledReaction),
}
