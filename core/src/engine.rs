use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub hp: HitPoints,
    pub mods_found: u8,
    pub tiles_revealed: u8,
}

impl GameStats {
    pub const fn new(hp: HitPoints) -> Self {
        Self {
            hp,
            mods_found: 0,
            tiles_revealed: 0,
        }
    }
}

/// What a reveal changed, plus the side effects the caller should dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealReport {
    pub outcome: RevealOutcome,
    pub effects: Vec<Effect>,
}

impl RevealReport {
    const fn no_change() -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            effects: Vec::new(),
        }
    }
}

/// One player's game: board, stats, status and the hunter's latest reaction.
///
/// Commands never fail. Invalid reveals are ignored, and side effects come back as
/// [`Effect`] values for a dispatcher to run outside the session.
#[derive(Clone, Debug)]
pub struct GameSession<D = RngDice> {
    config: GameConfig,
    board: Board,
    stats: GameStats,
    status: GameStatus,
    reaction: Option<Reaction>,
    epoch: u64,
    dice: D,
}

impl GameSession<RngDice> {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_dice(config, RngDice::from_entropy())
    }
}

impl<D: Dice> GameSession<D> {
    pub fn with_dice(config: GameConfig, mut dice: D) -> Result<Self> {
        config.validate()?;
        let board = RandomBoardGenerator::new(&mut dice).generate(&config);
        Ok(Self::assemble(config, board, dice))
    }

    /// Session over a prearranged, fully hidden board. Its tiles must match the configured
    /// composition and sit at the position their id names.
    pub fn with_board(config: GameConfig, board: Board, dice: D) -> Result<Self> {
        config.validate()?;
        let ids_match = board
            .tiles()
            .iter()
            .zip(0..=TileId::MAX)
            .all(|(tile, id)| tile.id == id);
        if board.composition() != config.composition || board.revealed_count() != 0 || !ids_match
        {
            return Err(GameError::BoardMismatch);
        }
        Ok(Self::assemble(config, board, dice))
    }

    fn assemble(config: GameConfig, board: Board, dice: D) -> Self {
        Self {
            config,
            board,
            stats: GameStats::new(config.starting_hp),
            status: GameStatus::default(),
            reaction: None,
            epoch: 0,
            dice,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tiles(&self) -> &[Tile] {
        self.board.tiles()
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.board.get(id)
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Latest reaction, `None` right after a reset.
    pub fn reaction(&self) -> Option<Reaction> {
        self.reaction
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Deals a fresh board and resets stats, any reaction still scheduled becomes stale.
    pub fn start_new_game(&mut self) -> Vec<Effect> {
        self.board = RandomBoardGenerator::new(&mut self.dice).generate(&self.config);
        self.stats = GameStats::new(self.config.starting_hp);
        self.status = GameStatus::default();
        self.reaction = None;
        self.epoch += 1;
        log::debug!("New game started, epoch {}", self.epoch);

        vec![Effect::StartMusic]
    }

    pub fn reveal_tile(&mut self, id: TileId) -> RevealReport {
        if self.status.is_finished() {
            log::debug!("Ignoring reveal of tile {id}, game is {:?}", self.status);
            return RevealReport::no_change();
        }

        let Some(tile) = self.board.get_mut(id) else {
            log::debug!("Ignoring reveal of unknown tile {id}");
            return RevealReport::no_change();
        };
        if tile.revealed {
            log::debug!("Ignoring reveal of tile {id}, already revealed");
            return RevealReport::no_change();
        }
        tile.revealed = true;
        let kind = tile.kind;

        self.stats.tiles_revealed = self.stats.tiles_revealed.saturating_add(1);
        let mut effects = vec![Effect::Sound(SoundCue::Click)];

        let category = match kind {
            TileKind::Mod => self.apply_mod(&mut effects),
            TileKind::Trap => self.apply_trap(&mut effects),
            TileKind::Hp => {
                effects.push(Effect::Sound(SoundCue::HpGain));
                self.heal();
                ReactionCategory::HpGain
            }
            TileKind::Random => self.apply_random(&mut effects),
            TileKind::Empty => ReactionCategory::Empty,
        };
        self.reaction = Some(category.pick(&mut self.dice));
        log::trace!("Revealed {kind:?} at {id}, stats now {:?}", self.stats);

        let outcome = match self.status {
            GameStatus::Playing => RevealOutcome::Revealed,
            GameStatus::Won => RevealOutcome::Won,
            GameStatus::Lost => RevealOutcome::Lost,
        };
        RevealReport { outcome, effects }
    }

    /// Surfaces a delayed reaction, dropping it when the game it was scheduled in is over.
    pub fn deliver_scheduled(&mut self, scheduled: ScheduledReaction) -> Option<Reaction> {
        if scheduled.epoch != self.epoch {
            log::debug!(
                "Dropping stale {:?} reaction from epoch {}, now {}",
                scheduled.category,
                scheduled.epoch,
                self.epoch
            );
            return None;
        }

        let reaction = scheduled.category.pick(&mut self.dice);
        self.reaction = Some(reaction);
        Some(reaction)
    }

    fn apply_mod(&mut self, effects: &mut Vec<Effect>) -> ReactionCategory {
        effects.push(Effect::Sound(SoundCue::Success));
        self.stats.mods_found += 1;

        let mods_to_win = self.config.mods_to_win();
        if self.stats.mods_found < mods_to_win {
            effects.push(Effect::SubmitModFound {
                sequence: self.stats.mods_found,
            });
        }

        if self.stats.mods_found >= mods_to_win {
            self.end_game(GameStatus::Won, effects);
        } else if self.stats.mods_found + 1 == mods_to_win {
            effects.push(self.schedule(ReactionCategory::NearVictory));
        }
        ReactionCategory::ModFound
    }

    fn apply_trap(&mut self, effects: &mut Vec<Effect>) -> ReactionCategory {
        effects.push(Effect::Sound(SoundCue::Explosion));
        self.damage();

        if self.stats.hp == 0 {
            self.end_game(GameStatus::Lost, effects);
        } else if self.stats.hp <= self.config.low_hp_threshold {
            effects.push(self.schedule(ReactionCategory::LowHp));
        }
        ReactionCategory::TrapHit
    }

    fn apply_random(&mut self, effects: &mut Vec<Effect>) -> ReactionCategory {
        effects.push(Effect::Sound(SoundCue::Random));
        let roll = self.dice.unit();

        if roll < self.config.random_heal_below {
            self.heal();
            ReactionCategory::RandomGood
        } else if roll < self.config.random_hurt_below {
            // unlike traps, a random hit never schedules the low HP warning
            self.damage();
            if self.stats.hp == 0 {
                self.end_game(GameStatus::Lost, effects);
            }
            ReactionCategory::RandomBad
        } else {
            ReactionCategory::RandomGood
        }
    }

    fn heal(&mut self) {
        self.stats.hp = self.stats.hp.saturating_add(1).min(self.config.max_hp);
    }

    fn damage(&mut self) {
        self.stats.hp = self.stats.hp.saturating_sub(1);
    }

    fn schedule(&self, category: ReactionCategory) -> Effect {
        Effect::ScheduleReaction(ScheduledReaction {
            epoch: self.epoch,
            category,
            delay: self.config.reaction_delay(),
        })
    }

    fn end_game(&mut self, status: GameStatus, effects: &mut Vec<Effect>) {
        if self.status.is_finished() {
            return;
        }

        self.status = status;
        self.epoch += 1;
        log::info!("Game over: {status:?} with {:?}", self.stats);

        match status {
            GameStatus::Won => effects.extend([
                Effect::Sound(SoundCue::Win),
                Effect::StopMusic,
                Effect::RequestVictoryMint { stats: self.stats },
            ]),
            GameStatus::Lost => {
                effects.extend([Effect::Sound(SoundCue::Lose), Effect::StopMusic])
            }
            GameStatus::Playing => {}
        }
    }
}
