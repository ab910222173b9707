use core::ops::Index;
use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use dice::*;
pub use effect::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use hunter::*;
pub use reaction::*;
pub use tile::*;
pub use types::*;

mod dice;
mod effect;
mod engine;
mod error;
mod generator;
mod hunter;
mod reaction;
mod tile;
mod types;

/// How many tiles of each kind a board holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub mods: u8,
    pub traps: u8,
    pub hp: u8,
    pub random: u8,
    pub empty: u8,
}

impl Composition {
    pub const STANDARD: Self = Self {
        mods: 3,
        traps: 10,
        hp: 3,
        random: 3,
        empty: 6,
    };

    pub fn of(kinds: impl IntoIterator<Item = TileKind>) -> Self {
        let mut composition = Self {
            mods: 0,
            traps: 0,
            hp: 0,
            random: 0,
            empty: 0,
        };
        for kind in kinds {
            let count = match kind {
                TileKind::Mod => &mut composition.mods,
                TileKind::Trap => &mut composition.traps,
                TileKind::Hp => &mut composition.hp,
                TileKind::Random => &mut composition.random,
                TileKind::Empty => &mut composition.empty,
            };
            *count = count.saturating_add(1);
        }
        composition
    }

    pub const fn count(&self, kind: TileKind) -> u8 {
        match kind {
            TileKind::Mod => self.mods,
            TileKind::Trap => self.traps,
            TileKind::Hp => self.hp,
            TileKind::Random => self.random,
            TileKind::Empty => self.empty,
        }
    }

    pub const fn total(&self) -> CellCount {
        self.mods as CellCount
            + self.traps as CellCount
            + self.hp as CellCount
            + self.random as CellCount
            + self.empty as CellCount
    }

    /// The full multiset, grouped by kind in [`TileKind::ALL`] order.
    pub fn kinds(&self) -> impl Iterator<Item = TileKind> + use<> {
        let composition = *self;
        TileKind::ALL
            .into_iter()
            .flat_map(move |kind| core::iter::repeat_n(kind, composition.count(kind).into()))
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid `(width, height)`.
    pub size: Coord2,
    pub composition: Composition,
    pub starting_hp: HitPoints,
    pub max_hp: HitPoints,
    /// A trap leaving the hunter at or below this HP schedules a warning.
    pub low_hp_threshold: HitPoints,
    /// Delay before follow-up reactions, so they don't collide with the immediate one.
    pub reaction_delay_ms: u64,
    pub random_heal_below: f64,
    pub random_hurt_below: f64,
}

impl GameConfig {
    pub const STANDARD: Self = Self {
        size: (5, 5),
        composition: Composition::STANDARD,
        starting_hp: 5,
        max_hp: 10,
        low_hp_threshold: 2,
        reaction_delay_ms: 3500,
        random_heal_below: 0.3,
        random_hurt_below: 0.5,
    };

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn mods_to_win(&self) -> u8 {
        self.composition.mods
    }

    pub const fn reaction_delay(&self) -> Duration {
        Duration::from_millis(self.reaction_delay_ms)
    }

    pub fn validate(&self) -> Result<()> {
        let area = self.total_tiles();
        let max_tiles = CellCount::from(TileId::MAX) + 1;
        if area > max_tiles {
            return Err(GameError::GridTooLarge { max: max_tiles });
        }

        let tiles = self.composition.total();
        if tiles != area {
            return Err(GameError::CompositionMismatch {
                tiles,
                width: self.size.0,
                height: self.size.1,
                area,
            });
        }

        if self.composition.mods == 0 {
            return Err(GameError::NoMods);
        }

        if self.starting_hp == 0 || self.starting_hp > self.max_hp {
            return Err(GameError::InvalidHp {
                starting: self.starting_hp,
                max: self.max_hp,
            });
        }

        let (heal, hurt) = (self.random_heal_below, self.random_hurt_below);
        if !(0.0..=1.0).contains(&heal) || !(heal..=1.0).contains(&hurt) {
            return Err(GameError::InvalidThresholds);
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Tiles of one game, indexed by their position-derived id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Lays out `kinds` in the given order, they must match the configured composition.
    pub fn from_kinds(config: &GameConfig, kinds: &[TileKind]) -> Result<Self> {
        if Composition::of(kinds.iter().copied()) != config.composition
            || kinds.len() != usize::from(config.total_tiles())
        {
            return Err(GameError::BoardMismatch);
        }
        Ok(Self::from_kinds_unchecked(kinds.iter().copied()))
    }

    /// Builds the configured composition unshuffled, grouped by kind.
    pub fn unshuffled(config: &GameConfig) -> Self {
        Self::from_kinds_unchecked(config.composition.kinds())
    }

    pub(crate) fn from_kinds_unchecked(kinds: impl IntoIterator<Item = TileKind>) -> Self {
        let tiles = (0..=TileId::MAX)
            .zip(kinds)
            .map(|(id, kind)| Tile::new(id, kind))
            .collect();
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(usize::from(id))
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(usize::from(id))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn composition(&self) -> Composition {
        Composition::of(self.tiles.iter().map(|tile| tile.kind))
    }

    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.revealed).count()
    }
}

impl Index<TileId> for Board {
    type Output = Tile;

    fn index(&self, id: TileId) -> &Self::Output {
        &self.tiles[usize::from(id)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Won,
    Lost,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Won => true,
            Lost => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(GameConfig::default().total_tiles(), 25);
        assert_eq!(Composition::STANDARD.total(), 25);
    }

    #[test]
    fn validate_rejects_composition_that_does_not_fill_grid() {
        let config = GameConfig {
            size: (4, 4),
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(GameError::CompositionMismatch {
                tiles: 25,
                width: 4,
                height: 4,
                area: 16,
            })
        );
    }

    #[test]
    fn validate_rejects_bad_hp_and_thresholds() {
        let no_hp = GameConfig {
            starting_hp: 0,
            ..GameConfig::default()
        };
        assert!(matches!(no_hp.validate(), Err(GameError::InvalidHp { .. })));

        let inverted = GameConfig {
            random_heal_below: 0.6,
            random_hurt_below: 0.4,
            ..GameConfig::default()
        };
        assert_eq!(inverted.validate(), Err(GameError::InvalidThresholds));
    }

    #[test]
    fn validate_rejects_boards_without_mods() {
        let config = GameConfig {
            composition: Composition {
                mods: 0,
                empty: 9,
                ..Composition::STANDARD
            },
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(GameError::NoMods));
    }

    #[test]
    fn from_kinds_requires_matching_composition() {
        let config = GameConfig::default();
        let mut kinds: Vec<TileKind> = config.composition.kinds().collect();

        assert!(Board::from_kinds(&config, &kinds).is_ok());

        kinds[0] = TileKind::Empty;
        assert_eq!(
            Board::from_kinds(&config, &kinds),
            Err(GameError::BoardMismatch)
        );
        assert_eq!(
            Board::from_kinds(&config, &kinds[..24]),
            Err(GameError::BoardMismatch)
        );
    }

    #[test]
    fn config_reads_partial_overrides() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "starting_hp": 3, "reaction_delay_ms": 100 }"#).unwrap();

        assert_eq!(config.starting_hp, 3);
        assert_eq!(config.reaction_delay().as_millis(), 100);
        assert_eq!(config.composition, Composition::STANDARD);
    }
}
