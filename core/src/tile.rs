use serde::{Deserialize, Serialize};

use crate::TileId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Mod,
    Trap,
    Hp,
    Random,
    Empty,
}

impl TileKind {
    /// Every kind, in the order boards are laid out before shuffling.
    pub const ALL: [TileKind; 5] = [Self::Mod, Self::Trap, Self::Hp, Self::Random, Self::Empty];

    pub const fn symbol(self) -> char {
        match self {
            Self::Mod => 'M',
            Self::Trap => 'X',
            Self::Hp => '+',
            Self::Random => '?',
            Self::Empty => '.',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    pub revealed: bool,
}

impl Tile {
    pub const fn new(id: TileId, kind: TileKind) -> Self {
        Self {
            id,
            kind,
            revealed: false,
        }
    }
}
