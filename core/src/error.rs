use thiserror::Error;

use crate::{CellCount, Coord, HitPoints};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Composition holds {tiles} tiles but a {width}x{height} grid needs {area}")]
    CompositionMismatch {
        tiles: CellCount,
        width: Coord,
        height: Coord,
        area: CellCount,
    },
    #[error("Grid too large, at most {max} tiles are addressable")]
    GridTooLarge { max: CellCount },
    #[error("Board needs at least one mod tile")]
    NoMods,
    #[error("Starting HP {starting} must be between 1 and the cap of {max}")]
    InvalidHp { starting: HitPoints, max: HitPoints },
    #[error("Random tile thresholds must satisfy 0 <= heal <= hurt <= 1")]
    InvalidThresholds,
    #[error("Tile kinds do not match the configured composition")]
    BoardMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
