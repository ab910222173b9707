use modhunt_core::{Coord2, TileId, tile_id_at};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(TileId),
    Restart,
    ToggleMute,
    ToggleMusic,
    /// Music volume in percent.
    Volume(u8),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command {0:?}, type h for help")]
    Unknown(String),
    #[error("({0}, {1}) is outside the grid")]
    OutsideGrid(u8, u8),
    #[error("Volume must be a number from 0 to 100")]
    BadVolume,
}

/// Parses one input line. Tiles are addressed by id or by `row,col`.
pub fn parse(line: &str, size: Coord2) -> Result<Command, CommandError> {
    let line = line.trim().to_ascii_lowercase();
    if line.contains(',') {
        let target: String = line.split_whitespace().collect();
        return parse_tile(&target, size).map(Command::Reveal);
    }

    let mut words = line.split_whitespace();

    let command = match (words.next(), words.next()) {
        (Some("q" | "quit" | "exit"), None) => Command::Quit,
        (Some("r" | "restart"), None) => Command::Restart,
        (Some("m" | "mute"), None) => Command::ToggleMute,
        (Some("music"), None) => Command::ToggleMusic,
        (Some("h" | "help" | "?"), None) => Command::Help,
        (Some("vol" | "volume"), Some(level)) => match level.parse::<u8>() {
            Ok(level) if level <= 100 => Command::Volume(level),
            _ => return Err(CommandError::BadVolume),
        },
        (Some(target), None) => Command::Reveal(parse_tile(target, size)?),
        _ => return Err(CommandError::Unknown(line.clone())),
    };
    Ok(command)
}

fn parse_tile(target: &str, size: Coord2) -> Result<TileId, CommandError> {
    let unknown = || CommandError::Unknown(target.to_owned());

    if let Some((row, col)) = target.split_once(',') {
        let row: u8 = row.trim().parse().map_err(|_| unknown())?;
        let col: u8 = col.trim().parse().map_err(|_| unknown())?;
        return tile_id_at((row, col), size).ok_or(CommandError::OutsideGrid(row, col));
    }

    // out of range ids are left for the session to ignore
    target.parse().map_err(|_| unknown())
}
