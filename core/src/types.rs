/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Count type used for tile totals.
pub type CellCount = u16;

/// Position-derived tile identity, `row * width + col`.
pub type TileId = u8;

pub type HitPoints = u8;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Maps `(row, col)` to a tile id, returning a value only when it is inside a grid of `size`.
pub fn tile_id_at((row, col): Coord2, (width, height): Coord2) -> Option<TileId> {
    if row >= height || col >= width {
        return None;
    }
    let id = CellCount::from(row) * CellCount::from(width) + CellCount::from(col);
    id.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_ids_map_row_major() {
        assert_eq!(tile_id_at((0, 0), (5, 5)), Some(0));
        assert_eq!(tile_id_at((1, 2), (5, 5)), Some(7));
        assert_eq!(tile_id_at((4, 4), (5, 5)), Some(24));
    }

    #[test]
    fn out_of_bounds_coords_have_no_id() {
        assert_eq!(tile_id_at((5, 0), (5, 5)), None);
        assert_eq!(tile_id_at((0, 5), (5, 5)), None);
    }
}
