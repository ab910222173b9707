use super::*;

/// Generation strategy that lays out the configured composition and applies a uniform
/// Fisher-Yates shuffle, ids are assigned in the shuffled order.
#[derive(Debug)]
pub struct RandomBoardGenerator<'a, D: ?Sized> {
    dice: &'a mut D,
}

impl<'a, D: Dice + ?Sized> RandomBoardGenerator<'a, D> {
    pub fn new(dice: &'a mut D) -> Self {
        Self { dice }
    }
}

impl<D: Dice + ?Sized> BoardGenerator for RandomBoardGenerator<'_, D> {
    fn generate(self, config: &GameConfig) -> Board {
        let mut kinds: Vec<TileKind> = config.composition.kinds().collect();

        let area = config.total_tiles();
        if kinds.len() != usize::from(area) {
            log::warn!(
                "Composition does not fill the grid, requested {} tiles for an area of {}",
                kinds.len(),
                area
            );
        }

        for i in (1..kinds.len()).rev() {
            let j = self.dice.below(i + 1);
            kinds.swap(i, j);
        }

        Board::from_kinds_unchecked(kinds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(dice: &mut impl Dice) -> Board {
        RandomBoardGenerator::new(dice).generate(&GameConfig::default())
    }

    #[test]
    fn generated_boards_keep_standard_composition() {
        let mut dice = RngDice::seeded(0xC0FFEE);

        for _ in 0..200 {
            let board = generate(&mut dice);

            assert_eq!(board.len(), 25);
            assert_eq!(board.composition(), Composition::STANDARD);
            assert_eq!(board.revealed_count(), 0);
        }
    }

    #[test]
    fn ids_are_a_permutation_of_positions() {
        let mut dice = RngDice::from_entropy();
        let board = generate(&mut dice);

        let mut ids: Vec<TileId> = board.tiles().iter().map(|tile| tile.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..25).collect::<Vec<TileId>>());
        for (position, tile) in board.tiles().iter().enumerate() {
            assert_eq!(usize::from(tile.id), position);
        }
    }

    #[test]
    fn zero_picks_rotate_first_kind_to_the_back() {
        // j = 0 at every step walks the original first tile to the end
        let mut dice = ScriptedDice::new();
        let board = generate(&mut dice);

        assert_eq!(board[24].kind, TileKind::Mod);
        assert_eq!(board.composition(), Composition::STANDARD);
    }

    #[test]
    fn shuffle_varies_placement() {
        let mut dice = RngDice::seeded(42);
        let first = generate(&mut dice);
        let layouts_differ = (0..10).any(|_| generate(&mut dice) != first);

        assert!(layouts_differ);
    }
}
