use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of every random decision a session makes: board shuffles, reaction picks and
/// random-tile rolls.
pub trait Dice {
    /// Uniform index in `0..upper`. Callers never pass zero.
    fn below(&mut self, upper: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

/// [`Dice`] backed by a `rand` small generator.
#[derive(Clone, Debug)]
pub struct RngDice(SmallRng);

impl RngDice {
    /// Unseeded dice for regular play, boards are not reproducible.
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Dice for RngDice {
    fn below(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }

    fn unit(&mut self) -> f64 {
        self.0.random()
    }
}

/// Dice replaying fixed sequences, for exercising exact branches in tests and tooling.
///
/// Picks and rolls are queued separately. Once a queue runs dry, picks fall back to `0` and
/// rolls to [`ScriptedDice::FALLBACK_ROLL`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    picks: VecDeque<usize>,
    rolls: VecDeque<f64>,
}

impl ScriptedDice {
    pub const FALLBACK_ROLL: f64 = 0.9;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = f64>) -> Self {
        self.rolls.extend(rolls);
        self
    }
}

impl Dice for ScriptedDice {
    fn below(&mut self, upper: usize) -> usize {
        self.picks.pop_front().map_or(0, |pick| pick % upper)
    }

    fn unit(&mut self) -> f64 {
        self.rolls
            .pop_front()
            .map_or(Self::FALLBACK_ROLL, |roll| roll.clamp(0.0, 1.0 - f64::EPSILON))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_dice_repeat() {
        let mut a = RngDice::seeded(7);
        let mut b = RngDice::seeded(7);

        for _ in 0..32 {
            assert_eq!(a.below(25), b.below(25));
        }
    }

    #[test]
    fn rng_dice_stay_in_range() {
        let mut dice = RngDice::seeded(1);

        for upper in 1..50 {
            assert!(dice.below(upper) < upper);
            let roll = dice.unit();
            assert!((0.0..1.0).contains(&roll));
        }
    }

    #[test]
    fn scripted_dice_replay_then_fall_back() {
        let mut dice = ScriptedDice::new().with_picks([4, 7]).with_rolls([0.2]);

        assert_eq!(dice.below(10), 4);
        assert_eq!(dice.below(5), 2);
        assert_eq!(dice.below(5), 0);
        assert_eq!(dice.unit(), 0.2);
        assert_eq!(dice.unit(), ScriptedDice::FALLBACK_ROLL);
    }
}
