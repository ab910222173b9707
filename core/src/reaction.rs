use serde::Serialize;

use crate::Dice;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Emotion {
    Neutral,
    Happy,
    Hurt,
    Excited,
    Thinking,
}

impl Emotion {
    pub const fn emoji(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Happy => Some("😊"),
            Self::Hurt => Some("😖"),
            Self::Excited => Some("🔥"),
            Self::Thinking => Some("🤔"),
        }
    }
}

/// Short line spoken by the hunter in response to a game event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reaction {
    pub message: &'static str,
    pub emotion: Emotion,
}

impl Reaction {
    const fn new(message: &'static str, emotion: Emotion) -> Self {
        Self { message, emotion }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ReactionCategory {
    ModFound,
    TrapHit,
    HpGain,
    RandomGood,
    RandomBad,
    Empty,
    LowHp,
    NearVictory,
}

use Emotion::*;

const MOD_FOUND: &[Reaction] = &[
    Reaction::new("Yes! One mod down! Keep up the pressure!", Excited),
    Reaction::new("Got 'em! These mods can't hide from us!", Happy),
    Reaction::new("Excellent work! The CARVverse thanks you!", Happy),
];

const TRAP_HIT: &[Reaction] = &[
    Reaction::new("Ugh! That hurt... Stay focused!", Hurt),
    Reaction::new("Damn! I need to be more careful...", Hurt),
    Reaction::new("These traps are no joke. Watch your step!", Hurt),
];

const HP_GAIN: &[Reaction] = &[
    Reaction::new("Nice! That boost came at the right time.", Happy),
    Reaction::new("Feeling better already. Let's keep hunting!", Happy),
];

const RANDOM_GOOD: &[Reaction] = &[
    Reaction::new("Interesting... This might help us.", Thinking),
    Reaction::new("A lucky break! I'll take it.", Happy),
];

const RANDOM_BAD: &[Reaction] = &[
    Reaction::new("What the... That wasn't supposed to happen!", Hurt),
    Reaction::new("This is getting unpredictable...", Thinking),
];

const EMPTY: &[Reaction] = &[
    Reaction::new("Nothing here. Keep searching.", Neutral),
    Reaction::new("All clear. Moving on.", Neutral),
];

const LOW_HP: &[Reaction] = &[
    Reaction::new("HP is getting critical! Be careful!", Hurt),
    Reaction::new("I can't take many more hits...", Hurt),
];

const NEAR_VICTORY: &[Reaction] = &[
    Reaction::new("Just one more mod to go! We're almost there!", Excited),
    Reaction::new("Victory is within reach! Stay sharp!", Excited),
];

impl ReactionCategory {
    pub const fn pool(self) -> &'static [Reaction] {
        match self {
            Self::ModFound => MOD_FOUND,
            Self::TrapHit => TRAP_HIT,
            Self::HpGain => HP_GAIN,
            Self::RandomGood => RANDOM_GOOD,
            Self::RandomBad => RANDOM_BAD,
            Self::Empty => EMPTY,
            Self::LowHp => LOW_HP,
            Self::NearVictory => NEAR_VICTORY,
        }
    }

    /// Uniform pick from the pool, repeats across calls are expected.
    pub fn pick<D: Dice + ?Sized>(self, dice: &mut D) -> Reaction {
        let pool = self.pool();
        pool[dice.below(pool.len())]
    }
}
