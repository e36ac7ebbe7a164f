//! Care requests the pet can make.

use rand::Rng;
use serde::Serialize;

/// What the pet is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum RequestKind {
    Feed = 0,
    Walk = 1,
    Sleep = 2,
    Heal = 3,
    Play = 4,
}

impl RequestKind {
    /// Total number of kinds.
    pub const COUNT: usize = 5;

    /// Every kind, indexed by discriminant.
    pub const ALL: [Self; Self::COUNT] = [Self::Feed, Self::Walk, Self::Sleep, Self::Heal, Self::Play];

    /// Uniformly pick a kind, resampling until it differs from `previous`.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R, previous: Option<Self>) -> Self {
        loop {
            let kind = Self::ALL[rng.gen_range(0..Self::COUNT)];
            if Some(kind) != previous {
                return kind;
            }
        }
    }

    /// What the pet says when asking.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Feed => "I'm hungry! Feed me!",
            Self::Walk => "I want to go for a walk!",
            Self::Sleep => "I'm tired! Put me to sleep!",
            Self::Heal => "I feel sick! Heal me!",
            Self::Play => "I'm bored! Play with me!",
        }
    }

    /// What the pet says once the request is satisfied.
    pub fn reply(self) -> &'static str {
        match self {
            Self::Feed => "Very tasty! Thank you!",
            Self::Walk => "How wonderful! Thank you!",
            Self::Sleep => "Thank you for putting me to bed",
            Self::Play => "Fun! Thank you!",
            Self::Heal => "Thank you!",
        }
    }
}
