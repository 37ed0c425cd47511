use std::fmt::{self, Display};

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};

/// Two extra dice shown only when the main pair rolls doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BonusPair {
    dice: Option<[u8; 2]>,
}

impl BonusPair {
    pub fn is_active(&self) -> bool {
        self.dice.is_some()
    }

    pub fn values(&self) -> Option<[u8; 2]> {
        self.dice
    }
}

/// The two main dice plus the bonus pair.
///
/// The faces start at 6-6 (never rolled, bonus inactive). Only a roll or
/// [`DicePair::set`] activates the bonus pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DicePair {
    die1: u8,
    die2: u8,
    bonus: BonusPair,
}

impl DicePair {
    /// Every distinct roll, low die first.
    pub const ALL: [Self; 21] = [
        DicePair::from_numbers(1, 1), DicePair::from_numbers(1, 2), DicePair::from_numbers(1, 3),
        DicePair::from_numbers(1, 4), DicePair::from_numbers(1, 5), DicePair::from_numbers(1, 6),
        DicePair::from_numbers(2, 2), DicePair::from_numbers(2, 3), DicePair::from_numbers(2, 4),
        DicePair::from_numbers(2, 5), DicePair::from_numbers(2, 6),
        DicePair::from_numbers(3, 3), DicePair::from_numbers(3, 4), DicePair::from_numbers(3, 5),
        DicePair::from_numbers(3, 6),
        DicePair::from_numbers(4, 4), DicePair::from_numbers(4, 5), DicePair::from_numbers(4, 6),
        DicePair::from_numbers(5, 5), DicePair::from_numbers(5, 6),
        DicePair::from_numbers(6, 6),
    ];

    pub fn new() -> Self {
        DicePair { die1: 6, die2: 6, bonus: BonusPair::default() }
    }

    /// Builds an already rolled pair. Callers guarantee both values are in 1..=6.
    pub const fn from_numbers(die1: u8, die2: u8) -> Self {
        let bonus = if die1 == die2 {
            BonusPair { dice: Some([die1, die1]) }
        } else {
            BonusPair { dice: None }
        };
        DicePair { die1, die2, bonus }
    }

    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let die1 = rng.random_range(1..=6);
        let die2 = rng.random_range(1..=6);
        *self = DicePair::from_numbers(die1, die2);
        debug!(dice = %self, bonus = self.bonus.is_active(), "dice rolled");
    }

    /// Applies values rolled elsewhere, e.g. by an animated presentation layer.
    pub fn set(&mut self, die1: u8, die2: u8) -> Result<()> {
        for die in [die1, die2] {
            if !(1..=6).contains(&die) {
                return Err(Error::InvalidDieValue(die));
            }
        }
        *self = DicePair::from_numbers(die1, die2);
        debug!(dice = %self, bonus = self.bonus.is_active(), "dice set");
        Ok(())
    }

    pub fn die1(&self) -> u8 {
        self.die1
    }

    pub fn die2(&self) -> u8 {
        self.die2
    }

    pub fn values(&self) -> [u8; 2] {
        [self.die1, self.die2]
    }

    pub fn is_doubles(&self) -> bool {
        self.die1 == self.die2
    }

    pub fn bonus(&self) -> &BonusPair {
        &self.bonus
    }
}

impl Default for DicePair {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DicePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.die1, self.die2)
    }
}
