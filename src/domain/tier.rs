use super::entry::Priority;
use crate::error::QueueError;
use std::ops::RangeInclusive;

/// The first six digits of a bank card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBin(u32);

impl CardBin {
    pub const RANGE: RangeInclusive<u32> = 100_000..=999_999;

    pub fn new(value: u32) -> Result<Self, QueueError> {
        if Self::RANGE.contains(&value) {
            Ok(Self(value))
        } else {
            Err(QueueError::ValidationError(format!(
                "BIN {value} is not a 6-digit number"
            )))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CardBin {
    type Error = QueueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Service class a customer is queued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Platinum,
    Golden,
    Silver,
    Regular,
    /// Aged or disabled visitor without a bank card.
    Prioritized,
    Standard,
}

impl Tier {
    pub fn from_bin(bin: CardBin) -> Self {
        match bin.value() {
            500_000..=599_999 => Tier::Platinum,
            400_000..=499_999 => Tier::Golden,
            300_000..=399_999 => Tier::Silver,
            _ => Tier::Regular,
        }
    }

    pub fn for_walk_in(aged_or_disabled: bool) -> Self {
        if aged_or_disabled {
            Tier::Prioritized
        } else {
            Tier::Standard
        }
    }

    pub fn priority(self) -> Priority {
        match self {
            Tier::Platinum | Tier::Prioritized => Priority(1),
            Tier::Golden => Priority(2),
            Tier::Silver => Priority(3),
            Tier::Regular => Priority(4),
            Tier::Standard => Priority(5),
        }
    }
}
