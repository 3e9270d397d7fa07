// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks and rank classes.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::EvalError;

/// A hand rank in 1..=7462.
///
/// One is the best hand (a royal flush) and 7462 the worst (7-5-4-3-2
/// unsuited), so that comparing two ranks with `<` tells which hand is
/// stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct HandRank(u16);

impl HandRank {
    /// The number of distinct 5 cards hand ranks.
    pub const COUNT: u16 = 7462;

    /// The best possible hand.
    pub const BEST: HandRank = HandRank(1);

    /// The worst possible hand.
    pub const WORST: HandRank = HandRank(Self::COUNT);

    /// Creates a rank from a raw value, returns None if not in 1..=7462.
    pub fn new(value: u16) -> Option<Self> {
        (1..=Self::COUNT).contains(&value).then_some(Self(value))
    }

    /// Creates a rank from a value known to be in range.
    pub(crate) const fn from_table(value: u16) -> Self {
        Self(value)
    }

    /// The raw rank value.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The hand category for this rank.
    pub fn class(&self) -> RankClass {
        RankClass::classes()
            .find(|class| self.0 <= class.max_rank())
            .unwrap_or(RankClass::HighCard)
    }

    /// The fraction of all hand ranks this rank beats or ties, 0.0 for the
    /// worst hand up to almost 1.0 for a royal flush.
    pub fn percentile(&self) -> f64 {
        1.0 - f64::from(self.0) / f64::from(Self::COUNT)
    }

    /// A score where higher is better, from 1 for the worst hand to 7462 for
    /// the best one.
    pub fn score(&self) -> u16 {
        Self::COUNT + 1 - self.0
    }
}

impl TryFrom<u16> for HandRank {
    type Error = EvalError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        HandRank::new(value).ok_or(EvalError::InvalidRank(value))
    }
}

impl From<HandRank> for u16 {
    fn from(rank: HandRank) -> Self {
        rank.0
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A poker hand category.
///
/// Classes are ordered from the strongest to the weakest and each one covers a
/// contiguous range of hand ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankClass {
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 0,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Five cards of the same suit.
    Flush,
    /// Five cards in a sequence.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two different pairs.
    TwoPair,
    /// Two cards of the same rank.
    OnePair,
    /// None of the above.
    HighCard,
}

impl RankClass {
    /// The number of classes.
    pub const COUNT: usize = 9;

    const ALL: [RankClass; Self::COUNT] = [
        RankClass::StraightFlush,
        RankClass::FourOfAKind,
        RankClass::FullHouse,
        RankClass::Flush,
        RankClass::Straight,
        RankClass::ThreeOfAKind,
        RankClass::TwoPair,
        RankClass::OnePair,
        RankClass::HighCard,
    ];

    /// Returns all classes from the strongest to the weakest.
    pub fn classes() -> impl DoubleEndedIterator<Item = RankClass> {
        Self::ALL.into_iter()
    }

    /// The worst rank of this class.
    pub const fn max_rank(&self) -> u16 {
        match self {
            RankClass::StraightFlush => 10,
            RankClass::FourOfAKind => 166,
            RankClass::FullHouse => 322,
            RankClass::Flush => 1599,
            RankClass::Straight => 1609,
            RankClass::ThreeOfAKind => 2467,
            RankClass::TwoPair => 3325,
            RankClass::OnePair => 6185,
            RankClass::HighCard => 7462,
        }
    }

    /// The best rank of this class.
    pub const fn min_rank(&self) -> u16 {
        match self {
            RankClass::StraightFlush => 1,
            RankClass::FourOfAKind => 11,
            RankClass::FullHouse => 167,
            RankClass::Flush => 323,
            RankClass::Straight => 1600,
            RankClass::ThreeOfAKind => 1610,
            RankClass::TwoPair => 2468,
            RankClass::OnePair => 3326,
            RankClass::HighCard => 6186,
        }
    }

    /// The class name.
    pub fn name(&self) -> &'static str {
        match self {
            RankClass::StraightFlush => "Straight Flush",
            RankClass::FourOfAKind => "Four of a Kind",
            RankClass::FullHouse => "Full House",
            RankClass::Flush => "Flush",
            RankClass::Straight => "Straight",
            RankClass::ThreeOfAKind => "Three of a Kind",
            RankClass::TwoPair => "Two Pair",
            RankClass::OnePair => "One Pair",
            RankClass::HighCard => "High Card",
        }
    }
}

impl fmt::Display for RankClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_thresholds_partition_ranks() {
        let mut next = 1;
        for class in RankClass::classes() {
            assert_eq!(class.min_rank(), next, "{class}");
            assert!(class.max_rank() >= class.min_rank(), "{class}");
            next = class.max_rank() + 1;
        }

        assert_eq!(next - 1, HandRank::COUNT);
    }

    #[test]
    fn rank_to_class() {
        for class in RankClass::classes() {
            let first = HandRank::new(class.min_rank()).unwrap();
            let last = HandRank::new(class.max_rank()).unwrap();
            assert_eq!(first.class(), class);
            assert_eq!(last.class(), class);
        }

        assert_eq!(HandRank::BEST.class(), RankClass::StraightFlush);
        assert_eq!(HandRank::WORST.class(), RankClass::HighCard);
        assert_eq!(RankClass::FullHouse.to_string(), "Full House");
    }

    #[test]
    fn rank_percentile() {
        assert!((HandRank::BEST.percentile() - 1.0).abs() < 1e-3);
        assert_eq!(HandRank::WORST.percentile(), 0.0);

        let mid = HandRank::new(3731).unwrap();
        assert!((mid.percentile() - 0.5).abs() < 1e-3);

        // Percentile decreases as ranks get worse.
        let p = (1..=HandRank::COUNT)
            .map(|v| HandRank::new(v).unwrap().percentile())
            .collect::<Vec<_>>();
        assert!(p.windows(2).all(|w| w[0] > w[1]));
        assert!(p.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn rank_score() {
        assert_eq!(HandRank::BEST.score(), 7462);
        assert_eq!(HandRank::WORST.score(), 1);
    }

    #[test]
    fn rank_validation() {
        assert_eq!(HandRank::new(0), None);
        assert_eq!(HandRank::new(7463), None);
        assert_eq!(HandRank::new(7462), Some(HandRank::WORST));
        assert_eq!(HandRank::try_from(0), Err(EvalError::InvalidRank(0)));
        assert_eq!(u16::from(HandRank::BEST), 1);
    }
}
