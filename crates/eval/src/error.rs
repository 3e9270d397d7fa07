// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use crate::{Card, RankClass};

/// Errors returned by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have 5, 6, or 7 cards.
    #[error("a hand must have 5, 6 or 7 cards, got {0}")]
    InvalidHandSize(usize),
    /// A card shows up more than once in the hand.
    #[error("card {0} appears more than once in the hand")]
    DuplicateCard(Card),
    /// The value is not a valid hand rank.
    #[error("invalid hand rank {0}, must be 1..=7462")]
    InvalidRank(u16),
}

/// Errors raised by the lookup tables construction.
///
/// These are programming errors, a table that fails to build is never used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Two hands map to the same table slot.
    #[error("duplicate {table} key 0x{key:x} for ranks {first} and {second}")]
    DuplicateKey {
        /// The table with the collision.
        table: &'static str,
        /// The colliding key.
        key: u32,
        /// The rank already stored for the key.
        first: u16,
        /// The rank that was being inserted.
        second: u16,
    },
    /// A class ranks don't end at the class upper bound.
    #[error("{class} ranks end at {found}, expected {expected}")]
    ClassBoundary {
        /// The class being built.
        class: RankClass,
        /// The class upper bound.
        expected: u16,
        /// The last rank assigned.
        found: u16,
    },
}
