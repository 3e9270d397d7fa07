// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks lookup tables.
//!
//! A five cards hand is either a flush, when all cards have the same suit, or
//! not. Flush hands are identified by the OR of the cards rank bits that has
//! exactly five bits set, all other hands by the product of the cards rank
//! primes that is unique for each multiset of ranks. The tables map these keys
//! to the hand rank in 1..=7462.
use ahash::HashMap;
use log::debug;
use std::{fmt, sync::LazyLock, time::Instant};

use crate::{BuildError, HandRank, PRIMES, RankClass};

/// Number of 13 bits rank masks.
const FLUSH_SIZE: usize = 1 << 13;

/// Number of entries in the unsuited table.
const UNSUITED_SIZE: usize = 6175;

/// Straights rank masks from the ace high straight down to the wheel.
const STRAIGHTS: [u16; 10] = [
    0x1f00, // A K Q J T
    0x0f80, // K Q J T 9
    0x07c0, // Q J T 9 8
    0x03e0, // J T 9 8 7
    0x01f0, // T 9 8 7 6
    0x00f8, // 9 8 7 6 5
    0x007c, // 8 7 6 5 4
    0x003e, // 7 6 5 4 3
    0x001f, // 6 5 4 3 2
    0x100f, // 5 4 3 2 A
];

static TABLE: LazyLock<LookupTable> = LazyLock::new(LookupTable::build);

/// Lookup tables from five cards keys to hand ranks.
///
/// Tables are built once and never change, they can be shared across threads
/// without locking, use [LookupTable::global] for the process wide instance.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupTable {
    /// Rank mask to rank, zero for masks that are not a five cards flush.
    pub(super) flush: Box<[u16; FLUSH_SIZE]>,
    /// Rank primes product to rank.
    pub(super) unsuited: HashMap<u32, u16>,
}

impl LookupTable {
    /// Returns the process wide tables, built on first use.
    pub fn global() -> &'static LookupTable {
        &TABLE
    }

    /// Builds the lookup tables.
    ///
    /// Panics if the tables fail their consistency checks.
    pub fn build() -> Self {
        Self::built_or_panic(Self::try_build())
    }

    fn built_or_panic(result: Result<Self, BuildError>) -> Self {
        match result {
            Ok(table) => table,
            Err(e) => panic!("Lookup table construction failed: {e}"),
        }
    }

    /// Builds the lookup tables returning an error if two hands collide or a
    /// class doesn't fill its ranks range.
    pub fn try_build() -> Result<Self, BuildError> {
        let now = Instant::now();

        let mut b = Builder::new();
        b.straight_flushes()?;
        b.four_of_a_kind()?;
        b.full_house()?;
        b.flushes()?;
        b.straights()?;
        b.three_of_a_kind()?;
        b.two_pair()?;
        b.one_pair()?;
        b.high_card()?;

        let table = b.table;
        debug!(
            "Built lookup tables in {:?}: {} flush keys, {} unsuited keys",
            now.elapsed(),
            table.flush_len(),
            table.unsuited.len()
        );

        Ok(table)
    }

    /// Looks up a flush hand by the OR of its cards rank bits.
    pub fn flush_rank(&self, rank_mask: u16) -> Option<HandRank> {
        self.flush
            .get(rank_mask as usize)
            .filter(|&&r| r != 0)
            .map(|&r| HandRank::from_table(r))
    }

    /// Looks up a non flush hand by the product of its cards rank primes.
    pub fn unsuited_rank(&self, prime_product: u32) -> Option<HandRank> {
        self.unsuited
            .get(&prime_product)
            .map(|&r| HandRank::from_table(r))
    }

    /// Number of keys in the flush table.
    pub fn flush_len(&self) -> usize {
        self.flush.iter().filter(|&&r| r != 0).count()
    }

    /// Number of keys in the unsuited table.
    pub fn unsuited_len(&self) -> usize {
        self.unsuited.len()
    }
}

impl fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupTable")
            .field("flush", &self.flush_len())
            .field("unsuited", &self.unsuited.len())
            .finish()
    }
}

/// Product of the primes for the given ranks indices.
fn prime_product(ranks: &[usize]) -> u32 {
    ranks.iter().map(|&r| PRIMES[r]).product()
}

/// Product of the primes for the ranks in a rank mask.
fn mask_product(mask: u16) -> u32 {
    (0..13)
        .filter(|r| mask & (1 << r) != 0)
        .map(|r| PRIMES[r])
        .product()
}

/// Calls `f` with all five distinct ranks combinations, ranks are in
/// descending order and combinations go from the best to the worst.
fn for_each_distinct5<F>(mut f: F) -> Result<(), BuildError>
where
    F: FnMut([usize; 5]) -> Result<(), BuildError>,
{
    for r1 in (4..13).rev() {
        for r2 in (3..r1).rev() {
            for r3 in (2..r2).rev() {
                for r4 in (1..r3).rev() {
                    for r5 in (0..r4).rev() {
                        f([r1, r2, r3, r4, r5])?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Fills the tables assigning ranks in order of strength.
struct Builder {
    table: LookupTable,
    next_rank: u16,
}

impl Builder {
    fn new() -> Self {
        Self {
            table: LookupTable {
                flush: Box::new([0; FLUSH_SIZE]),
                unsuited: HashMap::with_capacity_and_hasher(UNSUITED_SIZE, Default::default()),
            },
            next_rank: 1,
        }
    }

    fn insert_flush(&mut self, mask: u16) -> Result<(), BuildError> {
        let slot = &mut self.table.flush[mask as usize];
        if *slot != 0 {
            return Err(BuildError::DuplicateKey {
                table: "flush",
                key: mask as u32,
                first: *slot,
                second: self.next_rank,
            });
        }

        *slot = self.next_rank;
        self.next_rank += 1;
        Ok(())
    }

    fn insert_unsuited(&mut self, product: u32) -> Result<(), BuildError> {
        if let Some(first) = self.table.unsuited.insert(product, self.next_rank) {
            return Err(BuildError::DuplicateKey {
                table: "unsuited",
                key: product,
                first,
                second: self.next_rank,
            });
        }

        self.next_rank += 1;
        Ok(())
    }

    /// Checks the last assigned rank is the class upper bound.
    fn end_class(&self, class: RankClass) -> Result<(), BuildError> {
        let found = self.next_rank - 1;
        if found != class.max_rank() {
            return Err(BuildError::ClassBoundary {
                class,
                expected: class.max_rank(),
                found,
            });
        }

        Ok(())
    }

    fn straight_flushes(&mut self) -> Result<(), BuildError> {
        for mask in STRAIGHTS {
            self.insert_flush(mask)?;
        }

        self.end_class(RankClass::StraightFlush)
    }

    fn four_of_a_kind(&mut self) -> Result<(), BuildError> {
        for quad in (0..13).rev() {
            for kicker in (0..13).rev().filter(|&k| k != quad) {
                self.insert_unsuited(prime_product(&[quad, quad, quad, quad, kicker]))?;
            }
        }

        self.end_class(RankClass::FourOfAKind)
    }

    fn full_house(&mut self) -> Result<(), BuildError> {
        for trips in (0..13).rev() {
            for pair in (0..13).rev().filter(|&p| p != trips) {
                self.insert_unsuited(prime_product(&[trips, trips, trips, pair, pair]))?;
            }
        }

        self.end_class(RankClass::FullHouse)
    }

    fn flushes(&mut self) -> Result<(), BuildError> {
        for_each_distinct5(|ranks| {
            let mask = ranks.iter().fold(0u16, |m, &r| m | (1 << r));
            if STRAIGHTS.contains(&mask) {
                Ok(())
            } else {
                self.insert_flush(mask)
            }
        })?;

        self.end_class(RankClass::Flush)
    }

    fn straights(&mut self) -> Result<(), BuildError> {
        for mask in STRAIGHTS {
            self.insert_unsuited(mask_product(mask))?;
        }

        self.end_class(RankClass::Straight)
    }

    fn three_of_a_kind(&mut self) -> Result<(), BuildError> {
        for trips in (0..13).rev() {
            for k1 in (0..13).rev().filter(|&k| k != trips) {
                for k2 in (0..k1).rev().filter(|&k| k != trips) {
                    self.insert_unsuited(prime_product(&[trips, trips, trips, k1, k2]))?;
                }
            }
        }

        self.end_class(RankClass::ThreeOfAKind)
    }

    fn two_pair(&mut self) -> Result<(), BuildError> {
        for high in (0..13).rev() {
            for low in (0..high).rev() {
                for kicker in (0..13).rev().filter(|&k| k != high && k != low) {
                    self.insert_unsuited(prime_product(&[high, high, low, low, kicker]))?;
                }
            }
        }

        self.end_class(RankClass::TwoPair)
    }

    fn one_pair(&mut self) -> Result<(), BuildError> {
        for pair in (0..13).rev() {
            for k1 in (0..13).rev().filter(|&k| k != pair) {
                for k2 in (0..k1).rev().filter(|&k| k != pair) {
                    for k3 in (0..k2).rev().filter(|&k| k != pair) {
                        self.insert_unsuited(prime_product(&[pair, pair, k1, k2, k3]))?;
                    }
                }
            }
        }

        self.end_class(RankClass::OnePair)
    }

    fn high_card(&mut self) -> Result<(), BuildError> {
        for_each_distinct5(|ranks| {
            let mask = ranks.iter().fold(0u16, |m, &r| m | (1 << r));
            if STRAIGHTS.contains(&mask) {
                Ok(())
            } else {
                self.insert_unsuited(prime_product(&ranks))
            }
        })?;

        self.end_class(RankClass::HighCard)
    }
}
