// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Primehand Poker cards types.
//!
//! Cards use the Cactus Kev's encoding, they can be built from a rank and a
//! suit or parsed from text:
//!
//! ```
//! # use primehand_cards::{Card, Rank, Suit, parse_cards};
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//!
//! let board = parse_cards("Qh Jh, Th").unwrap();
//! assert_eq!(board.len(), 3);
//! ```
//!
//! A [Deck] deals shuffled cards and enumerates hands, here all the two cards
//! starting hands:
//!
//! ```
//! # use primehand_cards::Deck;
//! let mut starting_hands = 0;
//! Deck::default().for_each(2, |hand| {
//!     assert_eq!(hand.len(), 2);
//!     starting_hands += 1;
//! });
//! assert_eq!(starting_hands, 1_326);
//! ```
//!
//! With the **`parallel`** feature `Deck::par_for_each` spreads the hands over
//! a number of scoped threads, the closure gets the task id along with the
//! hand so that tasks can keep their own counters.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, PRIMES, Rank, Suit};

mod parse;
pub use parse::{ParseCardError, parse_cards};

#[cfg(feature = "parallel")]
mod parallel;
