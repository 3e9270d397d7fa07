// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Primehand Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. This evaluator is a port of
//! the [Cactus Kev's][kevlink] poker evaluator, hand ranks go from 1 for a royal
//! flush to 7462 for the worst high card hand (see examples for measuring single
//! and parallel performance on your hardware).
//!
//! To evaluate a hand pass the player cards and the board cards to [evaluate]:
//!
//! ```
//! # use primehand_eval::*;
//! let hole = parse_cards("Ah Kh").unwrap();
//! let board = parse_cards("Qh Jh Th 2c").unwrap();
//!
//! let rank = evaluate(&hole, &board).unwrap();
//! assert_eq!(rank.value(), 1);
//! assert_eq!(rank_to_class(rank), RankClass::StraightFlush);
//! assert!(rank_to_percentile(rank) > 0.99);
//! ```
//!
//! lower ranks are better hands:
//!
//! ```
//! # use primehand_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let r1 = HandRank::eval(&cards[0..5]).unwrap();
//! let r2 = HandRank::eval(&cards[5..]).unwrap();
//! assert!(r2 < r1);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    ClassCounts, HandRank, LookupTable, RankClass, evaluate, evaluate_with_best_hand, rank_to_class,
    rank_to_percentile,
};

mod error;
pub use error::{BuildError, EvalError};

// Reexport cards types.
pub use primehand_cards::{Card, Deck, PRIMES, ParseCardError, Rank, Suit, parse_cards};
