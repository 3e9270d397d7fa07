// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator is a port of the [Cactus Kev's][kevlink] poker evaluator to
//! evaluate 5, 6, and 7 cards poker hands.
//!
//! A five cards hand is evaluated with a single lookup: the OR of the cards rank
//! bits for a flush, or the product of the cards rank primes for all other
//! hands. The lookup tables are built once and shared by all threads, see
//! [LookupTable]. Hands with 6 or 7 cards are evaluated by taking the best of
//! all their 5 cards subsets.
//!
//! It provides an [evaluate] function that computes a hand rank and a slightly
//! slower [evaluate_with_best_hand] that computes the hand rank and returns the
//! five best cards, useful for UIs to show a winning hand.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html

mod hand;
pub use hand::{evaluate, evaluate_with_best_hand, rank_to_class, rank_to_percentile};

mod rank;
pub use rank::{HandRank, RankClass};

mod stats;
pub use stats::ClassCounts;

mod table;
pub use table::LookupTable;
