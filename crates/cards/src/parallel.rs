// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
//!
//! Hands are grouped by the position of their first card, tasks take the next
//! group from a shared counter until all groups are done. Early groups are the
//! largest so the last groups taken are small and tasks finish close together.
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

use crate::{Card, Deck, Rank, Suit};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_task)
    /// and a slice of cards of length k, tasks run on scoped threads so the
    /// closure can borrow from the caller stack.
    ///
    /// Panics if k is not 2 <= k <= 7 or if num_tasks is zero.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0, "num_tasks must be at least 1");

        // Positions that can lead a k-cards hand.
        let leads = (self.cards.len() + 1).saturating_sub(k);
        let next_lead = AtomicUsize::new(0);

        thread::scope(|s| {
            for task_id in 0..num_tasks.min(leads) {
                let (f, next_lead) = (&f, &next_lead);
                s.spawn(move || {
                    let mut hand = [Card::new(Rank::Ace, Suit::Diamonds); 7];
                    let mut visit = |cards: &[Card]| f(task_id, cards);

                    loop {
                        let lead = next_lead.fetch_add(1, Ordering::Relaxed);
                        if lead >= leads {
                            break;
                        }

                        self.for_each_with_lead(lead, k, &mut hand, &mut visit);
                    }
                });
            }
        });
    }
}
