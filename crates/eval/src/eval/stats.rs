// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand class statistics.
use serde::{Deserialize, Serialize};
use std::{fmt, ops::AddAssign};

use crate::{Deck, EvalError, HandRank, LookupTable, RankClass};

/// Number of hands for each rank class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts([u64; RankClass::COUNT]);

impl ClassCounts {
    /// Number of hands in the given class.
    pub fn get(&self, class: RankClass) -> u64 {
        self.0[class as usize]
    }

    /// Number of hands in all classes.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Iterates classes and their counts from the strongest class.
    pub fn iter(&self) -> impl Iterator<Item = (RankClass, u64)> + '_ {
        RankClass::classes().map(|class| (class, self.get(class)))
    }

    /// Counts a hand with the given rank.
    pub fn add(&mut self, rank: HandRank) {
        self.0[rank.class() as usize] += 1;
    }
}

impl AddAssign for ClassCounts {
    fn add_assign(&mut self, other: Self) {
        for (count, other) in self.0.iter_mut().zip(other.0) {
            *count += other;
        }
    }
}

impl fmt::Display for ClassCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (class, count) in self.iter() {
            writeln!(f, "{:<17}{count}", format!("{class}:"))?;
        }

        Ok(())
    }
}

impl LookupTable {
    /// Counts the hands of each class among all the k-cards hands that can be
    /// made with the deck cards.
    pub fn class_counts(&self, deck: &Deck, k: usize) -> Result<ClassCounts, EvalError> {
        check_size(k)?;

        let mut counts = ClassCounts::default();
        deck.for_each(k, |hand| counts.add(self.eval_distinct(hand)));
        Ok(counts)
    }

    /// Like [LookupTable::class_counts] with the hands split across
    /// `num_tasks` threads that share this table.
    #[cfg(feature = "parallel")]
    pub fn par_class_counts(
        &self,
        deck: &Deck,
        k: usize,
        num_tasks: usize,
    ) -> Result<ClassCounts, EvalError> {
        use std::sync::atomic::{AtomicU64, Ordering};

        check_size(k)?;

        // One set of counters per task.
        let task_counts = (0..num_tasks.max(1))
            .map(|_| std::array::from_fn::<_, { RankClass::COUNT }, _>(|_| AtomicU64::new(0)))
            .collect::<Vec<_>>();

        deck.par_for_each(task_counts.len(), k, |task_id, hand| {
            let class = self.eval_distinct(hand).class();
            task_counts[task_id][class as usize].fetch_add(1, Ordering::Relaxed);
        });

        let mut counts = ClassCounts::default();
        for task in &task_counts {
            let mut task_total = ClassCounts::default();
            for (count, counter) in task_total.0.iter_mut().zip(task) {
                *count = counter.load(Ordering::Relaxed);
            }

            counts += task_total;
        }

        Ok(counts)
    }
}

/// Deck cards are distinct, only the hand size needs checking.
fn check_size(k: usize) -> Result<(), EvalError> {
    if (5..=7).contains(&k) {
        Ok(())
    } else {
        Err(EvalError::InvalidHandSize(k))
    }
}
