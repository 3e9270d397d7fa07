// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Counts the classes of all 133M seven cards hands on one thread:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// Straight Flush:  41584
// Four of a Kind:  224848
// Full House:      3473184
// Flush:           4047644
// Straight:        6180020
// Three of a Kind: 6461620
// Two Pair:        31433400
// One Pair:        58627800
// High Card:       23294460
// ```

use std::time::Instant;

use primehand_eval::*;

fn main() -> Result<(), EvalError> {
    let table = LookupTable::global();

    let now = Instant::now();
    let counts = table.class_counts(&Deck::default(), 7)?;
    let elapsed = now.elapsed().as_secs_f64();

    println!("Total hands      {}", counts.total());
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", counts.total() as f64 / elapsed);
    print!("{counts}");

    Ok(())
}
