// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Builds an owned table and counts the classes of all 2.6M five cards hands:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// Straight Flush:  40
// Four of a Kind:  624
// Full House:      3744
// Flush:           5108
// Straight:        10200
// Three of a Kind: 54912
// Two Pair:        123552
// One Pair:        1098240
// High Card:       1302540
// ```

use std::time::Instant;

use primehand_eval::*;

fn main() -> Result<(), EvalError> {
    let now = Instant::now();
    let table = LookupTable::build();
    println!("Tables built in  {:.3}ms", now.elapsed().as_secs_f64() * 1000.0);

    let now = Instant::now();
    let counts = table.class_counts(&Deck::default(), 5)?;
    let elapsed = now.elapsed().as_secs_f64();

    println!("Total hands      {}", counts.total());
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", counts.total() as f64 / elapsed);
    print!("{counts}");

    Ok(())
}
