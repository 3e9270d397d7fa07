// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Same as eval_all7 with one task per available core:
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all7
// ```

use std::{thread, time::Instant};

use primehand_eval::*;

fn main() -> Result<(), EvalError> {
    let num_tasks = thread::available_parallelism().map_or(4, |n| n.get());
    let table = LookupTable::global();

    let now = Instant::now();
    let counts = table.par_class_counts(&Deck::default(), 7, num_tasks)?;
    let elapsed = now.elapsed().as_secs_f64();

    println!("Tasks            {num_tasks}");
    println!("Total hands      {}", counts.total());
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", counts.total() as f64 / elapsed);
    print!("{counts}");

    Ok(())
}
