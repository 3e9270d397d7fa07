// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Primehand CLI, evaluates poker hands from the command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

use primehand_eval::{HandRank, parse_cards};

mod deal;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a 5, 6 or 7 cards hand.
    Eval {
        /// The player cards (e.g. "AhKd").
        #[clap(long)]
        hole: String,
        /// The board cards (e.g. "Qh Jh Th").
        #[clap(long, default_value = "")]
        board: String,
    },
    /// Shows the class and percentile of a hand rank.
    Class {
        /// The hand rank.
        #[clap(value_parser = clap::value_parser!(u16).range(1..=7462))]
        rank: u16,
    },
    /// Deals a random board and players hands and evaluates them.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=9))]
        players: u8,
        /// Number of board cards.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(3..=5))]
        board_size: u8,
        /// Seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Eval { hole, board } => eval(&hole, &board),
        Command::Class { rank } => class(rank),
        Command::Deal {
            players,
            board_size,
            seed,
        } => {
            let config = deal::Config {
                players: players as usize,
                board_size: board_size as usize,
                seed,
            };

            deal::run(&config)
        }
    }
}

fn eval(hole: &str, board: &str) -> Result<()> {
    let hole = parse_cards(hole)?;
    let board = parse_cards(board)?;

    let (rank, best) = primehand_eval::evaluate_with_best_hand(&hole, &board)?;

    let best = best.iter().map(|c| c.to_string()).collect::<Vec<_>>();
    println!("Best hand:  {}", best.join(" "));
    print_rank(rank);

    Ok(())
}

fn class(rank: u16) -> Result<()> {
    let rank = HandRank::try_from(rank)?;
    print_rank(rank);
    Ok(())
}

fn print_rank(rank: HandRank) {
    println!("Rank:       {rank}");
    println!("Class:      {}", rank.class());
    println!("Percentile: {:.2}%", rank.percentile() * 100.0);
    println!("Score:      {}", rank.score());
}
