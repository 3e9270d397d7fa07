// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random deals.
use anyhow::{Context, Result};
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

use primehand_eval::{Card, Deck, HandRank, evaluate};

/// Deal configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of players.
    pub players: usize,
    /// Number of board cards.
    pub board_size: usize,
    /// Seed for the deck shuffle, random if None.
    pub seed: Option<u64>,
}

/// A player hand and its rank.
#[derive(Debug)]
pub struct PlayerHand {
    /// The player hole cards.
    pub hole: [Card; 2],
    /// The rank of the hole cards with the board.
    pub rank: HandRank,
}

/// The result of a deal.
#[derive(Debug)]
pub struct Deal {
    /// The board cards.
    pub board: Vec<Card>,
    /// The players hands.
    pub hands: Vec<PlayerHand>,
}

impl Deal {
    /// Returns the indices of the players with the best hand.
    pub fn leaders(&self) -> Vec<usize> {
        let best = self.hands.iter().map(|h| h.rank).min();

        self.hands
            .iter()
            .enumerate()
            .filter(|(_, h)| Some(h.rank) == best)
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Deals the board and the players cards from a shuffled deck.
pub fn deal<R: Rng>(rng: &mut R, players: usize, board_size: usize) -> Result<Deal> {
    let mut deck = Deck::new_and_shuffled(rng);

    let mut board = Vec::with_capacity(board_size);
    for _ in 0..board_size {
        board.push(deck.deal().context("Not enough cards for the board")?);
    }

    let mut hands = Vec::with_capacity(players);
    for _ in 0..players {
        let c1 = deck.deal().context("Not enough cards for the players")?;
        let c2 = deck.deal().context("Not enough cards for the players")?;
        let rank = evaluate(&[c1, c2], &board)?;
        hands.push(PlayerHand {
            hole: [c1, c2],
            rank,
        });
    }

    Ok(Deal { board, hands })
}

/// Deals a hand with the given configuration and prints the results.
pub fn run(config: &Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let deal = deal(&mut rng, config.players, config.board_size)?;
    info!(
        "Dealt {} players with {} board cards",
        deal.hands.len(),
        deal.board.len()
    );

    println!("Board: {}", format_cards(&deal.board));
    for (idx, hand) in deal.hands.iter().enumerate() {
        println!(
            "Player {}: {}  rank {:>4}  {:<16} {:>6.2}%",
            idx + 1,
            format_cards(&hand.hole),
            hand.rank.value(),
            hand.rank.class().to_string(),
            hand.rank.percentile() * 100.0
        );
    }

    let leaders = deal
        .leaders()
        .iter()
        .map(|idx| format!("Player {}", idx + 1))
        .collect::<Vec<_>>();
    println!("Best hand: {}", leaders.join(", "));

    Ok(())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_players() {
        let mut rng = StdRng::seed_from_u64(42);

        for board_size in 3..=5 {
            let deal = deal(&mut rng, 9, board_size).unwrap();
            assert_eq!(deal.board.len(), board_size);
            assert_eq!(deal.hands.len(), 9);

            // All dealt cards are distinct.
            let mut cards = deal.board.clone();
            cards.extend(deal.hands.iter().flat_map(|h| h.hole));
            cards.sort_by_key(|c| c.index());
            cards.dedup();
            assert_eq!(cards.len(), board_size + 18);

            for hand in &deal.hands {
                assert_eq!(evaluate(&hand.hole, &deal.board).unwrap(), hand.rank);
            }

            let leaders = deal.leaders();
            assert!(!leaders.is_empty());

            let best = deal.hands.iter().map(|h| h.rank).min().unwrap();
            assert!(leaders.iter().all(|&idx| deal.hands[idx].rank == best));
        }
    }

    #[test]
    fn seeded_deals_repeat() {
        let d1 = deal(&mut StdRng::seed_from_u64(7), 4, 5).unwrap();
        let d2 = deal(&mut StdRng::seed_from_u64(7), 4, 5).unwrap();
        assert_eq!(d1.board, d2.board);

        let ranks = |d: &Deal| d.hands.iter().map(|h| h.rank).collect::<Vec<_>>();
        assert_eq!(ranks(&d1), ranks(&d2));
    }

    #[test]
    fn run_with_seed() {
        let config = Config {
            players: 2,
            board_size: 3,
            seed: Some(1),
        };

        assert!(run(&config).is_ok());
    }
}
