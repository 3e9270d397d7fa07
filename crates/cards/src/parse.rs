// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing from their text representation.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when parsing cards from text or from their ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank character is not one of 23456789TJQKA.
    #[error("invalid card rank '{0}'")]
    InvalidRank(char),
    /// The suit character is not one of cdhs.
    #[error("invalid card suit '{0}'")]
    InvalidSuit(char),
    /// A card token must have exactly two characters.
    #[error("invalid card '{0}', expected rank and suit as in 'Ah'")]
    InvalidLength(String),
    /// The id is not the encoding of a card.
    #[error("invalid card id {0:#010x}")]
    InvalidId(u32),
}

impl Rank {
    fn from_char(c: char) -> Result<Rank, ParseCardError> {
        let upper = c.to_ascii_uppercase();
        Rank::SYMBOLS
            .iter()
            .position(|&symbol| symbol == upper)
            .and_then(|idx| Rank::from_index(idx as u8))
            .ok_or(ParseCardError::InvalidRank(c))
    }
}

impl Suit {
    fn from_char(c: char) -> Result<Suit, ParseCardError> {
        let lower = c.to_ascii_lowercase();
        Suit::suits()
            .find(|suit| suit.symbol() == lower)
            .ok_or(ParseCardError::InvalidSuit(c))
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card from a rank and suit pair like `Ah`, `TD` or `2c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::from_char(rank)?, Suit::from_char(suit)?))
            }
            _ => Err(ParseCardError::InvalidLength(s.to_string())),
        }
    }
}

/// Parses a list of cards separated by spaces or commas.
///
/// Cards can also be concatenated, so that `"AhKh"`, `"Ah Kh"` and `"Ah,Kh"`
/// all return the same two cards.
///
/// ```
/// # use primehand_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("AhKh, 2c").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[2], Card::new(Rank::Deuce, Suit::Clubs));
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let mut cards = Vec::new();

    for token in s.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }

        let chars = token.chars().collect::<Vec<_>>();
        if chars.len() % 2 != 0 {
            return Err(ParseCardError::InvalidLength(token.to_string()));
        }

        for pair in chars.chunks(2) {
            cards.push(Card::new(Rank::from_char(pair[0])?, Suit::from_char(pair[1])?));
        }
    }

    Ok(cards)
}
