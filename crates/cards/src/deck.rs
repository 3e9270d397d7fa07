// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ParseCardError;

/// Primes used to encode a card rank.
pub const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// Deserialization only accepts ids produced by [Card::new], so every card has
/// exactly one suit bit, one rank bit and the matching rank prime.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Card(u32);

/// A Poker card.
impl Card {
    /// Mask for the suit bits of a card id.
    pub const SUIT_MASK: u32 = 0xF000;

    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// This card unique id.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match Suit::from_bits(self.suit_bits()) {
            Some(suit) => suit,
            None => unreachable!("card id {:#010x} has no valid suit", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match Rank::from_index(self.rank_index()) {
            Some(rank) => rank,
            None => unreachable!("card id {:#010x} has no valid rank", self.0),
        }
    }

    /// Returns the rank index, 0 for a deuce up to 12 for an ace.
    #[inline]
    pub const fn rank_index(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub const fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// Returns the prime number that identifies this card rank.
    #[inline]
    pub const fn prime(&self) -> u32 {
        self.0 & 0xff
    }

    /// Returns the 13 bits rank mask with only this card rank bit set.
    #[inline]
    pub const fn rank_bit(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// A dense index in 0..52 unique for each card.
    #[inline]
    pub const fn index(&self) -> usize {
        self.rank_index() as usize * 4 + self.suit_bits().trailing_zeros() as usize
    }
}

impl TryFrom<u32> for Card {
    type Error = ParseCardError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        let card = Self(id);
        let rank = Rank::from_index(card.rank_index());
        let suit = Suit::from_bits(card.suit_bits());

        match (rank, suit) {
            (Some(rank), Some(suit)) if Card::new(rank, suit).0 == id => Ok(card),
            _ => Err(ParseCardError::InvalidId(id)),
        }
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for the given index, 0 for a deuce up to 12 for an ace.
    pub fn from_index(index: u8) -> Option<Rank> {
        Self::ALL.get(index as usize).copied()
    }

    /// Rank symbols from the deuce to the ace.
    pub(crate) const SYMBOLS: [char; 13] =
        ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

    /// The rank symbol, a digit or one of T, J, Q, K, A.
    pub fn symbol(&self) -> char {
        Self::SYMBOLS[*self as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol().to_ascii_uppercase())
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The lower case suit symbol, one of c, d, h, s.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Returns the suit for the given one-hot suit bits.
    pub fn from_bits(bits: u8) -> Option<Suit> {
        match bits {
            0x8 => Some(Suit::Clubs),
            0x4 => Some(Suit::Diamonds),
            0x2 => Some(Suit::Hearts),
            0x1 => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    pub(crate) cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns None if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are visited in lexicographic order of the cards positions in the
    /// deck.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let mut hand = [Card::new(Rank::Ace, Suit::Hearts); 7];
        for lead in 0..self.cards.len() {
            self.for_each_with_lead(lead, k, &mut hand, &mut f);
        }
    }

    /// Calls the `f` closure for each k-cards hand whose first card is the
    /// one at position `lead`.
    pub(crate) fn for_each_with_lead<F>(
        &self,
        lead: usize,
        k: usize,
        hand: &mut [Card; 7],
        f: &mut F,
    ) where
        F: FnMut(&[Card]),
    {
        let Some(mut subset) = Subset::with_lead(lead, k, self.cards.len()) else {
            return;
        };

        loop {
            for (slot, &pos) in hand.iter_mut().zip(subset.positions()) {
                *slot = self.cards[pos];
            }

            f(&hand[..k]);

            if !subset.advance() {
                break;
            }
        }
    }

    /// Calls the `f` closure with `samples` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<F>(&self, samples: usize, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut rng = rand::rng();
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];

        for _ in 0..samples {
            for (pos, c) in self.cards.choose_multiple(&mut rng, k).enumerate() {
                h[pos] = *c;
            }

            f(&h[0..k]);
        }
    }
}

/// A k-subset of the positions 0..n, kept in increasing order.
#[derive(Debug)]
struct Subset {
    pos: [usize; 7],
    k: usize,
    n: usize,
}

impl Subset {
    /// The first subset starting at `lead`, None if k positions don't fit.
    fn with_lead(lead: usize, k: usize, n: usize) -> Option<Self> {
        if k == 0 || k > 7 || lead + k > n {
            return None;
        }

        let mut pos = [0; 7];
        for (offset, p) in pos[..k].iter_mut().enumerate() {
            *p = lead + offset;
        }

        Some(Self { pos, k, n })
    }

    fn positions(&self) -> &[usize] {
        &self.pos[..self.k]
    }

    /// Steps to the next subset with the same lead, false when there is none.
    fn advance(&mut self) -> bool {
        // Position i can go up to n - k + i, the lead never moves.
        for i in (1..self.k).rev() {
            if self.pos[i] < self.n - self.k + i {
                self.pos[i] += 1;
                for j in i + 1..self.k {
                    self.pos[j] = self.pos[j - 1] + 1;
                }

                return true;
            }
        }

        false
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
