// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands evaluation.
use crate::{Card, EvalError, HandRank, LookupTable, Rank, RankClass, Suit};

/// Max number of cards in a hand.
const MAX_CARDS: usize = 7;

impl LookupTable {
    /// Evaluates the hand made of the player cards and the board cards.
    ///
    /// The hand must have 5, 6 or 7 cards with no duplicates, for 6 and 7
    /// cards returns the rank of the best five cards.
    pub fn evaluate(&self, hole: &[Card], board: &[Card]) -> Result<HandRank, EvalError> {
        let (cards, len) = combine(hole, board)?;
        self.eval(&cards[..len])
    }

    /// Like [LookupTable::evaluate] but also returns the best five cards.
    pub fn evaluate_with_best_hand(
        &self,
        hole: &[Card],
        board: &[Card],
    ) -> Result<(HandRank, [Card; 5]), EvalError> {
        let (cards, len) = combine(hole, board)?;
        let cards = &cards[..len];
        check_hand(cards)?;

        let (rank, best) = self.best_five(cards);
        Ok((HandRank::from_table(rank), best))
    }

    /// Evaluates a 5, 6 or 7 cards hand.
    pub fn eval(&self, cards: &[Card]) -> Result<HandRank, EvalError> {
        check_hand(cards)?;
        Ok(self.eval_distinct(cards))
    }

    /// Evaluates 5 to 7 cards already known to be distinct.
    #[inline]
    pub(super) fn eval_distinct(&self, cards: &[Card]) -> HandRank {
        let rank = match cards {
            [c1, c2, c3, c4, c5] => self.eval5(&[*c1, *c2, *c3, *c4, *c5]),
            _ => self.best_five(cards).0,
        };

        HandRank::from_table(rank)
    }

    /// Evaluates a five cards hand.
    #[inline]
    fn eval5(&self, hand: &[Card; 5]) -> u16 {
        let [c1, c2, c3, c4, c5] = hand.map(|c| c.id());

        if c1 & c2 & c3 & c4 & c5 & Card::SUIT_MASK != 0 {
            let rank_mask = (c1 | c2 | c3 | c4 | c5) >> 16;
            self.flush[rank_mask as usize]
        } else {
            // Five distinct cards always have a key in the unsuited table.
            let product = hand.iter().map(Card::prime).product::<u32>();
            self.unsuited[&product]
        }
    }

    /// Evaluates all five cards subsets and returns the best one.
    fn best_five(&self, cards: &[Card]) -> (u16, [Card; 5]) {
        let n = cards.len();
        let mut best = (u16::MAX, [cards[0]; 5]);

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let rank = self.eval5(&hand);
                            if rank < best.0 {
                                best = (rank, hand);

                                // Nothing beats a royal flush.
                                if rank == 1 {
                                    return best;
                                }
                            }
                        }
                    }
                }
            }
        }

        best
    }
}

/// Copies the player and board cards into a single hand.
fn combine(hole: &[Card], board: &[Card]) -> Result<([Card; MAX_CARDS], usize), EvalError> {
    let len = hole.len() + board.len();
    if !(5..=MAX_CARDS).contains(&len) {
        return Err(EvalError::InvalidHandSize(len));
    }

    let mut cards = [Card::new(Rank::Deuce, Suit::Spades); MAX_CARDS];
    cards[..hole.len()].copy_from_slice(hole);
    cards[hole.len()..len].copy_from_slice(board);

    Ok((cards, len))
}

/// Checks the hand size and that there are no duplicate cards.
fn check_hand(cards: &[Card]) -> Result<(), EvalError> {
    if !(5..=MAX_CARDS).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*card));
        }

        seen |= bit;
    }

    Ok(())
}

impl HandRank {
    /// Evaluates a 5, 6 or 7 cards hand using the global lookup tables.
    ///
    /// ```
    /// # use primehand_eval::*;
    /// let hand = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
    /// let rank = HandRank::eval(&hand).unwrap();
    /// assert_eq!(rank, HandRank::BEST);
    /// ```
    pub fn eval(cards: &[Card]) -> Result<HandRank, EvalError> {
        LookupTable::global().eval(cards)
    }
}

/// Evaluates the hand made of the player cards and the board cards using the
/// global lookup tables.
///
/// The combined hand must have 5, 6 or 7 cards, lower ranks are better hands.
pub fn evaluate(hole: &[Card], board: &[Card]) -> Result<HandRank, EvalError> {
    LookupTable::global().evaluate(hole, board)
}

/// Evaluates the hand and returns its rank with the best five cards.
pub fn evaluate_with_best_hand(
    hole: &[Card],
    board: &[Card],
) -> Result<(HandRank, [Card; 5]), EvalError> {
    LookupTable::global().evaluate_with_best_hand(hole, board)
}

/// Returns the category of a hand rank.
pub fn rank_to_class(rank: HandRank) -> RankClass {
    rank.class()
}

/// Returns the fraction of hand ranks the given rank beats or ties.
pub fn rank_to_percentile(rank: HandRank) -> f64 {
    rank.percentile()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, parse_cards};
    use ahash::HashSet;
    use std::thread;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn rank_of(s: &str) -> HandRank {
        HandRank::eval(&cards(s)).unwrap()
    }

    /// Min over all 5 cards subsets without the table search loops.
    fn min_subset_rank(hand: &[Card]) -> HandRank {
        let n = hand.len();
        (0u32..(1 << n))
            .filter(|mask| mask.count_ones() == 5)
            .map(|mask| {
                let subset = (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| hand[i])
                    .collect::<Vec<_>>();
                HandRank::eval(&subset).unwrap()
            })
            .min()
            .unwrap()
    }

    #[test]
    fn royal_flush() {
        let rank = evaluate(&cards("Ah Kh"), &cards("Qh Jh Th")).unwrap();
        assert_eq!(rank, HandRank::BEST);
        assert_eq!(rank_to_class(rank), RankClass::StraightFlush);
        assert_eq!(rank_to_class(rank).to_string(), "Straight Flush");
        assert!((rank_to_percentile(rank) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn class_boundaries() {
        let hands = [
            ("As Ks Qs Js Ts", 1),
            ("5d 4d 3d 2d Ad", 10),
            ("Ac Ad Ah As Kc", 11),
            ("2c 2d 2h 2s 3c", 166),
            ("Ac Ad Ah Kc Kd", 167),
            ("2c 2d 2h 3c 3d", 322),
            ("Ah Kh Qh Jh 9h", 323),
            ("7h 5h 4h 3h 2h", 1599),
            ("Ac Kd Qh Js Tc", 1600),
            ("5c 4d 3h 2s Ac", 1609),
            ("Ac Ad Ah Kc Qd", 1610),
            ("2c 2d 2h 4c 3d", 2467),
            ("Ac Ad Kc Kd Qh", 2468),
            ("3c 3d 2c 2d 4h", 3325),
            ("Ac Ad Kc Qd Jh", 3326),
            ("2c 2d 5c 4d 3h", 6185),
            ("Ac Kd Qh Js 9c", 6186),
            ("7c 5d 4h 3s 2c", 7462),
        ];

        for (hand, expected) in hands {
            assert_eq!(rank_of(hand).value(), expected, "{hand}");
        }
    }

    #[test]
    fn stronger_hands_rank_lower() {
        // From the strongest to the weakest.
        let hands = [
            "As Ks Qs Js Ts",
            "9h 8h 7h 6h 5h",
            "5d 4d 3d 2d Ad",
            "Ac Ad Ah As Kc",
            "Ac Ad Ah As Qc",
            "2c 2d 2h 2s Ac",
            "2c 2d 2h 2s 3c",
            "Ac Ad Ah Kc Kd",
            "Kc Kd Kh Ac Ad",
            "2c 2d 2h Ac Ad",
            "Ah Kh Qh Jh 9h",
            "Ah 9h 7h 5h 3h",
            "Kh Qh Jh 9h 8h",
            "Ac Kd Qh Js Tc",
            "6c 5d 4h 3s 2c",
            "5c 4d 3h 2s Ac",
            "Ac Ad Ah Kc Qd",
            "Ac Ad Ah 3c 2d",
            "Kc Kd Kh Ac Qd",
            "Ac Ad Kc Kd Qh",
            "Ac Ad Kc Kd 2h",
            "Ac Ad Qc Qd Kh",
            "Kc Kd Qc Qd Ah",
            "Ac Ad Kc Qd Jh",
            "Ac Ad 5c 4d 3h",
            "Kc Kd Ac Qd Jh",
            "Ac Kd Qh Js 9c",
            "Ac 6d 5h 4s 3c",
            "Kc Qd Jh Ts 8c",
            "7c 5d 4h 3s 2c",
        ];

        let ranks = hands.iter().map(|h| rank_of(h)).collect::<Vec<_>>();
        for (w, h) in ranks.windows(2).zip(hands.windows(2)) {
            assert!(w[0] < w[1], "{} should beat {}", h[0], h[1]);
        }
    }

    #[test]
    fn suits_dont_matter_without_flush() {
        assert_eq!(rank_of("Ac Ad Kc Qd Jh"), rank_of("As Ah Kd Qc Js"));
        assert_eq!(rank_of("9c 8d 7h 6s 5c"), rank_of("9s 8h 7d 6c 5s"));
        assert_eq!(rank_of("Ah Kh Qh Jh 9h"), rank_of("As Ks Qs Js 9s"));
    }

    #[test]
    fn four_of_a_kind_kickers() {
        let quad_aces = rank_of("Ac Ad Ah As 2c");
        let quad_deuces_trey = rank_of("2h 2d 2c 2s 3h");
        let quad_deuces_king = rank_of("2h 2d 2c 2s Kh");

        for r in [quad_aces, quad_deuces_trey, quad_deuces_king] {
            assert_eq!(r.class(), RankClass::FourOfAKind);
        }

        assert!(quad_aces < quad_deuces_king);
        assert!(quad_deuces_king < quad_deuces_trey);
    }

    #[test]
    fn seven_cards_high_card() {
        let rank = evaluate(&cards("2h 7d"), &cards("9c Jh Ks 3d 4h")).unwrap();
        assert_eq!(rank.class(), RankClass::HighCard);

        let p = rank.percentile();
        assert!(p > 0.0 && p < 0.1, "percentile {p}");

        let (best_rank, best) =
            evaluate_with_best_hand(&cards("2h 7d"), &cards("9c Jh Ks 3d 4h")).unwrap();
        assert_eq!(best_rank, rank);

        let mut best = best.to_vec();
        best.sort_by_key(|c| std::cmp::Reverse(c.rank()));
        assert_eq!(best, cards("Ks Jh 9c 7d 4h"));
    }

    #[test]
    fn six_and_seven_cards() {
        // Flush on the board beats the pair in hand.
        let r = evaluate(&cards("Ac As"), &cards("2h 5h 9h Jh Kh")).unwrap();
        assert_eq!(r.class(), RankClass::Flush);

        // Straight using both hole cards.
        let r = evaluate(&cards("6c 7d"), &cards("8h 9s Tc")).unwrap();
        assert_eq!(r.class(), RankClass::Straight);

        // Two trips make a full house.
        let r = evaluate(&cards("Kc Kd"), &cards("Kh 4c 4d 4h 9s")).unwrap();
        assert_eq!(r, rank_of("Kc Kd Kh 4c 4d"));

        // Six cards with a wheel.
        let r = evaluate(&cards("Ac 2d"), &cards("3h 4s 5c Kd")).unwrap();
        assert_eq!(r.value(), RankClass::Straight.max_rank());
    }

    #[test]
    fn best_hand_matches_rank() {
        let (rank, best) = evaluate_with_best_hand(&cards("Th 4c"), &cards("Jh Qh Kh Ah 4d")).unwrap();
        assert_eq!(rank, HandRank::BEST);
        assert_eq!(HandRank::eval(&best).unwrap(), rank);

        let mut deck = Deck::default();
        deck.remove(cards("2c")[0]);
        deck.sample(200, 7, |hand| {
            let (rank, best) = evaluate_with_best_hand(&hand[..2], &hand[2..]).unwrap();
            assert_eq!(HandRank::eval(&best).unwrap(), rank);
            assert!(best.iter().all(|c| hand.contains(c)));
        });
    }

    #[test]
    fn min_over_subsets() {
        let deck = Deck::default();

        deck.sample(500, 7, |hand| {
            assert_eq!(HandRank::eval(hand).unwrap(), min_subset_rank(hand));
            assert_eq!(HandRank::eval(&hand[..6]).unwrap(), min_subset_rank(&hand[..6]));
        });
    }

    #[test]
    fn invalid_hands() {
        let hand = cards("Ac Kd Qh Js Tc 9d 8h 7s");

        assert_eq!(
            evaluate(&hand[..2], &hand[2..4]),
            Err(EvalError::InvalidHandSize(4))
        );
        assert_eq!(
            evaluate(&hand[..2], &hand[2..]),
            Err(EvalError::InvalidHandSize(8))
        );
        assert_eq!(HandRank::eval(&[]), Err(EvalError::InvalidHandSize(0)));

        let ah = cards("Ah")[0];
        assert_eq!(
            evaluate(&cards("Ah Kh"), &cards("Qh Jh Ah")),
            Err(EvalError::DuplicateCard(ah))
        );
        assert_eq!(
            evaluate_with_best_hand(&cards("Ah Ah"), &cards("2c 3c 4c")),
            Err(EvalError::DuplicateCard(ah))
        );
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; RankClass::COUNT];
        let mut ranks = HashSet::default();
        let mut royal_flushes = 0;

        Deck::default().for_each(5, |hand| {
            let rank = HandRank::eval(hand).unwrap();
            assert!((1..=HandRank::COUNT).contains(&rank.value()));

            counts[rank.class() as usize] += 1;
            ranks.insert(rank);

            if rank == HandRank::BEST {
                royal_flushes += 1;
            }
        });

        assert_eq!(
            counts,
            [40, 624, 3744, 5108, 10200, 54912, 123552, 1098240, 1302540]
        );
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
        assert_eq!(ranks.len(), HandRank::COUNT as usize);
        assert_eq!(royal_flushes, 4);
    }

    #[test]
    fn concurrent_first_use() {
        let hand = cards("Ac Ad Kc Kd Qh 2s 7h");

        let results = thread::scope(|s| {
            let handles = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        let table = LookupTable::global();
                        (table as *const LookupTable as usize, table.eval(&hand))
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert!(results.iter().all(|r| *r == results[0]));

        let rank = results[0].1.clone().unwrap();
        assert_eq!(rank.class(), RankClass::TwoPair);
    }

    #[test]
    fn owned_table() {
        let table = LookupTable::build();
        let hole = cards("9s 9d");
        let board = cards("9h 9c 2d Kc");
        assert_eq!(
            table.evaluate(&hole, &board).unwrap(),
            evaluate(&hole, &board).unwrap()
        );
    }
}
