pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;

use crate::cards::{Card, Rank};
use crate::hand::{seven_cards, Board, HoleCards};
use core::cmp::Ordering;
use core::fmt;
use hand_analysis::HandAnalysis;

/// Poker hand categories, strongest first. `ordinal() == 0` is the best hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HandCategory {
    RoyalFlush = 0,
    StraightFlush = 1,
    FourOfAKind = 2,
    FullHouse = 3,
    Flush = 4,
    Straight = 5,
    ThreeOfAKind = 6,
    TwoPair = 7,
    OnePair = 8,
    HighCardOnly = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCardOnly,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Ascending strength: HighCardOnly is 0, RoyalFlush is 9.
    pub const fn strength(self) -> u8 {
        HandCategory::HighCardOnly.ordinal() - self.ordinal()
    }

    /// `Greater` when `self` is the stronger category.
    pub fn cmp_strength(self, other: HandCategory) -> Ordering {
        self.strength().cmp(&other.strength())
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pairs",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCardOnly => "No Pair",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compact, comparable hand strength. Higher is better.
/// Encodes category strength and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

impl HandValue {
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and five rank tiebreakers into a comparable value.
    pub fn from_parts(category: HandCategory, ranks_desc: &[Rank; 5]) -> Self {
        // [ strength (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category.strength() as u64) << CAT_SHIFT;
        for (i, r) in ranks_desc.iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u64) << offset;
        }
        HandValue(v)
    }
}

/// How two hands of the same category are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum TieBreak {
    /// Compare the winning five cards rank by rank (pair rank, then kickers).
    #[default]
    Kickers,
    /// Compare only the highest card among each side's seven cards.
    HighCard,
}

impl TieBreak {
    /// `Greater` when `a` wins, `Equal` on a push.
    pub fn compare(self, a: &Evaluation, b: &Evaluation) -> Ordering {
        match self {
            TieBreak::Kickers => a.cmp(b),
            TieBreak::HighCard => a
                .category
                .cmp_strength(b.category)
                .then_with(|| a.high_card.cmp(&b.high_card)),
        }
    }
}

/// Result of evaluating a hand. Ordering follows `value`.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: HandCategory,
    pub best_five: [Card; 5],
    value: HandValue,
    high_card: Rank,
}

impl Evaluation {
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Highest rank among every card that was evaluated, not only `best_five`.
    pub const fn high_card(&self) -> Rank {
        self.high_card
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("not enough board cards to evaluate: have {0}, need 5")]
    NotEnoughCards(usize),
}

/// Evaluate exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    let analysis = HandAnalysis::new(cards);
    analysis.build_evaluation(detector::classify(&analysis))
}

/// Evaluate seven cards: the category is the strongest any 5-card subset
/// makes, and among the subsets making it the one with the best kickers wins.
///
/// ```
/// use headsup_holdem::cards::parse_cards;
/// use headsup_holdem::evaluator::{evaluate, HandCategory};
///
/// let seven: [_; 7] = parse_cards("Ts Js Qs Ks As 2h 3d").unwrap().try_into().unwrap();
/// assert_eq!(evaluate(&seven).category, HandCategory::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card; 7]) -> Evaluation {
    let analyses: Vec<HandAnalysis> =
        combinations::five_of_seven(cards).map(|five| HandAnalysis::new(&five)).collect();
    let best = detector::CATEGORY_TESTS.iter().find_map(|test| {
        analyses
            .iter()
            .filter(|a| (test.matches)(a))
            .map(|a| a.build_evaluation(test.category))
            .max()
    });
    let mut eval = best
        .unwrap_or_else(|| evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]));
    eval.high_card = high_card(cards).unwrap_or(eval.high_card);
    eval
}

/// Evaluate hole cards against a complete board.
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    let full = board.full().ok_or(EvalError::NotEnoughCards(board.len()))?;
    Ok(evaluate(&seven_cards(hole, &full)))
}

/// Compare two players' hole cards on a shared complete board.
pub fn compare_holdem(
    a: &HoleCards,
    b: &HoleCards,
    board: &Board,
    tie_break: TieBreak,
) -> Result<Ordering, EvalError> {
    Ok(tie_break.compare(&evaluate_holdem(a, board)?, &evaluate_holdem(b, board)?))
}

/// Highest rank present, Ace high. `None` for no cards.
pub fn high_card(cards: &[Card]) -> Option<Rank> {
    cards.iter().map(|c| c.rank()).max()
}

/// Compare two seven-card hands under a tie-break policy. `Greater` means `a` wins.
pub fn compare(a: &[Card; 7], b: &[Card; 7], tie_break: TieBreak) -> Ordering {
    tie_break.compare(&evaluate(a), &evaluate(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn seven(s: &str) -> [Card; 7] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn strength_reverses_ordinal() {
        assert_eq!(HandCategory::RoyalFlush.strength(), 9);
        assert_eq!(HandCategory::HighCardOnly.strength(), 0);
        assert_eq!(HandCategory::Flush.cmp_strength(HandCategory::Straight), Ordering::Greater);
    }

    #[test]
    fn best_kickers_are_kept_within_the_category() {
        // Pair of nines; the best five keep A K Q as kickers.
        let e = evaluate(&seven("9c 9d Ah Ks Qc 3d 2h"));
        assert_eq!(e.category, HandCategory::OnePair);
        let ranks: Vec<Rank> = e.best_five.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Nine, Rank::Nine]);
    }

    #[test]
    fn higher_straight_is_chosen_over_wheel() {
        let e = evaluate(&seven("Ac 2d 3h 4s 5c 6d 9h"));
        assert_eq!(e.category, HandCategory::Straight);
        assert_eq!(e.best_five[0].rank(), Rank::Six);
    }

    #[test]
    fn three_pairs_count_as_two_pair() {
        let e = evaluate(&seven("Ac Ad Kh Ks Qc Qd 2h"));
        assert_eq!(e.category, HandCategory::TwoPair);
    }

    #[test]
    fn two_trips_make_a_full_house() {
        let e = evaluate(&seven("Ac Ad Ah Ks Kc Kd 2h"));
        assert_eq!(e.category, HandCategory::FullHouse);
    }

    #[test]
    fn kicker_policy_splits_hands_high_card_policy_cannot() {
        // Both pair the board's kings; A kicker beats Q kicker. Both hold an Ace-high seven.
        let a = seven("Ad 7c Kc 9d 4s 2h Ks");
        let b = seven("Qd 8c Kc 9d 4s 2h Ks");
        assert_eq!(compare(&a, &b, TieBreak::Kickers), Ordering::Greater);
        let c = seven("Ad 7c Kc 9d 4s 2h Ks");
        let d = seven("Ah 8c Kc 9d 4s 2h Ks");
        assert_eq!(compare(&c, &d, TieBreak::HighCard), Ordering::Equal);
        assert_eq!(compare(&c, &d, TieBreak::Kickers), Ordering::Less);
    }

    #[test]
    fn holdem_requires_full_board() {
        let hole: HoleCards = "As Ks".parse().unwrap();
        let board: Board = "2c 3d 4h".parse().unwrap();
        assert_eq!(evaluate_holdem(&hole, &board).unwrap_err(), EvalError::NotEnoughCards(3));
    }

    #[test]
    fn high_card_is_max_rank() {
        assert_eq!(high_card(&parse_cards("2c 9d 5h").unwrap()), Some(Rank::Nine));
        assert_eq!(high_card(&[]), None);
    }
}
