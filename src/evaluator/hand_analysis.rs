use super::rank_groups::RankGroups;
use crate::cards::{Card, Rank};
use crate::evaluator::{Evaluation, HandCategory, HandValue};

/// Pre-computed facts about a 5-card hand, shared by every category test.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Rank descending, then suit descending.
    pub sorted_cards: [Card; 5],
    /// Ranks of `sorted_cards`, highest first.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub is_flush: bool,
    /// Highest card of a straight; Five for the wheel. `None` when not a straight.
    pub straight_top: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));
        let ranks = sorted_cards.map(|c| c.rank());
        let rank_groups = RankGroups::from_ranks(&ranks);
        let is_flush = sorted_cards.iter().all(|c| c.suit() == sorted_cards[0].suit());
        let straight_top = straight_top(&ranks);
        Self { sorted_cards, ranks, rank_groups, is_flush, straight_top }
    }

    pub fn is_straight(&self) -> bool {
        self.straight_top.is_some()
    }

    /// Build an Evaluation for `category`, assuming this hand satisfies it.
    pub fn build_evaluation(&self, category: HandCategory) -> Evaluation {
        let tiebreak = self.tiebreak(category);
        Evaluation {
            category,
            best_five: self.sorted_cards,
            value: HandValue::from_parts(category, &tiebreak),
            high_card: self.ranks[0],
        }
    }

    /// Ranks that order two hands of the same category, most significant first.
    fn tiebreak(&self, category: HandCategory) -> [Rank; 5] {
        let g = &self.rank_groups;
        let ordered: Vec<Rank> = match category {
            HandCategory::RoyalFlush | HandCategory::StraightFlush | HandCategory::Straight => {
                self.straight_top.into_iter().collect()
            }
            HandCategory::FourOfAKind => g.quad().into_iter().chain(g.kickers()).collect(),
            HandCategory::FullHouse => g.trips().into_iter().chain(g.pairs()).collect(),
            HandCategory::ThreeOfAKind => g.trips().into_iter().chain(g.kickers()).collect(),
            HandCategory::TwoPair | HandCategory::OnePair => {
                g.pairs().into_iter().chain(g.kickers()).collect()
            }
            HandCategory::Flush | HandCategory::HighCardOnly => self.ranks.to_vec(),
        };
        let mut out = [Rank::Two; 5];
        for (slot, r) in out.iter_mut().zip(ordered) {
            *slot = r;
        }
        out
    }
}

fn straight_top(ranks_desc: &[Rank; 5]) -> Option<Rank> {
    let consecutive = ranks_desc.windows(2).all(|w| w[0].value() == w[1].value() + 1);
    if consecutive {
        return Some(ranks_desc[0]);
    }
    if *ranks_desc == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
        return Some(Rank::Five);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        let cards: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
        HandAnalysis::new(&cards)
    }

    #[test]
    fn royal_analysis() {
        let a = analyze("As Ks Qs Js Ts");
        assert!(a.is_flush);
        assert_eq!(a.straight_top, Some(Rank::Ace));
    }

    #[test]
    fn wheel_tops_at_five() {
        let a = analyze("Ac 2d 3h 4s 5c");
        assert!(!a.is_flush);
        assert_eq!(a.straight_top, Some(Rank::Five));
        assert_eq!(a.ranks[0], Rank::Ace, "ranks stay in plain descending order");
    }

    #[test]
    fn paired_ranks_are_never_straight() {
        assert!(!analyze("5c 5d 6h 7s 8c").is_straight());
        assert!(!analyze("Ac Kd Qh Js 9c").is_straight());
    }

    #[test]
    fn two_pair_tiebreak_is_high_pair_low_pair_kicker() {
        let a = analyze("9c 9d Kh Ks 2c");
        let e = a.build_evaluation(HandCategory::TwoPair);
        let expected =
            HandValue::from_parts(HandCategory::TwoPair, &[Rank::King, Rank::Nine, Rank::Two, Rank::Two, Rank::Two]);
        assert_eq!(e.value(), expected);
    }
}
