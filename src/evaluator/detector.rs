use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::HandCategory;

/// A category and the predicate a five-card hand must satisfy to make it.
#[derive(Clone, Copy)]
pub struct CategoryTest {
    pub category: HandCategory,
    pub matches: fn(&HandAnalysis) -> bool,
}

/// Category tests in strength order. The first test any five-card subset
/// passes names the hand; HighCardOnly always passes.
pub const CATEGORY_TESTS: [CategoryTest; 10] = [
    CategoryTest { category: HandCategory::RoyalFlush, matches: is_royal_flush },
    CategoryTest { category: HandCategory::StraightFlush, matches: is_straight_flush },
    CategoryTest { category: HandCategory::FourOfAKind, matches: is_four_of_a_kind },
    CategoryTest { category: HandCategory::FullHouse, matches: is_full_house },
    CategoryTest { category: HandCategory::Flush, matches: is_flush },
    CategoryTest { category: HandCategory::Straight, matches: is_straight },
    CategoryTest { category: HandCategory::ThreeOfAKind, matches: is_three_of_a_kind },
    CategoryTest { category: HandCategory::TwoPair, matches: is_two_pair },
    CategoryTest { category: HandCategory::OnePair, matches: is_one_pair },
    CategoryTest { category: HandCategory::HighCardOnly, matches: is_high_card_only },
];

fn is_royal_flush(a: &HandAnalysis) -> bool {
    // Ace-topped straights are exactly T-J-Q-K-A; the wheel tops at Five.
    a.is_flush && a.straight_top == Some(Rank::Ace)
}

fn is_straight_flush(a: &HandAnalysis) -> bool {
    a.is_flush && a.is_straight()
}

fn is_four_of_a_kind(a: &HandAnalysis) -> bool {
    a.rank_groups.has_count(4)
}

fn is_full_house(a: &HandAnalysis) -> bool {
    a.rank_groups.has_count(3) && a.rank_groups.has_count(2)
}

fn is_flush(a: &HandAnalysis) -> bool {
    a.is_flush
}

fn is_straight(a: &HandAnalysis) -> bool {
    a.is_straight()
}

fn is_three_of_a_kind(a: &HandAnalysis) -> bool {
    a.rank_groups.has_count(3)
}

fn is_two_pair(a: &HandAnalysis) -> bool {
    a.rank_groups.ranks_with_count(2) == 2
}

fn is_one_pair(a: &HandAnalysis) -> bool {
    a.rank_groups.has_count(2)
}

fn is_high_card_only(_: &HandAnalysis) -> bool {
    true
}

/// Strongest category a single five-card hand satisfies.
pub fn classify(a: &HandAnalysis) -> HandCategory {
    CATEGORY_TESTS
        .iter()
        .find(|t| (t.matches)(a))
        .map(|t| t.category)
        .unwrap_or(HandCategory::HighCardOnly)
}
