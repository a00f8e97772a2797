use crate::cards::Card;

/// Every way to pick 5 of 7 indices, in lexicographic order. C(7,5) = 21.
pub const SEVEN_CHOOSE_FIVE: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 5],
    [0, 1, 2, 4, 6],
    [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 5],
    [0, 1, 3, 4, 6],
    [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6],
    [0, 2, 3, 4, 5],
    [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6],
    [0, 2, 4, 5, 6],
    [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 5],
    [1, 2, 3, 4, 6],
    [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6],
    [1, 3, 4, 5, 6],
    [2, 3, 4, 5, 6],
];

/// The 21 five-card hands contained in seven cards.
pub fn five_of_seven(cards: &[Card; 7]) -> impl Iterator<Item = [Card; 5]> + '_ {
    SEVEN_CHOOSE_FIVE.iter().map(move |idx| idx.map(|i| cards[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_every_distinct_sorted_subset() {
        let unique: HashSet<[usize; 5]> = SEVEN_CHOOSE_FIVE.iter().copied().collect();
        assert_eq!(unique.len(), 21);
        for idx in SEVEN_CHOOSE_FIVE {
            assert!(idx.windows(2).all(|w| w[0] < w[1]));
            assert!(idx.iter().all(|&i| i < 7));
        }
    }

    #[test]
    fn each_card_is_left_out_of_exactly_six_subsets() {
        // Each subset omits two of the seven; each index is omitted in C(6,1) = 6 of them.
        for i in 0..7 {
            let omitted = SEVEN_CHOOSE_FIVE.iter().filter(|idx| !idx.contains(&i)).count();
            assert_eq!(omitted, 6);
        }
    }
}
