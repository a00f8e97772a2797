use crate::cards::{parse_cards, Card};
use std::str::FromStr;

pub const BOARD_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private cards.
///
/// Duplicates are not rejected: with a multi-set deck both cards may be the
/// same rank and suit.
///
/// ```
/// use headsup_holdem::cards::{Card, Rank, Suit};
/// use headsup_holdem::hand::HoleCards;
///
/// let hole = HoleCards::new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// );
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub const fn new(a: Card, b: Card) -> Self {
        Self(a, b)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Ok(Self(*a, *b)),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards, revealed flop (3), turn (+1), river (+1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(BOARD_SIZE) }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > BOARD_SIZE {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == BOARD_SIZE
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// All five cards, once the river is out.
    pub fn full(&self) -> Option<[Card; BOARD_SIZE]> {
        self.cards.as_slice().try_into().ok()
    }

    pub(crate) fn extend<I>(&mut self, cards: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let before = self.cards.len();
        self.cards.extend(cards);
        if self.cards.len() > BOARD_SIZE {
            let len = self.cards.len();
            self.cards.truncate(before);
            return Err(HandError::TooManyBoardCards(len));
        }
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Hole cards followed by a complete board, the input the evaluator expects.
pub fn seven_cards(hole: &HoleCards, board: &[Card; BOARD_SIZE]) -> [Card; 7] {
    [hole.first(), hole.second(), board[0], board[1], board[2], board[3], board[4]]
}
