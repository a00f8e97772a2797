use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const CARDS_PER_SET: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("no cards left in the deck")]
    Empty,
    #[error("not enough cards in the deck: wanted {wanted}, have {have}")]
    NotEnoughCards { wanted: usize, have: usize },
}

/// One or more 52-card sets split into the undrawn pile and the drawn pile.
///
/// The top of the deck is the end of the undrawn pile. Drawn cards are kept
/// so a round can hand them back with [`Deck::return_all`].
#[derive(Debug, Clone)]
pub struct Deck {
    in_deck: Vec<Card>,
    out_of_deck: Vec<Card>,
    multiple: usize,
}

impl Deck {
    /// Build `multiple` full sets in rank-major, suit-minor order.
    ///
    /// ```
    /// use headsup_holdem::deck::Deck;
    ///
    /// let deck = Deck::new(2);
    /// assert_eq!(deck.count(), 104);
    /// assert_eq!(deck.drawn(), 0);
    /// ```
    pub fn new(multiple: usize) -> Self {
        let mut in_deck = Vec::with_capacity(multiple * CARDS_PER_SET);
        for _ in 0..multiple {
            for r in Rank::ALL {
                for s in Suit::ALL {
                    in_deck.push(Card::new(r, s));
                }
            }
        }
        Self { in_deck, out_of_deck: Vec::new(), multiple }
    }

    pub fn standard() -> Self {
        Self::new(1)
    }

    /// Cards still in the deck.
    pub fn count(&self) -> usize {
        self.in_deck.len()
    }

    /// Cards drawn since the last [`Deck::return_all`].
    pub fn drawn(&self) -> usize {
        self.out_of_deck.len()
    }

    pub fn multiple(&self) -> usize {
        self.multiple
    }

    /// Size of the full deck, drawn or not.
    pub fn total(&self) -> usize {
        self.multiple * CARDS_PER_SET
    }

    pub fn is_empty(&self) -> bool {
        self.in_deck.is_empty()
    }

    /// Undrawn cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.in_deck
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.in_deck.shuffle(&mut rng);
    }

    /// Shuffle the undrawn cards with the provided RNG. Drawn cards are untouched.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.in_deck.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.in_deck.pop().ok_or(DeckError::Empty)?;
        self.out_of_deck.push(card);
        Ok(card)
    }

    /// Draw `n` cards from the top, or none at all if fewer remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.in_deck.len() {
            return Err(DeckError::NotEnoughCards { wanted: n, have: self.in_deck.len() });
        }
        (0..n).map(|_| self.draw()).collect()
    }

    /// Put every drawn card back underneath the undrawn ones.
    pub fn return_all(&mut self) {
        let mut restored = std::mem::take(&mut self.out_of_deck);
        restored.append(&mut self.in_deck);
        self.in_deck = restored;
    }

    /// Put specific drawn cards back underneath the undrawn ones.
    ///
    /// Cards that are not currently drawn are ignored, so the deck never
    /// gains a card it did not deal. Returns how many were put back.
    pub fn return_cards(&mut self, cards: &[Card]) -> usize {
        let mut restored = Vec::with_capacity(cards.len());
        for card in cards {
            if let Some(pos) = self.out_of_deck.iter().position(|c| c == card) {
                restored.push(self.out_of_deck.remove(pos));
            }
        }
        let accepted = restored.len();
        restored.append(&mut self.in_deck);
        self.in_deck = restored;
        accepted
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
