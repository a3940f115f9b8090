use super::board::Board;
use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;
use rand::seq::SliceRandom;

/// A mutable deck of cards for dealing.
///
/// Built from the 52-card universe minus an exclusion [`Hand`], so it never
/// holds a duplicate or an excluded card. Shuffling is a full uniform
/// permutation; dealing then takes cards off the top, which removes them
/// from further availability. The top of the deck is the back of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh, ordered 52-card deck.
    pub fn new() -> Self {
        Self::from(Hand::full())
    }
    /// Creates an ordered deck of every card not in `dead`.
    pub fn excluding(dead: Hand) -> Self {
        Self::from(dead.complement())
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Cards remaining.
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// Uniformly permutes the remaining cards (Fisher–Yates).
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.0.shuffle(rng);
    }
    /// Removes and returns the top card.
    /// Drawing from an empty deck is a defect, not a recoverable error.
    pub fn draw(&mut self) -> Card {
        self.0.pop().expect("deck exhausted")
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }
    /// Deals five community cards.
    pub fn board(&mut self) -> Board {
        Board::from(std::array::from_fn(|_| self.draw()))
    }
}

impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(Vec::<Card>::from(hand))
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        Hand::from(deck.0.as_slice())
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        let mut deck = Deck::new();
        deck.shuffle(&mut rand::rng());
        deck.hole()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn excludes_dead_cards() {
        let dead = Hand::try_from("As Ah").unwrap();
        let deck = Deck::excluding(dead);
        assert_eq!(deck.size(), 50);
        assert!(!deck.contains(&Card::try_from("As").unwrap()));
        assert!(!deck.contains(&Card::try_from("Ah").unwrap()));
        assert!(deck.contains(&Card::try_from("Ad").unwrap()));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::new();
        deck.shuffle(rng);
        assert_ne!(deck, Deck::new());
        assert_eq!(Hand::from(deck), Hand::full());
    }

    #[test]
    fn dealing_consumes_cards() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let mut deck = Deck::new();
        deck.shuffle(rng);
        let hole = deck.hole();
        let board = deck.board();
        assert_eq!(deck.size(), 45);
        assert!(Hand::from(hole).disjoint(&Hand::from(board)));
        assert!(Hand::from(deck.clone()).disjoint(&Hand::from(hole)));
        assert!(Hand::from(deck).disjoint(&Hand::from(board)));
    }

    #[test]
    #[should_panic(expected = "deck exhausted")]
    fn exhaustion_is_a_defect() {
        let mut deck = Deck::excluding(Hand::full());
        deck.draw();
    }

    #[test]
    fn random_holes_are_distinct() {
        (0..64).map(|_| Hole::random()).for_each(|hole| {
            assert_eq!(Hand::from(hole).size(), 2);
        });
    }
}
