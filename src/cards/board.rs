use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;

/// The five community cards of a complete deal.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Board([Card; 5]);

impl Board {
    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }
    /// Joins private cards with the board into a showdown hand.
    pub fn with(&self, hole: &Hole) -> [Card; 7] {
        let [a, b] = *hole.cards();
        let [c, d, e, f, g] = self.0;
        [a, b, c, d, e, f, g]
    }
}

impl From<[Card; 5]> for Board {
    fn from(cards: [Card; 5]) -> Self {
        assert!(Hand::from(cards.as_slice()).size() == 5, "board cards must differ");
        Self(cards)
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        Hand::from(board.0.as_slice())
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = <[Card; 5]>::try_from(Card::parse(s)?)
            .map_err(|_| String::from("board must contain exactly five cards"))?;
        match Hand::from(cards.as_slice()).size() {
            5 => Ok(Self(cards)),
            _ => Err(format!("board cards must differ: {}", s)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
