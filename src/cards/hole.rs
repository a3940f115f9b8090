use super::card::Card;
use super::hand::Hand;

/// A player's two private hole cards.
///
/// Keeps the cards in dealing order so that a hole can be joined with a
/// [`Board`] into the seven cards the best-hand selection runs over.
/// The two cards are always distinct.
///
/// [`Board`]: super::board::Board
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "hole cards must differ: {}{}", a, b);
        Self([a, b])
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::from(hole.0.as_slice())
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] if a != b => Ok(Self([*a, *b])),
            [_, _] => Err(format!("hole cards must differ: {}", s)),
            _ => Err("hole must contain exactly two cards".into()),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hole() {
        let hole = Hole::try_from("As Kd").unwrap();
        assert_eq!(hole.to_string(), "AsKd");
        assert_eq!(Hand::from(hole).size(), 2);
    }

    #[test]
    fn reject_pairs_of_one_card() {
        assert!(Hole::try_from("As As").is_err());
        assert!(Hole::try_from("As Kd Qh").is_err());
    }
}
