use super::card::Card;
use super::hole::Hole;
use super::rank::Rank;
use super::suit::Suit;

/// Whether a starting hand's two cards pair up or share a suit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Style {
    Pair,
    Offsuit,
    Suited,
}

/// One of the 169 strategically distinct starting-hand classes,
/// written in shorthand as `AA`, `AKo`, or `AKs`.
///
/// The high rank is always stored first, so `KAo` and `AKo` are the same
/// class. Which concrete suits a class is dealt with carries no meaning
/// beyond the pattern: pairs and offsuit hands get two different suits,
/// suited hands get one.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Starting {
    hi: Rank,
    lo: Rank,
    style: Style,
}

impl Starting {
    pub fn hi(&self) -> Rank {
        self.hi
    }
    pub fn lo(&self) -> Rank {
        self.lo
    }
    pub fn style(&self) -> Style {
        self.style
    }
    /// A concrete pair of cards representing this class.
    pub fn hole(&self) -> Hole {
        match self.style {
            Style::Suited => Hole::from((
                Card::from((self.hi, Suit::H)),
                Card::from((self.lo, Suit::H)),
            )),
            Style::Pair | Style::Offsuit => Hole::from((
                Card::from((self.hi, Suit::H)),
                Card::from((self.lo, Suit::D)),
            )),
        }
    }
    /// Every class whose high card is `top`: the pair, then for each lower
    /// rank the offsuit and suited forms. Thirteen such groups partition
    /// the 169 classes.
    pub fn group(top: Rank) -> Vec<Self> {
        std::iter::once(Self::from((top, top, Style::Pair)))
            .chain(
                Rank::descending()
                    .into_iter()
                    .filter(|lo| *lo < top)
                    .flat_map(|lo| [Style::Offsuit, Style::Suited].map(|s| (top, lo, s)))
                    .map(Self::from),
            )
            .collect()
    }
    /// All 169 classes, grouped by high card from aces down to deuces.
    pub fn all() -> Vec<Self> {
        Rank::descending().into_iter().flat_map(Self::group).collect()
    }
}

impl From<(Rank, Rank, Style)> for Starting {
    fn from((a, b, style): (Rank, Rank, Style)) -> Self {
        assert!((a == b) == (style == Style::Pair), "pairs and only pairs have equal ranks");
        Self {
            hi: a.max(b),
            lo: a.min(b),
            style,
        }
    }
}

/// shorthand isomorphism
impl TryFrom<&str> for Starting {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let chars = s.chars().collect::<Vec<char>>();
        let (a, b, style) = match chars.as_slice() {
            [a, b] => (a, b, None),
            [a, b, c] => (a, b, Some(c)),
            _ => return Err(anyhow::anyhow!("hand must be 2 or 3 characters: {:?}", s)),
        };
        let a = Rank::try_from(*a).map_err(|e| anyhow::anyhow!(e))?;
        let b = Rank::try_from(*b).map_err(|e| anyhow::anyhow!(e))?;
        let style = match (a == b, style.map(|c| c.to_ascii_lowercase())) {
            (true, None) => Style::Pair,
            (false, Some('o')) => Style::Offsuit,
            (false, Some('s')) => Style::Suited,
            (true, Some(_)) => return Err(anyhow::anyhow!("pairs take no style: {:?}", s)),
            (false, None) => return Err(anyhow::anyhow!("missing style 's' or 'o': {:?}", s)),
            (false, Some(c)) => return Err(anyhow::anyhow!("invalid style char: {}", c)),
        };
        Ok(Self::from((a, b, style)))
    }
}

impl std::str::FromStr for Starting {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// serialized as its shorthand
impl serde::Serialize for Starting {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for Starting {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.style {
            Style::Pair => write!(f, "{}{}", self.hi, self.lo),
            Style::Offsuit => write!(f, "{}{}o", self.hi, self.lo),
            Style::Suited => write!(f, "{}{}s", self.hi, self.lo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use std::collections::HashSet;

    #[test]
    fn pocket_pair() {
        let hand = Starting::try_from("AA").unwrap();
        let [a, b] = *hand.hole().cards();
        assert_eq!(hand.style(), Style::Pair);
        assert_eq!(a.rank(), Rank::Ace);
        assert_eq!(b.rank(), Rank::Ace);
        assert_ne!(a.suit(), b.suit());
    }

    #[test]
    fn offsuit() {
        let [a, b] = *Starting::try_from("AKo").unwrap().hole().cards();
        assert_eq!((a.rank(), b.rank()), (Rank::Ace, Rank::King));
        assert_ne!(a.suit(), b.suit());
    }

    #[test]
    fn suited() {
        let [a, b] = *Starting::try_from("AKs").unwrap().hole().cards();
        assert_eq!((a.rank(), b.rank()), (Rank::Ace, Rank::King));
        assert_eq!(a.suit(), b.suit());
    }

    #[test]
    fn normalized_order() {
        let hand = Starting::try_from("kaS").unwrap();
        assert_eq!(hand.to_string(), "AKs");
        assert_eq!(hand, Starting::try_from("AKs").unwrap());
    }

    #[test]
    fn malformed() {
        assert!(Starting::try_from("").is_err());
        assert!(Starting::try_from("A").is_err());
        assert!(Starting::try_from("AKsx").is_err());
        assert!(Starting::try_from("AX").is_err());
        assert!(Starting::try_from("AKx").is_err());
        assert!(Starting::try_from("AK").is_err());
        assert!(Starting::try_from("AAs").is_err());
        assert!(Starting::try_from("1Ko").is_err());
    }

    #[test]
    fn canonical_list() {
        let all = Starting::all();
        assert_eq!(all.len(), 169);
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), 169);
        assert_eq!(all.iter().filter(|h| h.style() == Style::Pair).count(), 13);
        assert_eq!(all.iter().filter(|h| h.style() == Style::Suited).count(), 78);
        assert_eq!(all.first().map(|h| h.to_string()), Some("AA".into()));
        assert_eq!(all.last().map(|h| h.to_string()), Some("22".into()));
    }

    #[test]
    fn ace_group() {
        let aces = Starting::group(Rank::Ace);
        assert_eq!(aces.len(), 25);
        assert_eq!(
            aces.iter().take(5).map(|h| h.to_string()).collect::<Vec<_>>(),
            vec!["AA", "AKo", "AKs", "AQo", "AQs"]
        );
        assert!(aces.iter().all(|h| Hand::from(h.hole()).size() == 2));
    }
}
