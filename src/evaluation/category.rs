/// A poker hand's class, weakest to strongest.
///
/// Discriminants are the conventional category numbers `1..=9`, and the
/// derived ordering follows them: any straight flush beats any four of a
/// kind, which beats any full house, and so on down to high card.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOAK = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOAK = 8,
    StraightFlush = 9,
}

impl Category {
    /// How many ranks it takes to break ties within this category.
    pub const fn n_tiebreaks(&self) -> usize {
        match self {
            Self::HighCard | Self::Flush => 5,
            Self::OnePair => 4,
            Self::TwoPair | Self::ThreeOAK => 3,
            Self::FullHouse | Self::FourOAK => 2,
            Self::Straight | Self::StraightFlush => 1,
        }
    }
}

impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c as u8
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard => write!(f, "HighCard"),
            Self::OnePair => write!(f, "OnePair"),
            Self::TwoPair => write!(f, "TwoPair"),
            Self::ThreeOAK => write!(f, "ThreeOfAKind"),
            Self::Straight => write!(f, "Straight"),
            Self::Flush => write!(f, "Flush"),
            Self::FullHouse => write!(f, "FullHouse"),
            Self::FourOAK => write!(f, "FourOfAKind"),
            Self::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
