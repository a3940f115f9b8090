/// One of the four suits.
///
/// Only flushes care about suits, so a suit is mostly a filter: its `u64`
/// mask selects every card of that suit from a [`Hand`] bitset. Card
/// encoding interleaves suits within each rank, which is why each mask is
/// one bit repeated every four.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n % 4 {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            _ => Suit::S,
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// the thirteen card bits of this suit
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        const CLUBS: u64 = 0x0001111111111111;
        CLUBS << u8::from(s)
    }
}

impl TryFrom<char> for Suit {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::C),
            'd' | '♦' => Ok(Suit::D),
            'h' | '♥' => Ok(Suit::H),
            's' | '♠' => Ok(Suit::S),
            _ => Err(format!("invalid suit char: {}", c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let c = match self {
            Suit::C => 'c',
            Suit::D => 'd',
            Suit::H => 'h',
            Suit::S => 's',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_partition_the_deck() {
        let masks = Suit::all().map(u64::from);
        assert_eq!(masks.iter().fold(0, |a, m| a | m), 0x000FFFFFFFFFFFFF);
        assert!(masks.iter().all(|m| m.count_ones() == 13));
        assert_eq!(masks[3], 0b1000100010001000100010001000100010001000100010001000);
    }

    #[test]
    fn parse_chars() {
        assert_eq!(Suit::try_from('♠'), Ok(Suit::S));
        assert_eq!(Suit::try_from('H'), Ok(Suit::H));
        assert!(Suit::try_from('x').is_err());
        assert_eq!(Suit::from(u8::from(Suit::D)), Suit::D);
    }
}
