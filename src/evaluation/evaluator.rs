use super::category::Category;
use super::value::Value;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;

const WHEEL: u16 = 0b_1000000001111;
const WHEEL_HIGH: Rank = Rank::Five;

/// A five-card hand evaluator.
///
/// Construction does the frequency analysis once: ranks sorted descending,
/// rank groups sorted by (count desc, rank desc), and the flush and straight
/// tests. The `find_*` searches then run from the strongest category down,
/// and the first one that matches decides the [`Value`].
pub struct Evaluator {
    ranks: [Rank; 5],
    groups: [(u8, Rank); 5],
    n_groups: usize,
    flush: bool,
    straight: Option<Rank>,
}

impl From<[Card; 5]> for Evaluator {
    fn from(cards: [Card; 5]) -> Self {
        let hand = Hand::from(cards.as_slice());
        assert!(hand.size() == 5, "duplicate card among {}", hand);
        let mut ranks = cards.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let mut counts = [0u8; 13];
        ranks.iter().for_each(|r| counts[u8::from(*r) as usize] += 1);
        let mut groups = [(0u8, Rank::default()); 5];
        let mut n_groups = 0;
        for rank in Rank::descending() {
            if counts[u8::from(rank) as usize] > 0 {
                groups[n_groups] = (counts[u8::from(rank) as usize], rank);
                n_groups += 1;
            }
        }
        groups[..n_groups].sort_by(|(n1, r1), (n2, r2)| n2.cmp(n1).then(r2.cmp(r1)));
        let flush = Suit::all().iter().any(|suit| hand.of(suit).size() == 5);
        let straight = Self::find_rank_of_straight(u16::from(hand));
        Self {
            ranks,
            groups,
            n_groups,
            flush,
            straight,
        }
    }
}

impl Evaluator {
    pub fn find_value(&self) -> Value {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }

    fn find_straight_flush(&self) -> Option<Value> {
        self.straight
            .filter(|_| self.flush)
            .map(|high| Value::from((Category::StraightFlush, [high].as_slice())))
    }
    fn find_4_oak(&self) -> Option<Value> {
        match self.groups() {
            [(4, quad), (1, kick)] => Some(Value::from((Category::FourOAK, [*quad, *kick].as_slice()))),
            _ => None,
        }
    }
    fn find_3_oak_2_oak(&self) -> Option<Value> {
        match self.groups() {
            [(3, trip), (2, pair)] => Some(Value::from((Category::FullHouse, [*trip, *pair].as_slice()))),
            _ => None,
        }
    }
    fn find_flush(&self) -> Option<Value> {
        Some(self.ranks)
            .filter(|_| self.flush)
            .map(|ranks| Value::from((Category::Flush, ranks.as_slice())))
    }
    fn find_straight(&self) -> Option<Value> {
        self.straight
            .map(|high| Value::from((Category::Straight, [high].as_slice())))
    }
    fn find_3_oak(&self) -> Option<Value> {
        match self.groups() {
            [(3, trip), (1, hi), (1, lo)] => Some(Value::from((Category::ThreeOAK, [*trip, *hi, *lo].as_slice()))),
            _ => None,
        }
    }
    fn find_2_oak_2_oak(&self) -> Option<Value> {
        match self.groups() {
            [(2, hi), (2, lo), (1, kick)] => Some(Value::from((Category::TwoPair, [*hi, *lo, *kick].as_slice()))),
            _ => None,
        }
    }
    fn find_2_oak(&self) -> Option<Value> {
        match self.groups() {
            [(2, pair), (1, a), (1, b), (1, c)] => Some(Value::from((Category::OnePair, [*pair, *a, *b, *c].as_slice()))),
            _ => None,
        }
    }
    fn find_1_oak(&self) -> Value {
        Value::from((Category::HighCard, self.ranks.as_slice()))
    }

    fn groups(&self) -> &[(u8, Rank)] {
        &self.groups[..self.n_groups]
    }
    /// High card of the best straight in a rank mask, wheel included.
    pub fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(WHEEL_HIGH)
        } else {
            None
        }
    }
}
