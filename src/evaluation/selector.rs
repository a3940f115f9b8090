use super::evaluator::Evaluator;
use super::subsets::Subsets;
use super::value::Value;
use crate::cards::Card;
use crate::cards::Hand;
use std::sync::LazyLock;

/// The 21 ways to pick five of seven card positions, generated once.
pub static SEVEN_CHOOSE_FIVE: LazyLock<Vec<[usize; 5]>> = LazyLock::new(|| {
    Subsets::from((7, 5))
        .map(Subsets::indices::<5>)
        .collect()
});

/// The strongest five-card [`Value`] among all subsets of seven cards.
///
/// Exhaustive over all 21 subsets; only the value is reported, not which
/// five cards made it. A duplicate among the seven cards is a defect.
pub fn best(cards: &[Card; 7]) -> Value {
    let hand = Hand::from(cards.as_slice());
    assert!(hand.size() == 7, "duplicate card among {}", hand);
    SEVEN_CHOOSE_FIVE
        .iter()
        .map(|subset| subset.map(|i| cards[i]))
        .map(Evaluator::from)
        .map(|e| e.find_value())
        .max()
        .expect("seven cards have 21 five-card subsets")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::evaluation::Category;

    fn best_of(s: &str) -> Value {
        let cards = <[Card; 7]>::try_from(Card::parse(s).unwrap()).unwrap();
        best(&cards)
    }

    #[test]
    fn twenty_one_distinct_subsets() {
        let subsets = SEVEN_CHOOSE_FIVE.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(subsets.len(), 21);
        assert!(SEVEN_CHOOSE_FIVE.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
        assert!(SEVEN_CHOOSE_FIVE.iter().all(|s| s.iter().all(|i| *i < 7)));
    }

    #[test]
    fn straight_flush_regardless_of_extras() {
        for extras in ["Ah Ad", "2c 2d", "9d Ts", "Kd Kh"] {
            let value = best_of(&format!("5s 6s 7s 8s 9s {}", extras));
            assert_eq!(value.category(), Category::StraightFlush);
            assert_eq!(value.tiebreaks(), [Rank::Nine]);
        }
    }

    #[test]
    fn flush_over_straight() {
        let value = best_of("4h 6h 7h 8h 9h Ts 2c");
        assert_eq!(value.category(), Category::Flush);
        assert_eq!(value.tiebreaks()[0], Rank::Nine);
    }

    #[test]
    fn full_house_from_two_trips() {
        let value = best_of("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(value.category(), Category::FullHouse);
        assert_eq!(value.tiebreaks(), [Rank::Ace, Rank::King]);
    }

    #[test]
    fn best_two_of_three_pairs() {
        let value = best_of("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(value.category(), Category::TwoPair);
        assert_eq!(value.tiebreaks(), [Rank::Ace, Rank::King, Rank::Queen]);
    }

    #[test]
    fn highest_straight_wins() {
        let value = best_of("As 2s 3h 4d 5c 6s 7d");
        assert_eq!(value.category(), Category::Straight);
        assert_eq!(value.tiebreaks(), [Rank::Seven]);
    }

    #[test]
    fn order_independent() {
        assert_eq!(
            best_of("As Ah Kd Kc Qs Jh 9d"),
            best_of("9d Jh Qs Kc Kd Ah As"),
        );
    }

    #[test]
    fn value_from_seven_cards() {
        let cards = <[Card; 7]>::try_from(Card::parse("Ts Js Qs Ks As Ah Ad").unwrap()).unwrap();
        assert_eq!(Value::from(cards).category(), Category::StraightFlush);
    }

    #[test]
    #[should_panic]
    fn duplicates_are_defects() {
        best_of("As As Kd Kc Qs Jh 9d");
    }
}
