use super::category::Category;
use crate::cards::Card;
use crate::cards::Rank;
use std::cmp::Ordering;

/// A fully-evaluated hand strength for comparison.
///
/// A [`Category`] plus up to five tiebreak ranks in descending significance.
/// How many tiebreaks are meaningful is fixed by the category, and unused
/// slots always hold the default rank, so two values of one category carry
/// sequences of equal length.
///
/// Ordering is defined explicitly rather than derived: category first,
/// then tiebreaks left to right. Equal values are a tie at showdown.
#[derive(Debug, Clone, Copy)]
pub struct Value {
    category: Category,
    tiebreaks: [Rank; 5],
}

impl Value {
    pub fn category(&self) -> Category {
        self.category
    }
    /// The meaningful tiebreak ranks, most significant first.
    pub fn tiebreaks(&self) -> &[Rank] {
        &self.tiebreaks[..self.category.n_tiebreaks()]
    }
}

impl From<(Category, &[Rank])> for Value {
    fn from((category, ranks): (Category, &[Rank])) -> Self {
        assert!(ranks.len() == category.n_tiebreaks());
        let mut tiebreaks = [Rank::default(); 5];
        tiebreaks[..ranks.len()].copy_from_slice(ranks);
        Self {
            category,
            tiebreaks,
        }
    }
}

/// evaluate exactly five cards
impl From<[Card; 5]> for Value {
    fn from(cards: [Card; 5]) -> Self {
        super::evaluator::Evaluator::from(cards).find_value()
    }
}

/// best five of seven cards
impl From<[Card; 7]> for Value {
    fn from(cards: [Card; 7]) -> Self {
        super::selector::best(&cards)
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.category.cmp(&other.category) {
            Ordering::Equal => self
                .tiebreaks()
                .iter()
                .zip(other.tiebreaks().iter())
                .map(|(a, b)| a.cmp(b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal),
            unequal => unequal,
        }
    }
}
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Value {}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}", self.category)?;
        for rank in self.tiebreaks() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
