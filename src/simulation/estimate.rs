use crate::Count;
use crate::Probability;
use std::cmp::Ordering;

/// Win, tie, and loss counts over a number of trials.
///
/// Estimates combine by field-wise sum, which is associative and commutative
/// with the default (empty) estimate as identity. Shards of a run can
/// therefore be tallied independently and reduced in any order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Estimate {
    wins: Count,
    ties: Count,
    losses: Count,
}

impl Estimate {
    pub fn wins(&self) -> Count {
        self.wins
    }
    pub fn ties(&self) -> Count {
        self.ties
    }
    pub fn losses(&self) -> Count {
        self.losses
    }
    pub fn trials(&self) -> Count {
        self.wins + self.ties + self.losses
    }
    /// (wins + ties / 2) / trials. With no trials there is no information,
    /// and the estimate is a coin flip.
    pub fn equity(&self) -> Probability {
        match self.trials() {
            0 => 0.5,
            n => (self.wins as Probability + 0.5 * self.ties as Probability) / n as Probability,
        }
    }
}

/// hero's showdown value compared against villain's
impl From<Ordering> for Estimate {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Self::from((1, 0, 0)),
            Ordering::Equal => Self::from((0, 1, 0)),
            Ordering::Less => Self::from((0, 0, 1)),
        }
    }
}

/// a made draw is a win, a miss a loss
impl From<bool> for Estimate {
    fn from(hit: bool) -> Self {
        match hit {
            true => Self::from((1, 0, 0)),
            false => Self::from((0, 0, 1)),
        }
    }
}

impl From<(Count, Count, Count)> for Estimate {
    fn from((wins, ties, losses): (Count, Count, Count)) -> Self {
        Self { wins, ties, losses }
    }
}

impl std::ops::Add for Estimate {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}
impl std::ops::AddAssign for Estimate {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl std::iter::Sum for Estimate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), std::ops::Add::add)
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:.4} (W {} / T {} / L {})",
            self.equity(),
            self.wins,
            self.ties,
            self.losses
        )
    }
}
