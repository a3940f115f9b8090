use super::estimate::Estimate;
use super::trial::Trial;
use crate::cards::Hand;
use crate::cards::Suit;
use crate::evaluation::Evaluator;

/// What a sampled trial measures.
///
/// [`Target::Equity`] plays the hero against the opponent at showdown.
/// The draw targets ignore the opponent and score whether the hero's seven
/// cards (hole plus board) make the hand: any five consecutive ranks for
/// [`Target::Straight`], five of one suit the hole shares for
/// [`Target::Flush`]. A made draw tallies as a win and a miss as a loss, so
/// the estimate's equity is the hit rate.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Equity,
    Straight,
    Flush,
}

impl Target {
    pub fn score(&self, trial: &Trial) -> Estimate {
        match self {
            Self::Equity => Estimate::from(trial.outcome()),
            Self::Straight => Estimate::from(Self::straight(trial)),
            Self::Flush => Estimate::from(Self::flush(trial)),
        }
    }
    /// Lowercase name used for report files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Equity => "equity",
            Self::Straight => "straight",
            Self::Flush => "flush",
        }
    }
    /// Runs per hand when none are requested.
    pub fn runs(&self) -> usize {
        match self {
            Self::Equity => crate::RUNS_PER_HAND,
            Self::Straight | Self::Flush => crate::DRAW_RUNS_PER_HAND,
        }
    }
    /// Trials per run when none are requested.
    pub fn trials(&self) -> usize {
        match self {
            Self::Equity => crate::TRIALS_PER_RUN,
            Self::Straight | Self::Flush => crate::DRAW_TRIALS_PER_RUN,
        }
    }

    fn seven(trial: &Trial) -> Hand {
        Hand::add(Hand::from(*trial.hero()), Hand::from(*trial.board()))
    }
    fn straight(trial: &Trial) -> bool {
        Evaluator::find_rank_of_straight(u16::from(Self::seven(trial))).is_some()
    }
    fn flush(trial: &Trial) -> bool {
        let seven = Self::seven(trial);
        let hole = Hand::from(*trial.hero());
        Suit::all()
            .iter()
            .filter(|suit| hole.of(suit).size() > 0)
            .any(|suit| seven.of(suit).size() >= 5)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::cards::Hole;

    fn trial(hero: &str, villain: &str, board: &str) -> Trial {
        Trial::from((
            Hole::try_from(hero).unwrap(),
            Hole::try_from(villain).unwrap(),
            Board::try_from(board).unwrap(),
        ))
    }

    #[test]
    fn equity_scores_showdown() {
        let t = trial("As Ah", "Kd Kh", "2c 7d 9h Js 3c");
        assert_eq!(Target::Equity.score(&t), Estimate::from((1, 0, 0)));
    }

    #[test]
    fn straight_through_the_hole() {
        let t = trial("Th 9d", "2c 2d", "8s 7c 6h Kd Kc");
        assert_eq!(Target::Straight.score(&t), Estimate::from((1, 0, 0)));
    }

    #[test]
    fn wheel_counts_as_straight() {
        let t = trial("Ah 2d", "Kc Kd", "3s 4c 5h 9d Jc");
        assert_eq!(Target::Straight.score(&t).wins(), 1);
    }

    #[test]
    fn board_straight_counts() {
        let t = trial("Ah Ad", "Kc Kd", "5s 6c 7h 8d 9c");
        assert_eq!(Target::Straight.score(&t).wins(), 1);
    }

    #[test]
    fn four_to_a_straight_misses() {
        let t = trial("Th 9d", "2c 2d", "8s 7c 2h Kd Kh");
        assert_eq!(Target::Straight.score(&t), Estimate::from((0, 0, 1)));
    }

    #[test]
    fn straight_ignores_a_made_flush() {
        let t = trial("Th 9h", "2c 2d", "8h 7h 6h Kd Kc");
        assert_eq!(Target::Straight.score(&t).wins(), 1);
        assert_eq!(Target::Flush.score(&t).wins(), 1);
    }

    #[test]
    fn flush_with_three_suited_on_board() {
        let t = trial("Ah Kh", "2c 2d", "3h 7h Jh 9s 4c");
        assert_eq!(Target::Flush.score(&t), Estimate::from((1, 0, 0)));
    }

    #[test]
    fn two_suited_on_board_misses() {
        let t = trial("Ah Kh", "2c 2d", "3h 7h Js 9s 4c");
        assert_eq!(Target::Flush.score(&t), Estimate::from((0, 0, 1)));
    }

    #[test]
    fn flush_in_a_suit_the_hole_lacks_misses() {
        let t = trial("Ah Kh", "2h 2d", "3s 7s Js 9s 4s");
        assert_eq!(Target::Flush.score(&t).wins(), 0);
    }

    #[test]
    fn offsuit_hole_needs_four_on_board() {
        let t = trial("Ah Kd", "2c 2s", "3d 7d Jd 9d 4c");
        assert_eq!(Target::Flush.score(&t).wins(), 1);
    }

    #[test]
    fn names() {
        assert_eq!(Target::default(), Target::Equity);
        assert_eq!(Target::Straight.to_string(), "straight");
        assert_eq!(serde_json::to_value(Target::Flush).unwrap(), "flush");
    }
}
