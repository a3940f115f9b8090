use crate::Probability;
use crate::cards::Starting;
use crate::simulation::Estimate;
use crate::simulation::Target;

/// Every run of one starting hand, and the statistics across them.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Summary {
    target: Target,
    hand: Starting,
    trials: usize,
    runs: Vec<Estimate>,
}

impl Summary {
    pub fn target(&self) -> Target {
        self.target
    }
    pub fn hand(&self) -> Starting {
        self.hand
    }
    /// Trials requested per run.
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn runs(&self) -> &[Estimate] {
        &self.runs
    }
    pub fn equities(&self) -> impl Iterator<Item = Probability> + '_ {
        self.runs.iter().map(Estimate::equity)
    }
    /// Unweighted average of run equities.
    pub fn mean(&self) -> Probability {
        match self.runs.len() {
            0 => 0.5,
            n => self.equities().sum::<Probability>() / n as Probability,
        }
    }
    /// Sample standard deviation of run equities; zero for fewer than two runs.
    pub fn deviation(&self) -> Probability {
        match self.runs.len() {
            0 | 1 => 0.0,
            n => {
                let mean = self.mean();
                let ss = self.equities().map(|e| (e - mean) * (e - mean)).sum::<Probability>();
                (ss / (n - 1) as Probability).sqrt()
            }
        }
    }
    /// Whether any run stopped short of its trial budget.
    pub fn partial(&self) -> bool {
        self.runs.iter().any(|r| r.trials() < self.trials as crate::Count)
    }
}

impl From<(Target, Starting, usize, Vec<Estimate>)> for Summary {
    fn from((target, hand, trials, runs): (Target, Starting, usize, Vec<Estimate>)) -> Self {
        Self {
            target,
            hand,
            trials,
            runs,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8} {:<4} {:.4} ± {:.4} over {} runs of {}",
            self.target,
            self.hand,
            self.mean(),
            self.deviation(),
            self.runs.len(),
            self.trials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(runs: &[(u64, u64, u64)]) -> Summary {
        Summary::from((
            Target::Equity,
            Starting::try_from("AKs").unwrap(),
            10,
            runs.iter().cloned().map(Estimate::from).collect(),
        ))
    }

    #[test]
    fn mean_of_equities() {
        let summary = summary(&[(8, 0, 2), (6, 0, 4), (5, 2, 3)]);
        assert!((summary.mean() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn sample_deviation() {
        let summary = summary(&[(8, 0, 2), (6, 0, 4)]);
        let expected = ((0.1f64 * 0.1 + 0.1 * 0.1) / 1.0).sqrt();
        assert!((summary.deviation() - expected).abs() < 1e-12);
    }

    #[test]
    fn single_run_has_no_spread() {
        assert_eq!(summary(&[(8, 0, 2)]).deviation(), 0.0);
    }

    #[test]
    fn detects_partial_runs() {
        assert!(!summary(&[(8, 0, 2)]).partial());
        assert!(summary(&[(8, 0, 1)]).partial());
    }

    #[test]
    fn serializes_hand_shorthand() {
        let json = serde_json::to_value(summary(&[(8, 0, 2)])).unwrap();
        assert_eq!(json["target"], "equity");
        assert_eq!(json["hand"], "AKs");
        assert_eq!(json["trials"], 10);
        assert_eq!(json["runs"][0]["wins"], 8);
    }
}
