use crate::aggregation::Aggregator;
use crate::cards::Rank;
use crate::cards::Starting;
use crate::cards::Style;
use crate::simulation::Target;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Heads-up preflop equity against a random hand, by Monte Carlo sampling.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// What to estimate: showdown equity, or how often the hand makes a
    /// straight or a flush by the river
    #[arg(long, value_enum, default_value_t = Target::Equity)]
    target: Target,
    /// Comma-separated starting hands, e.g. "AA,AKs,72o"
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["top", "all"])]
    hands: Vec<String>,
    /// Every starting hand whose high card is this rank
    #[arg(long, conflicts_with = "all")]
    top: Option<String>,
    /// All 169 starting hands
    #[arg(long)]
    all: bool,
    /// Independent runs per hand [default: 10, or 25 for draws]
    #[arg(long)]
    runs: Option<usize>,
    /// Trials per run [default: 25000, or 10000 for draws]
    #[arg(long)]
    trials: Option<usize>,
    /// Base seed for reproducible batches [env: EQUITY_SEED]
    #[arg(long)]
    seed: Option<u64>,
    /// Work items each run is split into [default: CPU count]
    #[arg(long)]
    shards: Option<usize>,
    /// Directory for reports
    #[arg(long, default_value = crate::RESULTS_DIRECTORY)]
    output: PathBuf,
}

impl Config {
    pub fn target(&self) -> Target {
        self.target
    }
    /// The starting hands selected on the command line, in request order.
    /// Without a selection: the ace group for equity, connectors and gappers
    /// for straights, and a suited ace-king for flushes.
    pub fn hands(&self) -> anyhow::Result<Vec<Starting>> {
        if self.all {
            return Ok(Starting::all());
        }
        if !self.hands.is_empty() {
            return self
                .hands
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(Starting::try_from)
                .collect();
        }
        if let Some(top) = self.top.as_deref() {
            let top = Rank::try_from(top.trim()).map_err(anyhow::Error::msg)?;
            return Ok(Starting::group(top));
        }
        Ok(match self.target {
            Target::Equity => Starting::group(Rank::Ace),
            Target::Straight => [
                (Rank::Ten, Rank::Nine),
                (Rank::Ten, Rank::Eight),
                (Rank::Ten, Rank::Seven),
                (Rank::Ten, Rank::Six),
                (Rank::Queen, Rank::Jack),
            ]
            .map(|(hi, lo)| Starting::from((hi, lo, Style::Offsuit)))
            .to_vec(),
            Target::Flush => vec![Starting::from((Rank::Ace, Rank::King, Style::Suited))],
        })
    }
    /// The command-line seed, else one parsed from the environment.
    pub fn seed(&self) -> anyhow::Result<Option<u64>> {
        match (self.seed, std::env::var(crate::SEED_VARIABLE).ok()) {
            (Some(seed), _) => Ok(Some(seed)),
            (None, None) => Ok(None),
            (None, Some(var)) => var
                .trim()
                .parse::<u64>()
                .map(Some)
                .with_context(|| format!("{}={} is not a seed", crate::SEED_VARIABLE, var)),
        }
    }
    pub fn output(&self) -> &PathBuf {
        &self.output
    }
    pub fn aggregator(&self) -> anyhow::Result<Aggregator> {
        let runs = self.runs.unwrap_or(self.target.runs());
        let trials = self.trials.unwrap_or(self.target.trials());
        anyhow::ensure!(runs > 0, "--runs must be positive");
        anyhow::ensure!(trials > 0, "--trials must be positive");
        Ok(Aggregator::from(self.target)
            .runs(runs)
            .trials(trials)
            .shards(self.shards.unwrap_or_else(num_cpus::get).max(1))
            .seed(self.seed()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("equity").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_ace_group() {
        let config = config(&[]);
        assert_eq!(config.target(), Target::Equity);
        assert_eq!(config.hands().unwrap().len(), 25);
        assert_eq!(config.output(), &PathBuf::from("equity_simulation_results"));
    }

    #[test]
    fn explicit_hands() {
        let hands = config(&["--hands", "AA, KQs,72o"]).hands().unwrap();
        let hands = hands.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        assert_eq!(hands, ["AA", "KQs", "72o"]);
    }

    #[test]
    fn top_group() {
        let hands = config(&["--top", "T"]).hands().unwrap();
        assert_eq!(hands.len(), 1 + 2 * 8);
        assert!(hands.iter().all(|h| h.hi() == Rank::Ten));
    }

    #[test]
    fn every_hand() {
        assert_eq!(config(&["--all"]).hands().unwrap().len(), 169);
    }

    #[test]
    fn bad_hand_is_an_error() {
        assert!(config(&["--hands", "AA,AAs"]).hands().is_err());
        assert!(config(&["--top", "Z"]).hands().is_err());
    }

    #[test]
    fn selectors_conflict() {
        assert!(Config::try_parse_from(["equity", "--all", "--top", "K"]).is_err());
    }

    #[test]
    fn straight_defaults() {
        let config = config(&["--target", "straight"]);
        let hands = config.hands().unwrap();
        let hands = hands.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        assert_eq!(hands, ["T9o", "T8o", "T7o", "T6o", "QJo"]);
        assert_eq!(config.aggregator().unwrap().target(), Target::Straight);
    }

    #[test]
    fn flush_defaults_and_overrides() {
        let hands = config(&["--target", "flush"]).hands().unwrap();
        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].to_string(), "AKs");
        let hands = config(&["--target", "flush", "--hands", "76s"]).hands().unwrap();
        assert_eq!(hands[0].to_string(), "76s");
    }

    #[test]
    fn unknown_target_rejected() {
        assert!(Config::try_parse_from(["equity", "--target", "quads"]).is_err());
    }

    #[test]
    fn zero_runs_rejected() {
        assert!(config(&["--runs", "0"]).aggregator().is_err());
    }
}
