use super::summary::Summary;
use crate::simulation::Target;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Writes per-hand results and batch summaries into one directory.
///
/// File names carry the summaries' target, e.g. `equity_results_AKs.txt`,
/// `straight_results_T9o.txt`, and `flush_summary.csv`.
#[derive(Debug, Clone)]
pub struct Report {
    directory: PathBuf,
}

impl Report {
    /// Creates the directory, and any missing parents, if absent.
    pub fn new(directory: impl AsRef<Path>) -> anyhow::Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        std::fs::create_dir_all(&directory)
            .with_context(|| format!("creating {}", directory.display()))?;
        Ok(Self { directory })
    }
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// `<target>_results_<HAND>.txt` with every run and the average.
    pub fn write(&self, summary: &Summary) -> anyhow::Result<PathBuf> {
        let path = self.directory.join(format!(
            "{}_results_{}.txt",
            summary.target(),
            summary.hand()
        ));
        Self::save(&path, Listing(summary).to_string())?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }
    /// CSV and JSON summaries of a batch of one target, hands in sorted
    /// order. An empty batch is summarized under the default target.
    pub fn summarize(&self, summaries: &[Summary]) -> anyhow::Result<(PathBuf, PathBuf)> {
        let target = summaries.first().map(Summary::target).unwrap_or_default();
        anyhow::ensure!(
            summaries.iter().all(|s| s.target() == target),
            "cannot summarize mixed targets together"
        );
        let mut sorted = summaries.iter().collect::<Vec<_>>();
        sorted.sort_by_key(|s| s.hand().to_string());
        let csv = self.directory.join(format!("{}_summary.csv", target));
        let json = self.directory.join(format!("{}_summary.json", target));
        Self::save(&csv, Self::csv(target, &sorted))?;
        Self::save(
            &json,
            serde_json::to_string_pretty(&sorted).context("serializing summaries")?,
        )?;
        log::info!("summarized {} hands in {}", sorted.len(), self.directory.display());
        Ok((csv, json))
    }

    fn csv(target: Target, summaries: &[&Summary]) -> String {
        std::iter::once(format!("Hand,{},Standard Deviation", Self::measure(target)))
            .chain(
                summaries
                    .iter()
                    .map(|s| format!("{},{:.4},{:.4}", s.hand(), s.mean(), s.deviation())),
            )
            .map(|line| line + "\n")
            .collect()
    }
    fn measure(target: Target) -> &'static str {
        match target {
            Target::Equity => "Average Equity",
            Target::Straight | Target::Flush => "Average Probability",
        }
    }
    fn save(path: &Path, contents: String) -> anyhow::Result<()> {
        std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
    }
}

/// The per-hand text file.
struct Listing<'a>(&'a Summary);

impl std::fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let summary = self.0;
        let runs = summary.runs().len();
        let trials = summary.trials();
        match summary.target() {
            Target::Equity => writeln!(
                f,
                "Equity simulation results for {} over {} runs of {} simulations each:",
                summary.hand(),
                runs,
                trials
            )?,
            Target::Straight => writeln!(
                f,
                "Straight probability results for {} ({} runs of {} simulations each):",
                summary.hand(),
                runs,
                trials
            )?,
            Target::Flush => writeln!(
                f,
                "Flush probability results for {} ({} runs of {} simulations each):",
                summary.hand(),
                runs,
                trials
            )?,
        }
        writeln!(f)?;
        for (i, value) in summary.equities().enumerate() {
            writeln!(f, "Run {}: {:.4}", i + 1, value)?;
        }
        writeln!(f)?;
        writeln!(f, "{}: {:.4}", Report::measure(summary.target()), summary.mean())?;
        writeln!(f, "Standard Deviation: {:.4}", summary.deviation())
    }
}
