use super::summary::Summary;
use crate::cards::Starting;
use crate::simulation::Estimate;
use crate::simulation::Sampler;
use crate::simulation::Target;
use rayon::prelude::*;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Repeats independent sampler runs per starting hand, all aimed at one
/// [`Target`].
///
/// Runs of one hand execute in parallel. Given a base seed, run `i` of a
/// hand is seeded from a hash of (base seed, hand, i), so a whole batch is
/// reproducible and no two runs share a random stream.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    target: Target,
    runs: usize,
    trials: usize,
    shards: usize,
    seed: Option<u64>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::from(Target::default())
    }
}

/// target's own run and trial counts
impl From<Target> for Aggregator {
    fn from(target: Target) -> Self {
        Self {
            target,
            runs: target.runs(),
            trials: target.trials(),
            shards: num_cpus::get(),
            seed: None,
        }
    }
}

impl Aggregator {
    pub fn target(&self) -> Target {
        self.target
    }
    pub fn runs(self, runs: usize) -> Self {
        Self { runs, ..self }
    }
    pub fn trials(self, trials: usize) -> Self {
        Self { trials, ..self }
    }
    pub fn shards(self, shards: usize) -> Self {
        Self { shards, ..self }
    }
    pub fn seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }

    /// Every run of one hand, stopping early if `halt` is raised.
    pub fn aggregate(&self, hand: Starting, halt: &AtomicBool) -> Summary {
        let start = Instant::now();
        let runs = (0..self.runs)
            .into_par_iter()
            .map(|run| self.sampler(hand, run))
            .map(|sampler| sampler.run_until(halt))
            .collect::<Vec<Estimate>>();
        let summary = Summary::from((self.target, hand, self.trials, runs));
        log::info!("{} in {:.1?}", summary, start.elapsed());
        summary
    }
    /// Aggregates each hand in turn, handing every completed summary to
    /// `sink` before starting the next. A raised `halt` ends the batch after
    /// the hand in progress, whose summary is kept only if it completed.
    pub fn simulate<F>(
        &self,
        hands: &[Starting],
        halt: &AtomicBool,
        mut sink: F,
    ) -> anyhow::Result<Vec<Summary>>
    where
        F: FnMut(&Summary) -> anyhow::Result<()>,
    {
        let mut summaries = Vec::with_capacity(hands.len());
        for hand in hands.iter().copied() {
            if halt.load(Ordering::Relaxed) {
                break;
            }
            let summary = self.aggregate(hand, halt);
            if summary.partial() {
                log::warn!("discarding interrupted runs of {}", hand);
                break;
            }
            sink(&summary)?;
            summaries.push(summary);
        }
        Ok(summaries)
    }

    fn sampler(&self, hand: Starting, run: usize) -> Sampler {
        let sampler = Sampler::new(hand.hole(), self.trials)
            .target(self.target)
            .shards(self.shards);
        match self.seed {
            Some(seed) => sampler.seed(Self::seed_of(seed, hand, run)),
            None => sampler,
        }
    }
    fn seed_of(seed: u64, hand: Starting, run: usize) -> u64 {
        let ref mut hasher = DefaultHasher::default();
        seed.hash(hasher);
        hand.hash(hasher);
        run.hash(hasher);
        hasher.finish()
    }
}
