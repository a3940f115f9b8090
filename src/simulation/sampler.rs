use super::estimate::Estimate;
use super::target::Target;
use super::trial::Trial;
use crate::Probability;
use crate::cards::Hole;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Monte Carlo estimate for a fixed hole: equity against one random
/// opponent, or the rate of making a draw, as chosen by its [`Target`].
///
/// A run of `trials` independent deals is split into shards executed on the
/// rayon pool. Every shard owns a [`SmallRng`] seeded from a hash of the
/// run's seed and the shard index, so no generator is shared between
/// workers and a seeded run is reproducible for a fixed shard count.
/// Shard tallies reduce by summation.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    hero: Hole,
    target: Target,
    trials: usize,
    shards: usize,
    seed: Option<u64>,
}

impl Sampler {
    pub fn new(hero: Hole, trials: usize) -> Self {
        Self {
            hero,
            target: Target::default(),
            trials,
            shards: num_cpus::get(),
            seed: None,
        }
    }
    /// Fixes the run's seed. Unseeded runs draw one at random.
    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    pub fn target(self, target: Target) -> Self {
        Self { target, ..self }
    }
    /// Number of independent work items the trials are split into.
    pub fn shards(self, shards: usize) -> Self {
        Self {
            shards: shards.max(1),
            ..self
        }
    }
    pub fn hero(&self) -> &Hole {
        &self.hero
    }
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Runs every trial to completion.
    pub fn run(&self) -> Estimate {
        self.run_until(&AtomicBool::new(false))
    }
    /// Runs until every trial is done or `halt` is raised. Shards check the
    /// flag between trials, so a halted run returns the tally of the trials
    /// it finished, which is itself a valid smaller estimate.
    pub fn run_until(&self, halt: &AtomicBool) -> Estimate {
        let seed = self.seed.unwrap_or_else(rand::random);
        let estimate = (0..self.shards)
            .into_par_iter()
            .map(|shard| self.shard(seed, shard, halt))
            .sum::<Estimate>();
        log::debug!("{} {} seed {:>20} {}", self.target, self.hero, seed, estimate);
        estimate
    }
    /// Shorthand for the equity of a complete run.
    pub fn equity(&self) -> Probability {
        self.run().equity()
    }

    fn shard(&self, seed: u64, shard: usize, halt: &AtomicBool) -> Estimate {
        let ref mut rng = Self::rng(seed, shard);
        (0..self.quota(shard))
            .take_while(|_| !halt.load(Ordering::Relaxed))
            .map(|_| Trial::deal(self.hero, rng))
            .map(|trial| self.target.score(&trial))
            .sum::<Estimate>()
    }
    /// Trials assigned to one shard. Quotas differ by at most one and add
    /// up to the run's trial count.
    fn quota(&self, shard: usize) -> usize {
        self.trials / self.shards + usize::from(shard < self.trials % self.shards)
    }
    fn rng(seed: u64, shard: usize) -> SmallRng {
        let ref mut hasher = DefaultHasher::default();
        seed.hash(hasher);
        shard.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aces() -> Hole {
        Hole::try_from("As Ah").unwrap()
    }

    #[test]
    fn quotas_cover_every_trial() {
        let sampler = Sampler::new(aces(), 1003).shards(8);
        assert_eq!((0..8).map(|s| sampler.quota(s)).sum::<usize>(), 1003);
        assert!((0..8).map(|s| sampler.quota(s)).all(|q| q == 125 || q == 126));
    }

    #[test]
    fn counts_every_trial() {
        let estimate = Sampler::new(aces(), 500).shards(3).seed(1).run();
        assert_eq!(estimate.trials(), 500);
        assert!((0.0..=1.0).contains(&estimate.equity()));
    }

    #[test]
    fn seeded_runs_reproduce() {
        let sampler = Sampler::new(aces(), 400).shards(4).seed(42);
        assert_eq!(sampler.run(), sampler.run());
    }

    #[test]
    fn seeds_decorrelate() {
        let a = Sampler::new(aces(), 400).shards(4).seed(1).run();
        let b = Sampler::new(aces(), 400).shards(4).seed(2).run();
        assert_ne!(a, b);
    }

    #[test]
    fn shard_generators_differ() {
        use rand::Rng;
        let x = Sampler::rng(9, 0).random::<u64>();
        let y = Sampler::rng(9, 1).random::<u64>();
        assert_ne!(x, y);
    }

    #[test]
    fn halted_run_keeps_partial_tally() {
        let halt = AtomicBool::new(true);
        let estimate = Sampler::new(aces(), 1000).seed(3).run_until(&halt);
        assert_eq!(estimate.trials(), 0);
        assert_eq!(estimate.equity(), 0.5);
    }

    #[test]
    fn draw_runs_share_seeding() {
        let sampler = Sampler::new(aces(), 400).shards(4).seed(42);
        let flush = sampler.target(Target::Flush);
        assert_eq!(flush.run(), flush.run());
        assert_eq!(flush.run().ties(), 0);
        assert_ne!(flush.run(), sampler.run());
    }

    #[test]
    fn zero_trials() {
        assert_eq!(Sampler::new(aces(), 0).run().trials(), 0);
    }
}
