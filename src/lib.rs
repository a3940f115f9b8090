//! Monte Carlo equity of Texas Hold'em starting hands.
//!
//! A hero's two hole cards are played against a uniformly random opponent
//! hand over uniformly random five-card boards. Each trial is decided by
//! exhaustive 7-card evaluation, and trials are reduced to an equity
//! estimate: the probability of winning plus half the probability of tying.
//! The same sampler also estimates how often a hand makes a straight or a
//! flush by the river.
//!
//! ## Modules
//!
//! - [`cards`] — Card primitives, decks, and starting-hand shorthand
//! - [`evaluation`] — 5-card evaluator and best-of-7 selection
//! - [`simulation`] — Trial sampling and win/tie/loss tallies
//! - [`aggregation`] — Repeated runs per hand, summaries, and reports

pub mod aggregation;
pub mod cards;
pub mod evaluation;
pub mod simulation;

#[cfg(feature = "server")]
pub mod config;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Equity estimates, run averages, and their dispersion.
pub type Probability = f64;
/// Trial counters for win/tie/loss tallies.
pub type Count = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SIMULATION PARAMETERS
// ============================================================================
/// Independent runs per starting hand, averaged by the aggregator.
pub const RUNS_PER_HAND: usize = 10;
/// Trials per run.
pub const TRIALS_PER_RUN: usize = 25_000;
/// Independent runs per hand when estimating straight or flush rates.
pub const DRAW_RUNS_PER_HAND: usize = 25;
/// Trials per run when estimating straight or flush rates.
pub const DRAW_TRIALS_PER_RUN: usize = 10_000;
/// Default directory for per-hand reports and summaries.
pub const RESULTS_DIRECTORY: &str = "equity_simulation_results";
/// Environment variable consulted for a base seed when none is passed.
pub const SEED_VARIABLE: &str = "EQUITY_SEED";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Global interrupt flag for graceful shutdown coordination.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// The process-wide halt flag. Samplers given this flag stop between trials.
pub fn halt() -> &'static std::sync::atomic::AtomicBool {
    &INTERRUPTED
}
/// Check if graceful shutdown was requested (via stdin "Q").
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
}
/// Register graceful interrupt handler. Type "Q" + Enter to stop sampling early.
#[cfg(feature = "server")]
pub fn brb() {
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current hand...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
