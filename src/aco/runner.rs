//! ACO colony loop execution.
//!
//! [`AcoRunner`] orchestrates the full run: per iteration it constructs
//! one tour per ant, scores them, updates the global best, and applies
//! the evaporate-then-reinforce pheromone update with every ant's tour.

use super::config::AcoConfig;
use super::instance::TspInstance;
use super::pheromone::PheromoneStore;
use super::tour::construct_tour;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The best tour found: a permutation of `0..n_cities`.
    pub best_tour: Vec<usize>,

    /// Total closed-tour length of the best tour.
    pub best_cost: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// Best cost so far after each completed iteration.
    ///
    /// Non-increasing; length equals `iterations`.
    pub cost_history: Vec<f64>,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the ACO colony loop.
///
/// # Usage
///
/// ```ignore
/// let instance = TspInstance::new(cities)?;
/// let config = AcoConfig::default().with_seed(42);
/// let result = AcoRunner::run(&instance, &config);
/// println!("best cost: {}", result.best_cost);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the ACO optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AcoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(instance: &TspInstance, config: &AcoConfig) -> AcoResult {
        Self::run_impl(instance, config, None, |_, _| {})
    }

    /// Runs the ACO with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run
    /// stops before the next iteration and returns the best solution
    /// found so far.
    pub fn run_with_cancel(
        instance: &TspInstance,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult {
        Self::run_impl(instance, config, cancel, |_, _| {})
    }

    /// Runs the ACO with a progress observer.
    ///
    /// The observer is invoked once per completed iteration with the
    /// iteration number (1-based) and the best cost so far. It is purely
    /// informational and has no effect on the search.
    pub fn run_with_observer<F>(instance: &TspInstance, config: &AcoConfig, observer: F) -> AcoResult
    where
        F: FnMut(usize, f64),
    {
        Self::run_impl(instance, config, None, observer)
    }

    fn run_impl<F>(
        instance: &TspInstance,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> AcoResult
    where
        F: FnMut(usize, f64),
    {
        config.validate().expect("invalid AcoConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut pheromones =
            PheromoneStore::new(instance.n_cities(), config.initial_pheromone, config.rho);

        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_cost = f64::INFINITY;
        let mut cost_history = Vec::with_capacity(config.n_iterations);
        let mut cancelled = false;
        let mut completed = 0usize;

        for _ in 0..config.n_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Every ant gets its own seeded RNG so the construction
            // phase can run in parallel and stays reproducible either
            // way for a fixed config seed.
            let seeds: Vec<u64> = (0..config.n_ants).map(|_| rng.random()).collect();
            let build = |seed: u64| {
                let mut ant_rng = StdRng::seed_from_u64(seed);
                let tour =
                    construct_tour(instance, &pheromones, config.alpha, config.beta, &mut ant_rng);
                let cost = instance.tour_cost(&tour);
                (tour, cost)
            };

            // All ants finish (collect barrier) before any pheromone
            // mutation below.
            let solutions: Vec<(Vec<usize>, f64)> = if config.parallel {
                seeds.into_par_iter().map(build).collect()
            } else {
                seeds.into_iter().map(build).collect()
            };

            for (tour, cost) in &solutions {
                if *cost < best_cost {
                    best_cost = *cost;
                    best_tour = tour.clone();
                }
            }

            pheromones.evaporate();
            pheromones.reinforce(&solutions);

            completed += 1;
            cost_history.push(best_cost);
            observer(completed, best_cost);
        }

        AcoResult {
            best_tour,
            best_cost,
            iterations: completed,
            cost_history,
            cancelled,
        }
    }
}
