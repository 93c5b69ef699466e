//! GA evolutionary loop execution.

use super::config::GaConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The argument of the best value found.
    pub best_x: f64,

    /// Best objective value found (maximization).
    pub best_value: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best value so far at each generation. Non-decreasing; length
    /// equals `generations`.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop for a single-variable objective.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, maximizing `objective` over `config.bounds`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<F>(objective: F, config: &GaConfig) -> GaResult
    where
        F: Fn(f64) -> f64,
    {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (lo, hi) = config.bounds;
        let mut population: Vec<f64> = (0..config.population_size)
            .map(|_| rng.random_range(lo..hi))
            .collect();

        let mut best_x = population[0];
        let mut best_value = f64::NEG_INFINITY;
        let mut fitness_history = Vec::with_capacity(config.generations);

        for _ in 0..config.generations {
            let fitness: Vec<f64> = population.iter().map(|&x| objective(x)).collect();

            for (&x, &f) in population.iter().zip(fitness.iter()) {
                if f > best_value {
                    best_value = f;
                    best_x = x;
                }
            }
            fitness_history.push(best_value);

            let selected: Vec<f64> = (0..config.population_size)
                .map(|_| population[select_index(&fitness, &mut rng)])
                .collect();

            let mut next_population = Vec::with_capacity(config.population_size);
            for pair in selected.chunks_exact(2) {
                let (mut c1, mut c2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    blend(pair[0], pair[1], &mut rng)
                } else {
                    (pair[0], pair[1])
                };
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    c1 = mutate(c1, lo, hi, &mut rng);
                }
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    c2 = mutate(c2, lo, hi, &mut rng);
                }
                next_population.push(c1);
                next_population.push(c2);
            }
            population = next_population;
        }

        GaResult {
            best_x,
            best_value,
            generations: config.generations,
            fitness_history,
        }
    }
}

/// Fitness-proportionate selection over shifted weights.
///
/// Weights are shifted so the worst individual still gets a small
/// positive weight (raw fitness may be negative). A non-positive or
/// non-finite total falls back to a uniform pick, the same degenerate
/// mass policy the tour constructor uses.
fn select_index<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    let min = fitness.iter().cloned().fold(f64::INFINITY, f64::min);

    let epsilon = 1e-10;
    let weights: Vec<f64> = fitness.iter().map(|&f| f - min + epsilon).collect();
    let total: f64 = weights.iter().sum();

    if !(total > 0.0 && total.is_finite()) {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Arithmetic crossover with a random blend factor.
fn blend<R: Rng>(p1: f64, p2: f64, rng: &mut R) -> (f64, f64) {
    let alpha = rng.random_range(0.0..1.0);
    (
        alpha * p1 + (1.0 - alpha) * p2,
        alpha * p2 + (1.0 - alpha) * p1,
    )
}

/// Additive perturbation of up to 10% of the interval, clamped back to
/// the bounds.
fn mutate<R: Rng>(x: f64, lo: f64, hi: f64, rng: &mut R) -> f64 {
    let step = 0.1 * (hi - lo);
    (x + rng.random_range(-step..step)).clamp(lo, hi)
}
