//! PSO swarm loop execution.

use super::config::PsoConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a PSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// The best position found.
    pub best_position: Vec<f64>,

    /// Objective value at the best position (minimization).
    pub best_value: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// Best value so far after each iteration. Non-increasing; length
    /// equals `iterations`.
    pub cost_history: Vec<f64>,
}

/// One particle: current state plus its personal best.
struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_value: f64,
}

impl Particle {
    fn new<F, R>(objective: &F, config: &PsoConfig, rng: &mut R) -> Self
    where
        F: Fn(&[f64]) -> f64,
        R: Rng,
    {
        let (lo, hi) = config.bounds;
        let vlim = config.velocity_limit;
        let position: Vec<f64> = (0..config.dimensions)
            .map(|_| rng.random_range(lo..hi))
            .collect();
        let velocity: Vec<f64> = (0..config.dimensions)
            .map(|_| rng.random_range(-vlim..vlim))
            .collect();
        let best_value = objective(&position);
        Self {
            best_position: position.clone(),
            position,
            velocity,
            best_value,
        }
    }

    /// Blends momentum with the pulls toward the personal and global
    /// bests, clamping each velocity component.
    fn update_velocity<R: Rng>(&mut self, global_best: &[f64], config: &PsoConfig, rng: &mut R) {
        let vlim = config.velocity_limit;
        for i in 0..self.velocity.len() {
            let r1 = rng.random_range(0.0..1.0);
            let r2 = rng.random_range(0.0..1.0);
            let v = config.inertia * self.velocity[i]
                + config.c1 * r1 * (self.best_position[i] - self.position[i])
                + config.c2 * r2 * (global_best[i] - self.position[i]);
            self.velocity[i] = v.clamp(-vlim, vlim);
        }
    }

    /// Moves by the current velocity, clamps to the bounds, and
    /// refreshes the personal best.
    fn update_position<F>(&mut self, objective: &F, config: &PsoConfig)
    where
        F: Fn(&[f64]) -> f64,
    {
        let (lo, hi) = config.bounds;
        for i in 0..self.position.len() {
            self.position[i] = (self.position[i] + self.velocity[i]).clamp(lo, hi);
        }

        let value = objective(&self.position);
        if value < self.best_value {
            self.best_value = value;
            self.best_position.copy_from_slice(&self.position);
        }
    }
}

/// Executes the PSO swarm loop.
pub struct PsoRunner;

impl PsoRunner {
    /// Runs the PSO, minimizing `objective` over `config.bounds` in
    /// `config.dimensions` dimensions.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`PsoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<F>(objective: F, config: &PsoConfig) -> PsoResult
    where
        F: Fn(&[f64]) -> f64,
    {
        config.validate().expect("invalid PsoConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut swarm: Vec<Particle> = (0..config.swarm_size)
            .map(|_| Particle::new(&objective, config, &mut rng))
            .collect();

        let (mut best_position, mut best_value) = swarm
            .iter()
            .map(|p| (p.best_position.clone(), p.best_value))
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .expect("swarm must not be empty");

        let mut cost_history = Vec::with_capacity(config.max_iterations);

        for _ in 0..config.max_iterations {
            for particle in &mut swarm {
                // Each particle sees the global best as of its own
                // update, not a snapshot from the iteration start.
                particle.update_velocity(&best_position, config, &mut rng);
                particle.update_position(&objective, config);

                if particle.best_value < best_value {
                    best_value = particle.best_value;
                    best_position.copy_from_slice(&particle.best_position);
                }
            }
            cost_history.push(best_value);
        }

        PsoResult {
            best_position,
            best_value,
            iterations: config.max_iterations,
            cost_history,
        }
    }
}
