//! PSO configuration.

/// Configuration for the Particle Swarm Optimization algorithm.
///
/// # Defaults
///
/// ```
/// use swarm_metaheur::pso::PsoConfig;
///
/// let config = PsoConfig::default();
/// assert_eq!(config.swarm_size, 30);
/// assert_eq!(config.max_iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use swarm_metaheur::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_dimensions(5)
///     .with_inertia(0.7)
///     .with_c1(2.0)
///     .with_c2(2.0)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of dimensions of the search space.
    pub dimensions: usize,

    /// Number of particles in the swarm.
    pub swarm_size: usize,

    /// Number of swarm iterations.
    pub max_iterations: usize,

    /// Inertia weight: how much of a particle's previous velocity
    /// carries over. Typical range: 0.4–0.9.
    pub inertia: f64,

    /// Cognitive coefficient: pull toward a particle's own best
    /// position.
    pub c1: f64,

    /// Social coefficient: pull toward the swarm's global best
    /// position.
    pub c2: f64,

    /// Search interval `(lo, hi)` applied to every dimension;
    /// positions are clamped inside it.
    pub bounds: (f64, f64),

    /// Velocity magnitude limit per dimension; velocities are clamped
    /// to `[-velocity_limit, velocity_limit]`.
    pub velocity_limit: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            dimensions: 5,
            swarm_size: 30,
            max_iterations: 100,
            inertia: 0.7,
            c1: 2.0,
            c2: 2.0,
            bounds: (-10.0, 10.0),
            velocity_limit: 1.0,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the number of dimensions.
    pub fn with_dimensions(mut self, n: usize) -> Self {
        self.dimensions = n;
        self
    }

    /// Sets the swarm size.
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inertia weight.
    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    /// Sets the cognitive coefficient.
    pub fn with_c1(mut self, c1: f64) -> Self {
        self.c1 = c1;
        self
    }

    /// Sets the social coefficient.
    pub fn with_c2(mut self, c2: f64) -> Self {
        self.c2 = c2;
        self
    }

    /// Sets the search interval.
    pub fn with_bounds(mut self, lo: f64, hi: f64) -> Self {
        self.bounds = (lo, hi);
        self
    }

    /// Sets the velocity magnitude limit.
    pub fn with_velocity_limit(mut self, limit: f64) -> Self {
        self.velocity_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.dimensions == 0 {
            return Err("dimensions must be at least 1".into());
        }
        if self.swarm_size == 0 {
            return Err("swarm_size must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if !self.inertia.is_finite() || self.inertia < 0.0 {
            return Err(format!("inertia must be finite and non-negative, got {}", self.inertia));
        }
        if !self.c1.is_finite() || self.c1 < 0.0 {
            return Err(format!("c1 must be finite and non-negative, got {}", self.c1));
        }
        if !self.c2.is_finite() || self.c2 < 0.0 {
            return Err(format!("c2 must be finite and non-negative, got {}", self.c2));
        }
        let (lo, hi) = self.bounds;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(format!("bounds must be a finite interval with lo < hi, got ({lo}, {hi})"));
        }
        if !self.velocity_limit.is_finite() || self.velocity_limit <= 0.0 {
            return Err(format!(
                "velocity_limit must be finite and positive, got {}",
                self.velocity_limit
            ));
        }
        Ok(())
    }
}
