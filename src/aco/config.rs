//! ACO configuration.

/// Configuration for the Ant Colony Optimization algorithm.
///
/// Controls colony size, iteration budget, the relative influence of
/// pheromone trails vs. heuristic desirability, and the evaporation rate.
///
/// # Defaults
///
/// ```
/// use swarm_metaheur::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.n_ants, 20);
/// assert_eq!(config.n_iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use swarm_metaheur::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_n_ants(50)
///     .with_alpha(1.0)
///     .with_beta(5.0)
///     .with_rho(0.5)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants per iteration (independent tour constructions).
    pub n_ants: usize,

    /// Number of colony iterations.
    pub n_iterations: usize,

    /// Pheromone influence exponent (α ≥ 0).
    ///
    /// Higher values make ants follow strong trails more aggressively.
    pub alpha: f64,

    /// Heuristic influence exponent (β ≥ 0).
    ///
    /// Higher values make ants greedier toward nearby cities.
    pub beta: f64,

    /// Evaporation rate (ρ ∈ [0, 1)): fraction of pheromone lost per
    /// iteration. Keeping ρ below 1 guarantees trails stay non-negative.
    pub rho: f64,

    /// Initial pheromone value on every edge (> 0).
    pub initial_pheromone: f64,

    /// Whether to construct tours in parallel using rayon.
    ///
    /// Tours within one iteration only read shared state, so the
    /// construction phase parallelizes freely; the pheromone update
    /// happens after all ants finish either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Results are identical for the same
    /// seed regardless of the `parallel` setting.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            n_ants: 20,
            n_iterations: 100,
            alpha: 1.0,
            beta: 5.0,
            rho: 0.5,
            initial_pheromone: 1.0,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_n_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// Sets the pheromone influence exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic influence exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the initial pheromone value.
    pub fn with_initial_pheromone(mut self, value: f64) -> Self {
        self.initial_pheromone = value;
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_ants == 0 {
            return Err("n_ants must be at least 1".into());
        }
        if self.n_iterations == 0 {
            return Err("n_iterations must be at least 1".into());
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be finite and non-negative, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be finite and non-negative, got {}", self.beta));
        }
        if !(self.rho >= 0.0 && self.rho < 1.0) {
            return Err(format!("rho must be in [0, 1), got {}", self.rho));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            ));
        }
        Ok(())
    }
}
