//! Cuckoo search configuration.

/// Configuration for the Cuckoo Search algorithm.
///
/// # Builder Pattern
///
/// ```
/// use swarm_metaheur::cuckoo::CuckooConfig;
///
/// let config = CuckooConfig::default()
///     .with_n_nests(20)
///     .with_abandon_prob(0.3)
///     .with_max_iterations(10)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CuckooConfig {
    /// Number of nests (candidate routes kept alive).
    pub n_nests: usize,

    /// Probability in [0, 1] that a nest is abandoned and re-randomized
    /// each iteration.
    pub abandon_prob: f64,

    /// Number of search iterations.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for CuckooConfig {
    fn default() -> Self {
        Self {
            n_nests: 15,
            abandon_prob: 0.25,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl CuckooConfig {
    /// Sets the number of nests.
    pub fn with_n_nests(mut self, n: usize) -> Self {
        self.n_nests = n;
        self
    }

    /// Sets the abandonment probability.
    pub fn with_abandon_prob(mut self, p: f64) -> Self {
        self.abandon_prob = p;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_nests == 0 {
            return Err("n_nests must be at least 1".into());
        }
        if !(self.abandon_prob >= 0.0 && self.abandon_prob <= 1.0) {
            return Err(format!(
                "abandon_prob must be in [0, 1], got {}",
                self.abandon_prob
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        Ok(())
    }
}
