//! Mutable pheromone trail state.

use ndarray::Array2;

/// Symmetric matrix of pheromone trail strengths.
///
/// Initialized uniformly and mutated exactly once per colony iteration:
/// [`evaporate`](Self::evaporate) first, then
/// [`reinforce`](Self::reinforce) with every ant's tour from that
/// iteration. Both directed entries of an edge are always updated
/// together, so the matrix stays symmetric, and with ρ ∈ [0, 1) every
/// entry stays non-negative.
#[derive(Debug, Clone)]
pub struct PheromoneStore {
    trails: Array2<f64>,
    rho: f64,
}

impl PheromoneStore {
    /// Creates a store with every trail set to `initial`.
    ///
    /// The diagonal is never read (a city is never revisited), so it is
    /// simply initialized along with the rest.
    pub fn new(n_cities: usize, initial: f64, rho: f64) -> Self {
        Self {
            trails: Array2::from_elem((n_cities, n_cities), initial),
            rho,
        }
    }

    /// Decays every trail multiplicatively by (1 − ρ).
    pub fn evaporate(&mut self) {
        let keep = 1.0 - self.rho;
        self.trails.mapv_inplace(|t| t * keep);
    }

    /// Deposits pheromone along every tour's edges, closing edge
    /// included, with deposit = 1 / cost.
    ///
    /// Tours with near-zero cost (possible only when duplicate
    /// coordinates collapse every edge to length 0) are skipped rather
    /// than dividing by zero.
    pub fn reinforce(&mut self, solutions: &[(Vec<usize>, f64)]) {
        for (tour, cost) in solutions {
            if *cost <= f64::EPSILON {
                continue;
            }
            let deposit = 1.0 / cost;
            for edge in tour.windows(2) {
                self.deposit(edge[0], edge[1], deposit);
            }
            if tour.len() > 1 {
                self.deposit(tour[tour.len() - 1], tour[0], deposit);
            }
        }
    }

    fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        self.trails[[i, j]] += amount;
        self.trails[[j, i]] += amount;
    }

    /// Trail strength on the directed edge (i, j).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.trails[[i, j]]
    }

    /// The full trail matrix.
    pub fn trails(&self) -> &Array2<f64> {
        &self.trails
    }
}
