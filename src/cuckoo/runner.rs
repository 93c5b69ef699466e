//! Cuckoo search execution loop.

use super::config::CuckooConfig;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Result of a cuckoo search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CuckooResult {
    /// The best route found: a permutation of `0..n_cities`.
    pub best_route: Vec<usize>,

    /// Total closed-route length of the best route.
    pub best_cost: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// Best cost so far after each iteration. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the cuckoo search loop over a distance matrix.
pub struct CuckooRunner;

impl CuckooRunner {
    /// Runs the cuckoo search.
    ///
    /// `distances` is an N×N matrix of edge lengths; routes are closed,
    /// so the cost of a route includes the edge back to its start.
    /// Returns `Err` if the matrix is not square with N ≥ 2 (a route is
    /// undefined below that).
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`CuckooConfig::validate`] first for a descriptive error).
    pub fn run(distances: &Array2<f64>, config: &CuckooConfig) -> Result<CuckooResult, String> {
        config.validate().expect("invalid CuckooConfig");
        let n = distances.nrows();
        if distances.ncols() != n || n < 2 {
            return Err(format!(
                "distances must be a square matrix over at least 2 cities, got {}x{}",
                distances.nrows(),
                distances.ncols()
            ));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut nests: Vec<Vec<usize>> = (0..config.n_nests)
            .map(|_| random_route(n, &mut rng))
            .collect();
        let mut costs: Vec<f64> = nests.iter().map(|r| route_cost(r, distances)).collect();

        let (mut best_route, mut best_cost) = current_best(&nests, &costs);
        let mut cost_history = Vec::with_capacity(config.max_iterations);

        for _ in 0..config.max_iterations {
            // Swap proposals, accepted on strict improvement only.
            for i in 0..config.n_nests {
                let candidate = swap_mutation(&nests[i], &mut rng);
                let candidate_cost = route_cost(&candidate, distances);
                if candidate_cost < costs[i] {
                    nests[i] = candidate;
                    costs[i] = candidate_cost;
                }
            }

            // Abandonment: re-randomize each nest with fixed probability.
            for i in 0..config.n_nests {
                if rng.random_range(0.0..1.0) < config.abandon_prob {
                    nests[i] = random_route(n, &mut rng);
                    costs[i] = route_cost(&nests[i], distances);
                }
            }

            let (iter_best, iter_cost) = current_best(&nests, &costs);
            if iter_cost < best_cost {
                best_route = iter_best;
                best_cost = iter_cost;
            }
            cost_history.push(best_cost);
        }

        Ok(CuckooResult {
            best_route,
            best_cost,
            iterations: config.max_iterations,
            cost_history,
        })
    }
}

fn random_route<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut route: Vec<usize> = (0..n).collect();
    route.shuffle(rng);
    route
}

/// Swaps two distinct positions of the route.
fn swap_mutation<R: Rng>(route: &[usize], rng: &mut R) -> Vec<usize> {
    let mut new_route = route.to_vec();
    let picked = rand::seq::index::sample(rng, route.len(), 2);
    new_route.swap(picked.index(0), picked.index(1));
    new_route
}

fn route_cost(route: &[usize], distances: &Array2<f64>) -> f64 {
    let legs: f64 = route
        .windows(2)
        .map(|edge| distances[[edge[0], edge[1]]])
        .sum();
    legs + distances[[route[route.len() - 1], route[0]]]
}

fn current_best(nests: &[Vec<usize>], costs: &[f64]) -> (Vec<usize>, f64) {
    let (idx, &cost) = costs
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .expect("at least one nest");
    (nests[idx].clone(), cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4 cities on a unit square, listed so the index-order route is
    /// suboptimal (crosses the diagonal).
    fn square_distances() -> Array2<f64> {
        let coords = [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)];
        Array2::from_shape_fn((4, 4), |(i, j)| {
            let (xi, yi): (f64, f64) = coords[i];
            let (xj, yj) = coords[j];
            (xi - xj).hypot(yi - yj)
        })
    }

    fn assert_permutation(route: &[usize], n: usize) {
        assert_eq!(route.len(), n);
        let mut seen = vec![false; n];
        for &city in route {
            assert!(!seen[city], "city {city} visited twice");
            seen[city] = true;
        }
    }

    #[test]
    fn test_finds_square_perimeter() {
        let distances = square_distances();
        let config = CuckooConfig::default()
            .with_n_nests(20)
            .with_max_iterations(50)
            .with_seed(42);

        let result = CuckooRunner::run(&distances, &config).unwrap();

        assert!(
            (result.best_cost - 4.0).abs() < 1e-9,
            "expected the square perimeter 4.0, got {}",
            result.best_cost
        );
        assert_permutation(&result.best_route, 4);
    }

    #[test]
    fn test_cost_history_non_increasing() {
        let distances = square_distances();
        let config = CuckooConfig::default()
            .with_n_nests(5)
            .with_max_iterations(40)
            .with_abandon_prob(0.5)
            .with_seed(3);

        let result = CuckooRunner::run(&distances, &config).unwrap();

        assert_eq!(result.cost_history.len(), 40);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "abandonment must not lose the global best: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_best_cost_matches_best_route() {
        let distances = square_distances();
        let config = CuckooConfig::default().with_max_iterations(10).with_seed(1);

        let result = CuckooRunner::run(&distances, &config).unwrap();
        assert_eq!(result.best_cost, route_cost(&result.best_route, &distances));
        assert_eq!(result.iterations, 10);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let distances = square_distances();
        let config = CuckooConfig::default().with_max_iterations(25).with_seed(7);

        let a = CuckooRunner::run(&distances, &config).unwrap();
        let b = CuckooRunner::run(&distances, &config).unwrap();
        assert_eq!(a.best_route, b.best_route);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_swap_mutation_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(5);
        let route: Vec<usize> = (0..10).collect();
        for _ in 0..50 {
            let mutated = swap_mutation(&route, &mut rng);
            assert_permutation(&mutated, 10);
            assert_ne!(mutated, route, "swap of distinct positions must change the route");
        }
    }

    #[test]
    fn test_rejects_malformed_distance_matrix() {
        // Malformed problem data comes back as Err, matching the
        // instance constructors elsewhere; only bad configs panic.
        let single = Array2::<f64>::zeros((1, 1));
        assert!(CuckooRunner::run(&single, &CuckooConfig::default()).is_err());

        let rectangular = Array2::<f64>::zeros((3, 4));
        let err = CuckooRunner::run(&rectangular, &CuckooConfig::default()).unwrap_err();
        assert!(err.contains("square matrix"), "unexpected error: {err}");
    }

    #[test]
    #[should_panic(expected = "invalid CuckooConfig")]
    fn test_invalid_config_panics() {
        let distances = square_distances();
        let config = CuckooConfig::default().with_abandon_prob(2.0);
        let _ = CuckooRunner::run(&distances, &config);
    }
}
