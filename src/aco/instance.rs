//! Immutable TSP problem data.
//!
//! [`TspInstance`] owns the city coordinates and the derived distance
//! and heuristic matrices. Both matrices are built once at construction
//! and never mutated; the only per-run mutable state lives in
//! [`PheromoneStore`](super::PheromoneStore).

use ndarray::Array2;

/// A city as an immutable 2D coordinate.
///
/// City identity is its index in the instance's city list; the
/// coordinates are only used to derive edge distances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An immutable TSP instance: cities plus derived matrices.
///
/// - **Distance matrix**: symmetric, zero diagonal, entry (i, j) is the
///   Euclidean distance between cities i and j.
/// - **Heuristic matrix**: entry (i, j) is `1 / distance(i, j)` for
///   distinct cities at distinct coordinates, and 0 on the diagonal and
///   for coincident cities, so impossible or degenerate edges carry no
///   probability mass.
#[derive(Debug, Clone)]
pub struct TspInstance {
    cities: Vec<City>,
    distances: Array2<f64>,
    heuristic: Array2<f64>,
}

impl TspInstance {
    /// Builds an instance from city coordinates.
    ///
    /// Each unordered pair's distance is computed once and written to
    /// both (i, j) and (j, i), so symmetry holds by construction.
    ///
    /// Returns `Err` if fewer than 2 cities are given (a tour is
    /// undefined below that).
    pub fn new(cities: Vec<City>) -> Result<Self, String> {
        if cities.len() < 2 {
            return Err(format!(
                "a tour needs at least 2 cities, got {}",
                cities.len()
            ));
        }

        let n = cities.len();
        let mut distances = Array2::zeros((n, n));
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                distances[[i, j]] = d;
                distances[[j, i]] = d;
            }
        }

        let heuristic = Array2::from_shape_fn((n, n), |(i, j)| {
            let d = distances[[i, j]];
            if i == j || d == 0.0 {
                0.0
            } else {
                1.0 / d
            }
        });

        Ok(Self {
            cities,
            distances,
            heuristic,
        })
    }

    /// Number of cities.
    pub fn n_cities(&self) -> usize {
        self.cities.len()
    }

    /// The city coordinates, in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The pairwise distance matrix.
    pub fn distances(&self) -> &Array2<f64> {
        &self.distances
    }

    /// The heuristic (inverse distance) matrix.
    pub fn heuristic(&self) -> &Array2<f64> {
        &self.heuristic
    }

    /// Total length of a closed tour: consecutive edge distances plus
    /// the edge from the last city back to the first.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let legs: f64 = tour
            .windows(2)
            .map(|edge| self.distances[[edge[0], edge[1]]])
            .sum();
        legs + self.distances[[tour[tour.len() - 1], tour[0]]]
    }
}
