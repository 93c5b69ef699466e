//! Probabilistic tour construction for a single ant.

use super::instance::TspInstance;
use super::pheromone::PheromoneStore;
use rand::Rng;

/// Builds one complete tour: a random start city, then repeated
/// weighted next-city selection until every city is visited.
///
/// The result is always a permutation of `0..n_cities` — selection only
/// ever considers unvisited cities, and the zero-mass fallback keeps the
/// loop progressing even when every candidate scores 0.
pub(crate) fn construct_tour<R: Rng>(
    instance: &TspInstance,
    pheromones: &PheromoneStore,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Vec<usize> {
    let n = instance.n_cities();
    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];

    let start = rng.random_range(0..n);
    tour.push(start);
    visited[start] = true;

    while tour.len() < n {
        let current = tour[tour.len() - 1];
        let next = pick_next_city(instance, pheromones, current, &visited, alpha, beta, rng);
        tour.push(next);
        visited[next] = true;
    }

    tour
}

/// Samples the next city among the unvisited ones, weighted by
/// `pheromone(c, j)^α × heuristic(c, j)^β`.
///
/// If the total score carries no usable probability mass — every
/// candidate underflowed to 0 (as with coincident cities), or the sum
/// overflowed — falls back to a uniform choice so construction always
/// terminates without dividing by zero.
fn pick_next_city<R: Rng>(
    instance: &TspInstance,
    pheromones: &PheromoneStore,
    current: usize,
    visited: &[bool],
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> usize {
    let heuristic = instance.heuristic();

    let mut candidates = Vec::new();
    let mut total = 0.0;
    for (city, &seen) in visited.iter().enumerate() {
        if seen {
            continue;
        }
        let score =
            pheromones.get(current, city).powf(alpha) * heuristic[[current, city]].powf(beta);
        total += score;
        candidates.push((city, score));
    }

    debug_assert!(!candidates.is_empty(), "no unvisited city left to pick");

    if !(total > 0.0 && total.is_finite()) {
        return candidates[rng.random_range(0..candidates.len())].0;
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for &(city, score) in &candidates {
        cumulative += score;
        if cumulative > threshold {
            return city;
        }
    }

    candidates[candidates.len() - 1].0 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::City;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_permutation(tour: &[usize], n: usize) {
        assert_eq!(tour.len(), n);
        let mut seen = vec![false; n];
        for &city in tour {
            assert!(city < n, "city index {city} out of range");
            assert!(!seen[city], "city {city} visited twice");
            seen[city] = true;
        }
    }

    #[test]
    fn test_tour_is_permutation() {
        let cities: Vec<City> = (0..8)
            .map(|i| City::new(i as f64, (i * i % 7) as f64))
            .collect();
        let instance = TspInstance::new(cities).unwrap();
        let pheromones = PheromoneStore::new(8, 1.0, 0.5);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let tour = construct_tour(&instance, &pheromones, 1.0, 5.0, &mut rng);
            assert_permutation(&tour, 8);
        }
    }

    #[test]
    fn test_fallback_on_zero_probability_mass() {
        // All cities coincident: every heuristic entry is 0, so every
        // selection goes through the uniform fallback.
        let cities = vec![City::new(3.0, 3.0); 5];
        let instance = TspInstance::new(cities).unwrap();
        let pheromones = PheromoneStore::new(5, 1.0, 0.5);
        let mut rng = StdRng::seed_from_u64(7);

        let tour = construct_tour(&instance, &pheromones, 1.0, 5.0, &mut rng);
        assert_permutation(&tour, 5);
    }

    #[test]
    fn test_fallback_on_underflowed_trails() {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(0.0, 1.0),
        ];
        let instance = TspInstance::new(cities).unwrap();
        // Denormal trails raised to a large alpha underflow to 0.
        let mut pheromones = PheromoneStore::new(3, f64::MIN_POSITIVE, 0.5);
        pheromones.evaporate();
        let mut rng = StdRng::seed_from_u64(11);

        let tour = construct_tour(&instance, &pheromones, 800.0, 5.0, &mut rng);
        assert_permutation(&tour, 3);
    }

    #[test]
    fn test_strong_trail_dominates_selection() {
        // With a huge trail on edge (0, 1) and alpha heavy, ants at city
        // 0 should almost always move to city 1 first.
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(10.0, 0.0),
            City::new(1.0, 0.1),
        ];
        let instance = TspInstance::new(cities).unwrap();
        let mut pheromones = PheromoneStore::new(3, 1e-6, 0.0);
        pheromones.reinforce(&[(vec![0, 1], 1e-9)]);

        let visited = vec![true, false, false];
        let mut rng = StdRng::seed_from_u64(3);
        let mut picked_one = 0;
        for _ in 0..200 {
            if pick_next_city(&instance, &pheromones, 0, &visited, 3.0, 1.0, &mut rng) == 1 {
                picked_one += 1;
            }
        }
        assert!(
            picked_one > 190,
            "expected the reinforced edge to dominate, got {picked_one}/200"
        );
    }

    #[test]
    fn test_seeded_construction_is_deterministic() {
        let cities: Vec<City> = (0..6).map(|i| City::new(i as f64, 0.5 * i as f64)).collect();
        let instance = TspInstance::new(cities).unwrap();
        let pheromones = PheromoneStore::new(6, 1.0, 0.5);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let tour_a = construct_tour(&instance, &pheromones, 1.0, 5.0, &mut rng_a);
        let tour_b = construct_tour(&instance, &pheromones, 1.0, 5.0, &mut rng_b);
        assert_eq!(tour_a, tour_b);
    }

    proptest! {
        #[test]
        fn prop_tour_is_permutation_for_random_instances(
            coords in proptest::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 2..30),
            seed in any::<u64>(),
        ) {
            let n = coords.len();
            let cities: Vec<City> = coords.into_iter().map(|(x, y)| City::new(x, y)).collect();
            let instance = TspInstance::new(cities).unwrap();
            let pheromones = PheromoneStore::new(n, 1.0, 0.5);
            let mut rng = StdRng::seed_from_u64(seed);

            let tour = construct_tour(&instance, &pheromones, 1.0, 5.0, &mut rng);
            assert_permutation(&tour, n);
        }
    }
}
