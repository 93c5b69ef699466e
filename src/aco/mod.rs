//! Ant Colony Optimization for the Traveling Salesman Problem.
//!
//! Ants construct closed tours by repeated probabilistic next-city
//! selection, weighting each candidate edge by its pheromone trail
//! (learned) and its heuristic desirability (inverse distance, static).
//! After every ant in an iteration finishes, trails evaporate and every
//! ant's tour deposits pheromone proportional to its quality, so good
//! edges accumulate influence over iterations.
//!
//! This is the classic ant system variant: every ant deposits each
//! iteration, not just the iteration-best or global-best.
//!
//! # Key Types
//!
//! - [`TspInstance`]: immutable problem data (cities, distance and
//!   heuristic matrices, tour cost)
//! - [`PheromoneStore`]: mutable trail matrix with evaporate/reinforce
//! - [`AcoConfig`]: algorithm parameters (ants, iterations, α, β, ρ)
//! - [`AcoRunner`]: executes the colony loop
//! - [`AcoResult`]: best tour, best cost, per-iteration cost history
//!
//! # Example
//!
//! ```
//! use swarm_metaheur::aco::{AcoConfig, AcoRunner, City, TspInstance};
//!
//! let cities = vec![
//!     City::new(0.0, 0.0),
//!     City::new(0.0, 1.0),
//!     City::new(1.0, 1.0),
//!     City::new(1.0, 0.0),
//! ];
//! let instance = TspInstance::new(cities).unwrap();
//! let config = AcoConfig::default()
//!     .with_n_ants(10)
//!     .with_n_iterations(20)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&instance, &config);
//! assert_eq!(result.best_tour.len(), 4);
//! ```
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), *Ant System: Optimization by a
//!   Colony of Cooperating Agents*
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod instance;
mod pheromone;
mod runner;
mod tour;

pub use config::AcoConfig;
pub use instance::{City, TspInstance};
pub use pheromone::PheromoneStore;
pub use runner::{AcoResult, AcoRunner};
