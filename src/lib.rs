//! Swarm-intelligence metaheuristic optimizers.
//!
//! Provides four independent optimization algorithms:
//!
//! - **Ant Colony Optimization (ACO)**: pheromone-guided probabilistic
//!   tour construction for the Traveling Salesman Problem, with
//!   per-iteration evaporation and reinforcement of trail strengths.
//! - **Cuckoo Search (CS)**: permutation-based TSP search over a caller
//!   supplied distance matrix, using swap proposals and probabilistic
//!   nest abandonment.
//! - **Particle Swarm Optimization (PSO)**: continuous minimization of
//!   a multi-dimensional function with inertia-weighted velocities and
//!   cognitive/social pulls toward personal and global bests.
//! - **Genetic Algorithm (GA)**: real-valued single-variable function
//!   maximization with fitness-proportionate selection, arithmetic
//!   crossover, and bounded mutation.
//!
//! # Architecture
//!
//! Each algorithm lives in its own module with a validated builder-style
//! config, a runner, and a result type carrying the best solution found
//! plus a per-iteration best-cost history. The algorithms share no state
//! or interfaces; they can be used entirely independently.

pub mod aco;
pub mod cuckoo;
pub mod ga;
pub mod pso;
