//! Real-valued Genetic Algorithm for single-variable maximization.
//!
//! Maximizes a caller-supplied `f(x)` over a bounded interval with
//! fitness-proportionate selection, arithmetic (blend) crossover, and
//! bounded additive mutation. The best value seen across generations is
//! tracked separately from the population, so the per-generation history
//! is non-decreasing.
//!
//! # Example
//!
//! ```
//! use swarm_metaheur::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default().with_seed(42);
//! let result = GaRunner::run(|x| -(x - 0.5) * (x - 0.5), &config);
//! assert!((result.best_x - 0.5).abs() < 0.1);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
