//! Particle Swarm Optimization for continuous function minimization.
//!
//! A swarm of particles moves through a bounded multi-dimensional
//! search space. Each particle carries a velocity blending three pulls:
//! its own momentum (inertia), its personal best position (cognitive
//! component), and the swarm's global best position (social component).
//! Velocities and positions are clamped to configured limits, and the
//! global best is updated as soon as any particle improves on it.
//!
//! # Example
//!
//! ```
//! use swarm_metaheur::pso::{PsoConfig, PsoRunner};
//!
//! let config = PsoConfig::default()
//!     .with_dimensions(5)
//!     .with_seed(42);
//!
//! // 5-D sphere function, minimum 0 at the origin.
//! let result = PsoRunner::run(|x| x.iter().map(|v| v * v).sum(), &config);
//! assert!(result.best_value < 0.1);
//! ```
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), *Particle Swarm Optimization*
//! - Shi & Eberhart (1998), *A Modified Particle Swarm Optimizer*

mod config;
mod runner;

pub use config::PsoConfig;
pub use runner::{PsoResult, PsoRunner};
