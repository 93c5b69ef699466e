//! Cuckoo Search for the Traveling Salesman Problem.
//!
//! A population of nests each holds a candidate route (a permutation of
//! city indices). Every iteration each nest proposes a two-city swap
//! that replaces the nest on strict improvement, then nests are
//! abandoned and re-randomized with a fixed probability to keep the
//! search diversified. The global best route is tracked separately, so
//! abandonment never loses it.
//!
//! Operates directly on a caller-supplied square distance matrix and is
//! fully independent of the [`aco`](crate::aco) module.
//!
//! # References
//!
//! - Yang & Deb (2009), *Cuckoo Search via Lévy Flights*

mod config;
mod runner;

pub use config::CuckooConfig;
pub use runner::{CuckooResult, CuckooRunner};
