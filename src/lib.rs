/*!
# Louvain Core

A parallel engine for Louvain modularity-maximization community detection over weighted,
undirected graphs stored in compressed sparse row form. See [`community::louvain::louvain`]
for the single public entry point.
*/

pub mod community;
pub mod core;
pub mod graph;

#[cfg(feature = "logging")]
mod settings;

pub use community::louvain::{louvain, LouvainConfig, LouvainResult};
pub use core::error::{LouvainError, Result};
pub use core::weight::Weight;
pub use graph::csr::Csr;
