/*!
# Louvain Modularity Maximization

Parallel Louvain community detection over weighted CSR graphs: vertex-weight reduction,
the modularity evaluator, the sequential local-move sweep, cluster compaction, and graph
contraction, composed by the dendrogram driver into a single public entry point,
[`louvain`].
*/

mod compact;
mod contract;
mod degrees;
mod modularity;
mod sweep;

mod dendrogram;

pub use crate::core::config::LouvainConfig;
pub use dendrogram::{louvain, LouvainResult};
