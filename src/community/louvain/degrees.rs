/*!
# Vertex-Weight Reducer

Sums the incident edge weights of every vertex. Purely data-parallel: each vertex's
adjacency slice is reduced independently, with no ordering requirement beyond
associativity of addition.
*/

use rayon::prelude::*;

use crate::core::weight::Weight;
use crate::graph::csr::Csr;

/// Computes `k[v] = Σ_{e ∈ adj(v)} weight(e)` for every vertex, in parallel.
pub(crate) fn vertex_weights<W: Weight>(graph: &Csr<W>) -> Vec<W> {
    (0..graph.node_count())
        .into_par_iter()
        .map(|v| graph.neighbor_weights(v as i32).iter().copied().sum())
        .collect()
}
