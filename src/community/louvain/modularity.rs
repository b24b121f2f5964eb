/*!
# Modularity Evaluator

Computes the modularity Q of the current clustering.

Writing `A_v` for the weight leaving vertex v's cluster, the per-vertex term computed
below is `A_v − k_v·(m2−Σ_{C[v]})/m2`; summed and negated, this equals the conventional
"higher is better" modularity `Q = (1/m2) Σ_v[S_in(C[v]) − k_v·Σ_{C[v]}/m2]` (derivable by
expanding `Σ_v A_v = m2 − Σ_v S_in(C[v])` and substituting `Σ_v k_v = m2`), positive for
e.g. two disjoint triangles.
*/

use rayon::prelude::*;

use crate::core::error::{LouvainError, Result};
use crate::core::weight::Weight;
use crate::graph::csr::Csr;

/// Computes the conventional ("higher is better") modularity of `community` on `graph`.
///
/// `k` is the per-vertex weight vector and `sigma` the per-cluster weight vector, both
/// for the current level; `m2` is the level's total edge weight.
pub(crate) fn modularity<W: Weight>(
    graph: &Csr<W>,
    community: &[i32],
    k: &[W],
    sigma: &[W],
    m2: W,
) -> Result<W> {
    if m2 == W::ZERO {
        return Ok(W::ZERO);
    }

    let sum: W = (0..graph.node_count())
        .into_par_iter()
        .map(|v| {
            let c_v = community[v];
            let neighbors = graph.neighbors(v as i32);
            let weights = graph.neighbor_weights(v as i32);
            let a_v: W = neighbors
                .iter()
                .zip(weights.iter())
                .filter(|&(&u, _)| community[u as usize] != c_v)
                .map(|(_, &w)| w)
                .sum();
            let sigma_c = sigma[c_v as usize];
            a_v - (k[v] * (m2 - sigma_c)) / m2
        })
        .sum();

    let q = -(sum) / m2;
    if q.is_nan() {
        return Err(LouvainError::numerical_degeneracy(
            "modularity evaluated to NaN",
        ));
    }
    Ok(q)
}
