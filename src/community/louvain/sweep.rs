/*!
# Local-Move Optimizer

One sequential pass over all vertices: for each vertex, searches its neighbor clusters
for the one maximizing ΔQ and moves the vertex there if the gain is positive. Neighbors
are seen with whatever assignments are current at the moment they're read, i.e. an
"as-you-go" sweep — a vertex moved earlier in the same pass is visible to every vertex
considered after it. This is intentionally sequential, unlike the vertex-weight reducer
and the modularity evaluator: a lock-free parallel sweep is not attempted here, since
preserving the exact move order is what makes the outcome reproducible.
*/

use crate::core::error::{LouvainError, Result};
use crate::core::weight::Weight;
use crate::graph::csr::Csr;

/// Runs one sequential sweep over `graph`, updating `community` and `sigma` in place.
///
/// `k` is the per-vertex weight vector and `sigma` the per-cluster weight vector; both are
/// indexed by the *current* cluster ids in `community`. `m2` is the (constant) total weight
/// of the original graph.
pub(crate) fn sweep<W: Weight>(
    graph: &Csr<W>,
    k: &[W],
    sigma: &mut [W],
    community: &mut [i32],
    m2: W,
) -> Result<()> {
    let n = graph.node_count();

    // Reused per vertex: the candidate clusters seen so far, in first-occurrence order,
    // each with its accumulated S_in weight. A plain HashMap does not preserve insertion
    // order, so the order is tracked separately in `order`.
    let mut order: Vec<i32> = Vec::new();
    let mut s_in: std::collections::HashMap<i32, W> = std::collections::HashMap::new();

    for v in 0..n {
        order.clear();
        s_in.clear();

        let old = community[v];
        let neighbors = graph.neighbors(v as i32);
        let weights = graph.neighbor_weights(v as i32);
        let k_v = k[v];

        let mut s_in_old = W::ZERO;
        for (&u, &w) in neighbors.iter().zip(weights.iter()) {
            if u as usize == v {
                continue;
            }
            let c_u = community[u as usize];
            if c_u == old {
                s_in_old = s_in_old + w;
            }
            match s_in.get_mut(&c_u) {
                Some(acc) => *acc = *acc + w,
                None => {
                    order.push(c_u);
                    s_in.insert(c_u, w);
                }
            }
        }

        let sigma_old_minus_kv = sigma[old as usize] - k_v;
        let base = s_in_old - (k_v / m2) * sigma_old_minus_kv;

        let mut best_comm = old;
        let mut best_delta = W::ZERO;

        for &c in &order {
            if c == old {
                continue;
            }
            let s_in_c = s_in[&c];
            let sigma_c = sigma[c as usize];
            let gain_new = s_in_c - (k_v / m2) * sigma_c;
            let delta = gain_new - base;
            if delta.is_nan() {
                return Err(LouvainError::numerical_degeneracy(
                    "delta-modularity evaluated to NaN during sweep",
                ));
            }
            if delta > best_delta {
                best_delta = delta;
                best_comm = c;
            }
        }

        if best_comm != old {
            sigma[old as usize] = sigma[old as usize] - k_v;
            community[v] = best_comm;
            sigma[best_comm as usize] = sigma[best_comm as usize] + k_v;

            if sigma[old as usize].is_negative() {
                return Err(LouvainError::numerical_degeneracy(format!(
                    "cluster weight went negative after moving vertex {v}"
                )));
            }
        }
    }

    Ok(())
}
