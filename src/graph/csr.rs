/*!
# Compressed Sparse Row Graph

An offsets array of length `n+1`, a parallel `(indices, weights)` pair of length `m`,
where `adj(v) = indices[offsets[v]..offsets[v+1])`.

Graph ingestion and COO→CSR conversion are not this type's concern — it only owns an
already-CSR-shaped buffer and validates the structural invariants of that shape.
*/

use rayon::prelude::*;

use crate::core::error::{LouvainError, Result};
use crate::core::weight::Weight;

/// A weighted, undirected graph in compressed sparse row form.
///
/// Construction validates: non-decreasing offsets starting at zero and ending at the
/// edge count, in-range indices, and finite non-negative weights. These checks run
/// unconditionally (not gated behind `debug_assertions`) because constructing a `Csr` is
/// this crate's public boundary, and a boundary should return `Result` rather than depend
/// on the caller's build profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Csr<W: Weight> {
    offsets: Vec<i32>,
    indices: Vec<i32>,
    weights: Vec<W>,
}

impl<W: Weight> Csr<W> {
    /// Builds a CSR graph from raw buffers, validating their structural invariants.
    pub fn new(offsets: Vec<i32>, indices: Vec<i32>, weights: Vec<W>) -> Result<Self> {
        validate_structure(&offsets, &indices, &weights)?;
        Ok(Csr {
            offsets,
            indices,
            weights,
        })
    }

    /// Builds a CSR graph from buffers already known to satisfy the structural invariants
    /// by construction (used internally by the graph contraction step, whose own
    /// bookkeeping guarantees monotonic offsets and in-range, non-negative weights).
    pub(crate) fn from_parts_unchecked(offsets: Vec<i32>, indices: Vec<i32>, weights: Vec<W>) -> Self {
        debug_assert!(validate_structure(&offsets, &indices, &weights).is_ok());
        Csr {
            offsets,
            indices,
            weights,
        }
    }

    /// Convenience constructor for building small graphs from a list of undirected edges,
    /// used by tests. Each `(u, v, w)` entry is materialized in both directions; `u == v`
    /// is stored once, as a self-loop. Adjacency lists are sorted by neighbor id, so the
    /// resulting CSR is deterministic for a given edge list.
    pub fn from_undirected_edges(n: usize, edges: &[(i32, i32, W)]) -> Result<Self> {
        let mut adjacency: Vec<Vec<(i32, W)>> = vec![Vec::new(); n];
        for &(u, v, w) in edges {
            if u < 0 || v < 0 || u as usize >= n || v as usize >= n {
                return Err(LouvainError::invalid_graph(format!(
                    "edge ({u}, {v}) references a vertex outside [0, {n})"
                )));
            }
            if u == v {
                adjacency[u as usize].push((v, w));
            } else {
                adjacency[u as usize].push((v, w));
                adjacency[v as usize].push((u, w));
            }
        }
        for row in &mut adjacency {
            row.sort_by_key(|&(neighbor, _)| neighbor);
        }

        let mut offsets = Vec::with_capacity(n + 1);
        let mut indices = Vec::new();
        let mut weights = Vec::new();
        offsets.push(0);
        for row in adjacency {
            for (neighbor, w) in row {
                indices.push(neighbor);
                weights.push(w);
            }
            offsets.push(indices.len() as i32);
        }
        Csr::new(offsets, indices, weights)
    }

    /// Number of vertices, `n`.
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of directed adjacency entries, `m` (each undirected edge contributes two,
    /// a self-loop contributes one).
    pub fn edge_count(&self) -> usize {
        self.indices.len()
    }

    /// The adjacency-list neighbor ids of vertex `v`, in CSR (adjacency-list) order.
    pub fn neighbors(&self, v: i32) -> &[i32] {
        let (start, end) = self.row_bounds(v);
        &self.indices[start..end]
    }

    /// The adjacency-list edge weights of vertex `v`, parallel to [`Csr::neighbors`].
    pub fn neighbor_weights(&self, v: i32) -> &[W] {
        let (start, end) = self.row_bounds(v);
        &self.weights[start..end]
    }

    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    pub fn indices(&self) -> &[i32] {
        &self.indices
    }

    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    /// Sum of all edge weights, i.e. `m2`: twice the total edge weight of the graph.
    pub fn total_edge_weight(&self) -> W {
        self.weights.par_iter().copied().sum()
    }

    fn row_bounds(&self, v: i32) -> (usize, usize) {
        let start = self.offsets[v as usize] as usize;
        let end = self.offsets[v as usize + 1] as usize;
        (start, end)
    }
}

fn validate_structure<W: Weight>(offsets: &[i32], indices: &[i32], weights: &[W]) -> Result<()> {
    if offsets.is_empty() {
        return Err(LouvainError::invalid_graph(
            "offsets array must have length n+1 with n >= 1",
        ));
    }
    let n = offsets.len() - 1;
    if n < 1 {
        return Err(LouvainError::invalid_graph("graph must have at least one vertex (n < 1)"));
    }
    if offsets[0] != 0 {
        return Err(LouvainError::invalid_graph("offsets[0] must be 0"));
    }
    for w in offsets.windows(2) {
        if w[1] < w[0] {
            return Err(LouvainError::invalid_graph("offsets must be non-decreasing"));
        }
    }
    let m = offsets[n] as usize;
    if m != indices.len() || m != weights.len() {
        return Err(LouvainError::invalid_graph(
            "offsets[n] must equal the length of indices and weights",
        ));
    }
    for &idx in indices {
        if idx < 0 || idx as usize >= n {
            return Err(LouvainError::invalid_graph(format!(
                "adjacency index {idx} out of range for {n} vertices"
            )));
        }
    }
    for &w in weights {
        if w.is_negative() || !w.is_finite() {
            return Err(LouvainError::invalid_graph(
                "edge weights must be finite and non-negative",
            ));
        }
    }
    Ok(())
}
