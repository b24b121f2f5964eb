/*!
# Super-Vertex Builder

Contracts the working graph so that each of the `k` surviving clusters becomes one vertex
of the next level: remap endpoints through `community`, merge parallel edges (including
self-loops formed from intra-cluster edges) by summing their weights, and rebuild a fresh
CSR. Edge expansion, remap, and the reduce-by-key merge are data-parallel (Rayon); the
final offset rebuild is a short sequential scan over an already-sorted key column.

A stable sort is used for determinism: a fixed input needs a fixed edge ordering, not any
particular tie-break among equal-weight parallel edges, and Rayon's `par_sort` is a stable
merge sort.
*/

use rayon::prelude::*;

use crate::core::weight::Weight;
use crate::graph::csr::Csr;

/// Builds the contracted graph with `k` vertices, one per surviving cluster in `community`.
pub(crate) fn contract<W: Weight>(graph: &Csr<W>, community: &[i32], k: usize) -> Csr<W> {
    let offsets = graph.offsets();
    let indices = graph.indices();
    let weights = graph.weights();
    let m = indices.len();

    // Expand row pointers into a per-edge source array, then remap both endpoints.
    let mut remapped: Vec<(i32, i32, W)> = (0..m)
        .into_par_iter()
        .map(|e| {
            let src = row_of(offsets, e);
            let dst = indices[e] as usize;
            (community[src], community[dst], weights[e])
        })
        .collect();

    remapped.par_sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    // Reduce-by-key on (src', dst'), summing weights of parallel edges.
    let mut reduced: Vec<(i32, i32, W)> = Vec::with_capacity(remapped.len());
    for (src, dst, w) in remapped {
        match reduced.last_mut() {
            Some(last) if last.0 == src && last.1 == dst => {
                last.2 = last.2 + w;
            }
            _ => reduced.push((src, dst, w)),
        }
    }

    let mut new_offsets = vec![0i32; k + 1];
    for &(src, _, _) in &reduced {
        new_offsets[src as usize + 1] += 1;
    }
    for i in 0..k {
        new_offsets[i + 1] += new_offsets[i];
    }

    let new_indices: Vec<i32> = reduced.iter().map(|&(_, dst, _)| dst).collect();
    let new_weights: Vec<W> = reduced.iter().map(|&(_, _, w)| w).collect();

    Csr::from_parts_unchecked(new_offsets, new_indices, new_weights)
}

fn row_of(offsets: &[i32], edge: usize) -> usize {
    match offsets.binary_search(&(edge as i32)) {
        Ok(mut row) => {
            // Multiple rows can share the same starting offset (empty rows); walk forward
            // to the row this edge index actually belongs to.
            while row + 1 < offsets.len() && offsets[row + 1] as usize <= edge {
                row += 1;
            }
            row
        }
        Err(insertion) => insertion - 1,
    }
}
