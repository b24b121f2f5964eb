/*!
# Dendrogram Driver

Alternates the inner optimize loop (the modularity evaluator and local-move sweep) with
cluster compaction and graph contraction, advancing one dendrogram level per outer
iteration, until a level completes with no vertex having moved. This is the crate's
single public entry point.
*/

use tracing::{debug, trace};

use crate::community::louvain::compact::compact;
use crate::community::louvain::contract::contract;
use crate::community::louvain::degrees::vertex_weights;
use crate::community::louvain::modularity::modularity;
use crate::community::louvain::sweep::sweep;
use crate::core::config::LouvainConfig;
use crate::core::error::Result;
use crate::core::weight::Weight;
use crate::graph::csr::Csr;

/// The result of a completed `louvain` run.
#[derive(Debug, Clone, PartialEq)]
pub struct LouvainResult<W: Weight> {
    /// Modularity of the deepest completed level.
    pub best_modularity: W,
    /// Number of outer iterations (dendrogram levels) performed.
    pub levels: usize,
    /// Final cluster label of every original-graph vertex, in `[0, k)`.
    pub labels: Vec<i32>,
}

/// Runs Louvain modularity maximization on `graph`, returning the deepest completed
/// level's modularity, the dendrogram depth, and each original vertex's final label.
///
/// `m2 == 0` (an edgeless graph, or the single-vertex graph) is a legitimate degenerate
/// input rather than a fatal error: the run short-circuits before the inner loop, which
/// would otherwise divide by `m2`, and reports `levels = 0`, `best_modularity = 0`, with
/// `labels` set to the identity.
pub fn louvain<W: Weight>(graph: &Csr<W>, config: &LouvainConfig<W>) -> Result<LouvainResult<W>> {
    let n0 = graph.node_count();
    let mut labels: Vec<i32> = (0..n0 as i32).collect();

    let m2 = graph.total_edge_weight();
    if m2 == W::ZERO {
        debug!(n0, "m2 is zero; returning the identity clustering");
        return Ok(LouvainResult {
            best_modularity: W::ZERO,
            levels: 0,
            labels,
        });
    }

    let mut working = graph.clone();
    let mut best_modularity = W::ZERO;
    let mut levels = 0usize;

    while levels < config.max_iter {
        let n = working.node_count();
        let k = vertex_weights(&working);
        let mut sigma = k.clone();
        let mut community: Vec<i32> = (0..n as i32).collect();

        best_modularity = inner_loop(&working, &k, &mut sigma, &mut community, m2, config)?;

        let moved = community.iter().enumerate().any(|(v, &c)| c != v as i32);
        if !moved {
            debug!(level = levels, "no vertex moved; stopping");
            break;
        }

        let kk = compact(&mut community, &mut labels);
        trace!(level = levels, clusters = kk, "compacted clusters");

        working = contract(&working, &community, kk);
        levels += 1;
        debug!(level = levels, clusters = kk, q = best_modularity.to_f64(), "level complete");
    }

    Ok(LouvainResult {
        best_modularity,
        levels,
        labels,
    })
}

fn inner_loop<W: Weight>(
    graph: &Csr<W>,
    k: &[W],
    sigma: &mut [W],
    community: &mut [i32],
    m2: W,
    config: &LouvainConfig<W>,
) -> Result<W> {
    let mut new_q = modularity(graph, community, k, sigma, m2)?;
    let mut cur_q = new_q - W::from_f64(1.0);

    while new_q.to_f64() > cur_q.to_f64() + config.tolerance.to_f64() {
        cur_q = new_q;
        sweep(graph, k, sigma, community, m2)?;
        new_q = modularity(graph, community, k, sigma, m2)?;
        trace!(q = new_q.to_f64(), "sweep complete");
    }

    Ok(new_q)
}
