/*!
# Cluster Compactor

After a sweep converges, surviving cluster ids may be sparse in `[0, n)`. This renumbers
them to a dense range `[0, k)` and propagates the mapping through to the top-level label
vector.
*/

/// Renumbers `community` to a dense `[0, k)` range and folds the mapping into `labels`
/// (`labels[j] <- mapping[community_before[labels[j]]]`, expressed here as a direct
/// `labels[j] <- community[labels[j]]` after `community` itself has been rewritten).
///
/// Returns `k`, the number of surviving clusters.
pub(crate) fn compact(community: &mut [i32], labels: &mut [i32]) -> usize {
    let mut surviving: Vec<i32> = community.to_vec();
    surviving.sort_unstable();
    surviving.dedup();

    let k = surviving.len();

    // M[U[i]] = i; entries for ids that don't survive are never read (sentinel -1).
    let max_id = surviving.last().copied().unwrap_or(0) as usize;
    let mut inverse = vec![-1i32; max_id + 1];
    for (i, &id) in surviving.iter().enumerate() {
        inverse[id as usize] = i as i32;
    }

    for c in community.iter_mut() {
        *c = inverse[*c as usize];
    }
    for l in labels.iter_mut() {
        *l = community[*l as usize];
    }

    k
}
