/*!
# Engine Configuration

Bundles the safety knobs for the dendrogram driver. No speculative configuration is added
beyond the outer-iteration cap and the inner loop's convergence tolerance.
*/

use crate::core::weight::Weight;

/// Safety caps for a single [`crate::community::louvain::louvain`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LouvainConfig<W: Weight> {
    /// Caller-supplied cap on outer (dendrogram) iterations. A safety bound, not expected
    /// to trigger in practice on well-formed input.
    pub max_iter: usize,

    /// Convergence tolerance for the inner loop: a sweep's modularity gain must exceed
    /// this to count as an improvement. Defaults to `1e-4`.
    pub tolerance: W,
}

impl<W: Weight> Default for LouvainConfig<W> {
    fn default() -> Self {
        LouvainConfig {
            max_iter: 128,
            tolerance: W::CONVERGENCE_TOLERANCE,
        }
    }
}

impl<W: Weight> LouvainConfig<W> {
    /// Creates a config with the given outer-iteration cap and the default tolerance.
    pub fn with_max_iter(max_iter: usize) -> Self {
        LouvainConfig {
            max_iter,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg: LouvainConfig<f64> = LouvainConfig::default();
        assert_eq!(cfg.max_iter, 128);
        assert!((cfg.tolerance - 1e-4).abs() < 1e-12);
    }

    #[test]
    fn test_with_max_iter() {
        let cfg: LouvainConfig<f64> = LouvainConfig::with_max_iter(4);
        assert_eq!(cfg.max_iter, 4);
    }
}
