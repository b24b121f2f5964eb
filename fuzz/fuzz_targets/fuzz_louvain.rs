#![no_main]

use libfuzzer_sys::fuzz_target;
use louvain_core::{louvain, Csr, LouvainConfig};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let num_nodes = (data[0] as usize % 30) + 1; // 1-30 nodes
    let num_edges = data[1] as usize % 50;

    let mut edges: Vec<(i32, i32, f64)> = Vec::new();
    for i in 0..num_edges.min((data.len().saturating_sub(2)) / 2) {
        let src = (data[2 + i * 2] as usize % num_nodes) as i32;
        let dst = (data[3 + i * 2] as usize % num_nodes) as i32;
        let weight = (data[2 + i * 2] as f64) / 255.0 + 0.01;
        edges.push((src, dst, weight));
    }

    let graph: Csr<f64> = match Csr::from_undirected_edges(num_nodes, &edges) {
        Ok(g) => g,
        Err(_) => return,
    };

    // Louvain must never panic on any structurally valid graph, regardless of shape.
    let result = louvain(&graph, &LouvainConfig::default());
    if let Ok(result) = result {
        assert_eq!(result.labels.len(), num_nodes);
        assert!(result.labels.iter().all(|&l| l >= 0));
    }
});
