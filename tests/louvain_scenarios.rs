use louvain_core::{louvain, Csr, LouvainConfig, LouvainError};

fn same_cluster(labels: &[i32], a: usize, b: usize) -> bool {
    labels[a] == labels[b]
}

#[test]
fn triangle_collapses_to_one_cluster() {
    let graph: Csr<f64> =
        Csr::new(vec![0, 2, 4, 6], vec![1, 2, 0, 2, 0, 1], vec![1.0; 6]).unwrap();
    let result = louvain(&graph, &LouvainConfig::default()).unwrap();

    assert_eq!(result.labels, vec![0, 0, 0]);
    assert!(result.best_modularity.abs() < 1e-6);
}

#[test]
fn two_disjoint_triangles_split_with_half_modularity() {
    let edges: Vec<(i32, i32, f64)> = vec![
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 0, 1.0),
        (3, 4, 1.0),
        (4, 5, 1.0),
        (5, 3, 1.0),
    ];
    let graph = Csr::from_undirected_edges(6, &edges).unwrap();
    let result = louvain(&graph, &LouvainConfig::default()).unwrap();

    assert!(same_cluster(&result.labels, 0, 1));
    assert!(same_cluster(&result.labels, 1, 2));
    assert!(same_cluster(&result.labels, 3, 4));
    assert!(same_cluster(&result.labels, 4, 5));
    assert!(!same_cluster(&result.labels, 0, 3));
    assert!((result.best_modularity - 0.5).abs() < 1e-6);
}

#[test]
fn path_of_three_vertices_merges_into_one_cluster() {
    let graph: Csr<f64> = Csr::new(vec![0, 1, 3, 4], vec![1, 0, 2, 1], vec![1.0; 4]).unwrap();
    let result = louvain(&graph, &LouvainConfig::default()).unwrap();

    assert!(same_cluster(&result.labels, 0, 1));
    assert!(same_cluster(&result.labels, 1, 2));
    assert!(result.best_modularity.abs() < 1e-6);
}

#[test]
fn bowtie_splits_along_the_shared_vertex() {
    // Two triangles {0,1,2} and {2,3,4} sharing vertex 2. Vertex 2's adjacency list puts
    // 0 and 1 (its first triangle) before 3 and 4, and its pull towards {0,1} is strictly
    // larger (they already see each other), so it joins that side, leaving {3,4} as a pair.
    let edges: Vec<(i32, i32, f64)> = vec![
        (0, 1, 1.0),
        (0, 2, 1.0),
        (1, 2, 1.0),
        (2, 3, 1.0),
        (2, 4, 1.0),
        (3, 4, 1.0),
    ];
    let graph = Csr::from_undirected_edges(5, &edges).unwrap();
    let result = louvain(&graph, &LouvainConfig::default()).unwrap();

    assert!(same_cluster(&result.labels, 0, 1));
    assert_eq!(result.labels[2], result.labels[0]);
    assert!(same_cluster(&result.labels, 3, 4));
    assert_ne!(result.labels[2], result.labels[3]);
    assert_eq!(
        result.labels.iter().filter(|&&c| c == result.labels[0]).count(),
        3
    );
    assert_eq!(
        result.labels.iter().filter(|&&c| c == result.labels[3]).count(),
        2
    );
}

#[test]
fn disconnected_pair_is_independent_of_edge_weight() {
    for &w in &[0.5_f64, 1.0, 10.0] {
        let graph: Csr<f64> = Csr::from_undirected_edges(4, &[(0, 1, w), (2, 3, w)]).unwrap();
        let result = louvain(&graph, &LouvainConfig::default()).unwrap();

        assert!(same_cluster(&result.labels, 0, 1));
        assert!(same_cluster(&result.labels, 2, 3));
        assert!(!same_cluster(&result.labels, 0, 2));
        assert!((result.best_modularity - 0.5).abs() < 1e-6);
    }
}

#[test]
fn degenerate_two_vertices_no_edges() {
    let graph: Csr<f64> = Csr::new(vec![0, 0, 0], vec![], vec![]).unwrap();
    let result = louvain(&graph, &LouvainConfig::default()).unwrap();

    assert_eq!(result.levels, 0);
    assert_eq!(result.labels, vec![0, 1]);
    assert_eq!(result.best_modularity, 0.0);
}

#[test]
fn single_vertex_graph() {
    let graph: Csr<f64> = Csr::new(vec![0, 0], vec![], vec![]).unwrap();
    let result = louvain(&graph, &LouvainConfig::default()).unwrap();

    assert_eq!(result.levels, 0);
    assert_eq!(result.labels, vec![0]);
    assert_eq!(result.best_modularity, 0.0);
}

#[test]
fn single_self_loop_only() {
    let graph: Csr<f64> = Csr::new(vec![0, 1], vec![0], vec![4.0]).unwrap();
    let result = louvain(&graph, &LouvainConfig::default()).unwrap();

    assert_eq!(result.labels, vec![0]);
    assert!(result.best_modularity.abs() < 1e-6);
}

#[test]
fn rejects_malformed_csr_at_construction() {
    let err = Csr::<f64>::new(vec![0, 3, 1], vec![0, 0, 0], vec![1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, LouvainError::InvalidGraph(_)));
}

#[test]
fn max_iter_caps_dendrogram_depth() {
    let edges: Vec<(i32, i32, f64)> = vec![
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 0, 1.0),
        (3, 4, 1.0),
        (4, 5, 1.0),
        (5, 3, 1.0),
    ];
    let graph = Csr::from_undirected_edges(6, &edges).unwrap();
    let config = LouvainConfig::with_max_iter(0);
    let result = louvain(&graph, &config).unwrap();

    assert_eq!(result.levels, 0);
    assert_eq!(result.labels, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn disjoint_cliques_hit_the_closed_form_modularity() {
    // Four disjoint triangles: exact modularity for k equal-sized cliques in a
    // disjoint union is 1 - k * (clique_weight / m2)^2.
    let num_cliques = 4;
    let mut edges: Vec<(i32, i32, f64)> = Vec::new();
    for c in 0..num_cliques {
        let base = (c * 3) as i32;
        edges.push((base, base + 1, 1.0));
        edges.push((base + 1, base + 2, 1.0));
        edges.push((base + 2, base, 1.0));
    }
    let graph = Csr::from_undirected_edges(num_cliques * 3, &edges).unwrap();
    let result = louvain(&graph, &LouvainConfig::default()).unwrap();

    let m2 = graph.total_edge_weight();
    let clique_weight = 6.0; // each triangle contributes 6 to m2 (3 edges x 2 directions)
    let expected = 1.0 - (num_cliques as f64) * (clique_weight / m2).powi(2);

    for c in 0..num_cliques {
        let base = c * 3;
        assert!(same_cluster(&result.labels, base, base + 1));
        assert!(same_cluster(&result.labels, base + 1, base + 2));
    }
    assert!((result.best_modularity - expected).abs() < 1e-6);
}
