/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use levelrank::algo::*;
use levelrank::graphs::vec_graph::VecGraph;
use levelrank::traits::RandomAccessGraph;
use levelrank::transform::transpose_with_degree;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Checks that every arc between different components goes from a larger
/// component index to a smaller one.
fn assert_reverse_topological(graph: &VecGraph, sccs: &Sccs) {
    let components = sccs.components();
    for u in 0..graph.num_nodes() {
        for &v in graph.successors(u) {
            assert!(
                components[u] >= components[v],
                "Arc {u} -> {v} goes from component {} to component {}",
                components[u],
                components[v]
            );
        }
    }
}

/// Checks that `groups` is a valid topologically ordered partition of the
/// nodes of `graph`.
fn assert_valid_groups(graph: &VecGraph, groups: &LevelGroups, min_group_size: usize) {
    let num_nodes = graph.num_nodes();
    let perm = groups.perm();
    assert_eq!(perm.len(), num_nodes);
    let mut seen = vec![false; num_nodes];
    for &x in perm {
        assert!(!seen[x], "{x} appears twice in the permutation");
        seen[x] = true;
    }

    assert_eq!(groups.sizes().iter().sum::<usize>(), num_nodes);
    let num_groups = groups.num_groups();
    for (i, &size) in groups.sizes().iter().enumerate() {
        assert!(size > 0);
        if i + 1 < num_groups {
            assert!(size >= min_group_size);
        }
    }

    let mut group = vec![0; num_nodes];
    for (i, range) in groups.ranges().enumerate() {
        for x in range {
            group[x] = i;
        }
    }
    for u in 0..num_nodes {
        for &v in graph.successors(u) {
            assert!(
                group[perm[u]] <= group[perm[v]],
                "Arc {u} -> {v} goes back from group {} to group {}",
                group[perm[u]],
                group[perm[v]]
            );
        }
    }
}

#[test]
fn test_compute_sizes() -> Result<()> {
    let sccs = Sccs::new(3, vec![0, 0, 0, 1, 2, 2, 1, 2, 0, 0].into_boxed_slice());
    assert_eq!(sccs.compute_sizes(), vec![5, 2, 3].into_boxed_slice());
    Ok(())
}

#[test]
fn test_buckets() -> Result<()> {
    let arcs = [
        (0, 0),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (4, 3),
        (5, 5),
        (5, 6),
        (5, 7),
        (5, 8),
        (6, 7),
        (8, 7),
    ];
    let graph = VecGraph::from_arcs(arcs);
    let sccs = tarjan(&graph, no_logging![]);

    assert_eq!(sccs.num_components(), 7);
    assert_eq!(sccs.components()[1], sccs.components()[2]);
    assert_eq!(sccs.components()[3], sccs.components()[4]);
    let mut sizes = sccs.compute_sizes().into_vec();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(sizes, vec![2, 2, 1, 1, 1, 1, 1]);
    assert_reverse_topological(&graph, &sccs);

    Ok(())
}

#[test]
fn test_buckets_2() -> Result<()> {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
    let sccs = tarjan(&graph, no_logging![]);

    assert_eq!(sccs.num_components(), 2);
    assert_eq!(sccs.components(), &[1, 1, 1, 0]);

    Ok(())
}

#[test]
fn test_cycle() -> Result<()> {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 3), (3, 0)]);
    let sccs = tarjan(&graph, no_logging![]);
    assert_eq!(sccs.compute_sizes(), vec![4].into_boxed_slice());
    Ok(())
}

#[test]
fn test_tree() -> Result<()> {
    let graph = VecGraph::from_arcs([(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]);
    let sccs = tarjan(&graph, no_logging![]);
    assert_eq!(sccs.num_components(), 7);
    assert_reverse_topological(&graph, &sccs);
    Ok(())
}

#[test]
fn test_long_path() -> Result<()> {
    // Deep enough to overflow the stack of a recursive visit
    let n = 1_000_000;
    let graph = VecGraph::from_arcs((0..n - 1).map(|x| (x, x + 1)));
    let sccs = tarjan(&graph, no_logging![]);
    assert_eq!(sccs.num_components(), n);
    // The last node is a sink, so it is emitted first
    assert_eq!(sccs.components()[n - 1], 0);
    assert_eq!(sccs.components()[0], n - 1);
    Ok(())
}

#[test]
fn test_random() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    let n = 500;
    let mut graph = VecGraph::empty(n);
    for _ in 0..700 {
        graph.add_arc(rng.random_range(0..n), rng.random_range(0..n));
    }
    let sccs = tarjan(&graph, no_logging![]);
    assert_reverse_topological(&graph, &sccs);
    Ok(())
}

#[test]
fn test_reach_dangling() -> Result<()> {
    // 2 <-> 3 cannot reach the dangling node 4
    let graph = VecGraph::from_arcs([(0, 1), (1, 0), (1, 2), (2, 3), (3, 2), (0, 4)]);
    let transpose = transpose_with_degree(&graph, no_logging![]);
    let reaching = reach_dangling(&transpose, no_logging![]);
    assert_eq!(reaching.as_ref(), &[true, true, false, false, true]);
    Ok(())
}

#[test]
fn test_level_groups_without_dangling() -> Result<()> {
    // Two cycles, the first one feeding the second one
    let graph = VecGraph::from_arcs([(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]);
    let transpose = transpose_with_degree(&graph, no_logging![]);

    let groups = level_groups(&graph, &transpose, 1, no_logging![]);
    assert_eq!(groups.sizes(), &[2, 2]);
    assert_eq!(groups.perm(), &[0, 1, 2, 3]);
    assert_eq!(groups.ranges().collect::<Vec<_>>(), vec![0..2, 2..4]);
    assert_valid_groups(&graph, &groups, 1);

    // Components are joined until the minimum size is reached
    for min_group_size in [3, 4, 5] {
        let groups = level_groups(&graph, &transpose, min_group_size, no_logging![]);
        assert_eq!(groups.sizes(), &[4]);
    }

    Ok(())
}

#[test]
fn test_level_groups_with_dangling() -> Result<()> {
    let graph = VecGraph::from_arcs([(0, 1), (1, 0), (1, 2), (2, 3), (3, 2), (0, 4)]);
    let transpose = transpose_with_degree(&graph, no_logging![]);

    // The nodes reaching the dangling node 4 come first
    let groups = level_groups(&graph, &transpose, 1, no_logging![]);
    assert_eq!(groups.sizes(), &[3, 2]);
    assert_eq!(groups.perm(), &[0, 1, 3, 4, 2]);
    assert_valid_groups(&graph, &groups, 1);

    // Everything reaches a dangling node
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (3, 0)]);
    let transpose = transpose_with_degree(&graph, no_logging![]);
    let groups = level_groups(&graph, &transpose, 1, no_logging![]);
    assert_eq!(groups.sizes(), &[4]);

    Ok(())
}

#[test]
fn test_level_groups_random() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(1);
    let n = 300;
    let mut graph = VecGraph::empty(n);
    // Mostly forward arcs, so that there are many components
    for _ in 0..600 {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u < v || rng.random_bool(0.05) {
            graph.add_arc(u, v);
        }
    }
    let transpose = transpose_with_degree(&graph, no_logging![]);
    for min_group_size in [1, 2, 5, 10, 50, 100, n, 2 * n] {
        let groups = level_groups(&graph, &transpose, min_group_size, no_logging![]);
        assert_valid_groups(&graph, &groups, min_group_size);
    }
    Ok(())
}

#[test]
fn test_level_groups_empty() -> Result<()> {
    let graph = VecGraph::new();
    let transpose = transpose_with_degree(&graph, no_logging![]);
    let groups = level_groups(&graph, &transpose, 10, no_logging![]);
    assert_eq!(groups.num_groups(), 0);
    assert!(groups.perm().is_empty());
    Ok(())
}
