/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::sccs::tarjan;
use crate::traits::RandomAccessGraph;
use crate::transform::TransposedGraph;
use dsi_progress_logger::ProgressLog;
use std::ops::Range;

/// Returns, for each node, whether it can reach a dangling node (a node
/// without successors) in the original graph.
///
/// Dangling nodes reach themselves. The visit follows the arcs of the
/// transpose, that is, it walks the original graph backwards.
pub fn reach_dangling(transpose: &TransposedGraph, pl: &mut impl ProgressLog) -> Box<[bool]> {
    let num_nodes = transpose.num_nodes();
    pl.item_name("node");
    pl.expected_updates(None);
    pl.start("Computing the nodes reaching dangling nodes...");

    let csr = transpose.csr();
    let mut seen = vec![false; num_nodes].into_boxed_slice();
    let mut stack = transpose.dangling().into_vec();
    for &node in &stack {
        seen[node] = true;
    }
    while let Some(node) = stack.pop() {
        pl.light_update();
        for &pred in csr.successors(node) {
            if !seen[pred] {
                seen[pred] = true;
                stack.push(pred);
            }
        }
    }

    pl.done();
    seen
}

/// A partition of the nodes of a graph into topologically ordered groups.
///
/// Groups are numbered so that every arc of the original graph goes from a
/// group to the same or a later one: thus, when the rank of group *j* is
/// computed, the rank of every node it depends on is either in group *j*
/// or already final. Each group is a union of strongly connected components
/// and has at least the requested minimum size, except possibly the last
/// one.
///
/// The [permutation](LevelGroups::perm) maps each node to a new index such
/// that group *i* occupies a contiguous [range](LevelGroups::ranges) of
/// indices, ranges following the order of the groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGroups {
    perm: Box<[usize]>,
    sizes: Box<[usize]>,
}

impl LevelGroups {
    /// Returns the number of groups.
    pub fn num_groups(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the size of each group, in processing order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the permutation making groups contiguous: node `x` is
    /// renumbered `perm()[x]`.
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Returns the ranges of renumbered nodes occupied by each group, in
    /// processing order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.sizes.iter().scan(0, |start, &size| {
            let range = *start..*start + size;
            *start += size;
            Some(range)
        })
    }
}

/// Partitions the nodes of a graph into topologically ordered groups of at
/// least `min_group_size` nodes.
///
/// The strongly connected components of `graph` are listed in topological
/// order and consecutive components are joined until their total size
/// reaches `min_group_size`. Since the rank of dangling nodes is
/// redistributed to every node, all nodes that can reach a dangling node
/// depend on each other: they are fused into a single block which comes
/// first (no arc can enter it from outside).
///
/// `transpose` must be the transpose of `graph`.
///
/// # Panics
///
/// Panics if `min_group_size` is zero or if the two graphs have a different
/// number of nodes.
pub fn level_groups(
    graph: impl RandomAccessGraph,
    transpose: &TransposedGraph,
    min_group_size: usize,
    pl: &mut impl ProgressLog,
) -> LevelGroups {
    assert!(min_group_size > 0, "The minimum group size must be positive");
    let num_nodes = graph.num_nodes();
    assert_eq!(
        num_nodes,
        transpose.num_nodes(),
        "The graph and its transpose have a different number of nodes"
    );

    let sccs = tarjan(&graph, pl);
    let reaching = reach_dangling(transpose, pl);

    // Block 0 is the dangling closure; component c (numbered in reverse
    // topological order) becomes block num_components - c
    let num_components = sccs.num_components();
    let num_blocks = num_components + 1;
    let block = sccs
        .components()
        .iter()
        .zip(reaching.iter())
        .map(|(&c, &r)| if r { 0 } else { num_components - c })
        .collect::<Box<[usize]>>();

    let mut block_sizes = vec![0; num_blocks];
    for &b in block.iter() {
        block_sizes[b] += 1;
    }

    let mut sizes = Vec::new();
    let mut current = 0;
    for &size in block_sizes.iter().filter(|&&size| size != 0) {
        current += size;
        if current >= min_group_size {
            sizes.push(current);
            current = 0;
        }
    }
    if current != 0 {
        sizes.push(current);
    }

    // Groups are runs of consecutive blocks, so a stable counting sort by
    // block makes every group contiguous
    let mut next = Vec::with_capacity(num_blocks);
    let mut start = 0;
    for &size in &block_sizes {
        next.push(start);
        start += size;
    }
    let mut perm = vec![0; num_nodes].into_boxed_slice();
    for (node, &b) in block.iter().enumerate() {
        perm[node] = next[b];
        next[b] += 1;
    }

    log::info!(
        "{} groups of at least {} nodes ({} nodes reach dangling nodes)",
        sizes.len(),
        min_group_size,
        block_sizes[0]
    );

    LevelGroups {
        perm,
        sizes: sizes.into(),
    }
}
