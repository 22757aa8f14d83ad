/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;

/// A compressed sparse-row graph.
///
/// The graph is stored as two arrays: the *source offsets* (sometimes called
/// the degree-cumulative function), of length *n* + 1, and the *destination
/// indices*, of length equal to the number of arcs. The successors of node
/// *v* are the destination indices in positions
/// `source_offsets[v]..source_offsets[v + 1]`.
///
/// A CSR graph is immutable: it is built once from another graph (or from
/// its parts) and then only read. When it represents the transpose of a
/// graph, the successors of a node are its predecessors in the original
/// graph, which is what a pull-based PageRank iteration needs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    offsets: Box<[usize]>,
    indices: Box<[usize]>,
}

impl core::default::Default for CsrGraph {
    fn default() -> Self {
        Self {
            offsets: vec![0].into(),
            indices: vec![].into(),
        }
    }
}

impl CsrGraph {
    /// Creates an empty CSR graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new CSR graph from the given source offsets and destination
    /// indices.
    ///
    /// # Panics
    ///
    /// Panics if the offsets are empty, not monotone, or do not end with the
    /// number of destination indices, or if some destination index is not
    /// smaller than the number of nodes.
    pub fn from_parts(offsets: Box<[usize]>, indices: Box<[usize]>) -> Self {
        assert!(!offsets.is_empty(), "The offsets must contain at least 0");
        assert_eq!(offsets[0], 0, "The first offset must be 0");
        assert!(
            offsets.windows(2).all(|w| w[0] <= w[1]),
            "The offsets must be monotone"
        );
        assert_eq!(
            offsets[offsets.len() - 1],
            indices.len(),
            "The last offset must be equal to the number of indices"
        );
        let num_nodes = offsets.len() - 1;
        if let Some(&max) = indices.iter().max() {
            assert!(
                max < num_nodes,
                "Index {max} out of range (the graph has {num_nodes} nodes)"
            );
        }
        Self { offsets, indices }
    }

    /// Creates a new CSR graph with the same successor lists of the given
    /// graph.
    pub fn from_graph(graph: impl RandomAccessGraph) -> Self {
        let num_nodes = graph.num_nodes();
        let mut offsets = Vec::with_capacity(num_nodes + 1);
        let mut indices = Vec::with_capacity(graph.num_arcs() as usize);
        offsets.push(0);
        for node in 0..num_nodes {
            indices.extend_from_slice(graph.successors(node));
            offsets.push(indices.len());
        }
        Self {
            offsets: offsets.into(),
            indices: indices.into(),
        }
    }

    /// Returns the source offsets (length *n* + 1).
    #[inline(always)]
    pub fn source_offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Returns the destination indices (length equal to the number of arcs).
    #[inline(always)]
    pub fn destination_indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_inner(self) -> (Box<[usize]>, Box<[usize]>) {
        (self.offsets, self.indices)
    }
}

impl RandomAccessGraph for CsrGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.indices.len() as u64
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.indices[self.offsets[node]..self.offsets[node + 1]]
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }
}
