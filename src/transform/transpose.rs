/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::csr_graph::CsrGraph;
use crate::traits::RandomAccessGraph;
use dsi_progress_logger::prelude::*;

/// Returns the transpose of the provided graph as a [`CsrGraph`].
///
/// The transpose is built by counting sort in two passes over the arcs, so
/// the successors of each node of the transpose (i.e., its predecessors in
/// the original graph) come out in increasing order.
pub fn transpose(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> CsrGraph {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(2 * num_nodes));
    pl.start("Transposing...");

    let mut offsets = vec![0; num_nodes + 1];
    for node in 0..num_nodes {
        for &succ in graph.successors(node) {
            offsets[succ + 1] += 1;
        }
        pl.light_update();
    }
    for node in 0..num_nodes {
        offsets[node + 1] += offsets[node];
    }

    let mut indices = vec![0; offsets[num_nodes]];
    let mut next = offsets.clone();
    for node in 0..num_nodes {
        for &succ in graph.successors(node) {
            indices[next[succ]] = node;
            next[succ] += 1;
        }
        pl.light_update();
    }
    pl.done();

    CsrGraph::from_parts(offsets.into(), indices.into())
}

/// The transpose of a graph in CSR form, annotated with the outdegree of each
/// node in the original graph.
///
/// This is the read-only view on which the PageRank iterations work: the
/// successors of a node in the transpose are the nodes its rank is pulled
/// from, and the outdegree (in the original graph) of those nodes determines
/// how their rank is split. Nodes with outdegree zero are *dangling*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransposedGraph {
    csr: CsrGraph,
    outdegrees: Box<[usize]>,
}

impl TransposedGraph {
    /// Creates a transposed graph from a CSR transpose and the outdegrees of
    /// the original graph.
    ///
    /// # Panics
    ///
    /// Panics if the number of outdegrees is not the number of nodes, or if
    /// the outdegrees are not coherent with the number of arcs.
    pub fn from_parts(csr: CsrGraph, outdegrees: Box<[usize]>) -> Self {
        assert_eq!(
            csr.num_nodes(),
            outdegrees.len(),
            "The number of outdegrees ({}) does not match the number of nodes ({})",
            outdegrees.len(),
            csr.num_nodes()
        );
        assert_eq!(
            outdegrees.iter().sum::<usize>() as u64,
            csr.num_arcs(),
            "The outdegrees do not sum to the number of arcs"
        );
        Self { csr, outdegrees }
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.outdegrees.len()
    }

    /// Returns the number of arcs.
    #[inline(always)]
    pub fn num_arcs(&self) -> u64 {
        self.csr.num_arcs()
    }

    /// Returns the CSR representation of the transpose.
    #[inline(always)]
    pub fn csr(&self) -> &CsrGraph {
        &self.csr
    }

    /// Returns the outdegree of each node in the original graph.
    #[inline(always)]
    pub fn outdegrees(&self) -> &[usize] {
        &self.outdegrees
    }

    /// Returns the dangling nodes (nodes with no successors in the original
    /// graph), in increasing order.
    pub fn dangling(&self) -> Box<[usize]> {
        self.outdegrees
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == 0)
            .map(|(node, _)| node)
            .collect()
    }

    pub fn into_inner(self) -> (CsrGraph, Box<[usize]>) {
        (self.csr, self.outdegrees)
    }
}

/// Returns the transpose of a graph together with the outdegree of its nodes.
pub fn transpose_with_degree(
    graph: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> TransposedGraph {
    let outdegrees = crate::traits::outdegrees(&graph);
    let csr = transpose(&graph, pl);
    TransposedGraph::from_parts(csr, outdegrees)
}
