/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Basic traits to access graphs.
//!
//! All graphs in this crate have nodes numbered from zero to
//! [`num_nodes`](RandomAccessGraph::num_nodes) (excluded), with no gaps.
//! Mapping external, possibly sparse, identifiers to this dense space is the
//! job of [`IdMap`](crate::utils::IdMap).

use impl_tools::autoimpl;
use std::rc::Rc;

/// A graph providing random access to the successors of each node.
///
/// Successors are returned as a slice; implementations in this crate return
/// them in increasing order, but algorithms must not rely on this property
/// unless they say so.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, Rc<S>)]
pub trait RandomAccessGraph {
    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs of the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node.
    ///
    /// # Panics
    ///
    /// Implementations panic if `node` is not smaller than
    /// [`num_nodes`](RandomAccessGraph::num_nodes).
    fn successors(&self, node: usize) -> &[usize];

    /// Returns the number of successors of a node.
    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).len()
    }
}

/// Returns the outdegrees of all nodes of a graph.
pub fn outdegrees(graph: impl RandomAccessGraph) -> Box<[usize]> {
    (0..graph.num_nodes())
        .map(|node| graph.outdegree(node))
        .collect()
}

/// Returns true if the two graphs have the same nodes and the same successor
/// lists, in the same order.
pub fn eq(g0: impl RandomAccessGraph, g1: impl RandomAccessGraph) -> bool {
    g0.num_nodes() == g1.num_nodes()
        && g0.num_arcs() == g1.num_arcs()
        && (0..g0.num_nodes()).all(|node| g0.successors(node) == g1.successors(node))
}
