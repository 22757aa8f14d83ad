/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::TransposedGraph;
use crate::graphs::csr_graph::CsrGraph;
use crate::traits::RandomAccessGraph;

/// Computes the inverse of `perm` into `inv_perm`.
///
/// # Panics
///
/// Panics if the two slices have different lengths.
pub fn invert_permutation(perm: &[usize], inv_perm: &mut [usize]) {
    assert_eq!(perm.len(), inv_perm.len());
    for (i, &x) in perm.iter().enumerate() {
        inv_perm[x] = i;
    }
}

/// Returns a copy of `graph` in which node `x` has become node `perm[x]`.
///
/// Both the transpose and the outdegrees are renumbered, so the result
/// describes the same graph up to isomorphism. Successor lists keep the
/// relative order of the original ones.
///
/// # Panics
///
/// Panics if the length of `perm` is not the number of nodes.
pub fn permute_transposed(graph: &TransposedGraph, perm: &[usize]) -> TransposedGraph {
    let num_nodes = graph.num_nodes();
    assert_eq!(
        perm.len(),
        num_nodes,
        "The permutation length ({}) does not match the number of nodes ({num_nodes})",
        perm.len()
    );
    let mut inv_perm = vec![0; num_nodes];
    invert_permutation(perm, &mut inv_perm);

    let csr = graph.csr();
    let mut offsets = Vec::with_capacity(num_nodes + 1);
    let mut indices = Vec::with_capacity(csr.num_arcs() as usize);
    let mut outdegrees = vec![0; num_nodes];
    offsets.push(0);
    for &old in &inv_perm {
        indices.extend(csr.successors(old).iter().map(|&u| perm[u]));
        offsets.push(indices.len());
    }
    for (old, &d) in graph.outdegrees().iter().enumerate() {
        outdegrees[perm[old]] = d;
    }

    TransposedGraph::from_parts(
        CsrGraph::from_parts(offsets.into(), indices.into()),
        outdegrees.into(),
    )
}
