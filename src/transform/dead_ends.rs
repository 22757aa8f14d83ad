/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::VecGraph;
use crate::traits::RandomAccessGraph;

/// Adds a self-loop to every node with no successors, and returns the number
/// of loops added.
///
/// After this transformation the graph has no dangling nodes, so the
/// dangling-rank correction of the PageRank iterations becomes a no-op and
/// every component can be iterated on its own. Note that this changes the
/// Markov chain: the rank of a former dead end is no longer redistributed
/// uniformly, but kept on the node itself.
pub fn loop_dead_ends(graph: &mut VecGraph) -> usize {
    let mut added = 0;
    for node in 0..graph.num_nodes() {
        if graph.outdegree(node) == 0 {
            graph.add_arc(node, node);
            added += 1;
        }
    }
    log::info!("Added {} self-loops to dead ends", added);
    added
}
