/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::monolithic::{iterate, Buffers};
use super::{PagerankOptions, PagerankResult, RankValue};
use crate::algo::level_groups;
use crate::traits::RandomAccessGraph;
use crate::transform::{permute_transposed, TransposedGraph};
use crate::utils::measure_duration;
use dsi_progress_logger::{no_logging, ProgressLog};
use std::ops::Range;
use std::time::Duration;

/// Computes PageRank iterating on topologically ordered groups of strongly
/// connected components.
///
/// The nodes are partitioned into groups of at least
/// [`min_group_size`](PagerankOptions::min_group_size) nodes using
/// [`level_groups`]. Groups are then processed in order: each group is
/// iterated, using the final ranks of the groups it depends on, until the
/// maximum absolute difference between two successive approximations of its
/// own nodes is below the tolerance (or the maximum number of iterations has
/// been reached). The fixed point is the same as that of
/// [`pagerank_monolithic`](super::pagerank_monolithic).
///
/// The returned ranks, like the monolithic ones, are within a
/// tolerance-dependent distance from the fixed point: every node stops within
/// about *tol*·*p*/(1 − *p*) of its rank, so the sum of the ranks, and their
/// ℓ₁ distance from the monolithic ranks, can be off by up to *N* times that
/// amount. Since errors of a group propagate to the following ones, the two
/// strategies agree to the last digits only with a tight tolerance.
///
/// `graph` is used to compute the groups, `transpose` (which must be its
/// transpose) to iterate. The reported number of iterations is the largest
/// number of iterations performed by a single group. The reported duration
/// covers the iterations only, not the computation of the groups.
///
/// # Panics
///
/// Panics if `initial` has not length equal to the number of nodes, or if
/// `graph` and `transpose` have a different number of nodes.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use levelrank::graphs::vec_graph::VecGraph;
/// use levelrank::rank::*;
/// use levelrank::transform::transpose_with_degree;
///
/// // Two cycles, the first one feeding the second one
/// let graph = VecGraph::from_arcs([(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]);
/// let transpose = transpose_with_degree(&graph, no_logging![]);
/// let options = PagerankOptions::<f64>::default().with_tolerance(1E-12);
///
/// let monolithic = pagerank_monolithic(&transpose, None, &options);
/// let levelwise = pagerank_levelwise(&graph, &transpose, None, &options);
///
/// assert!(vector::abs_error(&monolithic.ranks, &levelwise.ranks) < 1E-9);
/// ```
pub fn pagerank_levelwise<T: RankValue>(
    graph: impl RandomAccessGraph,
    transpose: &TransposedGraph,
    initial: Option<&[T]>,
    options: &PagerankOptions<T>,
) -> PagerankResult<T> {
    pagerank_levelwise_with_logging(graph, transpose, initial, options, no_logging![])
}

/// Computes PageRank iterating on topologically ordered groups of strongly
/// connected components, logging the computation of the groups.
///
/// See [`pagerank_levelwise`].
pub fn pagerank_levelwise_with_logging<T: RankValue>(
    graph: impl RandomAccessGraph,
    transpose: &TransposedGraph,
    initial: Option<&[T]>,
    options: &PagerankOptions<T>,
    pl: &mut impl ProgressLog,
) -> PagerankResult<T> {
    let n = transpose.num_nodes();
    if let Some(q) = initial {
        assert_eq!(
            q.len(),
            n,
            "Initial vector length ({}) does not match the number of nodes ({n})",
            q.len()
        );
    }
    if n == 0 {
        return PagerankResult {
            ranks: vec![],
            iterations: 0,
            time: Duration::ZERO,
        };
    }

    let groups = level_groups(&graph, transpose, options.min_group_size(), pl);
    let perm = groups.perm();
    let permuted = permute_transposed(transpose, perm);
    let initial = initial.map(|q| {
        let mut permuted_q = vec![T::zero(); n];
        for (x, &value) in q.iter().enumerate() {
            permuted_q[perm[x]] = value;
        }
        permuted_q
    });
    // All dangling nodes are in the first group
    let dangling = permuted.dangling();
    let ranges = groups.ranges().collect::<Vec<Range<usize>>>();

    log::info!("Damping: {:?}", options.damping());
    log::info!("Tolerance: {:?}", options.tolerance());
    log::info!("{} dangling nodes", dangling.len());

    let mut buffers = Buffers::new(n);
    let ((iterations, work), time) = measure_duration(options.repeat(), || {
        buffers.init(permuted.outdegrees(), initial.as_deref(), options.damping());
        let mut max_iterations = 0;
        let mut work = 0;
        for range in &ranges {
            let iterations = iterate(
                &mut buffers,
                permuted.csr(),
                &dangling,
                range.clone(),
                options,
            );
            buffers.settle(range.clone());
            log::debug!("Group {:?}: {} iterations", range, iterations);
            max_iterations = max_iterations.max(iterations);
            work += iterations * range.len();
        }
        (max_iterations, work)
    });

    log::info!(
        "Levelwise PageRank: {} groups, at most {} iterations per group ({:.3} full-sweep equivalents) in {:?}",
        ranges.len(),
        iterations,
        work as f64 / n as f64,
        time
    );

    PagerankResult {
        ranks: perm.iter().map(|&x| buffers.a[x]).collect(),
        iterations,
        time,
    }
}
