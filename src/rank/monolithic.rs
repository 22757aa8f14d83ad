/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::vector::{copy, fill, grouped_sum, max_abs_diff, multiply};
use super::{PagerankOptions, PagerankResult, RankValue};
use crate::graphs::csr_graph::CsrGraph;
use crate::transform::TransposedGraph;
use crate::utils::measure_duration;
use std::ops::Range;
use std::time::Duration;

/// The working vectors of a PageRank computation.
///
/// `a` is the approximation being computed, `r` the previous one, `f` the
/// rank factor *p* / *d*(*u*) of each node and `c` the contribution
/// `r[u] * f[u]` each node passes to its successors. The vectors `a` and `r`
/// are swapped at the end of each iteration.
pub(crate) struct Buffers<T> {
    pub(crate) a: Vec<T>,
    pub(crate) r: Vec<T>,
    pub(crate) f: Vec<T>,
    pub(crate) c: Vec<T>,
}

impl<T: RankValue> Buffers<T> {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            a: vec![T::zero(); n],
            r: vec![T::zero(); n],
            f: vec![T::zero(); n],
            c: vec![T::zero(); n],
        }
    }

    /// Seeds `r` and `a` with `initial` (or the uniform distribution) and
    /// computes the rank factors.
    ///
    /// Outside the range being iterated `a` and `r` stay equal, so swapping
    /// them leaves the ranks of other nodes untouched.
    pub(crate) fn init(&mut self, outdegrees: &[usize], initial: Option<&[T]>, damping: T) {
        let n = self.r.len();
        match initial {
            Some(q) => copy(&mut self.r, q),
            None => fill(&mut self.r, T::one() / T::from_count(n)),
        }
        copy(&mut self.a, &self.r);
        factor(&mut self.f, outdegrees, damping);
    }

    /// Makes the last approximation of `range` final: it is copied into `r`,
    /// and the contributions are recomputed from it.
    pub(crate) fn settle(&mut self, range: Range<usize>) {
        copy(&mut self.r[range.clone()], &self.a[range.clone()]);
        multiply(&mut self.c, &self.r, &self.f, range.start, range.len());
    }
}

/// Returns the teleport term (1 − *p*) / *n* plus the rank of dangling nodes
/// redistributed uniformly.
#[inline]
pub(crate) fn teleport<T: RankValue>(r: &[T], dangling: &[usize], n: usize, damping: T) -> T {
    let n = T::from_count(n);
    dangling
        .iter()
        .fold((T::one() - damping) / n, |c0, &u| c0 + damping * r[u] / n)
}

/// Sets `f[u]` to *p* / *d*(*u*), or to zero if *u* is dangling.
pub(crate) fn factor<T: RankValue>(f: &mut [T], outdegrees: &[usize], damping: T) {
    for (f, &d) in f.iter_mut().zip(outdegrees) {
        *f = if d > 0 {
            damping / T::from_count(d)
        } else {
            T::zero()
        };
    }
}

/// Sets `a[v]` to `c0` plus the contributions of the successors of `v` in the
/// transpose, for `v` in `start..start + count`.
#[inline]
pub(crate) fn calculate<T: RankValue>(
    a: &mut [T],
    c: &[T],
    csr: &CsrGraph,
    start: usize,
    count: usize,
    c0: T,
) {
    let offsets = csr.source_offsets();
    let indices = csr.destination_indices();
    for (v, a) in a[start..start + count].iter_mut().enumerate() {
        *a = c0 + grouped_sum(c, offsets, indices, start + v);
    }
}

/// Iterates on the nodes in `range` until the maximum absolute difference
/// between two successive approximations is below the tolerance, or the
/// maximum number of iterations has been reached, and returns the number of
/// iterations performed.
///
/// Nodes outside `range` are only read, through their contributions in `c`:
/// the caller must ensure that they are up to date. The last approximation
/// is left in `buffers.a`.
pub(crate) fn iterate<T: RankValue>(
    buffers: &mut Buffers<T>,
    csr: &CsrGraph,
    dangling: &[usize],
    range: Range<usize>,
    options: &PagerankOptions<T>,
) -> usize {
    let n = buffers.r.len();
    let (start, count) = (range.start, range.len());
    let damping = options.damping();
    let tolerance = options.tolerance();
    let max_iterations = options.max_iterations();

    let mut iteration = 0;
    loop {
        iteration += 1;
        let c0 = teleport(&buffers.r, dangling, n, damping);
        multiply(&mut buffers.c, &buffers.r, &buffers.f, start, count);
        calculate(&mut buffers.a, &buffers.c, csr, start, count, c0);
        let error = max_abs_diff(&buffers.a, &buffers.r, start, count);
        log::trace!("Iteration {}: error = {:?}", iteration, error);
        if error < tolerance || iteration >= max_iterations {
            break;
        }
        std::mem::swap(&mut buffers.a, &mut buffers.r);
    }
    iteration
}

/// Computes PageRank with a single power iteration over all nodes.
///
/// This function takes the [transpose](TransposedGraph) of the graph,
/// annotated with the outdegrees of the original graph, because it needs to
/// enumerate the predecessors of each node. If `initial` is provided, it is
/// used as the starting approximation instead of the uniform distribution.
///
/// The whole computation is repeated [`repeat`](PagerankOptions::repeat)
/// times; the returned duration is the average, and the returned ranks are
/// those of the last repetition.
///
/// # Panics
///
/// Panics if `initial` has not length equal to the number of nodes.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use levelrank::graphs::vec_graph::VecGraph;
/// use levelrank::rank::{pagerank_monolithic, PagerankOptions};
/// use levelrank::transform::transpose_with_degree;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let transpose = transpose_with_degree(&graph, no_logging![]);
///
/// let result = pagerank_monolithic::<f64>(&transpose, None, &PagerankOptions::default());
///
/// for rank in result.ranks {
///     assert!((rank - 0.25).abs() < 1E-6);
/// }
/// ```
pub fn pagerank_monolithic<T: RankValue>(
    transpose: &TransposedGraph,
    initial: Option<&[T]>,
    options: &PagerankOptions<T>,
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

    let dangling = transpose.dangling();
    log::info!("Damping: {:?}", options.damping());
    log::info!("Tolerance: {:?}", options.tolerance());
    log::info!("{} dangling nodes", dangling.len());

    let mut buffers = Buffers::new(n);
    let (iterations, time) = measure_duration(options.repeat(), || {
        buffers.init(transpose.outdegrees(), initial, options.damping());
        iterate(&mut buffers, transpose.csr(), &dangling, 0..n, options)
    });

    log::info!("Monolithic PageRank: {} iterations in {:?}", iterations, time);

    PagerankResult {
        ranks: buffers.a,
        iterations,
        time,
    }
}
