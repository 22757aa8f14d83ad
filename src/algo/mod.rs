/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Structural algorithms used to schedule the levelwise PageRank iteration.
//!
//! [Tarjan's algorithm](tarjan) computes the strongly connected components of
//! a graph in reverse topological order; [`level_groups`] uses them to
//! partition the nodes into topologically ordered groups of a minimum size.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use levelrank::graphs::vec_graph::VecGraph;
//! use levelrank::algo::*;
//!
//! let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
//!
//! let sccs = tarjan(&graph, no_logging![]);
//!
//! assert_eq!(sccs.num_components(), 2);
//! // The sink {3} is emitted first
//! assert_eq!(sccs.components(), &[1, 1, 1, 0]);
//! ```

mod levels;
pub use levels::*;

mod sccs;
pub use sccs::*;
