/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Transformations on graphs.
//!
//! # Transpose
//!
//! - [`transpose`]: returns the transpose of a graph in CSR form;
//! - [`transpose_with_degree`]: returns the transpose of a graph together
//!   with the outdegree of each node in the original graph, which is the
//!   input of the PageRank iterations.
//!
//! # Dead ends
//!
//! - [`loop_dead_ends`]: adds a self-loop to every node without successors.
//!
//! # Permute
//!
//! - [`permute_transposed`]: renumbers the nodes of a [`TransposedGraph`];
//! - [`invert_permutation`]: computes the inverse of a permutation.

mod dead_ends;
pub use dead_ends::*;

mod perm;
pub use perm::*;

mod transpose;
pub use transpose::*;
