/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of graphs.

pub mod csr_graph;
pub mod vec_graph;

pub mod prelude {
    pub use super::csr_graph::CsrGraph;
    pub use super::vec_graph::VecGraph;
}
