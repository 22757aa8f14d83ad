/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Reading graphs and vectors from text files.
//!
//! - [`read_mtx`]/[`load_mtx`]: Matrix Market coordinate files;
//! - [`read_arcs`]/[`load_arcs`]: whitespace-separated arc lists;
//! - [`FloatVectorFormat`]: vectors of floats, one value per line or as a
//!   JSON array.
//!
//! Graph loaders return a [`VecGraph`](crate::graphs::vec_graph::VecGraph)
//! on compact ids and the [`IdMap`](crate::utils::IdMap) recording the
//! external id of each node.

mod arcs;
pub use arcs::*;

mod mtx;
pub use mtx::*;

mod vector;
pub use vector::*;

/// Errors raised while parsing text files.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing Matrix Market header")]
    MissingHeader,
    #[error("Unsupported Matrix Market header {0:?}")]
    UnsupportedHeader(String),
    #[error("Missing size line")]
    MissingSize,
    #[error("Line {line}: cannot parse {content:?}")]
    InvalidLine { line: usize, content: String },
    #[error("Line {line}: node {node} is out of range (the graph has {num_nodes} nodes)")]
    NodeOutOfRange {
        line: usize,
        node: usize,
        num_nodes: usize,
    },
    #[error("Expected {expected} entries, found {actual}")]
    EntryCount { expected: usize, actual: usize },
}
