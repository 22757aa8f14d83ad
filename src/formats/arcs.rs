/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::ParseError;
use crate::graphs::vec_graph::VecGraph;
use crate::traits::RandomAccessGraph;
use crate::utils::IdMap;
use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

/// Reads a graph from a list of arcs.
///
/// Each line contains a source and a target, given as non-negative integers
/// separated by whitespace, possibly followed by a weight, which is ignored.
/// Empty lines and lines starting with `#` or `%` are skipped.
///
/// The external ids need not be contiguous: nodes are the ids appearing in
/// some arc, numbered in increasing order, and the returned [`IdMap`]
/// records their external ids.
pub fn read_arcs(reader: impl BufRead) -> Result<(VecGraph, IdMap)> {
    let mut arcs = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            continue;
        }
        let mut fields = line.split_whitespace().map(str::parse::<usize>);
        let (Some(Ok(src)), Some(Ok(dst))) = (fields.next(), fields.next()) else {
            return Err(ParseError::InvalidLine {
                line: line_num + 1,
                content: line.to_owned(),
            }
            .into());
        };
        arcs.push((src, dst));
    }

    let mut ids = arcs
        .iter()
        .flat_map(|&(src, dst)| [src, dst])
        .collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    let map = IdMap::new(ids.into_boxed_slice());

    let mut graph = VecGraph::empty(map.num_nodes());
    for (src, dst) in arcs {
        // Both ids are in the map by construction
        if let (Some(u), Some(v)) = (map.compact(src), map.compact(dst)) {
            graph.add_arc(u, v);
        }
    }
    log::info!("Read {} nodes and {} arcs", map.num_nodes(), graph.num_arcs());

    Ok((graph, map))
}

/// Loads a graph from a file containing a list of arcs.
///
/// See [`read_arcs`].
pub fn load_arcs(path: impl AsRef<Path>) -> Result<(VecGraph, IdMap)> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Could not open {}", path.display()))?;
    read_arcs(std::io::BufReader::new(file))
        .with_context(|| format!("Could not parse {}", path.display()))
}
