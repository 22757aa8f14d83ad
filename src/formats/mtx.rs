/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::ParseError;
use crate::graphs::vec_graph::VecGraph;
use crate::utils::IdMap;
use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

/// Reads a graph in Matrix Market coordinate format.
///
/// The header must be `%%MatrixMarket matrix coordinate <field> <symmetry>`,
/// where the symmetry is `general` or `symmetric` (in the latter case, every
/// off-diagonal entry generates two arcs). The size line gives the number of
/// rows, of columns and of entries; the graph has as many nodes as the
/// largest of the first two. Entries are one-based; a value column, if
/// present, is ignored. Comment lines start with `%`.
///
/// The returned [`IdMap`] maps node *i* to external id *i* + 1.
pub fn read_mtx(reader: impl BufRead) -> Result<(VecGraph, IdMap)> {
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line?,
        None => return Err(ParseError::MissingHeader.into()),
    };
    let tokens = header
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();
    if tokens.first().map(String::as_str) != Some("%%matrixmarket") {
        return Err(ParseError::MissingHeader.into());
    }
    if tokens.len() < 5 || tokens[1] != "matrix" || tokens[2] != "coordinate" {
        return Err(ParseError::UnsupportedHeader(header).into());
    }
    let symmetric = match tokens[4].as_str() {
        "general" => false,
        "symmetric" => true,
        _ => return Err(ParseError::UnsupportedHeader(header).into()),
    };

    let mut num_nodes = None;
    let mut graph = VecGraph::new();
    let mut num_entries = 0;
    let mut expected_entries = 0;

    for (line_num, line) in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        let invalid = || ParseError::InvalidLine {
            line: line_num + 1,
            content: line.to_owned(),
        };
        let mut fields = line.split_whitespace().map(str::parse::<usize>);

        let Some(n) = num_nodes else {
            let (Some(Ok(rows)), Some(Ok(cols)), Some(Ok(nnz))) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(invalid().into());
            };
            let n = rows.max(cols);
            graph = VecGraph::empty(n);
            expected_entries = nnz;
            num_nodes = Some(n);
            continue;
        };

        let (Some(Ok(u)), Some(Ok(v))) = (fields.next(), fields.next()) else {
            return Err(invalid().into());
        };
        for node in [u, v] {
            if node == 0 || node > n {
                return Err(ParseError::NodeOutOfRange {
                    line: line_num + 1,
                    node,
                    num_nodes: n,
                }
                .into());
            }
        }
        graph.add_arc(u - 1, v - 1);
        if symmetric {
            graph.add_arc(v - 1, u - 1);
        }
        num_entries += 1;
    }

    let Some(n) = num_nodes else {
        return Err(ParseError::MissingSize.into());
    };
    if num_entries != expected_entries {
        return Err(ParseError::EntryCount {
            expected: expected_entries,
            actual: num_entries,
        }
        .into());
    }

    Ok((graph, IdMap::shifted(n, 1)))
}

/// Loads a graph in Matrix Market coordinate format from a file.
///
/// See [`read_mtx`].
pub fn load_mtx(path: impl AsRef<Path>) -> Result<(VecGraph, IdMap)> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Could not open {}", path.display()))?;
    read_mtx(std::io::BufReader::new(file))
        .with_context(|| format!("Could not parse {}", path.display()))
}
