/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use levelrank::formats::*;
use levelrank::traits::RandomAccessGraph;
use std::io::{Cursor, Write};

fn parse_error(result: Result<impl Sized>) -> ParseError {
    match result {
        Ok(_) => panic!("Parsing should have failed"),
        Err(err) => err
            .downcast_ref::<ParseError>()
            .cloned()
            .expect("Not a parse error"),
    }
}

#[test]
fn test_mtx_general() -> Result<()> {
    let data = "%%MatrixMarket matrix coordinate pattern general\n\
                % a comment\n\
                3 3 3\n\
                1 2\n\
                2 3\n\
                3 1\n";
    let (graph, map) = read_mtx(Cursor::new(data))?;

    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.num_arcs(), 3);
    assert_eq!(graph.successors(0), &[1]);
    assert_eq!(graph.successors(1), &[2]);
    assert_eq!(graph.successors(2), &[0]);
    assert_eq!(map.external(0), 1);
    assert_eq!(map.span(), 4);

    Ok(())
}

#[test]
fn test_mtx_symmetric() -> Result<()> {
    let data = "%%MatrixMarket matrix coordinate real symmetric\n\
                3 3 2\n\
                1 2 1.0\n\
                2 3 0.5\n";
    let (graph, _) = read_mtx(Cursor::new(data))?;
    assert_eq!(graph.num_arcs(), 4);
    assert_eq!(graph.successors(1), &[0, 2]);
    Ok(())
}

#[test]
fn test_mtx_rectangular() -> Result<()> {
    let data = "%%MatrixMarket matrix coordinate integer general\n2 4 1\n1 4 7\n";
    let (graph, map) = read_mtx(Cursor::new(data))?;
    assert_eq!(graph.num_nodes(), 4);
    assert_eq!(graph.successors(0), &[3]);
    assert_eq!(map.num_nodes(), 4);
    Ok(())
}

#[test]
fn test_mtx_errors() -> Result<()> {
    assert_eq!(parse_error(read_mtx(Cursor::new(""))), ParseError::MissingHeader);
    assert_eq!(
        parse_error(read_mtx(Cursor::new("1 2 3\n"))),
        ParseError::MissingHeader
    );
    assert!(matches!(
        parse_error(read_mtx(Cursor::new(
            "%%MatrixMarket matrix array real general\n2 2\n"
        ))),
        ParseError::UnsupportedHeader(_)
    ));
    assert!(matches!(
        parse_error(read_mtx(Cursor::new(
            "%%MatrixMarket matrix coordinate real hermitian\n"
        ))),
        ParseError::UnsupportedHeader(_)
    ));
    assert_eq!(
        parse_error(read_mtx(Cursor::new(
            "%%MatrixMarket matrix coordinate pattern general\n% only comments\n"
        ))),
        ParseError::MissingSize
    );
    assert_eq!(
        parse_error(read_mtx(Cursor::new(
            "%%MatrixMarket matrix coordinate pattern general\n3 3 1\n4 1\n"
        ))),
        ParseError::NodeOutOfRange {
            line: 3,
            node: 4,
            num_nodes: 3
        }
    );
    assert_eq!(
        parse_error(read_mtx(Cursor::new(
            "%%MatrixMarket matrix coordinate pattern general\n3 3 1\n0 1\n"
        ))),
        ParseError::NodeOutOfRange {
            line: 3,
            node: 0,
            num_nodes: 3
        }
    );
    assert_eq!(
        parse_error(read_mtx(Cursor::new(
            "%%MatrixMarket matrix coordinate pattern general\n3 3 2\n1 2\n"
        ))),
        ParseError::EntryCount {
            expected: 2,
            actual: 1
        }
    );
    assert_eq!(
        parse_error(read_mtx(Cursor::new(
            "%%MatrixMarket matrix coordinate pattern general\n3 3 1\n1 x\n"
        ))),
        ParseError::InvalidLine {
            line: 3,
            content: "1 x".to_owned()
        }
    );
    Ok(())
}

#[test]
fn test_load_mtx() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        "%%MatrixMarket matrix coordinate pattern general\n2 2 2\n1 2\n2 1\n"
    )?;
    file.flush()?;
    let (graph, _) = load_mtx(file.path())?;
    assert_eq!(graph.num_nodes(), 2);
    assert_eq!(graph.num_arcs(), 2);

    let dir = tempfile::tempdir()?;
    assert!(load_mtx(dir.path().join("missing.mtx")).is_err());

    Ok(())
}

#[test]
fn test_arcs() -> Result<()> {
    let data = "# comment\n10 20\n20 30 1.5\n30 10\n\n% another comment\n10 30\n10 20\n";
    let (graph, map) = read_arcs(Cursor::new(data))?;

    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.num_arcs(), 4);
    assert_eq!(graph.successors(0), &[1, 2]);
    assert_eq!(map.external(2), 30);
    assert_eq!(map.compact(20), Some(1));
    assert_eq!(map.span(), 31);

    // Vectors indexed by external id are compressed to the nodes
    let mut external = vec![0.0; 31];
    external[10] = 0.5;
    external[20] = 0.25;
    external[30] = 0.25;
    let compact = map.compress(&external)?;
    assert_eq!(compact, vec![0.5, 0.25, 0.25]);
    assert_eq!(map.decompress(&compact)?, external);

    Ok(())
}

#[test]
fn test_arcs_errors() -> Result<()> {
    assert_eq!(
        parse_error(read_arcs(Cursor::new("0 1\n2\n"))),
        ParseError::InvalidLine {
            line: 2,
            content: "2".to_owned()
        }
    );
    assert!(matches!(
        parse_error(read_arcs(Cursor::new("0 -1\n"))),
        ParseError::InvalidLine { line: 1, .. }
    ));

    let (graph, map) = read_arcs(Cursor::new("# nothing\n"))?;
    assert_eq!(graph.num_nodes(), 0);
    assert_eq!(map.span(), 0);

    Ok(())
}

#[test]
fn test_load_arcs() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("graph.arcs");
    std::fs::write(&path, "0 1\n1 2\n2 0\n")?;
    let (graph, map) = load_arcs(&path)?;
    assert_eq!(graph.num_arcs(), 3);
    assert_eq!(map.span(), 3);
    Ok(())
}

#[test]
fn test_float_vector_ascii() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("ranks.txt");
    let values = [0.1_f64, 0.2, 1.0 / 3.0, 0.0];

    FloatVectorFormat::Ascii.store(&path, &values, None)?;
    let loaded = FloatVectorFormat::Ascii.load::<f64>(&path)?;
    assert_eq!(loaded, values);

    FloatVectorFormat::Ascii.store(&path, &values, Some(3))?;
    assert_eq!(std::fs::read_to_string(&path)?, "0.100\n0.200\n0.333\n0.000\n");
    let loaded = FloatVectorFormat::Ascii.load::<f32>(&path)?;
    assert_eq!(loaded, vec![0.1, 0.2, 0.333, 0.0]);

    Ok(())
}

#[test]
fn test_float_vector_json() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("ranks.json");
    let values = [0.5_f32, 0.25, 0.25];

    FloatVectorFormat::Json.store(&path, &values, None)?;
    assert_eq!(std::fs::read_to_string(&path)?, "[0.5, 0.25, 0.25]");
    let parsed: Vec<f32> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(parsed, values);
    assert_eq!(FloatVectorFormat::Json.load::<f32>(&path)?, values);

    FloatVectorFormat::Json.store::<f64>(&path, &[], None)?;
    assert!(FloatVectorFormat::Json.load::<f64>(&path)?.is_empty());

    Ok(())
}

#[test]
fn test_float_vector_errors() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "0.5\nzero\n")?;
    assert!(FloatVectorFormat::Ascii.load::<f64>(&path).is_err());
    std::fs::write(&path, "0.5, 0.25")?;
    assert!(FloatVectorFormat::Json.load::<f64>(&path).is_err());
    assert!(FloatVectorFormat::Ascii
        .load::<f64>(dir.path().join("missing.txt"))
        .is_err());
    Ok(())
}
