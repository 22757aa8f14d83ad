/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::formats::{load_arcs, load_mtx, FloatVectorFormat};
use crate::rank::{
    pagerank_levelwise_with_logging, pagerank_monolithic, vector, PagerankOptions,
    PagerankResult, RankValue,
};
use crate::traits::RandomAccessGraph;
use crate::transform::{loop_dead_ends, transpose_with_degree};
use anyhow::{ensure, Result};
use clap::Parser;
use dsi_progress_logger::{progress_logger, ProgressLog};
use std::fmt::{Display, LowerExp};
use std::path::PathBuf;
use std::str::FromStr;

/// The format of the input graph.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
pub enum GraphFormat {
    /// Matrix Market coordinate format (one-based ids).
    #[default]
    Mtx,
    /// One arc per line, as a pair of whitespace-separated ids.
    Arcs,
}

/// The floating-point type used for ranks.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
pub enum Precision {
    /// Single precision.
    #[default]
    F32,
    /// Double precision.
    F64,
}

#[derive(Parser, Debug)]
#[command(
    name = "levelrank",
    about = "Compare monolithic and levelwise PageRank on a graph.",
    long_about = None
)]
pub struct CliArgs {
    /// The graph file.
    pub graph: PathBuf,

    #[arg(short, long, value_enum, default_value_t = GraphFormat::Mtx)]
    /// The format of the graph file.
    pub input_format: GraphFormat,

    #[arg(short, long, default_value_t = 5)]
    /// How many times each computation is repeated to measure its duration.
    pub repeat: usize,

    #[arg(short, long, default_value_t = 0.85)]
    /// The damping factor (must be in the interval (0 . . 1)).
    pub damping: f64,

    #[arg(short, long, default_value_t = 1e-6)]
    /// The tolerance on the maximum absolute difference between two
    /// successive approximations.
    pub tolerance: f64,

    #[arg(long, default_value_t = 500)]
    /// Maximum number of iterations.
    pub max_iter: usize,

    #[arg(long)]
    /// Do not add self-loops to nodes without successors.
    pub keep_dead_ends: bool,

    #[arg(long, value_enum, default_value_t = Precision::F32)]
    /// The floating-point type used for ranks.
    pub precision: Precision,

    #[arg(long)]
    /// The largest minimum group size of the levelwise sweep (defaults to
    /// the number of nodes).
    pub max_group_size: Option<usize>,

    #[arg(long)]
    /// Path to an initial rank vector, indexed by external id.
    pub initial: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FloatVectorFormat::Ascii)]
    /// The format of the initial rank vector.
    pub initial_fmt: FloatVectorFormat,

    #[arg(short, long)]
    /// Where to store the monolithic rank vector, indexed by external id.
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FloatVectorFormat::Ascii)]
    /// The output format for the rank vector.
    pub fmt: FloatVectorFormat,

    #[arg(long)]
    /// Decimal digits for the output rank vector.
    pub digits: Option<usize>,
}

pub fn main(args: CliArgs) -> Result<()> {
    ensure!(
        args.damping > 0.0 && args.damping < 1.0,
        "The damping factor must be in (0 . . 1), got {}",
        args.damping
    );
    ensure!(
        args.tolerance > 0.0,
        "The tolerance must be positive, got {}",
        args.tolerance
    );
    ensure!(
        args.max_iter > 0,
        "The maximum number of iterations must be positive"
    );
    ensure!(args.repeat > 0, "The number of repetitions must be positive");

    match args.precision {
        Precision::F32 => run::<f32>(args),
        Precision::F64 => run::<f64>(args),
    }
}

/// Returns the minimum group sizes of the levelwise sweep: 1, 5, 10, 50,
/// 100, … up to, and excluding, `bound`.
pub fn group_size_sweep(bound: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some((1_usize, 0_usize)), |&(c, i)| {
        c.checked_mul(if i % 2 == 0 { 5 } else { 2 })
            .map(|next| (next, i + 1))
    })
    .map(|(c, _)| c)
    .take_while(move |&c| c < bound)
}

fn report<T: RankValue + LowerExp>(result: &PagerankResult<T>, baseline: &[T], label: &str) {
    println!(
        "[{:09.3} ms; {:03} iters.] [{:.4e} err.] {}",
        result.time.as_secs_f64() * 1E3,
        result.iterations,
        vector::abs_error(baseline, &result.ranks),
        label
    );
}

pub fn run<T>(args: CliArgs) -> Result<()>
where
    T: RankValue + Display + LowerExp + FromStr,
    <T as FromStr>::Err: Display,
{
    // Values accepted as f64 may still round to a boundary in T
    let damping = T::from_real(args.damping);
    let tolerance = T::from_real(args.tolerance);
    ensure!(
        damping > T::zero() && damping < T::one(),
        "The damping factor {} rounds to {damping} at the selected precision",
        args.damping
    );
    ensure!(
        tolerance > T::zero(),
        "The tolerance {} rounds to {tolerance} at the selected precision",
        args.tolerance
    );
    let options = PagerankOptions::<T>::default()
        .with_damping(damping)
        .with_tolerance(tolerance)
        .with_max_iterations(args.max_iter)
        .with_repeat(args.repeat);

    println!("Loading graph {} ...", args.graph.display());
    let (mut graph, id_map) = match args.input_format {
        GraphFormat::Mtx => load_mtx(&args.graph)?,
        GraphFormat::Arcs => load_arcs(&args.graph)?,
    };
    println!("{} nodes, {} arcs", graph.num_nodes(), graph.num_arcs());

    if !args.keep_dead_ends {
        loop_dead_ends(&mut graph);
        println!(
            "{} nodes, {} arcs (loop_dead_ends)",
            graph.num_nodes(),
            graph.num_arcs()
        );
    }

    let mut pl = progress_logger![];
    pl.display_memory(true);
    let transpose = transpose_with_degree(&graph, &mut pl);
    println!(
        "{} nodes, {} arcs (transpose_with_degree)",
        transpose.num_nodes(),
        transpose.num_arcs()
    );
    println!();

    let initial = match &args.initial {
        Some(path) => Some(id_map.compress(&args.initial_fmt.load::<T>(path)?)?),
        None => None,
    };

    let monolithic = pagerank_monolithic(&transpose, initial.as_deref(), &options);
    report(&monolithic, &monolithic.ranks, "pagerank_monolithic");

    let bound = args.max_group_size.unwrap_or(graph.num_nodes());
    for min_group_size in group_size_sweep(bound) {
        let levelwise = pagerank_levelwise_with_logging(
            &graph,
            &transpose,
            initial.as_deref(),
            &options.with_min_group_size(min_group_size),
            &mut pl,
        );
        report(
            &levelwise,
            &monolithic.ranks,
            &format!(
                "pagerank_levelwise [{:.0e} min-group-size]",
                min_group_size as f64
            ),
        );
    }

    if let Some(output) = &args.output {
        let ranks = id_map.decompress(&monolithic.ranks)?;
        args.fmt.store(output, &ranks, args.digits)?;
    }

    Ok(())
}
