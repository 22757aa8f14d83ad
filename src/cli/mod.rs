/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface.
//!
//! The `levelrank` binary loads a graph, computes its PageRank with the
//! monolithic strategy, and then compares it with the levelwise strategy for
//! a geometric sweep of minimum group sizes (1, 5, 10, 50, 100, …), printing
//! for each run its duration, its number of iterations and its ℓ₁ distance
//! from the monolithic ranks.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::time::{Duration, Instant};

pub mod pagerank;

/// Formats the time elapsed since the logger was initialized as a compact
/// span (e.g., `1m3s250ms`).
fn elapsed_span(elapsed: Duration) -> Result<String, jiff::Error> {
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};

    let span = jiff::Span::new()
        .seconds(elapsed.as_secs() as i64)
        .milliseconds(elapsed.subsec_millis() as i64)
        .round(
            jiff::SpanRound::new()
                .largest(jiff::Unit::Day)
                .smallest(jiff::Unit::Millisecond)
                .days_are_24_hours(),
        )?;
    Ok(SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact)
        .span_to_string(&span))
}

/// Initializes the `env_logger` logger (default level `info`).
///
/// Each line carries the time elapsed since initialization, the level and
/// the target.
pub fn init_env_logger() -> Result<()> {
    let start = Instant::now();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let elapsed = elapsed_span(start.elapsed()).map_err(std::io::Error::other)?;
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{elapsed:>10}] {style}{:5}{style:#} {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = Instant::now();
    let args = pagerank::CliArgs::parse_from(args);
    pagerank::main(args)?;

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty-prints seconds in a human-readable format.
fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}
