/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// How to store a vector of floats in a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FloatVectorFormat {
    /// One value per line.
    #[default]
    Ascii,
    /// A JSON array.
    Json,
}

impl FloatVectorFormat {
    /// Stores `values` at `path`.
    ///
    /// If `precision` is provided, values are written with that number of
    /// decimal digits; otherwise, the shortest representation that reads
    /// back to the same value is used.
    pub fn store<F: std::fmt::Display>(
        &self,
        path: impl AsRef<Path>,
        values: &[F],
        precision: Option<usize>,
    ) -> Result<()> {
        let path = path.as_ref();
        let path_display = path.display();
        let file = std::fs::File::create(path)
            .with_context(|| format!("Could not create vector at {}", path_display))?;
        let mut file = BufWriter::new(file);
        let fmt = |value: &F| match precision {
            None => format!("{value}"),
            Some(precision) => format!("{value:.precision$}"),
        };

        match self {
            FloatVectorFormat::Ascii => {
                log::info!("Storing in ASCII format at {}", path_display);
                for value in values {
                    writeln!(file, "{}", fmt(value))
                        .with_context(|| format!("Could not write vector to {}", path_display))?;
                }
            }
            FloatVectorFormat::Json => {
                log::info!("Storing in JSON format at {}", path_display);
                let items = values.iter().map(fmt).collect::<Vec<_>>();
                write!(file, "[{}]", items.join(", "))
                    .with_context(|| format!("Could not write vector to {}", path_display))?;
            }
        }
        file.flush()?;
        Ok(())
    }

    /// Loads a vector from `path`.
    pub fn load<F>(&self, path: impl AsRef<Path>) -> Result<Vec<F>>
    where
        F: std::str::FromStr,
        <F as std::str::FromStr>::Err: std::fmt::Display,
    {
        let path = path.as_ref();
        let path_display = path.display();
        let file =
            std::fs::File::open(path).with_context(|| format!("Could not open {}", path_display))?;
        let reader = BufReader::new(file);

        match self {
            FloatVectorFormat::Ascii => {
                log::info!("Loading ASCII format from {}", path_display);
                reader
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
                    .map(|(i, line)| {
                        let line = line.with_context(|| {
                            format!("Error reading line {} of {}", i + 1, path_display)
                        })?;
                        line.trim().parse::<F>().map_err(|e| {
                            anyhow!("Error parsing line {} of {}: {}", i + 1, path_display, e)
                        })
                    })
                    .collect()
            }
            FloatVectorFormat::Json => {
                log::info!("Loading JSON format from {}", path_display);
                let content = std::io::read_to_string(reader)
                    .with_context(|| format!("Could not read {}", path_display))?;
                let content = content.trim();
                let inner = content
                    .strip_prefix('[')
                    .and_then(|c| c.strip_suffix(']'))
                    .ok_or_else(|| anyhow!("{} does not contain a JSON array", path_display))?;
                inner
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .enumerate()
                    .map(|(i, item)| {
                        item.parse::<F>().map_err(|e| {
                            anyhow!("Error parsing item {} of {}: {}", i, path_display, e)
                        })
                    })
                    .collect()
            }
        }
    }
}
