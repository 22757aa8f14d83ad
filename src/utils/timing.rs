/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::time::{Duration, Instant};

/// Runs `f` `repeat` times, returning the result of the last run and the
/// average duration of a run.
///
/// # Panics
///
/// Panics if `repeat` is zero.
pub fn measure_duration<R>(repeat: usize, mut f: impl FnMut() -> R) -> (R, Duration) {
    assert!(repeat > 0, "The number of repetitions must be positive");
    let start = Instant::now();
    let mut result = f();
    for _ in 1..repeat {
        result = f();
    }
    (result, start.elapsed().div_f64(repeat as f64))
}
