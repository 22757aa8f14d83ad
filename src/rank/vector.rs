/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Elementwise operations on rank vectors.
//!
//! All functions work on pre-sized slices and never allocate. Ranges are
//! expressed as a start and a count; accessing elements out of bounds is a
//! contract violation and panics.

use num_traits::Float;

/// Sets every element of `x` to `value`.
#[inline]
pub fn fill<T: Copy>(x: &mut [T], value: T) {
    x.fill(value);
}

/// Copies `src` into `dst`.
///
/// # Panics
///
/// Panics if the two slices have different lengths.
#[inline]
pub fn copy<T: Copy>(dst: &mut [T], src: &[T]) {
    dst.copy_from_slice(src);
}

/// Sets `out[i] = a[i] * b[i]` for `i` in `start..start + count`.
#[inline]
pub fn multiply<T: Float>(out: &mut [T], a: &[T], b: &[T], start: usize, count: usize) {
    let end = start + count;
    for ((o, &x), &y) in out[start..end]
        .iter_mut()
        .zip(&a[start..end])
        .zip(&b[start..end])
    {
        *o = x * y;
    }
}

/// Returns the sum of `c[indices[j]]` for `j` in `offsets[v]..offsets[v + 1]`.
///
/// With `offsets` and `indices` being the arrays of a
/// [CSR graph](crate::graphs::csr_graph::CsrGraph), this is the sum of `c`
/// over the successors of `v`.
#[inline(always)]
pub fn grouped_sum<T: Float>(c: &[T], offsets: &[usize], indices: &[usize], v: usize) -> T {
    indices[offsets[v]..offsets[v + 1]]
        .iter()
        .fold(T::zero(), |sum, &u| sum + c[u])
}

/// Returns the maximum of `|a[i] - b[i]|` for `i` in `start..start + count`,
/// or zero if the range is empty.
#[inline]
pub fn max_abs_diff<T: Float>(a: &[T], b: &[T], start: usize, count: usize) -> T {
    let end = start + count;
    a[start..end]
        .iter()
        .zip(&b[start..end])
        .fold(T::zero(), |max, (&x, &y)| max.max((x - y).abs()))
}

/// Returns the sum of the elements of `x`.
#[inline]
pub fn sum<T: Float>(x: &[T]) -> T {
    x.iter().fold(T::zero(), |sum, &v| sum + v)
}

/// Returns the ℓ₁ distance between `a` and `b`.
///
/// # Panics
///
/// Panics if the two slices have different lengths.
pub fn abs_error<T: Float>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "The vectors have different lengths");
    a.iter()
        .zip(b)
        .fold(T::zero(), |sum, (&x, &y)| sum + (x - y).abs())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_multiply_touches_only_the_range() {
        let mut out = [0.0; 5];
        multiply(&mut out, &[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0; 5], 1, 3);
        assert_eq!(out, [0.0, 4.0, 6.0, 8.0, 0.0]);
    }

    #[test]
    fn test_grouped_sum() {
        // 0 <- {1, 2}, 1 <- {}, 2 <- {0, 1, 2}
        let offsets = [0, 2, 2, 5];
        let indices = [1, 2, 0, 1, 2];
        let c = [1.0, 10.0, 100.0];
        assert_eq!(grouped_sum(&c, &offsets, &indices, 0), 110.0);
        assert_eq!(grouped_sum(&c, &offsets, &indices, 1), 0.0);
        assert_eq!(grouped_sum(&c, &offsets, &indices, 2), 111.0);
    }

    #[test]
    fn test_max_abs_diff_empty_range() {
        assert_eq!(max_abs_diff(&[1.0f32, 2.0], &[3.0, 5.0], 1, 0), 0.0);
        assert_eq!(max_abs_diff(&[1.0f32, 2.0], &[3.0, 5.0], 0, 2), 3.0);
    }
}
