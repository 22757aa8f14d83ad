/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! PageRank by sparse power iteration.
//!
//! Both strategies in this module pull rank along the arcs of the
//! [transpose](crate::transform::TransposedGraph) of the graph. If we denote
//! with *p* the damping factor, with *n* the number of nodes, with *d*(*u*)
//! the outdegree of *u* and with **r** the current approximation, each
//! iteration computes
//!
//! > *aᵥ* = (1 − *p*) / *n* + *p* ∑_(*u* dangling) *rᵤ* / *n* + ∑_(*u* → *v*) *p* · *rᵤ* / *d*(*u*),
//!
//! that is, the rank of dangling nodes is redistributed uniformly. The
//! iteration stops when the maximum absolute difference between two
//! successive approximations is below the
//! [tolerance](PagerankOptions::tolerance), or when the [maximum number of
//! iterations](PagerankOptions::max_iterations) has been performed.
//!
//! - [`pagerank_monolithic`] iterates over all nodes at once;
//! - [`pagerank_levelwise`] partitions the nodes into [topologically ordered
//!   groups](crate::algo::level_groups) and iterates each group to its own
//!   fixed point, in order, so that groups whose ranks are already stable
//!   are not recomputed.
//!
//! Both functions are generic over the floating-point type of ranks (see
//! [`RankValue`]).

use num_traits::Float;
use std::fmt::Debug;
use std::time::Duration;

mod levelwise;
pub use levelwise::*;

mod monolithic;
pub use monolithic::*;

pub mod vector;

/// A floating-point type usable for rank values.
pub trait RankValue: Float + Debug + Default + Send + Sync + 'static {
    /// Converts a count (e.g., a number of nodes or a degree) to this type.
    fn from_count(n: usize) -> Self;
    /// Converts an `f64` to this type, possibly losing precision.
    fn from_real(x: f64) -> Self;
}

macro_rules! impl_rank_value {
    ($($ty:ty),*) => {$(
        impl RankValue for $ty {
            #[inline(always)]
            fn from_count(n: usize) -> Self {
                n as $ty
            }

            #[inline(always)]
            fn from_real(x: f64) -> Self {
                x as $ty
            }
        }
    )*};
}

impl_rank_value!(f32, f64);

/// Options of a PageRank computation.
///
/// Options are built from the [default](PagerankOptions::default) (damping
/// factor 0.85, tolerance 10⁻⁶, at most 500 iterations, one repetition,
/// minimum group size 1) using the `with_` setters, which check their
/// argument.
///
/// # Examples
///
/// ```
/// use levelrank::rank::PagerankOptions;
///
/// let options = PagerankOptions::<f64>::default()
///     .with_tolerance(1E-10)
///     .with_min_group_size(100);
/// assert_eq!(options.damping(), 0.85);
/// assert_eq!(options.min_group_size(), 100);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerankOptions<T> {
    damping: T,
    tolerance: T,
    max_iterations: usize,
    repeat: usize,
    min_group_size: usize,
}

impl<T: RankValue> Default for PagerankOptions<T> {
    fn default() -> Self {
        Self {
            damping: T::from_real(Self::DEFAULT_DAMPING),
            tolerance: T::from_real(Self::DEFAULT_TOLERANCE),
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            repeat: 1,
            min_group_size: 1,
        }
    }
}

impl<T: RankValue> PagerankOptions<T> {
    pub const DEFAULT_DAMPING: f64 = 0.85;
    pub const DEFAULT_TOLERANCE: f64 = 1E-6;
    pub const DEFAULT_MAX_ITERATIONS: usize = 500;

    /// Sets the damping factor *p*.
    ///
    /// # Panics
    ///
    /// Panics if `damping` is not in the interval (0 . . 1).
    pub fn with_damping(mut self, damping: T) -> Self {
        assert!(
            damping > T::zero() && damping < T::one(),
            "The damping factor must be in (0 . . 1), got {damping:?}"
        );
        self.damping = damping;
        self
    }

    /// Sets the tolerance on the maximum absolute difference between two
    /// successive approximations.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is not positive.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        assert!(
            tolerance > T::zero(),
            "The tolerance must be positive, got {tolerance:?}"
        );
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of iterations.
    ///
    /// # Panics
    ///
    /// Panics if `max_iterations` is zero.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        assert!(
            max_iterations > 0,
            "The maximum number of iterations must be positive"
        );
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the number of times the whole computation is repeated to measure
    /// its duration.
    ///
    /// # Panics
    ///
    /// Panics if `repeat` is zero.
    pub fn with_repeat(mut self, repeat: usize) -> Self {
        assert!(repeat > 0, "The number of repetitions must be positive");
        self.repeat = repeat;
        self
    }

    /// Sets the minimum size of a group of the [levelwise
    /// iteration](pagerank_levelwise).
    ///
    /// # Panics
    ///
    /// Panics if `min_group_size` is zero.
    pub fn with_min_group_size(mut self, min_group_size: usize) -> Self {
        assert!(min_group_size > 0, "The minimum group size must be positive");
        self.min_group_size = min_group_size;
        self
    }

    pub fn damping(&self) -> T {
        self.damping
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn repeat(&self) -> usize {
        self.repeat
    }

    pub fn min_group_size(&self) -> usize {
        self.min_group_size
    }
}

/// The result of a PageRank computation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PagerankResult<T> {
    /// The rank of each node.
    pub ranks: Vec<T>,
    /// The number of iterations performed (for the levelwise strategy, the
    /// largest number of iterations performed by a group).
    pub iterations: usize,
    /// The duration of the computation, averaged over the repetitions.
    pub time: Duration,
}
