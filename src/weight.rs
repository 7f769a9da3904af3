/*!
# Weights & Distances

Edge weights are any totally ordered integer-like type supporting checked addition
(`i32`, `i64`, `u32`, `u64`, ...). Floating point weights are not supported: shortest-path
tie detection requires exact comparisons.

Distances computed by the algorithms are tri-state [`Distance`] values. Instead of reserving
magic finite values for "unreachable" and "unbounded", the sentinels are separate variants
and all arithmetic on them saturates, so adding a weight to a sentinel can never silently
overflow into a finite value.
*/

use std::{
    fmt::{Debug, Display},
    ops::Add,
};

use num::{CheckedAdd, Zero};

/// Trait alias for edge weights
pub trait Weight: Copy + Ord + Debug + Zero + CheckedAdd {}

impl<W> Weight for W where W: Copy + Ord + Debug + Zero + CheckedAdd {}

/// Distance between two nodes.
///
/// The variant order defines the ordering: `NegInfinity < Finite(_) < Infinity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    /// Reachable via a path through a negative cycle, ie. unbounded below
    NegInfinity,
    /// Regular distance
    Finite(W),
    /// Unreachable
    Infinity,
}

impl<W: Weight> Distance<W> {
    /// Distance of a node to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    /// Returns *true* if the distance is neither `Infinity` nor `NegInfinity`
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns *true* if the target is reachable at all (this includes `NegInfinity`)
    pub fn is_reachable(&self) -> bool {
        !matches!(self, Distance::Infinity)
    }

    /// Returns *true* if the distance is unbounded below
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Distance::NegInfinity)
    }

    /// Returns the finite value if there is one
    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(w) => Some(w),
            _ => None,
        }
    }

    /// Returns *true* if the distance is finite and strictly below zero
    pub fn is_negative(&self) -> bool {
        match *self {
            Distance::NegInfinity => true,
            Distance::Finite(w) => w < W::zero(),
            Distance::Infinity => false,
        }
    }

    /// Extends the distance by an edge of weight `w`.
    ///
    /// Sentinels absorb the weight. An overflowing finite sum saturates towards the sign of `w`.
    pub fn add_weight(self, w: W) -> Self {
        match self {
            Distance::Finite(d) => Self::saturating(d, w),
            sentinel => sentinel,
        }
    }

    fn saturating(a: W, b: W) -> Self {
        match a.checked_add(&b) {
            Some(sum) => Distance::Finite(sum),
            None if b < W::zero() => Distance::NegInfinity,
            None => Distance::Infinity,
        }
    }
}

impl<W: Weight> Add for Distance<W> {
    type Output = Self;

    /// `Infinity` dominates `NegInfinity` which dominates finite values.
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Distance::Infinity, _) | (_, Distance::Infinity) => Distance::Infinity,
            (Distance::NegInfinity, _) | (_, Distance::NegInfinity) => Distance::NegInfinity,
            (Distance::Finite(a), Distance::Finite(b)) => Self::saturating(a, b),
        }
    }
}

impl<W> From<W> for Distance<W> {
    fn from(value: W) -> Self {
        Distance::Finite(value)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::NegInfinity => write!(f, "-inf"),
            Distance::Finite(w) => write!(f, "{w}"),
            Distance::Infinity => write!(f, "inf"),
        }
    }
}
