use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex label as it appears in the edge list
pub type VertexId = i64;

/// Number of hops from the start vertex of a bounded search
pub type Distance = usize;

/// Identifies one edge among the parallel edges of an ordered vertex pair.
///
/// Keys are assigned per (source, destination) pair in insertion order,
/// starting at 0, and never change afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EdgeKey(u32);

impl EdgeKey {
    pub fn new(key: u32) -> Self {
        EdgeKey(key)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weight of an edge, or an accumulated path cost.
///
/// Displays as the shortest decimal that parses back to the same value, so a
/// weight read as `2.0` prints as `2.0`. Sums can pick up binary rounding
/// noise; [`Weight::round_to`] brings them back to a decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Weights usable for shortest paths: finite and not negative
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Total order over weights, for heaps and minimum searches
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Fractional decimal digits in the displayed form (`0.25` has 2, `2.0` has 1)
    pub fn fraction_digits(&self) -> u32 {
        let repr = format!("{:?}", self.0);
        let (mantissa, exponent) = match repr.split_once('e') {
            Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
            None => (repr.as_str(), 0),
        };
        let fraction = mantissa.split_once('.').map_or(0, |(_, digits)| digits.len() as i32);
        (fraction - exponent).max(0) as u32
    }

    /// Round to `digits` fractional decimal digits.
    ///
    /// Values that cannot be scaled exactly are returned unchanged.
    pub fn round_to(&self, digits: u32) -> Weight {
        if digits > MAX_ROUNDING_DIGITS || !self.0.is_finite() {
            return *self;
        }
        let scale = 10f64.powi(digits as i32);
        let scaled = self.0 * scale;
        if !scaled.is_finite() {
            return *self;
        }
        Weight(scaled.round() / scale)
    }
}

/// f64 carries about 15 significant decimal digits
const MAX_ROUNDING_DIGITS: u32 = 15;

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting of f64 is the shortest round-tripping form and
        // always keeps a fractional part.
        write!(f, "{:?}", self.0)
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Weight {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

/// A directed edge of the multigraph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub key: EdgeKey,
    pub weight: Weight,
}

/// Result of a single-pair shortest path query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub source: VertexId,
    pub target: VertexId,
    /// Vertices from `source` to `target`, both included
    pub path: Vec<VertexId>,
    pub cost: Weight,
}
