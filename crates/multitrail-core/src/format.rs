//! Human-readable trail rendering
//!
//! A trail renders as an arrow chain with the total weight appended:
//!
//! ```text
//! 1 -[1: 0.5]-> 2 -[0: 2.0]-> 3  (total = 2.5)
//! ```
//!
//! An empty trail renders as the empty string. The total is rounded to the
//! finest precision among the segment weights, so `0.1` and `0.2` total `0.3`.

use std::fmt;

use crate::graph::trail::Trail;
use crate::graph::types::Weight;

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(last) = self.segments().last() else {
            return Ok(());
        };
        for segment in self {
            write!(f, "{} -[{}: {}]-> ", segment.begin, segment.key, segment.weight)?;
        }
        write!(f, "{}  (total = {})", last.end, displayed_total(self))
    }
}

fn displayed_total(trail: &Trail) -> Weight {
    let digits = trail
        .iter()
        .map(|segment| segment.weight.fraction_digits())
        .max()
        .unwrap_or(0);
    trail.total_weight().round_to(digits)
}

/// Render a trail as an arrow chain
pub fn format_trail(trail: &Trail) -> String {
    trail.to_string()
}
