//! Routes and operating shifts

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Number of operating shifts per day.
pub const SHIFT_COUNT: usize = 4;

/// Route identifier as it appears in the dataset (e.g. `"12"`, `"7A"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        RouteId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the [`SHIFT_COUNT`] operating periods, stored 0-based.
///
/// Serializes as its 1-based [`Shift::number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shift(usize);

impl Serialize for Shift {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.number() as u64)
    }
}

impl Shift {
    /// Create a shift from its 0-based index.
    ///
    /// Returns `None` when `index >= SHIFT_COUNT`.
    pub fn new(index: usize) -> Option<Self> {
        (index < SHIFT_COUNT).then_some(Shift(index))
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// 1-based shift number used in reports.
    pub fn number(&self) -> usize {
        self.0 + 1
    }

    /// All shifts in order.
    pub fn all() -> impl Iterator<Item = Shift> {
        (0..SHIFT_COUNT).map(Shift)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shift {}", self.number())
    }
}

/// A bus route with its per-shift demand and trip factors.
///
/// `demand[j]` is the number of passengers to carry in shift `j`;
/// `trips[j]` is how many trips one bus makes on the route in that shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub demand: [f64; SHIFT_COUNT],
    pub trips: [f64; SHIFT_COUNT],
}

impl Route {
    pub fn new(id: impl Into<String>, demand: [f64; SHIFT_COUNT], trips: [f64; SHIFT_COUNT]) -> Self {
        Self {
            id: RouteId::new(id),
            demand,
            trips,
        }
    }

    pub fn demand(&self, shift: Shift) -> f64 {
        self.demand[shift.index()]
    }

    pub fn trips(&self, shift: Shift) -> f64 {
        self.trips[shift.index()]
    }

    /// Total passenger demand over all shifts.
    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }
}
