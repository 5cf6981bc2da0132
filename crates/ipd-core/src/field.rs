//! Continuous positions on a bounded toroidal field.
//!
//! The field is the half-open rectangle `[0, width) × [0, height)`.  Leaving
//! one edge re-enters at the opposite edge.  Proximity is checked per axis
//! on raw coordinates (a square neighbourhood that does not wrap), which is
//! what the interaction scan uses.

/// A point on the field.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `true` if both axis distances are strictly below `range`.
    #[inline]
    pub fn within_range(self, other: Position, range: f64) -> bool {
        (self.x - other.x).abs() < range && (self.y - other.y).abs() < range
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// Bounds of the toroidal field.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub width:  f64,
    pub height: f64,
}

impl Field {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map `pos` back into `[0, width) × [0, height)`.
    ///
    /// Offsets of any size are reduced modulo the bound, so a coordinate
    /// several field widths away still lands in range.
    pub fn wrap(self, pos: Position) -> Position {
        Position {
            x: wrap_axis(pos.x, self.width),
            y: wrap_axis(pos.y, self.height),
        }
    }

    /// `true` if `pos` already lies inside the half-open bounds.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }
}

/// Modular correction of one coordinate into `[0, limit)`.
///
/// `rem_euclid` of a tiny negative value can round up to exactly `limit`,
/// hence the final check.  `limit` must be finite and positive (guaranteed
/// by `SimConfig::validate`).
fn wrap_axis(v: f64, limit: f64) -> f64 {
    let r = v.rem_euclid(limit);
    if r >= limit { r - limit } else { r }
}
