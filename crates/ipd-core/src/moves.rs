//! The two moves of the game.

/// A single-step decision in one encounter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// "Farm": cooperate with the opponent.
    Cooperate,
    /// "Attack": defect against the opponent.
    Defect,
}

impl Move {
    pub const ALL: [Move; 2] = [Move::Cooperate, Move::Defect];

    /// Row/column index into the payoff table (`Cooperate = 0`, `Defect = 1`).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Move::Cooperate => 0,
            Move::Defect    => 1,
        }
    }

    /// Numeric value fed into the tendency running mean: 0 for `Cooperate`,
    /// 1 for `Defect`.
    #[inline]
    pub fn value(self) -> f64 {
        self.index() as f64
    }

    #[inline]
    pub fn is_defect(self) -> bool {
        matches!(self, Move::Defect)
    }

    /// Human-readable label, useful for CSV columns and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Cooperate => "cooperate",
            Move::Defect    => "defect",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
