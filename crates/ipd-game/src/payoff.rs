//! The payoff table.

use ipd_core::Move;

/// `table[a][b] = (score for the player of a, score for the player of b)`,
/// indexed by [`Move::index`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffMatrix {
    table: [[(f64, f64); 2]; 2],
}

impl PayoffMatrix {
    /// Mutual cooperation (3, 3); a lone cooperator is penalised (-5, 5);
    /// mutual defection (0, 0).
    pub const STANDARD: PayoffMatrix = PayoffMatrix {
        table: [
            [(3.0, 3.0), (-5.0, 5.0)],
            [(5.0, -5.0), (0.0, 0.0)],
        ],
    };

    /// A custom table, laid out as `table[first move][second move]`.
    pub const fn new(table: [[(f64, f64); 2]; 2]) -> Self {
        Self { table }
    }

    /// Score pair for the moves `(a, b)`.
    #[inline]
    pub fn lookup(&self, a: Move, b: Move) -> (f64, f64) {
        self.table[a.index()][b.index()]
    }

    /// `true` if swapping the roles swaps the payoffs for every move pair.
    pub fn is_symmetric(&self) -> bool {
        Move::ALL.iter().all(|&a| {
            Move::ALL.iter().all(|&b| {
                let (x, y) = self.lookup(a, b);
                self.lookup(b, a) == (y, x)
            })
        })
    }
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self::STANDARD
    }
}
