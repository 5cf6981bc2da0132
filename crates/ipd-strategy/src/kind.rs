//! Strategy kind tags and per-kind tables.
//!
//! The kind is what collaborators see: it picks marker shape and colour in
//! plots and keys every per-step aggregate.

use std::ops::{Index, IndexMut};

/// Variant tag of a [`Strategy`][crate::Strategy], without parameters.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    AlwaysDefect,
    AlwaysCooperate,
    TitForTat,
    ProbabilisticReactive,
}

impl StrategyKind {
    pub const COUNT: usize = 4;

    pub const ALL: [StrategyKind; Self::COUNT] = [
        StrategyKind::AlwaysDefect,
        StrategyKind::AlwaysCooperate,
        StrategyKind::TitForTat,
        StrategyKind::ProbabilisticReactive,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Machine label used in CSV columns.
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::AlwaysDefect          => "raider",
            StrategyKind::AlwaysCooperate       => "farmer",
            StrategyKind::TitForTat             => "tit_for_tat",
            StrategyKind::ProbabilisticReactive => "reactive",
        }
    }

    /// Legend name.
    pub fn display_name(self) -> &'static str {
        match self {
            StrategyKind::AlwaysDefect          => "Raider",
            StrategyKind::AlwaysCooperate       => "Farmer",
            StrategyKind::TitForTat             => "TitTat",
            StrategyKind::ProbabilisticReactive => "Reactive",
        }
    }

    /// Plot colour tag.
    pub fn color(self) -> &'static str {
        match self {
            StrategyKind::AlwaysDefect          => "#000000",
            StrategyKind::AlwaysCooperate       => "#010101",
            StrategyKind::TitForTat             => "#020202",
            StrategyKind::ProbabilisticReactive => "tab:blue",
        }
    }

    /// Plot marker tag (matplotlib marker codes).
    pub fn marker(self) -> &'static str {
        match self {
            StrategyKind::AlwaysDefect          => ".",
            StrategyKind::AlwaysCooperate       => "s",
            StrategyKind::TitForTat             => "*",
            StrategyKind::ProbabilisticReactive => "*",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── KindTable ─────────────────────────────────────────────────────────────────

/// A fixed-size table with one `T` per [`StrategyKind`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KindTable<T>([T; StrategyKind::COUNT]);

impl<T> KindTable<T> {
    /// Build a table by evaluating `f` once per kind.
    pub fn from_fn(mut f: impl FnMut(StrategyKind) -> T) -> Self {
        KindTable(StrategyKind::ALL.map(&mut f))
    }

    /// `(kind, &value)` pairs in `StrategyKind::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (StrategyKind, &T)> + '_ {
        StrategyKind::ALL.into_iter().zip(self.0.iter())
    }

    /// Apply `f` to every entry, producing a new table.
    pub fn map<U>(&self, mut f: impl FnMut(StrategyKind, &T) -> U) -> KindTable<U> {
        KindTable::from_fn(|kind| f(kind, &self.0[kind.index()]))
    }
}

impl<T> Index<StrategyKind> for KindTable<T> {
    type Output = T;
    #[inline]
    fn index(&self, kind: StrategyKind) -> &T {
        &self.0[kind.index()]
    }
}

impl<T> IndexMut<StrategyKind> for KindTable<T> {
    #[inline]
    fn index_mut(&mut self, kind: StrategyKind) -> &mut T {
        &mut self.0[kind.index()]
    }
}
