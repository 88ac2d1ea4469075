//! Diagonal movement policy.

use crate::heuristic::Heuristic;

/// Which diagonal steps are legal, judged by the two orthogonal cells a
/// diagonal step passes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagonalMovement {
    /// 4-way movement only.
    #[default]
    Never,
    /// Every walkable diagonal, even between two blocked corners.
    Always,
    /// A diagonal only when both orthogonal corners are walkable.
    OnlyWhenNoObstacles,
    /// A diagonal unless both orthogonal corners are blocked.
    IfAtMostOneObstacle,
}

impl DiagonalMovement {
    /// Resolve the effective policy from the legacy flag pair.
    ///
    /// An explicit policy always wins. Otherwise `allow_diagonal = false`
    /// gives [`Never`](Self::Never), and `dont_cross_corners` picks between
    /// [`OnlyWhenNoObstacles`](Self::OnlyWhenNoObstacles) and
    /// [`IfAtMostOneObstacle`](Self::IfAtMostOneObstacle).
    pub fn resolve(explicit: Option<Self>, allow_diagonal: bool, dont_cross_corners: bool) -> Self {
        match explicit {
            Some(m) => m,
            None if !allow_diagonal => Self::Never,
            None if dont_cross_corners => Self::OnlyWhenNoObstacles,
            None => Self::IfAtMostOneObstacle,
        }
    }

    /// Whether any diagonal step may be taken.
    #[inline]
    pub fn allows_diagonals(self) -> bool {
        self != Self::Never
    }

    /// The admissible default heuristic: manhattan for 4-way movement,
    /// octile once diagonal steps (cost √2) are possible.
    pub fn default_heuristic(self) -> Heuristic {
        if self.allows_diagonals() {
            Heuristic::Octile
        } else {
            Heuristic::Manhattan
        }
    }

    /// Whether a diagonal step is admitted given the walkability of its two
    /// orthogonal corners.
    #[inline]
    pub(crate) fn admits(self, corner_a: bool, corner_b: bool) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::OnlyWhenNoObstacles => corner_a && corner_b,
            Self::IfAtMostOneObstacle => corner_a || corner_b,
        }
    }
}
