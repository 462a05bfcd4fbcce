use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The benchmarked solver implementations being compared.
///
/// The set is closed; [`SolverVariant::ALL`] fixes the order in which
/// their curves are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SolverVariant {
    /// List based single objective (Black Hole) solver
    ListSingle,
    /// List based multi objective (Worm Hole) solver
    ListMulti,
    /// Recursion based single objective (Black Hole) solver
    RecursiveSingle,
}

impl SolverVariant {
    pub const ALL: [SolverVariant; 3] = [
        SolverVariant::ListSingle,
        SolverVariant::ListMulti,
        SolverVariant::RecursiveSingle,
    ];

    /// Name of this variant's directory under the results root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            SolverVariant::ListSingle => "part2",
            SolverVariant::ListMulti => "part3",
            SolverVariant::RecursiveSingle => "recursive-part2",
        }
    }

    /// Legend label.
    pub fn label(&self) -> &'static str {
        match self {
            SolverVariant::ListSingle => "List-based Black Hole Solver",
            SolverVariant::ListMulti => "List-based Worm Hole Solver",
            SolverVariant::RecursiveSingle => "Recursive-based Black Hole Solver",
        }
    }

    /// Line color as RGB.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SolverVariant::ListSingle => (0, 128, 0),
            SolverVariant::ListMulti => (255, 0, 0),
            SolverVariant::RecursiveSingle => (0, 0, 255),
        }
    }
}

impl Display for SolverVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
