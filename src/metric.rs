use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The scalar quantity extracted from each result record and plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Metric {
    /// Elapsed search time in milliseconds
    Time,
    /// Number of nodes visited during the search
    NodeCount,
    /// Percentage of runs that found a solution
    SolvedFraction,
}

impl Metric {
    /// Index of this metric's field in a colon separated result record.
    pub fn field_index(&self) -> usize {
        match self {
            Metric::Time => 1,
            Metric::NodeCount => 2,
            Metric::SolvedFraction => 3,
        }
    }

    /// Word used in output file names.
    pub fn focus(&self) -> &'static str {
        match self {
            Metric::Time => "time",
            Metric::NodeCount => "space",
            Metric::SolvedFraction => "solution",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Metric::Time => "Time taken to search (Milliseconds)",
            Metric::NodeCount => "Number of nodes visited during execution",
            Metric::SolvedFraction => "Percentage of puzzles solved",
        }
    }

    /// Whether readings for this metric are parsed as numbers.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Metric::SolvedFraction)
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.focus())
    }
}

/// Arithmetic mean, or `None` for no readings.
pub fn mean(readings: &[f64]) -> Option<f64> {
    if readings.is_empty() {
        return None;
    }
    Some(readings.iter().sum::<f64>() / readings.len() as f64)
}

/// Percentage of `true` readings rounded to two decimal places, or `None`
/// for no readings.
pub fn solved_percent(readings: &[bool]) -> Option<f64> {
    if readings.is_empty() {
        return None;
    }
    let solved = readings.iter().filter(|&&r| r).count();
    Some(round2(solved as f64 / readings.len() as f64 * 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_field_indexes() {
        assert_eq!(Metric::Time.field_index(), 1);
        assert_eq!(Metric::NodeCount.field_index(), 2);
        assert_eq!(Metric::SolvedFraction.field_index(), 3);
    }

    #[test]
    fn test_focus_words() {
        assert_eq!(Metric::Time.focus(), "time");
        assert_eq!(Metric::NodeCount.focus(), "space");
        assert_eq!(Metric::SolvedFraction.focus(), "solution");
    }

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[10.0, 20.0, 30.0]).unwrap(), 20.0);
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_solved_percent() {
        assert_relative_eq!(
            solved_percent(&[true, true, false, true]).unwrap(),
            75.0
        );
        assert!(solved_percent(&[]).is_none());
    }

    #[test]
    fn test_solved_percent_rounds_to_two_places() {
        // 1 / 3 = 33.333...
        assert_relative_eq!(solved_percent(&[true, false, false]).unwrap(), 33.33);
        assert_relative_eq!(solved_percent(&[true, true, false]).unwrap(), 66.67);
    }
}
