use crate::axis::Axis;
use crate::metric::Metric;

/// One chart to produce: which axis to sweep and which metric to plot.
///
/// The x values and x label come from the axis, the y label from the metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotPlan {
    pub axis: Axis,
    pub title: &'static str,
    pub metric: Metric,
}

/// Every chart the analysis needs, in the order they are rendered.
pub const PLOTS: [PlotPlan; 10] = [
    PlotPlan {
        axis: Axis::Pile,
        title: "Effect of Number of Piles on Execution Time",
        metric: Metric::Time,
    },
    PlotPlan {
        axis: Axis::DeckSize,
        title: "Effect of Increasing Deck Size on Execution Time",
        metric: Metric::Time,
    },
    PlotPlan {
        axis: Axis::Suit,
        title: "Effect of Number of Suits on Execution Time",
        metric: Metric::Time,
    },
    PlotPlan {
        axis: Axis::Rank,
        title: "Effect of Number of Ranks on Execution Time",
        metric: Metric::Time,
    },
    PlotPlan {
        axis: Axis::Pile,
        title: "Effect of Number of Piles on 'Winnability'",
        metric: Metric::SolvedFraction,
    },
    PlotPlan {
        axis: Axis::Suit,
        title: "Effect of Number of Suits on 'Winnability'",
        metric: Metric::SolvedFraction,
    },
    PlotPlan {
        axis: Axis::Pile,
        title: "Effect of Number of Piles on Node Count",
        metric: Metric::NodeCount,
    },
    PlotPlan {
        axis: Axis::Rank,
        title: "Effect of Number of Ranks on 'Winnability'",
        metric: Metric::SolvedFraction,
    },
    PlotPlan {
        axis: Axis::DeckSize,
        title: "Effect of Number of Cards on 'Winnability'",
        metric: Metric::SolvedFraction,
    },
    PlotPlan {
        axis: Axis::Seed,
        title: "Effect of Seed on Execution Time",
        metric: Metric::Time,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::chart::file_stem;

    #[test]
    fn test_output_names_are_unique() {
        let stems: HashSet<_> = PLOTS.iter().map(|p| file_stem(p.axis, p.metric)).collect();
        assert_eq!(stems.len(), PLOTS.len());
    }

    #[test]
    fn test_plan_order() {
        let stems: Vec<_> = PLOTS.iter().map(|p| file_stem(p.axis, p.metric)).collect();
        assert_eq!(
            stems,
            vec![
                "pile-time",
                "decksize-time",
                "suit-time",
                "rank-time",
                "pile-solution",
                "suit-solution",
                "pile-space",
                "rank-solution",
                "decksize-solution",
                "seed-time",
            ]
        );
    }
}
