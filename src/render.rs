//! PDF output for comparison charts.
//!
//! Charts are drawn with `plotters` into an in-memory SVG document, which
//! `svg2pdf` then converts to a PDF page. Every solver variant gets one
//! dashed line with circle markers in its own color. Axis ranges are
//! derived from the plotted points so sweeps as different as seeds (1-10)
//! and deck sizes (5-480000) both fill the drawing area.

use std::fmt::Display;
use std::ops::Range;
use std::path::Path;

use plotters::prelude::{
    ChartBuilder, Circle, Color, DashedLineSeries, IntoDrawingArea, PathElement, RGBColor,
    SVGBackend, SeriesLabelPosition, BLACK, WHITE,
};
use tracing::{debug, instrument};

use crate::chart::Chart;
use crate::errors::{GraphError, Result};

const WIDTH: u32 = 2400;
const HEIGHT: u32 = 1200;
const POINT_SIZE: u32 = 6;
const DASH_SIZE: u32 = 12;
const DASH_SPACING: u32 = 8;

fn render_error<E: Display>(title: &str) -> impl Fn(E) -> GraphError + '_ {
    move |e| GraphError::Render {
        chart: title.to_string(),
        message: e.to_string(),
    }
}

/// Pad a data range so that points do not sit on the chart border.
fn padded(min: f64, max: f64) -> Range<f64> {
    if max > min {
        let pad = (max - min) * 0.05;
        (min - pad)..(max + pad)
    } else {
        (min - 1.0)..(max + 1.0)
    }
}

/// X and Y ranges covering every point of the chart.
///
/// The Y range always includes zero. A chart with no points gets unit
/// ranges.
pub fn chart_ranges(chart: &Chart) -> (Range<f64>, Range<f64>) {
    let points = chart.series.iter().flat_map(|s| s.points.iter());

    let mut x_bounds: Option<(f64, f64)> = None;
    let mut y_max = 0.0_f64;
    let mut y_min = 0.0_f64;
    for p in points {
        let x = f64::from(p.x);
        x_bounds = Some(match x_bounds {
            Some((lo, hi)) => (lo.min(x), hi.max(x)),
            None => (x, x),
        });
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    match x_bounds {
        Some((lo, hi)) => (padded(lo, hi), padded(y_min, y_max)),
        None => (0.0..1.0, 0.0..1.0),
    }
}

/// Draw `chart` as an SVG document.
#[instrument(level = "debug", skip(chart), fields(title = %chart.title))]
pub fn render_svg(chart: &Chart) -> Result<String> {
    let (x_range, y_range) = chart_ranges(chart);
    debug!(?x_range, ?y_range, "Drawing chart");

    let err = render_error(&chart.title);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(&err)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 40))
            .margin(30)
            .x_label_area_size(80)
            .y_label_area_size(120)
            .build_cartesian_2d(x_range, y_range)
            .map_err(&err)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .label_style(("sans-serif", 25))
            .axis_desc_style(("sans-serif", 25))
            .draw()
            .map_err(&err)?;

        for series in &chart.series {
            let (r, g, b) = series.variant.rgb();
            let color = RGBColor(r, g, b);
            let points: Vec<(f64, f64)> = series
                .points
                .iter()
                .map(|p| (f64::from(p.x), p.y))
                .collect();

            ctx.draw_series(DashedLineSeries::new(
                points.iter().copied(),
                DASH_SIZE,
                DASH_SPACING,
                color.stroke_width(3),
            ))
            .map_err(&err)?
            .label(series.variant.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(3))
            });

            ctx.draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, POINT_SIZE, color.filled())),
            )
            .map_err(&err)?;
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(("sans-serif", 25))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(&err)?;

        root.present().map_err(&err)?;
    }
    Ok(svg)
}

/// Convert an SVG document into a single page PDF.
pub fn svg_to_pdf(svg: &str, title: &str) -> Result<Vec<u8>> {
    let mut options = svg2pdf::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = svg2pdf::usvg::Tree::from_str(svg, &options).map_err(render_error(title))?;
    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(render_error(title))
}

/// Draw `chart` and write it as a PDF document to `path`.
pub fn write_pdf(chart: &Chart, path: &Path) -> Result<()> {
    let pdf = svg_to_pdf(&render_svg(chart)?, &chart.title)?;
    std::fs::write(path, pdf).map_err(|e| GraphError::io(path, e))?;
    debug!(?path, "Wrote chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::aggregate::{Point, Series};
    use crate::axis::Axis;
    use crate::metric::Metric;
    use crate::variant::SolverVariant;

    fn sample_chart() -> Chart {
        let mut list = Series::new(SolverVariant::ListSingle);
        list.points = vec![Point { x: 2, y: 10.0 }, Point { x: 8, y: 40.0 }];
        let mut multi = Series::new(SolverVariant::ListMulti);
        multi.points = vec![Point { x: 4, y: 5.0 }];

        Chart {
            axis: Axis::Pile,
            metric: Metric::Time,
            title: "Effect of Number of Piles on Execution Time".to_string(),
            x_label: Axis::Pile.label().to_string(),
            y_label: Metric::Time.y_label().to_string(),
            series: vec![list, multi, Series::new(SolverVariant::RecursiveSingle)],
        }
    }

    #[test]
    fn test_ranges_cover_points() {
        let (x, y) = chart_ranges(&sample_chart());
        assert!(x.start < 2.0 && x.end > 8.0);
        assert!(y.start <= 0.0 && y.end > 40.0);
    }

    #[test]
    fn test_ranges_for_empty_chart() {
        let mut chart = sample_chart();
        chart.series.iter_mut().for_each(|s| s.points.clear());
        assert_eq!(chart_ranges(&chart), (0.0..1.0, 0.0..1.0));
    }

    #[test]
    fn test_ranges_for_single_point() {
        let mut chart = sample_chart();
        chart.series = vec![Series {
            points: vec![Point { x: 5, y: 0.0 }],
            ..Series::new(SolverVariant::ListSingle)
        }];
        let (x, y) = chart_ranges(&chart);
        assert_eq!(x, 4.0..6.0);
        assert_eq!(y, -1.0..1.0);
    }

    #[test]
    fn test_svg_has_title_and_legend() {
        let svg = render_svg(&sample_chart()).unwrap();

        assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
        assert!(svg.contains("Effect of Number of Piles on Execution Time"));
        assert!(svg.contains("List-based Black Hole Solver"));
        assert!(svg.contains("List-based Worm Hole Solver"));
        assert!(svg.contains("Recursive-based Black Hole Solver"));
    }

    #[test]
    fn test_lines_are_dashed() {
        let svg = render_svg(&sample_chart()).unwrap();
        // A solid line would be one path plus the legend entry.
        let green = svg.matches("stroke=\"#008000\"").count();
        assert!(green > 2, "expected dash segments, found {green} green strokes");
    }

    #[test]
    fn test_write_pdf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pile-time.pdf");

        write_pdf(&sample_chart(), &path).unwrap();

        let pdf = std::fs::read(&path).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_invalid_svg_is_a_render_error() {
        let err = svg_to_pdf("not an svg document", "broken").unwrap_err();
        assert!(matches!(err, GraphError::Render { ref chart, .. } if chart == "broken"));
    }

    #[test]
    fn test_write_pdf_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("chart.pdf");

        let err = write_pdf(&sample_chart(), &path).unwrap_err();
        assert!(matches!(err, GraphError::Io { .. }));
    }
}
