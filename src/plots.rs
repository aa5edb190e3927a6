//! PNG figures for the three concentration-of-measure views.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::core::histogram::Histogram;
use crate::core::sweep::{BoundarySeries, IntervalSeries, SingleDimension};
use crate::core::util::format_compact;

const BELOW_COLOR: RGBColor = RGBColor(31, 119, 180);
const WITHIN_COLOR: RGBColor = RGBColor(255, 127, 14);
const ABOVE_COLOR: RGBColor = RGBColor(44, 160, 44);

pub const HISTOGRAM_FILE_PREFIX: &str = "norm_histogram_n";
pub const BOUNDARY_FILE: &str = "boundary_sweep.png";
pub const INTERVAL_FILE: &str = "interval_sweep.png";

pub fn histogram_file_name(dim: usize) -> String {
    format!("{HISTOGRAM_FILE_PREFIX}{dim}.png")
}

pub fn histogram_title(dim: usize) -> String {
    format!("Distribution of distance from origin for n = {dim}")
}

/// Density histogram of the squared norms with red markers at the bounds.
pub fn render_norm_histogram(
    out_path: &Path,
    title: &str,
    single: &SingleDimension,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let hist = Histogram::auto(&single.norms)?;
    let bounds = single.bounds;
    let x_lo = hist.edges[0].min(bounds.lower);
    let x_hi = hist.edges[hist.edges.len() - 1].max(bounds.upper);
    let y_hi = hist.max_density().max(1e-12) * 1.1;

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0.0f64..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("squared norm")
        .y_desc("density")
        .draw()?;

    chart.draw_series(
        hist.iter_bins()
            .map(|(l, r, d)| Rectangle::new([(l, 0.0), (r, d)], BLUE.mix(0.6).filled())),
    )?;

    for x in [bounds.lower, bounds.upper] {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, 0.0), (x, y_hi)],
            RED.stroke_width(2),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Normalized lower/upper bounds against dimension.
pub fn render_boundary_sweep(
    out_path: &Path,
    series: &BoundarySeries,
    sigma_factor: f64,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    if series.is_empty() {
        return Ok(());
    }
    let (x_lo, x_hi) = dim_axis(&series.dims);
    let (y_min, y_max) = series.value_range().unwrap_or((0.0, 2.0));
    let pad = ((y_max - y_min) * 0.05).max(1e-3);

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let caption = format!(
        "Ratio between {}-standard deviation boundaries and n as n increases",
        format_compact(sigma_factor)
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, (y_min - pad)..(y_max + pad))?;

    chart
        .configure_mesh()
        .x_desc("dimensions")
        .y_desc("boundary / n")
        .draw()?;

    let lower_points = series.dims.iter().zip(&series.lower).map(|(&d, &v)| (d as f64, v));
    let upper_points = series.dims.iter().zip(&series.upper).map(|(&d, &v)| (d as f64, v));

    chart
        .draw_series(LineSeries::new(lower_points, &BLUE))?
        .label("lower_bounds divided by n")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(upper_points, &RED))?
        .label("upper_bounds divided by n")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Stacked areas of the below/within/above fractions against dimension.
pub fn render_interval_sweep(
    out_path: &Path,
    series: &IntervalSeries,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    if series.is_empty() {
        return Ok(());
    }
    let (x_lo, x_hi) = dim_axis(&series.dims);
    let [below_label, within_label, above_label] = interval_labels(series.band);

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Probability that a sample point will be at some distance from the origin",
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0.0f64..1.0f64)?;

    chart
        .configure_mesh()
        .x_desc("dimensions")
        .y_desc("probability")
        .draw()?;

    // Layers are drawn tallest first so each lower stack covers the one above.
    let xs: Vec<f64> = series.dims.iter().map(|&d| d as f64).collect();
    let top: Vec<f64> = (0..series.len())
        .map(|i| series.below[i] + series.within[i] + series.above[i])
        .collect();
    let middle: Vec<f64> = (0..series.len())
        .map(|i| series.below[i] + series.within[i])
        .collect();
    let layers = [
        (top, ABOVE_COLOR, above_label),
        (middle, WITHIN_COLOR, within_label),
        (series.below.clone(), BELOW_COLOR, below_label),
    ];

    for (ys, color, label) in layers {
        let points: Vec<(f64, f64)> = xs.iter().copied().zip(ys).collect();
        chart
            .draw_series(AreaSeries::new(points, 0.0, color.filled()))?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Legend labels for the three bands, e.g. `d^2 < 0.95n`.
pub fn interval_labels(band: f64) -> [String; 3] {
    let lo = format_compact(1.0 - band);
    let hi = format_compact(1.0 + band);
    [
        format!("d^2 < {lo}n"),
        format!("{lo}n <= d^2 <= {hi}n"),
        format!("d^2 > {hi}n"),
    ]
}

fn dim_axis(dims: &[usize]) -> (f64, f64) {
    let lo = dims.first().copied().unwrap_or(1) as f64;
    let hi = dims.last().copied().unwrap_or(1) as f64;
    if hi > lo { (lo, hi) } else { (lo, lo + 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_band() {
        let [a, b, c] = interval_labels(0.05);
        assert_eq!(a, "d^2 < 0.95n");
        assert_eq!(b, "0.95n <= d^2 <= 1.05n");
        assert_eq!(c, "d^2 > 1.05n");
    }

    #[test]
    fn single_dimension_axis_is_widened() {
        assert_eq!(dim_axis(&[7]), (7.0, 8.0));
        assert_eq!(dim_axis(&[1, 2, 3]), (1.0, 3.0));
    }

    #[test]
    fn file_names() {
        assert_eq!(histogram_file_name(100), "norm_histogram_n100.png");
        assert_eq!(
            histogram_title(100),
            "Distribution of distance from origin for n = 100"
        );
    }
}
