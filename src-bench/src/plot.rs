//! Convergence plots: mean best value with a one standard deviation band

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use plotly::common::{Fill, Line, Mode, Title};
use plotly::layout::{Axis, AxisType, Legend};
use plotly::{Layout, Plot, Scatter};

use crate::error::{BenchError, Result};
use crate::report::{SeriesFiles, read_series};
use crate::stats::TrialMatrix;

const COLORS: [&str; 6] = [
    "31, 119, 180",
    "214, 39, 40",
    "44, 160, 44",
    "255, 127, 14",
    "148, 103, 189",
    "140, 86, 75",
];

/// Mean and standard deviation of one algorithm over the sampled iterations
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceSeries {
    pub label: String,
    pub iterations: Vec<usize>,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl ConvergenceSeries {
    pub fn from_matrix(label: &str, matrix: &TrialMatrix) -> Self {
        Self {
            label: label.to_string(),
            iterations: matrix.iterations().to_vec(),
            mean: matrix.average_at_time().to_vec(),
            std: matrix.std_at_time().to_vec(),
        }
    }

    /// Rebuild from the `_avg.csv` and `_var.csv` files of `label` in `dir`
    pub fn from_files(dir: &Path, label: &str) -> Result<Self> {
        let files = SeriesFiles::new(dir, label);
        let (iterations, avg) = read_series(&files.avg)?;
        let (_, var) = read_series(&files.var)?;
        let first_row = |rows: Vec<Vec<f64>>, path: &Path| {
            rows.into_iter()
                .next()
                .filter(|row| row.len() == iterations.len())
                .ok_or_else(|| BenchError::InvalidSeriesFile {
                    path: path.to_path_buf(),
                    reason: "expected one row matching the header".into(),
                })
        };
        let mean = first_row(avg, &files.avg)?;
        let std = first_row(var, &files.var)?.into_iter().map(f64::sqrt).collect();
        Ok(Self { label: label.to_string(), iterations, mean, std })
    }
}

/// Build the figure: one band and one mean curve per series
pub fn convergence_plot(function_name: &str, series: &[ConvergenceSeries]) -> Plot {
    let mut plot = Plot::new();
    let positive = series.iter().all(|s| s.mean.iter().all(|&m| m > 0.0));

    for (i, s) in series.iter().enumerate() {
        let color = COLORS[i % COLORS.len()];
        let x: Vec<usize> = s.iterations.clone();
        let upper: Vec<f64> = s.mean.iter().zip(&s.std).map(|(m, d)| m + d).collect();
        let lower: Vec<f64> = s.mean.iter().zip(&s.std).map(|(m, d)| m - d).collect();

        let lower_trace = Scatter::new(x.clone(), lower)
            .mode(Mode::Lines)
            .name(format!("{} - std", s.label))
            .show_legend(false)
            .line(Line::new().width(0.0).color(format!("rgba({}, 0.0)", color)));
        let upper_trace = Scatter::new(x.clone(), upper)
            .mode(Mode::Lines)
            .name(format!("{} ± std", s.label))
            .fill(Fill::ToNextY)
            .fill_color(format!("rgba({}, 0.2)", color))
            .line(Line::new().width(0.0).color(format!("rgba({}, 0.0)", color)));
        let mean_trace = Scatter::new(x, s.mean.clone())
            .mode(Mode::Lines)
            .name(&s.label)
            .line(Line::new().color(format!("rgba({}, 1.0)", color)).width(3.0));

        plot.add_trace(lower_trace);
        plot.add_trace(upper_trace);
        plot.add_trace(mean_trace);
    }

    // a log axis cannot show non-positive means
    let y_type = if positive { AxisType::Log } else { AxisType::Linear };
    let layout = Layout::new()
        .title(Title::with_text(format!("Convergence on {}", function_name)))
        .width(1000)
        .height(700)
        .x_axis(Axis::new().title(Title::with_text("Iteration")).type_(AxisType::Linear))
        .y_axis(Axis::new().title(Title::with_text("Best value")).type_(y_type))
        .legend(Legend::new().x(0.7).y(0.9));
    plot.set_layout(layout);
    plot
}

/// Write the plot of `series` to `<plots>/<function>_convergence.html`
pub fn write_convergence_plot(
    plots_dir: &Path,
    function_name: &str,
    series: &[ConvergenceSeries],
) -> Result<PathBuf> {
    let path = plots_dir.join(format!("{}_convergence.html", function_name));
    let plot = convergence_plot(function_name, series);
    fs::write(&path, plot.to_html())?;
    info!("convergence plot saved to {}", path.display());
    Ok(path)
}
