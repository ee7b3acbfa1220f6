//! `response` command: sweep a designed filter and report its
//! magnitude curve as a summary, an ASCII plot, or a CSV/JSON export.

use std::fs;
use std::path::PathBuf;

use super::common::{describe, FilterArgs};
use crate::parse::parse_scale;
use clap::Args;
use filtra_core::{
    format_tick_hz, log_position_to_hz, AxisRange, Coefficients, FrequencyResponse, PlotScale,
    DEFAULT_POINTS,
};
use tracing::{debug, info};

const PLOT_WIDTH: usize = 64;
const PLOT_HEIGHT: usize = 20;

/// Arguments for the `response` subcommand.
#[derive(Args)]
pub struct ResponseArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Frequency scale: `log` or `linear`
    #[arg(long, default_value = "log")]
    scale: String,

    /// Number of sweep points
    #[arg(long, default_value_t = DEFAULT_POINTS)]
    points: usize,

    /// Write the curve to a file (`.json` for JSON, anything else CSV)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Draw an ASCII plot of the curve
    #[arg(long)]
    plot: bool,
}

pub fn run(args: &ResponseArgs) -> anyhow::Result<()> {
    let (filter, params) = args.filter.resolve()?;
    let scale = parse_scale(&args.scale)?;
    anyhow::ensure!(args.points >= 2, "a sweep needs at least two points");

    let coeffs = Coefficients::design(filter, &params);
    let response =
        FrequencyResponse::evaluate(&coeffs, scale, params.sample_rate_hz, args.points);
    let axis = AxisRange::for_filter(filter, response.min_db, response.max_db);

    debug!(
        points = response.points.len(),
        min_db = response.min_db,
        max_db = response.max_db,
        "evaluated frequency response"
    );

    println!("{}", describe(filter, &params));
    println!(
        "  {} points, {} sweep: min {:.2} dB, max {:.2} dB (axis {:.0}..{:.0} dB)",
        response.points.len(),
        match scale {
            PlotScale::Linear => "linear",
            PlotScale::Logarithmic => "log",
        },
        response.min_db,
        response.max_db,
        axis.min_db,
        axis.max_db,
    );

    if args.plot {
        println!();
        plot(&response, axis, scale, params.sample_rate_hz);
    }

    if let Some(path) = &args.output {
        export(path, &response, scale, params.sample_rate_hz)?;
        info!(path = %path.display(), "wrote response curve");
        println!("wrote {}", path.display());
    }

    Ok(())
}

/// Chart row a magnitude lands on: row 0 is `axis.max_db`, the bottom
/// row is `axis.min_db`; out-of-window values clip to the edge rows.
fn chart_row(db: f64, axis: AxisRange) -> usize {
    let level = ((axis.max_db - db) / axis.span_db() * (PLOT_HEIGHT - 1) as f64).round();
    level.clamp(0.0, (PLOT_HEIGHT - 1) as f64) as usize
}

/// Resolve a sweep sample to its frequency in Hz.
fn point_hz(x: f64, scale: PlotScale, sample_rate_hz: f64) -> f64 {
    match scale {
        PlotScale::Linear => x,
        PlotScale::Logarithmic => log_position_to_hz(x, sample_rate_hz),
    }
}

fn export(
    path: &PathBuf,
    response: &FrequencyResponse,
    scale: PlotScale,
    sample_rate_hz: f64,
) -> anyhow::Result<()> {
    if path.extension().is_some_and(|ext| ext == "json") {
        let doc = json_document(response, scale, sample_rate_hz);
        fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    } else {
        fs::write(path, csv_document(response, scale, sample_rate_hz))?;
    }
    Ok(())
}

fn json_document(
    response: &FrequencyResponse,
    scale: PlotScale,
    sample_rate_hz: f64,
) -> serde_json::Value {
    let points: Vec<_> = response
        .points
        .iter()
        .map(|p| {
            serde_json::json!({
                "frequency_hz": point_hz(p.x, scale, sample_rate_hz),
                "magnitude_db": p.magnitude_db,
            })
        })
        .collect();
    serde_json::json!({
        "min_db": response.min_db,
        "max_db": response.max_db,
        "points": points,
    })
}

fn csv_document(response: &FrequencyResponse, scale: PlotScale, sample_rate_hz: f64) -> String {
    let mut csv = String::from("frequency_hz,magnitude_db\n");
    for p in &response.points {
        csv.push_str(&format!(
            "{:.6},{:.6}\n",
            point_hz(p.x, scale, sample_rate_hz),
            p.magnitude_db
        ));
    }
    csv
}

/// Render the curve as a fixed-size character grid, clipped to the
/// display axis.
fn plot(response: &FrequencyResponse, axis: AxisRange, scale: PlotScale, sample_rate_hz: f64) {
    let span = axis.span_db();
    let n = response.points.len();

    // One column per bucket of sweep samples, keeping the loudest
    // sample so narrow peaks stay visible.
    let mut columns = [f64::NEG_INFINITY; PLOT_WIDTH];
    for (i, p) in response.points.iter().enumerate() {
        let col = (i * PLOT_WIDTH / n).min(PLOT_WIDTH - 1);
        if p.magnitude_db > columns[col] {
            columns[col] = p.magnitude_db;
        }
    }

    for row in 0..PLOT_HEIGHT {
        let row_db = axis.max_db - span * row as f64 / (PLOT_HEIGHT - 1) as f64;
        let mut line = format!("{row_db:>7.1} |");
        for &db in &columns {
            let ch = if db.is_finite() && chart_row(db, axis) == row {
                '*'
            } else if row_db.abs() < span / (PLOT_HEIGHT - 1) as f64 / 2.0 {
                '-'
            } else {
                ' '
            };
            line.push(ch);
        }
        println!("{line}");
    }

    let left = point_hz(response.points[0].x, scale, sample_rate_hz);
    let mid = point_hz(response.points[n / 2].x, scale, sample_rate_hz);
    let right = point_hz(response.points[n - 1].x, scale, sample_rate_hz);
    println!(
        "{:>8} {:^width$} {:>8} Hz",
        format_tick_hz(left),
        format_tick_hz(mid),
        format_tick_hz(right),
        width = PLOT_WIDTH.saturating_sub(16),
    );
}
