//! Multi-series line charts.

use super::{color, escape, format_tick, render_frame, render_y_axis, ChartConfig, Scale};
use super::{MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP};
use crate::parser::Table;
use crate::runs::{time_axis, AlignedRun};
use crate::utils::error::ChartError;
use log::{debug, info};

/// One plotted line
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl ChartSeries {
    pub fn new(label: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            xs,
            ys,
        }
    }

    /// Values sampled every `timestep`, starting at zero
    pub fn from_values(label: impl Into<String>, values: &[f64], timestep: f64) -> Self {
        Self::new(label, time_axis(values.len(), timestep), values.to_vec())
    }

    /// One line per table column
    pub fn from_table(table: &Table, timestep: f64) -> Vec<Self> {
        let xs = time_axis(table.len(), timestep);
        table
            .columns()
            .iter()
            .enumerate()
            .map(|(c, name)| {
                let ys = table.rows().iter().map(|row| row[c]).collect();
                Self::new(name.clone(), xs.clone(), ys)
            })
            .collect()
    }
}

impl From<&AlignedRun> for ChartSeries {
    fn from(run: &AlignedRun) -> Self {
        Self::new(run.label.clone(), run.time.clone(), run.values.clone())
    }
}

/// Render series as lines over shared axes
///
/// **Public** - main entry point for time plots
///
/// Non-finite samples break the line instead of being drawn.
///
/// # Errors
/// * `ChartError::LengthMismatch` - a series has different x and y lengths
/// * `ChartError::NoData` - no finite point in any series
pub fn render_line_chart(series: &[ChartSeries], config: &ChartConfig) -> Result<String, ChartError> {
    for s in series {
        if s.xs.len() != s.ys.len() {
            return Err(ChartError::LengthMismatch {
                label: s.label.clone(),
                xs: s.xs.len(),
                ys: s.ys.len(),
            });
        }
    }

    let (x_range, y_range) = bounds(series).ok_or(ChartError::NoData)?;
    info!(
        "Rendering line chart '{}' with {} series",
        config.title,
        series.len()
    );

    let (w, h) = (config.width as f64, config.height as f64);
    let x = Scale::new(x_range.0, x_range.1, MARGIN_LEFT, w - MARGIN_RIGHT);
    let y = Scale::new(y_range.0, y_range.1, h - MARGIN_BOTTOM, MARGIN_TOP);

    let mut svg = String::new();
    render_frame(&mut svg, config);
    render_y_axis(&mut svg, &y, config);
    render_x_axis(&mut svg, &x, h - MARGIN_BOTTOM);

    for (i, s) in series.iter().enumerate() {
        for segment in segments(s, &x, &y) {
            svg.push_str(&format!(
                r#"<polyline fill="none" stroke="{}" stroke-width="1.5" points="{}"/>"#,
                color(i),
                segment
            ));
        }
    }

    render_legend(&mut svg, series, w - MARGIN_RIGHT);
    svg.push_str("</svg>");

    debug!("Line chart rendered ({} bytes)", svg.len());
    Ok(svg)
}

/// Min/max of finite x and y over all series
///
/// **Private** - None when nothing is plottable
fn bounds(series: &[ChartSeries]) -> Option<((f64, f64), (f64, f64))> {
    let mut points = series
        .iter()
        .flat_map(|s| s.xs.iter().zip(&s.ys))
        .filter(|(x, y)| x.is_finite() && y.is_finite());

    let (&x0, &y0) = points.next()?;
    let init = ((x0, x0), (y0, y0));

    Some(points.fold(init, |((xmin, xmax), (ymin, ymax)), (&x, &y)| {
        ((xmin.min(x), xmax.max(x)), (ymin.min(y), ymax.max(y)))
    }))
}

/// SVG `points` strings, one per unbroken run of finite samples
fn segments(series: &ChartSeries, x: &Scale, y: &Scale) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for (&px, &py) in series.xs.iter().zip(&series.ys) {
        if px.is_finite() && py.is_finite() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&format!("{:.2},{:.2}", x.map(px), y.map(py)));
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }

    out
}

fn render_x_axis(out: &mut String, x: &Scale, baseline: f64) {
    out.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
        x.start, baseline, x.end, baseline
    ));
    for tick in x.ticks() {
        let px = x.map(tick);
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="middle">{}</text>"#,
            px,
            baseline + 18.0,
            format_tick(tick)
        ));
    }
}

fn render_legend(out: &mut String, series: &[ChartSeries], right: f64) {
    let x = right - 170.0;
    for (i, s) in series.iter().enumerate() {
        let y = MARGIN_TOP + 10.0 + i as f64 * 18.0;
        out.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="14" height="4" fill="{}"/>"#,
            x,
            y - 4.0,
            color(i)
        ));
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12">{}</text>"#,
            x + 20.0,
            y,
            escape(&s.label)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_chart() {
        let series = vec![
            ChartSeries::from_values("fast", &[1.0, 3.0, 2.0], 0.5),
            ChartSeries::from_values("slow & steady", &[2.0, 2.0], 1.0),
        ];
        let config = ChartConfig::new("Power Over Time").with_y_label("Power [W]");

        let svg = render_line_chart(&series, &config).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("slow &amp; steady"));
        assert!(svg.contains("Power [W]"));
    }

    #[test]
    fn test_nan_breaks_line() {
        let series = vec![ChartSeries::from_values("v", &[1.0, f64::NAN, 2.0, 3.0], 1.0)];
        let svg = render_line_chart(&series, &ChartConfig::default()).unwrap();
        assert_eq!(svg.matches("<polyline").count(), 2);
    }

    #[test]
    fn test_no_data() {
        assert_eq!(
            render_line_chart(&[], &ChartConfig::default()),
            Err(ChartError::NoData)
        );
        let empty = vec![ChartSeries::from_values("v", &[], 1.0)];
        assert_eq!(
            render_line_chart(&empty, &ChartConfig::default()),
            Err(ChartError::NoData)
        );
    }

    #[test]
    fn test_length_mismatch() {
        let bad = vec![ChartSeries::new("v", vec![0.0, 1.0], vec![1.0])];
        assert!(matches!(
            render_line_chart(&bad, &ChartConfig::default()),
            Err(ChartError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_from_table_one_series_per_column() {
        let table = Table::from_columns(vec![
            ("a".to_string(), vec![1.0, 2.0]),
            ("b".to_string(), vec![3.0, 4.0]),
        ])
        .unwrap();

        let series = ChartSeries::from_table(&table, 0.1);
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].label, "b");
        assert_eq!(series[1].xs, vec![0.0, 0.1]);
        assert_eq!(series[1].ys, vec![3.0, 4.0]);
    }
}
