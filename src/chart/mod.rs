//! SVG chart rendering.
//!
//! Charts are written by hand as SVG strings (no plotting backend):
//! - line charts for one or more time series on shared axes
//! - bar charts for per-run scalar totals such as energy

pub mod bar;
pub mod line;

pub use bar::render_bar_chart;
pub use line::{render_line_chart, ChartSeries};

use crate::utils::config::{CHART_HEIGHT, CHART_WIDTH};

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: "Time [ms]".to_string(),
            y_label: String::new(),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

// Plot area margins in pixels
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

const TICKS: usize = 5;

/// matplotlib's default cycle, so charts look like the old ones
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Linear mapping from a data range onto a pixel range
#[derive(Debug, Clone, Copy)]
struct Scale {
    min: f64,
    max: f64,
    start: f64,
    end: f64,
}

impl Scale {
    /// A flat range is widened so every point still maps somewhere sensible
    fn new(min: f64, max: f64, start: f64, end: f64) -> Self {
        let (min, max) = if max > min {
            (min, max)
        } else {
            (min - 1.0, max + 1.0)
        };
        Self { min, max, start, end }
    }

    fn map(&self, value: f64) -> f64 {
        self.start + (value - self.min) / (self.max - self.min) * (self.end - self.start)
    }

    fn ticks(&self) -> Vec<f64> {
        (0..TICKS)
            .map(|i| self.min + (self.max - self.min) * i as f64 / (TICKS - 1) as f64)
            .collect()
    }
}

fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 100.0 || value == 0.0 {
        format!("{:.0}", value)
    } else if magnitude >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// Escape text for use inside SVG elements and attributes
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Open the document and draw title and axis labels
fn render_frame(out: &mut String, config: &ChartConfig) {
    let (w, h) = (config.width as f64, config.height as f64);

    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    out.push_str(r#"<style>text { font-family: sans-serif; }</style>"#);
    out.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    ));
    out.push_str(&format!(
        r#"<text x="{:.1}" y="30" font-size="18" text-anchor="middle" font-weight="bold">{}</text>"#,
        w / 2.0,
        escape(&config.title)
    ));
    out.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" font-size="14" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + (w - MARGIN_LEFT - MARGIN_RIGHT) / 2.0,
        h - 15.0,
        escape(&config.x_label)
    ));
    out.push_str(&format!(
        r#"<text x="20" y="{:.1}" font-size="14" text-anchor="middle" transform="rotate(-90 20 {:.1})">{}</text>"#,
        h / 2.0,
        h / 2.0,
        escape(&config.y_label)
    ));
}

/// Draw y grid lines with tick labels
fn render_y_axis(out: &mut String, y: &Scale, config: &ChartConfig) {
    let right = config.width as f64 - MARGIN_RIGHT;
    for tick in y.ticks() {
        let py = y.map(tick);
        out.push_str(&format!(
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#dddddd" stroke-dasharray="4 3"/>"##,
            MARGIN_LEFT, py, right, py
        ));
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 6.0,
            py + 4.0,
            format_tick(tick)
        ));
    }
}
