//! Labelled bar charts (per-run totals).

use super::{color, escape, render_frame, render_y_axis, ChartConfig, Scale};
use super::{MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP};
use crate::utils::error::ChartError;
use log::info;

/// Render one bar per `(label, value)`, value printed above each bar
///
/// The y axis always includes zero.
///
/// # Errors
/// * `ChartError::NoData` - no bars, or no finite value
pub fn render_bar_chart(bars: &[(String, f64)], config: &ChartConfig) -> Result<String, ChartError> {
    let finite: Vec<f64> = bars.iter().map(|(_, v)| *v).filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(ChartError::NoData);
    }

    info!("Rendering bar chart '{}' with {} bars", config.title, bars.len());

    let low = finite.iter().copied().fold(0.0, f64::min);
    let high = finite.iter().copied().fold(0.0, f64::max);
    // Headroom for the value labels
    let span = (high - low).max(f64::EPSILON);
    let (w, h) = (config.width as f64, config.height as f64);
    let y = Scale::new(
        if low < 0.0 { low - span * 0.1 } else { 0.0 },
        high + span * 0.1,
        h - MARGIN_BOTTOM,
        MARGIN_TOP,
    );

    let mut svg = String::new();
    render_frame(&mut svg, config);
    render_y_axis(&mut svg, &y, config);

    let plot_width = w - MARGIN_LEFT - MARGIN_RIGHT;
    let slot = plot_width / bars.len() as f64;
    let bar_width = slot * 0.6;
    let zero = y.map(0.0);

    for (i, (label, value)) in bars.iter().enumerate() {
        let center = MARGIN_LEFT + slot * (i as f64 + 0.5);

        if value.is_finite() {
            let top = y.map(*value);
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                center - bar_width / 2.0,
                top.min(zero),
                bar_width,
                (zero - top).abs(),
                color(0)
            ));
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle">{:.1}</text>"#,
                center,
                top.min(zero) - 5.0,
                value
            ));
        }

        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle">{}</text>"#,
            center,
            h - MARGIN_BOTTOM + 18.0,
            escape(label)
        ));
    }

    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
        MARGIN_LEFT,
        zero,
        w - MARGIN_RIGHT,
        zero
    ));
    svg.push_str("</svg>");

    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bar_chart() {
        let bars = vec![("1GHz".to_string(), 12.34), ("2GHz".to_string(), 20.0)];
        let svg = render_bar_chart(&bars, &ChartConfig::new("Energy Usage")).unwrap();

        assert_eq!(svg.matches("<rect").count(), 3); // background + 2 bars
        assert!(svg.contains(">12.3<"));
        assert!(svg.contains(">20.0<"));
        assert!(svg.contains("1GHz"));
    }

    #[test]
    fn test_empty_bars() {
        assert_eq!(
            render_bar_chart(&[], &ChartConfig::default()),
            Err(ChartError::NoData)
        );
    }
}
