//! Minimal SVG rendering for sweep error bars and histograms.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::batch::SweepPoint;
use crate::error::Result;
use crate::stats::Histogram;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 420.0;
const MARGIN: f64 = 60.0;

struct Canvas {
    body: String,
}

impl Canvas {
    fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        let body = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" font-family="sans-serif" font-size="12">
<rect width="100%" height="100%" fill="white"/>
<text x="{cx}" y="24" text-anchor="middle" font-size="16">{title}</text>
<text x="{cx}" y="{xl}" text-anchor="middle">{x_label}</text>
<text x="16" y="{cy}" text-anchor="middle" transform="rotate(-90 16 {cy})">{y_label}</text>
<line x1="{MARGIN}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="black"/>
<line x1="{MARGIN}" y1="{MARGIN}" x2="{MARGIN}" y2="{bottom}" stroke="black"/>
"#,
            cx = WIDTH / 2.0,
            cy = HEIGHT / 2.0,
            xl = HEIGHT - 16.0,
            bottom = HEIGHT - MARGIN,
            right = WIDTH - MARGIN,
            title = escape(title),
            x_label = escape(x_label),
            y_label = escape(y_label),
        );
        Self { body }
    }

    fn plot_width() -> f64 {
        WIDTH - 2.0 * MARGIN
    }

    fn plot_height() -> f64 {
        HEIGHT - 2.0 * MARGIN
    }

    /// Maps a data value in `[0, y_max]` to a pixel row.
    fn y(value: f64, y_max: f64) -> f64 {
        HEIGHT - MARGIN - value / y_max * Self::plot_height()
    }

    fn y_ticks(&mut self, y_max: f64) {
        for i in 0..=4 {
            let value = y_max * i as f64 / 4.0;
            let y = Self::y(value, y_max);
            self.body.push_str(&format!(
                r#"<text x="{x}" y="{y}" text-anchor="end" dy="4">{value:.0}</text>
"#,
                x = MARGIN - 6.0,
            ));
        }
    }

    fn finish(mut self) -> String {
        self.body.push_str("</svg>\n");
        self.body
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Mean with a one-standard-deviation bar per batch size. Sizes are spaced
/// evenly along the x axis in the order given.
pub fn error_bars_svg(points: &[SweepPoint], title: &str) -> String {
    let mut canvas = Canvas::new(title, "Number of simulations", "Mean attempts");
    let y_max = points
        .iter()
        .map(|p| p.mean + p.std_dev)
        .fold(0.0f64, f64::max)
        .max(1.0)
        * 1.1;
    canvas.y_ticks(y_max);
    let step = Canvas::plot_width() / (points.len().max(1) as f64);
    for (i, p) in points.iter().enumerate() {
        let x = MARGIN + step * (i as f64 + 0.5);
        let top = Canvas::y(p.mean + p.std_dev, y_max);
        let bottom = Canvas::y((p.mean - p.std_dev).max(0.0), y_max);
        let mid = Canvas::y(p.mean, y_max);
        canvas.body.push_str(&format!(
            r#"<line x1="{x}" y1="{top}" x2="{x}" y2="{bottom}" stroke="steelblue"/>
<line x1="{l}" y1="{top}" x2="{r}" y2="{top}" stroke="steelblue"/>
<line x1="{l}" y1="{bottom}" x2="{r}" y2="{bottom}" stroke="steelblue"/>
<circle cx="{x}" cy="{mid}" r="3" fill="steelblue"/>
<text x="{x}" y="{label}" text-anchor="middle">{size}</text>
"#,
            l = x - 5.0,
            r = x + 5.0,
            label = HEIGHT - MARGIN + 16.0,
            size = p.size,
        ));
    }
    canvas.finish()
}

pub fn histogram_svg(hist: &Histogram, title: &str) -> String {
    let mut canvas = Canvas::new(title, "Value", "Frequency");
    let y_max = (hist.counts.iter().copied().max().unwrap_or(0).max(1) as f64) * 1.1;
    canvas.y_ticks(y_max);
    let bar = Canvas::plot_width() / hist.bins().max(1) as f64;
    for (i, &count) in hist.counts.iter().enumerate() {
        let x = MARGIN + bar * i as f64;
        let y = Canvas::y(count as f64, y_max);
        canvas.body.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{bar}" height="{h}" fill="steelblue" stroke="white"/>
"#,
            h = HEIGHT - MARGIN - y,
        ));
    }
    if let (Some(first), Some(last)) = (hist.edges.first(), hist.edges.last()) {
        canvas.body.push_str(&format!(
            r#"<text x="{MARGIN}" y="{y}" text-anchor="middle">{first:.1}</text>
<text x="{right}" y="{y}" text-anchor="middle">{last:.1}</text>
"#,
            y = HEIGHT - MARGIN + 16.0,
            right = WIDTH - MARGIN,
        ));
    }
    canvas.finish()
}

pub fn save(svg: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, svg)?;
    info!(path = %path.display(), "plot written");
    Ok(())
}
