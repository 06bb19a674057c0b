//! Plotters-powered log-log chart widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`,
//! which gives us log-scaled axes with tick labels for free.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::LabeledPoint;
use crate::report::fmt_sig;

/// Multiplicative headroom around the data on each log axis.
const LOG_PAD_FACTOR: f64 = 1.25;

/// A lightweight, render-only chart description.
///
/// All series and bounds are computed outside the render call, which keeps
/// `render()` focused on drawing.
pub struct LogLogChart<'a> {
    /// Line series for the fitted power law.
    pub curve: &'a [(f64, f64)],
    /// Observed points, annotated with their labels.
    pub points: &'a [LabeledPoint],
    /// X bounds (strictly positive).
    pub x_bounds: [f64; 2],
    /// Y bounds (strictly positive).
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
}

/// Positive bounds covering every point and curve sample, padded by
/// [`LOG_PAD_FACTOR`] on both ends.
pub fn log_bounds(points: &[LabeledPoint], curve: &[(f64, f64)]) -> Option<([f64; 2], [f64; 2])> {
    let mut x = [f64::INFINITY, f64::NEG_INFINITY];
    let mut y = [f64::INFINITY, f64::NEG_INFINITY];

    let all = points.iter().map(|p| (p.x, p.y)).chain(curve.iter().copied());
    for (px, py) in all {
        if px.is_finite() && px > 0.0 && py.is_finite() && py > 0.0 {
            x = [x[0].min(px), x[1].max(px)];
            y = [y[0].min(py), y[1].max(py)];
        }
    }
    if !(x[0].is_finite() && y[0].is_finite()) {
        return None;
    }

    let pad = |[lo, hi]: [f64; 2]| [lo / LOG_PAD_FACTOR, hi * LOG_PAD_FACTOR];
    Some((pad(x), pad(y)))
}

fn fmt_tick(v: f64) -> String {
    fmt_sig(v, 2)
}

impl<'a> Widget for LogLogChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (increase --chart-height).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;

        if !(x0 > 0.0 && y0 > 0.0 && x1.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d((x0..x1).log_scale(), (y0..y1).log_scale())?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| fmt_tick(*v))
                .y_label_formatter(&|v| fmt_tick(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let curve_color = RGBColor(0, 255, 255); // cyan
            let points_color = RGBColor(255, 255, 0); // yellow
            let label_color = WHITE;

            // 1) Fit line.
            chart.draw_series(LineSeries::new(self.curve.iter().copied(), &curve_color))?;

            // 2) Observations. `Circle` radii are mis-scaled by the ratatui
            // backend, so points are single colored pixels.
            chart.draw_series(
                self.points
                    .iter()
                    .map(|p| Pixel::new((p.x, p.y), points_color)),
            )?;

            // 3) Name annotations, anchored at each point.
            chart.draw_series(self.points.iter().map(|p| {
                Text::new(
                    p.label.clone(),
                    (p.x, p.y),
                    ("sans-serif", 10).into_font().color(&label_color),
                )
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_bounds_cover_points_and_curve() {
        let points = vec![
            LabeledPoint { label: "a".to_string(), x: 10.0, y: 4.0 },
            LabeledPoint { label: "b".to_string(), x: 100.0, y: 40.0 },
        ];
        let curve = vec![(8.0, 3.0), (120.0, 50.0)];
        let (x, y) = log_bounds(&points, &curve).unwrap();
        assert!((x[0] - 8.0 / 1.25).abs() < 1e-12);
        assert!((x[1] - 150.0).abs() < 1e-12);
        assert!((y[0] - 2.4).abs() < 1e-12);
        assert!((y[1] - 62.5).abs() < 1e-12);
    }

    #[test]
    fn renders_point_labels_into_the_buffer() {
        let points: Vec<LabeledPoint> = [("left", 1.0, 1.0), ("middle", 10.0, 10.0), ("right", 100.0, 100.0)]
            .iter()
            .map(|&(label, x, y)| LabeledPoint { label: label.to_string(), x, y })
            .collect();
        let curve = vec![(0.8, 0.8), (120.0, 120.0)];
        let (x_bounds, y_bounds) = log_bounds(&points, &curve).unwrap();

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        LogLogChart {
            curve: &curve,
            points: &points,
            x_bounds,
            y_bounds,
            x_label: "x",
            y_label: "y",
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("middle"), "{text}");
    }

    #[test]
    fn log_bounds_ignore_non_positive_values() {
        let points = vec![LabeledPoint { label: "z".to_string(), x: 0.0, y: 1.0 }];
        assert!(log_bounds(&points, &[]).is_none());
    }
}
