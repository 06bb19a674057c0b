//! ASCII/Unicode log-log plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - output that survives pipes and logs
//! - deterministic output (helpful for golden tests)
//!
//! Both axes are log10-scaled. Plot elements:
//! - fit line: `-`
//! - observed points: `1`..`9`, then `a`..`z`, listed in a legend below the grid

use crate::domain::{LabeledPoint, RelationshipFit};
use crate::report::{fmt_sig, format_fit_equation, format_r2};

/// Render one fitted relationship: title, axes, grid, legend and fit annotation.
pub fn render_ascii_plot(fit: &RelationshipFit, width: usize, height: usize) -> String {
    let rel = &fit.relationship;
    let mut out = String::new();
    out.push_str(&format!("{}\n", rel.title));
    out.push_str(&format!("x: {} | y: {}\n", rel.x.label(), rel.y.label()));
    out.push_str(&render_loglog(&fit.points, &fit.curve, width, height));
    out.push_str(&format!("{}\n", format_fit_equation(&fit.fit)));
    out.push_str(&format!("{}\n", format_r2(&fit.fit)));
    out
}

/// Render points and a curve on log-log axes.
pub fn render_loglog(points: &[LabeledPoint], curve: &[(f64, f64)], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let all = || points.iter().map(|p| (p.x, p.y)).chain(curve.iter().copied());
    let (Some((x_min, x_max)), Some((y_min, y_max))) = (
        positive_range(all().map(|(x, _)| x)),
        positive_range(all().map(|(_, y)| y)),
    ) else {
        return "Plot: no positive data to draw\n".to_string();
    };

    let (lx_min, lx_max) = widen(x_min.log10(), x_max.log10());
    let (ly_min, ly_max) = widen(y_min.log10(), y_max.log10());
    let (ly_min, ly_max) = pad_range(ly_min, ly_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so points can overlay).
    let log_curve: Vec<(f64, f64)> = curve
        .iter()
        .filter(|(x, y)| *x > 0.0 && *y > 0.0 && x.is_finite() && y.is_finite())
        .map(|(x, y)| (x.log10(), y.log10()))
        .collect();
    draw_curve(&mut grid, &log_curve, lx_min, lx_max, ly_min, ly_max);

    let mut legend = String::new();
    for (i, p) in points.iter().enumerate() {
        let ch = marker(i);
        legend.push_str(&format!(
            "  {ch} = {} (x={}, y={})\n",
            p.label,
            fmt_sig(p.x, 3),
            fmt_sig(p.y, 3)
        ));
        if !(p.x > 0.0 && p.y > 0.0) {
            continue;
        }
        let x = map_x(p.x.log10(), lx_min, lx_max, width);
        let y = map_y(p.y.log10(), ly_min, ly_max, height);
        grid[y][x] = ch;
    }

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{}, {}] | y=[{}, {}] (log-log)\n",
        fmt_sig(x_min, 3),
        fmt_sig(x_max, 3),
        fmt_sig(y_min, 3),
        fmt_sig(y_max, 3),
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out.push_str(&legend);

    out
}

fn marker(i: usize) -> char {
    const MARKERS: &[u8] = b"123456789abcdefghijklmnopqrstuvwxyz";
    MARKERS.get(i).map(|&b| b as char).unwrap_or('*')
}

fn positive_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() && v > 0.0 {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// A single distinct value still gets one decade of room.
fn widen(min: f64, max: f64) -> (f64, f64) {
    if max - min < 1e-12 {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(lx: f64, lx_min: f64, lx_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((lx - lx_min) / (lx_max - lx_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(ly: f64, ly_min: f64, ly_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((ly - ly_min) / (ly_max - ly_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], lx_min: f64, lx_max: f64, ly_min: f64, ly_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(lx, ly) in curve {
        let x = map_x(lx, lx_min, lx_max, width);
        let y = map_y(ly, ly_min, ly_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, '-');
        } else {
            grid[y][x] = '-';
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitResult, Relationship, RelationshipId};

    fn points() -> Vec<LabeledPoint> {
        [(1.0, 2.0), (10.0, 20.0), (100.0, 200.0)]
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| LabeledPoint {
                label: format!("p{}", i + 1),
                x,
                y,
            })
            .collect()
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let curve = vec![(1.0, 2.0), (100.0, 200.0)];
        let txt = render_loglog(&points(), &curve, 11, 5);
        let expected = concat!(
            "Plot: x=[1, 100] | y=[2, 200] (log-log)\n",
            "         -3\n",
            "       --  \n",
            "    -2-    \n",
            "  --       \n",
            "1-         \n",
            "  1 = p1 (x=1, y=2)\n",
            "  2 = p2 (x=10, y=20)\n",
            "  3 = p3 (x=100, y=200)\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn relationship_plot_carries_title_and_annotation() {
        let fit = RelationshipFit {
            relationship: Relationship::standard(RelationshipId::D),
            points: points(),
            fit: FitResult { a: 2.0, b: 1.0, r2: 1.0 },
            curve: vec![(0.8, 1.6), (120.0, 240.0)],
        };
        let txt = render_ascii_plot(&fit, 40, 10);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "D: Power vs. Wingspan");
        assert_eq!(lines[1], "x: Wingspan (mm) | y: Power (W)");
        assert_eq!(lines[2], "Plot: x=[0.8, 120] | y=[1.6, 240] (log-log)");
        assert_eq!(lines[lines.len() - 2], "y = 2 × x^1.000");
        assert_eq!(lines[lines.len() - 1], "R² (log-space) = 1.000");
        // Title, axes, header, 10 grid rows, 3 legend rows, 2 annotation rows.
        assert_eq!(lines.len(), 2 + 1 + 10 + 3 + 2);
    }

    #[test]
    fn single_x_value_does_not_divide_by_zero() {
        let pts = vec![LabeledPoint { label: "only".to_string(), x: 5.0, y: 5.0 }];
        let txt = render_loglog(&pts, &[], 10, 5);
        assert!(txt.contains('1'));
    }

    #[test]
    fn markers_run_past_nine() {
        assert_eq!(marker(0), '1');
        assert_eq!(marker(8), '9');
        assert_eq!(marker(9), 'a');
        assert_eq!(marker(100), '*');
    }
}
