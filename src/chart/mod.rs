//! One-shot terminal charts.
//!
//! The fitted relationships are drawn once into an inline Ratatui viewport
//! below the text report, two charts per row. There is no event loop and no
//! raw mode: the charts stay in the scrollback like any other output.

use std::io;

use crossterm::tty::IsTty;
use ratatui::{
    Frame, Terminal, TerminalOptions, Viewport,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info};

use crate::domain::{ChartMode, RelationshipFit};
use crate::error::AppError;
use crate::report::{format_fit_equation, format_r2};

mod plotters_chart;

pub use plotters_chart::{LogLogChart, log_bounds};

/// Concrete back-end after resolving [`ChartMode::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Terminal,
    Ascii,
    None,
}

/// Resolve the chart mode against whether stdout is an interactive terminal.
pub fn resolve_backend(mode: ChartMode, stdout_is_tty: bool) -> Backend {
    match mode {
        ChartMode::Terminal => Backend::Terminal,
        ChartMode::Ascii => Backend::Ascii,
        ChartMode::None => Backend::None,
        ChartMode::Auto if stdout_is_tty => Backend::Terminal,
        ChartMode::Auto => {
            info!("stdout is not a terminal; using ASCII plots");
            Backend::Ascii
        }
    }
}

pub fn stdout_is_tty() -> bool {
    io::stdout().is_tty()
}

/// Draw every fit into an inline viewport of `height` rows.
pub fn render_terminal(fits: &[RelationshipFit], height: u16) -> Result<(), AppError> {
    if fits.is_empty() {
        return Ok(());
    }

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
    .map_err(|e| AppError::render(format!("Failed to initialize terminal: {e}")))?;

    let bottom = terminal
        .draw(|frame| {
            let area = frame.area();
            draw_grid(frame, area, fits);
        })
        .map_err(|e| AppError::render(format!("Terminal draw error: {e}")))?
        .area
        .bottom();
    debug!(rows = height, bottom, "drew inline chart viewport");

    // Leave the cursor on the last viewport row so following output starts below it.
    terminal
        .set_cursor_position(Position::new(0, bottom.saturating_sub(1)))
        .map_err(|e| AppError::render(format!("Failed to move cursor: {e}")))?;
    terminal
        .show_cursor()
        .map_err(|e| AppError::render(format!("Failed to show cursor: {e}")))?;
    drop(terminal);
    println!();

    Ok(())
}

fn draw_grid(frame: &mut Frame<'_>, area: Rect, fits: &[RelationshipFit]) {
    let rows = fits.len().div_ceil(2);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (chunk, row_area) in fits.chunks(2).zip(row_areas.iter()) {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(*row_area);

        for (fit, cell) in chunk.iter().zip(col_areas.iter()) {
            draw_relationship(frame, *cell, fit);
        }
    }
}

fn draw_relationship(frame: &mut Frame<'_>, area: Rect, fit: &RelationshipFit) {
    let annotation = format!(" {} | {} ", format_fit_equation(&fit.fit), format_r2(&fit.fit));
    let block = Block::default()
        .title(fit.relationship.title)
        .title_bottom(Line::from(annotation))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some((x_bounds, y_bounds)) = log_bounds(&fit.points, &fit.curve) else {
        frame.render_widget(Paragraph::new("No positive data to plot."), inner);
        return;
    };

    let widget = LogLogChart {
        curve: &fit.curve,
        points: &fit.points,
        x_bounds,
        y_bounds,
        x_label: fit.relationship.x.label(),
        y_label: fit.relationship.y.label(),
    };
    frame.render_widget(widget, inner);
}
