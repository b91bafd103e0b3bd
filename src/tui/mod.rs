//! Ratatui-based terminal UI.
//!
//! A single page with two independent regions: the anomaly FAQ (question list
//! plus the selected answer) on the left and the demo power chart on the right.
//!
//! `App` keeps the generator parameters, not a series. Every call to `draw`
//! generates a fresh one, so each redraw (key press, resize, `r`) shows new
//! demo noise unless a fixed seed was configured.

use std::io;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::domain::{DemoSeries, SeriesParams};
use crate::error::AppError;
use crate::faq::FaqTable;
use crate::series::SeriesSource;

mod plotters_chart;

use plotters_chart::PowerChart;

const TITLE: &str = "Data Center BMS – Anomaly FAQ & Power Trend Demo";
const INTRO: [&str; 3] = [
    "A selection list of anomaly-related queries",
    "Auto-generated explanations",
    "A demo time-series graph of power consumption",
];
const CHART_TITLE: &str = "Demo: Power Consumption (kW) vs Time";

/// Start the TUI.
pub fn run(params: SeriesParams, source: SeriesSource) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    log::info!("starting dashboard (source: {source:?})");
    let mut app = App::new(params, source);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    faq: FaqTable,
    selected: usize,
    params: SeriesParams,
    source: SeriesSource,
    renders: u64,
    generated: u64,
    status: String,
    /// Last series handed to the chart widget. Never read back by `draw`.
    #[cfg(test)]
    last_drawn: Option<DemoSeries>,
}

impl App {
    fn new(params: SeriesParams, source: SeriesSource) -> Self {
        let status = match source {
            SeriesSource::Entropy => "Demo series regenerates on every redraw.".to_string(),
            SeriesSource::Seeded(seed) => format!("Demo series seeded with {seed}."),
        };
        Self {
            faq: FaqTable::builtin(),
            selected: 0,
            params,
            source,
            renders: 0,
            generated: 0,
            status,
            #[cfg(test)]
            last_drawn: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        log::info!(
            "dashboard closed after {} renders ({} series generated)",
            self.renders,
            self.generated
        );
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let last = self.faq.len().saturating_sub(1);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < last {
                    self.selected += 1;
                }
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Char('r') => {
                self.status = "Redrawn with a fresh series.".to_string();
            }
            _ => {}
        }
        false
    }

    fn selected_answer(&self) -> Result<&'static str, AppError> {
        let entry = self
            .faq
            .get(self.selected)
            .ok_or_else(|| AppError::usage(format!("No FAQ entry at position {}.", self.selected + 1)))?;
        self.faq.lookup(entry.question)
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        self.renders += 1;

        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("This UI provides:", Style::default().fg(Color::Gray))),
        ];
        for item in INTRO {
            lines.push(Line::from(Span::styled(format!("  • {item}"), Style::default().fg(Color::Gray))));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(13, 23), Constraint::Ratio(10, 23)])
            .split(area);

        self.draw_faq(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
    }

    fn draw_faq(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Anomaly Explanation – FAQ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let list_height = (self.faq.len() as u16 + 2).min(inner.height / 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(list_height), Constraint::Min(0)])
            .split(inner);

        let items: Vec<ListItem> = self.faq.questions().map(ListItem::new).collect();
        let list = List::new(items)
            .block(Block::default().title("Select a query").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        let answer_block = Block::default().title("Answer").borders(Borders::ALL);
        let answer = match self.selected_answer() {
            Ok(text) => Paragraph::new(answer_text(text)),
            Err(err) => Paragraph::new(err.to_string()).style(Style::default().fg(Color::Red)),
        };
        frame.render_widget(answer.block(answer_block).wrap(Wrap { trim: false }), chunks[1]);
    }

    fn draw_chart(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title(CHART_TITLE).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        // Regenerated on every draw; see the module docs.
        let series = match self.source.generate(Utc::now(), &self.params) {
            Ok(series) => {
                self.generated += 1;
                series
            }
            Err(err) => {
                let msg = Paragraph::new(format!("Cannot generate demo series: {err}"))
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true });
                frame.render_widget(msg, inner);
                return;
            }
        };

        #[cfg(test)]
        {
            self.last_drawn = Some(series.clone());
        }

        let (line, x_bounds, y_bounds) = chart_series(&series);
        let widget = PowerChart {
            series: &line,
            x_bounds,
            y_bounds,
            x_label: "time",
            y_label: "kW",
            fmt_x: fmt_axis_time,
            fmt_y: fmt_axis_kw,
        };
        frame.render_widget(widget, chunks[0]);

        let caption = Paragraph::new(Span::styled(
            series.label,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(caption, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  Home/End jump  r redraw  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Light markdown-ish styling for answer text: `- ` items become bullets,
/// trailing hard-break spaces are dropped.
fn answer_text(answer: &'static str) -> Text<'static> {
    let lines: Vec<Line> = answer
        .lines()
        .map(|raw| {
            let line = raw.trim_end();
            match line.strip_prefix("- ") {
                Some(item) => Line::from(vec![
                    Span::styled("  • ", Style::default().fg(Color::Cyan)),
                    Span::raw(item),
                ]),
                None => Line::from(line),
            }
        })
        .collect();
    Text::from(lines)
}

/// Build the chart line and padded bounds for Plotters.
fn chart_series(series: &DemoSeries) -> (Vec<(f64, f64)>, [f64; 2], [f64; 2]) {
    let line: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (p.timestamp.timestamp() as f64, p.value))
        .collect();

    let x_bounds = match (line.first(), line.last()) {
        (Some(&(a, _)), Some(&(b, _))) if b > a => [a, b],
        _ => [0.0, 1.0],
    };

    let (mut y_min, mut y_max) = series.value_range().unwrap_or((0.0, 1.0));
    if y_max <= y_min {
        y_min -= 0.5;
        y_max += 0.5;
    }
    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    let y_bounds = [y_min - pad, y_max + pad];

    (line, x_bounds, y_bounds)
}

fn fmt_axis_time(v: f64) -> String {
    DateTime::<Utc>::from_timestamp(v.round() as i64, 0)
        .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_default()
}

fn fmt_axis_kw(v: f64) -> String {
    format!("{v:.0}")
}
