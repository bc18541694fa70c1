//! TUI rendering for Compass using ratatui.

mod input;
mod screens;
mod theme;
mod widgets;

pub use input::handle_event;
pub use theme::{Glyphs, Palette, glyphs, palette};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph};

use compass_engine::{App, Modal, ScoreKind, Step};

use crate::widgets::centered_rect;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Screen body
            Constraint::Length(1), // Status / key hints
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app, &palette);

    match app.step() {
        Step::Landing => screens::draw_landing(frame, chunks[1], &palette, &glyphs),
        Step::CurrentScores => {
            screens::draw_scores(frame, chunks[1], app, ScoreKind::Current, &palette, &glyphs);
        }
        Step::TargetScores => {
            screens::draw_scores(frame, chunks[1], app, ScoreKind::Target, &palette, &glyphs);
        }
        Step::Importance => screens::draw_importance(frame, chunks[1], app, &palette, &glyphs),
        Step::Practices => screens::draw_practices(frame, chunks[1], app, &palette, &glyphs),
        Step::Results => screens::draw_results(frame, chunks[1], app, &palette, &glyphs),
    }

    draw_status(frame, chunks[2], app, &palette);

    if app.modal() == Some(Modal::ConfirmReset) {
        draw_reset_confirm(frame, &palette);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(24), // Progress gauge
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Compass",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", step_title(app.step())),
            Style::default().fg(palette.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    // No progress on the landing screen, same as the original wizard nav.
    if app.step() != Step::Landing {
        let gauge = Gauge::default()
            .percent(u16::from(app.progress_percent()))
            .gauge_style(Style::default().fg(palette.primary).bg(palette.bg_highlight))
            .label(format!("{}%", app.progress_percent()));
        frame.render_widget(gauge, chunks[1]);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = if let Some(status) = app.status() {
        Line::styled(status.to_owned(), Style::default().fg(palette.accent))
    } else {
        Line::styled(key_hints(app.step()), Style::default().fg(palette.text_muted))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}

fn draw_reset_confirm(frame: &mut Frame, palette: &Palette) {
    let area = centered_rect(46, 6, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.error))
        .title(Span::styled(
            "Reset everything?",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.bg_panel));

    let body = Paragraph::new(vec![
        Line::styled(
            "This wipes every score, importance and practice.",
            Style::default().fg(palette.text_primary),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled("y", Style::default().fg(palette.error).add_modifier(Modifier::BOLD)),
            Span::styled(" wipe it   ", Style::default().fg(palette.text_secondary)),
            Span::styled("n", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" keep my progress", Style::default().fg(palette.text_secondary)),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(body, area);
}

fn step_title(step: Step) -> &'static str {
    match step {
        Step::Landing => "Welcome",
        Step::CurrentScores => "Step 1 of 5: Where you are",
        Step::TargetScores => "Step 2 of 5: Where you're headed",
        Step::Importance => "Step 3 of 5: What matters most",
        Step::Practices => "Step 4 of 5: Key practices",
        Step::Results => "Step 5 of 5: Your plan",
    }
}

fn key_hints(step: Step) -> &'static str {
    match step {
        Step::Landing => "Enter begin  q quit",
        Step::CurrentScores | Step::TargetScores | Step::Importance => {
            "up/down pillar  left/right adjust  Enter next  Esc back  r reset  q quit"
        }
        Step::Practices => {
            "up/down pillar  left/right practice  Space toggle  Enter results  Esc back  r reset  q quit"
        }
        Step::Results => "up/down scroll  e export  Esc back  r reset  q quit",
    }
}
