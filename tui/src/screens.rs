//! One render routine per wizard screen.
//!
//! These are stateless transforms: they read the engine's state and build
//! ratatui widgets. All editing flows through `crate::input`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use compass_engine::{App, ProcessedPillar, ScoreKind};
use compass_types::{PillarRecord, PriorityLevel, catalog};

use crate::theme::{Glyphs, Palette};
use crate::widgets::{fixed_width, slider_spans, star_spans, truncate_label};

const NAME_COLUMN: usize = 26;

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            title,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.bg_panel))
}

fn cursor_span(selected: bool, palette: &Palette, glyphs: &Glyphs) -> Span<'static> {
    if selected {
        Span::styled(
            format!("{} ", glyphs.cursor),
            Style::default().fg(palette.primary),
        )
    } else {
        Span::raw("  ")
    }
}

fn name_span(name: &str, selected: bool, palette: &Palette) -> Span<'static> {
    let style = if selected {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_secondary)
    };
    Span::styled(fixed_width(name, NAME_COLUMN), style)
}

pub(crate) fn draw_landing(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines = vec![
        Line::default(),
        Line::styled(
            "C O M P A S S",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "A map for the year ahead",
            Style::default().fg(palette.text_secondary),
        ),
        Line::default(),
        Line::styled(
            "A simple visual tool to close this year with gratitude",
            Style::default().fg(palette.text_muted),
        ),
        Line::styled(
            "and design the next one with clear purpose.",
            Style::default().fg(palette.text_muted),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.bullet),
                Style::default().fg(palette.accent),
            ),
            Span::styled(
                "Press Enter to begin",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel("Compass", palette));
    frame.render_widget(paragraph, area);
}

/// The two slider screens. On the target screen a marker shows where the
/// current score sits, and the caption reports the points to gain.
pub(crate) fn draw_scores(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    kind: ScoreKind,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(4)])
        .split(area);

    let (title, fill_color, question) = match kind {
        ScoreKind::Current => (
            "Where are you today?",
            palette.primary,
            "How do you feel in each area right now? (1 = low, 10 = thriving)",
        ),
        ScoreKind::Target => (
            "Where do you want to be?",
            palette.accent,
            "Where do you want each area to land next year?",
        ),
    };

    let selected_row = app.view().row;
    let mut lines = Vec::with_capacity(catalog().len());
    for (row, pillar) in catalog().iter().enumerate() {
        let record = record_for(app, pillar.id);
        let selected = row == selected_row;
        let value = record.score(kind);
        let marker = match kind {
            ScoreKind::Current => None,
            ScoreKind::Target => Some(record.current),
        };

        let mut spans = vec![
            cursor_span(selected, palette, glyphs),
            name_span(pillar.name, selected, palette),
            Span::raw(" "),
        ];
        spans.extend(slider_spans(
            value,
            PillarRecord::SCORE_MAX,
            marker,
            palette,
            glyphs,
            Style::default().fg(fill_color),
        ));
        spans.push(Span::styled(
            format!(" {value:>2}"),
            Style::default()
                .fg(fill_color)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(spans));
    }

    let list = Paragraph::new(lines).block(panel(title, palette));
    frame.render_widget(list, chunks[0]);

    let pillar = app.selected_pillar();
    let record = record_for(app, pillar.id);
    let caption = match kind {
        ScoreKind::Current => question.to_owned(),
        ScoreKind::Target => {
            let gain = record.gap();
            if gain > 0 {
                format!("{question}  Now {} - +{gain} to gain.", record.current)
            } else {
                format!("{question}  Now {} - maintaining.", record.current)
            }
        }
    };
    let detail = Paragraph::new(vec![
        Line::styled(pillar.description, Style::default().fg(palette.text_secondary)),
        Line::styled(caption, Style::default().fg(palette.text_muted)),
    ])
    .wrap(Wrap { trim: true })
    .block(panel(pillar.name, palette));
    frame.render_widget(detail, chunks[1]);
}

pub(crate) fn draw_importance(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(4)])
        .split(area);

    let selected_row = app.view().row;
    let mut lines = Vec::with_capacity(catalog().len());
    for (row, pillar) in catalog().iter().enumerate() {
        let record = record_for(app, pillar.id);
        let selected = row == selected_row;

        let mut spans = vec![
            cursor_span(selected, palette, glyphs),
            name_span(pillar.name, selected, palette),
            Span::raw(" "),
        ];
        spans.extend(star_spans(record.importance, palette, glyphs));
        spans.push(Span::styled(
            format!(" {}/5", record.importance),
            Style::default().fg(palette.text_muted),
        ));
        lines.push(Line::from(spans));
    }

    let list = Paragraph::new(lines).block(panel("How much does it matter?", palette));
    frame.render_widget(list, chunks[0]);

    let detail = Paragraph::new(vec![
        Line::styled(
            "From 1 to 5: how crucial is this pillar for you THIS year?",
            Style::default().fg(palette.text_secondary),
        ),
        Line::styled(
            "Importance multiplies the gap when ranking your priorities.",
            Style::default().fg(palette.text_muted),
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(panel(app.selected_pillar().name, palette));
    frame.render_widget(detail, chunks[1]);
}

pub(crate) fn draw_practices(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(5)])
        .split(area);

    let selected_row = app.view().row;
    let mut lines = Vec::with_capacity(catalog().len());
    for (row, pillar) in catalog().iter().enumerate() {
        let record = record_for(app, pillar.id);
        let selected = row == selected_row;
        let chosen = record.practices.len();

        lines.push(Line::from(vec![
            cursor_span(selected, palette, glyphs),
            name_span(pillar.name, selected, palette),
            Span::styled(
                format!(" {chosen}/{} chosen", pillar.practices.len()),
                Style::default().fg(if chosen > 0 {
                    palette.accent
                } else {
                    palette.text_muted
                }),
            ),
        ]));
    }

    let list = Paragraph::new(lines).block(panel("Pick your key practices", palette));
    frame.render_widget(list, chunks[0]);

    // Practice picker for the highlighted pillar.
    let pillar = app.selected_pillar();
    let record = record_for(app, pillar.id);
    let col = app.view().practice_col;

    let mut picker = Vec::with_capacity(pillar.practices.len());
    for (index, practice) in pillar.practices.iter().enumerate() {
        let on = record.has_practice(practice);
        let focused = index == col;
        let box_glyph = if on {
            glyphs.checkbox_on
        } else {
            glyphs.checkbox_off
        };
        let style = match (focused, on) {
            (true, _) => Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_highlight)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(palette.accent),
            (false, false) => Style::default().fg(palette.text_secondary),
        };
        picker.push(Line::from(vec![
            cursor_span(focused, palette, glyphs),
            Span::styled(format!("{box_glyph} {practice}"), style),
        ]));
    }

    let picker = Paragraph::new(picker).block(panel(pillar.name, palette));
    frame.render_widget(picker, chunks[1]);
}

pub(crate) fn draw_results(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let ranked = app.results();

    let mut lines = vec![Line::styled(
        "Your plan, ranked by gap x importance. Press e to export it.",
        Style::default().fg(palette.text_muted),
    )];

    for (level, tagline) in [
        (PriorityLevel::High, "immediate focus"),
        (PriorityLevel::Medium, "sustained growth"),
        (PriorityLevel::Maintenance, "keep it up"),
    ] {
        let bucket: Vec<&ProcessedPillar<'_>> =
            ranked.iter().filter(|p| p.level == level).collect();
        if bucket.is_empty() {
            continue;
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            format!("{} ({tagline})", level.label()),
            Style::default()
                .fg(palette.level_color(level))
                .add_modifier(Modifier::BOLD),
        ));

        for pillar in bucket {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", glyphs.bullet),
                    Style::default().fg(palette.level_color(level)),
                ),
                Span::styled(
                    fixed_width(pillar.definition.name, NAME_COLUMN),
                    Style::default().fg(palette.text_primary),
                ),
                Span::styled(
                    format!(
                        " {:>2} -> {:>2}   gap {}   score {:>2}",
                        pillar.record.current, pillar.record.target, pillar.gap, pillar.score
                    ),
                    Style::default().fg(palette.text_secondary),
                ),
            ]));
            if !pillar.record.practices.is_empty() {
                let joined = pillar.record.practices.join(", ");
                lines.push(Line::styled(
                    format!("      {}", truncate_label(&joined, 60)),
                    Style::default().fg(palette.text_muted),
                ));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .scroll((app.view().results_scroll, 0))
        .block(panel("Your Compass plan", palette));
    frame.render_widget(paragraph, area);
}

fn record_for<'a>(app: &'a App, id: &str) -> &'a PillarRecord {
    app.store()
        .record(id)
        .expect("store covers every catalog pillar")
}
