//! Home page: hero section, skills, and feature highlights.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::ProfileConfig;
use crate::tui::theme::Palette;

const SKILLS: &[&str] = &[
    "React",
    "TypeScript",
    "JavaScript",
    "HTML5",
    "CSS3",
    "Material-UI",
    "Node.js",
    "Git",
    "AWS",
    "Responsive Design",
];

const FEATURES: &[(&str, &str)] = &[
    (
        "Clean Code",
        "Writing maintainable, readable, and efficient code following best practices.",
    ),
    (
        "Modern Design",
        "Creating beautiful, user-friendly interfaces with attention to detail.",
    ),
    (
        "Performance",
        "Optimizing applications for speed and excellent user experience.",
    ),
];

/// Render the home page.
pub fn render(f: &mut Frame, area: Rect, palette: &Palette, profile: &ProfileConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Hero
            Constraint::Length(4), // Skills
            Constraint::Min(5),    // Features
        ])
        .split(area);

    render_hero(f, chunks[0], palette, profile);
    render_skills(f, chunks[1], palette);
    render_features(f, chunks[2], palette);
}

fn render_hero(f: &mut Frame, area: Rect, palette: &Palette, profile: &ProfileConfig) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("Hi, I'm {}", profile.name),
            Style::default()
                .fg(palette.primary.main)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::from(Span::styled(
            profile.headline.clone(),
            Style::default().fg(palette.text.secondary),
        ))
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::from(vec![
            Span::styled("3", Style::default().fg(palette.secondary.main)),
            Span::styled(": view my work   ", Style::default().fg(palette.text.secondary)),
            Span::styled("4", Style::default().fg(palette.secondary.main)),
            Span::styled(": get in touch", Style::default().fg(palette.text.secondary)),
        ])
        .alignment(Alignment::Center),
    ];

    let hero = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.divider))
            .style(Style::default().bg(palette.background.paper)),
    );
    f.render_widget(hero, area);
}

fn render_skills(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut spans = Vec::new();
    for (i, skill) in SKILLS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            format!("[{skill}]"),
            Style::default().fg(palette.secondary.main),
        ));
    }

    let skills = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Skills ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.divider)),
        );
    f.render_widget(skills, area);
}

fn render_features(f: &mut Frame, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for ((title, description), column) in FEATURES.iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(palette.primary.main)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::raw(""),
            Line::from(Span::styled(
                *description,
                Style::default().fg(palette.text.primary),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.divider))
                .style(Style::default().bg(palette.background.paper)),
        );
        f.render_widget(card, *column);
    }
}
