//! Navigation bar: page tabs plus the current theme-mode indicator.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::branding::APP_DISPLAY_NAME;
use crate::tui::theme::{Palette, ThemeMode};
use crate::tui::Page;

/// Navigation bar widget.
pub struct NavBar;

impl NavBar {
    /// Render the navigation bar.
    pub fn render(f: &mut Frame, area: Rect, page: Page, palette: &Palette) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(14)])
            .split(area);

        let titles: Vec<Line> = Page::ALL
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", i + 1),
                        Style::default().fg(palette.secondary.main),
                    ),
                    Span::raw(p.label()),
                ])
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(page.index())
            .style(Style::default().fg(palette.text.secondary))
            .highlight_style(
                Style::default()
                    .fg(palette.primary.main)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .title(format!(" {APP_DISPLAY_NAME} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.divider))
                    .style(Style::default().bg(palette.background.default)),
            );
        f.render_widget(tabs, chunks[0]);

        let mode_label = match palette.mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        let indicator = Paragraph::new(Line::from(vec![
            Span::styled("t:", Style::default().fg(palette.secondary.main)),
            Span::styled(
                format!(" {mode_label}"),
                Style::default().fg(palette.text.primary),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.divider)),
        );
        f.render_widget(indicator, chunks[1]);
    }
}
