//! Status bar widget for status messages and contextual key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Page};
use crate::tui::theme::Palette;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();

        let mut content_lines: Vec<Line> = Vec::new();

        // First line: error, status message, or nothing
        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(palette.error)),
                Span::styled(error.clone(), Style::default().fg(palette.text.primary)),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(palette.text.secondary),
            )));
        }

        content_lines.push(Self::hints_line(state, palette));

        let status = Paragraph::new(content_lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.divider))
                .style(Style::default().bg(palette.background.default)),
        );
        f.render_widget(status, area);
    }

    fn hints_line(state: &AppState, palette: &Palette) -> Line<'static> {
        let hints: &[(&str, &str)] = match state.page {
            Page::Home | Page::About => &[("1-4", "pages"), ("t", "theme"), ("q", "quit")],
            Page::Projects => {
                if state.browser.selected_project().is_some() {
                    &[("Esc", "close")]
                } else {
                    &[
                        ("\u{2190}/\u{2192}", "category"),
                        ("\u{2191}/\u{2193}", "select"),
                        ("Enter", "details"),
                        ("t", "theme"),
                        ("q", "quit"),
                    ]
                }
            }
            Page::Contact => {
                if state.form_focused {
                    &[
                        ("Tab", "next field"),
                        ("Enter", "send"),
                        ("Esc", "leave form"),
                    ]
                } else {
                    &[("Enter", "edit form"), ("t", "theme"), ("q", "quit")]
                }
            }
        };

        let mut spans = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    " | ",
                    Style::default().fg(palette.text.secondary),
                ));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(palette.secondary.main),
            ));
            spans.push(Span::styled(
                format!(": {action}"),
                Style::default().fg(palette.text.secondary),
            ));
        }
        Line::from(spans)
    }
}
