//! Projects page: category tabs, filtered project list, and detail popup.
//!
//! The filtered list is recomputed on every read from the immutable catalog;
//! no filtered copy is stored. The detail selection is a single optional
//! slot, so at most one project can be open at a time.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::models::{Project, ProjectCatalog};
use crate::tui::theme::Palette;

/// Filter and selection state for the Projects page.
#[derive(Debug, Clone, Default)]
pub struct ProjectBrowser {
    /// Current category tab index (0 = "All")
    tab_index: usize,
    /// Cursor within the filtered list
    cursor: usize,
    /// Open detail selection, if any
    detail: Option<Project>,
}

impl ProjectBrowser {
    /// Creates a browser showing all projects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current category tab index.
    #[must_use]
    pub const fn tab_index(&self) -> usize {
        self.tab_index
    }

    /// The project currently open in the detail popup, if any.
    #[must_use]
    pub const fn selected_project(&self) -> Option<&Project> {
        self.detail.as_ref()
    }

    /// Selects a category tab by index.
    ///
    /// `index` must be within the fixed tab list; an out-of-range index is a
    /// programming error, not a runtime condition.
    pub fn select_tab(&mut self, index: usize, catalog: &ProjectCatalog) {
        debug_assert!(index < catalog.categories.len());
        self.tab_index = index;
        self.cursor = 0;
    }

    /// Sets or clears the detail selection.
    pub fn select_project(&mut self, project: Option<Project>) {
        self.detail = project;
    }

    /// The filtered project list for the current tab.
    ///
    /// Tab 0 yields the full collection in declared order; any other tab
    /// yields the stable subsequence whose category matches that tab's value.
    #[must_use]
    pub fn filtered<'a>(&self, catalog: &'a ProjectCatalog) -> Vec<&'a Project> {
        if self.tab_index == 0 {
            catalog.projects.iter().collect()
        } else {
            let value = catalog.categories[self.tab_index].value.as_str();
            catalog
                .projects
                .iter()
                .filter(|p| p.category.as_str() == value)
                .collect()
        }
    }

    /// Handle keyboard input for the Projects page.
    ///
    /// Returns `true` when the key was consumed.
    pub fn handle_input(&mut self, key: KeyEvent, catalog: &ProjectCatalog) -> bool {
        // Detail popup swallows everything except its dismiss keys
        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.select_project(None);
            }
            return true;
        }

        match key.code {
            KeyCode::Left => {
                let next = if self.tab_index == 0 {
                    catalog.categories.len() - 1
                } else {
                    self.tab_index - 1
                };
                self.select_tab(next, catalog);
                true
            }
            KeyCode::Right => {
                self.select_tab((self.tab_index + 1) % catalog.categories.len(), catalog);
                true
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                let len = self.filtered(catalog).len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Enter => {
                let selected = self.filtered(catalog).get(self.cursor).map(|p| (*p).clone());
                self.select_project(selected);
                true
            }
            _ => false,
        }
    }

    /// Render the Projects page.
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette, catalog: &ProjectCatalog) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        self.render_tabs(f, chunks[0], palette, catalog);
        self.render_list(f, chunks[1], palette, catalog);

        if let Some(project) = &self.detail {
            render_detail_popup(f, palette, project);
        }
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect, palette: &Palette, catalog: &ProjectCatalog) {
        let titles: Vec<Line> = catalog
            .categories
            .iter()
            .map(|tab| Line::from(tab.label.clone()))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.tab_index)
            .style(Style::default().fg(palette.text.secondary))
            .highlight_style(
                Style::default()
                    .fg(palette.primary.main)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.divider))
                    .title(" My Projects "),
            );
        f.render_widget(tabs, area);
    }

    fn render_list(&self, f: &mut Frame, area: Rect, palette: &Palette, catalog: &ProjectCatalog) {
        let filtered = self.filtered(catalog);

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|project| {
                let tech = project.technologies.join(" · ");
                ListItem::new(vec![
                    Line::from(Span::styled(
                        project.title.clone(),
                        Style::default()
                            .fg(palette.text.primary)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        project.description.clone(),
                        Style::default().fg(palette.text.secondary),
                    )),
                    Line::from(Span::styled(tech, Style::default().fg(palette.secondary.main))),
                    Line::raw(""),
                ])
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(self.cursor.min(filtered.len().saturating_sub(1))));

        let list = List::new(items)
            .highlight_style(Style::default().bg(palette.highlight_bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.divider))
                    .style(Style::default().bg(palette.background.paper)),
            );
        f.render_stateful_widget(list, area, &mut list_state);
    }
}

/// Render the project detail popup over the page.
fn render_detail_popup(f: &mut Frame, palette: &Palette, project: &Project) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(palette.primary.main)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            project.full_description.clone(),
            Style::default().fg(palette.text.primary),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Built with: ", Style::default().fg(palette.text.secondary)),
            Span::styled(
                project.technologies.join(", "),
                Style::default().fg(palette.secondary.main),
            ),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Code: ", Style::default().fg(palette.text.secondary)),
            Span::styled(
                project.github_url.clone(),
                Style::default().fg(palette.primary.light),
            ),
        ]),
        Line::from(vec![
            Span::styled("Live: ", Style::default().fg(palette.text.secondary)),
            Span::styled(
                project.live_url.clone(),
                Style::default().fg(palette.primary.light),
            ),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "Esc: Close",
            Style::default().fg(palette.text.secondary),
        )),
    ];
    lines[0].alignment = Some(Alignment::Center);

    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.primary.main))
            .style(Style::default().bg(palette.background.paper)),
    );
    f.render_widget(popup, area);
}

/// Centered rectangle helper for popups.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
