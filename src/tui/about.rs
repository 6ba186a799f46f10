//! About page: skills breakdown, experience, education, and achievements.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Palette;

struct SkillCategory {
    name: &'static str,
    skills: &'static [(&'static str, u8)],
}

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        skills: &[
            ("React", 95),
            ("TypeScript", 90),
            ("JavaScript", 95),
            ("HTML5/CSS3", 95),
            ("Material-UI", 85),
            ("Framer Motion", 80),
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            ("Node.js", 85),
            ("Express.js", 80),
            ("MongoDB", 75),
            ("PostgreSQL", 70),
            ("REST APIs", 85),
            ("GraphQL", 65),
        ],
    },
    SkillCategory {
        name: "Design & Tools",
        skills: &[
            ("Figma", 85),
            ("Adobe Creative Suite", 75),
            ("Git/GitHub", 90),
            ("AWS", 70),
            ("Docker", 65),
            ("Jest/Testing", 80),
        ],
    },
];

const EXPERIENCES: &[(&str, &str, &str, &str)] = &[
    (
        "Senior Front-End Developer",
        "Tech Solutions Inc.",
        "2022 - Present",
        "Lead front-end development for enterprise applications using React and TypeScript.",
    ),
    (
        "Front-End Developer",
        "Digital Studio",
        "2020 - 2022",
        "Developed responsive web applications and collaborated with design teams.",
    ),
    (
        "Junior Developer",
        "StartUp Co.",
        "2019 - 2020",
        "Built user interfaces and gained experience with modern web technologies.",
    ),
];

const EDUCATION: &[(&str, &str, &str)] = &[
    (
        "Bachelor of Computer Science",
        "University of Technology",
        "2015 - 2019",
    ),
    (
        "Full Stack Web Development Bootcamp",
        "Code Academy",
        "2019",
    ),
];

const ACHIEVEMENTS: &[&str] = &[
    "Built 20+ responsive web applications",
    "Reduced page load times by 40% through optimization",
    "Led a team of 5 developers on a major project",
    "Contributed to open-source projects",
    "Certified AWS Solutions Architect",
];

/// Render the about page.
pub fn render(f: &mut Frame, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_skill_columns(f, columns[0], palette);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Experience
            Constraint::Length(5), // Education
            Constraint::Length(7), // Achievements
        ])
        .split(columns[1]);

    render_experience(f, right[0], palette);
    render_education(f, right[1], palette);
    render_achievements(f, right[2], palette);
}

fn render_skill_columns(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines = Vec::new();
    for category in SKILL_CATEGORIES {
        lines.push(Line::from(Span::styled(
            category.name,
            Style::default()
                .fg(palette.primary.main)
                .add_modifier(Modifier::BOLD),
        )));
        for (skill, level) in category.skills {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {skill:<22}"),
                    Style::default().fg(palette.text.primary),
                ),
                Span::styled(skill_bar(*level), Style::default().fg(palette.secondary.main)),
            ]));
        }
        lines.push(Line::raw(""));
    }

    let skills = Paragraph::new(lines).block(
        Block::default()
            .title(" Skills ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.divider))
            .style(Style::default().bg(palette.background.paper)),
    );
    f.render_widget(skills, area);
}

/// Ten-segment proficiency bar, e.g. `█████████░ 90%`.
fn skill_bar(level: u8) -> String {
    let filled = usize::from(level) / 10;
    let mut bar = String::new();
    for i in 0..10 {
        bar.push(if i < filled { '\u{2588}' } else { '\u{2591}' });
    }
    format!("{bar} {level}%")
}

fn render_experience(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines = Vec::new();
    for (title, company, period, description) in EXPERIENCES {
        lines.push(Line::from(vec![
            Span::styled(
                *title,
                Style::default()
                    .fg(palette.text.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {period}"),
                Style::default().fg(palette.text.secondary),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            *company,
            Style::default().fg(palette.secondary.main),
        )));
        lines.push(Line::from(Span::styled(
            *description,
            Style::default().fg(palette.text.secondary),
        )));
        lines.push(Line::raw(""));
    }

    let experience = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Experience ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.divider))
            .style(Style::default().bg(palette.background.paper)),
    );
    f.render_widget(experience, area);
}

fn render_education(f: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines = Vec::new();
    for (degree, school, period) in EDUCATION {
        lines.push(Line::from(vec![
            Span::styled(*degree, Style::default().fg(palette.text.primary)),
            Span::styled(
                format!(" · {school}, {period}"),
                Style::default().fg(palette.text.secondary),
            ),
        ]));
    }

    let education = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Education ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.divider)),
    );
    f.render_widget(education, area);
}

fn render_achievements(f: &mut Frame, area: Rect, palette: &Palette) {
    let lines: Vec<Line> = ACHIEVEMENTS
        .iter()
        .map(|achievement| {
            Line::from(vec![
                Span::styled("* ", Style::default().fg(palette.primary.main)),
                Span::styled(*achievement, Style::default().fg(palette.text.primary)),
            ])
        })
        .collect();

    let achievements = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Achievements ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.divider)),
    );
    f.render_widget(achievements, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_bar_segments() {
        assert_eq!(skill_bar(90), "█████████░ 90%");
        assert_eq!(skill_bar(65), "██████░░░░ 65%");
        assert_eq!(skill_bar(100), "██████████ 100%");
    }
}
