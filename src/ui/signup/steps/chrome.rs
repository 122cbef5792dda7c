//! Panel, sidebar, heading and footer shared by every step

use crate::ui::layout::{centered_rect, sidebar_split};
use crate::ui::signup::{footer_hints, SignupScreen};
use crate::wizard::Step;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the numbered step list
pub const SIDEBAR_WIDTH: u16 = 22;

impl SignupScreen {
    /// Draw everything around the step body and return the body area
    pub(crate) fn render_chrome(&self, frame: &mut Frame) -> Rect {
        let area = centered_rect(80, 80, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    "Sign up",
                    Style::default()
                        .fg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (sidebar, content) = sidebar_split(inner, SIDEBAR_WIDTH);
        self.render_sidebar(frame, sidebar);

        let step = self.step();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(2), // Subtitle
                Constraint::Length(1), // Spacer
                Constraint::Min(6),    // Step body
                Constraint::Length(1), // Footer
            ])
            .split(content);

        let title = Paragraph::new(Line::from(Span::styled(
            step.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, chunks[0]);

        let subtitle = Paragraph::new(Line::from(Span::styled(
            step.subtitle(),
            Style::default().fg(Color::Gray),
        )))
        .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(subtitle, chunks[1]);

        let mut hints = Vec::new();
        for (key, action) in footer_hints(step) {
            hints.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
            hints.push(Span::raw(format!(" {action}  ")));
        }
        let footer = Paragraph::new(Line::from(hints)).alignment(Alignment::Center);
        frame.render_widget(footer, chunks[4]);

        chunks[3]
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Confirmation has no entry of its own and keeps the summary highlighted
        let current = self.step();
        let highlighted = if current.is_terminal() {
            Step::Summary
        } else {
            current
        };

        let mut lines = vec![Line::from("")];
        for step in Step::all().iter().filter(|s| !s.is_terminal()) {
            let active = *step == highlighted;
            let badge_style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if active {
                self.last_transition.marker()
            } else {
                " "
            };

            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", step.number()), badge_style),
                Span::raw(" "),
                Span::styled(
                    format!("STEP {}", step.number()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(marker, Style::default().fg(Color::LightCyan)),
            ]));
            lines.push(Line::from(vec![
                Span::raw("     "),
                Span::styled(
                    step.sidebar_label(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
