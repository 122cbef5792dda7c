//! Summary step rendering

use crate::ui::signup::SignupScreen;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Column where price labels start
const LABEL_WIDTH: usize = 30;

impl SignupScreen {
    pub(crate) fn render_summary_step(&self, frame: &mut Frame, area: Rect) {
        let summary = self.wizard.summary();

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{:<width$}", summary.plan.label, width = LABEL_WIDTH),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                summary.plan.price_label.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        lines.push(Line::from(Span::styled(
            "─".repeat(LABEL_WIDTH + 10),
            Style::default().fg(Color::DarkGray),
        )));

        if summary.addons.is_empty() {
            lines.push(Line::from(Span::styled(
                "No add-ons selected",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for addon in &summary.addons {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", addon.label, width = LABEL_WIDTH),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(addon.price_label.clone()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", summary.total.label, width = LABEL_WIDTH),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                summary.total.price_label.clone(),
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        let para = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );
        frame.render_widget(para, area);
    }
}
