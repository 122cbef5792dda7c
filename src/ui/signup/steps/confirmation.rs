//! Confirmation step rendering

use crate::ui::signup::SignupScreen;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

impl SignupScreen {
    pub(crate) fn render_confirmation_step(&self, frame: &mut Frame, area: Rect) {
        let summary = self.wizard.summary();
        let info = self.wizard.state().personal_info();

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "✓",
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Subscribed to "),
                Span::styled(
                    summary.plan.label,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" for "),
                Span::styled(
                    summary.total.price_label,
                    Style::default()
                        .fg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("A receipt would go to {}", info.email),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "If you ever need support, please feel free to email us at support@loremgaming.com.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(para, area);
    }
}
