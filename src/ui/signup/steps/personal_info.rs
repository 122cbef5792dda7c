//! Personal info step rendering

use crate::ui::signup::SignupScreen;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

impl SignupScreen {
    pub(crate) fn render_personal_info_step(&self, frame: &mut Frame, area: Rect) {
        let mut constraints = Vec::new();
        for _ in self.form.fields() {
            constraints.push(Constraint::Length(1)); // Label + error
            constraints.push(Constraint::Length(3)); // Input box
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let focused = self.form.focused_field();

        for (i, (field, input)) in self.form.fields().enumerate() {
            let error = self.form.error_for(field);

            let mut label = vec![Span::styled(
                field.label(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )];
            if let Some(message) = error {
                label.push(Span::raw("  "));
                label.push(Span::styled(
                    message,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
            }
            frame.render_widget(Paragraph::new(Line::from(label)), chunks[i * 2]);

            input.render(frame, chunks[i * 2 + 1], field == focused, error.is_some());
        }
    }
}
