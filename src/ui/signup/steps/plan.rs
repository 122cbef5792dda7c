//! Plan selection step rendering

use crate::ui::signup::SignupScreen;
use crate::wizard::snapshot::plan_card;
use crate::wizard::Cadence;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

impl SignupScreen {
    pub(crate) fn render_plan_step(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Plans
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Cadence toggle
            ])
            .split(area);

        let cadence = self.wizard.state().cadence();
        let selected = self.wizard.state().selected_plan_index();

        let items: Vec<ListItem> = self
            .wizard
            .state()
            .plans()
            .iter()
            .enumerate()
            .map(|(i, plan)| {
                let (name, price, promo) = plan_card(plan, cadence);
                let style = if i == selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let mut spans = vec![
                    Span::styled(format!("{name:<10}"), style),
                    Span::styled(format!("{price:>8}"), Style::default().fg(Color::Cyan)),
                ];
                if let Some(promo) = promo {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(promo, Style::default().fg(Color::Green)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::REVERSED)
                    .fg(Color::Cyan),
            )
            .highlight_symbol("> ");

        self.plan_state.select(Some(selected));
        frame.render_stateful_widget(list, chunks[0], &mut self.plan_state);

        let active = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(Color::DarkGray);
        let (monthly_style, yearly_style, switch) = match cadence {
            Cadence::Monthly => (active, inactive, "(●  )"),
            Cadence::Yearly => (inactive, active, "(  ●)"),
        };

        let toggle = Paragraph::new(Line::from(vec![
            Span::styled(Cadence::Monthly.label(), monthly_style),
            Span::raw("  "),
            Span::styled(switch, Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(Cadence::Yearly.label(), yearly_style),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(toggle, chunks[2]);
    }
}
