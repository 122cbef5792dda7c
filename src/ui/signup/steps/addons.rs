//! Add-on step rendering

use crate::ui::signup::SignupScreen;
use crate::wizard::pricing::{format_addon_price, Priced};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

impl SignupScreen {
    pub(crate) fn render_addons_step(&mut self, frame: &mut Frame, area: Rect) {
        let cadence = self.wizard.state().cadence();

        let items: Vec<ListItem> = self
            .wizard
            .state()
            .addons()
            .iter()
            .map(|addon| {
                let (checkbox, name_style) = if addon.is_active {
                    (
                        Span::styled("[x] ", Style::default().fg(Color::Green)),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (
                        Span::styled("[ ] ", Style::default().fg(Color::DarkGray)),
                        Style::default().fg(Color::Gray),
                    )
                };

                ListItem::new(vec![
                    Line::from(vec![
                        checkbox,
                        Span::styled(format!("{:<22}", addon.name), name_style),
                        Span::styled(
                            format_addon_price(addon.price(cadence), cadence),
                            Style::default().fg(Color::Cyan),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", addon.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.addon_state);
    }
}
