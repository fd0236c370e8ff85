use aimcentre_core::Locale;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let (lead, accent) = match app.controller.locale() {
            Locale::En => ("CHOOSE YOUR ", "TRACK"),
            Locale::Bn => ("আপনার ", "কোর্স"),
        };

        let lines = vec![
            Line::from(Span::styled(
                "EDUCATIONAL PATHWAYS",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(lead, Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)),
                Span::styled(
                    accent,
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.bg0));
        frame.render_widget(paragraph, area);
    }
}
