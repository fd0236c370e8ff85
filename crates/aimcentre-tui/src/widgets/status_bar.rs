use aimcentre_core::EngineState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let controller = &app.controller;

        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Enroll => "ENROLL",
            Mode::Help => "HELP",
        };

        let state_str = match controller.state() {
            EngineState::Idle => "idle",
            EngineState::AutoScrolling => "auto",
            EngineState::Paused => "paused",
            EngineState::ManualScrolling => "paging",
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {} ", msg),
            None => format!(
                " {} | {} | Courses: {} | Wishlist: {} | {} ",
                mode_str,
                state_str,
                controller.items().len(),
                controller.wishlist().len(),
                controller.locale().code(),
            ),
        };

        let help_hint = " q:quit j/k:category n/N:class h/l:page ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
