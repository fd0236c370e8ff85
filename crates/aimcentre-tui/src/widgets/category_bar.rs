use aimcentre_core::{Category, Locale, SubCategory};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

/// Category chips, with the active category's sub-categories below
pub struct CategoryBarWidget;

impl CategoryBarWidget {
    /// Rows needed: two for categories, two for sub-categories
    pub const HEIGHT: u16 = 4;

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let controller = &app.controller;
        let locale = controller.locale();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2)])
            .split(area);

        let mut spans = Vec::new();
        for category in Category::ALL {
            let active = controller.category() == Some(category);
            spans.push(chip(category.label(locale), active, theme));
            spans.push(Span::raw(" "));
        }
        // An unrecognised selection is still shown so the empty track makes sense
        if controller.category().is_none() {
            spans.push(Span::styled(
                format!(" {} ", controller.category_id()),
                Style::default().fg(theme.bg0).bg(theme.error),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(theme.bg0)),
            chunks[0],
        );

        let subs = controller
            .category()
            .map(|c| c.sub_categories())
            .unwrap_or_default();
        let line = if subs.is_empty() {
            Line::default()
        } else {
            sub_category_line(&subs, controller.sub_category(), locale, theme)
        };
        frame.render_widget(
            Paragraph::new(line)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(theme.bg0)),
            chunks[1],
        );
    }
}

fn chip(label: &str, active: bool, theme: &Theme) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(theme.bg0)
            .bg(theme.fg0)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg1).bg(theme.bg1)
    };
    Span::styled(format!(" {} ", label.to_uppercase()), style)
}

fn sub_category_line(
    subs: &[SubCategory],
    active: Option<SubCategory>,
    locale: Locale,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(subs.len() * 2);
    for sub in subs {
        let style = if active == Some(*sub) {
            Style::default().fg(theme.fg0).bg(theme.accent)
        } else {
            Style::default().fg(theme.accent)
        };
        spans.push(Span::styled(format!(" {} ", sub.label(locale)), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
