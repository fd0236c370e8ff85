use aimcentre_core::{CatalogItem, Locale};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::truncate_to_width;
use crate::input::Action;
use crate::keymap::{describe_binding, Keymap};
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the enrollment dialog for a course
    pub fn render_enroll(frame: &mut Frame, item: &CatalogItem, locale: Locale, theme: &Theme) {
        let area = frame.area();

        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = 10u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let title = match locale {
            Locale::En => " Enroll ",
            Locale::Bn => " ভর্তি ",
        };
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Course name
                Constraint::Length(1), // Tag and price
                Constraint::Length(1), // Spacer
                Constraint::Min(2),    // Description
                Constraint::Length(1), // Hint
            ])
            .split(inner_area);

        let width = inner_area.width as usize;
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                truncate_to_width(&item.name, width),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[0],
        );

        let price = match item.price {
            Some(price) => price.to_string(),
            None => match locale {
                Locale::En => "Pricing on consultation".to_string(),
                Locale::Bn => "পরামর্শ সাপেক্ষে মূল্য".to_string(),
            },
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(item.tag.to_uppercase(), Style::default().fg(theme.tag)),
                Span::styled("  ·  ", Style::default().fg(theme.grey1)),
                Span::styled(price, Style::default().fg(theme.price).add_modifier(Modifier::BOLD)),
            ]))
            .alignment(Alignment::Center),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(item.description.as_str())
                .style(Style::default().fg(theme.fg1))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[3],
        );

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(theme.grey1)),
            Span::styled(
                "Enter",
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            ),
            Span::styled("] confirm  [", Style::default().fg(theme.grey1)),
            Span::styled(
                "Esc",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ),
            Span::styled("] close", Style::default().fg(theme.grey1)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[4]);
    }

    /// Render the key binding overview
    pub fn render_help(frame: &mut Frame, keymap: &Keymap, theme: &Theme) {
        let area = frame.area();
        let entries = help_entries(keymap);

        let popup_width = 48u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines: Vec<Line> = entries
            .into_iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<16}", keys),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Press any key to close",
            Style::default().fg(theme.grey1),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Bound keys and what they do, in display order
fn help_entries(keymap: &Keymap) -> Vec<(String, &'static str)> {
    const ACTIONS: [(Action, &str); 13] = [
        (Action::NextCategory, "Next category"),
        (Action::PrevCategory, "Previous category"),
        (Action::NextSubCategory, "Next class / level"),
        (Action::PrevSubCategory, "Previous class / level"),
        (Action::ClearSubCategory, "Show all in category"),
        (Action::PageRight, "Page right"),
        (Action::PageLeft, "Page left"),
        (Action::TogglePause, "Pause / resume"),
        (Action::Enroll, "Enroll in focused course"),
        (Action::ToggleWishlist, "Toggle wishlist"),
        (Action::ToggleLocale, "Switch language"),
        (Action::Help, "This help"),
        (Action::Quit, "Quit"),
    ];

    ACTIONS
        .iter()
        .filter_map(|(action, description)| {
            let keys = keymap.keys_for(*action);
            if keys.is_empty() {
                return None;
            }
            let keys: Vec<String> = keys.iter().map(describe_binding).collect();
            Some((keys.join(" "), *description))
        })
        .collect()
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
