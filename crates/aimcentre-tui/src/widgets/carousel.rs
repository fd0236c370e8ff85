use aimcentre_core::{CatalogItem, Locale};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{truncate_to_width, wrap_to_width};
use crate::app::App;
use crate::theme::Theme;

/// Description lines reserved on every card
const DESCRIPTION_LINES: usize = 3;

/// Horizontal course track.
///
/// Cards sit at `index * card_pitch` pixels along the track; the engine
/// offset is subtracted and pixels become columns at
/// `card_columns / card_width_px`. Cards cut by either edge are drawn
/// partially, so the track moves smoothly a column at a time.
pub struct CarouselWidget;

impl CarouselWidget {
    /// Rows one card occupies for a given feature count
    pub fn card_height(features: usize) -> u16 {
        // borders, tag row, name, enroll row and three spacer rows
        (8 + DESCRIPTION_LINES + features) as u16
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let controller = &app.controller;
        let buffer = controller.buffer();

        if buffer.is_empty() {
            let message = format!("No courses listed under \"{}\"", controller.category_id());
            let paragraph = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(theme.grey1),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
            return;
        }

        let carousel = &app.config.carousel;
        let pitch = carousel.card_pitch();
        let px_per_column = app.px_per_column();
        if pitch <= 0.0 || px_per_column <= 0.0 || area.width == 0 {
            return;
        }

        let columns_per_px = 1.0 / px_per_column;
        let card_columns = app.config.ui.card_columns.max(1);
        let features = app.config.ui.card_features;
        let height = Self::card_height(features).min(area.height);
        let offset = controller.offset();
        let focused = controller.focused_index();
        let right_edge = i32::from(area.width);

        let mut visual = (offset / pitch).floor().max(0.0) as usize;
        loop {
            let start_px = visual as f64 * pitch - offset;
            let start_col = (start_px * columns_per_px).round() as i32;
            if start_col >= right_edge {
                break;
            }
            let end_col = start_col + i32::from(card_columns);
            if end_col > 0 {
                let Some(item) = buffer.item_at(visual) else {
                    break;
                };
                let clip_left = (-start_col).max(0) as u16;
                let x = area.x + start_col.max(0) as u16;
                let width = (card_columns - clip_left).min(area.x + area.width - x);
                let card_area = Rect::new(x, area.y, width, height);

                let card = CardView {
                    item,
                    locale: controller.locale(),
                    focused: buffer.source_index(visual) == focused,
                    wishlisted: controller.is_wishlisted(item),
                    features,
                };
                let paragraph = Paragraph::new(card.lines(theme, usize::from(card_columns)))
                    .style(Style::default().bg(theme.bg0))
                    .scroll((0, clip_left));
                frame.render_widget(paragraph, card_area);
            }
            visual += 1;
        }
    }
}

/// One card's content, laid out as bordered text lines
struct CardView<'a> {
    item: &'a CatalogItem,
    locale: Locale,
    focused: bool,
    wishlisted: bool,
    features: usize,
}

impl CardView<'_> {
    fn lines(&self, theme: &Theme, width: usize) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(4);
        let border = if self.focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey0)
        };
        let card_bg = if self.focused { theme.selection } else { theme.bg1 };
        let text = Style::default().bg(card_bg);

        let mut lines = Vec::new();
        lines.push(edge('╭', '╮', width, border));

        // Tag on the left; price and wishlist marker on the right
        let heart = if self.wishlisted {
            Span::styled("♥", text.fg(theme.wishlist))
        } else {
            Span::styled("♡", text.fg(theme.grey1))
        };
        let mut right = Vec::new();
        if let Some(price) = self.item.price {
            right.push(Span::styled(
                price.to_string(),
                text.fg(theme.price).add_modifier(Modifier::BOLD),
            ));
            right.push(Span::styled(" ", text));
        }
        right.push(heart);
        let right_width: usize = right.iter().map(|s| s.width()).sum();
        let tag_width = inner.saturating_sub(right_width + 1);
        let mut top = vec![Span::styled(
            truncate_to_width(&self.item.tag.to_uppercase(), tag_width),
            text.fg(theme.tag).add_modifier(Modifier::BOLD),
        )];
        let used = top[0].width() + right_width;
        top.push(Span::styled(" ".repeat(inner.saturating_sub(used)), text));
        top.extend(right);
        lines.push(row(top, inner, border, text));

        lines.push(row(Vec::new(), inner, border, text));
        lines.push(row(
            vec![Span::styled(
                truncate_to_width(&self.item.name.to_uppercase(), inner),
                text.fg(theme.fg0).add_modifier(Modifier::BOLD),
            )],
            inner,
            border,
            text,
        ));

        let description = wrap_to_width(&self.item.description, inner, DESCRIPTION_LINES);
        for i in 0..DESCRIPTION_LINES {
            let spans = description
                .get(i)
                .map(|l| vec![Span::styled(l.clone(), text.fg(theme.fg1))])
                .unwrap_or_default();
            lines.push(row(spans, inner, border, text));
        }

        lines.push(row(Vec::new(), inner, border, text));
        let headline = self.item.headline_features(self.features);
        for i in 0..self.features {
            let spans = headline
                .get(i)
                .map(|f| {
                    vec![
                        Span::styled("✓ ", text.fg(theme.accent)),
                        Span::styled(
                            truncate_to_width(f, inner.saturating_sub(2)),
                            text.fg(theme.fg1),
                        ),
                    ]
                })
                .unwrap_or_default();
            lines.push(row(spans, inner, border, text));
        }

        lines.push(row(Vec::new(), inner, border, text));
        let enroll = match self.locale {
            Locale::En => "Enroll Now →",
            Locale::Bn => "ভর্তি হন →",
        };
        let enroll_style = if self.focused {
            text.fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            text.fg(theme.fg0)
        };
        lines.push(row(
            vec![Span::styled(truncate_to_width(enroll, inner), enroll_style)],
            inner,
            border,
            text,
        ));

        lines.push(edge('╰', '╯', width, border));
        lines
    }
}

fn edge(left: char, right: char, width: usize, style: Style) -> Line<'static> {
    let middle = "─".repeat(width.saturating_sub(2));
    Line::from(Span::styled(format!("{}{}{}", left, middle, right), style))
}

/// Bordered content row padded to the inner width
fn row(content: Vec<Span<'static>>, inner: usize, border: Style, fill: Style) -> Line<'static> {
    let used: usize = content.iter().map(|s| s.width()).sum();
    let mut spans = Vec::with_capacity(content.len() + 3);
    spans.push(Span::styled("│ ", border));
    spans.extend(content);
    spans.push(Span::styled(" ".repeat(inner.saturating_sub(used)), fill));
    spans.push(Span::styled(" │", border));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimcentre_core::resolve;
    use unicode_width::UnicodeWidthStr;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_lines_have_uniform_width() {
        let theme = Theme::default();
        let ielts = resolve("IELTS", None);
        let tracks = resolve("Bangla Medium", Some("Class 7"));
        for item in ielts.iter().chain(tracks.iter()) {
            for locale in [Locale::En, Locale::Bn] {
                let card = CardView {
                    item,
                    locale,
                    focused: false,
                    wishlisted: true,
                    features: 3,
                };
                let lines = card.lines(&theme, 36);
                assert_eq!(lines.len(), usize::from(CarouselWidget::card_height(3)));
                for line in &lines {
                    assert_eq!(line_text(line).width(), 36, "{:?}", line_text(line));
                }
            }
        }
    }

    #[test]
    fn test_card_shows_price_and_marker() {
        let theme = Theme::default();
        let items = resolve("IELTS", None);
        let card = CardView {
            item: &items[0],
            locale: Locale::En,
            focused: true,
            wishlisted: true,
            features: 3,
        };
        let lines = card.lines(&theme, 36);
        let top = line_text(&lines[1]);
        assert!(top.contains("1 MONTH"));
        assert!(top.contains("৳10,000"));
        assert!(top.contains('♥'));
        assert!(line_text(&lines[3]).contains("EXPRESS PREP"));
        assert!(line_text(&lines[8]).contains("✓ Mock Tests"));
    }

    #[test]
    fn test_unpriced_card_has_no_price() {
        let theme = Theme::default();
        let items = resolve("Special Needs", Some("Autism Level 3"));
        let card = CardView {
            item: &items[2],
            locale: Locale::En,
            focused: false,
            wishlisted: false,
            features: 2,
        };
        let lines = card.lines(&theme, 30);
        assert!(!line_text(&lines[1]).contains('৳'));
        assert!(line_text(&lines[1]).contains('♡'));
        assert_eq!(lines.len(), usize::from(CarouselWidget::card_height(2)));
    }
}
