mod carousel;
mod category_bar;
mod header;
mod popup;
mod status_bar;

pub use carousel::CarouselWidget;
pub use category_bar::CategoryBarWidget;
pub use header::HeaderWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `width` display columns, ending in "…" when cut
pub(crate) fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap by display width, at most `max_lines` lines.
/// The last line is truncated if text remains.
pub(crate) fn wrap_to_width(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if candidate.width() <= width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        let rest = lines.split_off(max_lines.saturating_sub(1)).join(" ");
        if max_lines > 0 {
            lines.push(truncate_to_width(&format!("{}…", rest), width));
        }
    }
    lines
        .into_iter()
        .map(|line| truncate_to_width(&line, width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Express Prep", 20), "Express Prep");
        assert_eq!(truncate_to_width("Express Prep", 8), "Express…");
        assert_eq!(truncate_to_width("abc", 0), "");
        // Bengali digits are single-width
        assert_eq!(truncate_to_width("শ্রেণি ১", 40), "শ্রেণি ১");
    }

    #[test]
    fn test_wrap_to_width() {
        let lines = wrap_to_width("Intensive 1-month crash course for quick improvement.", 20, 3);
        assert_eq!(lines, vec!["Intensive 1-month", "crash course for", "quick improvement."]);
        assert!(lines.iter().all(|l| l.width() <= 20));
    }

    #[test]
    fn test_wrap_truncates_overflow() {
        let lines = wrap_to_width("one two three four five six", 9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "one two");
        assert!(lines[1].ends_with('…'));
        assert!(lines[1].width() <= 9);
    }
}
