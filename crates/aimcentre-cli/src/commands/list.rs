use std::fmt::Write as _;

use anyhow::Result;
use tracing::warn;

use aimcentre_core::{resolve, AppConfig, CatalogItem, Category, SubCategory};

pub fn run(config: &AppConfig, category_id: &str, sub_id: Option<&str>, json: bool) -> Result<()> {
    let category = Category::from_id(category_id);
    let sub_category = category.and_then(|c| {
        sub_id.and_then(|id| SubCategory::parse(id).filter(|s| s.belongs_to(c)))
    });

    match (category, sub_id) {
        (None, _) => {
            let known: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
            warn!(
                category = category_id,
                known = %known.join(", "),
                "Unknown category, nothing to list"
            );
        }
        (Some(_), Some(id)) if sub_category.is_none() => {
            warn!(
                category = category_id,
                sub_category = id,
                "Not a sub-category of this category, listing all"
            );
        }
        _ => {}
    }

    let items = resolve(category_id, sub_id);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    print!("{}", format_listing(config, category_id, sub_id, &items));
    Ok(())
}

/// Plain-text listing with a heading and one block per course
fn format_listing(
    config: &AppConfig,
    category_id: &str,
    sub_id: Option<&str>,
    items: &[CatalogItem],
) -> String {
    let locale = config.general.locale;
    let category = Category::from_id(category_id);
    let category_label = category
        .map(|c| c.label(locale).to_string())
        .unwrap_or_else(|| category_id.to_string());
    let sub_category = category.and_then(|c| {
        sub_id.and_then(|id| SubCategory::parse(id).filter(|s| s.belongs_to(c)))
    });
    let heading = match sub_category {
        Some(sub) => format!("{} / {}", category_label, sub.label(locale)),
        None => category_label,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} ({} courses)", heading, items.len());
    if items.is_empty() {
        return out;
    }
    out.push('\n');

    for item in items {
        let price = item
            .price
            .map(|p| format!("  {}", p))
            .unwrap_or_default();
        let _ = writeln!(out, "  {} [{}]{}", item.name, item.tag, price);
        let _ = writeln!(out, "    {}", item.description);
        let features = item.headline_features(config.ui.card_features);
        if !features.is_empty() {
            let _ = writeln!(out, "    {}", features.join(" · "));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimcentre_core::Locale;

    #[test]
    fn test_unknown_category_lists_nothing() {
        let config = AppConfig::default();
        let items = resolve("Robotics", None);
        assert!(items.is_empty());
        assert_eq!(
            format_listing(&config, "Robotics", None, &items),
            "Robotics (0 courses)\n"
        );
        assert!(run(&config, "Robotics", Some("Class 1"), false).is_ok());
    }

    #[test]
    fn test_listing_heading_and_prices() {
        let config = AppConfig::default();
        let items = resolve("English Medium", Some("Class 4"));
        let text = format_listing(&config, "English Medium", Some("Class 4"), &items);
        assert!(text.starts_with("English Medium / Class 4 (6 courses)\n"));
        assert!(text.contains("  English Medium Core [Class 4]  ৳4,500/mo"));
    }

    #[test]
    fn test_foreign_sub_category_lists_overview() {
        let mut config = AppConfig::default();
        config.general.locale = Locale::Bn;
        let items = resolve("Special Needs", Some("Class 2"));
        assert_eq!(items.len(), 9);
        let text = format_listing(&config, "Special Needs", Some("Class 2"), &items);
        assert!(text.starts_with("বিশেষ চাহিদা (9 courses)\n"));
    }
}
