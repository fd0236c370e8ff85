use anyhow::Result;

use aimcentre_core::{AppConfig, Category};

pub fn run(config: &AppConfig) -> Result<()> {
    let locale = config.general.locale;

    for category in Category::ALL {
        let marker = if category.id() == config.general.default_category {
            " (default)"
        } else {
            ""
        };
        println!("{}{}", category.label(locale), marker);

        let subs = category.sub_categories();
        if !subs.is_empty() {
            let labels: Vec<String> = subs.iter().map(|s| s.label(locale)).collect();
            println!("  {}", labels.join(", "));
        }
    }

    Ok(())
}
