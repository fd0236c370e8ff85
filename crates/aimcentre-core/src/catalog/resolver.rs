use tracing::debug;

use super::data::{
    self, StaticItem, CLASS_STEP, GENERAL_BASE, SCIENCE_BASE, SCIENCE_FROM_CLASS,
};
use super::models::{CatalogItem, Category, Price, SubCategory};

/// Resolve a selection given as raw identifiers.
///
/// An unknown category yields an empty list. A sub-category that does not
/// parse or does not belong to the category is treated as no selection.
pub fn resolve(category_id: &str, sub_category_id: Option<&str>) -> Vec<CatalogItem> {
    let Some(category) = Category::from_id(category_id) else {
        debug!(category = category_id, "Unknown category, resolving to empty list");
        return Vec::new();
    };

    let sub_category = sub_category_id.and_then(|id| {
        let parsed = SubCategory::parse(id).filter(|s| s.belongs_to(category));
        if parsed.is_none() {
            debug!(
                category = category_id,
                sub_category = id,
                "Ignoring foreign sub-category"
            );
        }
        parsed
    });

    resolve_category(category, sub_category)
}

/// Resolve a typed selection. Pure: identical inputs give identical lists.
pub fn resolve_category(
    category: Category,
    sub_category: Option<SubCategory>,
) -> Vec<CatalogItem> {
    let sub_category = sub_category.filter(|s| s.belongs_to(category));

    match category {
        Category::EnglishMedium | Category::EnglishVersion | Category::BanglaMedium => {
            match sub_category {
                Some(SubCategory::Class(class)) => class_tracks(category, class),
                _ => academic_overview(category),
            }
        }
        Category::SpecialNeeds => match sub_category {
            Some(SubCategory::AutismLevel(level)) => to_items(data::autism_level(level)),
            _ => (1..=SubCategory::MAX_AUTISM_LEVEL)
                .flat_map(|level| data::autism_level(level).iter().map(StaticItem::to_item))
                .collect(),
        },
        Category::TinyExplorers => to_items(&data::TINY_EXPLORERS),
        Category::Ielts => to_items(&data::IELTS),
        Category::SpokenEnglish => to_items(&data::SPOKEN_ENGLISH),
    }
}

fn to_items(items: &[StaticItem]) -> Vec<CatalogItem> {
    items.iter().map(StaticItem::to_item).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The six tracks offered for a single class
fn class_tracks(category: Category, class: u8) -> Vec<CatalogItem> {
    let class_name = SubCategory::Class(class).id();
    let template = data::academic_features(category);

    let mut core_features = strings(&template[..template.len().min(3)]);
    core_features.push("All Subjects".to_string());

    let track = |track: &str, amount: u32, description: String, features: Vec<String>| CatalogItem {
        name: format!("{} {}", category.id(), track),
        price: Some(Price::monthly(amount)),
        description,
        features,
        tag: class_name.clone(),
    };

    vec![
        track(
            "Core",
            4500,
            format!("Complete {} curriculum covering all major subjects.", class_name),
            core_features,
        ),
        track(
            "Science",
            5000,
            format!("Advanced science focus for {} students.", class_name),
            strings(&["Physics Lab", "Chem Lab", "Bio Lab"]),
        ),
        track(
            "Math Club",
            3000,
            format!("Intensive math problem solving for {}.", class_name),
            strings(&["Geometry", "Algebra", "Calculus Prep"]),
        ),
        track(
            "Arts",
            2500,
            format!("Creative arts and literature program for {}.", class_name),
            strings(&["Painting", "Literature", "Drama"]),
        ),
        track(
            "ICT",
            3500,
            format!("Coding and computer skills for {}.", class_name),
            strings(&["Programming", "Office", "Graphics"]),
        ),
        track(
            "Sports",
            2000,
            "Physical education and team sports.".to_string(),
            strings(&["Football", "Cricket", "Athletics"]),
        ),
    ]
}

/// One general item per class, plus a science variant from class 6 on
fn academic_overview(category: Category) -> Vec<CatalogItem> {
    let template = strings(data::academic_features(category));
    let mut items = Vec::new();

    for class in 1..=SubCategory::MAX_CLASS {
        let class_name = SubCategory::Class(class).id();
        let step = u32::from(class) * CLASS_STEP;

        items.push(CatalogItem {
            name: format!("{} {}", category.id(), class_name),
            price: Some(Price::monthly(GENERAL_BASE + step).ungrouped()),
            description: format!("Full syllabus coverage for {}.", class_name),
            features: template.clone(),
            tag: class_name.clone(),
        });

        if class >= SCIENCE_FROM_CLASS {
            items.push(CatalogItem {
                name: format!("{} Sci {}", category.id(), class_name),
                price: Some(Price::monthly(SCIENCE_BASE + step).ungrouped()),
                description: format!("Science specialization for {}.", class_name),
                features: strings(&["Lab", "Theory", "Practical"]),
                tag: class_name,
            });
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for category in Category::ALL {
            assert_eq!(
                resolve_category(category, None),
                resolve_category(category, None),
                "{category}"
            );
            for sub in category.sub_categories() {
                assert_eq!(
                    resolve_category(category, Some(sub)),
                    resolve_category(category, Some(sub)),
                    "{category} / {sub}"
                );
            }
        }
    }

    #[test]
    fn test_class_selection_gives_six_tagged_tracks() {
        for category in [
            Category::EnglishMedium,
            Category::EnglishVersion,
            Category::BanglaMedium,
        ] {
            let items = resolve_category(category, Some(SubCategory::Class(5)));
            assert_eq!(items.len(), 6);
            assert!(items.iter().all(|i| i.tag == "Class 5"));
            assert_eq!(items[0].name, format!("{} Core", category.id()));
            assert_eq!(items[5].name, format!("{} Sports", category.id()));
        }
    }

    #[test]
    fn test_core_track_uses_category_template() {
        let items = resolve("English Medium", Some("Class 3"));
        assert_eq!(
            items[0].features,
            vec!["Cambridge Curriculum", "Intl. Exams", "Lab Access", "All Subjects"]
        );
        assert_eq!(
            items[0].description,
            "Complete Class 3 curriculum covering all major subjects."
        );
        assert_eq!(items[1].features, vec!["Physics Lab", "Chem Lab", "Bio Lab"]);
        assert_eq!(items[0].price, Some(Price::monthly(4500)));
    }

    #[test]
    fn test_academic_overview_shape_and_prices() {
        let items = resolve_category(Category::BanglaMedium, None);
        assert_eq!(items.len(), 15);

        let (science, general): (Vec<&CatalogItem>, Vec<&CatalogItem>) =
            items.iter().partition(|i| i.name.contains(" Sci "));
        assert_eq!(general.len(), 10);
        assert_eq!(science.len(), 5);

        for (n, item) in (1u32..).zip(&general) {
            assert_eq!(item.tag, format!("Class {}", n));
            assert_eq!(item.price.map(|p| p.amount), Some(3000 + n * 200));
        }
        for (n, item) in (6u32..).zip(&science) {
            assert_eq!(item.tag, format!("Class {}", n));
            assert_eq!(item.price.map(|p| p.amount), Some(3500 + n * 200));
        }

        let amounts: Vec<u32> = general
            .iter()
            .filter_map(|i| i.price)
            .map(|p| p.amount)
            .collect();
        assert!(amounts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_overview_prices_display_plain_digits() {
        let items = resolve("English Medium", None);
        let shown: Vec<String> = items
            .iter()
            .filter_map(|i| i.price)
            .map(|p| p.to_string())
            .collect();
        assert_eq!(shown[0], "৳3200/mo");
        assert_eq!(shown[14], "৳5500/mo");

        let tracks = resolve("English Medium", Some("Class 2"));
        assert_eq!(tracks[0].price.map(|p| p.to_string()).as_deref(), Some("৳4,500/mo"));
    }

    #[test]
    fn test_overview_interleaves_science_after_general() {
        let items = resolve("English Version", None);
        assert_eq!(items[4].name, "English Version Class 5");
        assert_eq!(items[5].name, "English Version Class 6");
        assert_eq!(items[6].name, "English Version Sci Class 6");
        assert_eq!(items[14].name, "English Version Sci Class 10");
    }

    #[test]
    fn test_special_needs_overview_concatenates_levels() {
        let all = resolve_category(Category::SpecialNeeds, None);
        assert_eq!(all.len(), 9);

        let mut expected = Vec::new();
        for sub in Category::SpecialNeeds.sub_categories() {
            expected.extend(resolve_category(Category::SpecialNeeds, Some(sub)));
        }
        assert_eq!(all, expected);
        assert!(all.iter().all(|i| i.price.is_none()));
    }

    #[test]
    fn test_special_needs_level() {
        let items = resolve("Special Needs", Some("Autism Level 2"));
        assert_eq!(
            names(&items),
            vec!["Behavioral Support", "Life Skills", "Sensory Integration"]
        );
        assert!(items.iter().all(|i| i.tag == "Level 2"));
    }

    #[test]
    fn test_fixed_catalogs_ignore_sub_category() {
        let ielts = resolve("IELTS", None);
        assert_eq!(ielts.len(), 5);
        assert_eq!(resolve("IELTS", Some("Class 3")), ielts);
        assert_eq!(ielts[0].price.map(|p| p.to_string()).as_deref(), Some("৳10,000"));

        assert_eq!(resolve("Tiny Explorers", None).len(), 5);
        assert_eq!(resolve("Spoken English", Some("Autism Level 1")).len(), 5);
    }

    #[test]
    fn test_foreign_sub_category_is_ignored() {
        assert_eq!(
            resolve("English Medium", Some("Autism Level 1")),
            resolve("English Medium", None)
        );
        assert_eq!(
            resolve("Special Needs", Some("Class 4")),
            resolve("Special Needs", None)
        );
        assert_eq!(
            resolve("Bangla Medium", Some("Class 42")),
            resolve("Bangla Medium", None)
        );
    }

    #[test]
    fn test_out_of_range_typed_sub_category_is_ignored() {
        assert_eq!(
            resolve_category(Category::SpecialNeeds, Some(SubCategory::AutismLevel(4))),
            resolve_category(Category::SpecialNeeds, None)
        );
        assert_eq!(
            resolve_category(Category::SpecialNeeds, Some(SubCategory::AutismLevel(0))).len(),
            9
        );
        assert_eq!(
            resolve_category(Category::EnglishMedium, Some(SubCategory::Class(11))),
            resolve_category(Category::EnglishMedium, None)
        );
        assert_eq!(
            resolve_category(Category::BanglaMedium, Some(SubCategory::Class(0))).len(),
            15
        );
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(resolve("Robotics", None).is_empty());
        assert!(resolve("", Some("Class 1")).is_empty());
    }
}
