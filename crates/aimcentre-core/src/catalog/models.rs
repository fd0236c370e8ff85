use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label language. Only affects display text, never list shape or order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Bn,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bn => "bn",
        }
    }

    /// The other supported language
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Bn,
            Locale::Bn => Locale::En,
        }
    }
}

impl FromStr for Locale {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "bn" => Ok(Locale::Bn),
            other => Err(crate::Error::UnknownLocale(other.to_string())),
        }
    }
}

/// Top-level course grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    EnglishMedium,
    EnglishVersion,
    BanglaMedium,
    TinyExplorers,
    SpecialNeeds,
    Ielts,
    SpokenEnglish,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::EnglishMedium,
        Category::EnglishVersion,
        Category::BanglaMedium,
        Category::TinyExplorers,
        Category::SpecialNeeds,
        Category::Ielts,
        Category::SpokenEnglish,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::EnglishMedium => "English Medium",
            Category::EnglishVersion => "English Version",
            Category::BanglaMedium => "Bangla Medium",
            Category::TinyExplorers => "Tiny Explorers",
            Category::SpecialNeeds => "Special Needs",
            Category::Ielts => "IELTS",
            Category::SpokenEnglish => "Spoken English",
        }
    }

    /// Look up a category by its exact identifier
    pub fn from_id(id: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (_, Locale::En) | (Category::Ielts, _) => self.id(),
            (Category::EnglishMedium, Locale::Bn) => "ইংরেজি মাধ্যম",
            (Category::EnglishVersion, Locale::Bn) => "ইংরেজি ভার্সন",
            (Category::BanglaMedium, Locale::Bn) => "বাংলা মিডিয়াম",
            (Category::TinyExplorers, Locale::Bn) => "খুদে অভিযাত্রী",
            (Category::SpecialNeeds, Locale::Bn) => "বিশেষ চাহিদা",
            (Category::SpokenEnglish, Locale::Bn) => "স্পোকেন ইংলিশ",
        }
    }

    /// Academic categories synthesize their items per class
    pub fn is_academic(&self) -> bool {
        matches!(
            self,
            Category::EnglishMedium | Category::EnglishVersion | Category::BanglaMedium
        )
    }

    /// Sub-categories scoped to this category, in display order
    pub fn sub_categories(&self) -> Vec<SubCategory> {
        if self.is_academic() {
            (1..=SubCategory::MAX_CLASS).map(SubCategory::Class).collect()
        } else if *self == Category::SpecialNeeds {
            (1..=SubCategory::MAX_AUTISM_LEVEL)
                .map(SubCategory::AutismLevel)
                .collect()
        } else {
            Vec::new()
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| crate::Error::UnknownCategory(s.to_string()))
    }
}

/// Secondary filter scoped to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubCategory {
    /// "Class N" for academic categories
    Class(u8),
    /// "Autism Level N" for Special Needs
    AutismLevel(u8),
}

impl SubCategory {
    pub const MAX_CLASS: u8 = 10;
    pub const MAX_AUTISM_LEVEL: u8 = 3;

    /// Parse an identifier such as "Class 5" or "Autism Level 2".
    ///
    /// Only the canonical spelling is accepted, so the parsed value's
    /// `id()` always equals the input.
    pub fn parse(id: &str) -> Option<SubCategory> {
        let sub = if let Some(n) = id.strip_prefix("Class ") {
            SubCategory::Class(canonical_number(n)?)
        } else if let Some(n) = id.strip_prefix("Autism Level ") {
            SubCategory::AutismLevel(canonical_number(n)?)
        } else {
            return None;
        };
        sub.in_range().then_some(sub)
    }

    pub fn id(&self) -> String {
        match self {
            SubCategory::Class(n) => format!("Class {}", n),
            SubCategory::AutismLevel(n) => format!("Autism Level {}", n),
        }
    }

    pub fn label(&self, locale: Locale) -> String {
        match (self, locale) {
            (SubCategory::Class(n), Locale::Bn) => format!("শ্রেণি {}", bengali_digits(*n as u32)),
            _ => self.id(),
        }
    }

    /// Whether the number lies within the offered classes or levels
    fn in_range(&self) -> bool {
        match *self {
            SubCategory::Class(n) => (1..=Self::MAX_CLASS).contains(&n),
            SubCategory::AutismLevel(n) => (1..=Self::MAX_AUTISM_LEVEL).contains(&n),
        }
    }

    /// Whether this value is one of `category.sub_categories()`
    pub fn belongs_to(&self, category: Category) -> bool {
        let kind = match self {
            SubCategory::Class(_) => category.is_academic(),
            SubCategory::AutismLevel(_) => category == Category::SpecialNeeds,
        };
        kind && self.in_range()
    }
}

/// Parse plain decimal digits with no sign or leading zero
fn canonical_number(s: &str) -> Option<u8> {
    let n: u8 = s.parse().ok()?;
    (n.to_string() == s).then_some(n)
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// Render a number with Bengali digits
fn bengali_digits(n: u32) -> String {
    const DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGITS[d as usize])
        .collect()
}

/// Billing period of a price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePeriod {
    Monthly,
    OneTime,
}

/// Price in Bangladeshi taka
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: u32,
    pub period: PricePeriod,
    /// Display the amount with thousands separators
    #[serde(skip, default = "default_grouped")]
    pub grouped: bool,
}

fn default_grouped() -> bool {
    true
}

impl Price {
    pub const fn monthly(amount: u32) -> Self {
        Self {
            amount,
            period: PricePeriod::Monthly,
            grouped: true,
        }
    }

    pub const fn one_time(amount: u32) -> Self {
        Self {
            amount,
            period: PricePeriod::OneTime,
            grouped: true,
        }
    }

    /// Same price, displayed as plain digits ("৳3200/mo")
    pub const fn ungrouped(self) -> Self {
        Self {
            grouped: false,
            ..self
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.amount.to_string();
        if !self.grouped {
            return match self.period {
                PricePeriod::Monthly => write!(f, "৳{}/mo", digits),
                PricePeriod::OneTime => write!(f, "৳{}", digits),
            };
        }
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        match self.period {
            PricePeriod::Monthly => write!(f, "৳{}/mo", grouped),
            PricePeriod::OneTime => write!(f, "৳{}", grouped),
        }
    }
}

/// A single displayable course entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    pub description: String,
    pub features: Vec<String>,
    pub tag: String,
}

impl CatalogItem {
    /// Features shown on a card (at most `limit`)
    pub fn headline_features(&self, limit: usize) -> &[String] {
        &self.features[..self.features.len().min(limit)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id("ielts"), None);
        assert!("Robotics".parse::<Category>().is_err());
    }

    #[test]
    fn test_sub_category_parse() {
        assert_eq!(SubCategory::parse("Class 5"), Some(SubCategory::Class(5)));
        assert_eq!(SubCategory::parse("Class 10"), Some(SubCategory::Class(10)));
        assert_eq!(SubCategory::parse("Class 11"), None);
        assert_eq!(SubCategory::parse("Class 0"), None);
        assert_eq!(
            SubCategory::parse("Autism Level 2"),
            Some(SubCategory::AutismLevel(2))
        );
        assert_eq!(SubCategory::parse("Autism Level 4"), None);
        assert_eq!(SubCategory::parse("Level 1"), None);
    }

    #[test]
    fn test_sub_category_parse_requires_canonical_digits() {
        for id in ["Class 05", "Class +5", "Class  5", "Class 5 ", "Autism Level 01"] {
            assert_eq!(SubCategory::parse(id), None, "{id:?}");
        }
        for sub in Category::EnglishMedium
            .sub_categories()
            .into_iter()
            .chain(Category::SpecialNeeds.sub_categories())
        {
            assert_eq!(SubCategory::parse(&sub.id()), Some(sub));
        }
    }

    #[test]
    fn test_sub_category_scope() {
        assert_eq!(Category::EnglishMedium.sub_categories().len(), 10);
        assert_eq!(Category::SpecialNeeds.sub_categories().len(), 3);
        assert!(Category::Ielts.sub_categories().is_empty());
        assert!(SubCategory::Class(3).belongs_to(Category::BanglaMedium));
        assert!(!SubCategory::Class(3).belongs_to(Category::SpecialNeeds));
        assert!(!SubCategory::AutismLevel(1).belongs_to(Category::TinyExplorers));
    }

    #[test]
    fn test_out_of_range_values_do_not_belong() {
        assert!(!SubCategory::Class(0).belongs_to(Category::EnglishMedium));
        assert!(!SubCategory::Class(11).belongs_to(Category::EnglishMedium));
        assert!(!SubCategory::AutismLevel(0).belongs_to(Category::SpecialNeeds));
        assert!(!SubCategory::AutismLevel(4).belongs_to(Category::SpecialNeeds));
        assert!(SubCategory::Class(10).belongs_to(Category::EnglishVersion));
        assert!(SubCategory::AutismLevel(3).belongs_to(Category::SpecialNeeds));
    }

    #[test]
    fn test_localized_labels() {
        assert_eq!(Category::Ielts.label(Locale::Bn), "IELTS");
        assert_eq!(Category::SpecialNeeds.label(Locale::Bn), "বিশেষ চাহিদা");
        assert_eq!(SubCategory::Class(1).label(Locale::Bn), "শ্রেণি ১");
        assert_eq!(SubCategory::Class(10).label(Locale::Bn), "শ্রেণি ১০");
        assert_eq!(SubCategory::AutismLevel(3).label(Locale::Bn), "Autism Level 3");
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::monthly(4500).to_string(), "৳4,500/mo");
        assert_eq!(Price::monthly(3200).ungrouped().to_string(), "৳3200/mo");
        assert_eq!(Price::one_time(12000).ungrouped().to_string(), "৳12000");
        assert_eq!(Price::one_time(10000).to_string(), "৳10,000");
        assert_eq!(Price::one_time(800).to_string(), "৳800");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("bn".parse::<Locale>().unwrap(), Locale::Bn);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::En.toggled(), Locale::Bn);
    }
}
